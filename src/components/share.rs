//! Share link list component

use maud::{Markup, html};

use super::image::social_image;
use crate::share::{PostShareInfo, ShareOptions, ShareTarget, share_targets};
use crate::styles::Stylesheet;

/// Renders share targets as links wrapping network icons
///
/// Each link opens in a new browsing context so the post stays open.
/// Targets are rendered in the given order inside a single inline
/// container styled by the stylesheet's `shares` class.
///
/// # Arguments
///
/// * `targets`: Share targets in display order
/// * `stylesheet`: Stylesheet providing the container class
///
/// # Returns
///
/// Inline container with one anchor per target
pub fn share_list(targets: &[ShareTarget], stylesheet: &Stylesheet) -> Markup {
    html! {
        span class=(stylesheet.class("shares")) {
            @for target in targets {
                @let network = target.network();
                a class="share"
                    href=(target.href())
                    target="_blank"
                    rel="noopener noreferrer"
                    title=(format!("Share on {}", network)) {
                    (social_image(&format!("{} logo", network), target.icon_path()))
                }
            }
        }
    }
}

/// Renders share links for a post
///
/// Builds the share targets and renders them with the share list
/// stylesheet.
pub fn blog_share(info: &PostShareInfo, options: &ShareOptions) -> Markup {
    share_list(&share_targets(info, options), &crate::styles::BLOG_SHARE)
}
