//! Share-intent links for blog posts, rendered as static HTML.

mod assets;
pub mod components;
mod config;
pub mod share;
pub mod styles;

pub use assets::{BLOG_SHARE_CSS, blog_share_css, write_css_assets};
pub use components::share::{blog_share, share_list};
pub use config::Config;
pub use share::{
    DEFAULT_AUTHOR_HANDLE, Network, PostShareInfo, ShareOptions, ShareTarget, linkedin_href,
    share_targets, twitter_href,
};
pub use styles::Stylesheet;
