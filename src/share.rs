//! Share-intent link construction
//!
//! Builds the ordered list of share targets for a blog post. Each target
//! carries a fully formed share-intent URL for one social network and the
//! path of the icon shown for it.

use std::fmt;

use url::Url;

/// Author handle credited in the Twitter share text.
pub const DEFAULT_AUTHOR_HANDLE: &str = "JoshuaKGoldberg";

/// Separator between lines of the Twitter share text (two encoded newlines).
const LINE_SEPARATOR: &str = "%0a%0a";

const LINKEDIN_SHARE_URL: &str = "https://linkedin.com/sharing/share-offsite/";
const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Social network a post can be shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    LinkedIn,
    Twitter,
}

impl Network {
    /// Networks in render order.
    pub const ALL: [Network; 2] = [Network::LinkedIn, Network::Twitter];

    /// Display name used in titles and alt text.
    pub fn name(self) -> &'static str {
        match self {
            Network::LinkedIn => "LinkedIn",
            Network::Twitter => "Twitter",
        }
    }

    /// Site relative path of the network logo.
    pub fn icon_path(self) -> &'static str {
        match self {
            Network::LinkedIn => "/icons/linkedin.svg",
            Network::Twitter => "/icons/twitter.svg",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Post metadata read when building share links.
///
/// Owned by the page rendering the post. Title and description are display
/// strings and are not validated; empty values produce degenerate but
/// well formed links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostShareInfo {
    pub title: String,
    pub description: String,
    pub url: Url,
}

impl PostShareInfo {
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: Url) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url,
        }
    }
}

/// Options shared by every share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOptions {
    /// Handle (without `@`) named in the Twitter attribution suffix.
    pub author_handle: String,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            author_handle: DEFAULT_AUTHOR_HANDLE.to_string(),
        }
    }
}

/// Single share destination for a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    network: Network,
    href: String,
    icon_path: &'static str,
}

impl ShareTarget {
    pub fn network(&self) -> Network {
        self.network
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn icon_path(&self) -> &str {
        self.icon_path
    }
}

/// Builds share targets for a post.
///
/// Always returns one target per entry of [`Network::ALL`], in that order.
///
/// # Arguments
///
/// * `info`: Post title, description and absolute URL
/// * `options`: Attribution settings
///
/// # Returns
///
/// LinkedIn target followed by Twitter target
pub fn share_targets(info: &PostShareInfo, options: &ShareOptions) -> [ShareTarget; 2] {
    Network::ALL.map(|network| ShareTarget {
        network,
        href: share_href(network, info, options),
        icon_path: network.icon_path(),
    })
}

fn share_href(network: Network, info: &PostShareInfo, options: &ShareOptions) -> String {
    match network {
        Network::LinkedIn => linkedin_href(&info.url),
        Network::Twitter => twitter_href(info, options),
    }
}

/// Builds LinkedIn share-offsite URL for a post URL.
pub fn linkedin_href(url: &Url) -> String {
    format!(
        "{}?url={}",
        LINKEDIN_SHARE_URL,
        urlencoding::encode(url.as_str())
    )
}

/// Builds Twitter tweet intent URL with prefilled text.
///
/// The text has three lines joined by encoded blank lines: the title behind
/// a memo emoji, the quoted description with attribution, and an empty line
/// that leaves a trailing separator. Each line is percent encoded on its own
/// and the separator is inserted verbatim.
pub fn twitter_href(info: &PostShareInfo, options: &ShareOptions) -> String {
    let lines = [
        format!("📝 {}", info.title),
        format!(
            "\"{}\" - by @{}",
            info.description, options.author_handle
        ),
        String::new(),
    ];

    let text = lines
        .iter()
        .map(|line| urlencoding::encode(line))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR);

    format!(
        "{}?text={}&url={}",
        TWITTER_INTENT_URL,
        text,
        urlencoding::encode(info.url.as_str())
    )
}
