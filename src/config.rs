//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::share::{DEFAULT_AUTHOR_HANDLE, PostShareInfo, ShareOptions};

/// Command line configuration for blogshare.
#[derive(Debug, Clone, Parser)]
#[command(name = "blogshare", version, about, long_about = None)]
pub struct Config {
    /// Post title
    #[arg(long)]
    pub title: String,

    /// Post description
    #[arg(long)]
    pub description: String,

    /// Absolute URL of the post
    #[arg(long)]
    pub url: Url,

    /// Handle credited in the Twitter share text (without @)
    #[arg(long, default_value = DEFAULT_AUTHOR_HANDLE)]
    pub author: String,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a complete preview page with its stylesheet
    #[arg(long)]
    pub page: bool,

    /// Open the written file in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `--page` or `--open` is given without `--output`.
    pub fn validate(&self) -> Result<()> {
        if self.output.is_none() {
            if self.page {
                bail!("--page requires --output");
            }
            if self.open {
                bail!("--open requires --output");
            }
        }

        Ok(())
    }

    /// Returns post metadata from configuration.
    pub fn share_info(&self) -> PostShareInfo {
        PostShareInfo::new(&self.title, &self.description, self.url.clone())
    }

    /// Returns share options from configuration.
    pub fn share_options(&self) -> ShareOptions {
        ShareOptions {
            author_handle: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            title: "Hello World".to_string(),
            description: "A first post".to_string(),
            url: Url::parse("https://example.com/posts/hello").unwrap(),
            author: DEFAULT_AUTHOR_HANDLE.to_string(),
            output: None,
            page: false,
            open: false,
        }
    }

    #[test]
    fn test_parse_from_args() {
        // Arrange
        let args = [
            "blogshare",
            "--title",
            "Hello World",
            "--description",
            "A first post",
            "--url",
            "https://example.com/posts/hello",
        ];

        // Act
        let config = Config::try_parse_from(args).unwrap();

        // Assert
        assert_eq!(config.title, "Hello World");
        assert_eq!(config.url.as_str(), "https://example.com/posts/hello");
        assert_eq!(config.author, "JoshuaKGoldberg", "Default author handle");
        assert!(config.output.is_none());
        assert!(!config.page);
    }

    #[test]
    fn test_parse_rejects_relative_url() {
        // Arrange
        let args = [
            "blogshare",
            "--title",
            "t",
            "--description",
            "d",
            "--url",
            "/posts/hello",
        ];

        // Act
        let result = Config::try_parse_from(args);

        // Assert
        assert!(result.is_err(), "Relative URL should be rejected");
    }

    #[test]
    fn test_parse_requires_title() {
        // Arrange & Act
        let result = Config::try_parse_from([
            "blogshare",
            "--description",
            "d",
            "--url",
            "https://example.com/",
        ]);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_stdout_output() {
        // Arrange & Act & Assert
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_page_requires_output() {
        // Arrange
        let config = Config {
            page: true,
            ..base_config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--page"));
    }

    #[test]
    fn test_validate_open_requires_output() {
        // Arrange
        let config = Config {
            open: true,
            ..base_config()
        };

        // Act & Assert
        assert!(config.validate().is_err());

        let config = Config {
            open: true,
            output: Some(PathBuf::from("share.html")),
            ..base_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_share_info_and_options() {
        // Arrange
        let config = Config {
            author: "someone".to_string(),
            ..base_config()
        };

        // Act
        let info = config.share_info();
        let options = config.share_options();

        // Assert
        assert_eq!(info.title, "Hello World");
        assert_eq!(info.description, "A first post");
        assert_eq!(info.url, config.url);
        assert_eq!(options.author_handle, "someone");
    }
}
