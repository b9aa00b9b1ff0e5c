//! Social icon image component

use maud::{Markup, html};

/// Rendered edge length of social icons in pixels.
const ICON_SIZE: u32 = 24;

/// Renders social network icon image
///
/// # Arguments
///
/// * `alt`: Alternative text describing the icon
/// * `src`: Image source path
///
/// # Returns
///
/// Lazily loaded image element with fixed dimensions
pub fn social_image(alt: &str, src: &str) -> Markup {
    html! {
        img class="social-image" alt=(alt) src=(src) width=(ICON_SIZE) height=(ICON_SIZE) loading="lazy";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_image_attributes() {
        // Arrange & Act
        let html = social_image("LinkedIn logo", "/icons/linkedin.svg").into_string();

        // Assert
        assert!(html.starts_with("<img"));
        assert!(html.contains(r#"alt="LinkedIn logo""#));
        assert!(html.contains(r#"src="/icons/linkedin.svg""#));
        assert!(html.contains(r#"width="24""#));
        assert!(html.contains(r#"height="24""#));
    }

    #[test]
    fn test_social_image_escapes_alt() {
        // Arrange & Act
        let html = social_image(r#"say "hi""#, "/x.svg").into_string();

        // Assert
        assert!(html.contains("say &quot;hi&quot;"));
    }
}
