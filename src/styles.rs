//! Scoped stylesheet class lookup
//!
//! Class names are scoped per stylesheet module so that generic logical
//! names like `shares` cannot collide with classes of the surrounding site.

/// Stylesheet of the share list component.
pub const BLOG_SHARE: Stylesheet = Stylesheet::new("BlogShare");

/// Stylesheet module identified by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylesheet {
    module: &'static str,
}

impl Stylesheet {
    pub const fn new(module: &'static str) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Resolves logical class name to concrete scoped class.
    ///
    /// # Arguments
    ///
    /// * `logical`: Class name as written in the stylesheet source
    ///
    /// # Returns
    ///
    /// Class name in the form `<module>_<logical>`
    pub fn class(&self, logical: &str) -> String {
        format!("{}_{}", self.module, logical)
    }
}
