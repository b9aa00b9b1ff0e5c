//! Reusable HTML components
//!
//! Maud component functions for rendering share links. The share list is
//! the entry point; the image and layout components are the pieces it and
//! the preview page are assembled from.

pub mod image;
pub mod layout;
pub mod share;
