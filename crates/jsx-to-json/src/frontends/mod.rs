//! Markup frontends
//!
//! Implementations of the `MarkupFrontend` trait.

pub mod oxc;

pub use oxc::OxcFrontend;
