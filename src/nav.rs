//! Page navigation module.
//!
//! This module provides the navigation description and its renderers.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "nav")]
//! # {
//! use pagewise::i18n::NullTranslator;
//! use pagewise::nav::{JsonRenderer, Navigation, NavigationRenderer};
//! use pagewise::pagination::PageCalculator;
//!
//! let calculator = PageCalculator::new(50, 15, Some(2)).unwrap();
//! let navigation = Navigation::build(&calculator, "page", &NullTranslator);
//! let json = JsonRenderer::new("/items").render(&navigation).unwrap();
//! assert_eq!(json.as_array().map(Vec::len), Some(5));
//! # }
//! ```

#[cfg(feature = "nav")]
pub use pagewise_nav::*;
