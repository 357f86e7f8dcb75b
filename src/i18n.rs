//! Translation module.
//!
//! This module provides the translator hook and message catalogs used for
//! navigation labels.

#[cfg(feature = "i18n")]
pub use pagewise_i18n::*;
