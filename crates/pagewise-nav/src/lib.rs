//! # Pagewise Navigation
//!
//! Builds the five-item page navigation shown under a paginated listing
//! (First, Previous, "Page X of Y", Next, Last) and turns it into output
//! for the host's UI layer.
//!
//! The [`Navigation`] description only depends on a [`PageCalculator`] and a
//! page key. Output formats are pluggable through [`NavigationRenderer`];
//! HTML and JSON renderers are provided.
//!
//! ## Example
//!
//! ```
//! use pagewise_i18n::NullTranslator;
//! use pagewise_nav::{HtmlRenderer, Navigation, NavigationRenderer};
//! use pagewise_pagination::PageCalculator;
//!
//! let calculator = PageCalculator::new(50, 15, Some(2)).unwrap();
//! let navigation = Navigation::build(&calculator, "page", &NullTranslator);
//! assert_eq!(navigation.items().len(), 5);
//!
//! let html = HtmlRenderer::new("/articles").render(&navigation).unwrap();
//! assert!(html.contains(r#"href="/articles?page=3""#));
//! ```
//!
//! [`PageCalculator`]: pagewise_pagination::PageCalculator

pub mod navigation;
pub mod renderer;
mod util;

pub use navigation::{NavItem, NavKind, Navigation, labels};
pub use renderer::{HtmlRenderer, JsonRenderer, NavigationRenderer};
pub use util::page_url;
