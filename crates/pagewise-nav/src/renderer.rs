//! Output formats for [`Navigation`].

mod html;
mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use crate::navigation::Navigation;
use pagewise_exception::Result;

/// Turns a [`Navigation`] into the host's representation.
///
/// Implementations must render an empty navigation as "nothing" in their
/// format (an empty string, an empty array, ...).
pub trait NavigationRenderer {
	/// Rendered representation
	type Output;

	/// Renders `navigation`.
	fn render(&self, navigation: &Navigation) -> Result<Self::Output>;
}

impl<R: NavigationRenderer + ?Sized> NavigationRenderer for &R {
	type Output = R::Output;

	fn render(&self, navigation: &Navigation) -> Result<Self::Output> {
		(**self).render(navigation)
	}
}

impl Navigation {
	/// Renders the navigation with `renderer`.
	pub fn render_with<R>(&self, renderer: &R) -> Result<R::Output>
	where
		R: NavigationRenderer + ?Sized,
	{
		renderer.render(self)
	}
}
