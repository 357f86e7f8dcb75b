//! HTML list renderer

use super::NavigationRenderer;
use crate::navigation::{NavItem, NavKind, Navigation};
use crate::util::{html_escape, page_url};
use pagewise_exception::{Error, Result};
use std::fmt::{self, Write};

/// Renders the navigation as a `<ul>` list.
///
/// Links become `<a href>` elements, inert entries become `<span>`s, and
/// the status entry carries its record range as a `title` tooltip. Every
/// label and attribute is HTML-escaped.
///
/// # Examples
///
/// ```
/// use pagewise_i18n::NullTranslator;
/// use pagewise_nav::{HtmlRenderer, Navigation, NavigationRenderer};
/// use pagewise_pagination::PageCalculator;
///
/// let calculator = PageCalculator::new(30, 15, Some(2)).unwrap();
/// let navigation = Navigation::build(&calculator, "page", &NullTranslator);
/// let html = HtmlRenderer::new("/news").render(&navigation).unwrap();
///
/// assert!(html.starts_with(r#"<ul class="pagination">"#));
/// assert!(html.contains(r#"<a href="/news?page=1">First</a>"#));
/// assert!(html.contains(r#"<span>Next</span>"#));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
	base_url: String,
	class: String,
}

impl HtmlRenderer {
	/// Creates a renderer whose links point at `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			class: "pagination".to_string(),
		}
	}

	/// Sets the CSS class of the list (default `pagination`).
	///
	/// Items get `<class>-<kind>` classes, and inert ones also `disabled`.
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	/// Base URL links point at
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn render_item(
		&self,
		out: &mut String,
		navigation: &Navigation,
		item: &NavItem,
	) -> Result<()> {
		let label = html_escape(&item.label);
		let disabled = if !item.is_link() && item.kind != NavKind::Status {
			" disabled"
		} else {
			""
		};

		write!(
			out,
			r#"<li class="{}-{}{}">"#,
			html_escape(&self.class),
			item.kind.as_str(),
			disabled
		)
		.map_err(render_error)?;

		match item.target_page {
			Some(page) => {
				let href = page_url(&self.base_url, navigation.page_key(), page)?;
				write!(out, r#"<a href="{}">{}</a>"#, html_escape(&href), label)
					.map_err(render_error)?;
			}
			None => {
				out.push_str("<span");
				if let Some(ref title) = item.title {
					write!(out, r#" title="{}""#, html_escape(title)).map_err(render_error)?;
				}
				if item.kind == NavKind::Status {
					out.push_str(r#" aria-current="page""#);
				}
				write!(out, ">{}</span>", label).map_err(render_error)?;
			}
		}

		out.push_str("</li>");
		Ok(())
	}
}

fn render_error(error: fmt::Error) -> Error {
	Error::Render(format!("Failed to write navigation markup: {}", error))
}

impl Default for HtmlRenderer {
	fn default() -> Self {
		Self::new("")
	}
}

impl NavigationRenderer for HtmlRenderer {
	type Output = String;

	fn render(&self, navigation: &Navigation) -> Result<String> {
		if navigation.is_empty() {
			return Ok(String::new());
		}

		tracing::trace!(
			current_page = navigation.current_page(),
			total_pages = navigation.total_pages(),
			"Rendering HTML page navigation"
		);

		let mut out = String::with_capacity(512);
		write!(out, r#"<ul class="{}">"#, html_escape(&self.class)).map_err(render_error)?;
		for item in navigation.items() {
			self.render_item(&mut out, navigation, item)?;
		}
		out.push_str("</ul>");
		Ok(out)
	}
}
