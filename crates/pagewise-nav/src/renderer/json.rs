//! JSON renderer

use super::NavigationRenderer;
use crate::navigation::{NavKind, Navigation};
use crate::util::page_url;
use pagewise_exception::Result;
use serde::Serialize;
use serde_json::Value;

/// Renders the navigation as a JSON array, for client-side widgets.
///
/// Each entry carries its kind, label, target page, resolved `href` (or
/// `null` for inert entries) and tooltip. An omitted navigation renders as
/// an empty array.
///
/// # Examples
///
/// ```
/// use pagewise_i18n::NullTranslator;
/// use pagewise_nav::{JsonRenderer, Navigation, NavigationRenderer};
/// use pagewise_pagination::PageCalculator;
///
/// let calculator = PageCalculator::new(50, 15, Some(4)).unwrap();
/// let navigation = Navigation::build(&calculator, "page", &NullTranslator);
/// let json = JsonRenderer::new("/api/items").render(&navigation).unwrap();
///
/// assert_eq!(json[1]["kind"], "previous");
/// assert_eq!(json[1]["href"], "/api/items?page=3");
/// assert!(json[4]["href"].is_null());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
	base_url: String,
}

#[derive(Serialize)]
struct JsonItem<'a> {
	kind: NavKind,
	label: &'a str,
	page: Option<usize>,
	href: Option<String>,
	title: Option<&'a str>,
}

impl JsonRenderer {
	/// Creates a renderer whose links point at `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}
}

impl NavigationRenderer for JsonRenderer {
	type Output = Value;

	fn render(&self, navigation: &Navigation) -> Result<Value> {
		tracing::trace!(
			current_page = navigation.current_page(),
			total_pages = navigation.total_pages(),
			"Rendering JSON page navigation"
		);

		let items = navigation
			.items()
			.iter()
			.map(|item| -> Result<JsonItem> {
				let href = item
					.target_page
					.map(|page| page_url(&self.base_url, navigation.page_key(), page))
					.transpose()?;
				Ok(JsonItem {
					kind: item.kind,
					label: &item.label,
					page: item.target_page,
					href,
					title: item.title.as_deref(),
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(serde_json::to_value(items)?)
	}
}
