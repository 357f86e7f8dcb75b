#![cfg(feature = "nav")]

//! Facade integration tests
//!
//! Drives a listing end to end through the prelude: settings, query string,
//! calculator, data slice and rendered navigation.

use pagewise::prelude::*;
use rstest::rstest;

#[rstest]
fn test_listing_end_to_end() {
	let articles: Vec<String> = (1..=50).map(|i| format!("article-{}", i)).collect();
	let settings = PaginationSettings::from_toml_str("page_key = \"p\"\nper_page = 15\n").unwrap();
	let params = QueryParams::parse("?p=4").unwrap();
	let calculator = PageCalculator::from_settings(articles.len(), &settings, &params).unwrap();

	let shown = calculator.page_of(&articles);
	assert_eq!(shown.len(), 5);
	assert_eq!(shown[0], "article-46");
	assert_eq!(calculator.limit(), Limit::new(45, 15));

	let navigation = Navigation::build(&calculator, &settings.page_key, &NullTranslator);
	let html = HtmlRenderer::new("/blog").render(&navigation).unwrap();
	assert!(html.contains(r#"<a href="/blog?p=3">Previous</a>"#));
	assert!(html.contains(r#"<span>Last</span>"#));
}

#[rstest]
fn test_invalid_page_size_surfaces_error() {
	let result = PageCalculator::new(10, 0, Some(1));
	assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
