//! Search results parser
//!
//! Finds the product page for a company on a site's search results page.

use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

use super::config::CandidateShape;
use super::selector_chain::{SelectorChain, element_text};
use super::{ParsingError, ParsingResult};

struct CompiledShape {
    container: Option<SelectorChain>,
    link: SelectorChain,
}

pub struct SearchResultParser {
    shapes: Vec<CompiledShape>,
    base_url: Url,
}

impl SearchResultParser {
    pub fn new(shapes: &[CandidateShape], base_url: &str) -> ParsingResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ParsingError::url_resolution_failed(base_url, &e.to_string()))?;

        let shapes = shapes
            .iter()
            .map(|shape| {
                let container = shape
                    .container
                    .as_deref()
                    .map(|container| SelectorChain::single("search_container", container))
                    .transpose()?;
                let link = SelectorChain::single("search_link", &shape.link)?;
                Ok(CompiledShape { container, link })
            })
            .collect::<ParsingResult<Vec<_>>>()?;

        Ok(Self { shapes, base_url })
    }

    /// First candidate, in shape order then document order, whose visible
    /// text contains the company name case-insensitively. Relative hrefs
    /// are resolved against the site's base URL.
    pub fn find_product_url(&self, html: &Html, company_name: &str) -> Option<String> {
        let needle = company_name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let root = html.root_element();
        self.shapes.iter().find_map(|shape| {
            Self::candidates(shape, root)
                .into_iter()
                .filter(|link| element_text(*link).to_lowercase().contains(&needle))
                .find_map(|link| self.resolve_href(link))
        })
    }

    fn candidates<'a>(shape: &CompiledShape, root: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        match &shape.container {
            None => shape.link.all_from_first_matching(root),
            Some(container) => container
                .all_from_first_matching(root)
                .into_iter()
                .filter_map(|card| shape.link.first_match(card))
                .collect(),
        }
    }

    fn resolve_href(&self, link: ElementRef<'_>) -> Option<String> {
        let href = link.value().attr("href")?.trim();
        match self.base_url.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                debug!("Skipping unresolvable product link '{}': {}", href, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g2_like_parser() -> SearchResultParser {
        SearchResultParser::new(
            &[
                CandidateShape::link("a.link--header-color"),
                CandidateShape::card("div.product-card", "a.product-card__name"),
            ],
            "https://www.g2.com",
        )
        .unwrap()
    }

    #[test]
    fn test_named_link_match_is_case_insensitive() {
        let html = Html::parse_document(
            r#"<html><body>
                <a class="link--header-color" href="/products/other/reviews">Other Tool</a>
                <a class="link--header-color" href="/products/acme-corp">ACME Corp Suite</a>
            </body></html>"#,
        );

        assert_eq!(
            g2_like_parser().find_product_url(&html, "acme corp"),
            Some("https://www.g2.com/products/acme-corp".to_string())
        );
    }

    #[test]
    fn test_card_shape_is_used_when_named_links_do_not_match() {
        let html = Html::parse_document(
            r#"<html><body>
                <a class="link--header-color" href="/categories/crm">CRM Software</a>
                <div class="product-card"><a class="product-card__name" href="https://www.g2.com/products/acme">Acme</a></div>
            </body></html>"#,
        );

        assert_eq!(
            g2_like_parser().find_product_url(&html, "Acme"),
            Some("https://www.g2.com/products/acme".to_string())
        );
    }

    #[test]
    fn test_no_match_yields_none() {
        let html = Html::parse_document(
            r#"<html><body><a class="link--header-color" href="/products/x">Something Else</a></body></html>"#,
        );
        assert_eq!(g2_like_parser().find_product_url(&html, "Acme"), None);
    }
}
