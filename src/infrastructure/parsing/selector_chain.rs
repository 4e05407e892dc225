//! Ordered CSS selector fallbacks

use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use super::{ParsingError, ParsingResult};

/// Selectors for one field, tried in declaration order
#[derive(Debug, Clone)]
pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    /// Compile selector strings. Invalid entries are skipped with a warning;
    /// the chain fails only when entries were given and none compiled.
    pub fn compile(field: &str, selector_strings: &[String]) -> ParsingResult<Self> {
        let mut selectors = Vec::with_capacity(selector_strings.len());
        let mut errors = Vec::new();

        for selector_str in selector_strings {
            match Selector::parse(selector_str) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    warn!("Failed to compile {} selector '{}': {}", field, selector_str, e);
                    errors.push(format!("'{selector_str}': {e}"));
                }
            }
        }

        if selectors.is_empty() && !errors.is_empty() {
            return Err(ParsingError::NoUsableSelectors {
                field: field.to_string(),
                errors: errors.join(", "),
            });
        }

        if !errors.is_empty() {
            debug!("Some {} selectors failed to compile: {}", field, errors.join(", "));
        }

        Ok(Self { selectors })
    }

    /// Compile a single selector, failing on a syntax error
    pub fn single(field: &str, selector: &str) -> ParsingResult<Self> {
        let compiled = Selector::parse(selector)
            .map_err(|e| ParsingError::invalid_selector(field, selector, &e.to_string()))?;
        Ok(Self {
            selectors: vec![compiled],
        })
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// First element matched by the first selector that matches anything
    pub fn first_match<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| scope.select(selector).next())
    }

    /// First non-empty trimmed text; a selector whose matches are all blank
    /// hands over to the next one
    pub fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        self.selectors.iter().find_map(|selector| {
            scope
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
    }

    /// Every match of the first selector that matches at least once
    pub fn all_from_first_matching<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for selector in &self.selectors {
            let found: Vec<ElementRef<'a>> = scope.select(selector).collect();
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }

    pub fn matches_any(&self, scope: ElementRef<'_>) -> bool {
        self.first_match(scope).is_some()
    }

    pub fn count_in(&self, scope: ElementRef<'_>) -> usize {
        self.all_from_first_matching(scope).len()
    }
}

/// Concatenated descendant text, trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
