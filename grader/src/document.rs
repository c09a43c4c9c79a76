use scraper::{Html, Selector};

use crate::error::SelectorError;

/// A parsed HTML page that can be queried with CSS selectors.
///
/// Parsing never fails: malformed markup is repaired the way browsers do it.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Document {
        Document {
            html: Html::parse_document(html),
        }
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> Result<usize, SelectorError> {
        let selector = compile(selector)?;
        Ok(self.html.select(&selector).count())
    }

    /// Whether at least one element matches `selector`.
    pub fn matches(&self, selector: &str) -> Result<bool, SelectorError> {
        let selector = compile(selector)?;
        let found = self.html.select(&selector).next().is_some();
        Ok(found)
    }
}

fn compile(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|e| SelectorError::Invalid {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
