//! Markup parsing for editor content.
//!
//! This module provides the [`Document`] and [`Element`] types used to read
//! editor markup: rendered text for the normalizer and element counts for the
//! raw statistics section of the report.
//!
//! Editor bodies are fragments rather than full pages, and they are often
//! mid-edit and unbalanced. Parsing never fails; the HTML5 tree builder
//! recovers whatever structure it can.
//!
//! # Example
//!
//! ```rust
//! use redactor_core::parse::Document;
//!
//! let doc = Document::parse("<h1>Title</h1><p>Body <img src=\"a.png\"></p>");
//! assert_eq!(doc.count("h1"), 1);
//! assert_eq!(doc.count("img"), 1);
//! assert_eq!(doc.text_content(), "TitleBody ");
//! ```

use scraper::{Html, Selector};

use crate::{AdvisorError, Result};

/// A parsed fragment of editor markup.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a markup fragment.
    ///
    /// Unclosed tags, stray end tags and bare text are all accepted.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_fragment(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::InvalidSelector`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redactor_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<h2>One</h2><h2>Two</h2>"#);
    /// let headings = doc.select("h2").unwrap();
    /// assert_eq!(headings.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector).map_err(|e| AdvisorError::InvalidSelector(format!("{}: {}", selector, e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Counts elements matching `selector`.
    ///
    /// An invalid selector counts as zero matches.
    pub fn count(&self, selector: &str) -> usize {
        self.select(selector).map(|els| els.len()).unwrap_or(0)
    }

    /// Collects the text of every element matching `selector`, in document order.
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.select(selector)
            .unwrap_or_default()
            .iter()
            .map(Element::text)
            .collect()
    }

    /// Gets all text content from the fragment.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl Element<'_> {
    /// Gets the text content of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }
}
