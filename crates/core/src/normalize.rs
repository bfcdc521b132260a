//! Markup stripping and case normalization.
//!
//! Downstream analysis works on plain, lower-cased text. [`strip`] turns
//! editor markup into the text a reader would see and [`normalize`] folds
//! case so keyword matching is case-insensitive.

use lol_html::html_content::ContentType;

use crate::parse::Document;

/// Elements whose content is never rendered as text.
const NON_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template", "iframe", "svg", "canvas"];

/// Elements that end a run of words when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "figure", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table",
    "td", "th", "tr", "ul",
];

/// Removes all markup and returns the rendered text content.
///
/// Script-like elements are dropped with their content and block boundaries
/// become whitespace, so `<p>one</p><p>two</p>` reads as two words. Malformed
/// markup never fails; if the rewriter rejects the input the raw markup is
/// handed straight to the tree builder instead.
///
/// # Example
///
/// ```rust
/// use redactor_core::normalize::strip;
///
/// let text = strip("<h1>Hello</h1><p>big <b>world</b></p><script>x()</script>");
/// assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["Hello", "big", "world"]);
/// ```
pub fn strip(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let prepared = prepare_markup(html);
    Document::parse(&prepared).text_content()
}

/// Lower-cases text for case-insensitive matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Strips markup and lower-cases the result.
///
/// This is the `plainText` form carried by body content events.
pub fn plain_text(html: &str) -> String {
    normalize(&strip(html))
}

/// Drop non-text elements and pad block elements with a space
fn prepare_markup(html: &str) -> String {
    let mut output = Vec::with_capacity(html.len());
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![lol_html::element!("*", |el| {
                let tag = el.tag_name();
                if NON_TEXT_TAGS.contains(&tag.as_str()) {
                    el.remove();
                } else if BLOCK_TAGS.contains(&tag.as_str()) {
                    el.before(" ", ContentType::Text);
                    el.after(" ", ContentType::Text);
                }
                Ok(())
            })],
            ..Default::default()
        },
        |c: &[u8]| {
            output.extend_from_slice(c);
        },
    );

    if rewriter.write(html.as_bytes()).is_err() || rewriter.end().is_err() {
        return html.to_string();
    }

    String::from_utf8_lossy(&output).into_owned()
}
