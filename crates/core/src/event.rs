//! Editor input events.
//!
//! The editor binding layer reports what changed as an [`EditorEvent`]. The
//! aggregator consumes the flattened [`AnalysisEvent`] form, in which every
//! field is optional and absence means "no change signaled".

use serde::{Deserialize, Serialize};

use crate::normalize;
use crate::scoring::{RobotsDirective, Status};

/// A discrete change reported by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditorEvent {
    /// The body changed. `word_count` is an optional externally computed
    /// count that takes precedence over a local recount.
    BodyContentChanged { raw_html: String, plain_text: String, word_count: Option<usize> },

    /// The SEO title changed. `text` is present when the binding can read it.
    TitleChanged { length: usize, text: Option<String> },

    /// The meta description changed.
    DescriptionChanged { length: usize, text: Option<String> },

    /// A robots meta directive changed, with its precomputed status.
    RobotsDirectiveChanged { which: RobotsDirective, status: Status },

    /// The user typed a focus keyword. Blank input clears it.
    KeywordChanged { keyword: String },
}

impl EditorEvent {
    /// Body change from raw markup, deriving the normalized plain text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redactor_core::EditorEvent;
    ///
    /// let event = EditorEvent::body("<p>Hello <b>World</b></p>");
    /// if let EditorEvent::BodyContentChanged { plain_text, .. } = event {
    ///     assert_eq!(plain_text.trim(), "hello world");
    /// }
    /// ```
    pub fn body(raw_html: impl Into<String>) -> Self {
        let raw_html = raw_html.into();
        let plain_text = normalize::plain_text(&raw_html);
        EditorEvent::BodyContentChanged { raw_html, plain_text, word_count: None }
    }

    /// Title change carrying the title text.
    pub fn title(text: impl Into<String>) -> Self {
        let text = text.into();
        EditorEvent::TitleChanged { length: text.chars().count(), text: Some(text) }
    }

    /// Description change carrying the description text.
    pub fn description(text: impl Into<String>) -> Self {
        let text = text.into();
        EditorEvent::DescriptionChanged { length: text.chars().count(), text: Some(text) }
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        EditorEvent::KeywordChanged { keyword: keyword.into() }
    }

    pub fn robots(which: RobotsDirective, status: Status) -> Self {
        EditorEvent::RobotsDirectiveChanged { which, status }
    }
}

/// Partial update consumed by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEvent {
    pub raw_html: Option<String>,
    pub plain_text: Option<String>,
    pub word_count: Option<usize>,
    pub title_length: Option<usize>,
    pub title_text: Option<String>,
    pub description_length: Option<usize>,
    pub description_text: Option<String>,
    pub robots_index_directive: Option<Status>,
    pub robots_follow_directive: Option<Status>,
    pub custom_keyword: Option<String>,
}

impl AnalysisEvent {
    /// True when the event signals no change at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the event carries body content.
    pub fn touches_body(&self) -> bool {
        self.plain_text.is_some() || self.word_count.is_some()
    }

    pub fn touches_title(&self) -> bool {
        self.title_length.is_some() || self.title_text.is_some()
    }

    pub fn touches_description(&self) -> bool {
        self.description_length.is_some() || self.description_text.is_some()
    }

    /// Folds a later event into this one; fields present in `later` win.
    ///
    /// Body fields and each length/text pair are replaced as a group, so a
    /// later edit never inherits part of an earlier one. Used by schedulers
    /// to turn a burst of edits into one analysis pass.
    pub fn coalesce(self, later: AnalysisEvent) -> AnalysisEvent {
        let later_touches_body = later.raw_html.is_some() || later.touches_body();
        let later_touches_title = later.touches_title();
        let later_touches_description = later.touches_description();
        let (raw_html, plain_text, word_count) = if later_touches_body {
            (later.raw_html, later.plain_text, later.word_count)
        } else {
            (self.raw_html, self.plain_text, self.word_count)
        };
        let (title_length, title_text) = if later_touches_title {
            (later.title_length, later.title_text)
        } else {
            (self.title_length, self.title_text)
        };
        let (description_length, description_text) = if later_touches_description {
            (later.description_length, later.description_text)
        } else {
            (self.description_length, self.description_text)
        };

        AnalysisEvent {
            raw_html,
            plain_text,
            word_count,
            title_length,
            title_text,
            description_length,
            description_text,
            robots_index_directive: later.robots_index_directive.or(self.robots_index_directive),
            robots_follow_directive: later.robots_follow_directive.or(self.robots_follow_directive),
            custom_keyword: later.custom_keyword.or(self.custom_keyword),
        }
    }
}

impl From<EditorEvent> for AnalysisEvent {
    fn from(event: EditorEvent) -> Self {
        match event {
            EditorEvent::BodyContentChanged { raw_html, plain_text, word_count } => {
                AnalysisEvent { raw_html: Some(raw_html), plain_text: Some(plain_text), word_count, ..Default::default() }
            }
            EditorEvent::TitleChanged { length, text } => {
                AnalysisEvent { title_length: Some(length), title_text: text, ..Default::default() }
            }
            EditorEvent::DescriptionChanged { length, text } => {
                AnalysisEvent { description_length: Some(length), description_text: text, ..Default::default() }
            }
            EditorEvent::RobotsDirectiveChanged { which: RobotsDirective::Index, status } => {
                AnalysisEvent { robots_index_directive: Some(status), ..Default::default() }
            }
            EditorEvent::RobotsDirectiveChanged { which: RobotsDirective::Follow, status } => {
                AnalysisEvent { robots_follow_directive: Some(status), ..Default::default() }
            }
            EditorEvent::KeywordChanged { keyword } => {
                AnalysisEvent { custom_keyword: Some(keyword), ..Default::default() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_event_normalizes_text() {
        let event = AnalysisEvent::from(EditorEvent::body("<h1>Rust</h1><p>Is FUN</p>"));
        let words: Vec<&str> = event.plain_text.as_deref().unwrap().split_whitespace().collect();

        assert_eq!(words, vec!["rust", "is", "fun"]);
        assert_eq!(event.raw_html.as_deref(), Some("<h1>Rust</h1><p>Is FUN</p>"));
        assert!(event.touches_body());
        assert!(!event.touches_title());
    }

    #[test]
    fn test_title_event_counts_characters() {
        let event = AnalysisEvent::from(EditorEvent::title("Crème brûlée"));
        assert_eq!(event.title_length, Some(12));
        assert_eq!(event.title_text.as_deref(), Some("Crème brûlée"));
        assert!(!event.touches_body());
    }

    #[test]
    fn test_length_only_title_event() {
        let event = AnalysisEvent::from(EditorEvent::TitleChanged { length: 45, text: None });
        assert_eq!(event.title_length, Some(45));
        assert!(event.title_text.is_none());
        assert!(event.touches_title());
    }

    #[test]
    fn test_robots_events_route_by_directive() {
        let index = AnalysisEvent::from(EditorEvent::robots(RobotsDirective::Index, Status::Bad));
        assert_eq!(index.robots_index_directive, Some(Status::Bad));
        assert_eq!(index.robots_follow_directive, None);

        let follow = AnalysisEvent::from(EditorEvent::robots(RobotsDirective::Follow, Status::Good));
        assert_eq!(follow.robots_follow_directive, Some(Status::Good));
    }

    #[test]
    fn test_coalesce_later_fields_win() {
        let first = AnalysisEvent::from(EditorEvent::title("First title"))
            .coalesce(AnalysisEvent::from(EditorEvent::description("A description")));
        let merged = first.coalesce(AnalysisEvent::from(EditorEvent::title("Second")));

        assert_eq!(merged.title_text.as_deref(), Some("Second"));
        assert_eq!(merged.title_length, Some(6));
        assert_eq!(merged.description_text.as_deref(), Some("A description"));
    }

    #[test]
    fn test_coalesce_replaces_body_as_a_group() {
        let counted = AnalysisEvent::from(EditorEvent::BodyContentChanged {
            raw_html: "<p>old</p>".to_string(),
            plain_text: "old".to_string(),
            word_count: Some(350),
        });
        let merged = counted.coalesce(AnalysisEvent::from(EditorEvent::body("<p>three little words</p>")));

        assert_eq!(merged.raw_html.as_deref(), Some("<p>three little words</p>"));
        assert_eq!(merged.word_count, None);
    }

    #[test]
    fn test_coalesce_length_only_title_drops_earlier_text() {
        let merged = AnalysisEvent::from(EditorEvent::title("Rust tips"))
            .coalesce(AnalysisEvent::from(EditorEvent::TitleChanged { length: 0, text: None }));

        assert_eq!(merged.title_length, Some(0));
        assert_eq!(merged.title_text, None);
    }

    #[test]
    fn test_is_empty() {
        assert!(AnalysisEvent::default().is_empty());
        assert!(!AnalysisEvent::from(EditorEvent::keyword("")).is_empty());
    }

    #[test]
    fn test_editor_event_from_json() {
        let event: EditorEvent =
            serde_json::from_str(r#"{ "type": "titleChanged", "length": 12, "text": "Hello there!" }"#).unwrap();
        assert_eq!(event, EditorEvent::TitleChanged { length: 12, text: Some("Hello there!".to_string()) });

        let event: EditorEvent =
            serde_json::from_str(r#"{ "type": "robotsDirectiveChanged", "which": "index", "status": "bad" }"#)
                .unwrap();
        assert_eq!(event, EditorEvent::robots(RobotsDirective::Index, Status::Bad));
    }
}
