//! The cumulative analysis report.
//!
//! A [`Report`] holds the latest known diagnostics for each field of the
//! document being edited. Sections start out unset and are filled in as
//! events arrive; an event only ever replaces the sections it touches.

use serde::Serialize;

use crate::keywords::Keyword;
use crate::readability::GradeLevel;
use crate::scoring::{ScoreResult, Status};
use crate::{AdvisorError, Result};

/// Snapshot of every diagnostic computed so far in an editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<MetaSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<MetaSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CountSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<HeadingsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot_index: Option<RobotSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot_follow: Option<RobotSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_statistics: Option<RawStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_statistics: Option<TextStatisticsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<FocusKeyword>,

    /// Latest raw inputs that keyword-dependent sections are derived from.
    #[serde(skip)]
    pub(crate) inputs: Inputs,
}

/// Raw inputs remembered between events, all lower-cased.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Inputs {
    pub title_text: Option<String>,
    pub description_text: Option<String>,
    pub heading_texts: Vec<String>,
    /// Body text that the current text statistics section was computed from.
    pub analyzed_text: Option<String>,
    pub custom_keyword: Option<String>,
}

/// Title or description diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSection {
    /// Length in characters.
    pub length: usize,
    pub length_score: ScoreResult,
    /// Focus keyword occurrences, when both a keyword and the field text are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_usage: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_score: Option<ScoreResult>,
    /// Stop words in the field text. Only titles are checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_word_score: Option<ScoreResult>,
}

/// Body content diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    /// Length in words.
    pub length: usize,
    pub length_score: ScoreResult,
}

/// Diagnostics for a counted element, such as images.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountSection {
    pub length: usize,
    pub length_score: ScoreResult,
}

/// Heading structure diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingsSection {
    /// Number of `<h1>` headings.
    pub length: usize,
    pub length_score: ScoreResult,
    /// Focus keyword occurrences across all heading levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_usage: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_score: Option<ScoreResult>,
}

/// Robots meta directive diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotSection {
    pub length_score: ScoreResult,
}

/// Element counts from the raw body markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatistics {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub image_count: usize,
}

/// Statistics that are only meaningful on longer bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatisticsSection {
    pub word_count: usize,
    pub grade_level: GradeLevel,
    pub reading_ease: f64,
    pub recommended_keywords: Vec<Keyword>,
    /// Density of the focus keyword in percent, absent when no keyword is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_density: Option<f64>,
}

/// Where the focus keyword came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSource {
    Custom,
    Recommended,
}

/// The keyword every keyword-dependent diagnostic is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusKeyword {
    pub word: String,
    pub source: KeywordSource,
}

impl Report {
    /// Creates an empty report with every section unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active focus keyword, if any.
    pub fn focus_keyword(&self) -> Option<&str> {
        self.keyword.as_ref().map(|k| k.word.as_str())
    }

    /// Every populated score, labelled by the field it belongs to, in display order.
    pub fn scores(&self) -> Vec<(&'static str, &ScoreResult)> {
        let mut scores = Vec::new();

        if let Some(title) = &self.title {
            scores.push(("title", &title.length_score));
            if let Some(score) = &title.keyword_score {
                scores.push(("title keyword", score));
            }
            if let Some(score) = &title.stop_word_score {
                scores.push(("title stop words", score));
            }
        }
        if let Some(description) = &self.description {
            scores.push(("description", &description.length_score));
            if let Some(score) = &description.keyword_score {
                scores.push(("description keyword", score));
            }
        }
        if let Some(content) = &self.content {
            scores.push(("content", &content.length_score));
        }
        if let Some(headings) = &self.headings {
            scores.push(("headings", &headings.length_score));
            if let Some(score) = &headings.keyword_score {
                scores.push(("headings keyword", score));
            }
        }
        if let Some(image) = &self.image {
            scores.push(("images", &image.length_score));
        }
        if let Some(robot) = &self.robot_index {
            scores.push(("robots index", &robot.length_score));
        }
        if let Some(robot) = &self.robot_follow {
            scores.push(("robots follow", &robot.length_score));
        }

        scores
    }

    /// Counts populated scores with the given status, readability included.
    pub fn count_status(&self, status: Status) -> usize {
        let readability =
            self.text_statistics.as_ref().filter(|stats| stats.grade_level.status == status).map_or(0, |_| 1);
        self.scores().iter().filter(|(_, score)| score.status == status).count() + readability
    }

    /// Serializes the report with camelCase keys, omitting unset sections.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(AdvisorError::from)
    }
}
