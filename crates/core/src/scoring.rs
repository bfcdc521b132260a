//! Scoring rules mapping raw metrics to a status and message.
//!
//! Each rule is a pure function of one metric plus the message table. The
//! boundaries below are the contract; every threshold is decided with
//! [`in_range`] so inclusivity is explicit at each call site.
//!
//! | rule | bad | warning | good |
//! |---|---|---|---|
//! | title length (chars) | `0`, `> 70` | `1..=29` | `30..=70` |
//! | description length (chars) | `0`, `> 156` | `1..=124` | `125..=156` |
//! | content length (words) | `0`, `1..=198` | `199..=299` | `>= 300` |
//! | image count | `0` | | `>= 1` |
//! | h1 count | `0`, `> 1` | | `1` |
//! | keyword usage in title/description | `0` | `> 1` | `1` |
//! | keyword usage in headings | | `0` | `>= 1` |
//! | stop words in title | | `>= 1` | `0` |

use serde::{Deserialize, Serialize};

use crate::messages::{KeywordUsageMessages, MessageTable, MetaLengthMessages};

/// Severity of a scored metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Bad,
}

impl Status {
    /// Indicator color conventionally used to render this status.
    pub fn color(self) -> &'static str {
        match self {
            Status::Good => "green",
            Status::Warning => "yellow",
            Status::Bad => "red",
        }
    }

    /// Parses a status from its name or indicator color.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "good" | "green" => Some(Status::Good),
            "warning" | "ok" | "yellow" => Some(Status::Warning),
            "bad" | "red" => Some(Status::Bad),
            _ => None,
        }
    }
}

/// Why a metric received its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    Optimal,
    Empty,
    TooShort,
    BelowTarget,
    TooLong,
    Missing,
    Multiple,
    Unused,
    Repetitive,
    Restricted,
    StopWords,
}

/// Result of applying a scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub status: Status,
    pub reason: Reason,
    #[serde(rename = "msg")]
    pub message: String,
}

impl ScoreResult {
    pub fn new(status: Status, reason: Reason, message: &str) -> Self {
        Self { status, reason, message: message.to_string() }
    }
}

/// Checks whether `value` lies between `min` and `max` with explicit bound inclusivity.
///
/// # Example
///
/// ```rust
/// use redactor_core::scoring::in_range;
///
/// assert!(in_range(30, 30, 70, true, true));
/// assert!(!in_range(30, 30, 70, false, true));
/// ```
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T, inclusive_low: bool, inclusive_high: bool) -> bool {
    let above = if inclusive_low { value >= min } else { value > min };
    let below = if inclusive_high { value <= max } else { value < max };
    above && below
}

/// Shared shape of the title and description length rules
fn meta_length_score(length: usize, good_min: usize, good_max: usize, messages: &MetaLengthMessages) -> ScoreResult {
    if length == 0 {
        ScoreResult::new(Status::Bad, Reason::Empty, &messages.bad_empty)
    } else if in_range(length, 0, good_min, false, false) {
        ScoreResult::new(Status::Warning, Reason::BelowTarget, &messages.ok)
    } else if in_range(length, good_min, good_max, true, true) {
        ScoreResult::new(Status::Good, Reason::Optimal, &messages.good)
    } else {
        ScoreResult::new(Status::Bad, Reason::TooLong, &messages.bad_long)
    }
}

/// Scores the SEO title by character count.
pub fn title_length_score(length: usize, messages: &MessageTable) -> ScoreResult {
    meta_length_score(length, 30, 70, &messages.title.length)
}

/// Scores the meta description by character count.
pub fn description_length_score(length: usize, messages: &MessageTable) -> ScoreResult {
    meta_length_score(length, 125, 156, &messages.description.length)
}

/// Scores the body content by word count.
pub fn content_length_score(words: usize, messages: &MessageTable) -> ScoreResult {
    let m = &messages.content.length;
    if words == 0 {
        ScoreResult::new(Status::Bad, Reason::Empty, &m.bad_empty)
    } else if in_range(words, 0, 199, false, false) {
        ScoreResult::new(Status::Bad, Reason::TooShort, &m.bad_short)
    } else if in_range(words, 199, 300, true, false) {
        ScoreResult::new(Status::Warning, Reason::BelowTarget, &m.ok)
    } else {
        ScoreResult::new(Status::Good, Reason::Optimal, &m.good)
    }
}

/// Scores image presence. Any image at all is good.
pub fn image_score(count: usize, messages: &MessageTable) -> ScoreResult {
    if count == 0 {
        ScoreResult::new(Status::Bad, Reason::Missing, &messages.image.bad)
    } else {
        ScoreResult::new(Status::Good, Reason::Optimal, &messages.image.good)
    }
}

/// Scores the number of `<h1>` headings.
pub fn h1_score(count: usize, messages: &MessageTable) -> ScoreResult {
    let m = &messages.headings.h1;
    match count {
        0 => ScoreResult::new(Status::Bad, Reason::Missing, &m.bad_empty),
        1 => ScoreResult::new(Status::Good, Reason::Optimal, &m.good),
        _ => ScoreResult::new(Status::Bad, Reason::Multiple, &m.bad_multiple),
    }
}

/// Scores how often the focus keyword appears in a short metadata field.
///
/// `None` means no focus keyword is set, which is not applicable rather
/// than bad.
pub fn keyword_usage_score(count: Option<usize>, messages: &KeywordUsageMessages) -> Option<ScoreResult> {
    count.map(|count| match count {
        0 => ScoreResult::new(Status::Bad, Reason::Unused, &messages.bad),
        1 => ScoreResult::new(Status::Good, Reason::Optimal, &messages.good),
        _ => ScoreResult::new(Status::Warning, Reason::Repetitive, &messages.ok),
    })
}

pub fn title_keyword_score(count: Option<usize>, messages: &MessageTable) -> Option<ScoreResult> {
    keyword_usage_score(count, &messages.title.keyword_usage)
}

pub fn description_keyword_score(count: Option<usize>, messages: &MessageTable) -> Option<ScoreResult> {
    keyword_usage_score(count, &messages.description.keyword_usage)
}

/// Scores stop-word use in the SEO title.
///
/// `None` means the title text is unknown.
pub fn title_stop_word_score(count: Option<usize>, messages: &MessageTable) -> Option<ScoreResult> {
    let m = &messages.title.stop_words;
    count.map(|count| {
        if count == 0 {
            ScoreResult::new(Status::Good, Reason::Optimal, &m.good)
        } else {
            ScoreResult::new(Status::Warning, Reason::StopWords, &m.ok)
        }
    })
}

/// Scores focus keyword usage across all headings. Repetition is fine here.
pub fn heading_keyword_score(count: Option<usize>, messages: &MessageTable) -> Option<ScoreResult> {
    let m = &messages.headings.keyword_usage;
    count.map(|count| {
        if count == 0 {
            ScoreResult::new(Status::Warning, Reason::Unused, &m.bad)
        } else {
            ScoreResult::new(Status::Good, Reason::Optimal, &m.good)
        }
    })
}

/// Which robots meta directive a status refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotsDirective {
    Index,
    Follow,
}

/// Attaches a message to a precomputed robots directive status.
pub fn robots_score(directive: RobotsDirective, status: Status, messages: &MessageTable) -> ScoreResult {
    let m = match directive {
        RobotsDirective::Index => &messages.robots.index,
        RobotsDirective::Follow => &messages.robots.follow,
    };
    match status {
        Status::Good => ScoreResult::new(status, Reason::Optimal, &m.good),
        Status::Warning => ScoreResult::new(status, Reason::Restricted, &m.ok),
        Status::Bad => ScoreResult::new(status, Reason::Restricted, &m.bad),
    }
}
