//! Readability statistics and grade classification.
//!
//! Numeric readability is an injected capability: anything implementing
//! [`TextStatistics`] can supply word counts and Flesch scores. The default
//! [`FleschKincaid`] implementation uses regex segmentation and a vowel-group
//! syllable heuristic.
//!
//! On top of that capability, [`grade_analysis`] classifies a Flesch-Kincaid
//! grade into one of seven bands. The grade is scaled by ten first, and each
//! band includes its lower bound:
//!
//! | scaled grade | band | status |
//! |---|---|---|
//! | `> 90` | 5th grade | good |
//! | `80..=90` | 6th grade | good |
//! | `70..80` | 7th grade | good |
//! | `60..70` | 8th & 9th grade | good |
//! | `50..60` | 10th to 12th grade | warning |
//! | `30..50` | college student | bad |
//! | `< 30` | college graduate | bad |
//!
//! # Example
//!
//! ```rust
//! use redactor_core::readability::{FleschKincaid, TextStatistics};
//!
//! let metrics = FleschKincaid.compute("The cat sat on the mat. It was happy.");
//! assert_eq!(metrics.word_count, 9);
//! assert_eq!(metrics.sentence_count, 2);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::messages::ReadabilityMessages;
use crate::scoring::{Status, in_range};

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[\w'-]+\b").expect("word pattern is valid"));
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));
static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("vowel pattern is valid"));

/// Raw readability statistics for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Flesch-Kincaid grade level. `0.0` for text without words.
    pub flesch_kincaid_grade: f64,
    /// Flesch reading ease. `0.0` for text without words.
    pub flesch_reading_ease: f64,
}

impl TextMetrics {
    /// Derives both Flesch scores from raw counts.
    pub fn from_counts(word_count: usize, sentence_count: usize, syllable_count: usize) -> Self {
        if word_count == 0 {
            return Self::default();
        }

        let sentences = sentence_count.max(1) as f64;
        let words = word_count as f64;
        let words_per_sentence = words / sentences;
        let syllables_per_word = syllable_count as f64 / words;

        Self {
            word_count,
            sentence_count,
            syllable_count,
            flesch_kincaid_grade: 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
            flesch_reading_ease: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        }
    }
}

/// External readability statistics capability.
pub trait TextStatistics: Send + Sync {
    /// Computes statistics for plain text.
    fn compute(&self, text: &str) -> TextMetrics;

    /// Counts words in plain text.
    fn word_count(&self, text: &str) -> usize {
        self.compute(text).word_count
    }
}

/// Default statistics based on the Flesch-Kincaid formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschKincaid;

impl TextStatistics for FleschKincaid {
    fn compute(&self, text: &str) -> TextMetrics {
        let words: Vec<&str> = WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect();
        if words.is_empty() {
            return TextMetrics::default();
        }

        let sentence_count = SENTENCE_END
            .split(text)
            .filter(|segment| WORD_PATTERN.is_match(segment))
            .count()
            .max(1);
        let syllable_count = words.iter().map(|w| count_syllables(w)).sum();

        TextMetrics::from_counts(words.len(), sentence_count, syllable_count)
    }

    fn word_count(&self, text: &str) -> usize {
        WORD_PATTERN.find_iter(text).count()
    }
}

/// Estimate syllables from vowel groups, with a silent trailing `e`
fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let letters: String = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return 1;
    }

    let mut count = VOWEL_GROUP.find_iter(&letters).count();
    if count > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}

/// Reading level band for a scaled grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradeBand {
    FifthGrade,
    SixthGrade,
    SeventhGrade,
    EighthNinthGrade,
    HighSchool,
    CollegeStudent,
    CollegeGraduate,
}

impl GradeBand {
    /// Classifies a grade already scaled by ten.
    pub fn from_scaled(score: f64) -> Self {
        if score > 90.0 {
            GradeBand::FifthGrade
        } else if in_range(score, 80.0, 90.0, true, true) {
            GradeBand::SixthGrade
        } else if in_range(score, 70.0, 80.0, true, false) {
            GradeBand::SeventhGrade
        } else if in_range(score, 60.0, 70.0, true, false) {
            GradeBand::EighthNinthGrade
        } else if in_range(score, 50.0, 60.0, true, false) {
            GradeBand::HighSchool
        } else if in_range(score, 30.0, 50.0, true, false) {
            GradeBand::CollegeStudent
        } else {
            GradeBand::CollegeGraduate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::FifthGrade => "5th grade",
            GradeBand::SixthGrade => "6th grade",
            GradeBand::SeventhGrade => "7th grade",
            GradeBand::EighthNinthGrade => "8th & 9th grade",
            GradeBand::HighSchool => "10th to 12th grade",
            GradeBand::CollegeStudent => "College Student",
            GradeBand::CollegeGraduate => "College Graduate",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            GradeBand::FifthGrade => "Very easy to read. Easily understood by an average 11-year-old student.",
            GradeBand::SixthGrade => "Easy to read. Conversational English for consumers.",
            GradeBand::SeventhGrade => "Fairly easy to read.",
            GradeBand::EighthNinthGrade => "Plain English. Easily understood by 13- to 15-year-old students.",
            GradeBand::HighSchool => "Fairly difficult to read.",
            GradeBand::CollegeStudent | GradeBand::CollegeGraduate => "Difficult to read.",
        }
    }

    pub fn status(self) -> Status {
        match self {
            GradeBand::FifthGrade | GradeBand::SixthGrade | GradeBand::SeventhGrade | GradeBand::EighthNinthGrade => {
                Status::Good
            }
            GradeBand::HighSchool => Status::Warning,
            GradeBand::CollegeStudent | GradeBand::CollegeGraduate => Status::Bad,
        }
    }

    fn message(self, messages: &ReadabilityMessages) -> &str {
        match self {
            GradeBand::FifthGrade => &messages.good_high,
            GradeBand::SixthGrade => &messages.good_med_high,
            GradeBand::SeventhGrade => &messages.good_med_low,
            GradeBand::EighthNinthGrade => &messages.good_low,
            GradeBand::HighSchool => &messages.ok,
            GradeBand::CollegeStudent => &messages.bad_high,
            GradeBand::CollegeGraduate => &messages.bad_low,
        }
    }
}

/// Classified reading level of a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeLevel {
    /// Flesch-Kincaid grade scaled by ten.
    pub score: f64,
    pub band: GradeBand,
    pub grade_level: &'static str,
    pub explanation: &'static str,
    pub status: Status,
    #[serde(rename = "msg")]
    pub message: String,
}

/// Classifies a raw Flesch-Kincaid grade.
///
/// Non-finite grades fall into the lowest band.
pub fn grade_analysis(grade: f64, messages: &ReadabilityMessages) -> GradeLevel {
    let score = if grade.is_finite() { grade * 10.0 } else { 0.0 };
    let band = GradeBand::from_scaled(score);

    GradeLevel {
        score,
        band,
        grade_level: band.label(),
        explanation: band.explanation(),
        status: band.status(),
        message: band.message(messages).to_string(),
    }
}

/// Computes and classifies the reading level of plain text.
pub fn grade_level(stats: &dyn TextStatistics, text: &str, messages: &ReadabilityMessages) -> GradeLevel {
    grade_analysis(stats.compute(text).flesch_kincaid_grade, messages)
}

/// Flesch reading ease of plain text.
pub fn reading_ease(stats: &dyn TextStatistics, text: &str) -> f64 {
    stats.compute(text).flesch_reading_ease
}
