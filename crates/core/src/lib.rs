pub mod aggregator;
pub mod config;
pub mod error;
pub mod event;
pub mod keywords;
pub mod messages;
pub mod normalize;
pub mod parse;
pub mod readability;
pub mod report;
pub mod schedule;
pub mod scoring;

pub use aggregator::{Advisor, ReportAggregator, ReportSink};
pub use config::{AdvisorConfig, AdvisorConfigBuilder, default_config_path};
pub use error::{AdvisorError, Result};
pub use event::{AnalysisEvent, EditorEvent};
pub use keywords::{Keyword, KeywordAnalyzer, density, occurrence_count};
pub use messages::MessageTable;
pub use normalize::{normalize, plain_text, strip};
pub use parse::Document;
pub use readability::{FleschKincaid, GradeBand, GradeLevel, TextMetrics, TextStatistics, grade_analysis};
pub use report::{
    ContentSection, CountSection, FocusKeyword, HeadingsSection, KeywordSource, MetaSection, RawStatistics, Report,
    RobotSection, TextStatisticsSection,
};
pub use schedule::Debouncer;
pub use scoring::{Reason, RobotsDirective, ScoreResult, Status};
