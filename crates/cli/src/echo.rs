use std::fmt::{self, Write};

use owo_colors::OwoColorize;
use redactor_core::{Report, ScoreResult, Status};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Redactor".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "SEO content-quality advisor\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let label = format!("{}:", label);

    if ms < 50.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "fast".dimmed());
    } else if ms < 100.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "slow".bright_red());
    }
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Status marker, colored when `color` is set
fn marker(status: Status, color: bool) -> String {
    let (symbol, name) = match status {
        Status::Good => ("✓", "good"),
        Status::Warning => ("⚠", "warning"),
        Status::Bad => ("✗", "bad"),
    };
    let text = format!("{} {:<7}", symbol, name);

    match (color, status) {
        (false, _) => text,
        (true, Status::Good) => text.green().to_string(),
        (true, Status::Warning) => text.yellow().to_string(),
        (true, Status::Bad) => text.red().to_string(),
    }
}

fn status_line(out: &mut String, label: &str, score: &ScoreResult, color: bool) -> fmt::Result {
    writeln!(out, "  {} {:<20} {}", marker(score.status, color), label, score.message)
}

/// Renders the report as status lines followed by a summary.
pub fn render_report(report: &Report, color: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report, color)?;
    Ok(out)
}

fn write_report(out: &mut String, report: &Report, color: bool) -> fmt::Result {
    let rule = "═".repeat(60);
    let heading = |title: &str| if color { title.bold().cyan().to_string() } else { title.to_string() };

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", heading("SEO Report"))?;
    writeln!(out, "{}", rule)?;

    for (label, score) in report.scores() {
        status_line(out, label, score, color)?;
    }

    if let Some(stats) = &report.text_statistics {
        let grade = &stats.grade_level;
        writeln!(out, "  {} {:<20} {} ({})", marker(grade.status, color), "readability", grade.message, grade.grade_level)?;
    }

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", heading("Statistics"))?;
    writeln!(out, "{}", rule)?;

    if let Some(content) = &report.content {
        writeln!(out, "  {:<14} {}", "Words:", content.length)?;
    }
    if let Some(raw) = &report.raw_statistics {
        writeln!(out, "  {:<14} h1 {}, h2 {}, h3 {}", "Headings:", raw.h1_count, raw.h2_count, raw.h3_count)?;
        writeln!(out, "  {:<14} {}", "Images:", raw.image_count)?;
    }
    if let Some(stats) = &report.text_statistics {
        writeln!(out, "  {:<14} {:.1} ({})", "Grade score:", stats.grade_level.score, stats.grade_level.explanation)?;
        writeln!(out, "  {:<14} {:.1}", "Reading ease:", stats.reading_ease)?;
        if let Some(density) = stats.keyword_density {
            writeln!(out, "  {:<14} {:.1}%", "Density:", density)?;
        }
    }
    match &report.keyword {
        Some(keyword) => {
            let source = format!("{:?}", keyword.source).to_lowercase();
            writeln!(out, "  {:<14} {} ({})", "Keyword:", keyword.word, source)?;
        }
        None => writeln!(out, "  {:<14} none", "Keyword:")?,
    }

    writeln!(
        out,
        "\n  {} good, {} warning, {} bad",
        report.count_status(Status::Good),
        report.count_status(Status::Warning),
        report.count_status(Status::Bad)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_core::{AdvisorConfig, EditorEvent, ReportAggregator};

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_render_plain_report() {
        let mut aggregator = ReportAggregator::new(AdvisorConfig::default());
        aggregator.handle(EditorEvent::title("Short"));
        let rendered = render_report(aggregator.report(), false).unwrap();

        assert!(rendered.contains("SEO Report"));
        assert!(rendered.contains("⚠ warning title"));
        assert!(rendered.contains("✓ good    title stop words"));
        assert!(rendered.contains(&format!("{:<14} none", "Keyword:")));
        assert!(rendered.contains("1 good, 1 warning, 0 bad"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_render_full_report_lines() {
        let mut aggregator = ReportAggregator::new(AdvisorConfig::default());
        aggregator.handle(EditorEvent::title("How to write a parser"));
        aggregator.handle(EditorEvent::body("<h1>Parsers</h1><p>Tokens and trees.</p>"));
        aggregator.handle(EditorEvent::keyword("parser"));
        let rendered = render_report(aggregator.report(), false).unwrap();

        assert!(rendered.contains("⚠ warning title stop words"));
        assert!(rendered.contains(&format!("{:<14} h1 1, h2 0, h3 0", "Headings:")));
        assert!(rendered.contains(&format!("{:<14} parser (custom)", "Keyword:")));
        assert!(rendered.ends_with("bad\n"));
    }
}
