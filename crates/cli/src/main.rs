use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use redactor_core::{AdvisorConfig, EditorEvent, ReportAggregator, RobotsDirective, Status, default_config_path};
use tracing_subscriber::EnvFilter;

mod echo;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Score a document's SEO content quality from the command line
#[derive(Parser, Debug)]
#[command(name = "redactor")]
#[command(author = "Redactor Contributors")]
#[command(version)]
#[command(about = "Score SEO content quality of an HTML document", long_about = None)]
struct Args {
    /// Local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// SEO title of the document
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Meta description of the document
    #[arg(long, value_name = "TEXT")]
    description: Option<String>,

    /// Focus keyword (default: top recommended keyword)
    #[arg(short, long, value_name = "KEYWORD")]
    keyword: Option<String>,

    /// The document carries a noindex robots directive
    #[arg(long)]
    noindex: bool,

    /// The document carries a nofollow robots directive
    #[arg(long)]
    nofollow: bool,

    /// Configuration file, TOML or JSON (default: user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "redactor=debug,redactor_core=debug" } else { "redactor=warn,redactor_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AdvisorConfig> {
    match path {
        Some(path) => {
            AdvisorConfig::load(path).with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => Ok(default_config_path().map(|path| AdvisorConfig::load_or_default(&path)).unwrap_or_default()),
    }
}

/// Translate command-line metadata and the body into editor events
fn build_events(args: &Args, html: String) -> Vec<EditorEvent> {
    let mut events = Vec::new();

    if let Some(title) = &args.title {
        events.push(EditorEvent::title(title.as_str()));
    }
    if let Some(description) = &args.description {
        events.push(EditorEvent::description(description.as_str()));
    }

    let index = if args.noindex { Status::Bad } else { Status::Good };
    let follow = if args.nofollow { Status::Warning } else { Status::Good };
    events.push(EditorEvent::robots(RobotsDirective::Index, index));
    events.push(EditorEvent::robots(RobotsDirective::Follow, follow));

    events.push(EditorEvent::body(html));

    if let Some(keyword) = &args.keyword {
        events.push(EditorEvent::keyword(keyword.as_str()));
    }
    events
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "redactor", &mut io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);
    let input = args.input.as_deref().unwrap_or("-");

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let html = if input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
        buffer
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
        eprintln!();
        echo::print_step(2, 3, "Analyzing document");
    }

    let config = load_config(args.config.as_deref())?;
    if html.trim().is_empty() {
        echo::print_warning("Input is empty; body diagnostics will be minimal");
    }

    let started = Instant::now();
    let events = build_events(&args, html);
    let event_count = events.len();
    tracing::debug!(events = event_count, "feeding editor events");

    let mut aggregator = ReportAggregator::new(config);
    for event in events {
        aggregator.handle(event);
    }
    let report = aggregator.report();

    if args.verbose {
        eprintln!("  {} {}", "Events:".dimmed(), event_count.to_string().bright_white());
        echo::print_timing("Analysis", started.elapsed());
        eprintln!();
        echo::print_step(3, 3, "Writing report");
    }

    let color = args.output.is_none() && io::stdout().is_terminal();
    let output = match args.format {
        OutputFormat::Text => echo::render_report(report, color).context("Failed to render report")?,
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            let mut rendered = serde_json::to_string_pretty(&json).context("Failed to serialize report")?;
            rendered.push('\n');
            rendered
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
