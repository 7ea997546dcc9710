use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use sitelift_core::{
    ContactSet, ContentOutline, Document, JsonConfig, JsonFormatter, MarkdownConfig, MarkdownFormatter, PageReport,
    Scraper, ScraperConfig, TextConfig, TextFormatter, fetch_file, fetch_stdin, fetch_url,
};
use tracing_subscriber::EnvFilter;

mod echo;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which extractions to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Contacts,
    Outline,
    All,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contacts" => Ok(Self::Contacts),
            "outline" => Ok(Self::Outline),
            "all" => Ok(Self::All),
            _ => Err(format!("Invalid mode: {}. Valid options: contacts, outline, all", s)),
        }
    }
}

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Markdown,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, markdown, text", s)),
        }
    }
}

/// Extract contact links and a content outline from web pages
#[derive(Parser, Debug)]
#[command(name = "sitelift")]
#[command(version)]
#[command(about = "Extract contact links and a content outline from web pages", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// What to extract (contacts, outline, all)
    #[arg(long, default_value = "all", value_name = "MODE")]
    mode: Mode,

    /// Output format (json, markdown, text)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "8", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Source echoed in the outline for file and stdin input
    #[arg(long, value_name = "URL")]
    source: Option<String>,

    /// Include TOML frontmatter (Markdown only)
    #[arg(long)]
    frontmatter: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Wrap text output at this many columns (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    width: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitelift_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn scraper_config(args: &Args) -> ScraperConfig {
    let mut builder = ScraperConfig::builder().timeout(args.timeout);
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    builder.build()
}

async fn read_input(input: &str, scraper: &Scraper, verbose: bool) -> anyhow::Result<String> {
    if input == "-" {
        if verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if is_url(input) {
        if verbose {
            echo::print_step(1, 3, &format!("Fetching from {}", input.bright_white().underline()));
        }
        fetch_url(input, &scraper.config().fetch)
            .await
            .with_context(|| format!("Failed to fetch source: {input}"))
    } else {
        if verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {input}"))
    }
}

fn build_report(html: &str, source: &str, mode: Mode, scraper: &Scraper) -> PageReport {
    let doc = Document::parse(html);
    let contacts =
        matches!(mode, Mode::Contacts | Mode::All).then(|| sitelift_core::contacts::classify_document(&doc));
    let outline = matches!(mode, Mode::Outline | Mode::All)
        .then(|| ContentOutline::from_document(&doc, source, &scraper.config().outline));
    PageReport { contacts, outline }
}

fn render(report: &PageReport, args: &Args) -> anyhow::Result<String> {
    let output = match args.format {
        OutputFormat::Json => JsonFormatter::new(JsonConfig { pretty: args.pretty })
            .convert(report)
            .context("Failed to serialize report")?,
        OutputFormat::Markdown => {
            MarkdownFormatter::new(MarkdownConfig { include_frontmatter: args.frontmatter }).convert(report)
        }
        OutputFormat::Text => TextFormatter::new(TextConfig { line_width: args.width }).convert(report),
    };
    Ok(output)
}

async fn run(args: Args) -> anyhow::Result<()> {
    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "sitelift", &mut std::io::stdout());
        return Ok(());
    }

    let input = args.input.clone().context("INPUT is required")?;

    if args.verbose {
        init_tracing();
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let scraper = Scraper::with_config(scraper_config(&args));
    let mut timings: Vec<(String, Duration)> = Vec::new();
    let started = Instant::now();

    let html = read_input(&input, &scraper, args.verbose).await?;
    timings.push(("Read".to_string(), started.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
        eprintln!();
        echo::print_step(2, 3, "Extracting");
    }

    let source = args.source.clone().unwrap_or_else(|| input.clone());
    let extract_started = Instant::now();
    let report = build_report(&html, &source, args.mode, &scraper);
    timings.push(("Extract".to_string(), extract_started.elapsed()));
    tracing::debug!(mode = ?args.mode, source = %source, "built report");

    if args.verbose {
        echo::print_report_details(&report);
        if report.contacts.as_ref().is_some_and(ContactSet::is_empty) {
            echo::print_warning("No contact links found");
        }
        echo::print_step(3, 3, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!();
    }

    let output = render(&report, &args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => println!("{}", output),
    }

    if args.verbose {
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        echo::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
