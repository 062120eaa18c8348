use clap::Parser;
use hyc::{RunOptions, WordsSource};
use hyc_core::config::{CaseFolding, InputMode, ReportFormat, Settings};
use hyc_lexicon::LexiconSource;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "hyc",
    about = "Cluster words by the hypernyms their senses share in a WordNet-style lexicon"
)]
struct Cli {
    /// File with the words to cluster (whitespace separated), or `-` for stdin.
    words: String,

    /// JSON lexicon file. Uses the built-in sample taxonomy when omitted.
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Lowest depth allowed for a hypernym used as a cluster.
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    min_depth: Option<i64>,

    /// Minimum allowed cluster size.
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    min_size: Option<i64>,

    /// Maximum allowed cluster size (unbounded by default).
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    max_size: Option<i64>,

    /// Treat every line as one word or phrase.
    #[arg(long)]
    line_mode: bool,

    /// Lowercase words before lookup.
    #[arg(long)]
    lowercase: bool,

    /// Also use each sense of a word as a cluster candidate.
    #[arg(long)]
    include_own_senses: bool,

    /// Report format.
    #[arg(short, long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra config file layered over the defaults and ~/.config/hyc/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG overrides).
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Command-line flags take precedence over every config layer.
    fn apply(&self, settings: &mut Settings) {
        if let Some(d) = self.min_depth {
            settings.filter.min_depth = d;
        }
        if let Some(m) = self.min_size {
            settings.filter.min_size = m;
        }
        if let Some(x) = self.max_size {
            settings.filter.max_size = Some(x);
        }
        if self.line_mode {
            settings.input.mode = InputMode::Line;
        }
        if self.lowercase {
            settings.input.case = CaseFolding::Lower;
        }
        if self.include_own_senses {
            settings.expansion.include_own_senses = true;
        }
        match self.format.as_deref() {
            Some("json") => settings.report.format = ReportFormat::Json,
            Some("text") => settings.report.format = ReportFormat::Text,
            _ => {}
        }
    }

    fn words_source(&self) -> WordsSource {
        if self.words == "-" {
            WordsSource::Stdin
        } else {
            WordsSource::File(PathBuf::from(&self.words))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("hyc: {e:#}");
            return ExitCode::from(2);
        }
    };
    cli.apply(&mut settings);

    let opts = RunOptions {
        words: cli.words_source(),
        lexicon: cli
            .lexicon
            .clone()
            .map_or(LexiconSource::Builtin, LexiconSource::Json),
        settings,
        output: cli.output.clone(),
    };

    match hyc::run(&opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hyc: {e:#}");
            hyc::exit_code(&e)
        }
    }
}
