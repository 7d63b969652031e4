//! Big-O estimation CLI
//!
//! # Usage
//!
//! ```bash
//! # Analyze files or directories
//! cargo run --bin bigo-codegraph -- analyze src/ lib/util.py
//!
//! # Only report O(n²) and worse, as JSON
//! cargo run --bin bigo-codegraph -- analyze src/ --min-severity elevated --format json
//!
//! # Re-analyze on change
//! cargo run --bin bigo-codegraph -- watch src/ --debounce-ms 300
//!
//! # Force severity colors when piping
//! cargo run --bin bigo-codegraph -- --color always analyze src/ | less -R
//! ```

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use codegraph_bigo::config::{AnalyzerConfig, ColorPalette, ConfigError};
use codegraph_bigo::features::file_watcher::{
    analyze_file, collect_files, AnalyzeOnChange, FileAnalysis, FileWatcher, ReanalysisHandler,
    WatchConfig,
};
use codegraph_bigo::{AnalysisResult, BigOError, LanguageId, LineIndex, Result, Severity};
use colored::Colorize;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bigo-codegraph")]
#[command(about = "Heuristic Big-O complexity estimation per function", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Color complexity notation with the config's severity palette
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze files and directories
    Analyze {
        /// Files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Language tag for every file (default: inferred from extension)
        #[arg(short, long)]
        language: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Analyzer config (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only report functions at or above this severity
        #[arg(long, default_value = "low")]
        min_severity: Severity,
    },

    /// Re-analyze files under a directory whenever they change
    Watch {
        /// Directory to watch
        dir: PathBuf,

        /// Debounce window in milliseconds
        #[arg(long, default_value = "500")]
        debounce_ms: u64,

        /// Analyzer config (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List recognized languages
    Languages,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.color {
        ColorChoice::Auto => {}
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Analyze {
            paths,
            language,
            format,
            config,
            min_severity,
        } => {
            let config = load_config(config.as_deref())?;
            let language = language.as_deref().map(resolve_language).transpose()?;
            run_analyze(&paths, language, format, &config, min_severity)
        }
        Commands::Watch {
            dir,
            debounce_ms,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            run_watch(dir, Duration::from_millis(debounce_ms), config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Languages => {
            for lang in LanguageId::ALL {
                println!(
                    "{:<12} {:<22} .{}",
                    lang.name(),
                    lang.family().as_str(),
                    lang.extensions().join(" .")
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            Ok(AnalyzerConfig::from_yaml(path)?)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

fn resolve_language(tag: &str) -> Result<LanguageId> {
    LanguageId::from_tag(tag).ok_or_else(|| {
        let known: Vec<&str> = LanguageId::ALL.iter().map(|l| l.name()).collect();
        BigOError::Config(ConfigError::unknown_language_with_suggestion(tag, &known))
    })
}

fn run_analyze(
    paths: &[PathBuf],
    language: Option<LanguageId>,
    format: OutputFormat,
    config: &AnalyzerConfig,
    min_severity: Severity,
) -> Result<ExitCode> {
    if !config.enable {
        tracing::info!("analysis disabled by config");
        return Ok(ExitCode::SUCCESS);
    }

    let files = collect_files(paths, language, config);
    tracing::info!("analyzing {} files", files.len());

    let outcomes: Vec<Result<FileAnalysis>> = files
        .par_iter()
        .map(|path| analyze_file(path, language))
        .collect();

    let mut analyses = Vec::with_capacity(outcomes.len());
    let mut failures = 0usize;
    for outcome in outcomes {
        match outcome {
            Ok(mut analysis) => {
                analysis.results.retain(|r| r.severity() >= min_severity);
                analyses.push(analysis);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                failures += 1;
            }
        }
    }

    match format {
        OutputFormat::Terminal => analyses
            .iter()
            .for_each(|analysis| print_terminal(analysis, &config.colors)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analyses)?),
    }

    if failures > 0 {
        eprintln!("{} of {} files could not be analyzed", failures, files.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_terminal(analysis: &FileAnalysis, palette: &ColorPalette) {
    let index = LineIndex::new(&analysis.text);
    for result in &analysis.results {
        let at = index.location(result.span.decl_start);
        println!(
            "{}:{}:{} {} {} - {}",
            analysis.path.display(),
            at.line,
            at.column + 1,
            result.name(),
            paint(result, palette),
            result.signal.explanation()
        );
    }
}

fn paint(result: &AnalysisResult, palette: &ColorPalette) -> String {
    let notation = result.complexity.to_string();
    match palette.rgb(result.severity()) {
        Some((r, g, b)) => notation.truecolor(r, g, b).to_string(),
        None => notation,
    }
}

fn run_watch(dir: PathBuf, debounce: Duration, config: AnalyzerConfig) -> Result<()> {
    if !config.enable {
        tracing::info!("analysis disabled by config");
        return Ok(());
    }

    let watch_config = WatchConfig::new(dir).with_debounce(debounce);
    let palette = config.colors.clone();
    let handler: Arc<Mutex<dyn ReanalysisHandler>> = Arc::new(Mutex::new(AnalyzeOnChange::new(
        config,
        move |analysis: FileAnalysis| print_terminal(&analysis, &palette),
    )));

    let mut watcher = FileWatcher::new(watch_config, handler)?;
    watcher.start()?;
    eprintln!(
        "Watching {} (Ctrl-C to stop)",
        watcher.config().root_path.display()
    );

    while watcher.is_running() {
        std::thread::sleep(Duration::from_millis(200));
    }
    Ok(())
}
