// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::pipeline::RunRequest;
use crate::providers::deepl::DeepL;
use crate::providers::{LanguageDirection, TranslationProvider};

mod errors;
mod pipeline;
mod providers;
mod resource_processor;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a .resw resource file using DeepL (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// List the languages supported by DeepL for the given auth key
    Languages {
        /// DeepL auth key (free keys end with ':fx')
        #[arg(short = 'k', long)]
        auth_key: String,
    },

    /// Generate shell completions for reswai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input .resw file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file path (defaults to '<input stem>.<target>.resw' beside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// DeepL auth key (free keys end with ':fx')
    #[arg(short = 'k', long)]
    auth_key: String,

    /// Source language code (e.g., 'en', 'de', 'fr')
    #[arg(short, long)]
    source_language: String,

    /// Target language code (e.g., 'en', 'de', 'fr')
    #[arg(short, long)]
    target_language: String,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// reswai - .resw resource file translator
///
/// Translates the values of a Windows .resw localization resource file
/// using the DeepL API, preserving all other document structure.
#[derive(Parser, Debug)]
#[command(name = "reswai")]
#[command(version = "1.0.0")]
#[command(about = "DeepL-powered .resw resource file translator")]
#[command(long_about = "reswai translates the values of a .resw resource file using the DeepL API.

EXAMPLES:
    reswai Resources.resw -k KEY:fx -s en -t fr     # Translate English to French
    reswai Resources.resw -k KEY:fx -s en -t fr -f  # Overwrite an existing output
    reswai -o out.resw Resources.resw -k KEY -s en -t de
    reswai languages -k KEY:fx                      # List supported languages
    reswai completions bash > reswai.bash           # Generate bash completions

AUTH KEYS:
    Keys ending in ':fx' are DeepL API Free keys and are sent to
    api-free.deepl.com; all other keys are sent to api.deepl.com.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .resw file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file path (defaults to '<input stem>.<target>.resw' beside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// DeepL auth key (free keys end with ':fx')
    #[arg(short = 'k', long)]
    auth_key: Option<String>,

    /// Source language code (e.g., 'en', 'de', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'de', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after argument parsing if requested
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "reswai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages { auth_key }) => run_languages(&auth_key).await,
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args so the subcommand can be omitted
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;
            let auth_key = cli
                .auth_key
                .ok_or_else(|| anyhow!("--auth-key is required"))?;
            let source_language = cli
                .source_language
                .ok_or_else(|| anyhow!("--source-language is required"))?;
            let target_language = cli
                .target_language
                .ok_or_else(|| anyhow!("--target-language is required"))?;

            let translate_args = TranslateArgs {
                input_path,
                output: cli.output,
                auth_key,
                source_language,
                target_language,
                force_overwrite: cli.force_overwrite,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

/// Default output path beside the input: '<input stem>.<target>.resw'
fn generate_output_path(input_path: &Path, target_language: &str) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let parent = input_path.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}.{}.resw", stem, target_language.to_lowercase()))
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    if !options.input_path.is_file() {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| generate_output_path(&options.input_path, &options.target_language));

    if output_path.exists() && !options.force_overwrite {
        warn!(
            "Output file already exists: {:?}. Use -f to force overwrite.",
            output_path
        );
        return Ok(());
    }

    let source = std::fs::read(&options.input_path)
        .context(format!("Failed to read input file: {:?}", options.input_path))?;

    let request = RunRequest {
        auth_key: options.auth_key,
        source,
        source_lang: options.source_language,
        target_lang: options.target_language,
    };

    let output = pipeline::run(&request).await?;

    std::fs::write(&output_path, output)
        .context(format!("Failed to write output file: {:?}", output_path))?;

    info!("Success: {:?}", output_path);

    Ok(())
}

async fn run_languages(auth_key: &str) -> Result<()> {
    let provider = DeepL::new(auth_key, "");

    let source_languages = provider.languages(LanguageDirection::Source).await?;
    if source_languages.is_empty() {
        return Err(anyhow!("The auth key is not valid: no source languages available"));
    }
    let target_languages = provider.languages(LanguageDirection::Target).await?;

    println!("Source languages:");
    for language in &source_languages {
        println!("  {}", language);
    }

    println!("\nTarget languages:");
    for language in &target_languages {
        println!("  {}", language);
    }

    Ok(())
}
