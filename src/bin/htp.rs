//! HTP CLI - Command-line interface for the HTP drawing analyzer
//!
//! Commands:
//! - analyze: Produce an analysis report from drawing telemetry
//! - validate: Check a submission against the input shape
//! - config: Print the default analyzer configuration

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use htp_analyzer::encoder::ReportEncoder;
use htp_analyzer::validator::{check_shape, ShapeViolation};
use htp_analyzer::{AnalysisError, AnalyzerConfig, DrawingAnalyzer, ANALYZER_VERSION, PRODUCER_NAME};
use tracing_subscriber::EnvFilter;

/// HTP - Feature extraction and classification for House-Tree-Person drawings
#[derive(Parser)]
#[command(name = "htp")]
#[command(version = ANALYZER_VERSION)]
#[command(about = "Analyze House-Tree-Person drawing telemetry", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce an analysis report from drawing telemetry
    Analyze {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Analyzer configuration JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Check a submission against the input shape
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default analyzer configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), HtpCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            output,
            config,
            format,
        } => cmd_analyze(&input, &output, config.as_deref(), format),

        Commands::Validate { input, json } => cmd_validate(&input, json),

        Commands::Config => cmd_config(),
    }
}

fn cmd_analyze(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<(), HtpCliError> {
    let config = match config {
        Some(path) => AnalyzerConfig::from_json(&fs::read_to_string(path)?)?,
        None => AnalyzerConfig::default(),
    };

    let encoder = match format {
        OutputFormat::Pretty => ReportEncoder::pretty(),
        OutputFormat::Compact => ReportEncoder::new(),
    };
    let analyzer = DrawingAnalyzer::with_config(config)?.with_encoder(encoder);

    let input_data = read_input(input)?;
    let report = analyzer.analyze_json(&input_data)?;

    write_output(output, &report)
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), HtpCliError> {
    let input_data = read_input(input)?;
    let payload: serde_json::Value = serde_json::from_str(&input_data)?;

    let violation = check_shape(&payload).err();
    let report = ValidationReport {
        valid: violation.is_none(),
        violation,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        match &report.violation {
            None => println!("Submission is valid"),
            Some(ShapeViolation::NotAnObject) => println!("Submission is not a JSON object"),
            Some(ShapeViolation::MissingPhases) => println!("Missing 'phases' key"),
            Some(ShapeViolation::PhasesNotAList) => println!("'phases' is not a list"),
            Some(ShapeViolation::EmptyPhases) => println!("'phases' is empty"),
            Some(ShapeViolation::InvalidPhases { phases }) => {
                println!("Invalid phases: {}", phases.len());
                println!("\nErrors:");
                for phase in phases {
                    println!(
                        "  - Phase at index {}: missing {}",
                        phase.index,
                        phase.missing_fields.join(", ")
                    );
                }
            }
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(HtpCliError::ValidationFailed)
    }
}

fn cmd_config() -> Result<(), HtpCliError> {
    println!("{}", AnalyzerConfig::default().to_json()?);
    Ok(())
}

fn read_input(input: &Path) -> Result<String, HtpCliError> {
    if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(HtpCliError::InteractiveStdin);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn write_output(output: &Path, data: &str) -> Result<(), HtpCliError> {
    if output.to_string_lossy() == "-" {
        println!("{data}");
    } else {
        fs::write(output, data)?;
        tracing::info!(path = %output.display(), "Report written");
    }
    Ok(())
}

// Error types

#[derive(Debug)]
enum HtpCliError {
    Io(io::Error),
    Json(serde_json::Error),
    Analysis(AnalysisError),
    ValidationFailed,
    InteractiveStdin,
}

impl From<io::Error> for HtpCliError {
    fn from(e: io::Error) -> Self {
        HtpCliError::Io(e)
    }
}

impl From<serde_json::Error> for HtpCliError {
    fn from(e: serde_json::Error) -> Self {
        HtpCliError::Json(e)
    }
}

impl From<AnalysisError> for HtpCliError {
    fn from(e: AnalysisError) -> Self {
        HtpCliError::Analysis(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<HtpCliError> for CliError {
    fn from(e: HtpCliError) -> Self {
        match e {
            HtpCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            HtpCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            HtpCliError::Analysis(e) => {
                let (code, hint) = match &e {
                    AnalysisError::InvalidInput(_) => (
                        "INVALID_INPUT",
                        "Run 'htp validate' for details",
                    ),
                    AnalysisError::ComputationFault(_) => (
                        "COMPUTATION_FAULT",
                        "Check for extreme or inconsistent telemetry values",
                    ),
                    AnalysisError::JsonError(_) => ("JSON_ERROR", "Check JSON syntax"),
                    AnalysisError::ConfigError(_) => (
                        "CONFIG_ERROR",
                        "Run 'htp config' to see the expected configuration",
                    ),
                };
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint: Some(hint.to_string()),
                }
            }
            HtpCliError::ValidationFailed => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: "Submission failed validation".to_string(),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            HtpCliError::InteractiveStdin => CliError {
                code: "NO_INPUT".to_string(),
                message: "No input provided on stdin".to_string(),
                hint: Some(format!(
                    "Pipe a submission into {PRODUCER_NAME} or pass --input <file>"
                )),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    violation: Option<ShapeViolation>,
}
