//! HTP Analyzer - feature extraction and rule-based classification for
//! House-Tree-Person drawing telemetry
//!
//! The analyzer turns per-phase drawing telemetry into an analysis report through a
//! deterministic pipeline: validation → feature extraction → composite scoring
//! → classification → profile, insights and statistical summary.
//!
//! ## Surfaces
//!
//! - **Library**: [`analyze_drawing`] for one-shot use, [`DrawingAnalyzer`] when
//!   configuration or a custom log sink is needed
//! - **CLI**: the `htp` binary (`cli` feature)
//! - **FFI**: C-compatible `htp_*` functions in [`ffi`]

pub mod classifier;
pub mod config;
pub mod encoder;
pub mod error;
pub mod features;
pub mod insights;
pub mod logging;
pub mod pipeline;
pub mod profile;
pub mod scoring;
pub mod stats;
pub mod summary;
pub mod types;
pub mod validator;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use classifier::PersonalityClassifier;
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ErrorReport};
pub use logging::{AnalysisLog, NoopLog, TracingLog};
pub use pipeline::{analyze_drawing, DrawingAnalyzer};
pub use types::{AnalysisReport, DrawingSession, PersonalityType, PhaseRecord};
pub use validator::validate_input;

/// Analyzer version embedded in every report
pub const ANALYZER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "htp-analyzer";
