//! Logic behind the TruthLens analyzer mockup.
//!
//! Nothing here touches the DOM: the browser crate owns rendering and
//! glue, this crate owns state transitions, catalogs and timing so they
//! can be tested natively.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod present;
pub mod report;
pub mod runner;
pub mod session;
pub mod theme;
pub mod types;
pub mod verdict;

pub use config::{AnalyzerConfig, Variant};
pub use error::{CatalogError, InputError, RunError};
pub use generator::MockGenerator;
pub use session::{Phase, Session};
pub use types::{AnalysisInput, AnalysisOutcome, AssessmentResult, EvidenceItem, InputMode, Polarity, StagedFile};
