//! Core of the property report builder: forms, wizard engine, derived
//! financial projections, the report document tree and the export boundary.

pub mod calculations;
pub mod county;
pub mod document;
pub mod export;
pub mod models;
pub mod report;
pub mod wizard;

pub use document::{ReportDocument, ReportKind};
pub use export::{DownloadSink, ExportError, ReportSerializer};
pub use models::*;
pub use report::ReportForm;
pub use wizard::{Mergeable, Wizard, WizardError};
