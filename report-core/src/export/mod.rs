//! Serialization and delivery boundary for finished reports.

pub mod registry;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;

use crate::document::{ReportDocument, ReportKind};

pub use registry::{ExportConfig, PageSize, SerializerFactory, SerializerRegistry};

/// Placeholder used in filenames when the property address is empty.
pub const FILENAME_PLACEHOLDER: &str = "property";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    AlreadyInProgress,

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("download failed: {0}")]
    Download(String),
}

/// Turns a report document into a downloadable binary.
#[async_trait]
pub trait ReportSerializer: Send + Sync {
    /// Lowercase identifier, e.g. `"pdf"`.
    fn format_name(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    async fn serialize(
        &self,
        document: &ReportDocument,
    ) -> Result<Vec<u8>, ExportError>;
}

/// Hands finished bytes to the user under a given filename.
///
/// Implementations must never leave a partially written file behind.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn deliver(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, ExportError>;
}

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/\\]+").expect("separator pattern is valid"));

/// Filename stem for a property address.
///
/// Runs of whitespace and path separators become a single `-`; an empty
/// address yields [`FILENAME_PLACEHOLDER`].
pub fn address_slug(address: &str) -> String {
    let slug = SEPARATORS.replace_all(address.trim(), "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FILENAME_PLACEHOLDER.to_string()
    } else {
        slug.to_string()
    }
}

/// `<kind>-<address slug>.<extension>`
pub fn report_filename(
    kind: ReportKind,
    address: &str,
    extension: &str,
) -> String {
    format!("{}-{}.{}", kind.slug(), address_slug(address), extension)
}

/// Refuses a second export while one is outstanding.
#[derive(Debug, Clone, Default)]
pub struct ExportGuard {
    busy: Arc<AtomicBool>,
}

impl ExportGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the guard until the returned ticket is dropped.
    pub fn try_begin(&self) -> Result<ExportTicket, ExportError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::AlreadyInProgress)?;
        Ok(ExportTicket {
            busy: Arc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
#[must_use = "the export guard is released as soon as the ticket is dropped"]
pub struct ExportTicket {
    busy: Arc<AtomicBool>,
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
