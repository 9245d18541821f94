//! One builder session: a wizard over a report form plus the export
//! boundary that turns it into a downloaded file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use report_core::export::ExportGuard;
use report_core::{DownloadSink, ExportError, ReportForm, ReportSerializer, Wizard, WizardError};
use tracing::{debug, info, warn};

pub struct BuilderSession<F: ReportForm> {
    wizard: Wizard<F>,
    guard: ExportGuard,
}

impl<F: ReportForm> BuilderSession<F> {
    pub fn new(form: F) -> Result<Self, WizardError> {
        Ok(Self {
            wizard: form.into_wizard()?,
            guard: ExportGuard::new(),
        })
    }

    pub fn wizard(&self) -> &Wizard<F> {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard<F> {
        &mut self.wizard
    }

    pub fn is_exporting(&self) -> bool {
        self.guard.is_busy()
    }

    /// Serializes the current form and hands the bytes to `sink`.
    ///
    /// A failure is returned to the caller as a notice; the form and the
    /// current step are left as they were.
    ///
    /// # Errors
    /// * [`ExportError::AlreadyInProgress`] while another export from this
    ///   session is outstanding.
    /// * Whatever the serializer or sink reports.
    pub async fn export(
        &self,
        serializer: &dyn ReportSerializer,
        sink: &dyn DownloadSink,
    ) -> Result<PathBuf, ExportError> {
        let _ticket = self.guard.try_begin().inspect_err(|_| {
            warn!(kind = F::KIND.slug(), "export requested while one is running");
        })?;

        let form = self.wizard.snapshot();
        let document = form.document();
        let filename = form.filename(serializer.file_extension());
        debug!(%filename, format = serializer.format_name(), "exporting report");

        let bytes = serializer.serialize(&document).await.inspect_err(|error| {
            warn!(%filename, %error, "report serialization failed");
        })?;

        let path = sink.deliver(&filename, &bytes).await.inspect_err(|error| {
            warn!(%filename, %error, "report download failed");
        })?;

        info!(path = %path.display(), bytes = bytes.len(), "report exported");
        Ok(path)
    }
}

/// Writes downloads into a directory, replacing files of the same name.
#[derive(Debug, Clone)]
pub struct FileDownloads {
    dir: PathBuf,
}

impl FileDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform download directory, or the working directory.
    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn download_error(
    path: &Path,
    error: std::io::Error,
) -> ExportError {
    ExportError::Download(format!("{}: {error}", path.display()))
}

#[async_trait]
impl DownloadSink for FileDownloads {
    async fn deliver(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| download_error(&self.dir, e))?;

        let target = self.dir.join(filename);
        let tmp = self.dir.join(format!(".{filename}.part"));

        if let Err(e) = tokio::fs::write(&tmp, bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(download_error(&tmp, e));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(download_error(&target, e));
        }
        Ok(target)
    }
}
