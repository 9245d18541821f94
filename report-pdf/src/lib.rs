//! PDF serializer for report documents.
//!
//! Layout runs on a blocking worker so the async caller is never stalled
//! by PDF encoding.

mod factory;
pub mod format;
pub mod layout;
mod render;

use async_trait::async_trait;
use report_core::document::ReportDocument;
use report_core::export::{ExportError, PageSize, ReportSerializer};
use tracing::{debug, warn};

pub use factory::PdfSerializerFactory;
pub use render::render_pdf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfSerializer {
    page_size: PageSize,
}

impl PdfSerializer {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }
}

#[async_trait]
impl ReportSerializer for PdfSerializer {
    fn format_name(&self) -> &'static str {
        "pdf"
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }

    async fn serialize(
        &self,
        document: &ReportDocument,
    ) -> Result<Vec<u8>, ExportError> {
        let document = document.clone();
        let page_size = self.page_size;
        debug!(title = %document.title, pages = document.pages.len(), "rendering pdf");

        let bytes = tokio::task::spawn_blocking(move || render_pdf(&document, page_size))
            .await
            .map_err(|e| {
                warn!(error = %e, "pdf worker did not finish");
                ExportError::Serialization(format!("pdf worker failed: {e}"))
            })??;

        debug!(bytes = bytes.len(), "pdf rendered");
        Ok(bytes)
    }
}
