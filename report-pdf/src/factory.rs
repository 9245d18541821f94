use async_trait::async_trait;
use report_core::export::{ExportConfig, ExportError, ReportSerializer, SerializerFactory};

use crate::PdfSerializer;

/// [`SerializerFactory`] for PDF output.
///
/// Register this with a [`report_core::export::SerializerRegistry`] to make
/// the `"pdf"` format available:
///
/// ```rust
/// use report_core::export::SerializerRegistry;
/// use report_pdf::PdfSerializerFactory;
///
/// let mut registry = SerializerRegistry::new();
/// registry.register(Box::new(PdfSerializerFactory));
/// assert_eq!(registry.available_formats(), vec!["pdf"]);
/// ```
pub struct PdfSerializerFactory;

#[async_trait]
impl SerializerFactory for PdfSerializerFactory {
    fn format_name(&self) -> &'static str {
        "pdf"
    }

    async fn create(
        &self,
        config: &ExportConfig,
    ) -> Result<Box<dyn ReportSerializer>, ExportError> {
        Ok(Box::new(PdfSerializer::new(config.page_size)))
    }
}

#[cfg(test)]
mod tests {
    use report_core::export::{ExportConfig, PageSize, SerializerFactory, SerializerRegistry};

    use super::PdfSerializerFactory;

    #[test]
    fn format_name_is_pdf() {
        assert_eq!(PdfSerializerFactory.format_name(), "pdf");
    }

    #[tokio::test]
    async fn registry_creates_pdf_serializer() {
        let mut registry = SerializerRegistry::new();
        registry.register(Box::new(PdfSerializerFactory));

        let config = ExportConfig {
            format: "pdf".to_string(),
            page_size: PageSize::Letter,
        };

        let serializer = registry.create(&config).await;
        assert!(
            serializer.is_ok(),
            "failed to create pdf serializer: {:#?}",
            serializer.err()
        );
    }
}
