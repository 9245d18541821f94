use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ExportError, ReportSerializer};

/// Physical page size of the exported file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in millimetres.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::Letter => (215.9, 279.4),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A4 => "a4",
            Self::Letter => "letter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(Self::A4),
            "letter" => Some(Self::Letter),
            _ => None,
        }
    }
}

/// Serializer-agnostic export configuration.
///
/// `format` must match the [`SerializerFactory::format_name`] of a
/// registered factory.
///
/// | format | page_size         |
/// |--------|-------------------|
/// | `pdf`  | `a4` or `letter`  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"pdf"`).
    pub format: String,
    pub page_size: PageSize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "pdf".to_string(),
            page_size: PageSize::A4,
        }
    }
}

/// One implementation per output format. Each serializer crate exports a
/// unit struct implementing this trait, registered with a
/// [`SerializerRegistry`] at startup.
#[async_trait]
pub trait SerializerFactory: Send + Sync {
    /// Unique, lowercase identifier for this format.
    fn format_name(&self) -> &'static str;

    async fn create(
        &self,
        config: &ExportConfig,
    ) -> Result<Box<dyn ReportSerializer>, ExportError>;
}

/// Registry of [`SerializerFactory`] instances, keyed by format name.
pub struct SerializerRegistry {
    factories: HashMap<&'static str, Box<dyn SerializerFactory>>,
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory, replacing any previous one with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn SerializerFactory>,
    ) {
        self.factories.insert(factory.format_name(), factory);
    }

    /// Names of every registered format, sorted alphabetically.
    pub fn available_formats(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatches to the factory matching `config.format`.
    ///
    /// # Errors
    /// * [`ExportError::Configuration`] when no factory is registered for
    ///   the requested format.
    /// * Any error the chosen factory returns.
    pub async fn create(
        &self,
        config: &ExportConfig,
    ) -> Result<Box<dyn ReportSerializer>, ExportError> {
        let factory = self
            .factories
            .get(config.format.as_str())
            .ok_or_else(|| {
                ExportError::Configuration(format!(
                    "unknown format '{}'; available: {:?}",
                    config.format,
                    self.available_formats()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
