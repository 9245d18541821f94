//! Command handlers behind the `report-builder` binary.
//!
//! Handlers return the text to print so they can be tested without a
//! terminal; `main` only parses arguments and prints.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use report_core::county;
use report_core::export::{ExportConfig, SerializerRegistry};
use report_core::{ReportForm, Wizard};
use report_pdf::PdfSerializerFactory;
use tracing::{debug, info};

use crate::form_loader::{self, FormFile};
use crate::preferences::{Module, Shell, Theme};
use crate::session::{BuilderSession, FileDownloads};

/// Constructs the serializer registry with every supported format.
pub fn build_registry() -> SerializerRegistry {
    let mut registry = SerializerRegistry::new();
    registry.register(Box::new(PdfSerializerFactory));
    debug!(formats = ?registry.available_formats(), "serializer registry ready");
    registry
}

/// How a builder command should run.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub input: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    /// Print every step instead of exporting.
    pub preview: bool,
    /// Print a single step instead of exporting.
    pub step: Option<usize>,
    pub export: ExportConfig,
}

/// Loads the form, then previews or exports it.
pub async fn run_builder<F: FormFile>(
    base: F,
    request: &BuildRequest,
    registry: &SerializerRegistry,
) -> Result<String> {
    let form = match &request.input {
        Some(path) => form_loader::load_from_file(path, &base)
            .with_context(|| format!("loading form from {}", path.display()))?,
        None => base,
    };
    let mut session = BuilderSession::new(form).context("building the wizard")?;

    if let Some(ordinal) = request.step {
        session.wizard_mut().jump_to(ordinal)?;
        return Ok(render_step(session.wizard()));
    }
    if request.preview {
        return Ok(preview(session.wizard_mut()));
    }

    let serializer = registry.create(&request.export).await?;
    let sink = FileDownloads::new(
        request
            .out_dir
            .clone()
            .unwrap_or_else(FileDownloads::default_dir),
    );
    let path = session
        .export(serializer.as_ref(), &sink)
        .await
        .context("export failed")?;
    Ok(format!("Saved {}", path.display()))
}

/// The current step as plain text.
pub fn render_step<F: ReportForm>(wizard: &Wizard<F>) -> String {
    let steps = wizard.steps();
    let view = wizard.render_current();
    let mut out = format!("{}: {}\n", steps.position_label(), wizard.current_title());

    let width = view
        .fields
        .iter()
        .map(|field| field.label.len())
        .max()
        .unwrap_or(0);
    for field in &view.fields {
        let _ = writeln!(out, "  {:<width$}  {}", field.label, field.value);
    }
    for note in &view.notes {
        let _ = writeln!(out, "  {note}");
    }
    for link in &view.links {
        let _ = writeln!(out, "  {} <{}>", link.label, link.url);
    }
    out
}

/// Walks every step from the first, leaving the wizard on the last.
pub fn preview<F: ReportForm>(wizard: &mut Wizard<F>) -> String {
    let mut pages = Vec::with_capacity(wizard.steps().len());
    let mut ordinal = 1;
    while wizard.jump_to(ordinal).is_ok() {
        pages.push(render_step(wizard));
        ordinal += 1;
    }
    pages.join("\n")
}

pub fn county_lookup(city: &str) -> String {
    let result = county::lookup(city);
    if !result.found {
        return format!("No county records found for '{}'", result.city);
    }
    let mut out = format!("{}\n", result.city);
    for url in result.urls {
        let _ = writeln!(out, "  {url}");
    }
    out
}

pub fn county_suggestions(input: &str) -> String {
    let suggestions = county::suggest(input);
    if suggestions.is_empty() {
        "No suggestions".to_string()
    } else {
        suggestions.join("\n")
    }
}

/// A change to the shell preferences requested from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefsChange {
    Show,
    Theme(Theme),
    ToggleTheme,
    Sidebar(bool),
    Module(Module),
}

pub fn apply_prefs(
    shell: &mut Shell,
    change: PrefsChange,
) -> Result<String> {
    match change {
        PrefsChange::Show => {}
        PrefsChange::Theme(theme) => {
            shell.set_theme(theme)?;
        }
        PrefsChange::ToggleTheme => {
            shell.toggle_theme()?;
        }
        PrefsChange::Sidebar(collapsed) => shell.set_sidebar_collapsed(collapsed)?,
        PrefsChange::Module(module) => shell.select_module(module)?,
    }
    let prefs = shell.preferences();
    Ok(format!(
        "theme = {}\nsidebarCollapsed = {}\nactiveModule = {}",
        prefs.theme.as_str(),
        prefs.sidebar_collapsed,
        prefs.active_module.as_str()
    ))
}

/// Marks the builder module as active, as opening it in the dashboard does.
pub fn remember_module(
    shell: &mut Shell,
    module: Module,
) -> Result<()> {
    if shell.preferences().active_module != module {
        shell.select_module(module)?;
        info!(module = module.as_str(), "active module remembered");
    }
    Ok(())
}

/// Creates `path`'s parent directory if it is missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}
