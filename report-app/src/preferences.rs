//! Dashboard shell flags: theme, sidebar state and the active module.
//!
//! Stored as a small TOML file whose keys match the names the dashboard
//! has always used:
//!
//! ```toml
//! theme = "dark"
//! sidebarCollapsed = false
//! activeModule = "county-search"
//! ```
//!
//! A missing file yields the defaults. Writes go to a sibling `.tmp` file
//! first and are renamed into place.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const FILE_NAME: &str = "preferences.toml";
const APP_DIR: &str = "report-builder";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot access preferences file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preferences file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Result<Self, PreferencesError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(PreferencesError::UnknownValue {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

/// Dashboard modules reachable from the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    #[default]
    CountySearch,
    TurnoverBuilder,
    RentalEstimate,
    Scripts,
    Automation,
    Data,
    OperationsSchedule,
}

impl Module {
    pub const ALL: [Module; 7] = [
        Self::CountySearch,
        Self::TurnoverBuilder,
        Self::RentalEstimate,
        Self::Scripts,
        Self::Automation,
        Self::Data,
        Self::OperationsSchedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CountySearch => "county-search",
            Self::TurnoverBuilder => "turnover-builder",
            Self::RentalEstimate => "rental-estimate",
            Self::Scripts => "scripts",
            Self::Automation => "automation",
            Self::Data => "data",
            Self::OperationsSchedule => "operations-schedule",
        }
    }

    pub fn parse(s: &str) -> Result<Self, PreferencesError> {
        Self::ALL
            .into_iter()
            .find(|module| module.as_str() == s.trim())
            .ok_or_else(|| PreferencesError::UnknownValue {
                kind: "module",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    #[serde(rename = "sidebarCollapsed")]
    pub sidebar_collapsed: bool,
    #[serde(rename = "activeModule")]
    pub active_module: Module,
}

/// Reads and writes [`Preferences`] at a fixed path.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/report-builder/preferences.toml`, or the
    /// working directory when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_default()
            .join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Preferences, PreferencesError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no preferences file, using defaults");
            return Ok(Preferences::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        toml::from_str(&data).map_err(|source| PreferencesError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(
        &self,
        preferences: &Preferences,
    ) -> Result<(), PreferencesError> {
        let data = toml::to_string(preferences)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &data).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    fn io_error(
        &self,
        source: std::io::Error,
    ) -> PreferencesError {
        PreferencesError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(
    path: &Path,
    data: &str,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// The loaded preferences plus the store they came from. Every change is
/// written back immediately.
#[derive(Debug)]
pub struct Shell {
    store: PreferencesStore,
    preferences: Preferences,
}

impl Shell {
    pub fn load(store: PreferencesStore) -> Result<Self, PreferencesError> {
        let preferences = store.load()?;
        Ok(Self { store, preferences })
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, PreferencesError> {
        self.set_theme(self.preferences.theme.toggled())
    }

    pub fn set_theme(
        &mut self,
        theme: Theme,
    ) -> Result<Theme, PreferencesError> {
        self.preferences.theme = theme;
        self.store.save(&self.preferences)?;
        info!(theme = theme.as_str(), "theme changed");
        Ok(theme)
    }

    pub fn set_sidebar_collapsed(
        &mut self,
        collapsed: bool,
    ) -> Result<(), PreferencesError> {
        self.preferences.sidebar_collapsed = collapsed;
        self.store.save(&self.preferences)?;
        info!(collapsed, "sidebar state changed");
        Ok(())
    }

    pub fn select_module(
        &mut self,
        module: Module,
    ) -> Result<(), PreferencesError> {
        self.preferences.active_module = module;
        self.store.save(&self.preferences)?;
        info!(module = module.as_str(), "module selected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> PreferencesStore {
        PreferencesStore::new(dir.path().join("nested").join(FILE_NAME))
    }

    // =========================================================================
    // store tests
    // =========================================================================

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();

        let prefs = store_in(&dir).load().unwrap();

        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.active_module, Module::CountySearch);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let prefs = Preferences {
            theme: Theme::Light,
            sidebar_collapsed: true,
            active_module: Module::TurnoverBuilder,
        };

        store.save(&prefs).unwrap();

        assert_eq!(store.load().unwrap(), prefs);
        assert!(!tmp_path(store.path()).exists());
    }

    #[test]
    fn file_uses_dashboard_key_names() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&Preferences {
                sidebar_collapsed: true,
                ..Default::default()
            })
            .unwrap();

        let text = fs::read_to_string(store.path()).unwrap();

        assert!(text.contains("theme = \"dark\""));
        assert!(text.contains("sidebarCollapsed = true"));
        assert!(text.contains("activeModule = \"county-search\""));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "theme = \"light\"\n").unwrap();

        let prefs = store.load().unwrap();

        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.active_module, Module::CountySearch);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "theme = \"sepia\"\n").unwrap();

        assert!(matches!(store.load(), Err(PreferencesError::Parse { .. })));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/a/preferences.toml")),
            PathBuf::from("/a/preferences.toml.tmp")
        );
    }

    // =========================================================================
    // shell tests
    // =========================================================================

    #[test]
    fn shell_persists_every_change() {
        let dir = TempDir::new().unwrap();
        let mut shell = Shell::load(store_in(&dir)).unwrap();

        assert_eq!(shell.toggle_theme().unwrap(), Theme::Light);
        shell.set_sidebar_collapsed(true).unwrap();
        shell.select_module(Module::RentalEstimate).unwrap();

        let reloaded = store_in(&dir).load().unwrap();
        assert_eq!(&reloaded, shell.preferences());
        assert_eq!(reloaded.active_module, Module::RentalEstimate);
    }

    #[test]
    fn module_and_theme_parsing() {
        assert_eq!(
            Module::parse("operations-schedule").unwrap(),
            Module::OperationsSchedule
        );
        assert!(Module::parse("calendar").is_err());
        assert_eq!(Theme::parse("Light").unwrap(), Theme::Light);
    }
}
