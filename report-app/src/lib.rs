pub mod app;
pub mod form_loader;
pub mod logging;
pub mod preferences;
pub mod session;
pub mod utils;
