pub mod estimation;

use crate::shared::config::Config;

/// Shared state handed to every handler.
pub struct AppState {
    pub config: Config,
}
