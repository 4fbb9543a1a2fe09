use std::sync::Arc;

use anyhow::Result;
use notion_calendar_core::ViewRegistry;

use crate::config::ServerConfig;

/// Shared application state. Views are built once; records are fetched on
/// every request.
pub struct AppState<S> {
    pub config: Arc<ServerConfig>,
    pub views: Arc<ViewRegistry>,
    pub source: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(config: ServerConfig, source: S) -> Result<Self> {
        let views = ViewRegistry::new(&config.view_settings()?);

        Ok(AppState {
            config: Arc::new(config),
            views: Arc::new(views),
            source: Arc::new(source),
        })
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        AppState {
            config: Arc::clone(&self.config),
            views: Arc::clone(&self.views),
            source: Arc::clone(&self.source),
        }
    }
}
