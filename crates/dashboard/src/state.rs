// File: crates/dashboard/src/state.rs
// Summary: Load lifecycle for one dashboard session: Loading, then exactly one of Ready or Failed.

use chart_core::Dataset;
use tracing::error;

use crate::source::{DataSource, LoadError};

#[derive(Clone, Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Dataset),
}

impl LoadState {
    pub fn settle(result: Result<Dataset, LoadError>) -> Self {
        match result {
            Ok(dataset) => LoadState::Ready(dataset),
            Err(e) => {
                error!(error = %e, "loading telemetry failed");
                LoadState::Failed(e.to_string())
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Ready(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Owns the source and its state. The load runs at most once; a failure is
/// final for the session.
#[derive(Debug)]
pub struct Session {
    source: DataSource,
    state: LoadState,
}

impl Session {
    pub fn new(source: DataSource) -> Self {
        Self { source, state: LoadState::Loading }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub async fn load(&mut self) -> &LoadState {
        if self.state.is_loading() {
            self.state = LoadState::settle(self.source.load().await);
        }
        &self.state
    }
}
