// File: crates/dashboard/src/lib.rs
// Summary: Dashboard composer library: data source loading, load state, fixed chart set, page composition and output.

pub mod charts;
pub mod cli;
pub mod output;
pub mod page;
pub mod settings;
pub mod source;
pub mod state;

pub use charts::battery_charts;
pub use page::{Card, Page};
pub use settings::{OutputFormat, Settings};
pub use source::{DataSource, LoadError};
pub use state::{LoadState, Session};
