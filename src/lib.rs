pub mod app;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FinderConfig;

pub use core::{
    aggregate::{resort, AppointmentSearch},
    fetch::HttpRegistryClient,
    session::{SearchSession, SearchToken},
};
pub use domain::model::{AppointmentListing, ResultSet, SearchCriteria, SortKey};
pub use utils::error::{FinderError, Result};
