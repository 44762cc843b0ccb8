pub mod aggregate;
pub mod criteria;
pub mod fetch;
pub mod resolver;
pub mod session;

pub use crate::domain::model::{AppointmentListing, ResultSet, SearchCriteria, SortKey};
pub use crate::domain::ports::{ConfigProvider, RegistryClient};
pub use crate::utils::error::Result;
