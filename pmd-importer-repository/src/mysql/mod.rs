//! MySQL implementations of the importer repositories.
mod connector;
mod legacy_repository;
mod pool;
mod rows;
mod target_repository;

pub use connector::MySqlLegacyConnector;
pub use legacy_repository::MySqlLegacyRepository;
pub use pool::connect_pool;
pub use target_repository::{FORCE_RESET_META_KEY, MySqlTargetRepository};
