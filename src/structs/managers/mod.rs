pub mod persistable;
pub use persistable::*;

pub mod transactions_manager;
pub use transactions_manager::*;

pub mod cache_manager;
pub use cache_manager::*;

pub mod snapshot_manager;
pub use snapshot_manager::*;
