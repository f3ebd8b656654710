pub mod transaction;
pub use transaction::*;

pub mod holding;
pub use holding::*;

pub mod benchmark;
pub use benchmark::*;

pub mod instrument_class;
pub use instrument_class::*;

pub mod snapshot;
pub use snapshot::*;

pub mod performance;
pub use performance::*;

pub mod managers;
pub use managers::*;
