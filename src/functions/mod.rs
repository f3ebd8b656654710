pub mod aggregate;
pub use aggregate::*;

pub mod changes;
pub use changes::*;

pub mod reconcile;
pub use reconcile::*;

pub mod project;
pub use project::*;
