pub mod proxy;
pub use proxy::*;

pub mod stooq;
pub use stooq::*;

pub mod fx;
pub use fx::*;

pub mod market_service;
pub use market_service::*;
