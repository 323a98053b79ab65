pub mod config;
pub mod logging;

pub mod location;
pub mod query;
pub mod sort;
pub mod sync;
