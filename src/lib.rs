//! Card Catalog API Library
//!
//! Read-only REST API over a trading-card catalog: list, lookup, search and
//! paginated listing of cards stored in MySQL.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::cards;
pub use modules::health;
