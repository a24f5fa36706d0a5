// Cache management module

pub mod expiring;
pub mod models;
pub mod sweeper;

pub use expiring::ExpiringCache;
pub use models::{CacheEntry, CacheStats};
pub use sweeper::{spawn_sweeper, Sweep};
