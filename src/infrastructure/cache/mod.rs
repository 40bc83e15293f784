//! Cache store adapters.
//!
//! `RedisCacheStore` is the production store; `InMemoryCacheStore` backs
//! cache-less local runs and tests.

mod memory;
mod redis;

pub use memory::InMemoryCacheStore;
pub use redis::RedisCacheStore;
