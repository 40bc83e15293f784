//! Domain-independent utilities.

pub mod settle;

pub use settle::{settle_all, Settled};
