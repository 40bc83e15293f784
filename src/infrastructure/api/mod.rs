//! Remote posts API adapter.

mod client;

pub use client::HttpPostApi;
