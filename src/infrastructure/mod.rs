//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - Remote posts API client (reqwest)
//! - Cache store implementations (Redis, in-memory)
//! - Configuration management
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod api;
pub mod cache;
pub mod config;
