//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod bump_counter;
pub mod config;
pub mod list_routes;
pub mod send_test_email;
pub mod truncate_tables;
