//! Domain Layer - Entities and interfaces
//!
//! This layer contains:
//! - Domain entities (EmailJob)
//! - The route catalog (RouteEntry, RouteCatalog)
//! - Repository traits (interfaces)

pub mod catalog;
pub mod entities;
pub mod repository;
