//! Presentation Layer
//!
//! HTTP handlers, DTOs and HTML pages for the dev endpoints.

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;
