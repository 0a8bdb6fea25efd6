//! Infrastructure Layer - Repository implementations

pub mod mailer;
pub mod postgres;
