//! Shared settings and error types for the vcardkit workspace.

pub mod config;
pub mod error;
