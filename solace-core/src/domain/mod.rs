//! Core domain types
//!
//! This module contains the core domain structures used across Solace components.
//! These types represent the fundamental entities shared between the HTTP client
//! (for polling) and the CLI frontend (for session tracking).

pub mod session;
pub mod task;
