//! Solace Core
//!
//! Core types and abstractions for the Solace chat system.
//!
//! This crate contains:
//! - Domain types: Core business entities (TaskId, TaskState, SessionState, etc.)
//! - DTOs: Data transfer objects matching the backend's wire format

pub mod domain;
pub mod dto;
