//! Data Transfer Objects for backend communication
//!
//! This module contains the wire-format types of the Solace backend API.
//! Requests are form-encoded; responses are JSON. The shapes here mirror the
//! backend exactly, including its quirks (the boolean reply used to signal an
//! invalid upstream API key).

pub mod message;
pub mod settings;
