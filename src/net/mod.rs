//! Networking for the activities API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and response interpretation, and `types` defines
//! the wire schema.

pub mod api;
pub mod types;
