//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory entity snapshots and every mutation of them.
//! - Keep view and preference layers decoupled from collection details.

pub mod workspace;
