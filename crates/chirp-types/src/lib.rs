//! Shared wire and domain types for the chirp backend.

pub mod api;
pub mod models;
