//! HTTP route handlers

pub mod enrich;
pub mod words;
