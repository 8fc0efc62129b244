//! Backend services

pub mod enrichment;
pub mod seed;
