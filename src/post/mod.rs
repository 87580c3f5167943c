//! Post-processing of local alignment results.

pub mod filter;
