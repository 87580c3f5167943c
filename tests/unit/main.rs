//! Unit test harness.
//!
//! Tests are organized by area:
//! - `align` - the alignment engine and post-filters
//! - `input` - FASTA boundary handling
//! - `motif` - the Gibbs motif sampler

mod align;
mod input;
mod motif;
