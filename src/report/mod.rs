//! Alignment result presentation.

pub mod pairwise;
