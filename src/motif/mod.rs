//! Motif discovery by Gibbs sampling.

pub mod gibbs;

pub use gibbs::{GibbsConfig, GibbsSampler, Motif, MotifError};
