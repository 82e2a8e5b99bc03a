//! Fitness evaluation
//!
//! This module provides the Hamming-similarity fitness measure.

pub mod hamming;

pub mod prelude {
    pub use super::hamming::*;
}
