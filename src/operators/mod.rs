//! Evolution operators
//!
//! This module provides the selection, crossover, and reseeding stages.

pub mod crossover;
pub mod seeding;
pub mod selection;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::seeding::*;
    pub use super::selection::*;
}
