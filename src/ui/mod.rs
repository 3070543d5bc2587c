//! Terminal rendering for the `forkwise` binary.

pub mod blocks;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
