//! Command implementations for bitbloom-cmd

pub mod build;
pub mod contains;
pub mod hash;
pub mod inspect;
