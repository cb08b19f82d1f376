//! This is the library of the required reviewers gate.
pub mod config;
pub mod gate;
pub mod github;
pub mod utils;

#[cfg(test)]
mod tests;
