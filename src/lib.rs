//! pic2ascii library crate.
//!
//! Converts decoded images to ASCII art, splitting the work across one
//! thread per available core.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod normalize;
