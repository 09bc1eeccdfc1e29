//! Command-line front end for lumascii.

pub mod cli;
pub mod pipeline;
