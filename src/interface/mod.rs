//! # Interface Layer
//!
//! Process entry points: command-line parsing and the stdio server loop.

pub mod cli;
pub mod serve;
