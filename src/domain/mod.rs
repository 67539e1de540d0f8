//! # Domain Layer
//!
//! Core definitions, types, and traits that define the tool contract.
//! Independent of the transport, serving as the contract for other layers.

pub mod config;
pub mod error;
pub mod paths;
pub mod traits;
pub mod types;
