//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod send;
pub mod verify;

pub use send::SendCommandHandler;
pub use verify::VerifyCommandHandler;
