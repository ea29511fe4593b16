//! tampack CLI library.
//!
//! Argument-to-configuration mapping and the command implementations behind
//! the `tampack` binary.

pub mod commands;
