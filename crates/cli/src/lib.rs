//! NUBAN CLI - command orchestration
//!
//! This crate provides the `nuban` binary and its command implementations.

pub mod commands;
