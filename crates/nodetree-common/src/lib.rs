//! # nodetree-common
//!
//! Shared types, error definitions, the render-document model, and constants
//! used across the nodetree workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the primitives the engine and the CLI build
//! upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
