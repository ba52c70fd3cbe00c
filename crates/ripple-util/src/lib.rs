//! Shared utilities for the ripple dependency manager.
//!
//! This crate provides cross-cutting concerns used by the other ripple
//! crates: the unified error type, validation problem records, and small
//! filesystem helpers.

pub mod errors;
pub mod fs;
