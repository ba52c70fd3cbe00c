//! Core engine for the ripple dependency manager.
//!
//! This crate defines the types that represent a multi-project solution and
//! its dependency declarations: dependencies, projects, the merged
//! dependency view, the solution aggregate with its consistency validation
//! and update propagation, remote package descriptors, feeds, and the
//! mode-selected storage strategies.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod collection;
pub mod dependency;
pub mod feed;
pub mod mode;
pub mod nuget;
pub mod project;
pub mod service;
pub mod solution;
pub mod storage;
