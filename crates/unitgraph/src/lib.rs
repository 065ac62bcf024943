//! Unitgraph - spanning trees and weighted shortest paths over service
//! manager dependency graphs.
//!
//! This crate provides both a CLI application and a library. The library
//! loads a `systemd-analyze dot` dump into a [`graph::DependencyGraph`] and
//! runs the algorithms in [`analysis`] over it.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod output;

// Public CLI module (needed by binary)
pub mod cli;
