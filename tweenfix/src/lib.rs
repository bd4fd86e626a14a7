//! Core library for the tweenfix source rewriter.
//!
//! tweenfix walks a front-end project, finds Framer Motion `animate`
//! declarations that use keyframe arrays of three or more entries, and adds
//! `type: "tween"` to their transitions, since the default spring
//! interpolation only supports two keyframes.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module containing the rewrite pipeline applied to each file.
pub mod engine;

/// Module defining the top-level entry point shared by all binaries.
pub mod entry_point;

/// Module defining the per-file error type.
pub mod error;

/// Module containing the byte-range text rewriter.
pub mod fix;

/// Module for colored CLI output formatting.
pub mod output;

/// Module containing the detection pass and rewrite rules.
pub mod rules;

/// Module containing utility functions.
pub mod utils;
