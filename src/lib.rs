//! Changelog Generator - terminal front-end
//!
//! Search GitHub repositories, ask a changelog backend to generate a
//! changelog for one of them, and browse the result.
//!
//! This library provides:
//! - [`api`]: GitHub search and backend clients
//! - [`app`]: Application state and logic
//! - [`config`]: Command-line and environment settings
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`route`]: Page routes
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod route;
pub mod ui;
