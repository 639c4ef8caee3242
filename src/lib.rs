//! gfx-convert - graphics converter for 8-bit systems
//!
//! File handling, PNG glue, configuration and format dispatch around the
//! `cell_gfx` engine. This library exposes modules for integration testing.

pub mod codec;
pub mod convert;
pub mod error;
pub mod files;
pub mod models;
