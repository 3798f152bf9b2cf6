//! # Configuration Module
//!
//! This module provides configuration structures for conversion jobs.

#[allow(clippy::module_inception)]
pub mod config;

pub use config::{parse_ratio, BlurConfig, BorderConfig, Job, DEFAULT_QUALITY};
