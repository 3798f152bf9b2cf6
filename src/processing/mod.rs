//! # Processing Module
//!
//! Pixel composition of the output variants.

pub mod compose;

pub use compose::{compose, compose_blurred, compose_bordered};
