//! Test utilities for the simple-vector workspace.
//!
//! This crate provides:
//! - Seeded random operation scripts, replayable against any container and
//!   against a `Vec` reference model
//! - Instrumented element types that count clones and drops
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency only.

pub mod ops;
pub mod tracked;
