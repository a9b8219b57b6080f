//! Common test utilities for dv CLI tests.

#![allow(dead_code)]

pub mod env;

pub use env::*;
