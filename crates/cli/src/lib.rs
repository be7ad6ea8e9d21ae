//! Storelens application library.
//!
//! The binary in `main.rs` is a thin wrapper; configuration, the Fake Store
//! API client, and report building live here so tests can drive the same
//! code paths the binary runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod fakestore;
pub mod report;
