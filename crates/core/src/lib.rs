//! Storelens Core - Domain types and aggregation logic.
//!
//! This crate provides the pieces of storelens that do not touch the network:
//! - the entity types decoded from the Fake Store API (users, products, carts)
//! - the pure aggregation functions that turn a fetched snapshot into report
//!   figures (category totals, highest-value cart, farthest user pair)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and lets the aggregators be
//! tested without a runtime. Fetching lives in the `cli` crate.
//!
//! # Modules
//!
//! - [`types`] - Wire-shaped entities for users, products, and carts
//! - [`analytics`] - Aggregation over fetched snapshots

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod types;

pub use analytics::*;
pub use types::*;
