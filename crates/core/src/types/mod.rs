//! Wire types for the Fake Store API.
//!
//! Shapes mirror the JSON the API serves. Decoding tolerates extra fields
//! the report never uses (the API's `__v` Mongo artifact, the demo
//! `password` filler).

pub mod cart;
pub mod id;
pub mod product;
pub mod user;

pub use cart::{Cart, CartLine};
pub use id::*;
pub use product::{Product, Rating};
pub use user::{Address, GeoLocation, Name, User};
