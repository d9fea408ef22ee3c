//! Customer order value type.
//!
//! This crate provides:
//! - `Order`, an immutable value with structural equality and hashing
//! - A JSON interchange form that keeps the order total as an exact decimal

pub mod codec;
pub mod error;
pub mod order;

pub use codec::{from_json, from_slice, to_json, to_json_pretty};
pub use error::{CodecError, Result};
pub use order::Order;
