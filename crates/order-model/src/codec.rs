//! JSON interchange form for [`Order`].
//!
//! An order is encoded as an object with exactly the keys `id`, `customerId`,
//! `items` and `total`. The total is written as a JSON string so that readers
//! never pass it through binary floating point:
//!
//! ```text
//! {"id":"O-1001","customerId":"C-42","items":[7,7,19],"total":"145.50"}
//! ```
//!
//! Decoding is strict about shape (unknown or missing keys fail, a numeric
//! `total` fails) but applies no domain validation.

use crate::error::{CodecError, Result};
use crate::order::Order;

/// Encodes an order as compact JSON.
#[tracing::instrument(skip(order), fields(order_id = %order.id()))]
pub fn to_json(order: &Order) -> Result<String> {
    serde_json::to_string(order).map_err(CodecError::Encode)
}

/// Encodes an order as indented JSON.
#[tracing::instrument(skip(order), fields(order_id = %order.id()))]
pub fn to_json_pretty(order: &Order) -> Result<String> {
    serde_json::to_string_pretty(order).map_err(CodecError::Encode)
}

/// Decodes an order from a JSON string.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn from_json(input: &str) -> Result<Order> {
    serde_json::from_str(input).map_err(decode_error)
}

/// Decodes an order from JSON bytes.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn from_slice(input: &[u8]) -> Result<Order> {
    serde_json::from_slice(input).map_err(decode_error)
}

fn decode_error(error: serde_json::Error) -> CodecError {
    tracing::debug!(
        line = error.line(),
        column = error.column(),
        %error,
        "rejected order document"
    );
    CodecError::Decode(error)
}
