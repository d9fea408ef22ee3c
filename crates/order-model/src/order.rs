//! The order value type.

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A customer order.
///
/// Holds an order identifier, the owning customer's identifier, the ordered
/// item references and the order total. Every field is set once by
/// [`Order::new`] and never changes afterwards; producing a different order
/// means building a new value, e.g. from [`Order::into_parts`].
///
/// No validation is applied. Empty identifiers, an empty item list and a
/// negative total are all accepted as given.
///
/// Two orders are equal when all four fields are equal. Totals compare by
/// value and scale, so `145.50` and `145.5` are different totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Order {
    /// Order identifier, opaque to this type.
    id: String,

    /// Identifier of the customer who placed the order.
    customer_id: String,

    /// Item references in insertion order. Duplicates are kept.
    items: Vec<i32>,

    /// Order total. Encoded as a string to keep the exact decimal.
    #[serde(
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "deserialize_exact_total"
    )]
    total: Decimal,
}

/// Parses the total without rounding. Text that does not fit a `Decimal`
/// exactly is rejected.
fn deserialize_exact_total<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Decimal::from_str_exact(&text).map_err(serde::de::Error::custom)
}

// Shared across threads by reference with no synchronization.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Order>();
};

impl Order {
    /// Creates an order from all four of its fields.
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: impl Into<Vec<i32>>,
        total: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items: items.into(),
            total,
        }
    }

    /// Returns the order identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the customer identifier.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Returns the item references in the order they were supplied.
    pub fn items(&self) -> &[i32] {
        &self.items
    }

    /// Returns the order total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Consumes the order and returns its fields as
    /// `(id, customer_id, items, total)`.
    pub fn into_parts(self) -> (String, String, Vec<i32>, Decimal) {
        (self.id, self.customer_id, self.items, self.total)
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.customer_id == other.customer_id
            && self.items == other.items
            && self.total.mantissa() == other.total.mantissa()
            && self.total.scale() == other.total.scale()
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.customer_id.hash(state);
        self.items.hash(state);
        self.total.mantissa().hash(state);
        self.total.scale().hash(state);
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order[id={}, customerId={}, items={:?}, total={}]",
            self.id, self.customer_id, self.items, self.total
        )
    }
}
