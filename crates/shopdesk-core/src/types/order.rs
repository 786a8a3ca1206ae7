use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire/store representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states admit no further transitions
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// States counted as pending work for the shop
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Confirmed | OrderStatus::Preparing
        )
    }

    pub const fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Placed,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(OrderStatus::Placed),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer chose to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Online,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
            PaymentMethod::Card => "card",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        };
        write!(f, "{s}")
    }
}

/// Single line item within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub shop_id: String,
}

impl OrderItem {
    /// Line contribution to the shop-scoped total
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Structured delivery address
///
/// Documents carry this either as a single object or as a one-element
/// array; both forms normalize to this struct. Missing components
/// default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street: String,
    pub area: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub formatted: String,
}

impl DeliveryAddress {
    /// Normalize the raw store value: one-element arrays collapse to
    /// their first entry, anything malformed becomes "no address".
    pub fn from_value(value: &Value) -> Option<Self> {
        let candidate = match value {
            Value::Array(entries) => entries.first()?,
            Value::Object(_) => value,
            _ => return None,
        };
        match candidate {
            Value::Object(_) => serde_json::from_value(candidate.clone()).ok(),
            _ => None,
        }
    }
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<Option<DeliveryAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(DeliveryAddress::from_value(&value))
}

fn default_status() -> OrderStatus {
    OrderStatus::Placed
}

fn default_payment_method() -> PaymentMethod {
    PaymentMethod::Cash
}

fn default_payment_status() -> PaymentStatus {
    PaymentStatus::Pending
}

/// Customer order document from the `orders` collection
///
/// This is the typed form produced at the store-read boundary. Orders
/// are created by an external checkout flow; this codebase only ever
/// mutates `status`, `paymentStatus`, `cancelledAt` and `updatedAt`
/// via partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned document id
    #[serde(default)]
    pub id: String,
    /// Human-readable order number (display identity only)
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default = "default_status")]
    pub status: OrderStatus,
    #[serde(default = "default_payment_method")]
    pub payment_method: PaymentMethod,
    #[serde(default = "default_payment_status")]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "deserialize_address")]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(default)]
    pub delivery_fee: f64,
    /// Store-wide order total (superseded by shop-scoped recomputation)
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub customer_notes: String,
}

impl Order {
    /// Decode an order from its raw document fields, attaching the
    /// store-assigned id. Older documents carry only `total`; the
    /// missing `totalAmount` falls back to it.
    pub fn from_fields(id: &str, fields: Value) -> crate::error::Result<Self> {
        let mut order: Order = serde_json::from_value(fields).map_err(|e| {
            crate::error::ShopError::DocumentDecode {
                collection: "orders".to_string(),
                message: e.to_string(),
            }
        })?;
        order.id = id.to_string();
        if order.total_amount == 0.0 {
            order.total_amount = order.total;
        }
        Ok(order)
    }

    /// An order is relevant to a shop iff any line item belongs to it
    pub fn involves_shop(&self, shop_id: &str) -> bool {
        self.items.iter().any(|item| item.shop_id == shop_id)
    }
}
