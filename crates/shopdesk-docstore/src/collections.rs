use crate::client::DocumentStore;
use crate::document::Query;
use serde_json::Value;
use shopdesk_core::types::{CustomerProfile, Order, Product, ShopProfile};
use shopdesk_core::{Result, ShopError};
use tracing::warn;

pub const ORDERS: &str = "orders";
pub const PRODUCTS: &str = "products";
pub const USERS: &str = "users";
pub const SHOPS: &str = "shops";

/// Typed access to the `orders` collection
pub struct Orders;

impl Orders {
    /// Dashboard feed: every order, newest first. Shop membership is
    /// decided per line item, so the shop filter happens after
    /// decoding, not in the query.
    pub fn watch_all() -> Query {
        Query::collection(ORDERS).order_by_desc("createdAt")
    }

    /// Customer feed: one user's orders, newest first
    pub fn watch_for_user(user_id: &str) -> Query {
        Query::collection(ORDERS)
            .where_eq("userId", user_id)
            .order_by_desc("createdAt")
    }

    pub async fn get(store: &dyn DocumentStore, id: &str) -> Result<Option<Order>> {
        match store.get_document(ORDERS, id).await? {
            Some(doc) => Ok(Some(Order::from_fields(&doc.id, doc.fields)?)),
            None => Ok(None),
        }
    }

    /// A user's orders, newest first. Undecodable documents are
    /// logged and skipped so one bad record cannot hide the rest.
    pub async fn for_user(store: &dyn DocumentStore, user_id: &str) -> Result<Vec<Order>> {
        let snapshot = store.query(&Self::watch_for_user(user_id)).await?;
        let mut orders = Vec::with_capacity(snapshot.len());
        for doc in snapshot {
            match Order::from_fields(&doc.id, doc.fields) {
                Ok(order) => orders.push(order),
                Err(e) => warn!(doc_id = %doc.id, error = %e, "Skipping undecodable order"),
            }
        }
        Ok(orders)
    }

    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        partial: Value,
    ) -> Result<()> {
        store.update_document(ORDERS, id, partial).await
    }
}

/// Typed access to the `users` collection
pub struct Users;

impl Users {
    pub async fn profile(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<Option<CustomerProfile>> {
        match store.get_document(USERS, user_id).await? {
            Some(doc) => {
                let profile = serde_json::from_value(doc.fields).map_err(|e| {
                    ShopError::DocumentDecode {
                        collection: USERS.to_string(),
                        message: e.to_string(),
                    }
                })?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }
}

/// Typed access to the `shops` collection
pub struct Shops;

impl Shops {
    pub async fn profile(
        store: &dyn DocumentStore,
        shop_id: &str,
    ) -> Result<Option<ShopProfile>> {
        match store.get_document(SHOPS, shop_id).await? {
            Some(doc) => {
                let profile = serde_json::from_value(doc.fields).map_err(|e| {
                    ShopError::DocumentDecode {
                        collection: SHOPS.to_string(),
                        message: e.to_string(),
                    }
                })?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }
}

/// Typed access to the `products` collection
pub struct Products;

impl Products {
    pub async fn get(store: &dyn DocumentStore, id: &str) -> Result<Option<Product>> {
        match store.get_document(PRODUCTS, id).await? {
            Some(doc) => Ok(Some(Product::from_fields(&doc.id, doc.fields)?)),
            None => Ok(None),
        }
    }

    /// A shop's own products
    pub async fn for_shop(store: &dyn DocumentStore, shop_id: &str) -> Result<Vec<Product>> {
        let query = Query::collection(PRODUCTS).where_eq("shopId", shop_id);
        let snapshot = store.query(&query).await?;
        let mut products = Vec::with_capacity(snapshot.len());
        for doc in snapshot {
            match Product::from_fields(&doc.id, doc.fields) {
                Ok(product) => products.push(product),
                Err(e) => warn!(doc_id = %doc.id, error = %e, "Skipping undecodable product"),
            }
        }
        Ok(products)
    }
}
