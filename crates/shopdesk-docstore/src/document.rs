use serde_json::Value;
use std::cmp::Ordering;

/// A raw document: store-assigned id plus its JSON fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Field lookup, `Null` when absent
    pub fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&Value::Null)
    }
}

/// One push-delivered full result set from a live query subscription
pub type Snapshot = Vec<Document>;

/// Field-equality predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Declarative query over a single collection: equality predicates
/// plus an optional ordering, matching what the backing store supports.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub order_by: Option<(String, Direction)>,
}

impl Query {
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            filters: Vec::new(),
            order_by: None,
        }
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn order_by_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some((field.into(), Direction::Ascending));
        self
    }

    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some((field.into(), Direction::Descending));
        self
    }

    /// Whether a document satisfies every equality predicate
    pub fn matches(&self, document: &Document) -> bool {
        self.filters
            .iter()
            .all(|f| document.field(&f.field) == &f.value)
    }

    /// Sort a result set according to `order_by`
    pub fn sort(&self, documents: &mut [Document]) {
        let Some((field, direction)) = &self.order_by else {
            return;
        };
        documents.sort_by(|a, b| {
            let ordering = compare_values(a.field(field), b.field(field));
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
    }
}

/// Field-value ordering: numbers numerically, strings lexically
/// (RFC 3339 timestamps order correctly as strings), everything else
/// is considered equal.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_matches_equality() {
        let doc = Document::new("d1", json!({ "userId": "u1", "status": "placed" }));
        assert!(Query::collection("orders").matches(&doc));
        assert!(Query::collection("orders")
            .where_eq("userId", "u1")
            .matches(&doc));
        assert!(!Query::collection("orders")
            .where_eq("userId", "u2")
            .matches(&doc));
        assert!(!Query::collection("orders")
            .where_eq("missing", "x")
            .matches(&doc));
    }

    #[test]
    fn test_sort_descending_by_timestamp_string() {
        let mut docs = vec![
            Document::new("a", json!({ "createdAt": "2026-08-07T10:00:00Z" })),
            Document::new("b", json!({ "createdAt": "2026-08-08T09:00:00Z" })),
            Document::new("c", json!({ "createdAt": "2026-08-06T23:59:59Z" })),
        ];
        Query::collection("orders")
            .order_by_desc("createdAt")
            .sort(&mut docs);
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
