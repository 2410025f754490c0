use serde_json::Value;

/// A rendered SQL predicate fragment plus its positional parameters, ready
/// to splice into a WHERE clause and bind in order.
#[derive(Debug, Clone)]
pub struct SqlPredicate {
    pub predicate: String,
    pub params: Vec<Value>,
}
