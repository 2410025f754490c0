use serde_json::{json, Value};

use super::error::FilterError;
use super::types::SqlPredicate;

/// Turns an accessible-ID set into a query predicate over one or more owner
/// fields (e.g. `assigned_to`, `created_by`), OR'd together.
///
/// Renders either a Mongo-style `$in`/`$or` document or the equivalent
/// parameterized SQL fragment for relational backends.
pub struct ScopeFilter {
    ids: Vec<String>,
    owner_fields: Vec<String>,
}

impl ScopeFilter {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut ids: Vec<String> = ids.into_iter().collect();
        // Deterministic output regardless of set iteration order
        ids.sort();
        ids.dedup();
        Self {
            ids,
            owner_fields: vec![],
        }
    }

    pub fn owner_field(mut self, field: impl Into<String>) -> Self {
        self.owner_fields.push(field.into());
        self
    }

    pub fn owner_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.owner_fields.extend(fields);
        self
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Mongo-style predicate document: `{field: {"$in": [...]}}` for one
    /// owner field, `{"$or": [...]}` across several.
    pub fn to_document(&self) -> Result<Value, FilterError> {
        self.validate()?;

        let mut clauses: Vec<Value> = self
            .owner_fields
            .iter()
            .map(|field| {
                let mut clause = serde_json::Map::new();
                clause.insert(field.clone(), json!({ "$in": self.ids }));
                Value::Object(clause)
            })
            .collect();

        if clauses.len() == 1 {
            Ok(clauses.pop().unwrap())
        } else {
            Ok(json!({ "$or": clauses }))
        }
    }

    /// Parameterized SQL fragment, `$n` placeholders starting after
    /// `starting_param_index`. An empty ID set matches nothing.
    pub fn to_sql(&self, starting_param_index: usize) -> Result<SqlPredicate, FilterError> {
        self.validate()?;

        if self.ids.is_empty() {
            return Ok(SqlPredicate {
                predicate: "1=0".to_string(),
                params: vec![],
            });
        }

        let mut params: Vec<Value> = Vec::new();
        let mut param_index = starting_param_index;
        let mut parts: Vec<String> = Vec::new();

        for field in &self.owner_fields {
            let placeholders: Vec<String> = self
                .ids
                .iter()
                .map(|id| {
                    param_index += 1;
                    params.push(Value::String(id.clone()));
                    format!("${}", param_index)
                })
                .collect();
            parts.push(format!("\"{}\" IN ({})", field, placeholders.join(", ")));
        }

        let predicate = if parts.len() == 1 {
            parts.pop().unwrap()
        } else {
            format!("({})", parts.join(" OR "))
        };

        Ok(SqlPredicate { predicate, params })
    }

    fn validate(&self) -> Result<(), FilterError> {
        if self.owner_fields.is_empty() {
            return Err(FilterError::NoOwnerFields);
        }
        for field in &self.owner_fields {
            Self::validate_column(field)?;
        }
        Ok(())
    }

    fn validate_column(column: &str) -> Result<(), FilterError> {
        let mut chars = column.chars();
        let valid_first = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
        if !valid_first || !column.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(FilterError::InvalidColumn(format!(
                "Invalid column name format: {}",
                column
            )));
        }
        Ok(())
    }
}
