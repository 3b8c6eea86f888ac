//! Template matching: a filter record constrains only the fields it sets.
//!
//! The filter is serialized to a JSON object; `null` fields and empty strings
//! are wildcards and are dropped. What remains is a set of column equalities
//! shared by the SQL builder and the in-memory store.

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::FilterError;
use super::filter_where::FilterWhere;

pub fn template_conditions<F: Serialize>(filter: &F) -> Result<Map<String, Value>, FilterError> {
    let value = serde_json::to_value(filter)?;
    let Value::Object(fields) = value else {
        return Err(FilterError::InvalidWhereClause("Filter must serialize to an object".to_string()));
    };

    let conditions: Map<String, Value> = fields
        .into_iter()
        .filter(|(_, v)| !is_wildcard(v))
        .collect();

    FilterWhere::validate(&conditions)?;
    Ok(conditions)
}

/// True when every condition equals the record's field of the same name.
pub fn template_matches(record: &Value, conditions: &Map<String, Value>) -> bool {
    conditions
        .iter()
        .all(|(column, expected)| record.get(column).map_or(false, |actual| actual == expected))
}

fn is_wildcard(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
