use serde_json::{Map, Value};

use super::error::FilterError;
use super::filter::is_identifier;
use super::types::FilterWhereInfo;

pub struct FilterWhere {
    param_values: Vec<Value>,
    param_index: usize,
}

impl FilterWhere {
    fn new() -> Self {
        Self {
            param_values: vec![],
            param_index: 0,
        }
    }

    /// Returns the WHERE body (without the keyword) and its positional parameters.
    /// An empty map produces an empty clause.
    pub fn generate(where_data: &Map<String, Value>) -> (String, Vec<Value>) {
        let mut filter_where = Self::new();
        let conditions: Vec<FilterWhereInfo> = where_data
            .iter()
            .map(|(column, data)| FilterWhereInfo { column: column.clone(), data: data.clone() })
            .collect();

        let sql_conditions: Vec<String> = conditions
            .iter()
            .map(|condition| filter_where.build_sql_condition(condition))
            .collect();

        (sql_conditions.join(" AND "), filter_where.param_values)
    }

    pub fn validate(where_data: &Map<String, Value>) -> Result<(), FilterError> {
        for (column, value) in where_data {
            if !is_identifier(column) {
                return Err(FilterError::InvalidColumn(format!("Invalid column name format: {}", column)));
            }
            if value.is_object() || value.is_array() {
                return Err(FilterError::InvalidWhereClause(format!(
                    "Condition on '{}' must be a scalar value",
                    column
                )));
            }
        }
        Ok(())
    }

    fn build_sql_condition(&mut self, condition: &FilterWhereInfo) -> String {
        let quoted_column = format!("\"{}\"", condition.column);
        if condition.data.is_null() {
            format!("{} IS NULL", quoted_column)
        } else {
            format!("{} = {}", quoted_column, self.param(condition.data.clone()))
        }
    }

    fn param(&mut self, value: Value) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}
