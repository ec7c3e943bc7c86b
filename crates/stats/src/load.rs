//! Dataset loading from JSON.
//!
//! The top-level shape is checked by hand so that a `null` document or a
//! non-list `sellers` field reports `InvalidInput`, the same as an empty
//! seller list does in the engine. Field-level problems are `DatasetParse`.

use serde_json::Value;

use crate::error::StatsError;
use crate::model::Dataset;

impl Dataset {
    pub fn from_json_str(input: &str) -> Result<Self, StatsError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| StatsError::DatasetParse(e.to_string()))?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, StatsError> {
        let Value::Object(ref fields) = value else {
            return Err(StatsError::InvalidInput(
                "dataset must be a JSON object".into(),
            ));
        };

        match fields.get("sellers") {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(StatsError::InvalidInput("sellers must be a list".into()));
            }
            None => return Err(StatsError::InvalidInput("sellers is missing".into())),
        }

        for key in ["products", "purchase_records"] {
            if let Some(v) = fields.get(key) {
                if !v.is_array() && !v.is_null() {
                    return Err(StatsError::InvalidInput(format!("{key} must be a list")));
                }
            }
        }

        let mut value = value;
        if let Value::Object(ref mut fields) = value {
            // Treat explicit nulls like absent lists.
            fields.retain(|_, v| !v.is_null());
        }

        serde_json::from_value(value).map_err(|e| StatsError::DatasetParse(e.to_string()))
    }
}
