use std::fmt::{self, Display};

use serde_json::Value;

use crate::ast::json::JsonValue;

/// Compact JSON, encoded by `serde_json`.
impl Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::from(self.clone()))
    }
}

impl JsonValue {
    /// Indented JSON.
    pub fn to_pretty_string(&self) -> String {
        // Serializing a `Value` to a string cannot fail.
        serde_json::to_string_pretty(&Value::from(self.clone())).unwrap_or_default()
    }
}
