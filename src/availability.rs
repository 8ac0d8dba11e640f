//! Database to score-value availability lookup.
//!
//! The page supplies the table as a global object shaped like
//! `{ "<database>": ["<score value>", ...], ... }`. A database without an
//! entry places no restriction on the score values.

use crate::FormError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityMap(HashMap<String, Vec<String>>);

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of the documented shape.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::Availability(e.to_string()))
    }

    pub fn insert<K, V>(&mut self, database: K, values: V)
    where
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        self.0
            .insert(database.into(), values.into_iter().map(Into::into).collect());
    }

    /// Permitted values for `database`, or `None` when it is unrestricted.
    pub fn allowed(&self, database: &str) -> Option<&[String]> {
        self.0.get(database).map(Vec::as_slice)
    }

    /// Whether `option` may be chosen while `database` is selected.
    pub fn permits(&self, database: &str, option: &str) -> bool {
        match self.allowed(database) {
            Some(values) => values.iter().any(|v| v == option),
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
