//! Which heuristics a [`plan`](crate::plan) runs, and in what order.

use serde::{Deserialize, Serialize};

use crate::Method;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub methods: Vec<Method>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            methods: Method::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn only(methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
        }
    }

    /// Reads a config from JSON; missing fields fall back to the defaults.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
