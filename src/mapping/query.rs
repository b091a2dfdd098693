// request parameters -> ordered selection candidates
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::resolve::resolve;
use crate::core::types::DisplayOperation;

pub const DEFAULT_PARAMS: [&str; 2] = ["operation", "op"];

/// Which request parameters may name the preselected operation, highest
/// precedence first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub params: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            params: DEFAULT_PARAMS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionQuery {
    candidates: Vec<Option<String>>,
}

impl SelectionQuery {
    pub fn new(candidates: Vec<Option<String>>) -> Self {
        Self { candidates }
    }

    /// One candidate per configured parameter, in config order. Values are
    /// passed through verbatim; missing parameters become `None`.
    pub fn from_params(params: &HashMap<String, String>, config: &SelectorConfig) -> Self {
        let candidates = config
            .params
            .iter()
            .map(|key| params.get(key).cloned())
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Option<String>] {
        &self.candidates
    }

    pub fn resolve<'a>(&self, operations: &'a [DisplayOperation]) -> Option<&'a DisplayOperation> {
        resolve(operations, self.candidates.iter().map(|c| c.as_deref()))
    }
}
