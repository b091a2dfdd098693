// operation records
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An operation as handed over by whoever fetched the catalog.
///
/// `label: null` and a missing `label` both decode to `None`. Fields this crate
/// does not know about are kept in `extra` and travel with the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub named_op: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawOperation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            named_op: false,
            label: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn named(mut self) -> Self {
        self.named_op = true;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Label, if it carries any text. An empty label counts as no label.
    pub fn group_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Keys a [`DisplayOperation`] computes itself. Copies of them in a raw record's
/// `extra` are dropped during normalization.
pub const DERIVED_KEYS: [&str; 3] = ["displayName", "formattedName", "formattedDescription"];

/// Display-ready operation. Built only by [`crate::core::normalize::normalize`].
///
/// Serializes as the raw record's fields plus `displayName`, `formattedName`
/// and `formattedDescription`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOperation {
    #[serde(flatten)]
    pub(crate) operation: RawOperation,
    pub(crate) display_name: String,
    pub(crate) formatted_name: String,
    pub(crate) formatted_description: String,
}

impl DisplayOperation {
    pub fn raw(&self) -> &RawOperation {
        &self.operation
    }

    pub fn name(&self) -> &str {
        &self.operation.name
    }

    pub fn description(&self) -> Option<&str> {
        self.operation.description.as_deref()
    }

    pub fn named_op(&self) -> bool {
        self.operation.named_op
    }

    pub fn label(&self) -> Option<&str> {
        self.operation.label.as_deref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.operation.extra
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn formatted_name(&self) -> &str {
        &self.formatted_name
    }

    pub fn formatted_description(&self) -> &str {
        &self.formatted_description
    }

    pub fn into_raw(self) -> RawOperation {
        self.operation
    }
}
