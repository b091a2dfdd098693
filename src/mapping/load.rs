/*
Inputs:

    catalog payload fetched by the host (TOON document or JSON array)

    selector config (TOON or JSON)

Outputs:

    Vec<RawOperation> in payload order (order matters for tie-breaks)

    SelectorConfig

Fetching, retries and caching stay with the host. This module only decodes text.
*/
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::CatalogError;
use crate::core::types::RawOperation;
use crate::mapping::query::SelectorConfig;

/// TOON catalogs keep their records under a top-level `operations` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub operations: Vec<RawOperation>,
}

fn from_toon<T: DeserializeOwned>(input: &str) -> Result<T, CatalogError> {
    toon_format::decode_default(input).map_err(|e| CatalogError::decode("toon", e))
}

fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, CatalogError> {
    serde_json::from_str(input).map_err(|e| CatalogError::decode("json", e))
}

pub fn raw_operations_from_toon(input: &str) -> Result<Vec<RawOperation>, CatalogError> {
    let doc: CatalogDocument = from_toon(input)?;
    debug!(count = doc.operations.len(), "decoded toon catalog");
    Ok(doc.operations)
}

/// Decodes the JSON array returned by the operations endpoint.
pub fn raw_operations_from_json(input: &str) -> Result<Vec<RawOperation>, CatalogError> {
    let operations: Vec<RawOperation> = from_json(input)?;
    debug!(count = operations.len(), "decoded json catalog");
    Ok(operations)
}

pub fn catalog_to_toon(operations: &[RawOperation]) -> Result<String, CatalogError> {
    let doc = CatalogDocument { operations: operations.to_vec() };
    toon_format::encode_default(&doc).map_err(|e| CatalogError::encode("toon", e))
}

pub fn selector_config_from_toon(input: &str) -> Result<SelectorConfig, CatalogError> {
    from_toon(input)
}

pub fn selector_config_from_json(input: &str) -> Result<SelectorConfig, CatalogError> {
    from_json(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_json_endpoint_payload_in_order() {
        let ops = raw_operations_from_json(
            r#"[
                {"name": "GetElements", "description": "Gets elements"},
                {"name": "operationX", "namedOp": true, "label": null, "passed": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].name, "GetElements");
        assert_eq!(ops[0].description.as_deref(), Some("Gets elements"));
        assert!(ops[1].named_op);
        assert_eq!(ops[1].label, None);
        assert_eq!(ops[1].extra.get("passed"), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn json_record_without_name_is_a_decode_error() {
        let err = raw_operations_from_json(r#"[{"description": "nameless"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { format: "json", .. }));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = raw_operations_from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Decode { format: "json", .. }));
    }

    #[test]
    fn decodes_tabular_toon_catalog() {
        let input = "operations[2]{name,description,namedOp}:\n  GetElements,Gets all elements,false\n  operationX,Does X,true\n";
        let ops = raw_operations_from_toon(input).unwrap();

        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].name, "GetElements");
        assert_eq!(ops[0].description.as_deref(), Some("Gets all elements"));
        assert!(!ops[0].named_op);
        assert_eq!(ops[1].name, "operationX");
        assert!(ops[1].named_op);
    }

    #[test]
    fn toon_catalog_survives_encode_decode() {
        let ops = vec![
            RawOperation::new("Op Name 1").with_label("Group 1").with_description("OP description 1").named(),
            RawOperation::new("GetElements"),
        ];
        let text = catalog_to_toon(&ops).unwrap();
        assert_eq!(raw_operations_from_toon(&text).unwrap(), ops);
    }

    #[test]
    fn decodes_selector_config() {
        let cfg = selector_config_from_json(r#"{"params": ["op", "operation"]}"#).unwrap();
        assert_eq!(cfg.params, vec!["op".to_string(), "operation".to_string()]);

        let cfg = selector_config_from_toon("params[1]: operation\n").unwrap();
        assert_eq!(cfg.params, vec!["operation".to_string()]);
    }
}
