// catalog errors
//
// Only malformed input is an error. An empty catalog or an identifier that
// matches nothing is a normal outcome and is reported through Option/empty Vec.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("operation at position {index} has no name")]
    MissingName { index: usize },

    #[error("could not decode {format} document: {reason}")]
    Decode { format: &'static str, reason: String },

    #[error("could not encode {format} document: {reason}")]
    Encode { format: &'static str, reason: String },
}

impl CatalogError {
    pub(crate) fn decode(format: &'static str, err: impl std::fmt::Display) -> Self {
        CatalogError::Decode { format, reason: err.to_string() }
    }

    pub(crate) fn encode(format: &'static str, err: impl std::fmt::Display) -> Self {
        CatalogError::Encode { format, reason: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = CatalogError::MissingName { index: 3 };
        assert_eq!(err.to_string(), "operation at position 3 has no name");

        let err = CatalogError::decode("json", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "could not decode json document: expected value at line 1 column 1"
        );
    }
}
