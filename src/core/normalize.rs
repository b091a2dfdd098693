// catalog normalization + presentation order
use std::cmp::Ordering;

use tracing::debug;

use crate::core::error::CatalogError;
use crate::core::text::format_key;
use crate::core::types::{DERIVED_KEYS, DisplayOperation, RawOperation};

impl DisplayOperation {
    //derives the display fields; position in the input plays no part here
    pub(crate) fn from_raw(mut operation: RawOperation) -> Self {
        //derived keys always win over stray copies in the raw record
        for key in DERIVED_KEYS {
            operation.extra.remove(key);
        }
        let display_name = match operation.group_label() {
            Some(label) => format!("[{}] {}", label, operation.name),
            None => operation.name.clone(),
        };
        let formatted_name = format_key(&display_name);
        let formatted_description = format_key(operation.description_or_empty());

        Self {
            operation,
            display_name,
            formatted_name,
            formatted_description,
        }
    }
}

/// Presentation order: named operations first, then `name`, then `description`
/// (absent sorts as empty). Plain code-point comparison throughout.
pub fn presentation_order(a: &RawOperation, b: &RawOperation) -> Ordering {
    b.named_op
        .cmp(&a.named_op)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.description_or_empty().cmp(b.description_or_empty()))
}

/// Turn raw catalog records into display records in presentation order.
///
/// Every input record appears exactly once in the output. Records that compare
/// equal under [`presentation_order`] keep their input order.
///
/// A record with an empty name is a caller error and aborts the whole call with
/// [`CatalogError::MissingName`]. Whitespace-only names are names.
pub fn normalize<I>(raw_operations: I) -> Result<Vec<DisplayOperation>, CatalogError>
where
    I: IntoIterator<Item = RawOperation>,
{
    let mut ops = raw_operations
        .into_iter()
        .enumerate()
        .map(|(index, op)| {
            if op.name.is_empty() {
                return Err(CatalogError::MissingName { index });
            }
            Ok(DisplayOperation::from_raw(op))
        })
        .collect::<Result<Vec<_>, _>>()?;

    //slice::sort_by is stable, which is what keeps ties in input order
    ops.sort_by(|a, b| presentation_order(&a.operation, &b.operation));

    debug!(count = ops.len(), "normalized operation catalog");
    Ok(ops)
}
