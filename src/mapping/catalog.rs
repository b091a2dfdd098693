// normalized catalog as held by a page
use tracing::debug;

use crate::core::error::CatalogError;
use crate::core::normalize::normalize;
use crate::core::types::{DisplayOperation, RawOperation};
use crate::mapping::query::SelectionQuery;

/// Operations in presentation order, rebuilt wholesale on every (re)load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationCatalog {
    operations: Vec<DisplayOperation>,
}

impl OperationCatalog {
    pub fn build<I>(raw_operations: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = RawOperation>,
    {
        Ok(Self {
            operations: normalize(raw_operations)?,
        })
    }

    /// Replace the contents with a freshly fetched catalog. On error the
    /// previous contents stay in place.
    pub fn reload<I>(&mut self, raw_operations: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = RawOperation>,
    {
        let operations = normalize(raw_operations)?;
        debug!(before = self.operations.len(), after = operations.len(), "reloaded operation catalog");
        self.operations = operations;
        Ok(())
    }

    pub fn operations(&self) -> &[DisplayOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn select(&self, query: &SelectionQuery) -> Option<&DisplayOperation> {
        query.resolve(&self.operations)
    }

    /// Entries grouped by non-empty label: unlabelled group first, then labels
    /// ascending. Each group keeps presentation order.
    pub fn grouped(&self) -> Vec<(Option<&str>, Vec<&DisplayOperation>)> {
        let mut groups: Vec<(Option<&str>, Vec<&DisplayOperation>)> = Vec::new();
        for op in &self.operations {
            let label = op.raw().group_label();
            match groups.iter_mut().find(|(l, _)| *l == label) {
                Some((_, members)) => members.push(op),
                None => groups.push((label, vec![op])),
            }
        }
        //stable, so members and first-seen order inside equal labels are untouched
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        groups
    }
}
