// identifier -> catalog entry
use tracing::{debug, trace};

use crate::core::text::match_key;
use crate::core::types::DisplayOperation;

/// Find the operation a loosely formatted identifier refers to.
///
/// Compares match keys (lowercase, letters and digits only) of `identifier` and
/// each operation's `name`. The first hit in catalog order wins.
pub fn find_by_identifier<'a>(
    operations: &'a [DisplayOperation],
    identifier: &str,
) -> Option<&'a DisplayOperation> {
    let wanted = match_key(identifier);
    trace!(identifier, key = %wanted, "matching identifier");
    operations.iter().find(|op| match_key(op.name()) == wanted)
}

/// Resolve the selected operation from candidates listed highest precedence first.
///
/// Absent and empty candidates are skipped. The first remaining candidate decides
/// the outcome on its own: if it matches nothing the result is `None`, lower
/// candidates are not tried.
pub fn resolve<'a, I, S>(operations: &'a [DisplayOperation], candidates: I) -> Option<&'a DisplayOperation>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let Some((position, candidate)) = candidates
        .into_iter()
        .enumerate()
        .find_map(|(i, c)| c.filter(|c| !c.as_ref().is_empty()).map(|c| (i, c)))
    else {
        debug!("no selection candidate supplied");
        return None;
    };

    let candidate: &str = candidate.as_ref();
    let selected = find_by_identifier(operations, candidate);
    match selected {
        Some(op) => debug!(position, candidate, selected = op.name(), "resolved operation"),
        None => debug!(position, candidate, "candidate matched no operation"),
    }
    selected
}
