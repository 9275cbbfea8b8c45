use crate::error::{Error, Result};
use crate::model::PersonId;
use crate::relations::RelationIndex;
use rustc_hash::FxHashSet;

/// Returns the paternal ancestors of `person_id`, nearest first, ending at
/// the most distant recorded father.
///
/// Malformed data can make the father relation cyclic; the walk tracks
/// visited ids and fails with [`Error::CyclicAncestry`] instead of looping.
pub fn paternal_chain(person_id: PersonId, index: &RelationIndex) -> Result<Vec<PersonId>> {
    let mut chain = Vec::new();
    let mut seen = FxHashSet::default();
    seen.insert(person_id);

    let mut current = person_id;
    while let Some(father) = index.father_of(current) {
        if !seen.insert(father) {
            let mut cycle = Vec::with_capacity(chain.len() + 2);
            cycle.push(person_id);
            cycle.extend_from_slice(&chain);
            cycle.push(father);
            return Err(Error::CyclicAncestry { cycle });
        }
        chain.push(father);
        current = father;
    }
    Ok(chain)
}
