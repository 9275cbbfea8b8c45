use crate::model::{PersonId, Relation, RelationKind};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Indexed parent lookup, built once per render pass.
///
/// Keyed by `(child, kind)`. The data model allows at most one recorded
/// parent per kind; when the input violates that, the first relation in input
/// order wins and the rest are ignored with a warning.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    parent_by_child: FxHashMap<(PersonId, RelationKind), PersonId>,
}

impl RelationIndex {
    pub fn build(relations: &[Relation]) -> Self {
        let mut parent_by_child = FxHashMap::default();
        for r in relations {
            if !r.kind.is_parental() {
                continue;
            }
            match parent_by_child.entry((r.target, r.kind)) {
                Entry::Vacant(slot) => {
                    slot.insert(r.source);
                }
                Entry::Occupied(slot) => {
                    tracing::warn!(
                        child = r.target,
                        kept = *slot.get(),
                        ignored = r.source,
                        kind = ?r.kind,
                        "duplicate parent relation ignored; keeping the first in input order"
                    );
                }
            }
        }
        Self { parent_by_child }
    }

    pub fn parent_of(&self, person_id: PersonId, kind: RelationKind) -> Option<PersonId> {
        self.parent_by_child.get(&(person_id, kind)).copied()
    }

    pub fn father_of(&self, person_id: PersonId) -> Option<PersonId> {
        self.parent_of(person_id, RelationKind::FatherChild)
    }
}
