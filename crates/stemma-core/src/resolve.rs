use crate::ancestry::paternal_chain;
use crate::error::Result;
use crate::model::{PersonId, PositionSpec, PositionSpecs};
use crate::relations::RelationIndex;
use rustc_hash::FxHashMap;

/// Resolves a person's horizontal coordinate on the normalized 0..=1000
/// scale.
///
/// Walks `[person] ++ chain` front to back, summing offsets while the specs
/// are relative. The first absolute spec anchors the sum; a person whose own
/// spec is absolute therefore short-circuits immediately, regardless of
/// ancestry. When every spec up to the end of the chain is relative, the sum
/// is anchored on `fallback_center` instead.
pub fn resolve_x(
    person_id: PersonId,
    chain: &[PersonId],
    specs: &PositionSpecs,
    fallback_center: f64,
) -> Result<f64> {
    let mut offset = 0.0;
    for &id in std::iter::once(&person_id).chain(chain) {
        match specs.require(id)? {
            PositionSpec::Relative(delta) => offset += delta,
            PositionSpec::Absolute(anchor) => return Ok(offset + anchor),
        }
    }
    Ok(offset + fallback_center)
}

/// Per-render coordinate resolver.
///
/// The paternal chain is loop-invariant within one render pass, so resolved
/// coordinates are memoized per person id. The cache is owned by exactly one
/// pass and discarded with it.
pub struct XResolver<'a> {
    index: &'a RelationIndex,
    specs: &'a PositionSpecs,
    fallback_center: f64,
    cache: FxHashMap<PersonId, f64>,
}

impl<'a> XResolver<'a> {
    pub fn new(index: &'a RelationIndex, specs: &'a PositionSpecs, fallback_center: f64) -> Self {
        Self {
            index,
            specs,
            fallback_center,
            cache: FxHashMap::default(),
        }
    }

    pub fn resolve(&mut self, person_id: PersonId) -> Result<f64> {
        if let Some(&x) = self.cache.get(&person_id) {
            return Ok(x);
        }
        let chain = paternal_chain(person_id, self.index)?;
        let x = resolve_x(person_id, &chain, self.specs, self.fallback_center)?;
        self.cache.insert(person_id, x);
        Ok(x)
    }
}
