use crate::{
    Error, PersonId, PositionSpec, PositionSpecs, Relation, RelationIndex, RelationKind, XResolver,
    paternal_chain, resolve_x,
};

const FALLBACK_CENTER: f64 = 500.0;

fn father(source: PersonId, target: PersonId) -> Relation {
    Relation {
        source,
        target,
        kind: RelationKind::FatherChild,
    }
}

fn specs(entries: &[(PersonId, PositionSpec)]) -> PositionSpecs {
    entries.iter().copied().collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn paternal_chain_is_nearest_ancestor_first() {
    let index = RelationIndex::build(&[father(2, 3), father(1, 2)]);
    assert_eq!(paternal_chain(3, &index).unwrap(), vec![2, 1]);
    assert_eq!(paternal_chain(1, &index).unwrap(), Vec::<PersonId>::new());
}

#[test]
fn duplicate_fathers_keep_the_first_in_input_order() {
    let index = RelationIndex::build(&[father(1, 3), father(2, 3)]);
    assert_eq!(index.father_of(3), Some(1));
}

#[test]
fn mother_relations_do_not_feed_the_paternal_walk() {
    let relations = [
        Relation {
            source: 9,
            target: 3,
            kind: RelationKind::MotherChild,
        },
        father(2, 3),
    ];
    let index = RelationIndex::build(&relations);
    assert_eq!(paternal_chain(3, &index).unwrap(), vec![2]);
    assert_eq!(index.parent_of(3, RelationKind::MotherChild), Some(9));
}

#[test]
fn cyclic_fathers_fail_instead_of_looping() {
    let index = RelationIndex::build(&[father(2, 3), father(3, 2)]);
    let err = paternal_chain(3, &index).unwrap_err();
    match err {
        Error::CyclicAncestry { cycle } => assert_eq!(cycle, vec![3, 2, 3]),
        other => panic!("expected CyclicAncestry, got {other:?}"),
    }
}

#[test]
fn self_father_is_a_cycle() {
    let index = RelationIndex::build(&[father(3, 3)]);
    assert!(matches!(
        paternal_chain(3, &index),
        Err(Error::CyclicAncestry { .. })
    ));
}

#[test]
fn relative_offsets_accumulate_up_to_the_nearest_absolute_anchor() {
    // Person 3 under father 2 under anchor 1: 500 + 50 - 20.
    let index = RelationIndex::build(&[father(1, 2), father(2, 3)]);
    let specs = specs(&[
        (1, PositionSpec::Absolute(500.0)),
        (2, PositionSpec::Relative(50.0)),
        (3, PositionSpec::Relative(-20.0)),
    ]);
    let mut resolver = XResolver::new(&index, &specs, FALLBACK_CENTER);
    assert!(close(resolver.resolve(3).unwrap(), 530.0));
    assert!(close(resolver.resolve(2).unwrap(), 550.0));
    assert!(close(resolver.resolve(1).unwrap(), 500.0));
}

#[test]
fn own_absolute_spec_short_circuits_regardless_of_ancestors() {
    let index = RelationIndex::build(&[father(1, 2)]);
    let specs = specs(&[
        (1, PositionSpec::Relative(999.0)),
        (2, PositionSpec::Absolute(120.0)),
    ]);
    let chain = paternal_chain(2, &index).unwrap();
    assert!(close(
        resolve_x(2, &chain, &specs, FALLBACK_CENTER).unwrap(),
        120.0
    ));
}

#[test]
fn absolute_spec_without_recorded_father_stands_alone() {
    let index = RelationIndex::build(&[]);
    let specs = specs(&[(4, PositionSpec::Absolute(250.0))]);
    let chain = paternal_chain(4, &index).unwrap();
    assert!(chain.is_empty());
    assert!(close(
        resolve_x(4, &chain, &specs, FALLBACK_CENTER).unwrap(),
        250.0
    ));
}

#[test]
fn relative_spec_without_recorded_father_anchors_on_the_fallback_center() {
    let index = RelationIndex::build(&[]);
    let specs = specs(&[(4, PositionSpec::Relative(30.0))]);
    let mut resolver = XResolver::new(&index, &specs, FALLBACK_CENTER);
    assert!(close(resolver.resolve(4).unwrap(), 30.0 + FALLBACK_CENTER));
}

#[test]
fn all_relative_chain_sums_onto_the_fallback_center() {
    let index = RelationIndex::build(&[father(1, 2), father(2, 3)]);
    let specs = specs(&[
        (1, PositionSpec::Relative(10.0)),
        (2, PositionSpec::Relative(20.0)),
        (3, PositionSpec::Relative(30.0)),
    ]);
    let mut resolver = XResolver::new(&index, &specs, FALLBACK_CENTER);
    assert!(close(resolver.resolve(3).unwrap(), 60.0 + FALLBACK_CENTER));
}

#[test]
fn zero_magnitude_relative_offsets_are_valid() {
    let index = RelationIndex::build(&[father(1, 2)]);
    let specs = specs(&[
        (1, PositionSpec::Absolute(400.0)),
        (2, PositionSpec::Relative(0.0)),
    ]);
    let mut resolver = XResolver::new(&index, &specs, FALLBACK_CENTER);
    assert!(close(resolver.resolve(2).unwrap(), 400.0));
}

#[test]
fn missing_spec_on_the_walk_is_a_typed_error() {
    let index = RelationIndex::build(&[father(1, 2)]);
    let specs = specs(&[(2, PositionSpec::Relative(5.0))]);
    let mut resolver = XResolver::new(&index, &specs, FALLBACK_CENTER);
    assert!(matches!(
        resolver.resolve(2),
        Err(Error::MissingPositionSpec { person_id: 1 })
    ));
}

#[test]
fn resolver_memoization_is_transparent() {
    let index = RelationIndex::build(&[father(1, 2), father(2, 3)]);
    let specs = specs(&[
        (1, PositionSpec::Absolute(500.0)),
        (2, PositionSpec::Relative(50.0)),
        (3, PositionSpec::Relative(-20.0)),
    ]);
    let mut resolver = XResolver::new(&index, &specs, FALLBACK_CENTER);
    let first = resolver.resolve(3).unwrap();
    let second = resolver.resolve(3).unwrap();
    assert_eq!(first, second);

    let chain = paternal_chain(3, &index).unwrap();
    assert_eq!(
        first,
        resolve_x(3, &chain, &specs, FALLBACK_CENTER).unwrap()
    );
}
