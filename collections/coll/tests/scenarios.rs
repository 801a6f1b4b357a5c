//! End-to-end scenarios across the engine crates and façades.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use coll::{
    Collection, Dict, Error, ObjectValue, Sequence, SharedRegistry, TypeRegistry, UniqueSet, Value,
};

fn registry() -> SharedRegistry<TypeRegistry> {
    SharedRegistry::default()
}

#[test]
fn nullable_int_sequence_gap_fills_with_null() {
    let mut seq = Sequence::new(Some("?int"), registry()).unwrap();
    assert!(seq.default_value().strict_eq(&Value::Null));

    seq.push(Value::Int(5)).unwrap();
    seq.set(3, Value::Int(1)).unwrap();

    assert!(seq.get(0).unwrap().strict_eq(&Value::Int(5)));
    assert!(seq.get(1).unwrap().strict_eq(&Value::Null));
    assert!(seq.get(2).unwrap().strict_eq(&Value::Null));
}

#[test]
fn inferred_sequence_gap_fills_with_zero() {
    let mut seq = Sequence::from_values(
        None,
        vec![Value::Int(1), Value::Int(2)],
        registry(),
    )
    .unwrap();

    seq.set(5, Value::Int(99)).unwrap();
    assert_eq!(seq.len(), 6);
    for i in 2..=4 {
        assert!(seq.get(i).unwrap().strict_eq(&Value::Int(0)), "position {i}");
    }
    assert!(seq.get(5).unwrap().strict_eq(&Value::Int(99)));
}

#[test]
fn batched_write_stops_at_first_invalid_element() {
    let mut seq = Sequence::new(Some("int"), registry()).unwrap();
    let result = seq.push_all(vec![
        Value::Int(3),
        Value::Int(4),
        Value::string("invalid"),
        Value::Int(5),
    ]);

    assert!(matches!(result, Err(Error::Type(_))));
    assert_eq!(seq.len(), 2);
    assert!(seq.get(0).unwrap().strict_eq(&Value::Int(3)));
    assert!(seq.get(1).unwrap().strict_eq(&Value::Int(4)));
}

#[test]
fn lookalike_keys_resolve_to_their_own_values() {
    let mut dict = Dict::new(Some("string"), registry()).unwrap();
    dict.put(Value::Int(1), Value::string("a")).unwrap();
    dict.put(Value::string("1"), Value::string("b")).unwrap();
    dict.put(Value::Bool(true), Value::string("c")).unwrap();

    assert!(dict.get(&Value::Int(1)).unwrap().strict_eq(&Value::string("a")));
    assert!(dict
        .get(&Value::string("1"))
        .unwrap()
        .strict_eq(&Value::string("b")));
    assert!(dict
        .get(&Value::Bool(true))
        .unwrap()
        .strict_eq(&Value::string("c")));
}

#[test]
fn unique_set_keeps_first_seen_order() {
    let set = UniqueSet::from_values(
        Some("int"),
        [1, 2, 2, 3, 3, 3].into_iter().map(Value::Int),
        registry(),
    )
    .unwrap();

    assert_eq!(set.len(), 3);
    let order: Vec<String> = set.iter().map(ToString::to_string).collect();
    assert_eq!(order, vec!["1", "2", "3"]);
}

#[test]
fn object_gap_fills_never_alias() {
    let mut registry = TypeRegistry::new();
    let money = registry.register("Money", &[]).unwrap();
    let shared = SharedRegistry::new(registry);

    let zero = Value::object(ObjectValue::new(
        money,
        vec![("amount".into(), Value::Int(0))],
    ));
    let mut seq = Sequence::with_default(Some("?Money"), zero, shared).unwrap();

    let five = Value::object(ObjectValue::new(
        money,
        vec![("amount".into(), Value::Int(5))],
    ));
    seq.set(2, five).unwrap();

    // Positions 0 and 1 were gap-filled: same class, distinct instances,
    // and neither aliases the stored default.
    let a = seq.get(0).unwrap().clone();
    let b = seq.get(1).unwrap().clone();
    assert!(!a.strict_eq(&b));
    assert!(!a.strict_eq(seq.default_value()));
    assert_eq!(a.tag(), seq.default_value().tag());
}

#[test]
fn nominal_constraints_admit_subtypes_across_the_stack() {
    let mut registry = TypeRegistry::new();
    let shape = registry.register("Shape", &[]).unwrap();
    let circle = registry.register("Circle", &[shape]).unwrap();
    let shared = SharedRegistry::new(registry);

    let mut dict = Dict::new(Some("?Shape"), shared).unwrap();
    let a_circle = Value::object(ObjectValue::new(circle, vec![]));
    dict.put(Value::string("c"), a_circle.clone()).unwrap();
    dict.put(Value::string("n"), Value::Null).unwrap();

    // The same instance is also a usable key.
    dict.put(a_circle.clone(), Value::Null).unwrap();
    assert!(dict.has(&a_circle));

    // A fresh instance with identical fields is a different key.
    let other_circle = Value::object(ObjectValue::new(circle, vec![]));
    assert!(!dict.has(&other_circle));
    assert!(matches!(
        dict.put(Value::string("x"), Value::Int(3)),
        Err(Error::Type(_))
    ));
}

#[test]
fn cleared_collections_keep_their_constraints() {
    let mut dict = Dict::from_pairs(
        None,
        vec![(Value::Int(1), Value::Int(10))],
        registry(),
    )
    .unwrap();
    dict.clear();
    assert!(dict.is_empty());
    // Inferred int constraint survives the clear.
    assert!(matches!(
        dict.put(Value::Int(1), Value::string("no")),
        Err(Error::Type(_))
    ));
}
