#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use coll_value::Value;

use crate::store::AssocStore;

// === Basic Operations ===

#[test]
fn set_then_get_hits() {
    let mut store = AssocStore::new();
    store.set(Value::Int(1), Value::string("a"));
    assert_eq!(store.get(&Value::Int(1)).unwrap().to_string(), r#""a""#);
}

#[test]
fn get_of_absent_key_is_key_not_found() {
    let store = AssocStore::new();
    let err = store.get(&Value::string("missing")).unwrap_err();
    assert_eq!(err.key, r#""missing""#);
}

#[test]
fn distinct_runtime_types_are_distinct_keys() {
    let mut store = AssocStore::new();
    store.set(Value::Int(1), Value::string("a"));
    store.set(Value::string("1"), Value::string("b"));
    store.set(Value::Bool(true), Value::string("c"));

    assert_eq!(store.len(), 3);
    assert!(store.get(&Value::Int(1)).unwrap().strict_eq(&Value::string("a")));
    assert!(store.get(&Value::string("1")).unwrap().strict_eq(&Value::string("b")));
    assert!(store.get(&Value::Bool(true)).unwrap().strict_eq(&Value::string("c")));
}

#[test]
fn composite_keys_compare_structurally() {
    let mut store = AssocStore::new();
    let key = Value::array(vec![Value::Int(1), Value::string("x")]);
    store.set(key, Value::Int(10));

    let same_shape = Value::array(vec![Value::Int(1), Value::string("x")]);
    assert!(store.get(&same_shape).unwrap().strict_eq(&Value::Int(10)));

    let different = Value::array(vec![Value::Int(1), Value::string("y")]);
    assert!(store.get(&different).is_err());
}

// === Overwrite Semantics ===

#[test]
fn overwrite_returns_previous_and_keeps_position() {
    let mut store = AssocStore::new();
    store.set(Value::Int(1), Value::string("first"));
    store.set(Value::Int(2), Value::string("second"));

    let previous = store.set(Value::Int(1), Value::string("updated"));
    assert!(previous.unwrap().strict_eq(&Value::string("first")));

    let keys: Vec<i64> = store
        .keys()
        .map(|k| match k {
            Value::Int(i) => *i,
            other => panic!("unexpected key {other}"),
        })
        .collect();
    assert_eq!(keys, vec![1, 2]);
}

#[test]
fn brand_new_key_appends_at_the_end() {
    let mut store = AssocStore::new();
    store.set(Value::Int(1), Value::Null);
    store.set(Value::Int(2), Value::Null);
    store.set(Value::Int(3), Value::Null);

    let order: Vec<String> = store.keys().map(ToString::to_string).collect();
    assert_eq!(order, vec!["1", "2", "3"]);
}

// === Removal ===

#[test]
fn remove_compacts_and_preserves_relative_order() {
    let mut store = AssocStore::new();
    for i in 0..5 {
        store.set(Value::Int(i), Value::Int(i * 10));
    }
    let removed = store.remove(&Value::Int(2)).unwrap();
    assert!(removed.strict_eq(&Value::Int(20)));

    let order: Vec<String> = store.keys().map(ToString::to_string).collect();
    assert_eq!(order, vec!["0", "1", "3", "4"]);

    // The rebased index still resolves every surviving key.
    for i in [0, 1, 3, 4] {
        assert!(store.get(&Value::Int(i)).unwrap().strict_eq(&Value::Int(i * 10)));
    }
    assert!(store.remove(&Value::Int(2)).is_err());
}

#[test]
fn clear_empties_everything() {
    let mut store = AssocStore::new();
    store.set(Value::Int(1), Value::Null);
    store.clear();
    assert!(store.is_empty());
    assert!(!store.exists(&Value::Int(1)));
    assert_eq!(store.iter().count(), 0);
}

// === Property: exists agrees with iteration; inserts always re-hit ===

mod proptests {
    use proptest::prelude::*;

    use coll_value::Value;

    use crate::store::AssocStore;

    #[derive(Clone, Debug)]
    enum Op {
        Set(u8, i64),
        Remove(u8),
    }

    fn key_from(seed: u8) -> Value {
        let n = i64::from(seed / 5);
        match seed % 5 {
            0 => Value::Int(n),
            1 => Value::string(n.to_string()),
            2 => Value::Bool(n % 2 == 0),
            3 => Value::Float(n as f64),
            _ => Value::array(vec![Value::Int(n)]),
        }
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<u8>(), any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
            any::<u8>().prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn store_agrees_with_linear_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut store = AssocStore::new();
            let mut model: Vec<(Value, Value)> = Vec::new();

            for op in ops {
                match op {
                    Op::Set(seed, v) => {
                        let key = key_from(seed);
                        let value = Value::Int(v);
                        store.set(key.clone(), value.clone());
                        match model.iter_mut().find(|(k, _)| k.strict_eq(&key)) {
                            Some(slot) => slot.1 = value,
                            None => model.push((key, value)),
                        }
                    }
                    Op::Remove(seed) => {
                        let key = key_from(seed);
                        let removed = store.remove(&key);
                        let model_pos = model.iter().position(|(k, _)| k.strict_eq(&key));
                        prop_assert_eq!(removed.is_ok(), model_pos.is_some());
                        if let Some(pos) = model_pos {
                            model.remove(pos);
                        }
                    }
                }

                // Invariants after every operation.
                prop_assert_eq!(store.len(), model.len());
                for ((key, value), (mk, mv)) in store.iter().zip(model.iter()) {
                    prop_assert!(key.strict_eq(mk), "order diverged at {}", mk);
                    prop_assert!(value.strict_eq(mv), "value diverged at {}", mk);
                }
                for (key, value) in &model {
                    prop_assert!(store.exists(key));
                    prop_assert!(store.get(key).is_ok_and(|v| v.strict_eq(value)));
                }
            }
        }
    }
}
