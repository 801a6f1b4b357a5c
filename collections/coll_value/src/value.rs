//! The closed runtime value enumeration.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::object::ObjectValue;
use crate::registry::{ClassId, TypeRegistry};

/// A runtime value admissible as a collection element or store key.
///
/// Primitives are stored inline; strings, arrays, and objects are
/// reference-counted so that cloning a `Value` is always cheap. Shared
/// payloads are immutable, so the sharing is never observable.
#[derive(Clone, Debug)]
pub enum Value {
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Str(Arc<str>),
    /// Ordered array of values.
    Array(Arc<[Value]>),
    /// Reference value with instance identity.
    Object(Arc<ObjectValue>),
}

/// Runtime type tag: the single dispatch point for validation,
/// canonicalization, and equality.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    /// Tag of `Value::Null`.
    Null,
    /// Tag of `Value::Bool`.
    Bool,
    /// Tag of `Value::Int`.
    Int,
    /// Tag of `Value::Float`.
    Float,
    /// Tag of `Value::Str`.
    Str,
    /// Tag of `Value::Array`.
    Array,
    /// Tag of `Value::Object`, carrying the exact class.
    Object(ClassId),
}

// Factory methods for heap-backed variants

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create an array value from owned elements.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }

    /// Create an object value.
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Arc::new(object))
    }
}

impl Value {
    /// The runtime type tag of this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Str(_) => TypeTag::Str,
            Value::Array(_) => TypeTag::Array,
            Value::Object(o) => TypeTag::Object(o.class()),
        }
    }

    /// Human-readable type name, resolving object classes via the registry.
    pub fn type_name<'r>(&self, registry: &'r TypeRegistry) -> Cow<'r, str> {
        match self {
            Value::Null => Cow::Borrowed("null"),
            Value::Bool(_) => Cow::Borrowed("bool"),
            Value::Int(_) => Cow::Borrowed("int"),
            Value::Float(_) => Cow::Borrowed("float"),
            Value::Str(_) => Cow::Borrowed("string"),
            Value::Array(_) => Cow::Borrowed("array"),
            Value::Object(o) => Cow::Borrowed(registry.name(o.class())),
        }
    }

    /// Engine-wide strict equality: identical tag AND identical payload.
    ///
    /// - Cross-type comparisons are always false.
    /// - Floats compare by bit pattern (total), so a float used as a key can
    ///   always be found again.
    /// - Arrays compare recursively, element by element.
    /// - Objects compare by instance identity, never by field contents.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.strict_eq(y))
            }
            (Value::Object(a), Value::Object(b)) => a.instance() == b.instance(),
            _ => false,
        }
    }

    /// Deep clone for materializing a stored default into a slot.
    ///
    /// Scalars and strings clone structurally. Arrays are rebuilt element by
    /// element. Objects receive a fresh instance identity with deep-cloned
    /// fields, so no two materialized slots alias the same instance.
    pub fn deep_materialize(&self) -> Value {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                self.clone()
            }
            Value::Array(items) => Value::array(items.iter().map(Value::deep_materialize).collect()),
            Value::Object(o) => Value::object(o.deep_clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(o) => write!(f, "object(#{})", o.instance()),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use pretty_assertions::assert_eq;

    fn sample_object(registry: &mut TypeRegistry) -> ObjectValue {
        let class = match registry.lookup("Point") {
            Some(id) => id,
            None => registry.register("Point", &[]).unwrap(),
        };
        ObjectValue::new(
            class,
            vec![("x".into(), Value::Int(1)), ("y".into(), Value::Int(2))],
        )
    }

    #[test]
    fn tags_discriminate_primitives() {
        assert_eq!(Value::Int(1).tag(), TypeTag::Int);
        assert_eq!(Value::Float(1.0).tag(), TypeTag::Float);
        assert_eq!(Value::string("1").tag(), TypeTag::Str);
        assert_eq!(Value::Bool(true).tag(), TypeTag::Bool);
        assert_eq!(Value::Null.tag(), TypeTag::Null);
        assert_eq!(Value::array(vec![]).tag(), TypeTag::Array);
    }

    #[test]
    fn strict_eq_is_never_cross_type() {
        let candidates = [
            Value::Int(1),
            Value::Float(1.0),
            Value::string("1"),
            Value::Bool(true),
        ];
        for (i, a) in candidates.iter().enumerate() {
            for (j, b) in candidates.iter().enumerate() {
                assert_eq!(a.strict_eq(b), i == j, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn strict_eq_compares_arrays_recursively() {
        let a = Value::array(vec![Value::Int(1), Value::array(vec![Value::string("x")])]);
        let b = Value::array(vec![Value::Int(1), Value::array(vec![Value::string("x")])]);
        let c = Value::array(vec![Value::Int(1), Value::array(vec![Value::string("y")])]);
        assert!(a.strict_eq(&b));
        assert!(!a.strict_eq(&c));
    }

    #[test]
    fn strict_eq_floats_use_bit_identity() {
        assert!(Value::Float(f64::NAN).strict_eq(&Value::Float(f64::NAN)));
        assert!(!Value::Float(0.0).strict_eq(&Value::Float(-0.0)));
    }

    #[test]
    fn objects_compare_by_identity_not_fields() {
        let mut registry = TypeRegistry::new();
        let a = Value::object(sample_object(&mut registry));
        let b = Value::object(sample_object(&mut registry));
        assert!(!a.strict_eq(&b));
        assert!(a.strict_eq(&a.clone()));
    }

    #[test]
    fn deep_materialize_gives_objects_fresh_identity() {
        let mut registry = TypeRegistry::new();
        let original = Value::object(sample_object(&mut registry));
        let copy = original.deep_materialize();
        assert!(!original.strict_eq(&copy));
        assert_eq!(original.tag(), copy.tag());
    }

    #[test]
    fn deep_materialize_preserves_scalars() {
        let v = Value::array(vec![Value::Int(3), Value::string("s"), Value::Null]);
        assert!(v.strict_eq(&v.deep_materialize()));
    }

    #[test]
    fn display_renders_compactly() {
        let v = Value::array(vec![Value::Int(1), Value::string("a"), Value::Null]);
        assert_eq!(v.to_string(), r#"[1, "a", null]"#);
    }
}
