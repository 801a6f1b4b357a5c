//! Individual constraint tokens.

use std::borrow::Cow;

use coll_value::{ClassId, TypeRegistry, Value};

/// One admissible runtime-type descriptor within a constraint.
///
/// Primitives match exactly one runtime tag. Pseudotypes are shorthand for
/// a group of primitives (`uint` additionally constrains the payload).
/// Nominal tokens match the named class and anything that derives from it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeToken {
    // Primitives
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    Str,
    /// Boolean.
    Bool,
    /// Array.
    Array,
    /// The null value. Nullability of a constraint is exactly the presence
    /// of this token, never a side flag.
    Null,

    // Pseudotypes
    /// `int | float | string | bool`.
    Scalar,
    /// `int | float`.
    Number,
    /// Non-negative `int`.
    Uint,
    /// Any value at all, null included.
    Mixed,

    /// A registered class or interface, matching subtypes nominally.
    Nominal(ClassId),
}

impl TypeToken {
    /// Resolve a recognized primitive or pseudotype keyword.
    pub fn from_keyword(keyword: &str) -> Option<TypeToken> {
        match keyword {
            "int" => Some(TypeToken::Int),
            "float" => Some(TypeToken::Float),
            "string" => Some(TypeToken::Str),
            "bool" => Some(TypeToken::Bool),
            "array" => Some(TypeToken::Array),
            "null" => Some(TypeToken::Null),
            "scalar" => Some(TypeToken::Scalar),
            "number" => Some(TypeToken::Number),
            "uint" => Some(TypeToken::Uint),
            "mixed" => Some(TypeToken::Mixed),
            _ => None,
        }
    }

    /// Does this token admit `value`?
    pub fn matches(&self, value: &Value, registry: &TypeRegistry) -> bool {
        match self {
            TypeToken::Int => matches!(value, Value::Int(_)),
            TypeToken::Float => matches!(value, Value::Float(_)),
            TypeToken::Str => matches!(value, Value::Str(_)),
            TypeToken::Bool => matches!(value, Value::Bool(_)),
            TypeToken::Array => matches!(value, Value::Array(_)),
            TypeToken::Null => matches!(value, Value::Null),
            TypeToken::Scalar => matches!(
                value,
                Value::Int(_) | Value::Float(_) | Value::Str(_) | Value::Bool(_)
            ),
            TypeToken::Number => matches!(value, Value::Int(_) | Value::Float(_)),
            TypeToken::Uint => matches!(value, Value::Int(v) if *v >= 0),
            TypeToken::Mixed => true,
            TypeToken::Nominal(declared) => match value {
                Value::Object(o) => registry.satisfies(o.class(), *declared),
                _ => false,
            },
        }
    }

    /// Does every value admitted by `other` also satisfy `self`?
    ///
    /// Strict: a token never subsumes itself. Used to drop redundant tokens
    /// after parsing, so pseudotypes never co-occur with primitives they
    /// already cover.
    pub fn subsumes(&self, other: &TypeToken, registry: &TypeRegistry) -> bool {
        match self {
            TypeToken::Mixed => !matches!(other, TypeToken::Mixed),
            TypeToken::Scalar => matches!(
                other,
                TypeToken::Int
                    | TypeToken::Float
                    | TypeToken::Str
                    | TypeToken::Bool
                    | TypeToken::Number
                    | TypeToken::Uint
            ),
            TypeToken::Number => matches!(
                other,
                TypeToken::Int | TypeToken::Float | TypeToken::Uint
            ),
            TypeToken::Int => matches!(other, TypeToken::Uint),
            TypeToken::Nominal(ancestor) => match other {
                TypeToken::Nominal(sub) => {
                    sub != ancestor && registry.satisfies(*sub, *ancestor)
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Render the token as it appears in a constraint expression.
    pub fn display<'r>(&self, registry: &'r TypeRegistry) -> Cow<'r, str> {
        match self {
            TypeToken::Int => Cow::Borrowed("int"),
            TypeToken::Float => Cow::Borrowed("float"),
            TypeToken::Str => Cow::Borrowed("string"),
            TypeToken::Bool => Cow::Borrowed("bool"),
            TypeToken::Array => Cow::Borrowed("array"),
            TypeToken::Null => Cow::Borrowed("null"),
            TypeToken::Scalar => Cow::Borrowed("scalar"),
            TypeToken::Number => Cow::Borrowed("number"),
            TypeToken::Uint => Cow::Borrowed("uint"),
            TypeToken::Mixed => Cow::Borrowed("mixed"),
            TypeToken::Nominal(id) => Cow::Borrowed(registry.name(*id)),
        }
    }
}
