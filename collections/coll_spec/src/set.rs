//! The resolved, queryable constraint.

use smallvec::SmallVec;

use coll_value::{TypeRegistry, TypeTag, Value};

use crate::errors::{TypeMismatch, Unrepresentable};
use crate::token::TypeToken;

/// Token storage: small unions dominate, so keep them inline.
pub(crate) type TokenVec = SmallVec<[TypeToken; 4]>;

/// An immutable union of [`TypeToken`]s governing a collection's admissible
/// values.
///
/// Insertion order of tokens is irrelevant to semantics (it is preserved
/// only for rendering). A resolved `TypeSet` is never empty: "no
/// restriction" is a distinguished unrestricted state, not an empty token
/// set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSet {
    tokens: TokenVec,
    any: bool,
}

impl TypeSet {
    /// The unrestricted constraint: every value validates.
    pub fn any() -> Self {
        TypeSet {
            tokens: TokenVec::new(),
            any: true,
        }
    }

    pub(crate) fn from_tokens(tokens: TokenVec) -> Self {
        debug_assert!(!tokens.is_empty(), "resolved TypeSet must not be empty");
        TypeSet { tokens, any: false }
    }

    /// Is this the unrestricted constraint?
    pub fn is_any(&self) -> bool {
        self.any
    }

    /// The resolved tokens. Empty only for the unrestricted constraint.
    pub fn tokens(&self) -> &[TypeToken] {
        &self.tokens
    }

    /// Exact token membership.
    pub fn contains(&self, token: &TypeToken) -> bool {
        self.tokens.contains(token)
    }

    /// Does this set contain every one of `tokens`?
    pub fn contains_all(&self, tokens: &[TypeToken]) -> bool {
        tokens.iter().all(|t| self.contains(t))
    }

    /// Is every member of this set one of `tokens`?
    ///
    /// False for the unrestricted constraint, which admits more than any
    /// finite token list.
    pub fn contains_only(&self, tokens: &[TypeToken]) -> bool {
        !self.any && self.tokens.iter().all(|t| tokens.contains(t))
    }

    /// Validate a candidate value: it matches if any token matches.
    ///
    /// Deterministic and side-effect-free; rejection never mutates anything.
    pub fn validate(&self, value: &Value, registry: &TypeRegistry) -> Result<(), TypeMismatch> {
        if self.any || self.tokens.iter().any(|t| t.matches(value, registry)) {
            Ok(())
        } else {
            Err(TypeMismatch {
                expected: self.display(registry),
                got: value.type_name(registry).into_owned(),
            })
        }
    }

    /// Infer the minimal constraint covering a batch of sample values.
    ///
    /// One pass; the result is the set of distinct runtime tags actually
    /// observed, in first-seen order, with no pseudotype folding. `Null` is
    /// a member iff at least one element is null. An empty input yields the
    /// unrestricted constraint.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn infer<'a, I>(values: I) -> TypeSet
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut tokens = TokenVec::new();
        for value in values {
            let token = match value.tag() {
                TypeTag::Null => TypeToken::Null,
                TypeTag::Bool => TypeToken::Bool,
                TypeTag::Int => TypeToken::Int,
                TypeTag::Float => TypeToken::Float,
                TypeTag::Str => TypeToken::Str,
                TypeTag::Array => TypeToken::Array,
                TypeTag::Object(class) => TypeToken::Nominal(class),
            };
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        if tokens.is_empty() {
            TypeSet::any()
        } else {
            TypeSet::from_tokens(tokens)
        }
    }

    /// Derive the construction-time default value for this constraint.
    ///
    /// Priority: a single primitive/pseudotype token yields its canonical
    /// zero value; otherwise a `null` member yields null; otherwise no
    /// default is derivable. (An explicit caller-supplied default is
    /// validated by the collection before this is consulted.)
    pub fn derive_default(&self, registry: &TypeRegistry) -> Result<Value, Unrepresentable> {
        if self.any {
            return Ok(Value::Null);
        }
        if let [token] = self.tokens.as_slice() {
            if let Some(zero) = token.zero_value() {
                return Ok(zero);
            }
        }
        if self.contains(&TypeToken::Null) {
            return Ok(Value::Null);
        }
        Err(Unrepresentable {
            constraint: self.display(registry),
        })
    }

    /// Render the constraint as a `|`-joined expression, for error messages
    /// and introspection.
    pub fn display(&self, registry: &TypeRegistry) -> String {
        if self.any {
            return "mixed".to_owned();
        }
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            out.push_str(&token.display(registry));
        }
        out
    }
}

impl TypeToken {
    /// Canonical zero value of a primitive or pseudotype token, if any.
    fn zero_value(&self) -> Option<Value> {
        match self {
            TypeToken::Int | TypeToken::Uint | TypeToken::Number => Some(Value::Int(0)),
            TypeToken::Float => Some(Value::Float(0.0)),
            TypeToken::Str => Some(Value::string("")),
            TypeToken::Bool => Some(Value::Bool(false)),
            TypeToken::Array => Some(Value::array(vec![])),
            TypeToken::Scalar => Some(Value::Int(0)),
            TypeToken::Null | TypeToken::Mixed => Some(Value::Null),
            TypeToken::Nominal(_) => None,
        }
    }
}
