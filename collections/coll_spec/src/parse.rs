//! Constraint expression parsing.

use coll_value::TypeRegistry;

use crate::errors::ConstraintError;
use crate::set::{TokenVec, TypeSet};
use crate::token::TypeToken;

/// Parse a constraint expression into a resolved [`TypeSet`].
///
/// `None` is the "impose no constraint" sentinel and yields the
/// unrestricted set; this is distinct from `Some("null")`, which admits
/// only the null value. A leading `?` unions `null` into the set
/// (idempotent if `null` is also spelled out).
///
/// Fails with [`ConstraintError`] on an empty token, a duplicate token, or
/// a name that is neither a recognized keyword nor registered in
/// `registry`.
#[tracing::instrument(level = "trace", skip(registry))]
pub fn parse(
    expression: Option<&str>,
    registry: &TypeRegistry,
) -> Result<TypeSet, ConstraintError> {
    let Some(expression) = expression else {
        return Ok(TypeSet::any());
    };

    let trimmed = expression.trim();
    let (nullable, body) = match trimmed.strip_prefix('?') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if body.is_empty() {
        return Err(ConstraintError::EmptyToken);
    }

    let mut tokens = TokenVec::new();
    for segment in body.split('|') {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(ConstraintError::EmptyToken);
        }
        let token = resolve(segment, registry)?;
        if tokens.contains(&token) {
            return Err(ConstraintError::DuplicateToken {
                token: segment.to_owned(),
            });
        }
        tokens.push(token);
    }

    // `?` is sugar for "union with null"; union is idempotent.
    if nullable && !tokens.contains(&TypeToken::Null) {
        tokens.push(TypeToken::Null);
    }

    Ok(TypeSet::from_tokens(normalize(tokens, registry)))
}

fn resolve(segment: &str, registry: &TypeRegistry) -> Result<TypeToken, ConstraintError> {
    if let Some(token) = TypeToken::from_keyword(segment) {
        return Ok(token);
    }
    registry
        .lookup(segment)
        .map(TypeToken::Nominal)
        .ok_or_else(|| ConstraintError::UnknownType {
            name: segment.to_owned(),
        })
}

/// Drop every token subsumed by another present token, preserving the
/// order of the survivors. Guarantees the invariant that a pseudotype
/// never co-occurs with a primitive it already covers.
fn normalize(tokens: TokenVec, registry: &TypeRegistry) -> TokenVec {
    tokens
        .iter()
        .filter(|&candidate| {
            !tokens
                .iter()
                .any(|other| other.subsumes(candidate, registry))
        })
        .copied()
        .collect()
}
