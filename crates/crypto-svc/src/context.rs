//! Encryption context resolution.
//!
//! Every ciphertext is bound to an [`EncryptionContext`] — a string→string map
//! the key-management service authenticates at decrypt time. Callers may
//! supply their own context; requests without one get a fixed default so that
//! no ciphertext is ever produced context-free.

use common::EncryptionContext;

/// The context bound when a request does not supply one.
pub fn default_context() -> EncryptionContext {
    EncryptionContext::from([
        ("stage".into(), "local".into()),
        ("purpose".into(), "test".into()),
        ("origin".into(), "crypto-service".into()),
    ])
}

/// Resolve the encryption context for a request.
///
/// A supplied, non-empty context is returned unchanged — it is never merged
/// with the default. Anything else resolves to [`default_context`].
pub fn resolve(supplied: Option<EncryptionContext>) -> EncryptionContext {
    match supplied {
        Some(ctx) if !ctx.is_empty() => ctx,
        _ => default_context(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_exactly_three_entries() {
        let ctx = default_context();
        assert_eq!(ctx.len(), 3);
        assert_eq!(ctx.get("stage").map(String::as_str), Some("local"));
        assert_eq!(ctx.get("purpose").map(String::as_str), Some("test"));
        assert_eq!(ctx.get("origin").map(String::as_str), Some("crypto-service"));
    }

    #[test]
    fn absent_context_resolves_to_default() {
        assert_eq!(resolve(None), default_context());
    }

    #[test]
    fn empty_context_resolves_to_default() {
        assert_eq!(resolve(Some(EncryptionContext::new())), default_context());
    }

    #[test]
    fn supplied_context_is_returned_unmerged() {
        let supplied = EncryptionContext::from([("tenant".into(), "acme".into())]);
        let resolved = resolve(Some(supplied.clone()));
        assert_eq!(resolved, supplied);
        assert!(!resolved.contains_key("stage"));
    }
}
