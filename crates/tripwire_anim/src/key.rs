//! Parameter keys
//!
//! Names are hashed once into a [`ParameterKey`] so hot call sites can skip
//! string comparison. Keys are stable within a process run and are never
//! persisted.

use rustc_hash::FxHasher;
use std::fmt;
use std::hash::Hasher;

/// Stable integer substitute for a parameter name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterKey(u64);

impl ParameterKey {
    /// Return the raw hash backing this key.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Derive the key for a parameter name.
///
/// Hashes the raw UTF-8 bytes, so the result does not depend on
/// `Hash for str` framing and is identical for identical names.
pub fn derive_key(name: &str) -> ParameterKey {
    let mut hasher = FxHasher::default();
    hasher.write(name.as_bytes());
    ParameterKey(hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn derivation_is_repeatable() {
        for name in ["Speed", "Jump", "IsGrounded"] {
            assert_eq!(derive_key(name), derive_key(name), "name={name}");
        }
        let owned = String::from("Speed");
        assert_eq!(derive_key(&owned), derive_key("Speed"));
    }

    #[test]
    fn distinct_names_get_distinct_keys() {
        let corpus = [
            "Speed", "speed", "SPEED", "Jump", "Jumping", "IsGrounded", "IsGround", "Grounded",
            "Attack", "Attack1", "Attack2", "Attack3", "Die", "Dead", "Hit", "HitReact",
            "MoveX", "MoveY", "MoveZ", "Turn", "TurnLeft", "TurnRight", "Crouch", "Sprint",
            "Reload", "Aim", "AimOffset", "Blend", "BlendTree", "a", "b", "ab", "ba",
        ];
        let keys: FxHashSet<ParameterKey> = corpus.iter().map(|name| derive_key(name)).collect();
        assert_eq!(keys.len(), corpus.len());
    }
}
