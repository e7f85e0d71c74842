//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{S2tgtError, S2tgtResult};

/// A type that can be used as a token id in a [`crate::vocab::Dictionary`].
///
/// These are constrained to be unsigned primitive integers.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a `usize` index to a token, failing if it does not fit.
pub fn try_token_from_usize<T: TokenType>(value: usize) -> S2tgtResult<T> {
    T::from_usize(value).ok_or(S2tgtError::TokenOutOfRange)
}

/// Convert a token to a `usize` index.
pub fn token_to_usize<T: TokenType>(token: T) -> S2tgtResult<usize> {
    token.to_usize().ok_or(S2tgtError::TokenOutOfRange)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type S2HashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> S2HashMap<K, V> {
            S2HashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type S2HashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type S2HashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> S2HashMap<K, V> {
            S2HashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type S2HashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}
