//! Typed entity identifiers
//!
//! Every entity gets its own newtype over `i64` so a film id can never be
//! passed where a user id is expected. Identifiers are assigned sequentially
//! by the store, starting at 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](crate::entities::User)
    UserId
);
entity_id!(
    /// Identifier of a [`Film`](crate::entities::Film)
    FilmId
);
entity_id!(
    /// Identifier of a [`Genre`](crate::entities::Genre)
    GenreId
);
entity_id!(
    /// Identifier of an [`MpaRating`](crate::entities::MpaRating)
    MpaId
);

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

/// Sequential identifier generator for stores without their own sequence
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI64,
}

impl IdSequence {
    /// Create a sequence whose first value is 1
    pub const fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Take the next raw value
    pub fn next_value(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Take the next value as a typed id
    pub fn next_id<T: From<i64>>(&self) -> T {
        T::from(self.next_value())
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
