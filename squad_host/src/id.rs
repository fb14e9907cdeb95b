//! Defines the identifier types used by the host

use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {kind} '{value}': {source}")]
pub struct InvalidIdError {
    pub kind: &'static str,
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident($inner:ty), $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$inner>().map(Self).map_err(|source| InvalidIdError {
                    kind: $kind,
                    value: s.to_owned(),
                    source,
                })
            }
        }
    };
}

numeric_id!(
    /// A player's 64-bit Steam identifier. Stable across sessions and name changes.
    SteamId(u64), "steam id"
);

numeric_id!(
    /// One of the two teams on the server.
    TeamId(u8), "team id"
);

numeric_id!(
    /// A squad number. Only unique within a team.
    SquadId(u32), "squad id"
);
