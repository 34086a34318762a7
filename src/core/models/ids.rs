//! Identifier newtypes
//!
//! Every entity is keyed by a `u64`. Wrapping them keeps a document id from
//! being passed where a user id is expected.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| format!("Invalid {}: {s}", stringify!($name)))
            }
        }
    };
}

id_type!(
    /// Identifier of a document record
    DocumentId
);

id_type!(
    /// Identifier of a tag
    TagId
);

id_type!(
    /// Identifier of a user in the directory
    UserId
);

id_type!(
    /// Identifier of a validation task
    TaskId
);
