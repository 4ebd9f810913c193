//! Typed keys for type-safe entity references.
//!
//! Using typed keys prevents accidentally passing a `ProductId` where a `CustomerId` is expected.
//! Keys come from the external data store as opaque strings.

use serde::{Deserialize, Serialize};

/// Macro to generate typed key wrappers.
macro_rules! typed_key {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a key from anything string-like.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

typed_key!(CustomerId, "Identifier of a customer (actor) in the source system.");
typed_key!(ProductId, "Identifier of a product in the source system.");
typed_key!(OrderId, "Identifier of a sales order in the source system.");
