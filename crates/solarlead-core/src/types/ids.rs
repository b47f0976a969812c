//! Store-assigned identifiers for leads and FAQ entries.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw row id.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

row_id! {
    /// Identifier of a persisted consultation request.
    LeadId
}

row_id! {
    /// Identifier of a persisted FAQ entry.
    FaqId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_id_display() {
        assert_eq!(LeadId::new(42).to_string(), "42");
    }

    #[test]
    fn test_faq_id_from_str_trims() {
        let id: FaqId = " 7 ".parse().unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_faq_id_from_str_rejects_garbage() {
        assert!("seven".parse::<FaqId>().is_err());
    }

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&LeadId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
