//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `ConsultantId` where a
//! `ProjectId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(CompanyId, "Unique identifier for a company.");
typed_id!(ProfitCentreId, "Unique identifier for a profit centre.");
typed_id!(CostCentreId, "Unique identifier for a cost centre.");
typed_id!(ConsultantId, "Unique identifier for a consultant.");
typed_id!(ProjectId, "Unique identifier for a project.");
typed_id!(
    ProjectAssignmentId,
    "Unique identifier for a consultant's project assignment."
);
typed_id!(RosterEntryId, "Unique identifier for a roster entry.");
typed_id!(ForecastElementId, "Unique identifier for a forecast element.");
typed_id!(ForecastEntryId, "Unique identifier for a forecast entry.");
typed_id!(
    ProjectForecastEntryId,
    "Unique identifier for a project forecast entry."
);

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
