use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a catalog object (function, operator or operator family).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
pub struct Oid(pub u32);

impl Oid {
    /// The "no object" marker.
    pub const INVALID: Oid = Oid(0);
    /// The first identifier handed out to objects created after bootstrap.
    pub const FIRST_NORMAL: Oid = Oid(16384);

    /// Whether this names an object.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}
