//! Discrete policy action.

use serde::{Deserialize, Serialize};

/// Identifier of a discrete action in the policy's action space.
///
/// The meaning of an id belongs to the environment the policy was trained in
/// (for the hospital inventory environment it is an order quantity). The
/// service returns it verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(u32);

impl Action {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Action {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_value(Action::new(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }
}
