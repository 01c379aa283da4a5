use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GateId;

/// A lot entrance where vehicles take tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrance {
    id: GateId,
}

impl Entrance {
    pub const fn new(id: u32) -> Self {
        Self { id: GateId(id) }
    }

    pub const fn id(&self) -> GateId {
        self.id
    }
}

/// A lot exit where tickets are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exit {
    id: GateId,
}

impl Exit {
    pub const fn new(id: u32) -> Self {
        Self { id: GateId(id) }
    }

    pub const fn id(&self) -> GateId {
        self.id
    }
}
