use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{TicketId, VehicleKind};

/// A vehicle arriving at or parked in the lot.
///
/// Holds at most one active ticket reference, set when the lot issues a
/// ticket for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    kind: VehicleKind,
    license: String,
    ticket: Option<TicketId>,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, license: impl Into<String>) -> Self {
        Self {
            kind,
            license: license.into(),
            ticket: None,
        }
    }

    pub fn car(license: impl Into<String>) -> Self {
        Self::new(VehicleKind::Car, license)
    }

    pub fn van(license: impl Into<String>) -> Self {
        Self::new(VehicleKind::Van, license)
    }

    pub fn truck(license: impl Into<String>) -> Self {
        Self::new(VehicleKind::Truck, license)
    }

    pub fn motorcycle(license: impl Into<String>) -> Self {
        Self::new(VehicleKind::Motorcycle, license)
    }

    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub const fn ticket(&self) -> Option<TicketId> {
        self.ticket
    }

    pub(crate) fn assign_ticket(&mut self, ticket: TicketId) {
        self.ticket = Some(ticket);
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.license)
    }
}
