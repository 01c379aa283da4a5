use serde::{Deserialize, Serialize};

use super::vehicle::Vehicle;
use crate::domain::value_objects::{SpotId, SpotKind};

/// A single parking spot.
///
/// Invariant: a spot is occupied exactly when it holds a vehicle. Occupancy
/// is derived from `vehicle`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    id: SpotId,
    kind: SpotKind,
    vehicle: Option<Vehicle>,
}

impl ParkingSpot {
    pub fn new(id: u32, kind: SpotKind) -> Self {
        Self {
            id: SpotId(id),
            kind,
            vehicle: None,
        }
    }

    pub fn handicapped(id: u32) -> Self {
        Self::new(id, SpotKind::Handicapped)
    }

    pub fn compact(id: u32) -> Self {
        Self::new(id, SpotKind::Compact)
    }

    pub fn large(id: u32) -> Self {
        Self::new(id, SpotKind::Large)
    }

    pub fn motorcycle(id: u32) -> Self {
        Self::new(id, SpotKind::Motorcycle)
    }

    pub const fn id(&self) -> SpotId {
        self.id
    }

    pub const fn kind(&self) -> SpotKind {
        self.kind
    }

    pub const fn is_free(&self) -> bool {
        self.vehicle.is_none()
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Whether `vehicle` could be placed here right now.
    pub fn accepts(&self, vehicle: &Vehicle) -> bool {
        self.is_free() && vehicle.kind().fits(self.kind)
    }

    /// Place a vehicle. Returns it back if the spot is already taken.
    pub(crate) fn assign(&mut self, vehicle: Vehicle) -> Result<(), Vehicle> {
        if self.vehicle.is_some() {
            return Err(vehicle);
        }
        self.vehicle = Some(vehicle);
        Ok(())
    }

    /// Clear the occupant, returning it. `None` if the spot was already free.
    pub(crate) fn release(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spot_is_free() {
        let spot = ParkingSpot::compact(2);
        assert!(spot.is_free());
        assert!(spot.vehicle().is_none());
    }

    #[test]
    fn assign_and_release_keep_occupancy_consistent() {
        let mut spot = ParkingSpot::large(3);
        spot.assign(Vehicle::van("KA-01-HH-9999")).unwrap();
        assert!(!spot.is_free());
        assert_eq!(spot.vehicle().map(Vehicle::license), Some("KA-01-HH-9999"));

        let second = spot.assign(Vehicle::truck("KA-04-AA-9998"));
        assert!(second.is_err());

        let released = spot.release().unwrap();
        assert_eq!(released.license(), "KA-01-HH-9999");
        assert!(spot.is_free());
        assert!(spot.release().is_none());
    }

    #[test]
    fn accepts_checks_kind_and_occupancy() {
        let mut spot = ParkingSpot::handicapped(1);
        assert!(spot.accepts(&Vehicle::car("A")));
        assert!(!spot.accepts(&Vehicle::motorcycle("B")));

        spot.assign(Vehicle::car("A")).unwrap();
        assert!(!spot.accepts(&Vehicle::car("C")));
    }
}
