//! Vehicle-to-spot capability registry.
//!
//! Each vehicle kind is described exactly once by its [`VehicleDef`]; the
//! fit check is a lookup in that table.
//!
//! # Adding a New Vehicle Kind
//!
//! 1. Add a variant to `VehicleKind` in `value_objects.rs`
//! 2. Add one [`VehicleDef`] entry to [`VEHICLE_REGISTRY`]
//! 3. No other files change

use crate::domain::value_objects::{SpotKind, VehicleKind};

/// Describes which spots a vehicle kind may occupy.
#[derive(Debug, Clone, Copy)]
pub struct VehicleDef {
    /// The vehicle kind this definition describes.
    pub kind: VehicleKind,

    /// Spot kinds this vehicle may occupy. The policy is fixed.
    pub eligible_spots: &'static [SpotKind],
}

/// Single source of truth for spot compatibility.
pub static VEHICLE_REGISTRY: &[VehicleDef] = &[
    VehicleDef {
        kind: VehicleKind::Motorcycle,
        eligible_spots: &[SpotKind::Motorcycle],
    },
    VehicleDef {
        kind: VehicleKind::Car,
        eligible_spots: &[SpotKind::Compact, SpotKind::Handicapped],
    },
    VehicleDef {
        kind: VehicleKind::Van,
        eligible_spots: &[SpotKind::Large],
    },
    VehicleDef {
        kind: VehicleKind::Truck,
        eligible_spots: &[SpotKind::Large],
    },
];

/// Look up the registry entry for a vehicle kind.
pub fn vehicle_def(kind: VehicleKind) -> Option<&'static VehicleDef> {
    VEHICLE_REGISTRY.iter().find(|def| def.kind == kind)
}

/// Spot kinds a vehicle kind may occupy. Empty if unregistered.
pub fn eligible_spots(kind: VehicleKind) -> &'static [SpotKind] {
    vehicle_def(kind).map_or(&[], |def| def.eligible_spots)
}

/// Whether a vehicle of `vehicle` kind may occupy a `spot` kind.
pub fn can_fit(vehicle: VehicleKind, spot: SpotKind) -> bool {
    eligible_spots(vehicle).contains(&spot)
}
