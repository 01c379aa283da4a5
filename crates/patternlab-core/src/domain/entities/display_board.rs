use std::collections::BTreeMap;

use serde::Serialize;

use super::spot::ParkingSpot;
use crate::domain::value_objects::{GateId, SpotKind};

/// A board showing how many spots of each kind are free.
///
/// The board holds a snapshot; call [`DisplayBoard::update`] after the lot
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBoard {
    id: GateId,
    free: BTreeMap<SpotKind, usize>,
}

impl DisplayBoard {
    pub fn new(id: u32) -> Self {
        Self {
            id: GateId(id),
            free: BTreeMap::new(),
        }
    }

    pub const fn id(&self) -> GateId {
        self.id
    }

    /// Recount free spots. Kinds with no free spot are omitted.
    pub fn update<'a>(&mut self, spots: impl IntoIterator<Item = &'a ParkingSpot>) {
        self.free.clear();
        for spot in spots.into_iter().filter(|s| s.is_free()) {
            *self.free.entry(spot.kind()).or_insert(0) += 1;
        }
    }

    pub fn free_count(&self, kind: SpotKind) -> usize {
        self.free.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_free(&self) -> usize {
        self.free.values().sum()
    }

    pub fn counts(&self) -> &BTreeMap<SpotKind, usize> {
        &self.free
    }
}
