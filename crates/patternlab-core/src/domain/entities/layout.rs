use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{
    display_board::DisplayBoard,
    gate::{Entrance, Exit},
    lot::ParkingLot,
    spot::ParkingSpot,
};
use crate::domain::{error::DomainError, value_objects::SpotKind};

/// One spot in a layout description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotSpec {
    pub id: u32,
    pub kind: SpotKind,
}

/// A serialisable description of a lot's fixed resources.
///
/// Layouts are the input format for building a lot; spot order in the
/// layout becomes the lot's allocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLayout {
    #[serde(default)]
    pub entrances: Vec<u32>,
    #[serde(default)]
    pub exits: Vec<u32>,
    #[serde(default)]
    pub boards: Vec<u32>,
    #[serde(default)]
    pub spots: Vec<SpotSpec>,
}

impl LotLayout {
    pub fn with_spot(mut self, id: u32, kind: SpotKind) -> Self {
        self.spots.push(SpotSpec { id, kind });
        self
    }

    pub fn with_entrance(mut self, id: u32) -> Self {
        self.entrances.push(id);
        self
    }

    pub fn with_exit(mut self, id: u32) -> Self {
        self.exits.push(id);
        self
    }

    pub fn with_board(mut self, id: u32) -> Self {
        self.boards.push(id);
        self
    }

    /// Check the layout describes a usable lot.
    ///
    /// Unlike the registry itself, which lets a later registration replace
    /// an earlier one, a layout with repeated ids is rejected.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.spots.is_empty() {
            return Err(DomainError::InvalidLayout("layout has no spots".into()));
        }
        if self.entrances.is_empty() {
            return Err(DomainError::InvalidLayout("layout has no entrances".into()));
        }
        if self.exits.is_empty() {
            return Err(DomainError::InvalidLayout("layout has no exits".into()));
        }

        check_unique("spot", self.spots.iter().map(|s| s.id))?;
        check_unique("entrance", self.entrances.iter().copied())?;
        check_unique("exit", self.exits.iter().copied())?;
        check_unique("board", self.boards.iter().copied())?;
        Ok(())
    }

    /// Validate and build a fresh lot.
    pub fn build(&self) -> Result<ParkingLot, DomainError> {
        self.validate()?;

        let mut lot = ParkingLot::new();
        for spec in &self.spots {
            lot.add_spot(ParkingSpot::new(spec.id, spec.kind));
        }
        for &id in &self.entrances {
            lot.add_entrance(Entrance::new(id));
        }
        for &id in &self.exits {
            lot.add_exit(Exit::new(id));
        }
        for &id in &self.boards {
            lot.add_display_board(DisplayBoard::new(id));
        }
        Ok(lot)
    }

    /// Describe an existing lot's resources.
    pub fn of(lot: &ParkingLot) -> Self {
        Self {
            entrances: lot.entrances().map(|e| e.id().0).collect(),
            exits: lot.exits().map(|e| e.id().0).collect(),
            boards: lot.boards().iter().map(|b| b.id().0).collect(),
            spots: lot
                .spots()
                .iter()
                .map(|s| SpotSpec {
                    id: s.id().0,
                    kind: s.kind(),
                })
                .collect(),
        }
    }
}

fn check_unique(what: &str, ids: impl Iterator<Item = u32>) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::InvalidLayout(format!(
                "duplicate {what} id {id}"
            )));
        }
    }
    Ok(())
}
