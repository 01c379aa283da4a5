//! The `ParkingLot` aggregate root.
//!
//! The lot owns every spot, gate, display board and ticket. It is an
//! ordinary value, built explicitly and handed to whoever drives it, so tests
//! can run any number of independent lots side by side.
//!
//! # Domain purity
//!
//! This module must not import `tracing` and must not read the clock.
//! Callers pass timestamps in.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{
    display_board::DisplayBoard,
    gate::{Entrance, Exit},
    rate::ParkingRate,
    spot::ParkingSpot,
    ticket::{Payment, Ticket},
    vehicle::Vehicle,
};
use crate::domain::{
    error::DomainError,
    value_objects::{GateId, Money, SpotId, SpotKind, TicketId},
};

/// Registry of spots, gates, boards and issued tickets.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    rate: ParkingRate,
    /// Registration order is the allocation scan order.
    spots: Vec<ParkingSpot>,
    entrances: BTreeMap<GateId, Entrance>,
    exits: BTreeMap<GateId, Exit>,
    boards: Vec<DisplayBoard>,
    tickets: BTreeMap<TicketId, Ticket>,
    next_ticket: TicketId,
}

impl ParkingLot {
    pub fn new() -> Self {
        Self {
            rate: ParkingRate,
            spots: Vec::new(),
            entrances: BTreeMap::new(),
            exits: BTreeMap::new(),
            boards: Vec::new(),
            tickets: BTreeMap::new(),
            next_ticket: TicketId::FIRST,
        }
    }

    // ── Registration ─────────────────────────────────────────────────────────

    /// Register a spot. On an id collision the new spot takes the old one's
    /// place in scan order and the old spot is returned.
    pub fn add_spot(&mut self, spot: ParkingSpot) -> Option<ParkingSpot> {
        match self.spots.iter().position(|s| s.id() == spot.id()) {
            Some(idx) => Some(std::mem::replace(&mut self.spots[idx], spot)),
            None => {
                self.spots.push(spot);
                None
            }
        }
    }

    /// Register an entrance. Returns the entrance it replaced, if any.
    pub fn add_entrance(&mut self, entrance: Entrance) -> Option<Entrance> {
        self.entrances.insert(entrance.id(), entrance)
    }

    /// Register an exit. Returns the exit it replaced, if any.
    pub fn add_exit(&mut self, exit: Exit) -> Option<Exit> {
        self.exits.insert(exit.id(), exit)
    }

    /// Register a display board and bring it up to date.
    pub fn add_display_board(&mut self, mut board: DisplayBoard) -> Option<DisplayBoard> {
        board.update(&self.spots);
        match self.boards.iter().position(|b| b.id() == board.id()) {
            Some(idx) => Some(std::mem::replace(&mut self.boards[idx], board)),
            None => {
                self.boards.push(board);
                None
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn rate(&self) -> &ParkingRate {
        &self.rate
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn spot(&self, id: SpotId) -> Option<&ParkingSpot> {
        self.spots.iter().find(|s| s.id() == id)
    }

    pub fn entrance(&self, id: GateId) -> Option<&Entrance> {
        self.entrances.get(&id)
    }

    pub fn entrances(&self) -> impl Iterator<Item = &Entrance> {
        self.entrances.values()
    }

    pub fn exit(&self, id: GateId) -> Option<&Exit> {
        self.exits.get(&id)
    }

    pub fn exits(&self) -> impl Iterator<Item = &Exit> {
        self.exits.values()
    }

    pub fn boards(&self) -> &[DisplayBoard] {
        &self.boards
    }

    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.get(&id)
    }

    /// Every ticket ever issued, in issue order.
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Free spot count for every spot kind, including kinds with none free.
    pub fn availability(&self) -> BTreeMap<SpotKind, usize> {
        let mut counts: BTreeMap<SpotKind, usize> =
            SpotKind::ALL.iter().map(|&kind| (kind, 0)).collect();
        for spot in self.spots.iter().filter(|s| s.is_free()) {
            *counts.entry(spot.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether a vehicle of this kind would be turned away right now.
    pub fn is_full_for(&self, vehicle: &Vehicle) -> bool {
        !self.spots.iter().any(|s| s.accepts(vehicle))
    }

    // ── Allocation ───────────────────────────────────────────────────────────

    /// Park `vehicle` in the first free compatible spot, in registration
    /// order, and issue a ticket for it.
    ///
    /// Returns `None` when no compatible spot is free; the lot is left
    /// untouched in that case.
    pub fn park_vehicle(&mut self, mut vehicle: Vehicle, at: DateTime<Utc>) -> Option<Ticket> {
        let idx = self.spots.iter().position(|s| s.accepts(&vehicle))?;
        let id = self.next_ticket;
        vehicle.assign_ticket(id);

        let spot = &mut self.spots[idx];
        spot.assign(vehicle.clone()).ok()?;
        let ticket = Ticket::issue(id, spot.id(), vehicle, at);

        self.next_ticket = id.next();
        self.tickets.insert(id, ticket.clone());
        self.refresh_boards();
        Some(ticket)
    }

    /// Clear a spot. Unknown ids and already-free spots are ignored.
    pub fn free_slot(&mut self, id: SpotId) -> Option<Vehicle> {
        let released = self
            .spots
            .iter_mut()
            .find(|s| s.id() == id)
            .and_then(ParkingSpot::release);
        if released.is_some() {
            self.refresh_boards();
        }
        released
    }

    // ── Exit ─────────────────────────────────────────────────────────────────

    /// Fee owed on an issued ticket if it were paid at `at`.
    pub fn quote(&self, id: TicketId, at: DateTime<Utc>) -> Result<Money, DomainError> {
        let ticket = self.ticket(id).ok_or(DomainError::TicketNotFound(id.0))?;
        if ticket.is_paid() {
            return Err(DomainError::TicketAlreadyPaid { ticket: id.0 });
        }
        Ok(self.rate.calculate_duration(ticket.parked_for(at)))
    }

    /// Close a ticket with its payment and free its spot.
    ///
    /// The spot is only cleared while it still holds this ticket's vehicle.
    pub fn settle(
        &mut self,
        id: TicketId,
        at: DateTime<Utc>,
        fee: Money,
        payment: Payment,
    ) -> Result<&Ticket, DomainError> {
        let ticket = self
            .tickets
            .get_mut(&id)
            .ok_or(DomainError::TicketNotFound(id.0))?;
        ticket.settle(at, fee, payment)?;
        let spot_id = ticket.spot();

        let holds_ticket = self
            .spot(spot_id)
            .and_then(ParkingSpot::vehicle)
            .is_some_and(|v| v.ticket() == Some(id));
        if holds_ticket {
            self.free_slot(spot_id);
        }

        self.ticket(id).ok_or(DomainError::TicketNotFound(id.0))
    }

    /// Recount free spots on every display board.
    pub fn refresh_boards(&mut self) {
        for board in &mut self.boards {
            board.update(&self.spots);
        }
    }
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TicketStatus;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
    }

    fn demo_lot() -> ParkingLot {
        let mut lot = ParkingLot::new();
        lot.add_spot(ParkingSpot::handicapped(1));
        lot.add_spot(ParkingSpot::compact(2));
        lot.add_spot(ParkingSpot::large(3));
        lot.add_spot(ParkingSpot::motorcycle(4));
        lot.add_entrance(Entrance::new(1));
        lot.add_exit(Exit::new(1));
        lot
    }

    #[test]
    fn car_takes_first_compatible_spot_in_registration_order() {
        let mut lot = demo_lot();
        let ticket = lot.park_vehicle(Vehicle::car("KA-01-HH-1234"), t0()).unwrap();
        // Handicapped was registered first and accepts cars.
        assert_eq!(ticket.spot(), SpotId(1));
        assert_eq!(ticket.status(), TicketStatus::Issued);
        assert_eq!(ticket.vehicle().ticket(), Some(ticket.id()));
        assert!(!lot.spot(SpotId(1)).unwrap().is_free());
    }

    #[test]
    fn ticket_ids_increase_from_one_thousand() {
        let mut lot = demo_lot();
        let ids: Vec<u64> = [
            Vehicle::car("A"),
            Vehicle::van("B"),
            Vehicle::motorcycle("C"),
            Vehicle::car("D"),
        ]
        .into_iter()
        .map(|v| lot.park_vehicle(v, t0()).unwrap().id().0)
        .collect();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003]);
    }

    #[test]
    fn motorcycle_rejected_when_only_other_kinds_are_free() {
        let mut lot = demo_lot();
        lot.park_vehicle(Vehicle::motorcycle("M1"), t0()).unwrap();

        let before = lot.spots().to_vec();
        assert!(lot.park_vehicle(Vehicle::motorcycle("M2"), t0()).is_none());
        assert_eq!(lot.spots(), before.as_slice());
        assert_eq!(lot.tickets().count(), 1);
        assert!(
            lot.spots()
                .iter()
                .filter(|s| s.kind() != SpotKind::Motorcycle)
                .all(ParkingSpot::is_free)
        );
    }

    #[test]
    fn failed_park_does_not_consume_a_ticket_number() {
        let mut lot = demo_lot();
        lot.park_vehicle(Vehicle::truck("T1"), t0()).unwrap();
        assert!(lot.park_vehicle(Vehicle::van("V1"), t0()).is_none());
        let next = lot.park_vehicle(Vehicle::car("C1"), t0()).unwrap();
        assert_eq!(next.id(), TicketId(1001));
    }

    #[test]
    fn freed_spot_can_be_reused() {
        let mut lot = demo_lot();
        let first = lot.park_vehicle(Vehicle::van("V1"), t0()).unwrap();
        assert!(lot.park_vehicle(Vehicle::truck("T1"), t0()).is_none());

        let released = lot.free_slot(first.spot()).unwrap();
        assert_eq!(released.license(), "V1");
        assert!(lot.spot(first.spot()).unwrap().is_free());

        let second = lot.park_vehicle(Vehicle::truck("T1"), t0()).unwrap();
        assert_eq!(second.spot(), first.spot());
    }

    #[test]
    fn free_slot_ignores_unknown_and_free_spots() {
        let mut lot = demo_lot();
        assert!(lot.free_slot(SpotId(99)).is_none());
        assert!(lot.free_slot(SpotId(2)).is_none());
    }

    #[test]
    fn duplicate_spot_id_replaces_in_place() {
        let mut lot = demo_lot();
        let old = lot.add_spot(ParkingSpot::large(2)).unwrap();
        assert_eq!(old.kind(), SpotKind::Compact);
        assert_eq!(lot.spots().len(), 4);
        assert_eq!(lot.spots()[1].kind(), SpotKind::Large);
    }

    #[test]
    fn duplicate_gates_return_previous() {
        let mut lot = demo_lot();
        assert!(lot.add_entrance(Entrance::new(1)).is_some());
        assert!(lot.add_exit(Exit::new(2)).is_none());
        assert_eq!(lot.exits().count(), 2);
    }

    #[test]
    fn quote_and_settle_close_the_ticket_and_free_the_spot() {
        let mut lot = demo_lot();
        let ticket = lot.park_vehicle(Vehicle::car("C"), t0()).unwrap();
        let exit_at = t0() + Duration::minutes(150);

        let fee = lot.quote(ticket.id(), exit_at).unwrap();
        assert_eq!(fee, Money::from_cents(1100));

        let mut payment = Payment::for_fee(fee, exit_at);
        payment.complete();
        let settled = lot.settle(ticket.id(), exit_at, fee, payment).unwrap();
        assert!(settled.is_paid());
        assert_eq!(settled.fee(), fee);
        assert!(lot.spot(ticket.spot()).unwrap().is_free());

        // Kept for audit, and cannot be paid twice.
        assert!(lot.ticket(ticket.id()).is_some());
        assert_eq!(
            lot.quote(ticket.id(), exit_at),
            Err(DomainError::TicketAlreadyPaid { ticket: 1000 })
        );
    }

    #[test]
    fn settle_does_not_evict_a_newer_occupant() {
        let mut lot = demo_lot();
        let old = lot.park_vehicle(Vehicle::van("V1"), t0()).unwrap();
        lot.free_slot(old.spot());
        lot.park_vehicle(Vehicle::truck("T1"), t0()).unwrap();

        let fee = lot.quote(old.id(), t0()).unwrap();
        lot.settle(old.id(), t0(), fee, Payment::for_fee(fee, t0()))
            .unwrap();

        let occupant = lot.spot(old.spot()).unwrap().vehicle().unwrap();
        assert_eq!(occupant.license(), "T1");
    }

    #[test]
    fn unknown_ticket_is_not_found() {
        let lot = demo_lot();
        assert_eq!(
            lot.quote(TicketId(4242), t0()),
            Err(DomainError::TicketNotFound(4242))
        );
    }

    #[test]
    fn availability_and_boards_track_changes() {
        let mut lot = demo_lot();
        lot.add_display_board(DisplayBoard::new(1));
        assert_eq!(lot.boards()[0].total_free(), 4);

        let ticket = lot.park_vehicle(Vehicle::car("C"), t0()).unwrap();
        assert_eq!(lot.availability()[&SpotKind::Handicapped], 0);
        assert_eq!(lot.boards()[0].total_free(), 3);

        lot.free_slot(ticket.spot());
        assert_eq!(lot.boards()[0].free_count(SpotKind::Handicapped), 1);
    }

    #[test]
    fn independent_lots_have_independent_counters() {
        let mut a = demo_lot();
        let mut b = demo_lot();
        a.park_vehicle(Vehicle::car("A"), t0()).unwrap();
        let from_b = b.park_vehicle(Vehicle::car("B"), t0()).unwrap();
        assert_eq!(from_b.id(), TicketId::FIRST);
    }

    #[test]
    fn is_full_for_reflects_compatible_spots() {
        let mut lot = demo_lot();
        assert!(!lot.is_full_for(&Vehicle::truck("T")));
        lot.park_vehicle(Vehicle::van("V"), t0()).unwrap();
        assert!(lot.is_full_for(&Vehicle::truck("T")));
    }
}
