//! Parking Service - runs the entrance and exit use cases.
//!
//! The service owns one [`ParkingLot`] and the ports it needs around it:
//! 1. Entrance: check the gate and capacity, read the clock, park the vehicle
//! 2. Exit: check the gate, price the stay, take payment, close the ticket
//!
//! All lot mutation goes through `&mut self`, so a service is the single
//! writer for its lot.

use chrono::Duration;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, GateKind,
        ports::{Clock, LayoutSource, PaymentGateway},
    },
    domain::{
        DisplayBoard, DomainError, Entrance, Exit, GateId, Money, ParkingLot, ParkingSpot,
        Payment, SpotId, Ticket, TicketId, Vehicle,
    },
    error::LabResult,
};

/// Entrance/exit orchestration for a single lot.
pub struct ParkingService {
    lot: ParkingLot,
    clock: Box<dyn Clock>,
    gateway: Box<dyn PaymentGateway>,
}

impl ParkingService {
    /// Create a service around an already-built lot.
    pub fn new(lot: ParkingLot, clock: Box<dyn Clock>, gateway: Box<dyn PaymentGateway>) -> Self {
        Self {
            lot,
            clock,
            gateway,
        }
    }

    /// Load a layout from `source` and build a fresh lot from it.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn from_layout(
        source: &dyn LayoutSource,
        clock: Box<dyn Clock>,
        gateway: Box<dyn PaymentGateway>,
    ) -> LabResult<Self> {
        let layout = source.load()?;
        let lot = layout.build()?;
        info!(
            spots = lot.spots().len(),
            boards = lot.boards().len(),
            "Lot built from layout"
        );
        Ok(Self::new(lot, clock, gateway))
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register a spot; an existing spot with the same id is replaced.
    pub fn add_spot(&mut self, spot: ParkingSpot) {
        let id = spot.id();
        if let Some(old) = self.lot.add_spot(spot) {
            warn!(spot = %id, old_kind = %old.kind(), "Replaced existing spot");
        }
    }

    pub fn add_entrance(&mut self, entrance: Entrance) {
        let id = entrance.id();
        if self.lot.add_entrance(entrance).is_some() {
            warn!(entrance = %id, "Replaced existing entrance");
        }
    }

    pub fn add_exit(&mut self, exit: Exit) {
        let id = exit.id();
        if self.lot.add_exit(exit).is_some() {
            warn!(exit = %id, "Replaced existing exit");
        }
    }

    pub fn add_display_board(&mut self, board: DisplayBoard) {
        let id = board.id();
        if self.lot.add_display_board(board).is_some() {
            warn!(board = %id, "Replaced existing display board");
        }
    }

    // -------------------------------------------------------------------------
    // Use cases
    // -------------------------------------------------------------------------

    /// Take a vehicle in at `entrance` and park it.
    ///
    /// Returns `Ok(None)` when no compatible spot is free.
    #[instrument(skip(self, vehicle), fields(vehicle = %vehicle))]
    pub fn enter(&mut self, entrance: GateId, vehicle: Vehicle) -> LabResult<Option<Ticket>> {
        if self.lot.entrance(entrance).is_none() {
            return Err(ApplicationError::UnknownGate {
                kind: GateKind::Entrance,
                id: entrance.0,
            }
            .into());
        }

        if self.lot.is_full_for(&vehicle) {
            info!(kind = %vehicle.kind(), "Lot full for this vehicle kind");
            return Ok(None);
        }

        let now = self.clock.now();
        let ticket = self.lot.park_vehicle(vehicle, now);
        if let Some(ticket) = &ticket {
            info!(ticket = %ticket.id(), spot = %ticket.spot(), "Vehicle parked");
        }
        Ok(ticket)
    }

    /// Validate a ticket at `exit`: charge for the stay and free the spot.
    ///
    /// If the gateway fails the ticket stays issued and the vehicle stays
    /// parked.
    #[instrument(skip(self))]
    pub fn exit(&mut self, exit: GateId, ticket: TicketId) -> LabResult<Ticket> {
        if self.lot.exit(exit).is_none() {
            return Err(ApplicationError::UnknownGate {
                kind: GateKind::Exit,
                id: exit.0,
            }
            .into());
        }

        let now = self.clock.now();
        let issued = self
            .lot
            .ticket(ticket)
            .ok_or(DomainError::TicketNotFound(ticket.0))?;
        if issued.is_paid() {
            return Err(DomainError::TicketAlreadyPaid { ticket: ticket.0 }.into());
        }

        let parked = issued.parked_for(now);
        if parked < Duration::zero() {
            warn!(
                entry = %issued.entry_time(),
                exit = %now,
                "Exit time is before entry time; charging for zero hours"
            );
        }
        let fee = self.lot.rate().calculate_duration(parked);
        debug!(minutes = parked.num_minutes(), %fee, "Fee calculated");

        let mut payment = Payment::for_fee(fee, now);
        self.gateway.process(&mut payment)?;
        if !payment.is_completed() {
            return Err(ApplicationError::PaymentFailed {
                reason: format!("payment {} was left {}", payment.id, payment.status),
            }
            .into());
        }
        let method = payment.method;

        let paid = self.lot.settle(ticket, now, fee, payment)?.clone();
        info!(%ticket, %fee, %method, "Ticket paid");
        Ok(paid)
    }

    /// Fee the ticket would owe if it were paid now.
    pub fn quote(&self, ticket: TicketId) -> LabResult<Money> {
        Ok(self.lot.quote(ticket, self.clock.now())?)
    }

    /// Clear a spot directly, outside the exit flow.
    pub fn free_slot(&mut self, spot: SpotId) -> Option<Vehicle> {
        let freed = self.lot.free_slot(spot);
        if let Some(vehicle) = &freed {
            info!(%spot, %vehicle, "Spot freed");
        }
        freed
    }
}
