//! Integration tests for patternlab-core.
//!
//! These drive the public API only, with small hand-written port
//! implementations standing in for the adapters crate.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use patternlab_core::{
    application::{ApplicationError, GateKind},
    domain::{DomainError, PaymentMethod, PaymentStatus, TicketStatus},
    prelude::*,
};

// ----------------------------------------------------------------------------
// Fake ports
// ----------------------------------------------------------------------------

#[derive(Clone)]
struct SharedClock(Arc<Mutex<DateTime<Utc>>>);

impl SharedClock {
    fn new(at: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(at)))
    }

    fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for SharedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

#[derive(Clone, Default)]
struct Ledger(Arc<Mutex<Vec<Payment>>>);

impl PaymentGateway for Ledger {
    fn process(&self, payment: &mut Payment) -> LabResult<()> {
        payment.complete();
        self.0.lock().unwrap().push(payment.clone());
        Ok(())
    }
}

struct FixedLayout(LotLayout);

impl LayoutSource for FixedLayout {
    fn load(&self) -> LabResult<LotLayout> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed".into()
    }
}

fn demo_layout() -> LotLayout {
    LotLayout::default()
        .with_entrance(1)
        .with_exit(1)
        .with_board(1)
        .with_spot(1, SpotKind::Handicapped)
        .with_spot(2, SpotKind::Compact)
        .with_spot(3, SpotKind::Large)
        .with_spot(4, SpotKind::Motorcycle)
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 7, 30, 0).unwrap()
}

fn service() -> (ParkingService, SharedClock, Ledger) {
    let clock = SharedClock::new(start());
    let ledger = Ledger::default();
    let svc = ParkingService::from_layout(
        &FixedLayout(demo_layout()),
        Box::new(clock.clone()),
        Box::new(ledger.clone()),
    )
    .unwrap();
    (svc, clock, ledger)
}

// ----------------------------------------------------------------------------
// Parking
// ----------------------------------------------------------------------------

#[test]
fn entrance_to_exit_round_trip() {
    let (mut svc, clock, ledger) = service();

    let car = svc.enter(GateId(1), Vehicle::car("KA-01-HH-1234")).unwrap().unwrap();
    let van = svc.enter(GateId(1), Vehicle::van("KA-01-HH-9999")).unwrap().unwrap();
    assert_eq!(car.id(), TicketId(1000));
    assert_eq!(van.id(), TicketId(1001));
    assert_eq!(svc.lot().boards()[0].total_free(), 2);

    clock.advance(Duration::minutes(90));
    let paid = svc.exit(GateId(1), car.id()).unwrap();
    assert_eq!(paid.fee().to_string(), "$7.50");
    assert_eq!(paid.status(), TicketStatus::Paid);
    assert_eq!(paid.exit_time(), Some(start() + Duration::minutes(90)));

    let payments = ledger.0.lock().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].method, PaymentMethod::Cash);
    assert_eq!(payments[0].status, PaymentStatus::Completed);
    drop(payments);

    assert!(svc.lot().spot(SpotId(1)).unwrap().is_free());
    assert_eq!(svc.lot().boards()[0].total_free(), 3);
}

#[test]
fn lot_full_for_a_kind_issues_nothing() {
    let (mut svc, _clock, _ledger) = service();

    assert!(svc.enter(GateId(1), Vehicle::truck("T1")).unwrap().is_some());
    assert!(svc.enter(GateId(1), Vehicle::van("V1")).unwrap().is_none());

    // A car still gets in; the failed van did not consume a ticket id.
    let car = svc.enter(GateId(1), Vehicle::car("C1")).unwrap().unwrap();
    assert_eq!(car.id(), TicketId(1001));
}

#[test]
fn motorcycles_only_use_motorcycle_spots() {
    let (mut svc, _clock, _ledger) = service();

    let bike = svc.enter(GateId(1), Vehicle::motorcycle("M1")).unwrap().unwrap();
    assert_eq!(bike.spot(), SpotId(4));
    assert!(svc.enter(GateId(1), Vehicle::motorcycle("M2")).unwrap().is_none());
}

#[test]
fn ticket_cannot_be_paid_twice() {
    let (mut svc, clock, ledger) = service();
    let ticket = svc.enter(GateId(1), Vehicle::car("C1")).unwrap().unwrap();

    clock.advance(Duration::hours(4));
    svc.exit(GateId(1), ticket.id()).unwrap();
    let err = svc.exit(GateId(1), ticket.id()).unwrap_err();

    assert!(matches!(
        err,
        LabError::Domain(DomainError::TicketAlreadyPaid { .. })
    ));
    assert_eq!(ledger.0.lock().unwrap().len(), 1);
}

#[test]
fn long_stay_is_charged_to_card() {
    let (mut svc, clock, _ledger) = service();
    let ticket = svc.enter(GateId(1), Vehicle::truck("T1")).unwrap().unwrap();

    clock.advance(Duration::minutes(210));
    assert_eq!(svc.quote(ticket.id()).unwrap().to_string(), "$13.50");

    let paid = svc.exit(GateId(1), ticket.id()).unwrap();
    assert_eq!(paid.payment().unwrap().method, PaymentMethod::CreditCard);
}

#[test]
fn unknown_gates_are_reported() {
    let (mut svc, _clock, _ledger) = service();
    let err = svc.enter(GateId(42), Vehicle::car("C1")).unwrap_err();
    assert!(matches!(
        err,
        LabError::Application(ApplicationError::UnknownGate {
            kind: GateKind::Entrance,
            id: 42
        })
    ));
}

// ----------------------------------------------------------------------------
// Sorting
// ----------------------------------------------------------------------------

#[test]
fn sorting_context_swaps_strategies() {
    let mut ctx = SortingContext::with_algorithm(SortAlgorithm::Bubble);
    let mut a = vec![3.5, -1.0, 2.25, 0.0];
    ctx.sort(&mut a).unwrap();
    assert_eq!(a, vec![-1.0, 0.0, 2.25, 3.5]);

    ctx.set_algorithm(patternlab_core::domain::strategy_for(SortAlgorithm::Quick));
    let mut b = vec![10.0, 5.0];
    ctx.sort(&mut b).unwrap();
    assert_eq!(b, vec![5.0, 10.0]);
}

#[test]
fn sort_service_reports_stats() {
    let svc = SortService::with_algorithm(SortAlgorithm::Bubble);
    let mut words = vec!["pear", "apple", "fig"];
    let stats = svc.sort_instrumented(&mut words).unwrap();
    assert_eq!(words, vec!["apple", "fig", "pear"]);
    assert!(stats.swaps > 0);
}
