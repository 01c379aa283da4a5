//! Implementation of the `patternlab lot` commands.
//!
//! `demo` drives a [`ParkingService`] through a short scripted session on a
//! manual clock: four vehicles arrive, time passes, two leave and the one
//! that was turned away tries again. `show` prints a layout without parking
//! anything.

use std::{collections::BTreeMap, path::PathBuf};

use chrono::Duration;
use patternlab_adapters::{
    BuiltinLayout, ManualClock, RecordingGateway, SystemClock, TomlLayoutFile,
    layout::render_layout,
};
use patternlab_core::{
    application::{
        ParkingService,
        ports::{Clock, LayoutSource},
    },
    domain::{GateId, LotLayout, Money, SpotKind, Ticket, TicketId, Vehicle, hours_between},
    error::{LabError, LabResult},
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::{DemoArgs, LotCommands, OutputFormat, ShowArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Longest stay the demo will simulate, in hours.
const MAX_DEMO_HOURS: f64 = 10_000.0;

pub fn execute(cmd: LotCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        LotCommands::Demo(args) => demo(args, config, output),
        LotCommands::Show(args) => show(args, config, output),
    }
}

/// Flag first, then `parking.layout`, then the compiled-in lot.
fn layout_source(flag: Option<PathBuf>, config: &AppConfig) -> Box<dyn LayoutSource> {
    match flag.or_else(|| config.parking.layout.clone()) {
        Some(path) => Box::new(TomlLayoutFile::new(path)),
        None => Box::new(BuiltinLayout),
    }
}

fn stay_length(hours: f64) -> CliResult<Duration> {
    if !hours.is_finite() || !(0.0..=MAX_DEMO_HOURS).contains(&hours) {
        return Err(CliError::InvalidInput {
            message: format!("--hours must be between 0 and {MAX_DEMO_HOURS}, got {hours}"),
            source: None,
        });
    }
    Ok(Duration::milliseconds((hours * 3_600_000.0).round() as i64))
}

// ── demo ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum DemoEvent {
    Parked {
        vehicle: String,
        ticket: TicketId,
        spot: u32,
    },
    Rejected {
        vehicle: String,
    },
    Paid {
        vehicle: String,
        ticket: TicketId,
        parked_hours: f64,
        fee: Money,
        method: String,
    },
}

#[derive(Debug, Serialize)]
struct DemoReport {
    layout: String,
    hours: f64,
    events: Vec<DemoEvent>,
    boards: BTreeMap<u32, BTreeMap<SpotKind, usize>>,
    total: Money,
}

fn demo(args: DemoArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let hours = args.hours.unwrap_or(config.parking.demo_hours);
    let stay = stay_length(hours)?;
    let source = layout_source(args.layout, config);

    let report = run_demo(source.as_ref(), hours, stay)?;
    render_demo(&report, output)
}

fn run_demo(source: &dyn LayoutSource, hours: f64, stay: Duration) -> LabResult<DemoReport> {
    let clock = ManualClock::new(SystemClock::new().now());
    let gateway = RecordingGateway::new();
    let mut service =
        ParkingService::from_layout(source, Box::new(clock.clone()), Box::new(gateway.clone()))?;

    let entrance = first_gate(service.lot().entrances().map(|g| g.id()), "entrance")?;
    let exit = first_gate(service.lot().exits().map(|g| g.id()), "exit")?;
    debug!(%entrance, %exit, "Gates chosen");

    let mut events = Vec::new();
    let mut parked = Vec::new();
    let mut turned_away = Vec::new();

    let arrivals = [
        Vehicle::car("DEMO-CAR"),
        Vehicle::van("DEMO-VAN"),
        Vehicle::motorcycle("DEMO-MC"),
        Vehicle::truck("DEMO-TRK"),
    ];
    for vehicle in arrivals {
        arrive(&mut service, entrance, vehicle, &mut events, &mut parked, &mut turned_away)?;
    }

    clock.advance(stay)?;

    // The van and the car leave; everything else stays.
    let leaving: Vec<TicketId> = parked
        .iter()
        .filter(|t| matches!(t.vehicle().license(), "DEMO-VAN" | "DEMO-CAR"))
        .map(Ticket::id)
        .collect();
    for ticket in leaving {
        let paid = service.exit(exit, ticket)?;
        let method = paid
            .payment()
            .map(|p| p.method.to_string())
            .unwrap_or_default();
        events.push(DemoEvent::Paid {
            vehicle: paid.vehicle().to_string(),
            ticket: paid.id(),
            parked_hours: hours_between(paid.parked_for(clock.now())),
            fee: paid.fee(),
            method,
        });
    }

    // Anyone turned away earlier tries once more.
    for vehicle in std::mem::take(&mut turned_away) {
        arrive(&mut service, entrance, vehicle, &mut events, &mut parked, &mut Vec::new())?;
    }

    let boards = service
        .lot()
        .boards()
        .iter()
        .map(|b| (b.id().0, b.counts().clone()))
        .collect();
    let total = gateway.total()?;
    info!(%total, events = events.len(), "Demo finished");

    Ok(DemoReport {
        layout: source.describe(),
        hours,
        events,
        boards,
        total,
    })
}

fn arrive(
    service: &mut ParkingService,
    entrance: GateId,
    vehicle: Vehicle,
    events: &mut Vec<DemoEvent>,
    parked: &mut Vec<Ticket>,
    turned_away: &mut Vec<Vehicle>,
) -> LabResult<()> {
    let label = vehicle.to_string();
    match service.enter(entrance, vehicle.clone())? {
        Some(ticket) => {
            events.push(DemoEvent::Parked {
                vehicle: label,
                ticket: ticket.id(),
                spot: ticket.spot().0,
            });
            parked.push(ticket);
        }
        None => {
            events.push(DemoEvent::Rejected { vehicle: label });
            turned_away.push(vehicle);
        }
    }
    Ok(())
}

fn first_gate(mut ids: impl Iterator<Item = GateId>, what: &str) -> LabResult<GateId> {
    ids.next().ok_or_else(|| LabError::Internal {
        message: format!("lot has no {what}"),
    })
}

fn render_demo(report: &DemoReport, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output.json(report)?,
        OutputFormat::Plain => {
            for event in &report.events {
                let line = match event {
                    DemoEvent::Parked { vehicle, ticket, spot } => {
                        format!("parked {vehicle} spot={spot} ticket={ticket}")
                    }
                    DemoEvent::Rejected { vehicle } => format!("rejected {vehicle}"),
                    DemoEvent::Paid { vehicle, ticket, parked_hours, fee, method } => format!(
                        "paid {vehicle} ticket={ticket} hours={parked_hours} fee={fee} method={method}"
                    ),
                };
                output.print(&line)?;
            }
            output.print(&format!("total {}", report.total))?;
        }
        OutputFormat::Human | OutputFormat::Auto => {
            output.header(&format!("Lot from {}", report.layout))?;
            let mut clock_moved = false;
            for event in &report.events {
                match event {
                    DemoEvent::Parked { vehicle, ticket, spot } => {
                        output.success(&format!("{vehicle} parked in spot {spot} (ticket {ticket})"))?
                    }
                    DemoEvent::Rejected { vehicle } => {
                        output.warning(&format!("{vehicle} turned away: no compatible spot free"))?
                    }
                    DemoEvent::Paid { vehicle, ticket, parked_hours, fee, method } => {
                        if !clock_moved {
                            output.info(&format!("{} hours pass", report.hours))?;
                            clock_moved = true;
                        }
                        output.success(&format!(
                            "{vehicle} left after {parked_hours} hours: ticket {ticket} \
                             paid {fee} by {method}"
                        ))?
                    }
                }
            }
            for (id, counts) in &report.boards {
                output.header(&format!("Board {id}:"))?;
                for (kind, free) in counts {
                    output.print(&format!("  {kind:<12} {free} free"))?;
                }
            }
            output.print(&format!("Total collected: {}", report.total))?;
        }
    }
    Ok(())
}

// ── show ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ShowReport {
    source: String,
    layout: LotLayout,
    availability: BTreeMap<SpotKind, usize>,
}

fn show(args: ShowArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let source = layout_source(args.layout, config);
    let layout = source.load()?;
    let lot = layout.build().map_err(LabError::from)?;

    let report = ShowReport {
        source: source.describe(),
        availability: lot.availability(),
        layout,
    };

    match output.format() {
        OutputFormat::Json => output.json(&report)?,
        OutputFormat::Plain => {
            let rendered = render_layout(&report.layout).map_err(|e| LabError::Internal {
                message: format!("could not render layout: {e}"),
            })?;
            output.print(rendered.trim_end())?;
        }
        OutputFormat::Human | OutputFormat::Auto => {
            output.header(&format!("Lot from {}", report.source))?;
            output.print(&format!(
                "  entrances {:?}  exits {:?}  boards {:?}",
                report.layout.entrances, report.layout.exits, report.layout.boards
            ))?;
            for spot in &report.layout.spots {
                output.print(&format!("  spot {:<4} {}", spot.id, spot.kind))?;
            }
            output.header("Free spots:")?;
            for (kind, free) in &report.availability {
                output.print(&format!("  {kind:<12} {free}"))?;
            }
        }
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_on_builtin(hours: f64) -> DemoReport {
        run_demo(&BuiltinLayout, hours, stay_length(hours).unwrap()).unwrap()
    }

    #[test]
    fn builtin_demo_script() {
        let report = demo_on_builtin(2.0);

        let kinds: Vec<&str> = report
            .events
            .iter()
            .map(|e| match e {
                DemoEvent::Parked { .. } => "parked",
                DemoEvent::Rejected { .. } => "rejected",
                DemoEvent::Paid { .. } => "paid",
            })
            .collect();
        assert_eq!(
            kinds,
            ["parked", "parked", "parked", "rejected", "paid", "paid", "parked"]
        );

        // Two stays of two hours at $7.50 each.
        assert_eq!(report.total, Money::from_cents(1500));
    }

    #[test]
    fn truck_gets_the_large_spot_back() {
        let report = demo_on_builtin(1.0);
        let last = report.events.last().unwrap();
        assert!(matches!(
            last,
            DemoEvent::Parked { vehicle, spot: 3, .. } if vehicle == "truck DEMO-TRK"
        ));
    }

    #[test]
    fn board_shows_remaining_free_spots() {
        let report = demo_on_builtin(2.0);
        let board = &report.boards[&1];
        // The car left spot 1; motorcycle and truck are still parked.
        assert_eq!(board[&SpotKind::Handicapped], 1);
        assert_eq!(board[&SpotKind::Compact], 1);
        assert!(!board.contains_key(&SpotKind::Large));
        assert!(!board.contains_key(&SpotKind::Motorcycle));
    }

    #[test]
    fn long_stay_goes_to_card() {
        let report = demo_on_builtin(3.5);
        let methods: Vec<&str> = report
            .events
            .iter()
            .filter_map(|e| match e {
                DemoEvent::Paid { method, .. } => Some(method.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(methods, ["credit-card", "credit-card"]);
        assert_eq!(report.total, Money::from_cents(2 * 1350));
    }

    #[test]
    fn paid_events_report_time_parked() {
        let report = demo_on_builtin(1.5);
        let parked: Vec<f64> = report
            .events
            .iter()
            .filter_map(|e| match e {
                DemoEvent::Paid { parked_hours, .. } => Some(*parked_hours),
                _ => None,
            })
            .collect();
        assert_eq!(parked, [1.5, 1.5]);
        assert_eq!(report.total, Money::from_cents(2 * 750));
    }

    #[test]
    fn stay_length_rejects_bad_hours() {
        assert!(stay_length(-0.5).is_err());
        assert!(stay_length(f64::NAN).is_err());
        assert!(stay_length(f64::INFINITY).is_err());
        assert_eq!(stay_length(1.5).unwrap(), Duration::minutes(90));
    }

    #[test]
    fn flag_overrides_configured_layout() {
        let mut config = AppConfig::default();
        config.parking.layout = Some(PathBuf::from("from-config.toml"));

        let source = layout_source(Some(PathBuf::from("from-flag.toml")), &config);
        assert_eq!(source.describe(), "from-flag.toml");

        let source = layout_source(None, &config);
        assert_eq!(source.describe(), "from-config.toml");

        let source = layout_source(None, &AppConfig::default());
        assert_eq!(source.describe(), "built-in layout");
    }
}
