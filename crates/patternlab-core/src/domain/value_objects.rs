//! Domain value objects: kinds, statuses, identifiers and money.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO compatibility logic. Which vehicle fits which spot lives in
//! `capabilities.rs`; which strategy backs an algorithm lives in `sorting`.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a capability entry in `capabilities.rs`
//! 4. Nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

// ── VehicleKind ──────────────────────────────────────────────────────────────

/// The kind of vehicle arriving at the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Van,
    Truck,
    Motorcycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [Self::Car, Self::Van, Self::Truck, Self::Motorcycle];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Van => "van",
            Self::Truck => "truck",
            Self::Motorcycle => "motorcycle",
        }
    }

    /// Whether a vehicle of this kind may occupy a spot of `spot` kind.
    ///
    /// Delegates to `capabilities::can_fit`. Do not add match arms here;
    /// register capabilities in `capabilities.rs` instead.
    pub fn fits(self, spot: SpotKind) -> bool {
        crate::domain::capabilities::can_fit(self, spot)
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "van" => Ok(Self::Van),
            "truck" => Ok(Self::Truck),
            "motorcycle" | "motorbike" | "bike" => Ok(Self::Motorcycle),
            other => Err(DomainError::UnknownVehicleKind(other.to_string())),
        }
    }
}

// ── SpotKind ─────────────────────────────────────────────────────────────────

/// The kind of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotKind {
    Handicapped,
    Compact,
    Large,
    Motorcycle,
}

impl SpotKind {
    pub const ALL: [SpotKind; 4] = [
        Self::Handicapped,
        Self::Compact,
        Self::Large,
        Self::Motorcycle,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Handicapped => "handicapped",
            Self::Compact => "compact",
            Self::Large => "large",
            Self::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for SpotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "handicapped" | "accessible" => Ok(Self::Handicapped),
            "compact" => Ok(Self::Compact),
            "large" => Ok(Self::Large),
            "motorcycle" => Ok(Self::Motorcycle),
            other => Err(DomainError::UnknownSpotKind(other.to_string())),
        }
    }
}

// ── Statuses ─────────────────────────────────────────────────────────────────

/// Lifecycle of a parking ticket. The only transition is `Issued → Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Issued,
    Paid,
}

impl TicketStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "issued",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a ticket was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
}

impl PaymentMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit-card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        })
    }
}

// ── SortAlgorithm ────────────────────────────────────────────────────────────

/// The catalogue of sorting strategies.
///
/// Each key maps to exactly one strategy in `sorting::strategy_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Merge,
    #[default]
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [Self::Bubble, Self::Merge, Self::Quick];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Whether equal elements keep their input order.
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Merge)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" => Ok(Self::Bubble),
            "merge" | "merge-sort" => Ok(Self::Merge),
            "quick" | "quick-sort" | "quicksort" => Ok(Self::Quick),
            other => Err(DomainError::UnknownAlgorithm(other.to_string())),
        }
    }
}

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Identifier of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u32);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket number. Issued from a per-lot counter starting at [`TicketId::FIRST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub u64);

impl TicketId {
    pub const FIRST: TicketId = TicketId(1000);

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier shared by entrances, exits and display boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(pub u32);

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Money ────────────────────────────────────────────────────────────────────

/// An amount of money in whole cents.
///
/// Fees are built from half-dollar tiers, so cents are exact where a float
/// would not be.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    pub const fn checked_mul(self, rhs: u64) -> Option<Money> {
        match self.0.checked_mul(rhs) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// The operators saturate at `u64::MAX` cents rather than wrap or panic.

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, rhs: u64) -> Money {
        Money(self.0.saturating_mul(rhs))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
