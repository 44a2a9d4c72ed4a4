//! Fleet legality: ship count, spacing and composition.
//!
//! Ships are admitted one at a time in input order. Before a ship joins the
//! occupied set, its one-cell halo is tested against the ships admitted so
//! far; any contact, diagonal touches and shared cells included, rejects the
//! layout. A ship's own cells are added only after the test, so it never
//! collides with itself. Once every ship is admitted, the number of ships of
//! each length must match the rules exactly.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::FleetError;
use crate::config::{FleetRules, BB, STANDARD_RULES};
use crate::ship::ShipSpan;

/// Returns `true` if `spans` form a legal standard fleet.
pub fn validate<I>(spans: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<ShipSpan>,
{
    check_fleet(spans).is_ok()
}

/// Check `spans` against the standard fleet, reporting the first rule broken.
pub fn check_fleet<I>(spans: I) -> Result<(), FleetError>
where
    I: IntoIterator,
    I::Item: Into<ShipSpan>,
{
    check_fleet_with(&STANDARD_RULES, spans)
}

/// Check `spans` against an arbitrary fleet composition.
pub fn check_fleet_with<I>(rules: &FleetRules<'_>, spans: I) -> Result<(), FleetError>
where
    I: IntoIterator,
    I::Item: Into<ShipSpan>,
{
    let spans: Vec<ShipSpan> = spans.into_iter().map(Into::into).collect();
    let expected = rules.ship_count();
    if spans.len() != expected {
        return Err(FleetError::WrongShipCount {
            expected,
            found: spans.len(),
        });
    }

    let mut admitted: Vec<BB> = Vec::with_capacity(spans.len());
    let mut occupied = BB::new();
    for (i, span) in spans.iter().enumerate() {
        if let Some((row, col)) = span.off_board() {
            return Err(FleetError::OutOfBounds { ship: i, row, col });
        }
        let mask = span.footprint();
        let halo = mask.halo();
        if !(halo & occupied).is_empty() {
            return Err(contact(i, mask, halo, &admitted));
        }
        occupied |= mask;
        admitted.push(mask);
    }

    let found_of = |length: usize| admitted.iter().filter(|m| m.count_ones() == length).count();
    for class in rules.classes() {
        let expected = rules.expected_count(class.length());
        let found = found_of(class.length());
        if found != expected {
            return Err(FleetError::WrongComposition {
                length: class.length(),
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// Describe the first admitted ship that `mask` collides with.
fn contact(ship: usize, mask: BB, halo: BB, admitted: &[BB]) -> FleetError {
    for (other, &placed) in admitted.iter().enumerate() {
        if !(mask & placed).is_empty() {
            return FleetError::Overlapping { ship, other };
        }
        if !(halo & placed).is_empty() {
            return FleetError::Adjacent { ship, other };
        }
    }
    FleetError::Adjacent { ship, other: ship }
}
