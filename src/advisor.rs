//! Default internal loads proposed from room volume
//!
//! Small rooms get more air changes per hour since door openings flush a
//! larger share of their air; lighting and occupant/goods heat grow linearly
//! with volume from a fixed baseline.

use tracing::debug;

use crate::models::InternalLoads;

const AIR_CHANGE_VOLUME_FACTOR: f64 = 40.0;
const MIN_AIR_CHANGES: f64 = 1.0;
const MAX_AIR_CHANGES: f64 = 5.0;

const LIGHTING_BASE_KW: f64 = 0.05;
const LIGHTING_KW_PER_M3: f64 = 0.002;

const OTHER_BASE_KW: f64 = 0.1;
const OTHER_KW_PER_M3: f64 = 0.01;

/// Suggest air changes, lighting and other internal load for a room volume in m³.
///
/// The caller must pass a positive volume.
pub fn suggest_defaults(volume_m3: f64) -> InternalLoads {
    debug_assert!(volume_m3 > 0.0, "volume must be positive");

    let air_changes = round_to(AIR_CHANGE_VOLUME_FACTOR / volume_m3, 1)
        .clamp(MIN_AIR_CHANGES, MAX_AIR_CHANGES);
    let lighting_kw = round_to(LIGHTING_BASE_KW + LIGHTING_KW_PER_M3 * volume_m3, 2);
    let other_kw = round_to(OTHER_BASE_KW + OTHER_KW_PER_M3 * volume_m3, 2);

    debug!(volume_m3, air_changes, lighting_kw, other_kw, "suggested defaults");

    InternalLoads {
        air_changes_per_hour: air_changes,
        lighting_kw,
        other_kw,
    }
}

/// Round to a number of decimal places the way Python's `round` does.
///
/// The decision is made on the exact binary value of `value`: only a value
/// that sits exactly halfway goes to the even digit, everything else goes to
/// the nearer neighbour even when `value * 10^n` lands on `.5` after rounding.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let fives = 5f64.powi(decimals);
    let twos = 2f64.powi(decimals);

    // value * 10^n == (p + e) * 2^n exactly; scaling by 2^n loses nothing.
    let p = value * fives;
    let e = value.mul_add(fives, -p);
    let scaled = p * twos;
    let error = e * twos;

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        if error == 0.0 {
            scaled.round_ties_even()
        } else if error > 0.0 {
            scaled + 0.5
        } else {
            scaled - 0.5
        }
    } else {
        scaled.round()
    };
    rounded / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_room_defaults() {
        let loads = suggest_defaults(22.5);
        assert_eq!(loads.air_changes_per_hour, 1.8);
        assert_eq!(loads.lighting_kw, 0.1);
        assert_eq!(loads.other_kw, 0.33);
    }

    #[test]
    fn air_changes_stay_within_bounds() {
        for volume in [0.5, 1.0, 5.0, 8.0, 22.5, 40.0, 100.0, 1_000.0, 1e6] {
            let rate = suggest_defaults(volume).air_changes_per_hour;
            assert!((1.0..=5.0).contains(&rate), "volume {volume} gave {rate}");
        }
        assert_eq!(suggest_defaults(1.0).air_changes_per_hour, 5.0);
        assert_eq!(suggest_defaults(500.0).air_changes_per_hour, 1.0);
    }

    #[test]
    fn air_changes_fall_while_loads_grow_with_volume() {
        let volumes = [1.0, 4.0, 9.0, 12.0, 22.5, 30.0, 45.0, 80.0, 200.0];
        for pair in volumes.windows(2) {
            let small = suggest_defaults(pair[0]);
            let large = suggest_defaults(pair[1]);
            assert!(large.air_changes_per_hour <= small.air_changes_per_hour);
            assert!(large.lighting_kw >= small.lighting_kw);
            assert!(large.other_kw > small.other_kw);
        }
    }

    #[test]
    fn same_volume_same_answer() {
        assert_eq!(suggest_defaults(37.2), suggest_defaults(37.2));
    }

    #[test]
    fn exact_ties_round_to_even() {
        let loads = suggest_defaults(32.0);
        assert_eq!(loads.air_changes_per_hour, 1.2);
        assert_eq!(loads.lighting_kw, 0.11);
        assert_eq!(loads.other_kw, 0.42);
        assert_eq!(suggest_defaults(2.5).other_kw, 0.12);
    }

    #[test]
    fn near_ties_follow_the_exact_value() {
        // 0.095 and 0.325 are stored slightly above the halfway point
        assert_eq!(round_to(0.05 + 0.002 * 22.5, 2), 0.1);
        assert_eq!(round_to(0.1 + 0.01 * 22.5, 2), 0.33);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(1.75, 1), 1.8);
        assert_eq!(round_to(-1.25, 1), -1.2);
        assert_eq!(round_to(2.675, 2), 2.67);
    }
}
