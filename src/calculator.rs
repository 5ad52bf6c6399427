//! Cooling load calculator logic

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{ColdRoom, LoadBreakdown, LoadShares, SizingRecommendation};

/// Density of air, kg/m³
pub const AIR_DENSITY: f64 = 1.2;
/// Specific heat of air, J/(kg·K)
pub const AIR_SPECIFIC_HEAT: f64 = 1005.0;
/// Capacity reserve applied on top of the calculated load
pub const SAFETY_MARGIN: f64 = 1.3;

const SECONDS_PER_HOUR: f64 = 3600.0;
const WATTS_PER_KW: f64 = 1000.0;

/// Estimate the steady-state heat gain of a cold room in kW.
///
/// A negative temperature difference (room warmer than ambient) gives
/// negative transmission and infiltration terms; it is up to the caller to
/// read a non-positive total as "no cooling needed".
#[allow(clippy::too_many_arguments)]
pub fn estimate(
    volume_m3: f64,
    envelope_area_m2: f64,
    internal_temp_c: f64,
    external_temp_c: f64,
    u_value: f64,
    air_changes_per_hour: f64,
    lighting_kw: f64,
    other_kw: f64,
) -> LoadBreakdown {
    let delta_t = external_temp_c - internal_temp_c;

    // Conduction through the panels
    let transmission_kw = u_value * envelope_area_m2 * delta_t / WATTS_PER_KW;

    // Sensible heat of the exchanged air
    let infiltration_kw =
        volume_m3 * AIR_DENSITY * AIR_SPECIFIC_HEAT * delta_t * air_changes_per_hour
            / (SECONDS_PER_HOUR * WATTS_PER_KW);

    let internal_kw = lighting_kw + other_kw;

    let breakdown = LoadBreakdown::new(transmission_kw, infiltration_kw, internal_kw);
    debug!(
        delta_t,
        transmission_kw, infiltration_kw, internal_kw, total_kw = breakdown.total_kw,
        "estimated cooling load"
    );
    breakdown
}

/// Estimate the load for a fully described room
pub fn estimate_room(room: &ColdRoom) -> LoadBreakdown {
    estimate(
        room.geometry.volume(),
        room.geometry.envelope_area(),
        room.conditions.internal_c,
        room.conditions.external_c,
        room.insulation.u_value,
        room.loads.air_changes_per_hour,
        room.loads.lighting_kw,
        room.loads.other_kw,
    )
}

/// Unit capacity to install for a calculated total load
pub fn recommend(total_kw: f64) -> SizingRecommendation {
    SizingRecommendation {
        capacity_kw: total_kw * SAFETY_MARGIN,
    }
}

/// Inputs and results of one calculation, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub room: ColdRoom,
    pub volume_m3: f64,
    pub envelope_area_m2: f64,
    pub delta_t: f64,
    pub breakdown: LoadBreakdown,
    pub shares: LoadShares,
    pub recommendation: SizingRecommendation,
}

/// Run the calculation for a room and collect everything the report shows
pub fn build_report(room: ColdRoom) -> LoadReport {
    let breakdown = estimate_room(&room);
    if !breakdown.requires_cooling() {
        warn!(
            total_kw = breakdown.total_kw,
            "room gains no heat from its surroundings"
        );
    }

    LoadReport {
        volume_m3: room.geometry.volume(),
        envelope_area_m2: room.geometry.envelope_area(),
        delta_t: room.conditions.delta_t(),
        breakdown,
        shares: breakdown.shares(),
        recommendation: recommend(breakdown.total_kw),
        room,
    }
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let room = &self.room;
        writeln!(f, "=== Cold Room ===")?;
        writeln!(
            f,
            "Dimensions: {:.2} x {:.2} x {:.2} m",
            room.geometry.length_m, room.geometry.width_m, room.geometry.height_m
        )?;
        writeln!(f, "Volume:        {:.2} m³", self.volume_m3)?;
        writeln!(f, "Envelope area: {:.1} m²", self.envelope_area_m2)?;
        writeln!(
            f,
            "Temperatures:  {:.1} °C inside, {:.1} °C outside (ΔT {:.1} K)",
            room.conditions.internal_c, room.conditions.external_c, self.delta_t
        )?;
        writeln!(f, "Panel U-value: {:.2} W/m²·K", room.insulation.u_value)?;
        writeln!(
            f,
            "Air changes:   {:.1} /h, lighting {:.2} kW, other {:.2} kW",
            room.loads.air_changes_per_hour, room.loads.lighting_kw, room.loads.other_kw
        )?;
        writeln!(f)?;

        writeln!(f, "=== Result ===")?;
        writeln!(f, "Total cooling load:   {:.2} kW", self.breakdown.total_kw)?;
        if self.breakdown.requires_cooling() {
            writeln!(
                f,
                "Recommended capacity: {:.2} kW (with 30% reserve)",
                self.recommendation.capacity_kw
            )?;
        } else {
            writeln!(f, "No cooling load required")?;
        }
        writeln!(f)?;

        writeln!(f, "{:<14} {:>10} {:>10}", "Component", "Load [kW]", "Share [%]")?;
        writeln!(f, "{}", "-".repeat(36))?;
        let rows = [
            ("Transmission", self.breakdown.transmission_kw, self.shares.transmission_pct),
            ("Infiltration", self.breakdown.infiltration_kw, self.shares.infiltration_pct),
            ("Internal", self.breakdown.internal_kw, self.shares.internal_pct),
        ];
        for (name, kw, pct) in rows {
            writeln!(f, "{:<14} {:>10.2} {:>10.1}", name, kw, pct)?;
        }

        Ok(())
    }
}
