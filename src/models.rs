//! Data models for cold room inputs and load results

use serde::Serialize;

use crate::error::{Error, Result};

/// Smallest accepted inner dimension of a room, m
pub const MIN_DIMENSION_M: f64 = 1.0;

/// Inner dimensions of the enclosure in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnclosureGeometry {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

impl EnclosureGeometry {
    pub fn new(length_m: f64, width_m: f64, height_m: f64) -> Result<Self> {
        dimension("length", length_m)?;
        dimension("width", width_m)?;
        dimension("height", height_m)?;
        Ok(Self {
            length_m,
            width_m,
            height_m,
        })
    }

    /// Air volume in m³
    pub fn volume(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }

    /// Envelope surface (walls, floor and ceiling) in m²
    pub fn envelope_area(&self) -> f64 {
        2.0 * (self.length_m * self.width_m
            + self.length_m * self.height_m
            + self.width_m * self.height_m)
    }
}

/// Required room temperature and the design ambient temperature, °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalConditions {
    pub internal_c: f64,
    pub external_c: f64,
}

impl ThermalConditions {
    pub fn new(internal_c: f64, external_c: f64) -> Result<Self> {
        finite("internal temperature", internal_c)?;
        finite("external temperature", external_c)?;
        Ok(Self {
            internal_c,
            external_c,
        })
    }

    /// Negative when the room is kept warmer than ambient.
    pub fn delta_t(&self) -> f64 {
        self.external_c - self.internal_c
    }
}

/// Overall heat-transfer coefficient of the envelope panels, W/m²·K
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsulationSpec {
    pub u_value: f64,
}

impl InsulationSpec {
    pub fn new(u_value: f64) -> Result<Self> {
        positive("U-value", u_value)?;
        Ok(Self { u_value })
    }
}

impl From<PanelType> for InsulationSpec {
    fn from(panel: PanelType) -> Self {
        Self {
            u_value: panel.u_value(),
        }
    }
}

/// Sandwich panel types offered for the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum PanelType {
    #[value(name = "pur40")]
    Pur40,
    #[default]
    #[value(name = "pur60")]
    Pur60,
    #[value(name = "pur100")]
    Pur100,
}

impl PanelType {
    pub const ALL: [PanelType; 3] = [PanelType::Pur40, PanelType::Pur60, PanelType::Pur100];

    pub fn u_value(self) -> f64 {
        match self {
            PanelType::Pur40 => 0.55,
            PanelType::Pur60 => 0.35,
            PanelType::Pur100 => 0.20,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PanelType::Pur40 => "PUR 40 mm",
            PanelType::Pur60 => "PUR 60 mm",
            PanelType::Pur100 => "PUR 100 mm",
        }
    }
}

impl std::fmt::Display for PanelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (U={:.2})", self.description(), self.u_value())
    }
}

/// Heat sources inside the room plus the air exchange rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InternalLoads {
    pub air_changes_per_hour: f64,
    pub lighting_kw: f64,
    pub other_kw: f64,
}

impl InternalLoads {
    pub fn validate(&self) -> Result<()> {
        non_negative("air changes per hour", self.air_changes_per_hour)?;
        non_negative("lighting power", self.lighting_kw)?;
        non_negative("other internal power", self.other_kw)?;
        Ok(())
    }
}

/// Everything needed to estimate the cooling load of one room
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColdRoom {
    pub geometry: EnclosureGeometry,
    pub conditions: ThermalConditions,
    pub insulation: InsulationSpec,
    pub loads: InternalLoads,
}

/// Heat gains in kW. `total` is always the sum of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadBreakdown {
    pub transmission_kw: f64,
    pub infiltration_kw: f64,
    pub internal_kw: f64,
    pub total_kw: f64,
}

impl LoadBreakdown {
    pub fn new(transmission_kw: f64, infiltration_kw: f64, internal_kw: f64) -> Self {
        Self {
            transmission_kw,
            infiltration_kw,
            internal_kw,
            total_kw: transmission_kw + infiltration_kw + internal_kw,
        }
    }

    /// Component shares of the total in percent.
    ///
    /// A total at or below zero means no cooling load, so every share is 0%.
    pub fn shares(&self) -> LoadShares {
        if !self.total_kw.is_finite() || self.total_kw <= 0.0 {
            return LoadShares::default();
        }
        let pct = |component: f64| component / self.total_kw * 100.0;
        LoadShares {
            transmission_pct: pct(self.transmission_kw),
            infiltration_pct: pct(self.infiltration_kw),
            internal_pct: pct(self.internal_kw),
        }
    }

    pub fn requires_cooling(&self) -> bool {
        self.total_kw > 0.0
    }
}

/// Share of each component in the total load, %
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LoadShares {
    pub transmission_pct: f64,
    pub infiltration_pct: f64,
    pub internal_pct: f64,
}

/// Unit capacity to install, total load plus the safety margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingRecommendation {
    pub capacity_kw: f64,
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn dimension(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= MIN_DIMENSION_M {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            value,
            reason: "must be at least 1 m",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        })
    }
}
