//! Cold Room Calculator
//!
//! Estimates the refrigeration capacity an insulated cold room needs, with
//! pipe size and refrigerant reference tables for the installer.

mod advisor;
mod calculator;
mod error;
mod models;
mod reference;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::models::{
    ColdRoom, EnclosureGeometry, InsulationSpec, InternalLoads, PanelType, ThermalConditions,
};

#[derive(Parser)]
#[command(name = "coldroom-calculator")]
#[command(version, about = "Refrigeration capacity calculator for cold rooms")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the cooling load and recommended unit capacity
    Calc {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Required internal temperature in °C
        #[arg(long, default_value = "5.0", allow_negative_numbers = true)]
        internal_temp: f64,

        /// Maximum external temperature in °C
        #[arg(long, default_value = "30.0", allow_negative_numbers = true)]
        external_temp: f64,

        /// Envelope panel type
        #[arg(long, value_enum, default_value_t = PanelType::Pur60)]
        panel: PanelType,

        /// Panel U-value in W/m²·K, overrides --panel
        #[arg(long)]
        u_value: Option<f64>,

        /// Air changes per hour (default: suggested from volume)
        #[arg(long)]
        air_changes: Option<f64>,

        /// Lighting power in kW (default: suggested from volume)
        #[arg(long)]
        lighting: Option<f64>,

        /// Other internal gains from people and goods in kW (default: suggested from volume)
        #[arg(long)]
        other: Option<f64>,
    },

    /// Show the suggested internal loads for a room
    Defaults {
        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// Convert a nominal pipe size in inches to mm, or list all sizes
    Pipe {
        /// Pipe size, e.g. '1/2"' or '1 1/8'
        size: Option<String>,
    },

    /// Show common refrigerants, or a single one by name
    Refrigerants {
        /// Refrigerant name, e.g. R290
        name: Option<String>,
    },

    /// List the available panel types and their U-values
    Panels,
}

#[derive(Args)]
struct GeometryArgs {
    /// Inner length in m
    #[arg(short, long, default_value = "3.0")]
    length: f64,

    /// Inner width in m
    #[arg(short, long, default_value = "3.0")]
    width: f64,

    /// Inner height in m
    #[arg(short = 'H', long, default_value = "2.5")]
    height: f64,
}

impl GeometryArgs {
    fn to_geometry(&self) -> error::Result<EnclosureGeometry> {
        EnclosureGeometry::new(self.length, self.width, self.height)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            geometry,
            internal_temp,
            external_temp,
            panel,
            u_value,
            air_changes,
            lighting,
            other,
        } => {
            let geometry = geometry.to_geometry()?;
            let conditions = ThermalConditions::new(internal_temp, external_temp)?;
            let insulation = match u_value {
                Some(u) => InsulationSpec::new(u)?,
                None => InsulationSpec::from(panel),
            };

            let suggested = advisor::suggest_defaults(geometry.volume());
            let loads = InternalLoads {
                air_changes_per_hour: air_changes.unwrap_or(suggested.air_changes_per_hour),
                lighting_kw: lighting.unwrap_or(suggested.lighting_kw),
                other_kw: other.unwrap_or(suggested.other_kw),
            };
            loads.validate()?;
            info!(?geometry, ?conditions, ?insulation, ?loads, "calculating cooling load");

            let report = calculator::build_report(ColdRoom {
                geometry,
                conditions,
                insulation,
                loads,
            });

            if cli.json {
                println!("{}", to_json(&report)?);
            } else {
                print!("{}", report);
            }
        }

        Commands::Defaults { geometry } => {
            let geometry = geometry.to_geometry()?;
            let volume_m3 = geometry.volume();
            let defaults = DefaultsOutput {
                volume_m3,
                envelope_area_m2: geometry.envelope_area(),
                loads: advisor::suggest_defaults(volume_m3),
            };

            if cli.json {
                println!("{}", to_json(&defaults)?);
            } else {
                println!("Volume:        {:.2} m³", defaults.volume_m3);
                println!("Envelope area: {:.1} m²", defaults.envelope_area_m2);
                println!(
                    "Suggested values: air changes {:.1} /h, lighting {:.2} kW, other {:.2} kW",
                    defaults.loads.air_changes_per_hour,
                    defaults.loads.lighting_kw,
                    defaults.loads.other_kw
                );
            }
        }

        Commands::Pipe { size: Some(size) } => {
            let diameter_mm = reference::pipe_diameter_mm(&size)
                .with_context(|| format!("cannot convert pipe size '{}'", size.trim()))?;
            if cli.json {
                println!(
                    "{}",
                    to_json(&PipeOutput {
                        size: size.trim(),
                        diameter_mm
                    })?
                );
            } else {
                println!("{} = {:.2} mm", size.trim(), diameter_mm);
            }
        }

        Commands::Pipe { size: None } => {
            if cli.json {
                let sizes: Vec<_> = reference::PIPE_SIZES
                    .iter()
                    .map(|&(size, diameter_mm)| PipeOutput { size, diameter_mm })
                    .collect();
                println!("{}", to_json(&sizes)?);
            } else {
                println!("{:<10} {:>10}", "Size", "Diameter (mm)");
                println!("{}", "-".repeat(24));
                for (size, mm) in reference::PIPE_SIZES {
                    println!("{:<10} {:>10.2}", size, mm);
                }
            }
        }

        Commands::Refrigerants { name } => {
            let refrigerants = match name {
                Some(name) => vec![reference::refrigerant(&name)?],
                None => reference::REFRIGERANTS.iter().collect(),
            };

            if cli.json {
                println!("{}", to_json(&refrigerants)?);
            } else {
                println!("{:<8} {:<24} {:>6}  {}", "Name", "Type", "GWP", "Note");
                println!("{}", "-".repeat(72));
                for r in refrigerants {
                    println!("{:<8} {:<24} {:>6}  {}", r.name, r.category, r.gwp, r.note);
                }
            }
        }

        Commands::Panels => {
            if cli.json {
                let panels: Vec<_> = PanelType::ALL
                    .iter()
                    .map(|&panel| PanelOutput {
                        panel,
                        description: panel.description(),
                        u_value: panel.u_value(),
                    })
                    .collect();
                println!("{}", to_json(&panels)?);
            } else {
                for panel in PanelType::ALL {
                    let marker = if panel == PanelType::default() { " (default)" } else { "" };
                    println!("{}{}", panel, marker);
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DefaultsOutput {
    volume_m3: f64,
    envelope_area_m2: f64,
    loads: InternalLoads,
}

#[derive(Serialize)]
struct PipeOutput<'a> {
    size: &'a str,
    diameter_mm: f64,
}

#[derive(Serialize)]
struct PanelOutput {
    panel: PanelType,
    description: &'static str,
    u_value: f64,
}

fn to_json<T: Serialize>(value: &T) -> error::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber installed earlier in the process wins; logging stays optional.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
