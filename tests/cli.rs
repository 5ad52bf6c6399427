use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("coldroom-calculator");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn calc_reference_room_with_defaults() {
    cli()
        .arg("calc")
        .assert()
        .success()
        .stdout(contains("Volume:        22.50 m³"))
        .stdout(contains("Envelope area: 48.0 m²"))
        .stdout(contains("Air changes:   1.8 /h, lighting 0.10 kW, other 0.33 kW"))
        .stdout(contains("Total cooling load:   1.19 kW"))
        .stdout(contains("Recommended capacity: 1.55 kW"));
}

#[test]
fn calc_accepts_overrides_and_u_value() {
    cli()
        .args([
            "calc",
            "--length",
            "4",
            "--width",
            "5",
            "-H",
            "2",
            "--internal-temp",
            "-18",
            "--external-temp",
            "32",
            "--u-value",
            "0.2",
            "--air-changes",
            "0",
            "--lighting",
            "0",
            "--other",
            "1",
        ])
        .assert()
        .success()
        // 0.2 W/m²K * 76 m² * 50 K = 0.76 kW, plus 1 kW internal
        .stdout(contains("Total cooling load:   1.76 kW"))
        .stdout(contains("Panel U-value: 0.20 W/m²·K"));
}

#[test]
fn calc_json_output() {
    let output = cli()
        .args(["--json", "calc", "--panel", "pur100"])
        .output()
        .expect("run calc");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["room"]["insulation"]["u_value"], 0.2);
    let breakdown = &report["breakdown"];
    let sum = breakdown["transmission_kw"].as_f64().unwrap()
        + breakdown["infiltration_kw"].as_f64().unwrap()
        + breakdown["internal_kw"].as_f64().unwrap();
    assert!((breakdown["total_kw"].as_f64().unwrap() - sum).abs() < 1e-12);
}

#[test]
fn calc_warm_room_needs_no_cooling() {
    cli()
        .args([
            "calc",
            "--internal-temp",
            "30",
            "--external-temp",
            "5",
            "--lighting",
            "0",
            "--other",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("No cooling load required"));
}

#[test]
fn calc_rejects_zero_dimension() {
    cli()
        .args(["calc", "--length", "0"])
        .assert()
        .failure()
        .stderr(contains("invalid length"));
}

#[test]
fn calc_rejects_room_under_one_metre() {
    cli()
        .args(["calc", "--length", "0.5"])
        .assert()
        .failure()
        .stderr(contains("invalid length: 0.5 (must be at least 1 m)"));
}

#[test]
fn defaults_round_exact_ties_to_even() {
    // 4 x 4 x 2 m gives 40 / 32 = 1.25 air changes
    cli()
        .args(["defaults", "--length", "4", "--width", "4", "-H", "2"])
        .assert()
        .success()
        .stdout(contains("air changes 1.2 /h, lighting 0.11 kW, other 0.42 kW"));
}

#[test]
fn calc_rejects_negative_load() {
    cli()
        .args(["calc", "--lighting=-0.5"])
        .assert()
        .failure()
        .stderr(contains("invalid lighting power"));
}

#[test]
fn defaults_for_large_room_clamp_air_changes() {
    cli()
        .args(["defaults", "--length", "10", "--width", "10", "-H", "4"])
        .assert()
        .success()
        .stdout(contains("Volume:        400.00 m³"))
        .stdout(contains("air changes 1.0 /h, lighting 0.85 kW, other 4.10 kW"));
}

#[test]
fn pipe_converts_half_inch() {
    cli()
        .args(["pipe", "1/2\""])
        .assert()
        .success()
        .stdout(contains("1/2\" = 12.70 mm"));
}

#[test]
fn pipe_lists_all_sizes() {
    cli()
        .arg("pipe")
        .assert()
        .success()
        .stdout(contains("1/4\"").and(contains("28.58")));
}

#[test]
fn pipe_unknown_size_fails() {
    cli()
        .args(["pipe", "5/7"])
        .assert()
        .failure()
        .stderr(contains("unknown pipe size"));
}

#[test]
fn refrigerant_r290() {
    cli()
        .args(["refrigerants", "R290"])
        .assert()
        .success()
        .stdout(contains("HC (natural)"))
        .stdout(contains("Propane"));
}

#[test]
fn refrigerant_gwp_survives_json() {
    let output = cli()
        .args(["--json", "refrigerants"])
        .output()
        .expect("run refrigerants");
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let gwps: Vec<u64> = table
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["gwp"].as_u64().unwrap())
        .collect();
    assert_eq!(gwps, [2088, 675, 3922, 1430, 3]);
}

#[test]
fn unknown_refrigerant_fails() {
    cli()
        .args(["refrigerants", "R999"])
        .assert()
        .failure()
        .stderr(contains("unknown refrigerant: R999"));
}

#[test]
fn panels_mark_default() {
    cli()
        .arg("panels")
        .assert()
        .success()
        .stdout(contains("PUR 60 mm (U=0.35) (default)"))
        .stdout(contains("PUR 100 mm (U=0.20)"));
}
