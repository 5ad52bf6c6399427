//! Reference tables: copper pipe sizes and common refrigerants
//!
//! Both tables are compiled in and never change at runtime. Lookup indices
//! are built on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Nominal pipe size (inches) to external diameter in mm, in display order
pub const PIPE_SIZES: &[(&str, f64)] = &[
    ("1/4\"", 6.35),
    ("3/8\"", 9.52),
    ("1/2\"", 12.7),
    ("5/8\"", 15.88),
    ("3/4\"", 19.05),
    ("7/8\"", 22.22),
    ("1 1/8\"", 28.58),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Refrigerant {
    pub name: &'static str,
    pub category: &'static str,
    pub gwp: u32,
    pub note: &'static str,
}

pub const REFRIGERANTS: &[Refrigerant] = &[
    Refrigerant {
        name: "R410A",
        category: "HFC (blend)",
        gwp: 2088,
        note: "High pressure, being replaced by R32.",
    },
    Refrigerant {
        name: "R32",
        category: "HFC (single component)",
        gwp: 675,
        note: "Low GWP, used in new split systems.",
    },
    Refrigerant {
        name: "R404A",
        category: "HFC (blend)",
        gwp: 3922,
        note: "Being phased out because of its high GWP.",
    },
    Refrigerant {
        name: "R134a",
        category: "HFC (single component)",
        gwp: 1430,
        note: "Automotive air conditioning, refrigeration equipment.",
    },
    Refrigerant {
        name: "R290",
        category: "HC (natural)",
        gwp: 3,
        note: "Propane. Extremely low GWP, requires safety measures.",
    },
];

static PIPE_INDEX: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| PIPE_SIZES.iter().copied().collect());

// Keyed by upper-cased name so lookups ignore case.
static REFRIGERANT_INDEX: Lazy<HashMap<String, &'static Refrigerant>> = Lazy::new(|| {
    REFRIGERANTS
        .iter()
        .map(|r| (r.name.to_ascii_uppercase(), r))
        .collect()
});

// Whole and/or fractional inches, optionally followed by an inch mark or unit.
static PIPE_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:(\d+)\s+)?(\d+)(?:/(\d+))?\s*(?:"|''|in|inch|inches)?$"#)
        .expect("pipe label pattern is valid")
});

const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

/// External diameter in mm for a nominal pipe size such as `1/2"`.
///
/// Accepts the table label as well as `1/2`, `1/2in` or `1 1/8 inch`.
pub fn pipe_diameter_mm(label: &str) -> Result<f64> {
    let trimmed = label.trim();
    if let Some(&mm) = PIPE_INDEX.get(trimmed) {
        return Ok(mm);
    }

    normalize_pipe_label(trimmed)
        .and_then(|canonical| PIPE_INDEX.get(canonical.as_str()).copied())
        .ok_or_else(|| Error::UnknownPipeSize {
            label: trimmed.to_string(),
            suggestions: suggest(trimmed, PIPE_SIZES.iter().map(|(label, _)| *label)),
        })
}

/// Rewrite a loosely written inch size into the table's label form.
fn normalize_pipe_label(label: &str) -> Option<String> {
    let lower = label.to_ascii_lowercase();
    let caps = PIPE_LABEL_RE.captures(&lower)?;
    let size = match (caps.get(1), caps.get(3)) {
        (Some(whole), Some(den)) => format!("{} {}/{}", whole.as_str(), &caps[2], den.as_str()),
        (None, Some(den)) => format!("{}/{}", &caps[2], den.as_str()),
        (None, None) => caps[2].to_string(),
        (Some(_), None) => return None,
    };
    Some(format!("{size}\""))
}

/// Look up a refrigerant by name, ignoring case.
pub fn refrigerant(name: &str) -> Result<&'static Refrigerant> {
    let trimmed = name.trim();
    REFRIGERANT_INDEX
        .get(&trimmed.to_ascii_uppercase())
        .copied()
        .ok_or_else(|| Error::UnknownRefrigerant {
            name: trimmed.to_string(),
            suggestions: suggest(trimmed, REFRIGERANTS.iter().map(|r| r.name)),
        })
}

fn suggest<'a>(query: &str, candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    let query = query.to_ascii_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            let score = strsim::jaro_winkler(&query, &candidate.to_ascii_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
