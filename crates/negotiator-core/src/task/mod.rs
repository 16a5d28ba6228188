//! Task records and energy levels.
//!
//! A [`Task`] is the unit of extraction: a concise name, a minute estimate,
//! and the energy it demands. Records come out of a language model, so
//! decoding is best-effort -- anything that does not satisfy the record
//! invariant is dropped, never surfaced as an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Energy a task demands, as labeled by the extraction model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskEnergy {
    /// Light work (errands, quick messages)
    Low,
    /// Ordinary focused work
    Neutral,
    /// Deep or demanding work
    High,
}

impl TaskEnergy {
    /// Parse a model-produced label, case-insensitively.
    ///
    /// Returns `None` for anything outside {Low, Neutral, High}; the record
    /// carrying it is dropped.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("low") {
            Some(TaskEnergy::Low)
        } else if label.eq_ignore_ascii_case("neutral") {
            Some(TaskEnergy::Neutral)
        } else if label.eq_ignore_ascii_case("high") {
            Some(TaskEnergy::High)
        } else {
            None
        }
    }

    /// Get display name.
    pub fn name(&self) -> &str {
        match self {
            TaskEnergy::Low => "low",
            TaskEnergy::Neutral => "neutral",
            TaskEnergy::High => "high",
        }
    }
}

impl fmt::Display for TaskEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The user's current capacity for effortful work.
///
/// Ordered from depleted to sharp; the derived `Ord` follows declaration
/// order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum UserEnergy {
    Resting,
    Low,
    Neutral,
    High,
    Peak,
}

impl UserEnergy {
    /// Get display name.
    pub fn name(&self) -> &str {
        match self {
            UserEnergy::Resting => "resting",
            UserEnergy::Low => "low",
            UserEnergy::Neutral => "neutral",
            UserEnergy::High => "high",
            UserEnergy::Peak => "peak",
        }
    }
}

impl fmt::Display for UserEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UserEnergy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "resting" => Ok(UserEnergy::Resting),
            "low" => Ok(UserEnergy::Low),
            "neutral" => Ok(UserEnergy::Neutral),
            "high" => Ok(UserEnergy::High),
            "peak" => Ok(UserEnergy::Peak),
            _ => Err(format!(
                "invalid energy level: '{s}'. Use resting/low/neutral/high/peak"
            )),
        }
    }
}

/// One extracted task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Concise human-readable label
    pub name: String,
    /// Estimated minutes to complete (always positive)
    pub duration_min: u32,
    /// Energy the task demands
    pub energy: TaskEnergy,
}

impl Task {
    /// Decode one record from the model's wire format, best-effort.
    ///
    /// The wire keys are `task`, `time_min`, `energy` (our own field names
    /// are accepted as aliases). A missing field, an empty name, a
    /// non-positive or fractional minute estimate, or an unknown energy
    /// label all yield `None` -- the record is silently excluded and the
    /// rest of the list survives.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        let name = record
            .get("task")
            .or_else(|| record.get("name"))?
            .as_str()?
            .trim();
        if name.is_empty() {
            return None;
        }

        let minutes = record.get("time_min").or_else(|| record.get("duration_min"))?;
        let minutes = integral_minutes(minutes)?;
        if minutes == 0 || minutes > u64::from(u32::MAX) {
            return None;
        }

        let energy = TaskEnergy::from_label(record.get("energy")?.as_str()?)?;

        Some(Task {
            name: name.to_string(),
            duration_min: minutes as u32,
            energy,
        })
    }
}

/// Accept `25` and `25.0` but not `25.5` -- models are loose about number
/// formatting.
fn integral_minutes(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0)
        .map(|f| f as u64)
}
