use serde::Deserialize;
use serde_json::Value;

use crate::error::RecordError;

/// Milestones reached by one trial: `targets[i]` was hit at `hitting_times[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialRecord {
    pub hitting_times: Vec<u64>,
    pub targets: Vec<u64>,
}

// Fields as they appear on disk; the experiment driver quotes every number.
#[derive(Deserialize)]
struct RawRecord {
    hitting_times: Vec<Value>,
    targets: Vec<Value>,
}

impl TrialRecord {
    pub fn new(hitting_times: Vec<u64>, targets: Vec<u64>) -> Result<Self, RecordError> {
        if hitting_times.len() != targets.len() {
            return Err(RecordError::LengthMismatch {
                hitting_times: hitting_times.len(),
                targets: targets.len(),
            });
        }
        Ok(Self { hitting_times, targets })
    }

    /// Parse a trial record from JSON text.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let raw: RawRecord = serde_json::from_str(json)?;
        let hitting_times = raw.hitting_times.iter().map(coerce_integer).collect::<Result<Vec<_>, _>>()?;
        let targets = raw.targets.iter().map(coerce_integer).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(hitting_times, targets)?)
    }

    /// Both sequences sorted ascending, each on its own.
    pub fn sorted(&self) -> (Vec<u64>, Vec<u64>) {
        let mut hitting_times = self.hitting_times.clone();
        let mut targets = self.targets.clone();
        hitting_times.sort_unstable();
        targets.sort_unstable();
        (hitting_times, targets)
    }
}

/// Accept `12`, `12.0` and `"12"` alike.
pub fn coerce_integer(value: &Value) -> Result<u64, RecordError> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                    Ok(f as u64)
                }
                _ => Err(RecordError::NotAnInteger(value.to_string())),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordError::NotAnInteger(value.to_string())),
        _ => Err(RecordError::NotAnInteger(value.to_string())),
    }
}
