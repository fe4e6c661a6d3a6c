// Event log domain models
use super::key_state::{state_axis_lookup, UNRECOGNIZED_ORDINAL};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One state transition as reported by the reader.
///
/// Fields decode leniently: a missing or null field becomes `""`, any other
/// non-string value its JSON text. A bad record then plots at the sentinel
/// instead of failing the whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl LogEntry {
    /// Decode one element of the device's log array; never fails
    pub fn from_value(index: usize, value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!("Log entry at index {} is not an object: {}", index, e);
            Self::default()
        })
    }

    #[cfg(test)]
    pub fn new(state: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Two index-aligned sequences derived from the log, in device order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSeries {
    states: Vec<i32>,
    timestamps: Vec<String>,
}

impl StateSeries {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut states = Vec::with_capacity(entries.len());
        let mut timestamps = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let ordinal = state_axis_lookup(&entry.state);
            if ordinal == UNRECOGNIZED_ORDINAL {
                tracing::warn!(
                    "Unrecognized key state {:?} at index {} ({})",
                    entry.state,
                    index,
                    entry.timestamp
                );
            }
            states.push(ordinal);
            timestamps.push(entry.timestamp.clone());
        }

        Self { states, timestamps }
    }

    pub fn states(&self) -> &[i32] {
        &self.states
    }

    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of entries plotted at the sentinel ordinal
    pub fn unrecognized(&self) -> usize {
        self.states
            .iter()
            .filter(|&&s| s == UNRECOGNIZED_ORDINAL)
            .count()
    }
}
