//! Encoding of the persisted history list.

use super::error::StoreError;
use crate::core::History;
use serde::{Deserialize, Serialize};

/// Wire format for the stored history entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEncoding {
    /// Human-readable JSON array
    #[default]
    Json,
    /// Compact bincode
    Binary,
}

impl HistoryEncoding {
    pub fn encode(&self, history: &History) -> Result<Vec<u8>, StoreError> {
        match self {
            Self::Json => serde_json::to_vec(history)
                .map_err(|e| StoreError::SerializationFailed(e.to_string())),
            Self::Binary => bincode::serialize(history)
                .map_err(|e| StoreError::SerializationFailed(e.to_string())),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<History, StoreError> {
        match self {
            Self::Json => serde_json::from_slice(bytes)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
            Self::Binary => bincode::deserialize(bytes)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Computation, HistoryItem};
    use chrono::Utc;

    fn sample() -> History {
        History::new()
            .record(HistoryItem::new(
                Computation {
                    expression: "1 + 2".to_string(),
                    result: "3".to_string(),
                },
                Utc::now(),
            ))
            .record(HistoryItem::new(
                Computation {
                    expression: "9 ÷ 0".to_string(),
                    result: "9".to_string(),
                },
                Utc::now(),
            ))
    }

    #[test]
    fn both_encodings_preserve_items() {
        let history = sample();
        for encoding in [HistoryEncoding::Json, HistoryEncoding::Binary] {
            let bytes = encoding.encode(&history).unwrap();
            assert_eq!(encoding.decode(&bytes).unwrap(), history);
        }
    }

    #[test]
    fn json_is_an_array_of_records() {
        let bytes = HistoryEncoding::Json.encode(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["expression"], "9 ÷ 0");
        assert_eq!(first["result"], "9");
        assert!(first["id"].is_string());
        assert!(first["timestamp"].is_string());
    }

    #[test]
    fn garbage_fails_to_decode() {
        for encoding in [HistoryEncoding::Json, HistoryEncoding::Binary] {
            let err = encoding.decode(b"\xff\xfe not history").unwrap_err();
            assert!(matches!(err, StoreError::DeserializationFailed(_)));
        }
    }

    #[test]
    fn encoding_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&HistoryEncoding::Binary).unwrap(),
            "\"binary\""
        );
    }
}
