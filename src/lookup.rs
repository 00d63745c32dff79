//! Simulated train status table
//!
//! The table is built once at startup and shared read-only with the HTTP
//! handlers. Keys are 5-digit train numbers; lookups trim surrounding
//! whitespace and otherwise match exactly.

#[cfg(test)]
mod proptests;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the tool exposed at `/tool/get_train_status`
pub const GET_TRAIN_STATUS: &str = "get_train_status";

/// Status record for a single train
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub train_number: String,
    pub name: String,
    pub status: String,
}

impl TrainRecord {
    pub fn new(
        train_number: impl Into<String>,
        name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            train_number: train_number.into(),
            name: name.into(),
            status: status.into(),
        }
    }
}

const SEED: &[(&str, &str, &str)] = &[
    (
        "12301",
        "Howrah Rajdhani Express",
        "Running late by 30 minutes, expected arrival at Delhi at 10:30 AM.",
    ),
    (
        "12137",
        "Punjab Mail",
        "On time, currently at Itarsi Junction.",
    ),
    (
        "12834",
        "Howrah Hapa Express",
        "Cancelled due to operational reasons.",
    ),
    (
        "12001",
        "Bhopal Shatabdi",
        "Departed Bhopal on time, currently near Agra.",
    ),
    (
        "12627",
        "Karnataka Express",
        "Running 1 hour late, expected arrival at Bangalore at 07:00 PM.",
    ),
    (
        "12951",
        "Mumbai Rajdhani Express",
        "Running on time, currently near Vadodara.",
    ),
    (
        "11013",
        "Coimbatore Express",
        "Expected to arrive at 11:45 PM, 15 minutes late.",
    ),
];

/// Read-only mapping from train number to status record
#[derive(Debug, Clone)]
pub struct LookupTable {
    records: HashMap<String, TrainRecord>,
}

impl LookupTable {
    /// The built-in table of simulated Indian Railways trains
    pub fn seeded() -> Self {
        Self::from_records(
            SEED.iter()
                .map(|(number, name, status)| TrainRecord::new(*number, *name, *status)),
        )
    }

    pub fn from_records(records: impl IntoIterator<Item = TrainRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.train_number.clone(), record))
                .collect(),
        }
    }

    /// Look up a train, ignoring surrounding whitespace in the number
    pub fn get(&self, train_number: &str) -> Option<&TrainRecord> {
        self.records.get(train_number.trim())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in no particular order
    pub fn records(&self) -> impl Iterator<Item = &TrainRecord> {
        self.records.values()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_table_contents() {
        let table = LookupTable::seeded();
        assert_eq!(table.len(), 7);

        let record = table.get("12301").unwrap();
        assert_eq!(record.name, "Howrah Rajdhani Express");
        assert_eq!(
            record.status,
            "Running late by 30 minutes, expected arrival at Delhi at 10:30 AM."
        );

        assert_eq!(table.get("12834").unwrap().name, "Howrah Hapa Express");
        assert_eq!(table.get("11013").unwrap().name, "Coimbatore Express");
    }

    #[test]
    fn test_seeded_keys_are_five_digits() {
        let table = LookupTable::seeded();
        for record in table.records() {
            assert_eq!(record.train_number.len(), 5, "{}", record.train_number);
            assert!(record.train_number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let table = LookupTable::seeded();
        assert_eq!(table.get(" 12301 "), table.get("12301"));
        assert_eq!(table.get("\t12137\n").unwrap().name, "Punjab Mail");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = LookupTable::seeded();
        assert!(table.get("1230").is_none());
        assert!(table.get("012301").is_none());
        assert!(table.get("12 301").is_none());
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_from_records() {
        let table = LookupTable::from_records([TrainRecord::new("00001", "Test Local", "On time")]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.get("00001").unwrap().status, "On time");
        assert!(LookupTable::from_records([]).is_empty());
    }
}
