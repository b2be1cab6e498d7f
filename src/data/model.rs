use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use super::DataError;

// ---------------------------------------------------------------------------
// Column names as they appear in the source files
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome, stored in files as the integer `class` column (1 / 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric value used as the scatter chart's y coordinate.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl TryFrom<i64> for Outcome {
    type Error = DataError;

    fn try_from(class: i64) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(DataError::InvalidOutcome(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    fn validate(&self, row: usize) -> Result<(), DataError> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DataError::InvalidPayload {
                row,
                value: self.payload_mass_kg,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed summaries.
///
/// Built once by the loader and never mutated afterwards; filters hand out
/// index lists into `records`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites, sorted.
    pub sites: BTreeSet<String>,
    /// Distinct booster version categories, sorted.
    pub booster_categories: BTreeSet<String>,
    /// Smallest payload mass in the table.
    pub payload_min: f64,
    /// Largest payload mass in the table.
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Validate the records and build the summaries.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        for (row, rec) in records.iter().enumerate() {
            rec.validate(row)?;
        }

        let sites = records.iter().map(|r| r.site.clone()).collect();
        let booster_categories = records.iter().map(|r| r.booster_category.clone()).collect();
        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn record(&self, idx: usize) -> Option<&LaunchRecord> {
        self.records.get(idx)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, mass: f64, class: i64, category: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome: Outcome::try_from(class).unwrap(),
            booster_category: category.to_string(),
            flight_number: None,
            booster_version: None,
        }
    }

    /// Small fixture shaped like the real launch table.
    pub(crate) fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 525.0, 0, "v1.0"),
            record("CCAFS LC-40", 2296.0, 1, "v1.1"),
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
            record("VAFB SLC-4E", 9600.0, 1, "FT"),
            record("KSC LC-39A", 2490.0, 1, "FT"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("KSC LC-39A", 6070.0, 0, "B4"),
            record("KSC LC-39A", 2490.0, 1, "B5"),
            record("CCAFS SLC-40", 3600.0, 1, "B4"),
            record("CCAFS SLC-40", 4400.0, 0, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn summaries_cover_all_records() {
        let ds = sample_dataset();
        assert_eq!(ds.len(), 11);
        assert_eq!(ds.payload_min, 0.0);
        assert_eq!(ds.payload_max, 9600.0);
        assert_eq!(ds.sites.len(), 4);
        assert_eq!(
            ds.booster_categories.iter().cloned().collect::<Vec<_>>(),
            vec!["B4", "B5", "FT", "v1.0", "v1.1"]
        );
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            LaunchDataset::from_records(Vec::new()),
            Err(DataError::Empty)
        ));
    }

    #[test]
    fn rejects_negative_payload() {
        let err = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 100.0, 1, "FT"),
            record("KSC LC-39A", -1.0, 1, "FT"),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidPayload { row: 1, .. }));
    }

    #[test]
    fn outcome_from_class() {
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert!(matches!(
            Outcome::try_from(2),
            Err(DataError::InvalidOutcome(2))
        ));
        assert_eq!(Outcome::Success.as_f64(), 1.0);
    }
}
