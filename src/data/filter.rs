use std::fmt;

use super::model::LaunchDataset;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Which launch site the dropdown currently selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a dropdown value; [`ALL_SITES`] selects everything.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(s) => s,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "all Sites"),
            SiteSelection::Site(s) => write!(f, "site {s}"),
        }
    }
}

/// Closed payload-mass interval `[low, high]` in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the ends if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

// ---------------------------------------------------------------------------
// Row filters
// ---------------------------------------------------------------------------

/// Return indices of records launched from the selected site.
///
/// `All` keeps every row; a site not present in the data keeps none.
pub fn site_indices(dataset: &LaunchDataset, site: &SiteSelection) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
}

/// Return indices of records from the selected site whose payload mass lies
/// inside `range`.
pub fn payload_indices(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(&rec.site) && range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_dataset;

    #[test]
    fn all_keeps_every_row() {
        let ds = sample_dataset();
        assert_eq!(site_indices(&ds, &SiteSelection::All), (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn site_keeps_only_that_site() {
        let ds = sample_dataset();
        let sel = SiteSelection::from_value("KSC LC-39A");
        let idx = site_indices(&ds, &sel);
        assert_eq!(idx.len(), 4);
        assert!(idx.iter().all(|&i| ds.records()[i].site == "KSC LC-39A"));
    }

    #[test]
    fn unknown_site_is_empty_not_error() {
        let ds = sample_dataset();
        let sel = SiteSelection::from_value("Boca Chica");
        assert!(site_indices(&ds, &sel).is_empty());
        assert!(payload_indices(&ds, &sel, PayloadRange::new(0.0, 10_000.0)).is_empty());
    }

    #[test]
    fn range_is_inclusive() {
        let ds = sample_dataset();
        let idx = payload_indices(&ds, &SiteSelection::All, PayloadRange::new(500.0, 2490.0));
        let masses: Vec<f64> = idx.iter().map(|&i| ds.records()[i].payload_mass_kg).collect();
        assert_eq!(masses, vec![525.0, 2296.0, 500.0, 2490.0, 2490.0]);
    }

    #[test]
    fn degenerate_range_matches_exact_mass() {
        let ds = sample_dataset();
        let idx = payload_indices(&ds, &SiteSelection::All, PayloadRange::new(2490.0, 2490.0));
        assert_eq!(idx, vec![5, 8]);
    }

    #[test]
    fn range_filter_is_exact_subset() {
        let ds = sample_dataset();
        let range = PayloadRange::new(1000.0, 6000.0);
        let idx = payload_indices(&ds, &SiteSelection::All, range);
        let expected: Vec<usize> = (0..ds.len())
            .filter(|&i| range.contains(ds.records()[i].payload_mass_kg))
            .collect();
        assert_eq!(idx, expected);
    }

    #[test]
    fn site_and_range_combine() {
        let ds = sample_dataset();
        let sel = SiteSelection::from_value("KSC LC-39A");
        let idx = payload_indices(&ds, &sel, PayloadRange::new(0.0, 10_000.0));
        assert_eq!(idx, vec![5, 6, 7, 8]);
        let idx = payload_indices(&ds, &sel, PayloadRange::new(3000.0, 6000.0));
        assert_eq!(idx, vec![6]);
    }

    #[test]
    fn reversed_range_is_normalised() {
        let r = PayloadRange::new(7000.0, 2000.0);
        assert_eq!((r.low(), r.high()), (2000.0, 7000.0));
    }

    #[test]
    fn selection_round_trips_dropdown_value() {
        assert_eq!(SiteSelection::from_value(ALL_SITES), SiteSelection::All);
        assert_eq!(SiteSelection::All.value(), ALL_SITES);
        assert_eq!(SiteSelection::from_value("VAFB SLC-4E").to_string(), "site VAFB SLC-4E");
    }
}
