//! Renderer-independent chart descriptions, rebuilt on every selection change.

use std::collections::BTreeMap;

use super::filter::{payload_indices, site_indices, PayloadRange, SiteSelection};
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Proportion view (pie chart)
// ---------------------------------------------------------------------------

/// What a pie slice stands for; decides its colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKind {
    /// One launch site, when every site is selected.
    Site(String),
    /// Success or failure count of a single site.
    Outcome(Outcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProportionUnit {
    pub label: String,
    pub kind: UnitKind,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProportionView {
    pub title: String,
    pub units: Vec<ProportionUnit>,
}

impl ProportionView {
    pub fn total(&self) -> usize {
        self.units.iter().map(|u| u.value).sum()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of unit `idx` in `[0, 1]`; zero for an empty view.
    pub fn fraction(&self, idx: usize) -> f64 {
        let total = self.total();
        match self.units.get(idx) {
            Some(unit) if total > 0 => unit.value as f64 / total as f64,
            _ => 0.0,
        }
    }
}

/// Successful launches per site (`All`) or success vs. failure for one site.
pub fn proportion_view(dataset: &LaunchDataset, site: &SiteSelection) -> ProportionView {
    match site {
        SiteSelection::All => {
            let mut per_site: BTreeMap<&str, usize> =
                dataset.sites.iter().map(|s| (s.as_str(), 0)).collect();
            for rec in dataset.records() {
                if rec.outcome.is_success() {
                    *per_site.entry(rec.site.as_str()).or_default() += 1;
                }
            }
            ProportionView {
                title: "Total Successful Launches By Site".to_string(),
                units: per_site
                    .into_iter()
                    .map(|(name, value)| ProportionUnit {
                        label: name.to_string(),
                        kind: UnitKind::Site(name.to_string()),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(name) => {
            let indices = site_indices(dataset, site);
            let successes = indices
                .iter()
                .filter(|&&i| dataset.records()[i].outcome.is_success())
                .count();
            let failures = indices.len() - successes;
            let unit = |outcome: Outcome, value| ProportionUnit {
                label: outcome.to_string(),
                kind: UnitKind::Outcome(outcome),
                value,
            };
            ProportionView {
                title: format!("Total Successful Launches for site {name}"),
                units: vec![
                    unit(Outcome::Success, successes),
                    unit(Outcome::Failure, failures),
                ],
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Correlation view (scatter chart)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationView {
    pub title: String,
    /// Rows behind the chart, in dataset order.
    pub indices: Vec<usize>,
    /// Booster category → `[payload kg, outcome]` points.
    pub series: BTreeMap<String, Vec<[f64; 2]>>,
}

impl CorrelationView {
    pub fn point_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Payload mass against outcome for the selected site and payload range.
pub fn correlation_view(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> CorrelationView {
    let indices = payload_indices(dataset, site, range);

    let mut series: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for &i in &indices {
        let rec = &dataset.records()[i];
        series
            .entry(rec.booster_category.clone())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_f64()]);
    }

    CorrelationView {
        title: format!("Correlation between Payload and Success for {site}"),
        indices,
        series,
    }
}
