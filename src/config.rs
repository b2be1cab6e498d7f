use std::path::PathBuf;

use eframe::egui::Color32;

use crate::data::filter::ALL_SITES;

/// Data file read at start-up, relative to the working directory.
pub const DATA_FILE: &str = "spacex_launch_dash.csv";

pub const TITLE: &str = "SpaceX Launch Records Dashboard";
pub const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);
pub const TITLE_SIZE: f32 = 40.0;

/// One dropdown entry: label shown, value passed to the recompute functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    fn new(label: &str, value: &str) -> Self {
        SiteOption {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Static layout parameters for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub site_options: Vec<SiteOption>,
    pub site_placeholder: String,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    pub slider_marks: Vec<f64>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            site_options: vec![
                SiteOption::new("All Sites", ALL_SITES),
                SiteOption::new("CCAFS LC-40", "CCAFS LC-40"),
                SiteOption::new("CCAFS SLC-40", "CCAFS SLC-40"),
                SiteOption::new("KSC LC-39A", "KSC LC-39A"),
                SiteOption::new("VAFB SLC-4E", "VAFB SLC-4E"),
            ],
            site_placeholder: "Select a Launch Site here".to_string(),
            slider_min: 0.0,
            slider_max: 10_000.0,
            slider_step: 1_000.0,
            slider_marks: vec![0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0],
            window_size: [1000.0, 1000.0],
            min_window_size: [600.0, 500.0],
        }
    }
}

impl DashboardConfig {
    /// Dropdown label for a selection value, if it is one of the options.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.site_options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Options whose label contains `query`, ignoring case.
    pub fn search_options(&self, query: &str) -> Vec<&SiteOption> {
        let needle = query.trim().to_lowercase();
        self.site_options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.site_options.len(), 5);
        assert_eq!(cfg.site_options[0].value, ALL_SITES);
        assert_eq!(cfg.label_for(ALL_SITES), Some("All Sites"));
        assert_eq!(cfg.label_for("Cape Canaveral"), None);
        assert_eq!((cfg.slider_min, cfg.slider_max, cfg.slider_step), (0.0, 10_000.0, 1_000.0));
    }

    #[test]
    fn search_is_case_insensitive() {
        let cfg = DashboardConfig::default();
        let hits: Vec<&str> = cfg
            .search_options("ccafs")
            .into_iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(hits, vec!["CCAFS LC-40", "CCAFS SLC-40"]);
        assert_eq!(cfg.search_options("  ").len(), 5);
        assert!(cfg.search_options("boca").is_empty());
    }
}
