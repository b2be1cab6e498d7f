use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::data::view::{correlation_view, proportion_view, CorrelationView, ProportionView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Widgets never touch the cached views directly: they go through
/// [`AppState::select_site`] and [`AppState::set_payload_range`], which
/// recompute exactly the views that depend on the changed input.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded once at start-up, read-only afterwards.
    pub dataset: LaunchDataset,

    /// Current dropdown selection.
    pub site: SiteSelection,

    /// Current range-slider value.
    pub payload_range: PayloadRange,

    /// Pie chart for the current site (cached).
    pub proportion: ProportionView,

    /// Scatter chart for the current site and range (cached).
    pub correlation: CorrelationView,

    /// Colours for launch-site slices.
    pub site_colors: ColorMap,

    /// Colours for booster version categories.
    pub booster_colors: ColorMap,

    /// Text typed into the dropdown's search field.
    pub site_query: String,

    /// Whether the records table below the scatter chart is expanded.
    pub show_records: bool,
}

impl AppState {
    /// Seed the selection from the data: every site, full payload span.
    pub fn new(dataset: LaunchDataset, config: DashboardConfig) -> Self {
        let site = SiteSelection::All;
        let payload_range = PayloadRange::new(dataset.payload_min, dataset.payload_max);
        let proportion = proportion_view(&dataset, &site);
        let correlation = correlation_view(&dataset, &site, payload_range);
        let site_colors = ColorMap::new(&dataset.sites);
        let booster_colors = ColorMap::new(&dataset.booster_categories);

        Self {
            config,
            dataset,
            site,
            payload_range,
            proportion,
            correlation,
            site_colors,
            booster_colors,
            site_query: String::new(),
            show_records: false,
        }
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn select_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("site selection -> {}", site.value());
        self.site = site;
        self.recompute_proportion();
        self.recompute_correlation();
    }

    /// Slider changed: only the scatter chart depends on the range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        log::debug!("payload range -> [{}, {}]", range.low(), range.high());
        self.payload_range = range;
        self.recompute_correlation();
    }

    /// Label shown in the closed dropdown.
    pub fn site_label(&self) -> &str {
        self.config
            .label_for(self.site.value())
            .unwrap_or(self.site.value())
    }

    fn recompute_proportion(&mut self) {
        self.proportion = proportion_view(&self.dataset, &self.site);
        log::debug!(
            "proportion view: {} units, total {}",
            self.proportion.units.len(),
            self.proportion.total()
        );
    }

    fn recompute_correlation(&mut self) {
        self.correlation = correlation_view(&self.dataset, &self.site, self.payload_range);
        log::debug!("correlation view: {} points", self.correlation.point_count());
    }
}
