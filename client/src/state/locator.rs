//! Distributor locator state: the full directory plus the region tab and
//! search box. Filtering runs locally on every keystroke.

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;

use catalog::distributor::{self, Distributor, DistributorQuery, Region, RegionCounts};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocatorState {
    directory: Vec<Distributor>,
    counts: RegionCounts,
    pub query: DistributorQuery,
}

impl LocatorState {
    #[must_use]
    pub fn new(directory: Vec<Distributor>) -> Self {
        let counts = distributor::region_counts(&directory);
        Self { directory, counts, query: DistributorQuery::default() }
    }

    pub fn set_region(&mut self, region: Option<Region>) {
        self.query.region = region;
    }

    pub fn set_search(&mut self, text: &str) {
        text.clone_into(&mut self.query.search);
    }

    pub fn reset(&mut self) {
        self.query = DistributorQuery::default();
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Distributor> {
        distributor::search(&self.directory, &self.query)
    }

    /// Tab caption with its count, e.g. `"Europe (1)"`.
    #[must_use]
    pub fn tab_label(&self, region: Option<Region>) -> String {
        let name = region.map_or("All Regions", Region::label);
        format!("{name} ({})", self.counts.get(region))
    }

    #[must_use]
    pub fn result_label(&self) -> String {
        distributor::result_label(self.visible().len())
    }

    #[must_use]
    pub fn has_directory(&self) -> bool {
        !self.directory.is_empty()
    }
}
