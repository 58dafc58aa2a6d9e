//! Region / sub-region cascade for delivery addresses.
//!
//! A region (wilaya) owns an ordered list of sub-regions (communes). The
//! sub-region selector only offers children of the selected region, so
//! changing the region always clears the chosen sub-region in the same step
//! that repopulates the options.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crocco_core::{RegionId, SubRegionId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{DataFormat, Result, StorefrontError};

/// A top-level delivery region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

/// A sub-region belonging to exactly one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRegion {
    pub id: SubRegionId,
    pub name: String,
    pub parent_region_id: RegionId,
}

/// Rejected sub-region selections. The current selection is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selector is disabled until a region is chosen.
    #[error("Select a region before choosing a sub-region")]
    NoRegionSelected,

    /// The sub-region is not one of the selected region's options.
    #[error("Sub-region {subregion} does not belong to region {region}")]
    UnknownSubRegion {
        region: RegionId,
        subregion: SubRegionId,
    },
}

/// Static lookup table from regions to their sub-regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTable {
    regions: Vec<Region>,
    #[serde(default)]
    subregions: Vec<SubRegion>,
}

impl RegionTable {
    /// Build a table, checking ids are unique and every parent exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError`] describing the first inconsistency found.
    pub fn new(regions: Vec<Region>, subregions: Vec<SubRegion>) -> Result<Self> {
        let mut region_ids = HashSet::with_capacity(regions.len());
        for region in &regions {
            if !region_ids.insert(region.id) {
                return Err(StorefrontError::DuplicateRegion(region.id));
            }
        }

        let mut subregion_ids = HashSet::with_capacity(subregions.len());
        for subregion in &subregions {
            if !subregion_ids.insert(subregion.id) {
                return Err(StorefrontError::DuplicateSubRegion(subregion.id));
            }
            if !region_ids.contains(&subregion.parent_region_id) {
                return Err(StorefrontError::OrphanSubRegion {
                    subregion: subregion.id,
                    region: subregion.parent_region_id,
                });
            }
        }

        Ok(Self {
            regions,
            subregions,
        })
    }

    pub(crate) const fn from_trusted(regions: Vec<Region>, subregions: Vec<SubRegion>) -> Self {
        Self {
            regions,
            subregions,
        }
    }

    /// Parse a table from JSON of the form `{"regions": [...], "subregions": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the table is inconsistent.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.regions, raw.subregions)
    }

    /// Load a table from a `.json`, `.yaml`, or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or is inconsistent.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: Self = DataFormat::read(path)?;
        let table = Self::new(raw.regions, raw.subregions)?;
        tracing::info!(
            path = %path.display(),
            regions = table.regions.len(),
            subregions = table.subregions.len(),
            "Region table loaded"
        );
        Ok(table)
    }

    /// All regions in table order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All sub-regions in table order.
    #[must_use]
    pub fn subregions(&self) -> &[SubRegion] {
        &self.subregions
    }

    /// Look up a region by id.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Sub-regions of `region` in table order; empty if none are configured
    /// or the region is unknown.
    #[must_use]
    pub fn subregions_for(&self, region: RegionId) -> Vec<SubRegion> {
        self.subregions
            .iter()
            .filter(|s| s.parent_region_id == region)
            .cloned()
            .collect()
    }
}

/// The region and sub-region selectors of one checkout form.
#[derive(Debug, Clone)]
pub struct AddressCascade {
    table: Arc<RegionTable>,
    region: Option<RegionId>,
    subregion: Option<SubRegionId>,
    options: Vec<SubRegion>,
}

impl AddressCascade {
    /// Nothing selected; the sub-region selector starts disabled.
    #[must_use]
    pub const fn new(table: Arc<RegionTable>) -> Self {
        Self {
            table,
            region: None,
            subregion: None,
            options: Vec::new(),
        }
    }

    /// Select a region.
    ///
    /// Choosing a different region clears the sub-region and replaces the
    /// options with that region's sub-regions. Re-selecting the current region
    /// changes nothing. Returns whether the selection changed.
    pub fn on_region_change(&mut self, region: RegionId) -> bool {
        if self.region == Some(region) {
            return false;
        }
        self.region = Some(region);
        self.subregion = None;
        self.options = self.table.subregions_for(region);
        debug!(%region, options = self.options.len(), "Region changed");
        true
    }

    /// Choose a sub-region from the current options.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoRegionSelected`] while the selector is
    /// disabled, or [`SelectionError::UnknownSubRegion`] if `subregion` is not
    /// an option of the selected region.
    pub fn select_subregion(&mut self, subregion: SubRegionId) -> std::result::Result<(), SelectionError> {
        let Some(region) = self.region else {
            warn!(%subregion, "Sub-region chosen with no region selected");
            return Err(SelectionError::NoRegionSelected);
        };
        if !self.options.iter().any(|s| s.id == subregion) {
            warn!(%region, %subregion, "Sub-region is not an option");
            return Err(SelectionError::UnknownSubRegion { region, subregion });
        }
        self.subregion = Some(subregion);
        Ok(())
    }

    /// Clear both selections.
    pub fn clear(&mut self) {
        self.region = None;
        self.subregion = None;
        self.options.clear();
    }

    /// Currently selected region.
    #[must_use]
    pub const fn selected_region(&self) -> Option<RegionId> {
        self.region
    }

    /// Currently selected sub-region.
    #[must_use]
    pub const fn selected_subregion(&self) -> Option<SubRegionId> {
        self.subregion
    }

    /// Sub-region options for the selected region.
    #[must_use]
    pub fn options(&self) -> &[SubRegion] {
        &self.options
    }

    /// Whether the sub-region selector accepts input.
    #[must_use]
    pub const fn is_subregion_enabled(&self) -> bool {
        self.region.is_some()
    }

    /// The underlying lookup table.
    #[must_use]
    pub fn table(&self) -> &RegionTable {
        &self.table
    }
}
