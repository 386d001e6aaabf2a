//! Distributor directory ("Where to buy").
//!
//! A shopper narrows the directory by region and free-text search. Region
//! counts are always taken over the full directory so the region tabs do not
//! change as the shopper types.

#[cfg(test)]
#[path = "distributor_test.rs"]
mod distributor_test;

use serde::{Deserialize, Serialize};

/// Partnership level. Ordering follows display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Platinum,
    Gold,
    Associate,
}

impl Tier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Platinum => "Platinum Partner",
            Self::Gold => "Gold Partner",
            Self::Associate => "Associate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Usa,
    Europe,
    International,
}

impl Region {
    pub const ALL: [Self; 3] = [Self::Usa, Self::Europe, Self::International];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usa => "usa",
            Self::Europe => "europe",
            Self::International => "international",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Europe => "Europe",
            Self::International => "International",
        }
    }

    /// Parse a region tab value. `"all"`, empty and unknown values mean no
    /// region filter.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|r| r.as_str().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub region: Region,
    /// Free-text service area ("National", "Georgia, Florida").
    pub location: String,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Region tab plus search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default)]
    pub search: String,
}

impl DistributorQuery {
    /// Region match and case-insensitive substring of name or location.
    #[must_use]
    pub fn matches(&self, d: &Distributor) -> bool {
        if self.region.is_some_and(|r| r != d.region) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || d.name.to_lowercase().contains(&needle)
            || d.location.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.search.trim().is_empty()
    }
}

/// Matching distributors, platinum first, then by name.
#[must_use]
pub fn search<'a>(directory: &'a [Distributor], query: &DistributorQuery) -> Vec<&'a Distributor> {
    let mut found: Vec<&Distributor> = directory.iter().filter(|d| query.matches(d)).collect();
    found.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    found
}

/// Directory size in total and per region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCounts {
    pub all: usize,
    pub usa: usize,
    pub europe: usize,
    pub international: usize,
}

impl RegionCounts {
    #[must_use]
    pub fn get(&self, region: Option<Region>) -> usize {
        match region {
            None => self.all,
            Some(Region::Usa) => self.usa,
            Some(Region::Europe) => self.europe,
            Some(Region::International) => self.international,
        }
    }
}

#[must_use]
pub fn region_counts(directory: &[Distributor]) -> RegionCounts {
    directory.iter().fold(
        RegionCounts { all: directory.len(), ..RegionCounts::default() },
        |mut counts, d| {
            match d.region {
                Region::Usa => counts.usa += 1,
                Region::Europe => counts.europe += 1,
                Region::International => counts.international += 1,
            }
            counts
        },
    )
}

/// `"1 authorized distributor"` / `"4 authorized distributors"`.
#[must_use]
pub fn result_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} authorized distributor{plural}")
}
