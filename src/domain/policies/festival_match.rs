//! Festival matching policy
//!
//! Products carry two festival fields: a single promotional tag
//! ("Diwali Special") and a list of festivals they suit. The festival filter
//! matches against exactly one of them, chosen here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FestivalMatch {
    /// The promotional tag must contain a selected festival.
    /// Untagged products never match.
    #[default]
    PromoTag,
    /// Some entry of the festival list must contain a selected festival.
    FestivalList,
}

impl FestivalMatch {
    /// Whether `product` passes a non-empty festival selection.
    ///
    /// Matching is a case-sensitive substring test, so "Diwali" matches the
    /// tag "Diwali Special".
    pub fn matches(&self, product: &Product, selected: &BTreeSet<String>) -> bool {
        let hit = |label: &str| selected.iter().any(|f| label.contains(f.as_str()));
        match self {
            FestivalMatch::PromoTag => product.festival_tag.as_deref().is_some_and(hit),
            FestivalMatch::FestivalList => product.festivals.iter().any(|f| hit(f.as_str())),
        }
    }
}
