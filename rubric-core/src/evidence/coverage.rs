use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TraitKey;

/// Externally supplied "topic addressed at all" flags, one per trait.
///
/// Independent of numeric confidence. A trait with no entry is uncovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageStatus(BTreeMap<TraitKey, bool>);

impl CoverageStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every trait marked covered.
    pub fn all_covered() -> Self {
        TraitKey::ALL.into_iter().map(|key| (key, true)).collect()
    }

    pub fn set(&mut self, key: TraitKey, covered: bool) {
        self.0.insert(key, covered);
    }

    pub fn is_covered(&self, key: TraitKey) -> bool {
        self.0.get(&key).copied().unwrap_or(false)
    }
}

impl FromIterator<(TraitKey, bool)> for CoverageStatus {
    fn from_iter<I: IntoIterator<Item = (TraitKey, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
