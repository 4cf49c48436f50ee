use serde::{Deserialize, Serialize};

use super::TraitKey;
use crate::errors::{require_present, RubricError, RubricResult};

/// One `(trait, rating, weight)` tuple from a single exchange.
///
/// Transient: consumed by one update call and never retained. Values are
/// clipped by the aggregator, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub trait_key: TraitKey,
    /// Rating in [0.0, 1.0].
    pub rating: f64,
    /// Evidence mass in [0.0, w_max].
    pub weight: f64,
}

impl Observation {
    pub fn new(trait_key: TraitKey, rating: f64, weight: f64) -> Self {
        Self {
            trait_key,
            rating,
            weight,
        }
    }
}

/// Wire shape of an observation as emitted by an upstream rating extractor.
///
/// Numeric fields may be absent; conversion into [`Observation`] rejects
/// missing or NaN values with [`RubricError::InvalidInput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationRecord {
    pub trait_key: Option<TraitKey>,
    pub rating: Option<f64>,
    pub weight: Option<f64>,
}

impl TryFrom<ObservationRecord> for Observation {
    type Error = RubricError;

    fn try_from(record: ObservationRecord) -> RubricResult<Self> {
        let trait_key = record
            .trait_key
            .ok_or_else(|| RubricError::missing("trait_key"))?;
        Ok(Self {
            trait_key,
            rating: require_present("rating", record.rating)?,
            weight: require_present("weight", record.weight)?,
        })
    }
}

/// The four signal-quality factors an evidence weight is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightFactors {
    /// Staleness gate: 0 means the rating is too old to count.
    pub decay: f64,
    /// Extractor confidence gate.
    pub quality: f64,
    /// How independent this sample is from earlier ones.
    pub independence: f64,
    /// How recent the exchange is within the interview.
    pub recency: f64,
}

impl WeightFactors {
    pub fn new(decay: f64, quality: f64, independence: f64, recency: f64) -> Self {
        Self {
            decay,
            quality,
            independence,
            recency,
        }
    }
}

/// Wire shape of [`WeightFactors`] with optional fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightFactorsRecord {
    pub decay: Option<f64>,
    pub quality: Option<f64>,
    pub independence: Option<f64>,
    pub recency: Option<f64>,
}

impl TryFrom<WeightFactorsRecord> for WeightFactors {
    type Error = RubricError;

    fn try_from(record: WeightFactorsRecord) -> RubricResult<Self> {
        Ok(Self {
            decay: require_present("decay", record.decay)?,
            quality: require_present("quality", record.quality)?,
            independence: require_present("independence", record.independence)?,
            recency: require_present("recency", record.recency)?,
        })
    }
}
