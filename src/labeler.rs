use log::{info, warn};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde_json::Value;

use crate::city::CityRecord;
use crate::coords;
use crate::error::{LabelerError, Result};
use crate::flower::{FlowerEntry, Texture};

pub const DEFAULT_SAMPLE_SIZE: usize = 125;
pub const DEFAULT_QUOTA_FLOWER1: usize = 75;
pub const DEFAULT_QUOTA_FLOWER2: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelerConfig {
    pub sample_size: usize,
    pub quota_flower1: usize,
    pub quota_flower2: usize,
    pub normalize: bool, // clamp/wrap coordinates before emitting
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            quota_flower1: DEFAULT_QUOTA_FLOWER1,
            quota_flower2: DEFAULT_QUOTA_FLOWER2,
            normalize: false,
        }
    }
}

impl LabelerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(LabelerError::InvalidConfig(
                "sample_size must be at least 1".into(),
            ));
        }
        if self.quota_flower1.saturating_add(self.quota_flower2) < self.sample_size {
            warn!(
                "Quotas {} + {} are below sample size {}; overflow goes to flower1",
                self.quota_flower1, self.quota_flower2, self.sample_size
            );
        }
        Ok(())
    }
}

/// Running per-texture counts for one labeling pass.
#[derive(Debug)]
pub struct QuotaCounter {
    quota_flower1: usize,
    quota_flower2: usize,
    flower1: usize,
    flower2: usize,
}

impl QuotaCounter {
    pub fn new(quota_flower1: usize, quota_flower2: usize) -> Self {
        Self {
            quota_flower1,
            quota_flower2,
            flower1: 0,
            flower2: 0,
        }
    }

    /// flower1 until its quota is full, then flower2, then flower1 again.
    pub fn next_texture(&mut self) -> Texture {
        if self.flower1 < self.quota_flower1 {
            self.flower1 += 1;
            Texture::Flower1
        } else if self.flower2 < self.quota_flower2 {
            self.flower2 += 1;
            Texture::Flower2
        } else {
            Texture::Flower1
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LabelSummary {
    pub flower1: usize,
    pub flower2: usize,
}

impl LabelSummary {
    pub fn of(entries: &[FlowerEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, e| {
            match e.texture {
                Texture::Flower1 => acc.flower1 += 1,
                Texture::Flower2 => acc.flower2 += 1,
            }
            acc
        })
    }
}

/// Picks `min(size, len)` distinct positions out of `len`, in random order.
pub fn sample<R: Rng + ?Sized>(len: usize, size: usize, rng: &mut R) -> Vec<usize> {
    index::sample(rng, len, size.min(len)).into_vec()
}

/// Labels records in the order given.
pub fn label(sampled: &[CityRecord], config: &LabelerConfig) -> Vec<FlowerEntry> {
    let mut counter = QuotaCounter::new(config.quota_flower1, config.quota_flower2);

    sampled
        .iter()
        .map(|city| {
            let (lat, lon) = if config.normalize {
                let n = coords::normalize(city.lat, city.lng);
                if n.is_adjusted() {
                    warn!("Normalized {}: {}", city.name, n.adjustments.join("; "));
                }
                (n.lat, n.lon)
            } else {
                (city.lat, city.lng)
            };

            FlowerEntry {
                lat,
                lon,
                texture: counter.next_texture(),
                name: city.name.clone(),
            }
        })
        .collect()
}

/// Full pipeline: sample, convert the sampled rows, label, shuffle.
///
/// Rows that are not drawn are never inspected; errors carry the row's
/// position in the source file.
pub fn generate<R: Rng + ?Sized>(
    rows: &[Value],
    config: &LabelerConfig,
    rng: &mut R,
) -> Result<Vec<FlowerEntry>> {
    config.validate()?;

    let picked = sample(rows.len(), config.sample_size, rng);
    info!("Sampled {} of {} cities", picked.len(), rows.len());

    let sampled = picked
        .into_iter()
        .map(|i| CityRecord::from_value(i, &rows[i]))
        .collect::<Result<Vec<_>>>()?;

    let mut flowers = label(&sampled, config);
    flowers.shuffle(rng);

    let summary = LabelSummary::of(&flowers);
    info!(
        "Labeled {} flowers: flower1={} flower2={}",
        flowers.len(),
        summary.flower1,
        summary.flower2
    );
    Ok(flowers)
}
