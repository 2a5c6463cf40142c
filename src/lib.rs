//! Mock flower data for the globe: load cities, sample, label by texture quota, shuffle.

pub mod city;
pub mod coords;
pub mod error;
pub mod flower;
pub mod labeler;
pub mod output;

pub use city::{load_source, CityRecord};
pub use error::LabelerError;
pub use flower::{FlowerEntry, Texture};
pub use labeler::{generate, LabelSummary, LabelerConfig};
