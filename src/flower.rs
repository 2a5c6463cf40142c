use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Flower1,
    Flower2,
}

// One flower as consumed by the globe front-end; key order is part of the output format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowerEntry {
    pub lat: f64,
    pub lon: f64,
    pub texture: Texture,
    pub name: String,
}
