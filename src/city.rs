use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde_json::{Map, Value};

use crate::error::{LabelerError, Result};

// One row of the city source file
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl CityRecord {
    /// Builds a record from one element of the source array.
    ///
    /// `lng` is the canonical longitude key; `lon` is accepted when `lng` is absent.
    /// Coordinates may be JSON numbers or numeric strings.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| LabelerError::SourceShape {
            index: Some(index),
            reason: format!("expected an object, got {}", kind_of(value)),
        })?;

        let name = match require(obj, index, "name")? {
            Value::String(s) => s.clone(),
            other => {
                return Err(LabelerError::SourceShape {
                    index: Some(index),
                    reason: format!("`name` must be a string, got {}", kind_of(other)),
                })
            }
        };

        let lat = to_f64(index, "lat", require(obj, index, "lat")?)?;
        let (lng_key, lng_raw) = match (obj.get("lng"), obj.get("lon")) {
            (Some(v), _) => ("lng", v),
            (None, Some(v)) => ("lon", v),
            (None, None) => {
                return Err(LabelerError::MissingField { index, field: "lng" });
            }
        };
        let lng = to_f64(index, lng_key, lng_raw)?;

        Ok(Self { name, lat, lng })
    }
}

/// Reads the raw city rows. Only the array and object shape is checked here;
/// fields are converted later, for sampled rows only.
/// The file handle lives only for the duration of the parse.
pub fn load_source(path: &Path) -> Result<Vec<Value>> {
    let raw: Value = {
        let file = File::open(path).map_err(|e| LabelerError::SourceRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| LabelerError::SourceRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?
    };

    let rows = match raw {
        Value::Array(rows) => rows,
        other => {
            return Err(LabelerError::SourceShape {
                index: None,
                reason: format!("expected an array, got {}", kind_of(&other)),
            })
        }
    };

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, v)| !v.is_object()) {
        return Err(LabelerError::SourceShape {
            index: Some(i),
            reason: format!("expected an object, got {}", kind_of(row)),
        });
    }

    info!("Loaded {} city rows from {:?}", rows.len(), path);
    Ok(rows)
}

fn require<'a>(obj: &'a Map<String, Value>, index: usize, field: &'static str) -> Result<&'a Value> {
    obj.get(field)
        .ok_or(LabelerError::MissingField { index, field })
}

fn to_f64(index: usize, field: &'static str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| LabelerError::Conversion {
            index,
            field,
            value: value.to_string(),
        })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
