use std::path::PathBuf;

use thiserror::Error;

// Everything that can abort a labeling run
#[derive(Debug, Error)]
pub enum LabelerError {
    #[error("cannot load city source {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unexpected source shape at {}: {reason}", index_label(.index))]
    SourceShape { index: Option<usize>, reason: String },

    #[error("record #{index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record #{index}: field `{field}` is not numeric (got {value})")]
    Conversion {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("invalid labeler config: {0}")]
    InvalidConfig(String),
}

fn index_label(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("record #{i}"),
        None => "top level".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, LabelerError>;
