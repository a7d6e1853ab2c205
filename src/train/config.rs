/// Training hyperparameters for the bumblebee detector
///
/// These values are handed to the external trainer as `key=value`
/// arguments. The defaults train the nano YOLO11 weights on the
/// bumblebee dataset at 224px.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::TrainError;

/// Keys rendered from the typed fields; `extra` may not repeat them
const RESERVED_KEYS: [&str; 6] = ["model", "data", "imgsz", "epochs", "batch", "cache"];

/// All parameters of one training run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    /// Pretrained weights to start from
    pub model: String,

    /// Dataset descriptor (YOLO data YAML)
    pub data: String,

    /// Square input size in pixels
    pub imgsz: u32,

    pub epochs: u32,

    /// Images per batch
    pub batch: u32,

    /// Keep decoded training images in RAM between epochs
    pub cache: bool,

    /// Any other trainer arguments, passed through verbatim
    pub extra: BTreeMap<String, String>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            model: "yolo11n.pt".to_string(),
            data: "yolov11_bumblebee.yaml".to_string(),
            imgsz: 224,
            epochs: 100,
            batch: 16,
            cache: true,
            extra: BTreeMap::new(),
        }
    }
}

impl TrainConfig {
    /// Load a config from a JSON file. Fields missing from the file keep
    /// their default values.
    pub fn load(path: &Path) -> Result<Self, TrainError> {
        let text = fs::read_to_string(path).map_err(|source| TrainError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| TrainError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject configs the trainer would choke on before starting it
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.model.trim().is_empty() {
            return Err(TrainError::Invalid("model must not be empty".to_string()));
        }
        if self.data.trim().is_empty() {
            return Err(TrainError::Invalid("data must not be empty".to_string()));
        }

        for (name, value) in [("imgsz", self.imgsz), ("epochs", self.epochs), ("batch", self.batch)] {
            if value == 0 {
                return Err(TrainError::Invalid(format!("{} must be positive", name)));
            }
        }

        for key in self.extra.keys() {
            if key.is_empty() || key.contains('=') || key.chars().any(char::is_whitespace) {
                return Err(TrainError::Invalid(format!("malformed extra key {:?}", key)));
            }
            if RESERVED_KEYS.contains(&key.as_str()) {
                return Err(TrainError::Invalid(format!(
                    "extra key {:?} duplicates a named field",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Render the trainer's command line arguments
    ///
    /// Produces `detect train model=... data=... imgsz=... epochs=...
    /// batch=... cache=...` followed by the `extra` entries in key order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "detect".to_string(),
            "train".to_string(),
            format!("model={}", self.model),
            format!("data={}", self.data),
            format!("imgsz={}", self.imgsz),
            format!("epochs={}", self.epochs),
            format!("batch={}", self.batch),
            // The trainer parses Python-style booleans
            format!("cache={}", if self.cache { "True" } else { "False" }),
        ];

        for (key, value) in &self.extra {
            args.push(format!("{}={}", key, value));
        }

        args
    }
}
