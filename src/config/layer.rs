//! Layer selection and load parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which network context the loader targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Layer1,
    Layer2,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Layer1 => "layer1",
            Layer::Layer2 => "layer2",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layer1" => Ok(Layer::Layer1),
            "layer2" => Ok(Layer::Layer2),
            other => Err(format!("unknown layer '{}' (expected layer1 or layer2)", other)),
        }
    }
}

/// Optional parameters for a load call. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadParams {
    pub layer: Option<Layer>,
}

impl LoadParams {
    pub fn with_layer(layer: Layer) -> Self {
        Self { layer: Some(layer) }
    }

    /// Only an explicit `layer2` selects layer 2.
    pub fn resolved_layer(&self) -> Layer {
        match self.layer {
            Some(Layer::Layer2) => Layer::Layer2,
            _ => Layer::Layer1,
        }
    }
}
