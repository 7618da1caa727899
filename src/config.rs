//! Batch run configuration.
//!
//! The defaults reproduce the stock batch run: eight fixed control points,
//! a uniform cubic B-spline with 100 samples per segment, written to
//! `spline_points.csv`. A TOML file can override any field.
//!
//! ```toml
//! samples_per_segment = 40
//! scheme = "catmull-rom"
//! alpha = 0.5
//! output = "curve.csv"
//! control_points = [[0.0, 0.0], [1.0, 2.0], [3.0, 3.0], [4.0, 0.0]]
//! ```
//!
//! `control_points_file` names an `x,y` CSV table to read the control points
//! from instead; it takes precedence over `control_points`.

use crate::curves::{SplineKind, CENTRIPETAL_ALPHA};
use crate::io::{read_csv, CsvError};
use crate::primitives::Point2;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional configuration file looked up by the batch binary.
pub const CONFIG_FILE_NAME: &str = "splinum.toml";

/// Failure to load a batch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`BatchConfig`].
    #[error("malformed configuration")]
    Parse(#[from] toml::de::Error),

    /// The control point table could not be read.
    #[error("cannot load control points from {}", .path.display())]
    ControlPoints {
        path: PathBuf,
        #[source]
        source: CsvError,
    },
}

/// Evaluator selected in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeConfig {
    BSpline,
    CatmullRom,
}

/// Parameters of a batch run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Control points as `[x, y]` pairs
    pub control_points: Vec<[f64; 2]>,
    /// CSV table of control points, overriding `control_points`
    pub control_points_file: Option<PathBuf>,
    /// Samples per spline segment
    pub samples_per_segment: usize,
    /// Evaluator to use
    pub scheme: SchemeConfig,
    /// Catmull-Rom tension, ignored for B-splines
    pub alpha: f64,
    /// Output CSV path
    pub output: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            control_points: vec![
                [0.0, 0.0],
                [1.0, 2.0],
                [3.0, 3.0],
                [4.0, 0.0],
                [5.0, -1.0],
                [7.0, 2.0],
                [2.0, 5.0],
                [5.0, 5.0],
            ],
            control_points_file: None,
            samples_per_segment: 100,
            scheme: SchemeConfig::BSpline,
            alpha: CENTRIPETAL_ALPHA,
            output: PathBuf::from("spline_points.csv"),
        }
    }
}

impl BatchConfig {
    /// Parses a configuration from TOML; missing fields take default values.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a configuration file.
    ///
    /// Returns `Ok(None)` when the file does not exist. Any other read failure
    /// and any parse failure is an error.
    pub fn load_from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no configuration file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(Some(config))
    }

    /// Control points as geometric points, read from `control_points_file`
    /// when one is set.
    pub fn points(&self) -> Result<Vec<Point2<f64>>, ConfigError> {
        let Some(path) = &self.control_points_file else {
            return Ok(self.control_points.iter().map(|&p| Point2::from(p)).collect());
        };
        let load = || -> Result<_, CsvError> {
            let file = File::open(path)?;
            read_csv(BufReader::new(file))
        };
        let points = load().map_err(|source| ConfigError::ControlPoints {
            path: path.clone(),
            source,
        })?;
        log::debug!("read {} control points from {}", points.len(), path.display());
        Ok(points)
    }

    /// The evaluator this configuration selects.
    pub fn spline_kind(&self) -> SplineKind<f64> {
        match self.scheme {
            SchemeConfig::BSpline => SplineKind::BSpline,
            SchemeConfig::CatmullRom => SplineKind::CatmullRom { alpha: self.alpha },
        }
    }
}
