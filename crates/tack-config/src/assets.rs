//! Image optimizer settings (`imageWebpackLoader`).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ImageOptimization {
    pub imagemin: ImageminOptions,
    pub pngquant: PngquantOptions,
    pub svgo: SvgoOptions,
}

/// Lossless pass applied to every image format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageminOptions {
    /// 0 (fastest) to 7 (smallest)
    #[serde(deserialize_with = "optimization_level")]
    #[schemars(range(max = 7))]
    pub optimization_level: u8,
    /// Progressive GIF rendering
    pub interlaced: bool,
}

impl ImageminOptions {
    pub fn new(optimization_level: u8, interlaced: bool) -> Result<Self> {
        check_range("imagemin.optimizationLevel", optimization_level, 0, 7)?;
        Ok(Self {
            optimization_level,
            interlaced,
        })
    }
}

impl Default for ImageminOptions {
    fn default() -> Self {
        Self {
            optimization_level: 7,
            interlaced: false,
        }
    }
}

/// Lossy PNG quantization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PngquantOptions {
    pub quality: QualityRange,
    /// 1 (brute force) to 10 (fastest)
    #[serde(deserialize_with = "speed")]
    #[schemars(range(min = 1, max = 10))]
    pub speed: u8,
}

impl PngquantOptions {
    pub fn new(quality: QualityRange, speed: u8) -> Result<Self> {
        check_range("pngquant.speed", speed, 1, 10)?;
        Ok(Self { quality, speed })
    }
}

impl Default for PngquantOptions {
    fn default() -> Self {
        Self {
            quality: QualityRange { min: 65, max: 90 },
            speed: 4,
        }
    }
}

/// SVG optimizer passes that are switched off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SvgoOptions {
    /// Keep `viewBox` so images scale
    pub remove_view_box: bool,
    pub remove_empty_attrs: bool,
}

/// Acceptable quality window, written `min-max` (`65-90`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualityRange {
    min: u8,
    max: u8,
}

impl QualityRange {
    /// # Errors
    ///
    /// Values above 100 and `min > max` are rejected.
    pub fn new(min: u8, max: u8) -> Result<Self> {
        check_range("pngquant.quality", min, 0, 100)?;
        check_range("pngquant.quality", max, 0, 100)?;
        if min > max {
            return Err(ConfigError::InvalidValue {
                field: "pngquant.quality".to_string(),
                message: format!("minimum {min} is above maximum {max}"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }
}

impl FromStr for QualityRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ConfigError::InvalidValue {
            field: "pngquant.quality".to_string(),
            message: format!("expected 'min-max', got '{s}'"),
        };
        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = max.trim().parse().map_err(|_| invalid())?;
        Self::new(min, max)
    }
}

impl fmt::Display for QualityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl TryFrom<String> for QualityRange {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<QualityRange> for String {
    fn from(range: QualityRange) -> Self {
        range.to_string()
    }
}

impl JsonSchema for QualityRange {
    fn schema_name() -> Cow<'static, str> {
        "QualityRange".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^[0-9]{1,3}-[0-9]{1,3}$"
        })
    }
}

fn check_range(field: &str, value: u8, min: u8, max: u8) -> Result<()> {
    if value < min || value > max {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("{value} is outside {min}..={max}"),
        });
    }
    Ok(())
}

fn optimization_level<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u8, D::Error> {
    let value = u8::deserialize(deserializer)?;
    check_range("imagemin.optimizationLevel", value, 0, 7).map_err(serde::de::Error::custom)?;
    Ok(value)
}

fn speed<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u8, D::Error> {
    let value = u8::deserialize(deserializer)?;
    check_range("pngquant.speed", value, 1, 10).map_err(serde::de::Error::custom)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_favor_size() {
        let value = serde_json::to_value(ImageOptimization::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "imagemin": { "optimizationLevel": 7, "interlaced": false },
                "pngquant": { "quality": "65-90", "speed": 4 },
                "svgo": { "removeViewBox": false, "removeEmptyAttrs": false }
            })
        );
    }

    #[test]
    fn quality_range_parses_and_validates() {
        let range: QualityRange = "65-90".parse().unwrap();
        assert_eq!((range.min(), range.max()), (65, 90));
        assert!("90-65".parse::<QualityRange>().is_err());
        assert!("65-101".parse::<QualityRange>().is_err());
        assert!("65".parse::<QualityRange>().is_err());
        assert!("a-b".parse::<QualityRange>().is_err());
    }

    #[test]
    fn optimization_level_is_bounded() {
        assert!(ImageminOptions::new(7, false).is_ok());
        assert!(ImageminOptions::new(8, false).is_err());
        let result: std::result::Result<ImageminOptions, _> =
            serde_json::from_value(json!({ "optimizationLevel": 9 }));
        assert!(result.is_err());
    }

    #[test]
    fn speed_is_bounded() {
        let quality = QualityRange::new(0, 100).unwrap();
        assert!(PngquantOptions::new(quality, 0).is_err());
        assert!(PngquantOptions::new(quality, 11).is_err());
        assert!(PngquantOptions::new(quality, 10).is_ok());
    }
}
