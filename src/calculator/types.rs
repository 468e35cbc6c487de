//! Calculator request/response types and input validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted box dimension, in inches.
pub const MAX_DIMENSION_INCHES: f64 = 1000.0;

/// Material used when a cost request does not name one.
pub const DEFAULT_MATERIAL: &str = "cardboard";

/// Errors raised when an input violates its declared constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was absent from the request.
    #[error("field required: {field}")]
    Missing { field: &'static str },

    /// The value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// The value is zero or negative.
    #[error("{field} must be greater than 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    /// The value is above the allowed maximum.
    #[error("{field} must be less than or equal to {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

/// Result type for calculator input validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that `value` is present, finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: Option<f64>) -> ValidationResult<f64> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

fn require_dimension(field: &'static str, value: Option<f64>) -> ValidationResult<f64> {
    let value = require_positive(field, value)?;
    if value > MAX_DIMENSION_INCHES {
        return Err(ValidationError::TooLarge {
            field,
            value,
            max: MAX_DIMENSION_INCHES,
        });
    }
    Ok(value)
}

/// Raw box dimensions as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxDimensionsRequest {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Validated box dimensions in inches, each in `(0, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl BoxDimensions {
    /// Validate and construct box dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> ValidationResult<Self> {
        Self::try_from(BoxDimensionsRequest {
            length: Some(length),
            width: Some(width),
            height: Some(height),
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl TryFrom<BoxDimensionsRequest> for BoxDimensions {
    type Error = ValidationError;

    fn try_from(request: BoxDimensionsRequest) -> ValidationResult<Self> {
        Ok(Self {
            length: require_dimension("length", request.length)?,
            width: require_dimension("width", request.width)?,
            height: require_dimension("height", request.height)?,
        })
    }
}

/// Input dimensions plus their feet-and-inches rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionDisplay {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub length_ft: String,
    pub width_ft: String,
    pub height_ft: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicCalculations {
    pub surface_area_sqin: f64,
    pub surface_area_sqft: f64,
    pub volume_cuin: f64,
    pub volume_cuft: f64,
    pub volume_liters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryInfo {
    pub perimeter_base: f64,
    pub diagonal: f64,
}

/// Rough weight of a solid box of each material, in pounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEstimates {
    #[serde(rename = "Cardboard")]
    pub cardboard: f64,
    #[serde(rename = "Wood")]
    pub wood: f64,
    #[serde(rename = "Steel")]
    pub steel: f64,
    #[serde(rename = "Plastic")]
    pub plastic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticalInfo {
    pub paint_needed_oz: f64,
    pub cardboard_sheets: f64,
    pub weight_estimates: WeightEstimates,
}

/// Complete result of a box calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxCalculationResult {
    pub dimensions: DimensionDisplay,
    pub basic_calculations: BasicCalculations,
    pub geometry: GeometryInfo,
    pub practical: PracticalInfo,
    pub comparisons: String,
}

/// Request payload for a material cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCostRequest {
    /// Surface area in square inches.
    pub surface_area: Option<f64>,
    /// Material name, matched case-insensitively.
    #[serde(default = "default_material")]
    pub material: String,
}

fn default_material() -> String {
    DEFAULT_MATERIAL.to_string()
}

impl Default for MaterialCostRequest {
    fn default() -> Self {
        Self {
            surface_area: None,
            material: default_material(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCostResult {
    /// Material name exactly as the caller sent it.
    pub material: String,
    pub surface_area_sqft: f64,
    pub estimated_cost: f64,
}
