//! Box property and material cost calculations.
//!
//! # Responsibilities
//! - Closed-form geometry for a rectangular box (area, volume, diagonal)
//! - Unit conversions (in² → ft², in³ → ft³ and liters)
//! - Practical estimates (paint, sheets, weights, size comparison)
//! - Material cost estimation from the fixed price table
//!
//! # Design Decisions
//! - Pure functions: no state, no I/O, identical output for identical input
//! - Inputs are validated before they get here; box math cannot fail
//! - Rounding is half-away-from-zero at the displayed decimal

use tracing::debug;

use crate::calculator::materials::Material;
use crate::calculator::types::{
    require_positive, BasicCalculations, BoxCalculationResult, BoxDimensions, DimensionDisplay,
    GeometryInfo, MaterialCostResult, PracticalInfo, ValidationResult, WeightEstimates,
};

const SQIN_PER_SQFT: f64 = 144.0;
const CUIN_PER_CUFT: f64 = 1728.0;
const LITERS_PER_CUIN: f64 = 0.0163871;
/// Coverage of one ounce of paint, in square inches.
const SQIN_PER_PAINT_OZ: f64 = 350.0;
/// Area of one 12x12 inch cardboard sheet.
const SQIN_PER_SHEET: f64 = 144.0;

/// Pounds per cubic inch for the weight estimates.
const CARDBOARD_LB_PER_CUIN: f64 = 0.01;
const WOOD_LB_PER_CUIN: f64 = 0.03;
const STEEL_LB_PER_CUIN: f64 = 0.28;
const PLASTIC_LB_PER_CUIN: f64 = 0.02;

/// Magnitude beyond which an `f64` carries no fractional digits to round.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round `value` to `decimals` places, ties away from zero.
///
/// Values too large to hold a fractional part are returned unchanged, so
/// scaling never overflows to infinity.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Render an inch value as feet and remaining inches, e.g. `2' 2.0"`.
pub fn inches_to_feet_inches(inches: f64) -> String {
    let feet = inches.div_euclid(12.0) as i64;
    let remaining = inches.rem_euclid(12.0);
    format!("{feet}' {remaining:.1}\"")
}

/// Relatable size buckets keyed on volume in liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeComparison {
    SmallWaterBottle,
    LargeWaterBottle,
    MediumStorageBox,
    LargeStorageContainer,
    StandardRefrigerator,
    LargeAppliance,
    WalkInCloset,
}

impl SizeComparison {
    /// Pick the bucket for `volume_liters`. Lower bounds are inclusive.
    pub fn from_volume_liters(volume_liters: f64) -> Self {
        match volume_liters {
            v if v < 1.0 => SizeComparison::SmallWaterBottle,
            v if v < 10.0 => SizeComparison::LargeWaterBottle,
            v if v < 50.0 => SizeComparison::MediumStorageBox,
            v if v < 200.0 => SizeComparison::LargeStorageContainer,
            v if v < 500.0 => SizeComparison::StandardRefrigerator,
            v if v < 1000.0 => SizeComparison::LargeAppliance,
            _ => SizeComparison::WalkInCloset,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            SizeComparison::SmallWaterBottle => "About the size of a small water bottle.",
            SizeComparison::LargeWaterBottle => {
                "About the size of a large water bottle or small shoebox."
            }
            SizeComparison::MediumStorageBox => {
                "About the size of a medium storage box or small microwave."
            }
            SizeComparison::LargeStorageContainer => {
                "About the size of a large storage container or mini fridge."
            }
            SizeComparison::StandardRefrigerator => "About the size of a standard refrigerator.",
            SizeComparison::LargeAppliance => "About the size of a large appliance or small room.",
            SizeComparison::WalkInCloset => "That's a very large box - like a walk-in closet!",
        }
    }
}

/// Compute every derived property of a box.
pub fn calculate_box_properties(dimensions: &BoxDimensions) -> BoxCalculationResult {
    let (l, w, h) = (dimensions.length(), dimensions.width(), dimensions.height());

    let surface_area = 2.0 * (l * w + l * h + w * h);
    let volume = l * w * h;

    let surface_area_sqft = surface_area / SQIN_PER_SQFT;
    let volume_cuft = volume / CUIN_PER_CUFT;
    let volume_liters = volume * LITERS_PER_CUIN;

    let perimeter_base = 2.0 * (l + w);
    let diagonal = (l * l + w * w + h * h).sqrt();

    let paint_needed = surface_area / SQIN_PER_PAINT_OZ;
    let cardboard_sheets = surface_area / SQIN_PER_SHEET;

    debug!(
        length = l,
        width = w,
        height = h,
        surface_area,
        volume,
        "box properties computed"
    );

    BoxCalculationResult {
        dimensions: DimensionDisplay {
            length: l,
            width: w,
            height: h,
            length_ft: inches_to_feet_inches(l),
            width_ft: inches_to_feet_inches(w),
            height_ft: inches_to_feet_inches(h),
        },
        basic_calculations: BasicCalculations {
            surface_area_sqin: round_to(surface_area, 2),
            surface_area_sqft: round_to(surface_area_sqft, 2),
            volume_cuin: round_to(volume, 2),
            volume_cuft: round_to(volume_cuft, 2),
            volume_liters: round_to(volume_liters, 2),
        },
        geometry: GeometryInfo {
            perimeter_base: round_to(perimeter_base, 2),
            diagonal: round_to(diagonal, 2),
        },
        practical: PracticalInfo {
            paint_needed_oz: round_to(paint_needed, 1),
            cardboard_sheets: round_to(cardboard_sheets, 1),
            weight_estimates: WeightEstimates {
                cardboard: round_to(volume * CARDBOARD_LB_PER_CUIN, 1),
                wood: round_to(volume * WOOD_LB_PER_CUIN, 1),
                steel: round_to(volume * STEEL_LB_PER_CUIN, 1),
                plastic: round_to(volume * PLASTIC_LB_PER_CUIN, 1),
            },
        },
        comparisons: SizeComparison::from_volume_liters(volume_liters)
            .message()
            .to_string(),
    }
}

/// Estimate the cost of covering `surface_area` square inches with `material`.
///
/// Unknown materials are priced as cardboard; the returned `material` is the
/// caller's string unchanged.
pub fn calculate_material_cost(
    surface_area: f64,
    material: &str,
) -> ValidationResult<MaterialCostResult> {
    let surface_area = require_positive("surface_area", Some(surface_area))?;

    let resolved = Material::resolve(material);
    let surface_area_sqft = surface_area / SQIN_PER_SQFT;
    let cost = surface_area_sqft * resolved.price_per_sqft();

    debug!(
        material,
        resolved = resolved.key(),
        surface_area,
        cost,
        "material cost computed"
    );

    Ok(MaterialCostResult {
        material: material.to_string(),
        surface_area_sqft: round_to(surface_area_sqft, 2),
        estimated_cost: round_to(cost, 2),
    })
}
