//! Calculation engine.
//!
//! # Data Flow
//! ```text
//! request body (JSON)
//!     → types.rs (deserialize, validate ranges)
//!     → engine.rs (pure formulas, rounding)
//!     → result records serialized back to JSON
//!
//! Lookups:
//!     materials.rs (price/description table)
//!     info.rs (static calculator metadata)
//! ```

pub mod engine;
pub mod format;
pub mod info;
pub mod materials;
pub mod types;

pub use engine::{
    calculate_box_properties, calculate_material_cost, inches_to_feet_inches, round_to,
    SizeComparison,
};
pub use format::format_number;
pub use info::CalculatorInfo;
pub use materials::{Material, MaterialCatalog};
pub use types::{
    BoxCalculationResult, BoxDimensions, BoxDimensionsRequest, MaterialCostRequest,
    MaterialCostResult, ValidationError, ValidationResult,
};
