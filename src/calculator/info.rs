//! Static descriptions of the available calculators.

use serde::Serialize;

use crate::calculator::materials::MaterialCatalog;

#[derive(Debug, Clone, Serialize)]
pub struct BoxCalculatorInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<&'static str>,
    pub units: &'static str,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialCostInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<&'static str>,
    pub materials: Vec<&'static str>,
}

/// Metadata returned by the calculator discovery endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorInfo {
    pub box_calculator: BoxCalculatorInfo,
    pub material_cost: MaterialCostInfo,
}

impl CalculatorInfo {
    pub fn new() -> Self {
        Self {
            box_calculator: BoxCalculatorInfo {
                name: "3D Box Calculator",
                description:
                    "Calculate surface area, volume, and practical applications for 3D boxes",
                inputs: vec!["length", "width", "height"],
                units: "inches",
                features: vec![
                    "Surface area and volume calculations",
                    "Multiple unit conversions",
                    "Paint and material estimates",
                    "Weight estimates for different materials",
                    "Size comparisons",
                ],
            },
            material_cost: MaterialCostInfo {
                name: "Material Cost Estimator",
                description: "Estimate material costs based on surface area",
                inputs: vec!["surface_area", "material_type"],
                materials: MaterialCatalog.keys().collect(),
            },
        }
    }
}

impl Default for CalculatorInfo {
    fn default() -> Self {
        Self::new()
    }
}
