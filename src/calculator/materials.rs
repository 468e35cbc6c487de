//! Material price and description table.
//!
//! The table is fixed at compile time. Lookups are case-insensitive and
//! unknown names resolve to [`Material::Cardboard`] pricing.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Sheet materials known to the cost estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Cardboard,
    Plywood,
    Plastic,
    Metal,
    Acrylic,
}

impl Material {
    /// Every material, in catalog order.
    pub const ALL: [Material; 5] = [
        Material::Cardboard,
        Material::Plywood,
        Material::Plastic,
        Material::Metal,
        Material::Acrylic,
    ];

    /// Lowercase lookup key.
    pub const fn key(self) -> &'static str {
        match self {
            Material::Cardboard => "cardboard",
            Material::Plywood => "plywood",
            Material::Plastic => "plastic",
            Material::Metal => "metal",
            Material::Acrylic => "acrylic",
        }
    }

    /// Price in dollars per square foot.
    pub const fn price_per_sqft(self) -> f64 {
        match self {
            Material::Cardboard => 0.50,
            Material::Plywood => 2.00,
            Material::Plastic => 1.50,
            Material::Metal => 5.00,
            Material::Acrylic => 3.00,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Material::Cardboard => "Corrugated cardboard - lightweight, recyclable",
            Material::Plywood => "Plywood sheets - sturdy, good for construction",
            Material::Plastic => "Plastic sheets - waterproof, durable",
            Material::Metal => "Metal sheets - heavy duty, industrial",
            Material::Acrylic => "Acrylic sheets - clear, professional appearance",
        }
    }

    /// Find a material by name, ignoring case.
    pub fn lookup(name: &str) -> Option<Material> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|m| m.key() == name)
    }

    /// Resolve a name for pricing, falling back to cardboard.
    pub fn resolve(name: &str) -> Material {
        Self::lookup(name).unwrap_or(Material::Cardboard)
    }
}

/// Key → description mapping exposed to clients.
///
/// Serializes as a JSON object in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialCatalog;

impl MaterialCatalog {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        Material::ALL.into_iter().map(Material::key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        Material::ALL.into_iter().map(|m| (m.key(), m.description()))
    }
}

impl Serialize for MaterialCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Material::ALL.len()))?;
        for (key, description) in self.entries() {
            map.serialize_entry(key, description)?;
        }
        map.end()
    }
}
