//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for the axial bar formulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Poisson's ratio - unused by the 1D axial formulation, retained
    /// for forward compatibility with higher-dimensional elements
    pub nu: f64,
    /// Density in kg/m³ - required for gravity loads
    pub rho: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, nu: f64, rho: f64) -> Self {
        Self { e, nu, rho }
    }

    /// Create a material with modulus only (zero density)
    pub fn with_modulus(e: f64) -> Self {
        Self::new(e, 0.0, 0.0)
    }

    /// Create a standard steel material
    pub fn steel() -> Self {
        Self {
            e: 210e9, // 210 GPa
            nu: 0.3,
            rho: 7800.0, // kg/m³
        }
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self {
            e: 68.9e9, // 68.9 GPa
            nu: 0.33,
            rho: 2700.0, // kg/m³
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}
