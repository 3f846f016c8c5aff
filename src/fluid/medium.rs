//! Fluid medium configuration
//!
//! A [`Medium`] is an immutable value describing the fluid a simulation runs
//! in. Density, pressure, and viscosity are dispatched to the pure relations
//! in [`model`](super::model); nothing derived is stored. Constructors fill
//! in the conventional defaults, so a medium is always fully specified.

use crate::error::ConfigError;
use crate::fluid::model;

/// Default air temperature in °C.
pub const DEFAULT_AIR_TEMPERATURE: f64 = 27.0;

/// Default water temperature in °C.
pub const DEFAULT_WATER_TEMPERATURE: f64 = 18.0;

/// Default water salinity in kg/m³.
pub const DEFAULT_WATER_SALINITY: f64 = 10.0;

/// The fluid a simulation is immersed in.
///
/// Immutable per engine instance. Construct with [`Medium::air`] /
/// [`Medium::water`] for defaults, the `with_*` methods for overrides, or
/// [`Medium::from_key`] to resolve an external configuration string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Medium {
    /// Dry air at a given temperature (°C).
    Air { temperature: f64 },
    /// Saline water at a given temperature (°C) and salinity (kg/m³).
    Water { temperature: f64, salinity: f64 },
}

impl Medium {
    /// Air at the default 27 °C.
    pub fn air() -> Self {
        Medium::Air {
            temperature: DEFAULT_AIR_TEMPERATURE,
        }
    }

    /// Water at the default 18 °C and 10 kg/m³ salinity.
    pub fn water() -> Self {
        Medium::Water {
            temperature: DEFAULT_WATER_TEMPERATURE,
            salinity: DEFAULT_WATER_SALINITY,
        }
    }

    /// Resolves a configuration key (`"air"` or `"water"`, case-insensitive)
    /// to a default-configured medium.
    ///
    /// Unknown keys fail fast instead of silently defaulting.
    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        match key.to_ascii_lowercase().as_str() {
            "air" => Ok(Medium::air()),
            "water" => Ok(Medium::water()),
            _ => Err(ConfigError::UnknownMedium(key.to_string())),
        }
    }

    /// Returns the same medium at a different temperature.
    pub fn with_temperature(self, temperature: f64) -> Self {
        match self {
            Medium::Air { .. } => Medium::Air { temperature },
            Medium::Water { salinity, .. } => Medium::Water {
                temperature,
                salinity,
            },
        }
    }

    /// Returns the same medium at a different salinity. No-op for air.
    pub fn with_salinity(self, salinity: f64) -> Self {
        match self {
            Medium::Air { .. } => self,
            Medium::Water { temperature, .. } => Medium::Water {
                temperature,
                salinity,
            },
        }
    }

    /// Configured temperature in °C.
    pub fn temperature(&self) -> f64 {
        match *self {
            Medium::Air { temperature } | Medium::Water { temperature, .. } => temperature,
        }
    }

    /// Ambient density at the surface datum in kg/m³.
    pub fn density(&self) -> f64 {
        self.density_at_pressure(model::P0)
    }

    /// Ambient density at a given pressure in kg/m³.
    ///
    /// The water fit does not depend on pressure; the air relation does.
    pub fn density_at_pressure(&self, pressure: f64) -> f64 {
        match *self {
            Medium::Air { temperature } => model::air_density(temperature, pressure),
            Medium::Water {
                temperature,
                salinity,
            } => model::water_density(temperature, salinity),
        }
    }

    /// Ambient pressure at a depth below the surface datum (meters, positive
    /// down) in Pa.
    pub fn pressure_at_depth(&self, depth: f64) -> f64 {
        match *self {
            Medium::Air { .. } => model::air_pressure_at_depth(depth),
            Medium::Water { .. } => model::water_pressure_at_depth(depth),
        }
    }

    /// Dynamic viscosity at the configured temperature in Pa·s.
    pub fn viscosity(&self) -> f64 {
        match *self {
            Medium::Air { temperature } => model::air_viscosity(temperature),
            Medium::Water { temperature, .. } => model::water_viscosity(temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lookup_resolves_defaults() {
        assert_eq!(Medium::from_key("air").unwrap(), Medium::air());
        assert_eq!(Medium::from_key("Water").unwrap(), Medium::water());
    }

    #[test]
    fn unknown_key_fails_fast() {
        let err = Medium::from_key("mercury").unwrap_err();
        assert_eq!(err, ConfigError::UnknownMedium("mercury".to_string()));
    }

    #[test]
    fn overrides_replace_only_their_field() {
        let m = Medium::water().with_temperature(4.0);
        assert_eq!(
            m,
            Medium::Water {
                temperature: 4.0,
                salinity: DEFAULT_WATER_SALINITY
            }
        );
        // Salinity override is a no-op for air.
        assert_eq!(Medium::air().with_salinity(35.0), Medium::air());
    }

    #[test]
    fn default_densities_are_physical() {
        let air = Medium::air().density();
        assert!((air - 1.177).abs() / 1.177 < 0.01);
        let water = Medium::water().density();
        assert!((water - 1001.34).abs() < 1e-9);
    }

    #[test]
    fn medium_dispatches_pressure_by_kind() {
        // Same depth, very different gradients.
        let air = Medium::air().pressure_at_depth(10.0);
        let water = Medium::water().pressure_at_depth(10.0);
        assert!(water > air);
    }
}
