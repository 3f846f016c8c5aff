//! Fluid property functions
//!
//! Pure density, pressure, and viscosity relations for the two simulated
//! media. All units are SI: kg/m³, Pascals, Pa·s; temperatures are taken in
//! °C because that is how media are configured, and converted to Kelvin
//! internally where a relation needs it.
//!
//! Every function here is total over the simulated domain and holds no
//! state, so they are safely callable from any number of concurrent readers.

/// Universal gas constant (J/(mol·K)).
pub const R: f64 = 8.31446;

/// Molar mass of dry air (kg/mol).
pub const M_AIR: f64 = 0.0289644;

/// Standard atmospheric pressure at the surface datum (Pa).
pub const P0: f64 = 101_325.0;

/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Offset from °C to K.
const KELVIN_OFFSET: f64 = 273.15;

/// Density of dry air from the ideal-gas law, `ρ = p·M / (R·T)`.
///
/// # Arguments
/// * `temperature` - Air temperature in °C
/// * `pressure` - Ambient pressure in Pa
pub fn air_density(temperature: f64, pressure: f64) -> f64 {
    pressure * M_AIR / (R * (temperature + KELVIN_OFFSET))
}

/// Density of saline water from a linear empirical fit,
/// `ρ = 1000 − 0.12·t + 0.35·s`.
///
/// # Arguments
/// * `temperature` - Water temperature in °C
/// * `salinity` - Dissolved salt in kg/m³
pub fn water_density(temperature: f64, salinity: f64) -> f64 {
    1000.0 - 0.12 * temperature + 0.35 * salinity
}

/// Air pressure at a depth below the surface datum, from the barometric
/// formula `P = P0·(1 − 2.25577e-5·a)^5.255` with altitude `a = −depth`.
///
/// # Arguments
/// * `depth` - Meters below the surface datum, positive down
pub fn air_pressure_at_depth(depth: f64) -> f64 {
    let altitude = -depth;
    P0 * (1.0 - 2.25577e-5 * altitude).powf(5.255)
}

/// Water pressure at a depth below the surface datum, from the linear
/// hydrostatic approximation `P = P0·(1 + d/10)` (one atmosphere per ten
/// meters).
///
/// # Arguments
/// * `depth` - Meters below the surface datum, positive down
pub fn water_pressure_at_depth(depth: f64) -> f64 {
    P0 * (1.0 + depth / 10.0)
}

/// Dynamic viscosity of air, power-law fit `μ = 2.791e-7·T^0.7355` (T in K).
///
/// Not consumed by the force-balance buoyancy policy; kept because the drag
/// refinement needs it.
pub fn air_viscosity(temperature: f64) -> f64 {
    2.791e-7 * (temperature + KELVIN_OFFSET).powf(0.7355)
}

/// Dynamic viscosity of water, Vogel fit `μ = 2.939e-5·exp(507.88/(T − 149.3))`
/// (T in K).
pub fn water_viscosity(temperature: f64) -> f64 {
    2.939e-5 * (507.88 / (temperature + KELVIN_OFFSET - 149.3)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_density_at_room_conditions() {
        // 27 °C at one atmosphere is about 1.177 kg/m³.
        let rho = air_density(27.0, P0);
        assert!(
            (rho - 1.177).abs() / 1.177 < 0.01,
            "air density {rho} outside 1% of 1.177"
        );
    }

    #[test]
    fn water_density_linear_fit_is_exact() {
        let rho = water_density(18.0, 10.0);
        assert!((rho - 1001.34).abs() < 1e-9, "got {rho}");
    }

    #[test]
    fn densities_stay_positive_over_simulated_range() {
        for t in -20..60 {
            let t = f64::from(t);
            assert!(air_density(t, P0) > 0.0);
            assert!(water_density(t, 0.0) > 0.0);
            assert!(water_density(t, 35.0) > 0.0);
        }
    }

    #[test]
    fn pressure_grows_with_depth_and_stays_positive() {
        let mut last_air = 0.0;
        let mut last_water = 0.0;
        for d in 0..100 {
            let d = f64::from(d);
            let pa = air_pressure_at_depth(d);
            let pw = water_pressure_at_depth(d);
            assert!(pa > 0.0 && pw > 0.0);
            assert!(pa > last_air && pw > last_water);
            last_air = pa;
            last_water = pw;
        }
    }

    #[test]
    fn surface_pressure_is_one_atmosphere() {
        assert_eq!(air_pressure_at_depth(0.0), P0);
        assert_eq!(water_pressure_at_depth(0.0), P0);
        // Ten meters of water adds one atmosphere.
        assert!((water_pressure_at_depth(10.0) - 2.0 * P0).abs() < 1e-6);
    }

    #[test]
    fn viscosity_magnitudes_match_reference_values() {
        // Air at 27 °C: ~1.85e-5 Pa·s. Water at 18 °C: ~1.05e-3 Pa·s.
        let mu_air = air_viscosity(27.0);
        assert!((mu_air - 1.85e-5).abs() / 1.85e-5 < 0.02, "got {mu_air}");
        let mu_water = water_viscosity(18.0);
        assert!((mu_water - 1.05e-3).abs() / 1.05e-3 < 0.02, "got {mu_water}");
    }
}
