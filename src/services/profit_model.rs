/// ============================================================
///  Forecast-Error Profit Model
///
///  Pipeline:
///   1. Tolerance band  – ±5 % around the average plant output
///   2. Band share      – probability mass of a Gaussian forecast
///                        error (σ) that lands inside the band
///   3. Daily energy    – P_avg × 24 h
///   4. Settlement      – in-band energy earns the unit price,
///                        out-of-band energy pays it back
/// ============================================================

use libm::erf;
use std::f64::consts::SQRT_2;
use thiserror::Error;

// ─── Model constants ─────────────────────────────────────────
const BAND_FRACTION: f64 = 0.05; // ±5 % tolerance band
const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// σ = 0 leaves the band integral undefined.
    #[error("degenerate distribution: sigma must be non-zero")]
    DegenerateDistribution,

    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },

    /// Finite inputs whose energy × price leaves the f64 range.
    #[error("profit overflows the representable range")]
    Overflow,
}

/// Fraction of the daily energy that falls inside the ±5 % band when the
/// forecast error is N(0, σ²).
pub fn band_share(average_power: f64, sigma: f64) -> Result<f64, ModelError> {
    ensure_finite("average_power", average_power)?;
    ensure_finite("sigma", sigma)?;
    if sigma == 0.0 {
        return Err(ModelError::DegenerateDistribution);
    }

    let lower = average_power * (1.0 - BAND_FRACTION);
    let upper = average_power * (1.0 + BAND_FRACTION);
    let scale = sigma * SQRT_2;

    Ok(0.5 * (erf((upper - average_power) / scale) - erf((lower - average_power) / scale)))
}

/// Daily profit for one forecast-error regime.
///
/// * `average_power` – expected plant output (MW)
/// * `sigma`         – standard deviation of the forecast error, same unit
/// * `unit_cost`     – price per unit of energy; negative prices are allowed
pub fn compute_profit(average_power: f64, sigma: f64, unit_cost: f64) -> Result<f64, ModelError> {
    ensure_finite("unit_cost", unit_cost)?;
    let share = band_share(average_power, sigma)?;

    let total_energy = average_power * HOURS_PER_DAY;
    let in_band = total_energy * share;
    let out_of_band = total_energy * (1.0 - share);

    let profit = in_band * unit_cost - out_of_band * unit_cost;
    if !profit.is_finite() {
        return Err(ModelError::Overflow);
    }
    Ok(profit)
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFinite { name })
    }
}
