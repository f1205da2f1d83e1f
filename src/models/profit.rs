use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// ─── Raw form input ──────────────────────────────────────────────────────────

/// The four calculator fields exactly as the user typed them.
/// Kept verbatim so the UI can echo them back next to the result.
/// JSON numbers and other scalars are accepted and kept in their text form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationInputs {
    /// Average plant power (MW)
    #[serde(default, deserialize_with = "raw_field")]
    pub power: String,
    /// Forecast error standard deviation, baseline forecast (MW)
    #[serde(default, deserialize_with = "raw_field")]
    pub sigma1: String,
    /// Forecast error standard deviation, improved forecast (MW)
    #[serde(default, deserialize_with = "raw_field")]
    pub sigma2: String,
    /// Electricity price per unit of energy
    #[serde(default, deserialize_with = "raw_field")]
    pub cost: String,
}

/// Any JSON value becomes the text the numeric parser will see:
/// strings verbatim, `null` as empty, everything else as its JSON rendering.
fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ─── Parsed model input ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInputs {
    pub average_power: f64,
    pub sigma1: f64,
    pub sigma2: f64,
    pub unit_cost: f64,
}

// ─── Model output ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Profit with the baseline forecast error (sigma1)
    pub profit1: f64,
    /// Profit with the improved forecast error (sigma2)
    pub profit2: f64,
}

impl CalculationResult {
    /// Gain from moving to the improved forecast. Always derived, never stored.
    pub fn net_gain(&self) -> f64 {
        self.profit2 - self.profit1
    }
}

// ─── REST API response types ──────────────────────────────────────────────────

/// Amounts rounded for display, two decimal places.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DisplayAmounts {
    pub profit1: String,
    pub profit2: String,
    pub net_gain: String,
    /// Currency label configured for the UI, e.g. "kUAH"
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfitResponse {
    pub profit1: f64,
    pub profit2: f64,
    pub net_gain: f64,
    pub display: DisplayAmounts,
    /// Raw inputs, echoed unmodified
    pub inputs: CalculationInputs,
    /// Fields that could not be parsed and were evaluated as 0.0
    pub warnings: Vec<String>,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_accept_numbers_and_null() {
        let inputs: CalculationInputs =
            serde_json::from_str(r#"{"power": 5, "sigma1": 1.0, "sigma2": null, "cost": "7.0"}"#)
                .unwrap();
        assert_eq!(inputs.power, "5");
        assert_eq!(inputs.sigma1, "1.0");
        assert_eq!(inputs.sigma2, "");
        assert_eq!(inputs.cost, "7.0");
    }

    #[test]
    fn test_inputs_keep_other_json_values_as_text() {
        let inputs: CalculationInputs =
            serde_json::from_str(r#"{"power": true, "cost": [1]}"#).unwrap();
        assert_eq!(inputs.power, "true");
        assert_eq!(inputs.cost, "[1]");
        assert_eq!(inputs.sigma1, "");
    }
}
