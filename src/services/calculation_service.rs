use crate::models::profit::{CalculationInputs, CalculationResult, ParsedInputs};
use crate::services::profit_model::{self, ModelError};

/// Parse one numeric field. Empty or malformed text yields `None`.
pub fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Parse all four fields, substituting 0.0 for anything unparsable.
/// Returns the names of the fields that fell back.
pub fn parse_inputs(inputs: &CalculationInputs) -> (ParsedInputs, Vec<&'static str>) {
    let mut fallbacks = Vec::new();
    let mut field = |name: &'static str, raw: &str| -> f64 {
        parse_field(raw).unwrap_or_else(|| {
            fallbacks.push(name);
            0.0
        })
    };

    let parsed = ParsedInputs {
        average_power: field("power", &inputs.power),
        sigma1: field("sigma1", &inputs.sigma1),
        sigma2: field("sigma2", &inputs.sigma2),
        unit_cost: field("cost", &inputs.cost),
    };
    (parsed, fallbacks)
}

/// Evaluate both forecast regimes with shared power and price.
pub fn evaluate(inputs: &ParsedInputs) -> Result<CalculationResult, CalculationError> {
    let profit1 = profit_model::compute_profit(inputs.average_power, inputs.sigma1, inputs.unit_cost)
        .map_err(|source| CalculationError { field: "sigma1", source })?;
    let profit2 = profit_model::compute_profit(inputs.average_power, inputs.sigma2, inputs.unit_cost)
        .map_err(|source| CalculationError { field: "sigma2", source })?;

    tracing::debug!(
        power = inputs.average_power,
        cost = inputs.unit_cost,
        profit1,
        profit2,
        "profit evaluated"
    );
    Ok(CalculationResult { profit1, profit2 })
}

/// Two-decimal rendering used for every displayed amount.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// A model failure tagged with the form field that triggered it.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("{field}: {source}")]
pub struct CalculationError {
    field: &'static str,
    #[source]
    source: ModelError,
}

impl CalculationError {
    /// The form field to highlight. Non-finite power or cost reports its own
    /// name; an overflow comes from power and cost together and names none.
    pub fn field(&self) -> Option<&'static str> {
        match &self.source {
            ModelError::NonFinite { name: "average_power" } => Some("power"),
            ModelError::NonFinite { name: "unit_cost" } => Some("cost"),
            ModelError::Overflow => None,
            _ => Some(self.field),
        }
    }

    pub fn model_error(&self) -> &ModelError {
        &self.source
    }
}
