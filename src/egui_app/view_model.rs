//! Read-only projections of API payloads for rendering.

use crate::portal_api::PredictionResult;

/// One class-probability row of the analysis breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassProbabilityRow {
    /// Class name as sent by the backend.
    pub label: String,
    /// Probability as percent text with two decimals, e.g. `92.50%`.
    pub percent_text: String,
    /// Bar fill fraction taken from the unrounded probability.
    pub fill: f32,
}

/// Rendered form of one MRI prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    /// Predicted class label.
    pub prediction: String,
    /// Confidence with a `%` suffix in minimal decimal form, e.g. `92.5%`.
    pub confidence_text: String,
    /// One row per class, in the order the backend sent them.
    pub rows: Vec<ClassProbabilityRow>,
    /// Follow-up advice, shown verbatim.
    pub suggestions: String,
}

/// Build the analysis panel's view of a prediction.
pub fn prediction_view(result: &PredictionResult) -> PredictionView {
    let rows = result
        .classes
        .iter()
        .map(|(label, probability)| ClassProbabilityRow {
            label: label.clone(),
            percent_text: format!("{:.2}%", probability * 100.0),
            fill: *probability as f32,
        })
        .collect();
    PredictionView {
        prediction: result.prediction.clone(),
        confidence_text: format!("{}%", result.confidence),
        rows,
        suggestions: result.suggestions.clone(),
    }
}
