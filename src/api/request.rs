//! Request types for the vacation calculator API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/hours` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{RateTable, VacationRecord};

/// Request body for the `/calculate` endpoint.
///
/// Uses the exchange document shape. When `rates` is omitted the server's
/// configured default rates apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Rates to calculate with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateTable>,
    /// The vacations to calculate, in display order.
    pub vacations: Vec<VacationRecord>,
}

/// Request body for the `/hours` endpoint.
///
/// Times are kept as raw strings so malformed values are reported as
/// validation errors rather than JSON errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// Start clock time, `"HH:MM"`.
    pub start: String,
    /// End clock time, `"HH:MM"`.
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    #[test]
    fn test_calculation_request_without_rates() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{"vacations": [{"type": "cds", "startTime": "18:15", "endTime": "01:00"}]}"#,
        )
        .unwrap();

        assert!(request.rates.is_none());
        assert_eq!(request.vacations[0].shift_type, ShiftType::Cds);
    }

    #[test]
    fn test_calculation_request_with_rates() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "rates": {"simple": {"jour": 12, "nuit": 15}},
                "vacations": []
            }"#,
        )
        .unwrap();

        let rates = request.rates.unwrap();
        assert_eq!(rates.len(), 1);
        assert!(rates.get(ShiftType::Simple).is_ok());
    }

    #[test]
    fn test_calculation_request_requires_vacations() {
        let result = serde_json::from_str::<CalculationRequest>(r#"{"rates": {}}"#);
        assert!(result.is_err());
    }
}
