//! Distance Matrix response types.

use cep_distance_core::PrimaryUnavailable;
use serde::Deserialize;

const STATUS_OK: &str = "OK";

/// Distance Matrix JSON response.
///
/// `status` is `"OK"` on success; other values such as `"REQUEST_DENIED"`
/// or `"OVER_QUERY_LIMIT"` come with an `error_message`.
#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    /// Top-level status.
    pub status: String,
    /// Explanation for a non-`OK` status.
    #[serde(default)]
    pub error_message: Option<String>,
    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Results for one origin.
#[derive(Debug, Deserialize)]
pub struct Row {
    /// One element per destination.
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Route between one origin and one destination.
#[derive(Debug, Deserialize)]
pub struct Element {
    /// Element status, e.g. `"OK"`, `"NOT_FOUND"` or `"ZERO_RESULTS"`.
    pub status: String,
    /// Route length, absent unless `status` is `"OK"`.
    #[serde(default)]
    pub distance: Option<ElementDistance>,
}

/// Route length.
#[derive(Debug, Deserialize)]
pub struct ElementDistance {
    /// Length in metres.
    pub value: f64,
    /// Localised display text.
    #[serde(default)]
    pub text: Option<String>,
}

impl DistanceMatrixResponse {
    /// Check if the top-level status indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Extract the first origin/destination distance in kilometres.
    ///
    /// # Errors
    ///
    /// Returns the [`PrimaryUnavailable`] cause for a non-`OK` status, an
    /// empty matrix, a non-`OK` element or an unusable distance.
    pub fn into_kilometres(self) -> Result<f64, PrimaryUnavailable> {
        if !self.is_ok() {
            return Err(PrimaryUnavailable::Status {
                status: self.status,
                message: self.error_message.unwrap_or_default(),
            });
        }

        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or(PrimaryUnavailable::NoRoute)?;

        if element.status != STATUS_OK {
            return Err(PrimaryUnavailable::ElementStatus {
                status: element.status,
            });
        }

        let metres = element
            .distance
            .map(|distance| distance.value)
            .ok_or_else(|| PrimaryUnavailable::Malformed {
                message: "element has no distance".to_owned(),
            })?;

        if !metres.is_finite() || metres.is_sign_negative() {
            return Err(PrimaryUnavailable::Malformed {
                message: format!("distance {metres} is not a valid length"),
            });
        }

        Ok(metres_to_km(metres))
    }
}

#[expect(clippy::float_arithmetic, reason = "unit conversion")]
const fn metres_to_km(metres: f64) -> f64 {
    metres / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(json: &str) -> DistanceMatrixResponse {
        serde_json::from_str(json).expect("should deserialise")
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "exact division of an integer literal")]
    fn deserialise_success_response() {
        let response = parse(
            r#"{
                "destination_addresses": ["Praça da Sé, São Paulo - SP, Brasil"],
                "origin_addresses": ["Icaraí, Niterói - RJ, Brasil"],
                "rows": [{"elements": [{
                    "distance": {"text": "431 km", "value": 431456},
                    "duration": {"text": "5 horas 30 minutos", "value": 19800},
                    "status": "OK"
                }]}],
                "status": "OK"
            }"#,
        );

        assert!(response.is_ok());
        assert_eq!(response.into_kilometres(), Ok(431.456));
    }

    #[rstest]
    fn top_level_error_keeps_message() {
        let response = parse(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "rows": []}"#,
        );

        assert_eq!(
            response.into_kilometres(),
            Err(PrimaryUnavailable::Status {
                status: "REQUEST_DENIED".to_owned(),
                message: "The provided API key is invalid.".to_owned(),
            })
        );
    }

    #[rstest]
    #[case(r#"{"status": "OK", "rows": []}"#)]
    #[case(r#"{"status": "OK", "rows": [{"elements": []}]}"#)]
    #[case(r#"{"status": "OK"}"#)]
    fn empty_matrix_is_no_route(#[case] json: &str) {
        assert_eq!(parse(json).into_kilometres(), Err(PrimaryUnavailable::NoRoute));
    }

    #[rstest]
    #[case("ZERO_RESULTS")]
    #[case("NOT_FOUND")]
    fn element_status_is_reported(#[case] status: &str) {
        let json = format!(r#"{{"status": "OK", "rows": [{{"elements": [{{"status": "{status}"}}]}}]}}"#);

        assert_eq!(
            parse(&json).into_kilometres(),
            Err(PrimaryUnavailable::ElementStatus {
                status: status.to_owned()
            })
        );
    }

    #[rstest]
    #[case(r#"{"status": "OK", "rows": [{"elements": [{"status": "OK"}]}]}"#)]
    #[case(r#"{"status": "OK", "rows": [{"elements": [{"status": "OK", "distance": {"value": -5}}]}]}"#)]
    fn unusable_distance_is_malformed(#[case] json: &str) {
        assert!(matches!(
            parse(json).into_kilometres(),
            Err(PrimaryUnavailable::Malformed { .. })
        ));
    }
}
