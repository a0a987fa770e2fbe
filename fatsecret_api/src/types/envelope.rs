//! The success-or-error envelope wrapping every API response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{transport::truncate_body, Error};

/// Error object reported by the API, e.g. `{"code": 106, "message": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

/// A decoded response: either the named payload or the API's error object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<P> {
    Success(P),
    Failure(ErrorResponse),
}

impl<P> Envelope<P> {
    /// Converts the envelope into a `Result`, turning the error branch into [`Error::Api`].
    pub fn into_result(self) -> Result<P, Error> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure(err) => Err(Error::Api {
                code: err.code,
                message: err.message,
            }),
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    error: Option<ErrorResponse>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Decodes `body` as an envelope whose success payload lives under `field`.
///
/// An `error` object wins over any payload sitting next to it, and the
/// payload is only parsed when no error is present. A body with neither an
/// error nor a non-null payload is a decode failure.
pub(crate) fn decode<P: DeserializeOwned>(body: &[u8], field: &str) -> Result<Envelope<P>, Error> {
    let raw: RawEnvelope = serde_json::from_slice(body).map_err(|e| {
        let snippet = truncate_body(&String::from_utf8_lossy(body));
        tracing::error!("Failed to parse envelope: {} | body: {}", e, snippet);
        Error::Decode(e.to_string())
    })?;

    if let Some(err) = raw.error {
        return Ok(Envelope::Failure(err));
    }

    let payload = match raw.fields.get(field) {
        None | Some(Value::Null) => {
            tracing::error!("Response carried neither `{}` nor `error`", field);
            return Err(Error::Decode(format!(
                "response carried neither `{}` nor `error`",
                field
            )));
        }
        Some(value) => value,
    };

    P::deserialize(payload).map(Envelope::Success).map_err(|e| {
        tracing::error!("Failed to parse `{}` payload: {}", field, e);
        Error::Decode(format!("`{}`: {}", field, e))
    })
}

/// Accepts either a JSON array or a single bare element.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FoodCategories, FoodSubCategories};

    fn decode_categories(json: &str) -> Result<Envelope<FoodCategories>, Error> {
        decode(json.as_bytes(), "food_categories")
    }

    #[test]
    fn success_envelope_yields_payload() {
        let env = decode_categories(
            r#"{"food_categories":{"food_category":[{"food_category_id":"1","food_category_name":"Bakery","food_category_description":"Baked goods"}]}}"#,
        )
        .unwrap();
        match env {
            Envelope::Success(payload) => {
                assert_eq!(payload.categories.len(), 1);
                assert_eq!(payload.categories[0].id, "1");
            }
            Envelope::Failure(err) => panic!("unexpected failure: {:?}", err),
        }
    }

    #[test]
    fn error_envelope_yields_failure() {
        let env = decode_categories(
            r#"{"error":{"code":101,"message":"Missing required oauth parameter"}}"#,
        )
        .unwrap();
        assert_eq!(
            env,
            Envelope::Failure(ErrorResponse {
                code: Some(101),
                message: "Missing required oauth parameter".to_string(),
            })
        );
    }

    #[test]
    fn error_wins_over_payload() {
        let env = decode_categories(
            r#"{"food_categories":{"food_category":[]},"error":{"message":"Invalid category"}}"#,
        )
        .unwrap();
        assert!(matches!(env, Envelope::Failure(ref e) if e.message == "Invalid category"));
    }

    #[test]
    fn error_wins_over_malformed_payload() {
        let env =
            decode_categories(r#"{"food_categories":42,"error":{"message":"boom"}}"#).unwrap();
        assert!(matches!(env, Envelope::Failure(_)));
    }

    #[test]
    fn error_without_message_is_still_a_failure() {
        let env = decode_categories(r#"{"error":{"code":5},"food_categories":{}}"#).unwrap();
        assert_eq!(
            env,
            Envelope::Failure(ErrorResponse {
                code: Some(5),
                message: String::new(),
            })
        );
    }

    #[test]
    fn missing_payload_is_decode_error() {
        let err = decode_categories("{}").unwrap_err();
        assert!(matches!(err, Error::Decode(ref msg) if msg.contains("food_categories")));
    }

    #[test]
    fn null_payload_is_decode_error() {
        let err = decode_categories(r#"{"food_categories":null}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn null_error_falls_through_to_payload() {
        let env: Envelope<FoodSubCategories> = decode(
            br#"{"error":null,"food_sub_categories":{"food_sub_category":["Bagels"]}}"#,
            "food_sub_categories",
        )
        .unwrap();
        assert!(matches!(env, Envelope::Success(ref p) if p.sub_categories == vec!["Bagels"]));
    }

    #[test]
    fn payload_of_wrong_shape_is_decode_error() {
        let err = decode_categories(r#"{"food_categories":{"food_category":"nope"}}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        assert!(matches!(decode_categories("{not json"), Err(Error::Decode(_))));
        assert!(matches!(decode_categories(""), Err(Error::Decode(_))));
        assert!(matches!(decode_categories("[]"), Err(Error::Decode(_))));
    }

    #[test]
    fn into_result_maps_failure_to_api_error() {
        let env: Envelope<()> = Envelope::Failure(ErrorResponse {
            code: Some(106),
            message: "Invalid ID".to_string(),
        });
        let err = env.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID");
        assert!(matches!(err, Error::Api { code: Some(106), .. }));
    }
}
