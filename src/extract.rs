use log::debug;
use serde_json::Value;

use crate::error::{DemoError, Result};
use crate::model::Nutrition;

/// The first choice of a completion response
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub nutrition: Option<Nutrition>,
}

/// Parse a raw response body and pull out `choices[0]`.
///
/// Invalid JSON is a [`DemoError::ParseFailure`] that keeps the body;
/// missing or empty `choices`, or a non-string `text`, is a
/// [`DemoError::UnexpectedResponseShape`].
pub fn extract_completion(raw_body: &str) -> Result<Completion> {
    let response: Value = serde_json::from_str(raw_body).map_err(|e| DemoError::ParseFailure {
        message: e.to_string(),
        body: raw_body.to_string(),
    })?;
    debug!("{:?}", response);

    let choices = response
        .get("choices")
        .ok_or_else(|| DemoError::UnexpectedResponseShape("missing `choices`".to_string()))?
        .as_array()
        .ok_or_else(|| {
            DemoError::UnexpectedResponseShape("`choices` is not an array".to_string())
        })?;
    let first = choices
        .first()
        .ok_or_else(|| DemoError::UnexpectedResponseShape("`choices` is empty".to_string()))?;
    let text = first
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DemoError::UnexpectedResponseShape(
                "`choices[0].text` is missing or not a string".to_string(),
            )
        })?;

    Ok(Completion {
        text: text.to_string(),
        nutrition: extract_nutrition(first),
    })
}

/// Read `attributes.nutrition` from one choice. Anything short of three
/// numeric fields is the "unavailable" state, not an error.
pub fn extract_nutrition(choice: &Value) -> Option<Nutrition> {
    let nutrition = choice.get("attributes")?.get("nutrition")?;
    let field = |name: &str| nutrition.get(name).and_then(Value::as_f64);

    match (field("carbohydrates"), field("protein"), field("fat")) {
        (Some(carbohydrates), Some(protein), Some(fat)) => Some(Nutrition {
            carbohydrates,
            protein,
            fat,
        }),
        _ => {
            debug!("Ignoring incomplete nutrition block: {}", nutrition);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_first_text() {
        let completion = extract_completion(r#"{"choices":[{"text":"hello"}]}"#).unwrap();
        assert_eq!(completion.text, "hello");
        assert_eq!(completion.nutrition, None);
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let completion =
            extract_completion(r#"{"choices":[{"text":"first"},{"text":"second"}]}"#).unwrap();
        assert_eq!(completion.text, "first");
    }

    #[test]
    fn test_empty_choices_is_shape_error() {
        let result = extract_completion(r#"{"choices":[]}"#);
        assert!(matches!(result, Err(DemoError::UnexpectedResponseShape(_))));
    }

    #[test]
    fn test_missing_or_wrong_shapes() {
        for body in [
            r#"{}"#,
            r#"{"error":{"message":"content policy"}}"#,
            r#"{"choices":{"text":"not an array"}}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"text":42}]}"#,
            r#"{"choices":[null]}"#,
            r#"[]"#,
        ] {
            let result = extract_completion(body);
            assert!(
                matches!(result, Err(DemoError::UnexpectedResponseShape(_))),
                "body {body} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_invalid_json_keeps_body() {
        let body = "<html>502 Bad Gateway</html>";
        match extract_completion(body) {
            Err(DemoError::ParseFailure { message, body: kept }) => {
                assert!(!message.is_empty());
                assert_eq!(kept, body);
            }
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_nutrition_present() {
        let body = r#"{"choices":[{"text":"menu","attributes":{"nutrition":{"carbohydrates":10,"protein":5,"fat":2}}}]}"#;
        let completion = extract_completion(body).unwrap();
        assert_eq!(
            completion.nutrition,
            Some(Nutrition {
                carbohydrates: 10.0,
                protein: 5.0,
                fat: 2.0
            })
        );
    }

    #[test]
    fn test_nutrition_unavailable() {
        assert_eq!(extract_nutrition(&json!({"text": "menu"})), None);
        assert_eq!(extract_nutrition(&json!({"text": "menu", "attributes": {}})), None);
        assert_eq!(
            extract_nutrition(&json!({
                "attributes": {"nutrition": {"carbohydrates": 10, "protein": 5}}
            })),
            None
        );
        assert_eq!(
            extract_nutrition(&json!({
                "attributes": {"nutrition": {"carbohydrates": "10g", "protein": 5, "fat": 2}}
            })),
            None
        );
    }

    #[test]
    fn test_fractional_nutrition_values_unchanged() {
        let choice = json!({
            "attributes": {"nutrition": {"carbohydrates": 12.5, "protein": 0.25, "fat": 3}}
        });
        assert_eq!(
            extract_nutrition(&choice),
            Some(Nutrition {
                carbohydrates: 12.5,
                protein: 0.25,
                fat: 3.0
            })
        );
    }
}
