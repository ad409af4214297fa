// Envelope shape validation for the homework-statuses API response

use serde_json::Value;

use crate::error::{Result, ShapeError};

/// Validate the API response envelope and pick out the most recent homework.
///
/// Checks run in a fixed order, stopping at the first violation:
/// object → `homeworks` key present → value is an array → array non-empty.
/// On success the first element is returned untouched; its inner fields are
/// the formatter's problem, not ours.
pub fn check_response(response: &Value) -> Result<&Value> {
    let envelope = response
        .as_object()
        .ok_or(ShapeError::NotAnObject)?;

    let homeworks = envelope
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworksKey)?;

    let list = homeworks
        .as_array()
        .ok_or(ShapeError::HomeworksNotAnArray)?;

    let first = list.first().ok_or(ShapeError::HomeworksEmpty)?;
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;
    use serde_json::json;

    fn shape_error(value: &Value) -> ShapeError {
        match check_response(value) {
            Err(NotifyError::Shape(shape)) => shape,
            other => panic!("expected a shape error, got {other:?}"),
        }
    }

    #[test]
    fn returns_the_first_homework_unchanged() {
        let envelope = json!({
            "homeworks": [
                {"status": "approved", "homework_name": "hw1", "extra": 42},
                {"status": "rejected", "homework_name": "hw0"}
            ],
            "current_date": 1700000000
        });

        let first = check_response(&envelope).unwrap();
        assert_eq!(
            first,
            &json!({"status": "approved", "homework_name": "hw1", "extra": 42})
        );
    }

    #[test]
    fn rejects_a_non_object_envelope() {
        assert_eq!(shape_error(&json!([1, 2, 3])), ShapeError::NotAnObject);
        assert_eq!(shape_error(&json!("homeworks")), ShapeError::NotAnObject);
        assert_eq!(shape_error(&json!(null)), ShapeError::NotAnObject);
    }

    #[test]
    fn rejects_a_missing_homeworks_key() {
        let envelope = json!({"current_date": 1700000000});
        assert_eq!(shape_error(&envelope), ShapeError::MissingHomeworksKey);
    }

    #[test]
    fn rejects_a_non_array_homeworks_value() {
        let envelope = json!({"homeworks": {"status": "approved"}});
        assert_eq!(shape_error(&envelope), ShapeError::HomeworksNotAnArray);
    }

    #[test]
    fn rejects_an_empty_homeworks_array() {
        let envelope = json!({"homeworks": []});
        assert_eq!(shape_error(&envelope), ShapeError::HomeworksEmpty);
    }

    #[test]
    fn the_object_check_fires_before_the_key_check() {
        // A non-object also has no `homeworks` key; the first rule in the
        // order is the one that must report.
        assert_eq!(shape_error(&json!(7)), ShapeError::NotAnObject);
    }
}
