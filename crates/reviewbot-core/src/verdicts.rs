// Verdict table and notification formatting

use serde_json::Value;

use crate::error::{NotifyError, Result};

/// Known review statuses and their human-readable verdicts.
///
/// The sentences are fixed and user-facing; do not rephrase them.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Look up the verdict sentence for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}

/// Build the chat notification for a homework record.
///
/// The status is checked against the verdict table before the name is
/// looked at, so an unknown status wins over a missing name.
pub fn parse_status(homework: &Value) -> Result<String> {
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let verdict = verdict_for(status)
        .ok_or_else(|| NotifyError::content(format!("unknown homework status `{status}`")))?;

    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| NotifyError::content("homework name is missing"))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_every_known_status() {
        for (status, verdict) in HOMEWORK_VERDICTS {
            let homework = json!({"status": status, "homework_name": "hw1"});
            let message = parse_status(&homework).unwrap();
            assert_eq!(
                message,
                format!("Изменился статус проверки работы \"hw1\". {verdict}")
            );
        }
    }

    #[test]
    fn approved_matches_the_fixed_template_exactly() {
        let homework = json!({"status": "approved", "homework_name": "hw1"});
        assert_eq!(
            parse_status(&homework).unwrap(),
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn rejects_an_unknown_status() {
        let homework = json!({"status": "burned", "homework_name": "hw1"});
        let error = parse_status(&homework).unwrap_err();
        assert!(matches!(error, NotifyError::Content(_)));
        assert!(error.to_string().contains("burned"));
    }

    #[test]
    fn rejects_a_missing_status_as_unknown() {
        let homework = json!({"homework_name": "hw1"});
        assert!(matches!(
            parse_status(&homework),
            Err(NotifyError::Content(_))
        ));
    }

    #[test]
    fn rejects_a_missing_name() {
        let homework = json!({"status": "approved"});
        let error = parse_status(&homework).unwrap_err();
        assert!(error.to_string().contains("name is missing"));
    }

    #[test]
    fn unknown_status_wins_over_missing_name() {
        let homework = json!({"status": "burned"});
        let error = parse_status(&homework).unwrap_err();
        assert!(error.to_string().contains("unknown homework status"));
    }
}
