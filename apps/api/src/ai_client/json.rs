//! Helpers for pulling a JSON object out of a model's text reply.

use serde_json::Value;

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

/// Returns the first balanced `{...}` object in `text`.
///
/// Braces inside string literals are ignored, so values such as `"C{}"`
/// do not end the object early.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let text = strip_json_fences(text);
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Lists the `required` camelCase keys absent from `value`.
/// A key also counts as present under its snake_case spelling.
pub fn missing_keys(value: &Value, required: &[&str]) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return required.iter().map(|k| k.to_string()).collect();
    };

    required
        .iter()
        .filter(|key| !object.contains_key(**key) && !object.contains_key(&to_snake_case(key)))
        .map(|key| key.to_string())
        .collect()
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_first_of_two_objects() {
        let text = "a {\"x\": 1} b {\"y\": 2}";
        assert_eq!(extract_json_object(text), Some("{\"x\": 1}"));
    }

    #[test]
    fn test_extract_nested_object() {
        let text = "result: {\"a\": {\"b\": [1, {\"c\": 2}]}} done";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": [1, {\"c\": 2}]}}"));
    }

    #[test]
    fn test_extract_ignores_braces_in_strings() {
        let text = r#"{"skill": "C{}", "note": "say \"}\" twice"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_extract_unbalanced_is_none() {
        assert_eq!(extract_json_object("{\"a\": 1"), None);
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_missing_keys_accepts_snake_case() {
        let value = json!({"technical_skills": [], "softSkills": []});
        assert!(missing_keys(&value, &["technicalSkills", "softSkills"]).is_empty());
    }

    #[test]
    fn test_missing_keys_on_non_object() {
        assert_eq!(missing_keys(&json!([1, 2]), &["jobs"]), vec!["jobs".to_string()]);
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("learningTimeWeeks"), "learning_time_weeks");
        assert_eq!(to_snake_case("jobs"), "jobs");
    }
}
