//! Response Parsing Module
//!
//! Turns raw upstream bodies into the ordered string sequences the cache
//! stores. All parsers are total: a malformed body degrades to an empty
//! sequence, it never surfaces an error to the caller.

use serde_json::Value;

// == JSON Envelopes ==
/// Extracts the `"classes"` string array from an all-classes response.
pub fn class_list(raw: &str) -> Vec<String> {
    string_array(raw, "classes")
}

/// Extracts the names of the `"classes"` objects from a
/// main-application-classes-names response.
pub fn main_class_names(raw: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    let Some(classes) = value.get("classes").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut names = Vec::with_capacity(classes.len());
    for class in classes {
        match class.get("name").and_then(Value::as_str) {
            Some(name) => names.push(name.to_string()),
            // One bad element invalidates the envelope as a whole
            None => return Vec::new(),
        }
    }
    names
}

/// Extracts the `"allClassesInPackage"` string array from a
/// main-application-classes-code response.
pub fn main_class_code(raw: &str) -> Vec<String> {
    string_array(raw, "allClassesInPackage")
}

fn string_array(raw: &str, key: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    let Some(array) = value.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut items = Vec::with_capacity(array.len());
    for element in array {
        match element.as_str() {
            Some(s) => items.push(s.to_string()),
            None => return Vec::new(),
        }
    }
    items
}

// == Plain Text ==
/// Splits a plain-text response into lines.
pub fn lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_valid() {
        let raw = r#"{"classes": ["com.app.Main", "com.app.Util"]}"#;
        assert_eq!(class_list(raw), vec!["com.app.Main", "com.app.Util"]);
    }

    #[test]
    fn test_class_list_empty_array() {
        assert!(class_list(r#"{"classes": []}"#).is_empty());
    }

    #[test]
    fn test_class_list_malformed_json() {
        assert!(class_list("{ not json").is_empty());
    }

    #[test]
    fn test_class_list_missing_key() {
        assert!(class_list(r#"{"other": []}"#).is_empty());
    }

    #[test]
    fn test_class_list_key_not_an_array() {
        assert!(class_list(r#"{"classes": "com.app.Main"}"#).is_empty());
    }

    #[test]
    fn test_class_list_non_string_element() {
        assert!(class_list(r#"{"classes": ["com.app.Main", 42]}"#).is_empty());
    }

    #[test]
    fn test_main_class_names_valid() {
        let raw = r#"{"classes": [{"name": "com.app.Main"}, {"name": "com.app.App"}]}"#;
        assert_eq!(main_class_names(raw), vec!["com.app.Main", "com.app.App"]);
    }

    #[test]
    fn test_main_class_names_missing_name_field() {
        let raw = r#"{"classes": [{"name": "com.app.Main"}, {"code": "..."}]}"#;
        assert!(main_class_names(raw).is_empty());
    }

    #[test]
    fn test_main_class_names_malformed_json() {
        assert!(main_class_names("[").is_empty());
    }

    #[test]
    fn test_main_class_code_valid() {
        let raw = r#"{"allClassesInPackage": ["class A {}", "class B {}"]}"#;
        assert_eq!(main_class_code(raw), vec!["class A {}", "class B {}"]);
    }

    #[test]
    fn test_main_class_code_missing_key() {
        assert!(main_class_code(r#"{"classes": ["x"]}"#).is_empty());
    }

    #[test]
    fn test_lines_splits_on_newlines() {
        let raw = "void onCreate(Bundle)\nvoid onDestroy()\n";
        assert_eq!(lines(raw), vec!["void onCreate(Bundle)", "void onDestroy()"]);
    }

    #[test]
    fn test_lines_handles_crlf() {
        assert_eq!(lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_lines_empty_input() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_lines_single_line_no_terminator() {
        assert_eq!(lines("only"), vec!["only"]);
    }
}
