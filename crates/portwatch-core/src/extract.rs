//! Recovery of script variables embedded in switch HTML.
//!
//! The web interface ships its data as JavaScript assignments inside the
//! page, e.g.
//!
//! ```text
//! var max_port_num = 8;
//! var all_info = {
//! state:[1,1,1,1,1,1,1,1,0,0],
//! link_status:[6,0,0,5,0,0,0,6,0,0],
//! pkts:[...]
//! };
//! ```
//!
//! There is no schema. Every function here is total: a missing or mangled
//! variable yields an empty/`None` result, never an error, and callers
//! substitute defaults. All pattern matching against page text lives in
//! this module.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Variable name -> raw, unparsed value text.
pub type KeyValueBlock = HashMap<String, String>;

/// Separator between two entries of an object literal: a comma that ends a line.
static VALUE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",[ \t\r]*\n").expect("valid pattern"));

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

/// Extract the entries of the first `var <name> = { ... };` object literal.
///
/// Entries are split on line-ending commas, then on the first `:` of each
/// fragment; key and value are trimmed. Values are kept verbatim (quotes,
/// brackets and inner colons included). Fragments without a colon are
/// skipped. Returns an empty block when the assignment doesn't exist.
pub fn extract_object(text: &str, name: &str) -> KeyValueBlock {
    let pattern = format!(r"(?s)var\s+{}\s*=\s*\{{(.*?)\}};", regex::escape(name));
    let Some(re) = compile(&pattern) else {
        return KeyValueBlock::new();
    };
    let Some(body) = re.captures(text).and_then(|c| c.get(1)) else {
        return KeyValueBlock::new();
    };

    VALUE_BREAK
        .split(body.as_str())
        .filter_map(|fragment| fragment.split_once(':'))
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Every ASCII digit of a raw value, in order, as numbers.
///
/// `"[6,0,5]"`, `"605"` and `"\"605\""` all give `[6, 0, 5]`.
pub fn digits(value: &str) -> Vec<u8> {
    value
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Number of entries in a raw sequence value.
///
/// With commas present, counts the comma-separated tokens that carry at
/// least one digit; otherwise counts individual digits.
pub fn sequence_len(value: &str) -> usize {
    if value.contains(',') {
        value
            .split(',')
            .filter(|token| token.bytes().any(|b| b.is_ascii_digit()))
            .count()
    } else {
        value.bytes().filter(u8::is_ascii_digit).count()
    }
}

/// A numeric declaration such as `var max_port_num = 24;` or `max_port_num:24`.
///
/// `name` must stand alone: looking up `port_num` does not match
/// `max_port_num` or `poe_port_num`.
pub fn declared_number(text: &str, name: &str) -> Option<u32> {
    let pattern = format!(r"\b{}\s*[=:]\s*(\d+)", regex::escape(name));
    compile(&pattern)?
        .captures(text)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// The `field:[...]` list inside the `var <object> = { ... }` assignment.
///
/// Entries are trimmed and stripped of surrounding quotes; empty entries
/// are kept so indexes line up with port positions. `None` when either
/// the object or the list can't be located.
pub fn quoted_list(text: &str, object: &str, field: &str) -> Option<Vec<String>> {
    let pattern = format!(
        r"(?s)var\s+{}\s*=\s*\{{.*?\b{}\s*:\s*\[([^\]]*)\]",
        regex::escape(object),
        regex::escape(field)
    );
    let inner = compile(&pattern)?.captures(text)?.get(1)?.as_str();

    if inner.trim().is_empty() {
        return Some(Vec::new());
    }

    Some(
        inner
            .split(',')
            .map(|entry| entry.trim().trim_matches(['"', '\'']).trim().to_owned())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_break_only_splits_line_ending_commas() {
        let parts: Vec<_> = VALUE_BREAK.split("a:[1,2],\t\r\nb:3,\nc:4").collect();
        assert_eq!(parts, ["a:[1,2]", "b:3", "c:4"]);
    }

    #[test]
    fn extracts_quoted_values_verbatim() {
        let body = "var all_info = {state:\"123\",\nlink_status:\"456\"};";
        let block = extract_object(body, "all_info");

        assert_eq!(block.len(), 2);
        assert_eq!(block["state"], "\"123\"");
        assert_eq!(block["link_status"], "\"456\"");
    }

    #[test]
    fn extracts_multiline_arrays_with_crlf() {
        let body = "<script>\r\nvar all_info = {\r\n  state:[1,1,0,0],\r\n  link_status:[6,0,5,0],\r\n  pkts:[0,0]\r\n};\r\n</script>";
        let block = extract_object(body, "all_info");

        assert_eq!(block["state"], "[1,1,0,0]");
        assert_eq!(block["link_status"], "[6,0,5,0]");
        assert_eq!(block["pkts"], "[0,0]");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let body = "var info = {\nurl:\"http://10.0.0.1:80\",\nname:\"sw\"\n};";
        let block = extract_object(body, "info");
        assert_eq!(block["url"], "\"http://10.0.0.1:80\"");
    }

    #[test]
    fn skips_fragments_without_colon() {
        let body = "var info = {\ngarbage,\nstate:\"1\"\n};";
        let block = extract_object(body, "info");
        assert_eq!(block.len(), 1);
        assert_eq!(block["state"], "\"1\"");
    }

    #[test]
    fn missing_object_is_empty() {
        assert!(extract_object("<html>nothing here</html>", "all_info").is_empty());
        // Unterminated literal.
        assert!(extract_object("var all_info = {state:\"1\"", "all_info").is_empty());
    }

    #[test]
    fn first_assignment_wins() {
        let body = "var a = {k:\"1\"};\nvar a = {k:\"2\"};";
        assert_eq!(extract_object(body, "a")["k"], "\"1\"");
    }

    #[test]
    fn name_is_matched_literally() {
        let body = "var all.info = {k:1};";
        assert!(extract_object(body, "all_info").is_empty());
        assert_eq!(extract_object(body, "all.info")["k"], "1");
    }

    #[test]
    fn digits_ignore_punctuation() {
        assert_eq!(digits("[6,0,5]"), [6, 0, 5]);
        assert_eq!(digits("\"605\""), [6, 0, 5]);
        assert!(digits("").is_empty());
    }

    #[test]
    fn sequence_len_counts_tokens_or_digits() {
        assert_eq!(sequence_len("[1,1,1,0,0]"), 5);
        assert_eq!(sequence_len("[10,11,12]"), 3);
        assert_eq!(sequence_len("[1,1,]"), 2);
        assert_eq!(sequence_len("\"11110000\""), 8);
        assert_eq!(sequence_len(""), 0);
    }

    #[test]
    fn declared_number_forms() {
        assert_eq!(declared_number("var max_port_num = 24;", "max_port_num"), Some(24));
        assert_eq!(declared_number("max_port_num=24", "max_port_num"), Some(24));
        assert_eq!(declared_number("{port_num:10,", "port_num"), Some(10));
        assert_eq!(declared_number("var port_num = x;", "port_num"), None);
    }

    #[test]
    fn declared_number_needs_whole_identifier() {
        let body = "var max_port_num = 24;\nvar poe_port_num = 4;";
        assert_eq!(declared_number(body, "port_num"), None);
        assert_eq!(declared_number(body, "poe_port_num"), Some(4));
    }

    #[test]
    fn quoted_list_strips_quotes() {
        let body = "var portRecoveryConfig = {\nstate:[1,1],\nip:[\"10.0.0.9\", \"\" ,'10.0.0.7',\"\"]\n};";
        assert_eq!(
            quoted_list(body, "portRecoveryConfig", "ip"),
            Some(vec![
                "10.0.0.9".to_owned(),
                String::new(),
                "10.0.0.7".to_owned(),
                String::new(),
            ])
        );
    }

    #[test]
    fn quoted_list_missing_or_empty() {
        let no_list = "var portRecoveryConfig = {\nstate:[1,1]\n};";
        assert_eq!(quoted_list(no_list, "portRecoveryConfig", "ip"), None);

        let empty = "var portRecoveryConfig = {ip:[]};";
        assert_eq!(quoted_list(empty, "portRecoveryConfig", "ip"), Some(Vec::new()));

        let wrong_field = "var portRecoveryConfig = {vip:[\"1\"]};";
        assert_eq!(quoted_list(wrong_field, "portRecoveryConfig", "ip"), None);
    }
}
