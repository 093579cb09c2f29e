//! Wire formats for descriptors.
//!
//! Two textual shapes are supported:
//!
//! - the flat form, one `name = "value"` declaration per line, which is the
//!   canonical persisted format;
//! - the generated-header form, one `#define MACRO "value"` per line, which
//!   is what compile-time consumers of the snapshot include.
//!
//! Both parsers return raw `(key, value, line)` entries; the exactly-once
//! and value-level checks live in [`crate::descriptor`].

use crate::error::{DescriptorError, Result};
use crate::key::ConfigKey;

/// Parse the flat `name = "value"` format.
///
/// `#` comment lines and blank lines are permitted in sources, though the
/// emitter never produces them.
pub(crate) fn parse_flat(text: &str) -> Result<Vec<(ConfigKey, String, usize)>> {
    let mut entries = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, rest)) = line.split_once('=') else {
            return Err(DescriptorError::InvalidLine {
                line: line_no,
                reason: "expected `name = \"value\"`".to_string(),
            });
        };

        let key: ConfigKey = name.trim().parse()?;
        let value = unquote(rest.trim(), line_no)?;
        entries.push((key, value, line_no));
    }
    Ok(entries)
}

/// Parse the generated-header form.
///
/// Block comments (generated headers usually open with a license block) and
/// blank lines are skipped; everything else must be a `#define`.
pub(crate) fn parse_header(text: &str) -> Result<Vec<(ConfigKey, String, usize)>> {
    let mut entries = Vec::new();
    let mut in_comment = false;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut line = raw_line.trim();

        if in_comment {
            match line.find("*/") {
                Some(pos) => {
                    in_comment = false;
                    line = line[pos + 2..].trim();
                    if line.is_empty() {
                        continue;
                    }
                }
                None => continue,
            }
        }
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("/*") {
            if !rest.contains("*/") {
                in_comment = true;
            }
            continue;
        }

        let Some(rest) = line.strip_prefix("#define") else {
            return Err(DescriptorError::InvalidLine {
                line: line_no,
                reason: "expected `#define MACRO \"value\"`".to_string(),
            });
        };
        if !rest.starts_with(char::is_whitespace) {
            return Err(DescriptorError::InvalidLine {
                line: line_no,
                reason: "expected whitespace after #define".to_string(),
            });
        }
        let rest = rest.trim_start();
        let macro_end = rest
            .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
            .unwrap_or(rest.len());
        let (macro_name, rest) = rest.split_at(macro_end);
        if macro_name.is_empty() {
            return Err(DescriptorError::InvalidLine {
                line: line_no,
                reason: "missing macro name after #define".to_string(),
            });
        }

        let key = ConfigKey::from_macro(macro_name)?;
        let value = unquote(rest.trim(), line_no)?;
        entries.push((key, value, line_no));
    }
    Ok(entries)
}

/// Emit the flat format, in the given entry order.
pub(crate) fn emit_flat<'a>(entries: impl Iterator<Item = (ConfigKey, &'a str)>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(key.name());
        out.push_str(" = ");
        out.push_str(&quote(value));
        out.push('\n');
    }
    out
}

/// Emit the generated-header form, in the given entry order.
pub(crate) fn emit_header<'a>(entries: impl Iterator<Item = (ConfigKey, &'a str)>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str("#define ");
        out.push_str(&key.macro_name());
        out.push(' ');
        out.push_str(&quote(value));
        out.push('\n');
    }
    out
}

/// Double-quote a value, escaping backslashes and embedded quotes.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Parse a double-quoted value; the closing quote must end the line.
fn unquote(raw: &str, line_no: usize) -> Result<String> {
    let invalid = |reason: &str| DescriptorError::InvalidLine {
        line: line_no,
        reason: reason.to_string(),
    };

    let mut chars = raw.chars();
    if chars.next() != Some('"') {
        return Err(invalid("value must be double-quoted"));
    }

    let mut value = String::new();
    let mut closed = false;
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                closed = true;
                break;
            }
            '\\' => match chars.next() {
                Some('\\') => value.push('\\'),
                Some('"') => value.push('"'),
                Some(other) => {
                    return Err(invalid(&format!("unknown escape `\\{}`", other)));
                }
                None => return Err(invalid("dangling escape at end of line")),
            },
            other => value.push(other),
        }
    }

    if !closed {
        return Err(invalid("unterminated quoted value"));
    }
    if !chars.as_str().trim().is_empty() {
        return Err(invalid("trailing content after closing quote"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_unquote_round_trip() {
        for value in [
            "",
            "/opt/app/bin",
            "so",
            ".:",
            r#" './configure' '--prefix=/opt/app' '--enable-mail'"#,
            r#"back\slash and "quote""#,
        ] {
            let quoted = quote(value);
            assert_eq!(unquote(&quoted, 1).unwrap(), value);
        }
    }

    #[test]
    fn test_flat_parse_accepts_comments_and_blanks() {
        let text = "# layout\n\ninstall_prefix = \"/opt/app\"\n";
        let entries = parse_flat(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, ConfigKey::InstallPrefix);
        assert_eq!(entries[0].1, "/opt/app");
        assert_eq!(entries[0].2, 3);
    }

    #[test]
    fn test_flat_parse_rejects_missing_equals() {
        let err = parse_flat("install_prefix \"/opt/app\"\n").unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_flat_parse_rejects_unquoted_value() {
        let err = parse_flat("install_prefix = /opt/app\n").unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_flat_parse_rejects_trailing_garbage() {
        let err = parse_flat("install_prefix = \"/opt/app\" extra\n").unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_flat_parse_rejects_unknown_key() {
        let err = parse_flat("prefix = \"/opt/app\"\n").unwrap_err();
        assert!(matches!(err, DescriptorError::UnknownKey { name } if name == "prefix"));
    }

    #[test]
    fn test_header_parse_skips_license_block() {
        let text = "/*\n * generated, do not edit\n */\n\n#define INSTALL_PREFIX \"/opt/app\"\n";
        let entries = parse_header(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, ConfigKey::InstallPrefix);
    }

    #[test]
    fn test_header_parse_rejects_non_define() {
        let err = parse_header("#include <stdio.h>\n").unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidLine { .. }));
    }

    #[test]
    fn test_header_parse_rejects_unknown_macro() {
        let err = parse_header("#define SOMETHING_ELSE \"x\"\n").unwrap_err();
        assert!(matches!(err, DescriptorError::UnknownKey { .. }));
    }

    #[test]
    fn test_emitters_quote_embedded_quotes() {
        let value = r#"a "quoted" part"#;
        let flat = emit_flat([(ConfigKey::ConfigureCommand, value)].into_iter());
        assert_eq!(flat, "configure_command = \"a \\\"quoted\\\" part\"\n");
        let parsed = parse_flat(&flat).unwrap();
        assert_eq!(parsed[0].1, value);
    }
}
