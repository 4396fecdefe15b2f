use crate::indent::Indent;

/// Render a parsed JSON value as Hjson text.
///
/// Emission follows the reference encoder (hjson-go) with its default
/// options: member keys and string values are written without quotes
/// whenever rereading them cannot change their meaning, brackets of
/// non-empty containers inside an object go on their own line, root braces
/// are emitted, lines are separated by `\n`, and the result carries no
/// trailing newline. Strings that would be ambiguous quoteless fall back
/// to JSON-escaped quoting, which is always valid Hjson.
pub fn render(value: &serde_json::Value, indent: &Indent) -> String {
    let mut emitter = Emitter {
        out: String::new(),
        indent: indent.as_str(),
    };
    emitter.write_root(value);
    emitter.out
}

struct Emitter<'a> {
    out: String,
    indent: &'a str,
}

impl Emitter<'_> {
    fn write_root(&mut self, value: &serde_json::Value) {
        if is_nonempty_container(value) {
            self.write_container(value, 0);
        } else {
            self.write_scalar(value);
        }
    }

    /// `value` must be a non-empty object or array; the opening bracket is
    /// written at the current position.
    fn write_container(&mut self, value: &serde_json::Value, level: usize) {
        match value {
            serde_json::Value::Object(members) => {
                self.out.push('{');
                for (key, member) in members {
                    self.write_member(key, member, level + 1);
                }
                self.newline_indent(level);
                self.out.push('}');
            }
            serde_json::Value::Array(items) => {
                self.out.push('[');
                for item in items {
                    self.write_element(item, level + 1);
                }
                self.newline_indent(level);
                self.out.push(']');
            }
            _ => self.write_scalar(value),
        }
    }

    fn write_member(&mut self, key: &str, value: &serde_json::Value, level: usize) {
        self.newline_indent(level);
        if key_needs_quotes(key) {
            self.out.push_str(&quoted(key));
        } else {
            self.out.push_str(key);
        }
        self.out.push(':');
        if is_nonempty_container(value) {
            // Brackets of an object member open on their own line
            // (hjson-go with BracesSameLine off, its default).
            self.newline_indent(level);
            self.write_container(value, level);
        } else {
            self.out.push(' ');
            self.write_scalar(value);
        }
    }

    fn write_element(&mut self, value: &serde_json::Value, level: usize) {
        self.newline_indent(level);
        if is_nonempty_container(value) {
            self.write_container(value, level);
        } else {
            self.write_scalar(value);
        }
    }

    fn write_scalar(&mut self, value: &serde_json::Value) {
        match value {
            serde_json::Value::Null => self.out.push_str("null"),
            serde_json::Value::Bool(true) => self.out.push_str("true"),
            serde_json::Value::Bool(false) => self.out.push_str("false"),
            serde_json::Value::Number(n) => self.out.push_str(&n.to_string()),
            serde_json::Value::String(s) => {
                if string_needs_quotes(s) {
                    self.out.push_str(&quoted(s));
                } else {
                    self.out.push_str(s);
                }
            }
            serde_json::Value::Object(_) => self.out.push_str("{}"),
            serde_json::Value::Array(_) => self.out.push_str("[]"),
        }
    }

    fn newline_indent(&mut self, level: usize) {
        self.out.push('\n');
        for _ in 0..level {
            self.out.push_str(self.indent);
        }
    }
}

fn is_nonempty_container(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(members) => !members.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

/// JSON-escaped quoted form of a string.
fn quoted(s: &str) -> String {
    serde_json::to_string(s).expect("string serialization cannot fail")
}

/// A key can stay quoteless unless it is empty, contains whitespace,
/// punctuators, quote or comment characters (hjson-go `needsEscapeName`).
fn key_needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key.contains("//")
        || key.contains("/*")
        || key.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, ',' | '{' | '[' | '}' | ']' | ':' | '#' | '"' | '\'')
        })
}

/// A string value needs quotes when a quoteless reread would change its
/// meaning: leading/trailing whitespace, a leading punctuator or comment
/// marker, control characters, or a prefix that reads as a keyword or a
/// number (hjson-go `needsQuotes` / `startsWithKeyword` /
/// `startsWithNumber`).
fn string_needs_quotes(s: &str) -> bool {
    if s.is_empty() || s.trim().len() != s.len() {
        return true;
    }
    if s.starts_with(['"', '\'', '#', '{', '}', '[', ']', ':', ','])
        || s.starts_with("//")
        || s.starts_with("/*")
    {
        return true;
    }
    if s.chars().any(|c| c.is_control()) {
        return true;
    }
    starts_with_keyword(s) || starts_with_number(s)
}

/// `true`/`false`/`null` followed by nothing, or by whitespace and a
/// separator or comment, would parse as the keyword.
fn starts_with_keyword(s: &str) -> bool {
    let Some(rest) = ["true", "false", "null"]
        .iter()
        .find_map(|kw| s.strip_prefix(kw))
    else {
        return false;
    };
    let rest = rest.trim_start();
    rest.is_empty() || is_separator_or_comment(rest)
}

/// A leading number followed by nothing, or by whitespace and a separator
/// or comment, would parse as that number. Deliberately broader than the
/// reference encoder (a leading zero still counts): quoting too much is
/// always safe, a quoteless reread as a number never is.
fn starts_with_number(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    let Some(rest) = eat_digits(rest) else {
        return false;
    };
    let rest = match rest.strip_prefix('.') {
        Some(frac) => match eat_digits(frac) {
            Some(rest) => rest,
            None => return false,
        },
        None => rest,
    };
    let rest = match rest.strip_prefix(['e', 'E']) {
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            match eat_digits(exp) {
                Some(rest) => rest,
                None => return false,
            }
        }
        None => rest,
    };
    let rest = rest.trim_start();
    rest.is_empty() || is_separator_or_comment(rest)
}

/// Strip one or more leading ASCII digits; `None` when there are none.
fn eat_digits(s: &str) -> Option<&str> {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == s.len() {
        None
    } else {
        Some(rest)
    }
}

fn is_separator_or_comment(rest: &str) -> bool {
    rest.starts_with([',', ']', '}', '#']) || rest.starts_with("//") || rest.starts_with("/*")
}
