/// The indentation unit used for Hjson output.
///
/// Built from the optional `--indent` width: absent means a single tab,
/// `Some(n)` means `n` spaces. `Some(0)` produces no indentation at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent(String);

impl Indent {
    /// Build from the CLI width argument.
    pub fn from_width(width: Option<usize>) -> Self {
        match width {
            None => Indent("\t".to_string()),
            Some(n) => Indent(" ".repeat(n)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::from_width(None)
    }
}

impl std::fmt::Display for Indent {
    /// Escaped form, so a tab shows up as `\t` in log output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.escape_debug())
    }
}
