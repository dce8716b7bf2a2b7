//! Placeholder substitution and markup escaping.
//!
//! Placeholders are written `$name` or `${name}`; `$$` yields a literal `$`.
//! A placeholder without a value is left in the output exactly as written, so
//! a template typo shows up on the printed card instead of aborting the batch.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Replaces placeholders in `template` with values from `values`.
///
/// Substituted values are inserted verbatim and never re-scanned.
///
/// # Examples
///
/// ```ignore
/// let out = substitute("Dear $name, see ${other}", &[("name", "resident")]);
/// assert_eq!(out, "Dear resident, see ${other}");
/// ```
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }

            let name = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str());

            name.and_then(|name| {
                values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
            })
            .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Escapes `#`, which LaTeX reserves for macro parameters.
///
/// House numbers such as `"123 #B"` are the usual source. No other character
/// is touched.
pub fn escape_hash(text: &str) -> Cow<'_, str> {
    if text.contains('#') {
        Cow::Owned(text.replace('#', "\\#"))
    } else {
        Cow::Borrowed(text)
    }
}
