//! Field escaping for the WiFi configuration string format.
//!
//! SSIDs and passwords are embedded as fields of a `;`-delimited format, so
//! any of the format's metacharacters (`\` `;` `:` `,` `"`) appearing in
//! user input must be prefixed with a backslash. A conforming scanner strips
//! the escapes and recovers the original bytes exactly.

/// The characters that corrupt field boundaries if left unescaped.
///
/// Backslash is listed first and must be escaped first: escaping it after
/// any other character would double-escape the markers that pass introduced.
pub const METACHARACTERS: [char; 5] = ['\\', ';', ':', ',', '"'];

/// Escapes format metacharacters so `text` is safe to embed as one field.
///
/// Every occurrence of `\`, `;`, `:`, `,` and `"` is prefixed with a single
/// backslash. The backslash pass runs strictly before the others.
///
/// Empty input yields empty output.
///
/// # Example
///
/// ```rust
/// use wifiqr_core::escape::escape;
///
/// assert_eq!(escape("Caf;e"), "Caf\\;e");
/// assert_eq!(escape(r"a\;b"), r"a\\\;b");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    // Backslash must be escaped first to avoid double escaping
    let mut escaped = text.replace('\\', "\\\\");
    escaped = escaped.replace(';', "\\;");
    escaped = escaped.replace(':', "\\:");
    escaped = escaped.replace(',', "\\,");
    escaped = escaped.replace('"', "\\\"");
    escaped
}

/// Reverses [`escape`]: strips one backslash from each escaped metacharacter.
///
/// For every string `s`, `unescape(&escape(s)) == s`. A trailing lone
/// backslash (which [`escape`] never produces) is preserved as-is.
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(escape(""), "");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape("HomeNet"), "HomeNet");
        assert_eq!(escape("password123"), "password123");
    }

    #[test]
    fn test_each_metacharacter_is_escaped() {
        assert_eq!(escape("\\"), "\\\\");
        assert_eq!(escape(";"), "\\;");
        assert_eq!(escape(":"), "\\:");
        assert_eq!(escape(","), "\\,");
        assert_eq!(escape("\""), "\\\"");
    }

    #[test]
    fn test_backslash_escaped_before_other_metacharacters() {
        // Input a\;b: the backslash becomes \\ and the semicolon becomes \;
        // giving a\\\;b. Any other ordering corrupts the payload.
        assert_eq!(escape("a\\;b"), "a\\\\\\;b");
    }

    #[test]
    fn test_mixed_metacharacters() {
        assert_eq!(escape("Caf;e"), "Caf\\;e");
        assert_eq!(escape("p,ass\\word"), "p\\,ass\\\\word");
        assert_eq!(escape("a:b,c;d\"e"), "a\\:b\\,c\\;d\\\"e");
    }

    #[test]
    fn test_unescape_inverts_escape() {
        let inputs = [
            "",
            "HomeNet",
            "Caf;e",
            "p,ass\\word",
            "a\\;b",
            "\\\\;;::,,\"\"",
            "ends with backslash\\",
            "unicode: caf\u{e9} \u{1f4f6}",
        ];
        for input in inputs {
            assert_eq!(unescape(&escape(input)), input, "round trip of {input:?}");
        }
    }

    #[test]
    fn test_multibyte_text_untouched() {
        assert_eq!(escape("caf\u{e9}"), "caf\u{e9}");
    }
}
