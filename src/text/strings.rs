//! ASCII case conversion and delimiter-based split/join.

/// Convert a string to uppercase, byte-wise over ASCII letters.
///
/// Non-alphabetic and non-ASCII bytes pass through unchanged.
pub fn to_upper(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Convert a string to lowercase, byte-wise over ASCII letters.
///
/// Non-alphabetic and non-ASCII bytes pass through unchanged.
pub fn to_lower(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// Split `input` on occurrences of a single delimiter character.
///
/// Empty segments between consecutive delimiters and at the start of the
/// input are preserved, but a trailing empty segment (input ending with the
/// delimiter) is dropped:
///
/// ```
/// use textkit::text::split;
///
/// assert_eq!(split("a,,b,", ','), vec!["a", "", "b"]);
/// assert!(split("", ',').is_empty());
/// ```
///
/// An empty input produces an empty vector, not `[""]`. Callers that need a
/// lossless round-trip through [`join`] must ensure the input does not end
/// with the delimiter.
pub fn split(input: &str, delimiter: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut parts: Vec<String> = input.split(delimiter).map(str::to_owned).collect();

    // str::split emits a trailing "" for delimiter-terminated input; the
    // contract here is to drop exactly that one segment.
    if input.ends_with(delimiter) {
        parts.pop();
    }

    parts
}

/// Join a sequence of strings with `delimiter` between consecutive elements.
///
/// An empty sequence yields an empty string.
pub fn join<S: AsRef<str>>(parts: &[S], delimiter: &str) -> String {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut result = first.as_ref().to_owned();
    for part in iter {
        result.push_str(delimiter);
        result.push_str(part.as_ref());
    }
    result
}
