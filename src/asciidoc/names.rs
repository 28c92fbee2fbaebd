use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9._]+").expect("valid hard-coded pattern"));

/// Derives a filesystem- and include-safe identifier from a chain of raw
/// segments.
///
/// Each segment is lowercased, runs of characters outside `[a-z0-9._]`
/// collapse to a single `-`, and leading/trailing dashes are trimmed.
/// Segments that normalize to nothing are dropped; the survivors are joined
/// with `-`.
///
/// Normalization is not injective: `"/pets"` and `"pets"` produce the same
/// output. Callers that derive filenames from the result must track claimed
/// names and reject collisions.
pub fn normalize_name<S: AsRef<str>>(parts: &[S]) -> String {
    let mut out = String::new();
    for part in parts {
        let lowered = part.as_ref().to_lowercase();
        let cleaned = UNSAFE_CHARS.replace_all(&lowered, "-");
        let trimmed = cleaned.trim_matches('-');
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(trimmed);
    }
    out
}
