//! Small text helpers used when presenting catalog items.

/// Description length shown on a product card.
pub const DESCRIPTION_MAX_CHARS: usize = 80;

/// Convert free text to a kebab-case slug.
///
/// Runs of non-alphanumeric characters collapse to a single `-`, camelCase
/// boundaries split (`partNumber` -> `part-number`), and the result is
/// lower-cased with no leading or trailing dashes.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            pending_dash = !out.is_empty();
            prev = None;
            continue;
        }

        let camel_boundary = ch.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if (pending_dash || camel_boundary) && !out.is_empty() {
            out.push('-');
        }
        pending_dash = false;

        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    out
}

/// Cut `text` to at most `max_chars` characters, appending `…` when cut.
///
/// Trailing whitespace before the ellipsis is dropped.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => {
            let mut cut = text[..byte_idx].trim_end().to_string();
            cut.push('…');
            cut
        }
    }
}
