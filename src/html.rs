//! HTML cleanup for the raw-request-path canonical fallback.
//!
//! Request paths handed over by the host may be HTML-entity-encoded and may
//! carry stray markup. Both are stripped before the path is rebuilt into a
//! canonical URL.

use std::borrow::Cow;

/// Decode HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
/// Uses `Cow` to avoid allocation when no entity is present.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        // Collect entity text up to `;`
        let mut entity = String::new();
        let mut terminated = false;
        for c in chars.by_ref() {
            if c == ';' {
                terminated = true;
                break;
            }
            entity.push(c);
            if entity.len() > 10 {
                // Too long, not a valid entity
                break;
            }
        }

        // Overlong or unterminated run: not an entity, keep the text untouched
        if !terminated {
            result.push('&');
            result.push_str(&entity);
            continue;
        }

        if entity.is_empty() {
            result.push_str("&;");
            continue;
        }

        // Decode entity
        match entity.as_str() {
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "amp" => result.push('&'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            "nbsp" => result.push('\u{00A0}'),
            s if s.starts_with('#') => {
                let code = if s.starts_with("#x") || s.starts_with("#X") {
                    u32::from_str_radix(&s[2..], 16).ok()
                } else {
                    s[1..].parse().ok()
                };
                if let Some(c) = code.and_then(char::from_u32) {
                    result.push(c);
                } else {
                    result.push('&');
                    result.push_str(&entity);
                    result.push(';');
                }
            }
            _ => {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        }
    }

    Cow::Owned(result)
}

/// Remove markup tags, keeping only text content.
///
/// An unterminated `<` drops the remainder of the input.
pub fn strip_tags(s: &str) -> Cow<'_, str> {
    if !s.contains('<') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => result.push(c),
            _ => {}
        }
    }
    Cow::Owned(result)
}
