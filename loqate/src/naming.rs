//! Key transcoding between the wire convention and the domain convention.
//!
//! Loqate names every field in `PascalCase` (`POBoxNumber`, `Field1Format`)
//! while Rust records and option structs use `snake_case`. The two
//! functions here are not exact inverses: acronym runs are lost on the way
//! to the domain form. For a `PascalCase` wire key `k` (an uppercase letter
//! followed by ASCII letters and digits), `to_wire_key(to_domain_key(k))`
//! is a canonical form of `k` that a second round trip leaves unchanged.
//! Lowercase-led or hyphenated keys have no such guarantee.
//!
//! ## Examples
//!
//! ```rust
//! use loqate::naming::{to_domain_key, to_wire_key};
//!
//! assert_eq!(to_domain_key("POBoxNumber"), "po_box_number");
//! assert_eq!(to_wire_key("po_box_number"), "PoBoxNumber");
//! ```

/// Converts a wire key (`PascalCase`) into a domain key (`snake_case`).
///
/// A separator is inserted before an uppercase letter that follows a
/// lowercase letter or a digit, and before the last capital of an
/// uppercase run when that capital starts a new word (`POBox` →
/// `po_box`). Hyphens become underscores and the result is lower-cased.
pub fn to_domain_key(wire_key: &str) -> String {
    let chars: Vec<char> = wire_key.chars().collect();
    let mut result = String::with_capacity(wire_key.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();

            let word_start = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let acronym_end =
                prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase());

            if word_start || acronym_end {
                result.push('_');
            }
        }

        if ch == '-' {
            result.push('_');
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// Converts a domain key (`snake_case`) into a wire key (`PascalCase`).
///
/// The leading run and every `_`-delimited segment get their first
/// lowercase letter capitalized and the underscores are dropped. A `/`
/// is rendered as the `::` namespace separator.
pub fn to_wire_key(domain_key: &str) -> String {
    let mut result = String::with_capacity(domain_key.len());
    let mut segment_start = true;

    for ch in domain_key.chars() {
        match ch {
            '_' => segment_start = true,
            '/' => {
                result.push_str("::");
                segment_start = true;
            }
            c if segment_start && c.is_ascii_lowercase() => {
                result.push(c.to_ascii_uppercase());
                segment_start = false;
            }
            c => {
                result.push(c);
                segment_start = false;
            }
        }
    }

    result
}
