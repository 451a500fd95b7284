//! String predicates and case-format conversion.

/// True when `s` is empty or contains only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Removes blank strings (per [`is_blank`]) from `values` in place,
/// preserving the order of the survivors.
pub fn remove_blank(values: &mut Vec<String>) {
    values.retain(|s| !is_blank(s));
}

/// Converts a string to `snake_case`.
///
/// Word boundaries are camel/Pascal transitions, runs of whitespace,
/// underscores, or hyphens, and letter↔digit transitions in either
/// direction (`"numbers2and55"` → `"numbers_2_and_55"`).  A `/` reads as an
/// alternative marker and becomes the literal word `or` (`"Foo/Boo"` →
/// `"foo_or_boo"`).  Leading and trailing separators are trimmed and the
/// result is entirely lowercase.
pub fn snake_case(s: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum Kind {
        None,
        Lower,
        Upper,
        Digit,
    }

    // Separators are buffered, then emitted as a single `_` before the next
    // word character.  Nothing pending at the start or end ever prints, which
    // trims the edges for free.
    fn put(out: &mut String, pending: &mut bool, ch: char) {
        if *pending && !out.is_empty() {
            out.push('_');
        }
        *pending = false;
        out.push(ch);
    }

    let mut out = String::with_capacity(s.len() + 4);
    let mut pending = false;
    let mut prev = Kind::None;

    for ch in s.chars() {
        if ch == '/' {
            pending = true;
            put(&mut out, &mut pending, 'o');
            out.push('r');
            pending = true;
            prev = Kind::None;
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending = true;
            prev = Kind::None;
        } else if ch.is_uppercase() {
            if matches!(prev, Kind::Lower | Kind::Digit) {
                pending = true;
            }
            for low in ch.to_lowercase() {
                put(&mut out, &mut pending, low);
            }
            prev = Kind::Upper;
        } else if ch.is_ascii_digit() {
            if matches!(prev, Kind::Lower | Kind::Upper) {
                pending = true;
            }
            put(&mut out, &mut pending, ch);
            prev = Kind::Digit;
        } else {
            if prev == Kind::Digit {
                pending = true;
            }
            put(&mut out, &mut pending, ch);
            prev = Kind::Lower;
        }
    }
    out
}
