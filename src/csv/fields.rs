//! Line, field and integer primitives shared by both sheets

/// Split text into lines, dropping those that are blank after trimming.
/// Dropped lines do not count towards row indices.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Split one line on commas and trim every field
#[inline]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse the leading base-10 integer of a field.
///
/// Leading whitespace and an optional sign are accepted, then at least one
/// digit; anything after the digits is ignored (`"12abc"` is 12). Negative
/// values other than zero and values beyond `u32` are rejected.
pub fn parse_leading_int(field: &str) -> Option<u32> {
    let s = field.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: u32 = rest[..digits_end].parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
