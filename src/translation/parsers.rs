pub(super) fn is_line_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'-') && bytes.get(idx + 1) == Some(&b'-')
}

pub(super) fn is_block_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'/') && bytes.get(idx + 1) == Some(&b'*')
}

pub(super) fn is_block_comment_end(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'*') && bytes.get(idx + 1) == Some(&b'/')
}

pub(super) fn next_is_digit(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx + 1).is_some_and(u8::is_ascii_digit)
}

/// A numbered marker (`?3`, `$3`) starting at `idx`: its index and the end of its digits.
pub(super) fn numbered_marker(bytes: &[u8], idx: usize) -> Option<(usize, usize)> {
    if !matches!(bytes.get(idx), Some(b'?' | b'$')) || !next_is_digit(bytes, idx) {
        return None;
    }
    let mut end = idx + 1;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let index = std::str::from_utf8(&bytes[idx + 1..end]).ok()?.parse().ok()?;
    Some((index, end))
}

/// `$tag$` opener starting at `start`; returns the tag and the index of its closing `$`.
pub(super) fn try_start_dollar_quote(bytes: &[u8], start: usize) -> Option<(String, usize)> {
    let mut idx = start + 1;
    while idx < bytes.len() && bytes[idx] != b'$' {
        let b = bytes[idx];
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return None;
        }
        idx += 1;
    }

    // `$1` is a placeholder, not a tag
    if bytes.get(start + 1).is_some_and(u8::is_ascii_digit) {
        return None;
    }

    if idx < bytes.len() {
        let tag = String::from_utf8(bytes[start + 1..idx].to_vec()).ok()?;
        Some((tag, idx))
    } else {
        None
    }
}

/// Index of the closing `$` when `$tag$` starts at `idx`.
pub(super) fn closes_dollar_quote(bytes: &[u8], idx: usize, tag: &str) -> Option<usize> {
    let end = idx + 1 + tag.len();
    (bytes.get(idx) == Some(&b'$')
        && bytes.get(idx + 1..end) == Some(tag.as_bytes())
        && bytes.get(end) == Some(&b'$'))
    .then_some(end)
}

/// End (exclusive) of an identifier starting at `start`, if one starts there.
pub(super) fn scan_identifier(bytes: &[u8], start: usize) -> Option<usize> {
    let first = *bytes.get(start)?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let mut idx = start + 1;
    while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
        idx += 1;
    }
    Some(idx)
}
