use super::parsers::{
    closes_dollar_quote, is_block_comment_end, is_block_comment_start, is_line_comment_start,
    next_is_digit, numbered_marker, scan_identifier, try_start_dollar_quote,
};

#[derive(Clone)]
enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    LineComment,
    BlockComment(u32),
    DollarQuoted(String),
}

/// A piece of a statement: literal SQL text or a bind marker found outside quotes and comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    /// A bare `?` (not `?1`).
    Positional,
    /// `?N` or `$N`, carrying its 1-based index.
    Numbered(usize),
    /// `:name`; `::` casts and `:=` are left as text.
    Named(&'a str),
}

fn push_text<'a>(out: &mut Vec<Segment<'a>>, sql: &'a str, from: usize, to: usize) {
    if from < to {
        out.push(Segment::Text(&sql[from..to]));
    }
}

/// Split `sql` into text and bind markers.
pub(crate) fn segments(sql: &str) -> Vec<Segment<'_>> {
    let bytes = sql.as_bytes();
    let mut out = Vec::new();
    let mut state = State::Normal;
    let mut text_start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        match state {
            State::Normal => match b {
                b'\'' => state = State::SingleQuoted,
                b'"' => state = State::DoubleQuoted,
                _ if is_line_comment_start(bytes, idx) => {
                    state = State::LineComment;
                    idx += 1;
                }
                _ if is_block_comment_start(bytes, idx) => {
                    state = State::BlockComment(1);
                    idx += 1;
                }
                b'?' | b'$' if next_is_digit(bytes, idx) => {
                    if let Some((index, end)) = numbered_marker(bytes, idx) {
                        push_text(&mut out, sql, text_start, idx);
                        out.push(Segment::Numbered(index));
                        text_start = end;
                        idx = end - 1;
                    }
                }
                b'$' => {
                    if let Some((tag, close)) = try_start_dollar_quote(bytes, idx) {
                        state = State::DollarQuoted(tag);
                        idx = close;
                    }
                }
                b'?' => {
                    push_text(&mut out, sql, text_start, idx);
                    out.push(Segment::Positional);
                    text_start = idx + 1;
                }
                b':' => {
                    if bytes.get(idx + 1) == Some(&b':') {
                        idx += 1;
                    } else if let Some(end) = scan_identifier(bytes, idx + 1) {
                        push_text(&mut out, sql, text_start, idx);
                        out.push(Segment::Named(&sql[idx + 1..end]));
                        text_start = end;
                        idx = end - 1;
                    }
                }
                _ => {}
            },
            State::SingleQuoted => {
                if b == b'\'' {
                    if bytes.get(idx + 1) == Some(&b'\'') {
                        idx += 1; // escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::DoubleQuoted => {
                if b == b'"' {
                    if bytes.get(idx + 1) == Some(&b'"') {
                        idx += 1;
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment(depth) => {
                if is_block_comment_start(bytes, idx) {
                    state = State::BlockComment(depth + 1);
                    idx += 1;
                } else if is_block_comment_end(bytes, idx) {
                    state = if depth == 1 {
                        State::Normal
                    } else {
                        State::BlockComment(depth - 1)
                    };
                    idx += 1;
                }
            }
            State::DollarQuoted(ref tag) => {
                if let Some(close) = closes_dollar_quote(bytes, idx, tag) {
                    state = State::Normal;
                    idx = close;
                }
            }
        }
        idx += 1;
    }

    push_text(&mut out, sql, text_start, bytes.len());
    out
}
