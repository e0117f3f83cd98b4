//! Lexer for ANSI-decorated text.
//!
//! Input is split by an ordered table of rules. At each position the rules are
//! tried in order and the first one that matches wins, so more specific
//! patterns (the xterm 256-color selector) must sit before the generic SGR
//! rule that would also accept their prefix.
//!
//! Nothing is buffered between calls: an escape sequence cut in half by a
//! chunk boundary is treated as two unrelated fragments.

use tracing::trace;

const ESC: u8 = 0x1b;
const BACKSPACE: u8 = 0x08;
const NEWLINE: u8 = b'\n';

/// Display code that renders as a line break.
pub const LINE_BREAK: i32 = -1;

/// One lexical unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, escaped on output.
    Text(&'a str),
    /// A single SGR parameter (or [`LINE_BREAK`]).
    Display(i32),
    /// Foreground selection from the 256-color palette.
    Xterm256(u32),
}

/// A lexical rule: `matcher` returns the byte length of its match at the
/// start of the input (never zero), `emitter` turns the matched text into
/// tokens.
struct Rule {
    name: &'static str,
    matcher: fn(&[u8]) -> Option<usize>,
    emitter: for<'a> fn(&'a str, bool, &mut Vec<Token<'a>>),
}

/// Rules in priority order.
const RULES: &[Rule] = &[
    Rule {
        name: "backspace",
        matcher: match_backspaces,
        emitter: emit_nothing,
    },
    Rule {
        name: "xterm256",
        matcher: match_xterm256,
        emitter: emit_xterm256,
    },
    Rule {
        name: "newline",
        matcher: match_newlines,
        emitter: emit_newlines,
    },
    Rule {
        name: "sgr",
        matcher: match_sgr,
        emitter: emit_sgr,
    },
    Rule {
        name: "malformed-csi",
        matcher: match_malformed_csi,
        emitter: emit_nothing,
    },
    Rule {
        name: "text",
        matcher: match_text,
        emitter: emit_text,
    },
];

/// Split `input` into tokens.
///
/// With `convert_newlines` set, each run of newlines becomes a single
/// [`LINE_BREAK`] display token; otherwise it is kept as text. If no rule
/// matches the remaining input (for example a lone `ESC` not followed by
/// `[`), the remainder is dropped.
pub fn tokenize(input: &str, convert_newlines: bool) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    'scan: while !rest.is_empty() {
        for rule in RULES {
            if let Some(len) = (rule.matcher)(rest.as_bytes()) {
                let (matched, tail) = rest.split_at(len);
                (rule.emitter)(matched, convert_newlines, &mut tokens);
                rest = tail;
                continue 'scan;
            }
        }
        trace!(
            dropped_bytes = rest.len(),
            "No lexical rule matched; dropping rest of chunk"
        );
        break;
    }

    tokens
}

/// Name of the first rule matching at the start of `input`, if any.
pub fn matching_rule(input: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| (rule.matcher)(input.as_bytes()).is_some())
        .map(|rule| rule.name)
}

fn leading_run(input: &[u8], byte: u8) -> Option<usize> {
    let len = input.iter().take_while(|&&b| b == byte).count();
    (len > 0).then_some(len)
}

fn match_backspaces(input: &[u8]) -> Option<usize> {
    leading_run(input, BACKSPACE)
}

fn match_newlines(input: &[u8]) -> Option<usize> {
    leading_run(input, NEWLINE)
}

/// `ESC [ 38 ; 5 ; <digits> m`
fn match_xterm256(input: &[u8]) -> Option<usize> {
    const PREFIX: &[u8] = b"\x1b[38;5;";
    let body = input.strip_prefix(PREFIX)?;
    let digits = body.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || body.get(digits) != Some(&b'm') {
        return None;
    }
    Some(PREFIX.len() + digits + 1)
}

/// `ESC [ <params> m` where params is empty or digit groups each optionally
/// followed by a single `;`.
fn match_sgr(input: &[u8]) -> Option<usize> {
    let body = input.strip_prefix(b"\x1b[")?;
    let mut prev_digit = false;
    for (i, &b) in body.iter().enumerate() {
        match b {
            b'0'..=b'9' => prev_digit = true,
            b';' if prev_digit => prev_digit = false,
            b'm' => return Some(2 + i + 1),
            _ => return None,
        }
    }
    None
}

/// `ESC [` followed by up to three digits or semicolons.
fn match_malformed_csi(input: &[u8]) -> Option<usize> {
    let body = input.strip_prefix(b"\x1b[")?;
    let extra = body
        .iter()
        .take(3)
        .take_while(|&&b| b.is_ascii_digit() || b == b';')
        .count();
    Some(2 + extra)
}

fn match_text(input: &[u8]) -> Option<usize> {
    let len = input
        .iter()
        .take_while(|&&b| b != ESC && b != BACKSPACE && b != NEWLINE)
        .count();
    (len > 0).then_some(len)
}

fn emit_nothing<'a>(_matched: &'a str, _convert_newlines: bool, _tokens: &mut Vec<Token<'a>>) {}

fn emit_text<'a>(matched: &'a str, _convert_newlines: bool, tokens: &mut Vec<Token<'a>>) {
    tokens.push(Token::Text(matched));
}

fn emit_newlines<'a>(matched: &'a str, convert_newlines: bool, tokens: &mut Vec<Token<'a>>) {
    if convert_newlines {
        tokens.push(Token::Display(LINE_BREAK));
    } else {
        tokens.push(Token::Text(matched));
    }
}

fn emit_xterm256<'a>(matched: &'a str, _convert_newlines: bool, tokens: &mut Vec<Token<'a>>) {
    // Strip "\x1b[38;5;" and the trailing 'm'
    let digits = &matched[7..matched.len() - 1];
    match digits.parse::<u32>() {
        Ok(code) => tokens.push(Token::Xterm256(code)),
        Err(_) => trace!(digits, "256-color index out of range"),
    }
}

fn emit_sgr<'a>(matched: &'a str, _convert_newlines: bool, tokens: &mut Vec<Token<'a>>) {
    let params = &matched[2..matched.len() - 1];
    if params.is_empty() {
        tokens.push(Token::Display(0));
        return;
    }
    // A trailing ';' yields an empty last field, which is skipped like any
    // other unparseable code.
    for field in params.split(';') {
        if let Ok(code) = field.parse::<i32>() {
            tokens.push(Token::Display(code));
        }
    }
}
