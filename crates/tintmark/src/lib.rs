//! # Tintmark - Bracket-Tag Markup for Terminal Output
//!
//! `tintmark` rewrites inline `[style]` markup into ANSI SGR escape
//! sequences, or strips it entirely. It is a pure text-rewriting layer: no
//! terminal detection, no cursor tracking, no I/O state.
//!
//! ## Quick Start
//!
//! ```rust
//! use tintmark::{render, strip};
//!
//! assert_eq!(render("[red]hello[/]"), "\x1b[31mhello\x1b[0m");
//! assert_eq!(strip("[red]hello[/]"), "hello");
//! ```
//!
//! ## Tag Syntax
//!
//! A tag block is `[` + one or more style tokens joined by `:` + `]`. Tokens
//! may be:
//!
//! - Named attributes: `bold`, `faint`/`dim`, `italic`, `underline`, `blink`,
//!   `invert`, `hidden`, `strike`, each with a `/`-prefixed reset alias
//!   (`/bold`, `/italic`, …). `/` alone resets everything.
//! - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`,
//!   `cyan`, `white`, and `/fg` to restore the default foreground. Prefix
//!   with `bg-` for the background variants (`bg-red`, `/bg`, …).
//! - 8-bit palette indices: `[208]`, `[bg-208]` (0–255).
//! - 24-bit RGB triples: `[255,0,0]`, `[bg-255,0,0]` (each component 0–255).
//!
//! ```rust
//! use tintmark::render;
//!
//! assert_eq!(
//!     render("[bg-255,0,0:bold]Hi[/]"),
//!     "\x1b[48;2;255;0;0;1mHi\x1b[0m"
//! );
//! ```
//!
//! ## Invalid Markup
//!
//! Tag blocks validate as a whole: if any token in the block is
//! unrecognized, the entire block is left in the output as literal text.
//! `render` and `strip` never fail.
//!
//! ```rust
//! use tintmark::render;
//!
//! assert_eq!(render("[red:nope]foo[/]"), "[red:nope]foo\x1b[0m");
//! ```
//!
//! ## Escaping
//!
//! A backslash before the opening bracket suppresses interpretation and
//! emits the bracketed text verbatim, whatever it contains:
//!
//! ```rust
//! use tintmark::render;
//!
//! assert_eq!(render(r"\[red]"), "[red]");
//! ```
//!
//! ## Print Wrappers
//!
//! The [`tformat!`], [`tprint!`], [`tprintln!`], [`twrite!`], and
//! [`twriteln!`] macros combine standard formatting with a single `render`
//! pass:
//!
//! ```rust
//! let line = tintmark::tformat!("[bold]{} items[/]", 3);
//! assert_eq!(line, "\x1b[1m3 items\x1b[0m");
//! ```

mod macros;
mod scan;
mod style;

use scan::{Scanner, Segment};

pub use style::{resolve_style, UnknownStyleError};
pub use style::{
    BG_BLACK, BG_BLUE, BG_CUSTOM, BG_CYAN, BG_DEFAULT, BG_GREEN, BG_MAGENTA, BG_RED, BG_WHITE,
    BG_YELLOW, BLINK, BLINK_RESET, BOLD, BOLD_FAINT_RESET, FAINT, FG_BLACK, FG_BLUE, FG_CUSTOM,
    FG_CYAN, FG_DEFAULT, FG_GREEN, FG_MAGENTA, FG_RED, FG_WHITE, FG_YELLOW, HIDDEN, HIDDEN_RESET,
    INVERT, INVERT_RESET, ITALIC, ITALIC_RESET, RESET, STRIKE, STRIKE_RESET, UNDERLINE,
    UNDERLINE_RESET,
};

/// What to do with a fully resolved tag block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    /// Replace the block with its escape sequence.
    Apply,
    /// Remove the block entirely.
    Delete,
}

/// Replaces every valid tag block in `input` with its ANSI escape sequence.
///
/// Invalid blocks stay in the output as literal text; escaped blocks
/// (`\[...]`) lose the backslash and keep their brackets. This function
/// never fails.
///
/// # Example
///
/// ```rust
/// use tintmark::render;
///
/// assert_eq!(render("[red:faint]a[/]"), "\x1b[31;2ma\x1b[0m");
/// ```
pub fn render(input: &str) -> String {
    into_string(rewrite(input.as_bytes(), Transform::Apply))
}

/// Removes every valid tag block from `input`.
///
/// Invalid blocks stay in the output as literal text, exactly as in
/// [`render`], so stripping never silently deletes malformed markup.
///
/// # Example
///
/// ```rust
/// use tintmark::strip;
///
/// assert_eq!(strip("[red]hello[/]"), "hello");
/// assert_eq!(strip("[nope]hello[/]"), "[nope]hello");
/// ```
pub fn strip(input: &str) -> String {
    into_string(rewrite(input.as_bytes(), Transform::Delete))
}

/// Byte-level [`render`]. The tag grammar is pure ASCII, so arbitrary (even
/// non-UTF-8) bytes outside tag blocks pass through untouched.
pub fn render_bytes(input: &[u8]) -> Vec<u8> {
    rewrite(input, Transform::Apply)
}

/// Byte-level [`strip`].
pub fn strip_bytes(input: &[u8]) -> Vec<u8> {
    rewrite(input, Transform::Delete)
}

/// Single substitution pass shared by all entry points.
fn rewrite(input: &[u8], transform: Transform) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());

    for segment in Scanner::new(input) {
        match segment {
            Segment::Text(text) => output.extend_from_slice(text),
            Segment::Tag { body, escaped } => {
                // The escape marker wins outright: emit the bracketed text
                // verbatim without validating its contents.
                if escaped {
                    emit_literal(&mut output, body);
                    continue;
                }
                match resolve_block(body) {
                    // Deletion happens only after the whole block validated,
                    // so invalid blocks are preserved rather than dropped.
                    Some(_) if transform == Transform::Delete => {}
                    Some(codes) => {
                        output.extend_from_slice(b"\x1b[");
                        output.extend_from_slice(codes.as_bytes());
                        output.push(b'm');
                    }
                    None => emit_literal(&mut output, body),
                }
            }
        }
    }

    output
}

/// Resolves every token of a tag block body, in order. Any unresolvable
/// token invalidates the whole block.
fn resolve_block(body: &[u8]) -> Option<String> {
    // The scanner only yields tag bytes, which are ASCII.
    let body = std::str::from_utf8(body).ok()?;

    let mut codes = Vec::new();
    for token in body.split(':') {
        codes.push(resolve_style(token).ok()?);
    }
    Some(codes.join(";"))
}

fn emit_literal(output: &mut Vec<u8>, body: &[u8]) {
    output.push(b'[');
    output.extend_from_slice(body);
    output.push(b']');
}

/// Tag bodies and escape sequences are ASCII, so rewriting valid UTF-8
/// yields valid UTF-8; the lossy fallback is unreachable from the `&str`
/// entry points.
fn into_string(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_text() {
        assert_eq!(render("hello world"), "hello world");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_render_single_tag() {
        assert_eq!(render("[bold]a[/]"), "\x1b[1ma\x1b[0m");
    }

    #[test]
    fn test_render_preserves_token_order() {
        assert_eq!(render("[red:faint]a[/]"), "\x1b[31;2ma\x1b[0m");
        assert_eq!(render("[faint:red]a[/]"), "\x1b[2;31ma\x1b[0m");
    }

    #[test]
    fn test_render_mixed_validity_fails_whole_block() {
        assert_eq!(render("[red:invalid]foo[/]bar"), "[red:invalid]foo\x1b[0mbar");
    }

    #[test]
    fn test_render_escaped_block_bypasses_validation() {
        assert_eq!(render(r"\[red]a[/]"), "[red]a\x1b[0m");
        assert_eq!(render(r"\[invalid]a[/]"), "[invalid]a\x1b[0m");
    }

    #[test]
    fn test_strip_removes_valid_blocks_only() {
        assert_eq!(strip("[invalid]foo[/]bar"), "[invalid]foobar");
    }

    #[test]
    fn test_bytes_entry_points_match_str() {
        let input = "[blue]x[/] \\[red]";
        assert_eq!(render_bytes(input.as_bytes()), render(input).as_bytes());
        assert_eq!(strip_bytes(input.as_bytes()), strip(input).as_bytes());
    }

    #[test]
    fn test_bytes_entry_points_accept_non_utf8() {
        let mut input = b"[bold]".to_vec();
        input.push(0xff);
        input.extend_from_slice(b"[/]");

        let mut expected = b"\x1b[1m".to_vec();
        expected.push(0xff);
        expected.extend_from_slice(b"\x1b[0m");

        assert_eq!(render_bytes(&input), expected);
        assert_eq!(strip_bytes(&input), [0xff]);
    }

    #[test]
    fn test_strip_unescapes_escaped_blocks() {
        // The first pass removes the marker, not the brackets; a second pass
        // would treat the result as live markup.
        assert_eq!(strip(r"\[red]foo"), "[red]foo");
        assert_eq!(strip("[red]foo"), "foo");
    }

    #[test]
    fn test_empty_token_invalidates_block() {
        assert_eq!(render("[:red]x"), "[:red]x");
        assert_eq!(render("[red:]x"), "[red:]x");
    }
}
