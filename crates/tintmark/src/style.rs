//! Style token classification and SGR code formatting.
//!
//! A style token is one element of a tag block's `:`-separated list, e.g.
//! `bold`, `/underline`, `bg-red`, `208`, or `255,0,0`. Tokens are classified
//! in a fixed priority order:
//!
//! 1. Exact, case-sensitive lookup in the named style table
//! 2. 8-bit palette index (`0`–`255`)
//! 3. 24-bit RGB triple (`r,g,b`, each component `0`–`255`)
//!
//! A `bg-` prefix on a numeric form selects the background color selector
//! (48) instead of the foreground one (38). `bg-red` and friends are named
//! entries and never reach the numeric paths.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

// SGR parameter codes.
pub const RESET: u8 = 0;
pub const BOLD: u8 = 1;
pub const FAINT: u8 = 2;
pub const ITALIC: u8 = 3;
pub const UNDERLINE: u8 = 4;
pub const BLINK: u8 = 5;
pub const INVERT: u8 = 7;
pub const HIDDEN: u8 = 8;
pub const STRIKE: u8 = 9;
/// Bold and faint share a single reset code.
pub const BOLD_FAINT_RESET: u8 = 22;
pub const ITALIC_RESET: u8 = 23;
pub const UNDERLINE_RESET: u8 = 24;
pub const BLINK_RESET: u8 = 25;
pub const INVERT_RESET: u8 = 27;
pub const HIDDEN_RESET: u8 = 28;
pub const STRIKE_RESET: u8 = 29;
pub const FG_BLACK: u8 = 30;
pub const FG_RED: u8 = 31;
pub const FG_GREEN: u8 = 32;
pub const FG_YELLOW: u8 = 33;
pub const FG_BLUE: u8 = 34;
pub const FG_MAGENTA: u8 = 35;
pub const FG_CYAN: u8 = 36;
pub const FG_WHITE: u8 = 37;
/// Foreground custom-color selector, followed by `5;n` or `2;r;g;b`.
pub const FG_CUSTOM: u8 = 38;
pub const FG_DEFAULT: u8 = 39;
pub const BG_BLACK: u8 = 40;
pub const BG_RED: u8 = 41;
pub const BG_GREEN: u8 = 42;
pub const BG_YELLOW: u8 = 43;
pub const BG_BLUE: u8 = 44;
pub const BG_MAGENTA: u8 = 45;
pub const BG_CYAN: u8 = 46;
pub const BG_WHITE: u8 = 47;
/// Background custom-color selector, followed by `5;n` or `2;r;g;b`.
pub const BG_CUSTOM: u8 = 48;
pub const BG_DEFAULT: u8 = 49;

/// Named style table. Initialized once, read-only thereafter.
static NAMED_STYLES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        // Reset
        ("/", RESET),
        // Text attributes
        ("bold", BOLD),
        ("faint", FAINT),
        ("dim", FAINT),
        ("italic", ITALIC),
        ("underline", UNDERLINE),
        ("blink", BLINK),
        ("invert", INVERT),
        ("hidden", HIDDEN),
        ("strike", STRIKE),
        ("/bold", BOLD_FAINT_RESET),
        ("/faint", BOLD_FAINT_RESET),
        ("/dim", BOLD_FAINT_RESET),
        ("/italic", ITALIC_RESET),
        ("/underline", UNDERLINE_RESET),
        ("/blink", BLINK_RESET),
        ("/invert", INVERT_RESET),
        ("/hidden", HIDDEN_RESET),
        ("/strike", STRIKE_RESET),
        // Foreground colors
        ("black", FG_BLACK),
        ("red", FG_RED),
        ("green", FG_GREEN),
        ("yellow", FG_YELLOW),
        ("blue", FG_BLUE),
        ("magenta", FG_MAGENTA),
        ("cyan", FG_CYAN),
        ("white", FG_WHITE),
        ("/fg", FG_DEFAULT),
        // Background colors
        ("bg-black", BG_BLACK),
        ("bg-red", BG_RED),
        ("bg-green", BG_GREEN),
        ("bg-yellow", BG_YELLOW),
        ("bg-blue", BG_BLUE),
        ("bg-magenta", BG_MAGENTA),
        ("bg-cyan", BG_CYAN),
        ("bg-white", BG_WHITE),
        ("/bg", BG_DEFAULT),
    ])
});

/// Error type for style tokens that match no recognized syntax.
///
/// [`render`](crate::render) and [`strip`](crate::strip) absorb this error
/// internally by leaving the whole tag block untouched in the output. It is
/// exposed so callers can validate markup up front via [`resolve_style`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownStyleError {
    /// The token is not a named style and does not parse as a color value.
    #[error("unrecognized style: {0}")]
    UnknownName(String),

    /// The token split into exactly three comma-separated parts, but a
    /// component was malformed or out of range.
    #[error("invalid 24-bit color code: {0}")]
    InvalidRgb(String),
}

/// Resolves a single style token to its SGR code fragment.
///
/// The fragment is the text that goes between `ESC[` and `m`, e.g. `"1"` for
/// `bold`, `"38;5;208"` for `208`, or `"48;2;255;0;0"` for `bg-255,0,0`.
///
/// # Example
///
/// ```rust
/// use tintmark::resolve_style;
///
/// assert_eq!(resolve_style("bold").unwrap(), "1");
/// assert_eq!(resolve_style("bg-red").unwrap(), "41");
/// assert_eq!(resolve_style("208").unwrap(), "38;5;208");
/// assert_eq!(resolve_style("bg-255,0,0").unwrap(), "48;2;255;0;0");
/// assert!(resolve_style("chartreuse").is_err());
/// ```
pub fn resolve_style(token: &str) -> Result<String, UnknownStyleError> {
    // Named styles
    if let Some(&code) = NAMED_STYLES.get(token) {
        return Ok(code.to_string());
    }

    // The bg- prefix is stripped once; the remainder takes the numeric paths
    // with the background selector.
    let (value, selector) = match token.strip_prefix("bg-") {
        Some(rest) => (rest, BG_CUSTOM),
        None => (token, FG_CUSTOM),
    };

    // 8-bit (256) palette index
    if let Ok(n) = value.parse::<u8>() {
        return Ok(format!("{};5;{}", selector, n));
    }

    // 24-bit (RGB) triple
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() == 3 {
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| UnknownStyleError::InvalidRgb(value.to_string()))?;
        }
        return Ok(format!("{};2;{};{};{}", selector, rgb[0], rgb[1], rgb[2]));
    }

    Err(UnknownStyleError::UnknownName(token.to_string()))
}
