//! Left-to-right scanner for bracketed tag spans.
//!
//! The scanner splits input bytes into literal text and candidate tag blocks.
//! A tag block is an optional single backslash, a `[`, one or more bytes from
//! the tag character class (`a-z`, `0-9`, `,`, `-`, `:`, `/`), and a `]`.
//! Matches are non-overlapping and found in a single pass; a `]` always
//! closes the nearest open `[`. Anything that fails the grammar, including
//! `[]` and unclosed brackets, is plain text.
//!
//! The grammar is entirely ASCII, so scanning raw bytes is equivalent to
//! scanning characters and never splits a multi-byte UTF-8 sequence.

/// One segment of the input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Bytes outside any tag block, emitted verbatim.
    Text(&'a [u8]),
    /// A `[...]` span. `body` excludes the delimiters; `escaped` records a
    /// backslash immediately before the `[`.
    Tag { body: &'a [u8], escaped: bool },
}

/// Iterator over [`Segment`]s of a byte slice.
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let input = self.input;
        if self.pos >= input.len() {
            return None;
        }

        let start = self.pos;
        let mut j = start;
        while j < input.len() {
            if let Some((body, escaped, end)) = tag_at(input, j) {
                if j == start {
                    self.pos = end;
                    return Some(Segment::Tag { body, escaped });
                }
                // Emit the text first; the tag is picked up on the next call.
                self.pos = j;
                return Some(Segment::Text(&input[start..j]));
            }
            j += 1;
        }

        self.pos = input.len();
        Some(Segment::Text(&input[start..]))
    }
}

/// Reads a tag span beginning exactly at `at`. Returns the body, whether the
/// span carries the escape marker, and the index one past the closing `]`.
fn tag_at(input: &[u8], at: usize) -> Option<(&[u8], bool, usize)> {
    let (open, escaped) = match input[at] {
        b'\\' if input.get(at + 1) == Some(&b'[') => (at + 1, true),
        b'[' => (at, false),
        _ => return None,
    };

    let mut k = open + 1;
    while k < input.len() && is_tag_byte(input[k]) {
        k += 1;
    }
    // The body must be non-empty and immediately closed.
    if k == open + 1 || input.get(k) != Some(&b']') {
        return None;
    }

    Some((&input[open + 1..k], escaped, k + 1))
}

/// Bytes permitted inside a tag block.
fn is_tag_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b',' | b'-' | b':' | b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(input: &str) -> Vec<Segment<'_>> {
        Scanner::new(input.as_bytes()).collect()
    }

    fn tag(body: &str) -> Segment<'_> {
        Segment::Tag {
            body: body.as_bytes(),
            escaped: false,
        }
    }

    fn escaped_tag(body: &str) -> Segment<'_> {
        Segment::Tag {
            body: body.as_bytes(),
            escaped: true,
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(segments("hello world"), vec![Segment::Text(b"hello world")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(
            segments("[red]foo[/]"),
            vec![tag("red"), Segment::Text(b"foo"), tag("/")]
        );
    }

    #[test]
    fn test_adjacent_tags() {
        assert_eq!(segments("[red][bold]"), vec![tag("red"), tag("bold")]);
    }

    #[test]
    fn test_text_around_tags() {
        assert_eq!(
            segments("a[red]b"),
            vec![Segment::Text(b"a"), tag("red"), Segment::Text(b"b")]
        );
    }

    #[test]
    fn test_escaped_tag() {
        assert_eq!(
            segments(r"\[red]x"),
            vec![escaped_tag("red"), Segment::Text(b"x")]
        );
    }

    #[test]
    fn test_double_backslash_keeps_first() {
        // Only the backslash adjacent to the bracket joins the span
        assert_eq!(
            segments(r"\\[red]"),
            vec![Segment::Text(br"\"), escaped_tag("red")]
        );
    }

    #[test]
    fn test_lone_backslash_is_text() {
        assert_eq!(segments(r"a\b"), vec![Segment::Text(br"a\b")]);
    }

    #[test]
    fn test_empty_brackets_are_text() {
        assert_eq!(segments("[]"), vec![Segment::Text(b"[]")]);
    }

    #[test]
    fn test_unclosed_bracket_is_text() {
        assert_eq!(segments("[red"), vec![Segment::Text(b"[red")]);
    }

    #[test]
    fn test_invalid_body_byte_is_text() {
        // Uppercase and spaces are outside the tag character class
        assert_eq!(segments("[RED]"), vec![Segment::Text(b"[RED]")]);
        assert_eq!(segments("[a b]"), vec![Segment::Text(b"[a b]")]);
    }

    #[test]
    fn test_closing_bracket_closes_nearest_open() {
        // The first `[` never matches; the inner span does
        assert_eq!(
            segments("[re[d]"),
            vec![Segment::Text(b"[re"), tag("d")]
        );
        assert_eq!(segments("[[red]"), vec![Segment::Text(b"["), tag("red")]);
    }

    #[test]
    fn test_multibyte_text_passes_through() {
        assert_eq!(
            segments("héllo [red]wörld[/]"),
            vec![
                Segment::Text("héllo ".as_bytes()),
                tag("red"),
                Segment::Text("wörld".as_bytes()),
                tag("/"),
            ]
        );
    }
}
