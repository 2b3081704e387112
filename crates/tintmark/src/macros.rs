//! Formatted-print wrappers around [`render`](crate::render).
//!
//! Each macro formats its arguments with the standard formatting machinery,
//! passes the result through `render` exactly once, and hands the rendered
//! text to its destination. They carry no styling logic of their own.

/// Formats and renders, returning the resulting `String`.
///
/// # Example
///
/// ```rust
/// let greeting = tintmark::tformat!("[bold]{}[/]", "hi");
/// assert_eq!(greeting, "\x1b[1mhi\x1b[0m");
/// ```
#[macro_export]
macro_rules! tformat {
    ($($arg:tt)*) => {
        $crate::render(&::std::format!($($arg)*))
    };
}

/// Formats, renders, and prints to stdout.
///
/// # Example
///
/// ```rust,no_run
/// tintmark::tprint!("[green]{} ok[/]", 3);
/// ```
#[macro_export]
macro_rules! tprint {
    ($($arg:tt)*) => {
        ::std::print!("{}", $crate::tformat!($($arg)*))
    };
}

/// Formats, renders, and prints to stdout with a trailing newline.
///
/// # Example
///
/// ```rust,no_run
/// tintmark::tprintln!("[red:bold]error:[/] {}", "oh no");
/// ```
#[macro_export]
macro_rules! tprintln {
    () => {
        ::std::println!()
    };
    ($($arg:tt)*) => {
        ::std::println!("{}", $crate::tformat!($($arg)*))
    };
}

/// Formats, renders, and writes to the given [`std::io::Write`] sink.
///
/// Evaluates to `std::io::Result<()>`; only the write itself can fail.
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// tintmark::twrite!(out, "[cyan]{}[/]", "hi").unwrap();
/// assert_eq!(out, b"\x1b[36mhi\x1b[0m");
/// ```
#[macro_export]
macro_rules! twrite {
    ($dst:expr, $($arg:tt)*) => {
        ::std::io::Write::write_all(&mut $dst, $crate::tformat!($($arg)*).as_bytes())
    };
}

/// Like [`twrite!`], with a trailing newline.
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// tintmark::twriteln!(out, "[cyan]{}[/]", "hi").unwrap();
/// assert_eq!(out, b"\x1b[36mhi\x1b[0m\n");
/// ```
#[macro_export]
macro_rules! twriteln {
    ($dst:expr) => {
        ::std::io::Write::write_all(&mut $dst, b"\n")
    };
    ($dst:expr, $($arg:tt)*) => {{
        let mut __rendered = $crate::tformat!($($arg)*);
        __rendered.push('\n');
        ::std::io::Write::write_all(&mut $dst, __rendered.as_bytes())
    }};
}
