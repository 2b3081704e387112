//! Tour of the tag syntax and entry points. Run with:
//!
//! ```sh
//! cargo run --example demo
//! ```

use tintmark::{render, strip, tprintln};

fn main() {
    // Apply a style to a string
    let styled = render("[magenta]Hello, world![/]");
    println!("{}", styled);

    // The print macros combine formatting and rendering
    tprintln!("[blue]Hello, world![/]");
    tprintln!("[cyan]{}[/]", "Hello, world!");

    // Apply multiple styles at once
    tprintln!("[green:strike]Hello, world![/]");

    // Remove a single style partway through
    tprintln!("[yellow:strike]Hello[/strike], world![/]");

    // Style different parts of a string
    tprintln!("[yellow]Hello,[/] [red]world![/]");

    // 8-bit (256) palette color
    tprintln!("[208]Hello, world![/]");

    // 24-bit (RGB) colors, foreground and background
    tprintln!("[255,0,0]Hello, world![/]");
    tprintln!("[bg-255,0,0:bold]Hello, world![/]");
    tprintln!("[255,0,0:bg-255,0,0]Hello, world![/]");

    // Escape a block so it prints as-is
    tprintln!(r"\[red]Hello, world!\[/]");

    // Strip styles instead of applying them
    println!("{}", strip("[red]Hello, world![/]"));
}
