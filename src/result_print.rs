//! Print results of a transformation run, either aggregated counts only, or the
//! full candidate lists.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrintOptions {
    NoPrint,
    ShortPrint,
    FullPrint,
}

/// Print the given text, but only if printing is enabled at all.
/// This simplifies the code regarding printing (no redundant if statements).
pub(crate) fn print_if_allowed(text: String, print_options: PrintOptions) {
    if print_options == PrintOptions::NoPrint {
        return;
    }
    println!("{text}")
}

/// Print one formula per line, but only under the full print options.
pub(crate) fn print_list_if_allowed(items: &[String], print_options: PrintOptions) {
    if print_options != PrintOptions::FullPrint {
        return;
    }
    for item in items {
        println!("{item}")
    }
}

/// Print a warning line in yellow (falling back to plain text when the stream
/// rejects colors), unless printing is disabled.
pub(crate) fn print_warning_if_allowed(text: String, print_options: PrintOptions) {
    if print_options == PrintOptions::NoPrint {
        return;
    }
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let colored = stdout
        .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))
        .is_ok();
    let _ = writeln!(&mut stdout, "{text}");
    if colored {
        let _ = stdout.reset();
    }
}
