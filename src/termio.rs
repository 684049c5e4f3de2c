//! Terminal I/O, with colors!

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print an OK message, in green.
pub fn print_ok(msg: &str) {
    print_colored(Color::Green, "OK", msg);
}

/// Print a warning message, in yellow.
pub fn print_warn(msg: &str) {
    print_colored(Color::Yellow, "WARN", msg);
}

/// Print an error message, in red.
pub fn print_err(msg: &str) {
    print_colored(Color::Red, "ERROR", msg);
}

/// Print a tagged status line on stderr, keeping stdout for the results.
fn print_colored(color: Color, tag: &str, msg: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    // Status lines are best effort: a closed stderr isn't worth a failure.
    let _res = stderr.set_color(ColorSpec::new().set_fg(Some(color)));
    let _res = writeln!(&mut stderr, "{tag:<5} {msg}");
    let _res = stderr.reset();
}
