use console::style;

/// Format and print an error message on stderr.
///
/// Colour is dropped automatically when stderr is not a terminal.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("error:").for_stderr().red().bold(), message);
}

/// Print the computed version, the only thing ever written to stdout.
pub fn display_version(version: &str) {
    println!("{}", version);
}
