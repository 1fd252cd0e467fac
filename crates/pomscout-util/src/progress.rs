use std::io::Write;

use console::Style;

/// Announce a phase of the scan on stderr, e.g. `    Scanning /opt/my-project for dependents of core`.
///
/// stdout is reserved for the report itself, so these lines never mix
/// into piped output.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Same layout as [`status`], with a yellow label for recoverable problems
/// such as an `--only-from` file that yielded no module names.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}

fn emit(style: Style, label: &str, message: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{:>12} {message}", style.apply_to(label));
}
