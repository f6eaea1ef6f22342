use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent,
/// colored user-facing messages. Colors are enabled only when stderr is a
/// TTY; stdout lines are always plain so they stay scriptable.
fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as the usage line and the progress/completion messages, which users
/// may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

pub fn print_error(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
