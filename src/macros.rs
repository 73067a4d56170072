//! Macros for error/info printing

/// Expand to an error message
#[macro_export]
macro_rules! vmon_error {
    ($($err:tt)*) => ({
        use colored::Colorize;
        eprintln!("{}: {}", "[vmon error]".red().bold(), format!($($err)*));
    })
}

/// Expand to an info message
#[macro_export]
macro_rules! vmon_info {
    ($($err:tt)*) => ({
        use colored::Colorize;
        eprintln!("{}: {}", "[vmon info]".purple().bold(), format!($($err)*));
    })
}
