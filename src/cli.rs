//! The command line arguments

use crate::utils::wants_color;
use clap::{crate_description, crate_version, AppSettings, Parser, ValueHint};
use once_cell::sync::Lazy;

/// Name of the monitor that is created and deleted when none is given
pub(crate) const DEFAULT_NAME: &str = "Monitor-1";

/// Options for the [`vmon`] program
#[derive(Parser, Default, Clone, Debug, PartialEq)]
#[clap(
    version = crate_version!(),
    about = <String as AsRef<str>>::as_ref(&APP_ABOUT),
    after_help = <String as AsRef<str>>::as_ref(&AFTER_HELP),
    max_term_width = 100,
    color = clap::ColorChoice::Auto,
    global_setting = AppSettings::DeriveDisplayOrder,
    hide_possible_values = true,
)]
pub(crate) struct Opts {
    /// Display debugging messages on various levels
    #[clap(
        long,
        short,
        parse(from_occurrences),
        long_help = "\
        Set the verbosity level of the program. There are 2 extra levels after the default (WARN). \
                     If `-v` is used, DEBUG messages are displayed, and if `-vv` is used TRACE \
                     messages are displayed. The verbosity can also be set with the `VMON_LOG` \
                     environment variable"
    )]
    pub(crate) verbose: u8,

    /// Name of the monitor to create and delete
    #[clap(
        long,
        short,
        takes_value = true,
        number_of_values = 1,
        value_name = "name",
        default_value = DEFAULT_NAME,
        forbid_empty_values = true,
        long_help = "\
        The first monitor with an output on the first screen is renamed to this name and set on \
                     the server, then deleted again"
    )]
    pub(crate) name: String,

    /// X display to connect to
    #[clap(
        long,
        short,
        takes_value = true,
        number_of_values = 1,
        value_name = "display",
        value_hint = ValueHint::Other,
        long_help = "\
        The X display to connect to, for example `:1`. The `DISPLAY` environment variable is used \
                     when this is not given"
    )]
    pub(crate) display: Option<String>,

    /// When to colorize output
    #[clap(
        name = "color",
        long = "color",
        short = 'C',
        value_name = "when",
        possible_values = &["never", "auto", "always"],
        long_help = "\
        When to colorize diagnostic messages and logs. Valid values are: always, auto, never"
    )]
    pub(crate) color_when: Option<String>,
}

impl Opts {
    /// Apply the `--color` choice to every colored message
    pub(crate) fn apply_color(&self) {
        match self.color_when.as_deref() {
            Some("never") => colored::control::set_override(false),
            Some("always") => colored::control::set_override(true),
            _ if !wants_color() => colored::control::set_override(false),
            _ => {},
        }
    }
}

// =============== Prettify Help ==================

/// Yellow ansi code
const YELLOW: &str = "\x1b[0;33m";
/// Green ansi code
const GREEN: &str = "\x1b[0;32m";
/// Bold-red ansi code
const BRED: &str = "\x1b[01;38;5;1m";
/// Reset colors
const RES: &str = "\x1b[0m";

/// Colored options used in the output of `--help`
pub(crate) static APP_ABOUT: Lazy<String> = Lazy::new(|| {
    wants_color()
        .then(|| {
            format!(
                "{}DESCRIPTION: {}{}{}",
                YELLOW,
                GREEN,
                crate_description!(),
                RES
            )
        })
        .unwrap_or_else(|| crate_description!().to_owned())
});

/// Colorized message displayed after the help message
pub(crate) static AFTER_HELP: Lazy<String> = Lazy::new(|| {
    wants_color()
        .then(|| {
            format!(
                "Exit codes: {}0{} done, {}1{} RandR version query failed, {}2{} RandR older than 1.5",
                BRED, RES, BRED, RES, BRED, RES
            )
        })
        .unwrap_or_else(|| {
            String::from("Exit codes: 0 done, 1 RandR version query failed, 2 RandR older than 1.5")
        })
});
