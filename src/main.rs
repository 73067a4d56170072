//! Create, rename and delete a `RandR` monitor on a running X server

#![deny(
    clippy::all,
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    bad_style,
    ellipsis_inclusive_range_patterns,
    keyword_idents,
    macro_use_extern_crate,
    meta_variable_misuse,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    noop_method_call,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    semicolon_in_expressions_from_macros,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unreachable_pub,
    unsafe_code,
    while_true
)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate
)]
#![cfg_attr(
    any(test),
    allow(
        clippy::expect_used,
        clippy::panic,
        clippy::unwrap_used,
    )
)]

mod atom;
mod cli;
mod driver;
mod error;
mod macros;
mod monitor;
mod report;
mod utils;
mod version;
mod x;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Opts;
use driver::Status;
use report::Reporter;
use std::process;
use x::xconnection::XConnection;

fn main() -> Result<()> {
    let opts = Opts::parse();
    opts.apply_color();
    let _logger = utils::initialize_logging(&opts)?;
    log::trace!("{:#?}", opts);

    let status = match XConnection::connect(opts.display.as_deref()) {
        Ok(xconn) => {
            log::debug!("connected to the X-Server, default screen {}", xconn.screen());
            driver::run(&xconn, &mut Reporter::stdout(), &opts.name)
                .context("failed to write the report")?
        },
        Err(e) => {
            vmon_error!("{}", e);
            Status::VersionQueryFailed
        },
    };

    log::debug!("finished with {:?}", status);
    log::logger().flush();
    process::exit(status.code());
}
