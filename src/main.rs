// SPDX-License-Identifier: MPL-2.0
use photo_swipe::app::{self, paths, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = opt_arg(&mut args, "--lang");
    let library: Option<PathBuf> = opt_arg(&mut args, "--library");
    let config_dir: Option<String> = opt_arg(&mut args, "--config-dir");
    let data_dir: Option<String> = opt_arg(&mut args, "--data-dir");

    for unused in args.finish() {
        eprintln!("[WARN] ignoring unexpected argument {unused:?}");
    }

    paths::init_cli_overrides(data_dir, config_dir);

    app::run(Flags { lang, library })
}

/// Reads an optional `--key value` argument, warning on malformed values.
fn opt_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        eprintln!("[WARN] {err}");
        None
    })
}
