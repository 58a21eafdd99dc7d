// SPDX-License-Identifier: MPL-2.0
use iced_overlays::config::paths;
use iced_overlays::{app, logging};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Invalid --config-dir: {err}");
            None
        }
    };

    logging::init();
    paths::init_cli_override(config_dir);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run()
}
