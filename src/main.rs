// SPDX-License-Identifier: MPL-2.0
use iced_feed::app::{self, logging, paths, Flags};
use iced_feed::config;

const HELP: &str = "\
iced_feed

USAGE:
  iced_feed [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --signed-out         Start with an unauthenticated session
  --log <filter>       tracing filter directive (e.g. debug, iced_feed=trace)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });
    let log_filter: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("Ignoring --log: {err}");
        None
    });
    let signed_out = args.contains("--signed-out");

    paths::init_cli_overrides(config_dir);
    let (config, config_warning) = config::load();
    logging::init(log_filter.as_deref(), &config.logging);

    let mut warnings: Vec<String> = config_warning.into_iter().collect();
    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
        warnings.push(app::UNKNOWN_ARGUMENTS_WARNING.to_string());
    }

    app::run(Flags {
        lang,
        signed_out,
        config,
        warnings,
    })
}
