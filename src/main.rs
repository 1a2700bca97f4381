// SPDX-License-Identifier: MPL-2.0
use snacknote::app::{self, Flags};
use snacknote::{config, telemetry};

const USAGE: &str = "\
Usage: snacknote [OPTIONS]

Options:
  --duration-ms <MS>     Time a note stays visible
  --no-vibrate           Disable haptic feedback
  --simulate-haptics     Log haptic pulses instead of skipping them
  --config-dir <DIR>     Directory holding settings.toml
  --log <FILTER>         Tracing filter (overrides RUST_LOG)
  -h, --help             Print this help";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        no_vibrate: args.contains("--no-vibrate"),
        simulate_haptics: args.contains("--simulate-haptics"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_filter: args.opt_value_from_str("--log")?,
    })
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(err) = telemetry::init_tracing(flags.log_filter.as_deref()) {
        eprintln!("warning: logging disabled: {err}");
    }

    config::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
