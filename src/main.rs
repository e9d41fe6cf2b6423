// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::domain::ToastPosition;

const USAGE: &str = "\
Usage: iced_toast [OPTIONS]

Options:
  --position <top|bottom>  Default toast position
  --decay <SECONDS>        Default decay interval
  --message <TEXT>         Message shown by every toast
  -h, --help               Print this help";

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("iced_toast=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        position: args.opt_value_from_fn("--position", str::parse::<ToastPosition>)?,
        decay_secs: args.opt_value_from_str("--decay")?,
        message: args.opt_value_from_str("--message")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
