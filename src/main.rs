// SPDX-License-Identifier: MPL-2.0
use iced_toasted::app::{self, Flags};

const HELP: &str = "\
Iced Toasted demo

USAGE:
  iced_toasted [OPTIONS]

OPTIONS:
  --align start|end     Horizontal placement of the toast stack
  --justify start|end   Vertical placement of the toast stack
  --reverse             Show the newest toast first
  --config-dir PATH     Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        align: args.opt_value_from_str("--align")?,
        justify: args.opt_value_from_str("--justify")?,
        reverse: args.contains("--reverse"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
