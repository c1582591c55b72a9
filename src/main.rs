// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_reel [RESOURCE] [OPTIONS]

Arguments:
  RESOURCE              Media resource to play, as name.kind (default: English.mp4)

Options:
  --config-dir <DIR>    Directory holding settings.toml
  --assets <DIR>        Directory media resources are resolved in
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let assets_dir: Option<PathBuf> = args.opt_value_from_str("--assets")?;
    let resource = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let mut flags = Flags {
        config_dir,
        assets_dir,
        ..Flags::default()
    };
    if let Some(resource) = resource {
        flags.resource = resource;
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    // RUST_LOG overrides the default filter.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "iced_reel=info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
