mod boxes_cmd;
mod cli;
mod dims_cmd;
mod page_range;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing();
    }

    let result = match cli.command {
        cli::Commands::Dims {
            ref file,
            format,
            crop_box,
            no_rotation,
        } => dims_cmd::run(file, format, &shared::resolve_options(crop_box, no_rotation)),
        cli::Commands::Boxes {
            ref file,
            ref document,
            ref features,
            ref pages,
            format,
            crop_box,
            no_rotation,
        } => boxes_cmd::run(
            file,
            document,
            features,
            pages.as_deref(),
            format,
            &shared::resolve_options(crop_box, no_rotation),
        ),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("overlayer=debug,overlayer_core=debug,overlayer_parse=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
