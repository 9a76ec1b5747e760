use clap::Parser;
use deckwright::config::DeckConfig;
use deckwright::content::builtin_pages;
use deckwright::deck::{Assembler, LogObserver};
use deckwright::ooxml::pptx::PptxWriter;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Assemble the built-in slide deck and write it as a .pptx file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML file with metadata, font and palette overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Destination file (overrides the configured output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

fn run(args: Args) -> deckwright::Result<()> {
    let mut config = match &args.config {
        Some(path) => DeckConfig::load(path)?,
        None => DeckConfig::default(),
    };
    if let Some(output) = args.output {
        config.output = Some(output);
    }

    if args.print_config {
        print!("{}", config.effective()?.to_yaml()?);
        return Ok(());
    }

    let assembler = Assembler::new(config.metadata(), config.palette()?);
    let destination = config.output();
    log::info!(
        "Building \"{}\" ({} pages)",
        assembler.metadata().title,
        builtin_pages().len()
    );
    assembler.run(builtin_pages(), &PptxWriter::new(), &destination, &mut LogObserver)?;
    Ok(())
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "deckwright=info");
        }
    }
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        },
    }
}
