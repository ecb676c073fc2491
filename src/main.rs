use std::process::ExitCode;

use clap::Parser;

use padboard::cli::CliArgs;
use padboard::config;
use padboard::midi::{self, MidiListener};
use padboard::player::SystemPlayer;
use padboard::{BoardModel, Collaborators, FatalError, Runtime, RuntimeConfig, StoreFile};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    padboard::tracing::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e.user_message());
            tracing::error!("{}", e);
            e.exit_code()
        }
    }
}

fn run(args: CliArgs) -> Result<(), FatalError> {
    if args.list_ports {
        for (index, name) in midi::list_ports()?.iter().enumerate() {
            println!("{}: {}", index, name);
        }
        return Ok(());
    }

    config::load_env_file(None);
    let config = RuntimeConfig::from_env()?;
    let player = SystemPlayer::for_current_platform()?;

    let path = args.bindings_path().map_err(FatalError::Setup)?;
    let store_file = StoreFile::new(path);

    tracing::info!("Waiting for the Soundboard to get ready...");
    let store = store_file.load()?;
    tracing::info!(
        "Loaded {} bindings from {}",
        store.len(),
        store_file.path().display()
    );

    if args.show_bindings {
        for binding in store.bindings() {
            println!("{}\t{}", binding.key, binding.file_path);
        }
        return Ok(());
    }

    let model = BoardModel::new(config, store);
    let mut runtime = Runtime::new(model, store_file, Collaborators::system(player));

    // Only connect once the store is loaded so no key is seen before then
    let listener = MidiListener::connect(args.port, runtime.sender())?;
    tracing::info!("MIDI device {} detected", listener.port_name());
    tracing::info!("Soundboard is ready to receive input");

    runtime.run()?;
    Ok(())
}
