#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use boxes::{exit_codes, init_logging, save, Args, CliError, GameEngine, Outcome, Session};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io;

#[cfg(feature = "std")]
fn main() {
    init_logging();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::OUTPUT_FAILURE
        }
    };
    std::process::exit(code);
}

#[cfg(feature = "std")]
fn run() -> anyhow::Result<i32> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            log::debug!("{}", err);
            eprintln!("{}", CliError::Usage);
            return Ok(CliError::Usage.exit_code());
        }
    };
    let config = match args.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(err.exit_code());
        }
    };

    let engine = match &args.save_file {
        Some(path) => match save::load(path, &config) {
            Ok(state) => GameEngine::from_state(state)?,
            Err(err) => {
                log::info!("{}", err);
                let message = match err {
                    save::SaveError::Content { .. } => "Error reading grid contents",
                    _ => "Invalid grid file",
                };
                eprintln!("{}", message);
                return Ok(err.exit_code());
            }
        },
        None => GameEngine::new(&config)?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(engine, stdin.lock(), stdout.lock(), io::stderr());
    match session.run()? {
        Outcome::Finished { winners } => {
            log::info!("game over, {} winner(s)", winners.len());
            Ok(exit_codes::OK)
        }
        Outcome::InputExhausted => {
            eprintln!("End of user input");
            Ok(exit_codes::INPUT_EXHAUSTED)
        }
    }
}
