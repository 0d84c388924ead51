use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use tracing::{debug, error};
use wlp4scan::{
    config::{config::Config, logging::init_tracing},
    emitter::emitter::render,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
};

fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    let mut source = Vec::new();
    if let Err(err) = io::stdin().lock().read_to_end(&mut source) {
        error!(%err, "failed to read stdin");
        return report(&config, &format!("failed to read input: {}", err));
    }

    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            display_error(&config, &err);
            return ExitCode::FAILURE;
        }
    };

    // Rendered up front so a failed scan can never leave partial output.
    let output = render(&tokens);
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        error!(%err, "failed to write tokens");
        return report(&config, &format!("failed to write output: {}", err));
    }

    debug!(tokens = tokens.len(), "done");
    ExitCode::SUCCESS
}

fn display_error(config: &Config, err: &Error) {
    if config.terse_errors {
        eprintln!("ERROR");
        return;
    }

    match err.get_tip() {
        ErrorTip::None => eprintln!("ERROR: {}", err),
        tip => eprintln!("ERROR: {} ({})", err, tip),
    }
}

fn report(config: &Config, message: &str) -> ExitCode {
    if config.terse_errors {
        eprintln!("ERROR");
    } else {
        eprintln!("ERROR: {}", message);
    }

    ExitCode::FAILURE
}
