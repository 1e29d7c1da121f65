use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    match makedatelist::run(env::args_os(), stdout.lock(), stderr.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // clap errors arrive fully rendered with their own usage hint.
            match e.downcast_ref::<clap::Error>() {
                Some(parse_err) => eprint!("{parse_err}"),
                None => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
