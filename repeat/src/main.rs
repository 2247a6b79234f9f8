use std::env;
use std::io;
use std::process;

use repeat::{exit_codes, logging, pipeline};

fn main() {
    logging::init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = pipeline::run(env::args_os(), &mut stdout.lock(), &mut stderr.lock());

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILURE
        }
    };
    process::exit(code);
}
