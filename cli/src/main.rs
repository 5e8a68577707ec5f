mod commands;
mod terminal;

use std::io;
use std::process::ExitCode;

use commands::{CommandLine, resolve};
use resolve_common::config::Config;
use resolve_core::lookup::LookupService;
use resolve_core::system::SystemRepo;
use terminal::logging;
use tracing::debug;

fn main() -> ExitCode {
    let commands = match CommandLine::parse_args() {
        Ok(commands) => commands,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    let cfg = Config::from_env();
    logging::init_logging(&cfg);

    let service = LookupService::new(Box::new(SystemRepo), cfg.hints);
    let mut stdout = io::stdout().lock();

    match resolve::resolve(&commands.hostname, &service, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("run aborted: {err:?}");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
