use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use patcmp::args::{Action, Args};
use patcmp::compare::{compare_files, Outcome};

const MISMATCH: u8 = 1;
const TROUBLE: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PATCMP_LOG", "warn")).init();
    match run(patcmp::args::parsed()) {
        Ok(Outcome::AllMatched) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatched { discrepancies }) => {
            log::info!("{discrepancies} discrepancies, exiting with status {MISMATCH}");
            ExitCode::from(MISMATCH)
        }
        Err(e) => {
            eprintln!("patcmp: {e:#}");
            ExitCode::from(TROUBLE)
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let (left, right) = match args.action {
        Action::Help => return patcmp::help::print(args.color).map(|()| Outcome::AllMatched),
        Action::Version => {
            return patcmp::help::print_version(args.color).map(|()| Outcome::AllMatched)
        }
        Action::Compare { left, right } => (left, right),
    };

    let stdout = anstream::AutoStream::new(io::stdout().lock(), args.color.into());
    if io::stdout().is_terminal() {
        compare_files(&left, &right, args.quiet, stdout)
    } else {
        compare_files(&left, &right, args.quiet, io::BufWriter::new(stdout))
    }
}
