mod cli;
mod error;
mod session;

use clap::Parser;
use cli::Cli;
use env_logger::Env;
use error::Error;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};

/// Processes one line of input, printing the result or the error. Returns false if the line
/// failed.
fn read_eval(line: &str, session: &mut Session) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    match session.process(line) {
        Ok(out) => {
            println!("{}", out);
            true
        },
        Err(err) => {
            err.report_to_stderr();
            false
        },
    }
}

/// Processes every line of the given input, in order. Returns false if any line failed.
fn execute(input: &str, session: &mut Session) -> bool {
    input
        .lines()
        .map(|line| read_eval(line, session))
        .fold(true, |ok, line_ok| ok && line_ok)
}

/// Runs the interactive mode until the user exits.
fn repl(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        read_eval(&input, session);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, session) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err),
            };
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(cli.log_level.into())
        .init();

    let mut session = Session::new(cli.notation.into(), cli.vars.unwrap_or([0.0; 6]));
    debug!("starting with {:?}", session);

    let input = if let Some(path) = &cli.input {
        // run source file
        info!("reading {}", path.display());
        fs::read_to_string(path).map(Some)
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).map(|_| Some(input))
    } else {
        Ok(None)
    };

    let ok = match input {
        Ok(Some(input)) => execute(&input, &mut session),
        Ok(None) => match repl(&mut session) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("error: {}", err);
                false
            },
        },
        Err(err) => {
            Error::from(err).report_to_stderr();
            false
        },
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
