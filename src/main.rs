//! # yesno CLI
//!
//! Command-line interface for the yesno confirmation prompt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use yesno::{
    commands::{self, AskArgs},
    constants::{EXIT_ERROR, EXIT_OK, EXIT_USAGE},
    ui,
};

const GLOBAL_HELP: &str = "\
Keys:
  y / n              Answer yes / no immediately
  ↑/k  ↓/j           Move the highlight
  enter              Answer with the highlighted item
  /                  Filter the list (esc cancels, enter applies)
  ?                  Toggle full help
  esc, q, ctrl+c     Cancel without answering

Output:
  The answer is printed to stdout as 'yes' or 'no'. The prompt itself is
  drawn on stderr, so $(yesno ...) captures only the answer.

Exit Status:
  0    Answered (or answered yes with --exit-status)
  1    The terminal could not be used
  2    Answered no with --exit-status
  64   Invalid command line
  130  Cancelled

Examples:
  yesno                              Ask the default question
  yesno \"Deploy to production?\"      Ask a custom question
  [ \"$(yesno 'Delete build/?')\" = yes ] && rm -rf build/
  yesno --exit-status 'Continue?' || exit 1";

#[derive(Parser)]
#[command(name = "yesno")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Ask a yes/no question in the terminal")]
#[command(
    long_about = "yesno shows a single yes/no confirmation prompt in the terminal and \
prints the answer, letting shell scripts ask a human before proceeding.\n\n\
The question is shown as the title of a two-item list (Yes, No). Press y or n \
to answer directly, or move the highlight and press enter."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Question shown as the prompt title
    #[arg(
        allow_hyphen_values = true,
        help = "Question to ask [default: \"Are you sure you want to continue?\"]"
    )]
    question: Option<String>,

    /// Additional arguments (ignored unless --debug-args)
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,

    /// Encode the answer in the exit status
    #[arg(long, help = "Exit with status 2 when the answer is no")]
    exit_status: bool,

    /// Print the positional arguments before prompting
    #[arg(long, help = "Print 'Arg N is <value>' for each argument to stderr")]
    debug_args: bool,

    /// Draw without colors
    #[arg(long, help = "Draw the prompt without colors")]
    no_color: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", help = "Print a completion script and exit")]
    completions: Option<Shell>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(&err));
        }
    };

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::print_error(&err);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

/// `--help` and `--version` succeed; every other parse failure is a usage error.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.exit_code() == EXIT_OK {
        EXIT_OK
    } else {
        EXIT_USAGE
    }
}

fn run(cli: Cli) -> Result<i32> {
    if let Some(shell) = cli.completions {
        commands::completions(shell, &mut Cli::command())?;
        return Ok(EXIT_OK);
    }

    commands::ask(&AskArgs {
        question: cli.question,
        extra: cli.extra,
        exit_status: cli.exit_status,
        debug_args: cli.debug_args,
        no_color: cli.no_color,
    })
}
