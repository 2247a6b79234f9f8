//! One pass through the stages of a run.
//!
//! Each stage reads and updates a [`RunContext`] and names the stage that
//! follows it. The loop in [`run`] checks every step against
//! [`Stage::can_transition_to`] and stops at [`Stage::Exit`].

use std::ffi::OsString;
use std::io::Write;

use anyhow::{bail, Context, Result};
use tracing::{debug, trace};

use crate::args::{self, Arguments};
use crate::display;
use crate::error::UsageError;
use crate::exit_codes;
use crate::settings::Settings;
use crate::usage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    ParseArgs,
    HandleArgs,
    Usage,
    DisplayMessages,
    Cleanup,
    Exit,
}

impl Stage {
    /// Whether `next` may directly follow `self`. No stage can be revisited.
    pub fn can_transition_to(self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Init, Stage::ParseArgs)
                | (Stage::ParseArgs, Stage::HandleArgs)
                | (Stage::ParseArgs, Stage::Usage)
                | (Stage::HandleArgs, Stage::DisplayMessages)
                | (Stage::HandleArgs, Stage::Usage)
                | (Stage::Usage, Stage::Cleanup)
                | (Stage::DisplayMessages, Stage::Cleanup)
                | (Stage::Cleanup, Stage::Exit)
        )
    }
}

/// State shared by the stages of a single run.
#[derive(Debug)]
pub struct RunContext {
    pub argv: Vec<OsString>,
    pub arguments: Arguments,
    pub settings: Option<Settings>,
    pub exit_code: i32,
    /// Diagnostic for the usage block. Present iff `exit_code` is FAILURE,
    /// until cleanup releases it.
    pub exit_message: Option<String>,
}

impl RunContext {
    pub fn new(argv: Vec<OsString>) -> Self {
        let arguments = Arguments {
            program_name: args::program_name(&argv),
            ..Arguments::default()
        };

        RunContext {
            argv,
            arguments,
            settings: None,
            exit_code: exit_codes::SUCCESS,
            exit_message: None,
        }
    }

    /// Record `err` as the exit message and fail the run.
    pub fn record_failure(&mut self, err: &UsageError) {
        debug!(%err, "usage error");
        self.exit_message = Some(err.to_string());
        self.exit_code = exit_codes::FAILURE;
    }
}

/// Run every stage for `argv` and return the process exit code.
///
/// `out` receives the numbered messages, `err` the usage block. An `Err` means
/// one of the streams could not be written.
pub fn run<I, T, O, E>(argv: I, out: &mut O, err: &mut E) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    let mut context = RunContext::new(argv.into_iter().map(Into::into).collect());
    let mut stage = Stage::Init;

    loop {
        let next = match stage {
            Stage::Init => Stage::ParseArgs,
            Stage::ParseArgs => parse_args(&mut context),
            Stage::HandleArgs => handle_args(&mut context),
            Stage::Usage => report_usage(&context, err)?,
            Stage::DisplayMessages => display_messages(&context, out)?,
            Stage::Cleanup => cleanup(&mut context),
            Stage::Exit => break,
        };

        if !stage.can_transition_to(next) {
            bail!("invalid stage transition {:?} -> {:?}", stage, next);
        }
        debug!(from = ?stage, to = ?next, "stage transition");
        stage = next;
    }

    Ok(context.exit_code)
}

fn parse_args(context: &mut RunContext) -> Stage {
    match args::parse_arguments(&context.argv) {
        Ok(arguments) => {
            let help = arguments.help;
            context.arguments = arguments;
            if help {
                Stage::Usage
            } else {
                Stage::HandleArgs
            }
        }
        Err(err) => {
            context.record_failure(&err);
            Stage::Usage
        }
    }
}

fn handle_args(context: &mut RunContext) -> Stage {
    match Settings::from_arguments(&context.arguments) {
        Ok(settings) => {
            context.settings = Some(settings);
            Stage::DisplayMessages
        }
        Err(err) => {
            context.record_failure(&err);
            Stage::Usage
        }
    }
}

fn report_usage<E: Write>(context: &RunContext, err: &mut E) -> Result<Stage> {
    usage::report_usage(
        err,
        &context.arguments.program_name,
        context.exit_message.as_deref(),
    )
    .context("write usage to stderr")?;
    Ok(Stage::Cleanup)
}

fn display_messages<O: Write>(context: &RunContext, out: &mut O) -> Result<Stage> {
    let settings = context
        .settings
        .as_ref()
        .context("messages displayed before settings were validated")?;
    display::display_messages(out, settings).context("write messages to stdout")?;
    Ok(Stage::Cleanup)
}

fn cleanup(context: &mut RunContext) -> Stage {
    if let Some(message) = context.exit_message.take() {
        trace!(%message, "released exit message");
    }
    Stage::Exit
}
