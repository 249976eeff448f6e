//! `cup`: a small command-line note manager.
//!
//! The [`notebook::Notebook`] store does all of the data work. This module is
//! the thin front end around it: parse arguments, load the notebook, run one
//! operation, print the result.

pub mod args;
pub mod config;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod note;
pub mod notebook;
pub mod prompt;
pub mod shared;

use args::{Cli, Command};
use clap::Parser;
use config::Config;
use error::{NotebookError, Result};
use formatting::{FormatContext, ViewMode};
use log::{error, info, warn};
use notebook::{Listing, Notebook};
use std::io::{self, Write};

/// Parse the process arguments and run one command.
pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.file.clone())?;
    if let Err(err) = logging::init_logging(
        &config.log_level,
        &config.log_dir(),
        config::LOG_BASENAME,
    ) {
        eprintln!("warning: logging disabled: {err}");
    }

    let result = run(cli.command, &config);
    if let Err(err) = &result {
        if err.is_fatal() {
            error!("{err}");
        }
    }
    result
}

fn run(command: Option<Command>, config: &Config) -> Result<()> {
    let mut notebook = Notebook::open(&config.notebook_path)?;
    let ctx = config.format_context();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let outcome = match command {
        None => show_notes(&notebook, ctx, &mut out),
        Some(Command::Add { text, title }) => {
            let content = match text {
                Some(text) => text,
                None => match prompt::ask_content(&mut input, &mut out)? {
                    Some(content) => content,
                    None => return abort(&mut out),
                },
            };
            let title = Command::joined_title(&title);
            notebook.create_note(&content, title.as_deref())?;
            writeln!(out, "Note created.")?;
            show_notes(&notebook, ctx, &mut out)
        }
        Some(Command::Cat { id }) => position(id)
            .and_then(|pos| notebook.format_note_with(pos, ViewMode::Card, &ctx))
            .and_then(|card| {
                writeln!(out, "{card}")?;
                Ok(())
            }),
        Some(Command::Ed { id }) => position(id)
            .and_then(|pos| edit(&mut notebook, pos, &mut input, &mut out)),
        Some(Command::Rm { id }) => position(id)
            .and_then(|pos| notebook.delete_note(pos))
            .and_then(|_| show_notes(&notebook, ctx, &mut out)),
    };

    match outcome {
        Err(NotebookError::NotFound(id)) => {
            info!("reported missing note ({id}) to the user");
            writeln!(out, "{}", NotebookError::NotFound(id).user_message())?;
            Ok(())
        }
        other => other,
    }
}

/// Negative ids name no note; everything else is checked by the store.
fn position(id: i64) -> Result<usize> {
    usize::try_from(id).map_err(|_| NotebookError::NotFound(id))
}

fn edit(
    notebook: &mut Notebook,
    id: usize,
    input: &mut impl io::BufRead,
    out: &mut impl Write,
) -> Result<()> {
    // Report a bad id before asking for anything.
    notebook.get_note(id)?;
    let Some(values) = prompt::ask_edit(input, out)? else {
        return abort(out);
    };
    notebook.edit_note(id, &values.title, &values.content)?;
    writeln!(out, "Note edited.")?;
    Ok(())
}

fn abort(out: &mut impl Write) -> Result<()> {
    warn!("input ended before the command completed; nothing saved");
    writeln!(out, "\nAborting.")?;
    Ok(())
}

/// Print every note in list view, or the "no notes yet" hint.
pub fn show_notes(
    notebook: &Notebook,
    ctx: FormatContext,
    out: &mut impl Write,
) -> Result<()> {
    match notebook.list_notes_with(ctx) {
        Listing::Empty => {
            writeln!(out, "You don't have any notes yet.")?;
            writeln!(out, "Try adding a note with 'cup add [note]'")?;
        }
        Listing::Notes(lines) => {
            writeln!(out, "{}", ctx.format_header("Your notes:"))?;
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
