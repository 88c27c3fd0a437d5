//! Interactive portfolio shell: a line-oriented command loop over a static
//! command table, with prefix autocomplete for unknown input.

pub mod banner;
pub mod content;
pub mod input;
pub mod interrupt;
pub mod screen;
pub mod session;
pub mod table;

pub use banner::Banner;
pub use input::{Input, LineReader};
pub use screen::{Pacing, Screen};
pub use session::Session;
pub use table::{Action, Command, CommandTable};

use crate::{FolioError, Result};
use console::style;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What a single input line led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing recorded.
    Skipped,
    Exit,
    Ran(&'static str),
    Suggested(Vec<&'static str>),
    NotFound(String),
    /// The command started but one of its actions failed.
    Failed(&'static str),
}

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub art_path: Option<PathBuf>,
    pub pacing: Pacing,
    pub clear_on_start: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            art_path: Some(PathBuf::from(banner::DEFAULT_ART_PATH)),
            pacing: Pacing::default(),
            clear_on_start: true,
        }
    }
}

pub struct Shell<W: Write> {
    table: CommandTable,
    session: Session,
    screen: Screen<W>,
    banner: Banner,
    clear_on_start: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(out: W, options: ShellOptions) -> Self {
        let banner = options.art_path.map(Banner::load).unwrap_or_default();
        Self {
            table: CommandTable::portfolio(),
            session: Session::new(),
            screen: Screen::new(out, options.pacing),
            banner,
            clear_on_start: options.clear_on_start,
        }
    }

    /// Fix the random source so quotes, jokes and matrix output repeat.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.screen = self.screen.with_seed(seed);
        self
    }

    pub fn with_table(mut self, table: CommandTable) -> Self {
        self.table = table;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn into_output(self) -> W {
        self.screen.into_inner()
    }

    /// Draw the startup screen.
    pub fn start(&mut self) -> Result<()> {
        if self.clear_on_start {
            self.perform(Action::ClearScreen)?;
        }
        self.perform(Action::Banner)?;
        self.perform(Action::Welcome)
    }

    /// Run until an exit command, end of input or an interrupt.
    pub fn run<R: BufRead>(&mut self, mut input: LineReader<R>) -> Result<()> {
        self.start()?;
        loop {
            self.prompt()?;
            match input.next_line()? {
                Input::Line(line) => {
                    if self.handle_line(&line)? == Outcome::Exit {
                        break;
                    }
                }
                Input::Eof | Input::Interrupted => {
                    tracing::debug!("input closed");
                    self.screen.blank()?;
                    content::farewell(&mut self.screen)?;
                    break;
                }
            }
        }
        self.screen.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        self.screen.write(format_args!(
            "{}:{} ",
            style("portfolio@terminal").green(),
            style("~$").blue()
        ))?;
        Ok(())
    }

    /// Process one raw input line. Action failures are reported on screen
    /// and returned as [`Outcome::Failed`]; only output errors while
    /// reporting propagate.
    pub fn handle_line(&mut self, raw: &str) -> Result<Outcome> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Outcome::Skipped);
        }
        self.session.record(trimmed);
        let cmd = trimmed.to_lowercase();
        tracing::debug!(command = %cmd, "dispatch");

        if CommandTable::is_exit(&cmd) {
            content::farewell(&mut self.screen)?;
            return Ok(Outcome::Exit);
        }

        if let Some(command) = self.table.get(&cmd) {
            let (name, actions) = (command.name, command.actions);
            return match self.execute(actions) {
                Ok(()) => Ok(Outcome::Ran(name)),
                Err(e) => {
                    let err = FolioError::HandlerFailure {
                        command: name.to_string(),
                        reason: e.to_string(),
                    };
                    tracing::warn!("{err}");
                    content::failure(&mut self.screen, &err)?;
                    Ok(Outcome::Failed(name))
                }
            };
        }

        let suggestions = self.table.suggestions(&cmd);
        if (1..=table::MAX_SUGGESTIONS).contains(&suggestions.len()) {
            content::suggestions(&mut self.screen, &suggestions)?;
            Ok(Outcome::Suggested(suggestions))
        } else {
            content::not_found(&mut self.screen, &cmd)?;
            Ok(Outcome::NotFound(cmd))
        }
    }

    fn execute(&mut self, actions: &[Action]) -> Result<()> {
        self.screen.blank()?;
        for &action in actions {
            self.perform(action)?;
        }
        self.screen.blank()?;
        Ok(())
    }

    fn perform(&mut self, action: Action) -> Result<()> {
        let out = &mut self.screen;
        match action {
            Action::ClearScreen => out.clear()?,
            Action::Banner => self.banner.render(out)?,
            Action::Welcome => content::welcome(out)?,
            Action::Help => content::help(out, &self.table)?,
            Action::Whoami => content::whoami(out)?,
            Action::About => content::about(out)?,
            Action::Skills => content::skills(out)?,
            Action::Projects => content::projects(out)?,
            Action::Experience => content::experience(out)?,
            Action::Contact => content::contact(out)?,
            Action::Social => content::social(out)?,
            Action::Email => content::email(out)?,
            Action::Resume => content::resume(out)?,
            Action::Quote => content::quote(out)?,
            Action::Joke => content::joke(out)?,
            Action::Time => content::time(out)?,
            Action::Matrix => content::matrix(out)?,
            Action::Hack => content::hack(out)?,
            Action::History => content::history(out, &self.session)?,
        }
        Ok(())
    }
}
