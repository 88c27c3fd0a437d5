//! End-to-end tests for the portfolio shell loop.

use asciifolio::shell::table::{Action, Category, Command, CommandTable};
use asciifolio::shell::{LineReader, Outcome, Pacing};
use asciifolio::{Shell, ShellOptions};
use std::io::{self, Cursor, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static CALM: AtomicBool = AtomicBool::new(false);
static CTRL_C: AtomicBool = AtomicBool::new(false);

fn options() -> ShellOptions {
    console::set_colors_enabled(false);
    ShellOptions { art_path: None, pacing: Pacing::instant(), clear_on_start: false }
}

fn shell() -> Shell<Vec<u8>> {
    Shell::new(Vec::new(), options()).with_seed(42)
}

fn run(input: &str) -> (Vec<String>, String) {
    let mut shell = shell();
    shell.run(LineReader::with_flag(Cursor::new(input.to_string()), &CALM)).unwrap();
    let history = shell.session().history().to_vec();
    (history, String::from_utf8(shell.into_output()).unwrap())
}

#[test]
fn exit_stops_the_loop_and_is_recorded() {
    let (history, out) = run("help\nexit\nabout\n");
    assert_eq!(history, ["help", "exit"]);
    assert!(out.contains("AVAILABLE COMMANDS"));
    assert!(out.contains("Thanks for visiting my portfolio!"));
    assert!(!out.contains("About Me"));
}

#[test]
fn every_exit_alias_works() {
    for alias in ["exit", "quit", "q", "  QUIT  "] {
        let mut shell = shell();
        assert_eq!(shell.handle_line(alias).unwrap(), Outcome::Exit);
    }
}

#[test]
fn blank_lines_are_not_recorded() {
    let (history, _) = run("\n   \n\thelp  \nq\n");
    assert_eq!(history, ["help", "q"]);
}

#[test]
fn unknown_input_is_recorded_too() {
    let (history, out) = run("xyz\nq\n");
    assert_eq!(history, ["xyz", "q"]);
    assert!(out.contains("Command not found: xyz"));
}

#[test]
fn input_is_lowercased_but_history_keeps_case() {
    let mut shell = shell();
    assert_eq!(shell.handle_line("  HeLp ").unwrap(), Outcome::Ran("help"));
    assert_eq!(shell.session().history(), ["HeLp"]);
}

#[test]
fn partial_input_offers_suggestions() {
    let mut shell = shell();
    assert_eq!(shell.handle_line("hel").unwrap(), Outcome::Suggested(vec!["help"]));
    assert_eq!(
        shell.handle_line("h").unwrap(),
        Outcome::Suggested(vec!["help", "hack", "history"])
    );
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("Did you mean:"));
    assert!(out.contains("→ history"));
}

#[test]
fn unmatched_input_leaves_table_untouched() {
    let mut shell = shell();
    let before: Vec<_> = shell.table().names().collect();
    assert_eq!(shell.handle_line("zzz").unwrap(), Outcome::NotFound("zzz".into()));
    let after: Vec<_> = shell.table().names().collect();
    assert_eq!(before, after);
}

#[test]
fn too_many_matches_count_as_not_found() {
    let names = ["alpha", "amber", "anchor", "apple", "arrow", "aspen"];
    let table = CommandTable::new(
        names
            .iter()
            .map(|&name| Command {
                name,
                summary: "",
                category: Category::Fun,
                actions: &[Action::Joke],
            })
            .collect(),
    );
    let mut shell = shell().with_table(table);
    assert_eq!(shell.handle_line("a").unwrap(), Outcome::NotFound("a".into()));
    assert_eq!(shell.handle_line("an").unwrap(), Outcome::Suggested(vec!["anchor"]));
}

#[test]
fn end_of_input_says_goodbye() {
    let (history, out) = run("whoami");
    assert_eq!(history, ["whoami"]);
    assert!(out.contains("$ whoami"));
    assert!(out.contains("Thanks for visiting my portfolio!"));
}

#[test]
fn interrupt_ends_the_session_gracefully() {
    CTRL_C.store(true, Ordering::SeqCst);
    let mut shell = shell();
    shell.run(LineReader::with_flag(Cursor::new("help\n"), &CTRL_C)).unwrap();
    assert!(shell.session().history().is_empty());
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("Thanks for visiting my portfolio!"));
    assert!(!out.contains("AVAILABLE COMMANDS"));
}

#[test]
fn history_lists_commands_in_order() {
    let (_, out) = run("help\nhistory\nq\n");
    assert!(out.contains(" 1  help"));
    assert!(out.contains(" 2  history"));
}

#[test]
fn clear_redraws_banner_and_welcome() {
    let (_, out) = run("clear\nq\n");
    assert!(out.contains("\x1b[2J"));
    assert!(out.contains("Developer | Designer | Builder"));
    assert_eq!(out.matches("Welcome to my Interactive Portfolio!").count(), 2);
}

#[test]
fn startup_clears_screen_when_asked() {
    let mut shell = Shell::new(Vec::new(), ShellOptions { clear_on_start: true, ..options() });
    shell.start().unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.starts_with("\x1b[2J"));
}

/// Fails any write mentioning the projects page.
struct Flaky(Vec<u8>);

impl Write for Flaky {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.windows(8).any(|w| w == b"Featured") {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn handler_failure_is_reported_and_loop_continues() {
    let mut shell = Shell::new(Flaky(Vec::new()), options());
    shell
        .run(LineReader::with_flag(Cursor::new("projects\nwhoami\nq\n"), &CALM))
        .unwrap();
    assert_eq!(shell.session().history(), ["projects", "whoami", "q"]);
    let out = String::from_utf8(shell.into_output().0).unwrap();
    assert!(out.contains("Error: Command `projects` failed"));
    assert!(out.contains("disk on fire"));
    assert!(out.contains("$ whoami"));
}

#[test]
fn handle_line_reports_failure_outcome() {
    let mut shell = Shell::new(Flaky(Vec::new()), options());
    assert_eq!(shell.handle_line("projects").unwrap(), Outcome::Failed("projects"));
    assert_eq!(shell.handle_line("help").unwrap(), Outcome::Ran("help"));
}
