//! Line-oriented menu loop.
//!
//! Reads one selection per line, prompts for the selection's arguments, runs
//! the operation and reports the outcome. Operation failures are printed and
//! the loop continues; only `Exit` or end of input ends it.

use std::io::{BufRead, Write};

use crate::app::Session;
use crate::app::commands::{change_directory, create, exists, list, remove, rename, size};
use crate::domain::{AppError, CreateKind};
use crate::ports::Filesystem;

const TITLE: &str = "====== HeyFiles FILE MANAGER ======";

const MENU_ITEMS: [&str; 8] = [
    "[0] List directory",
    "[1] Remove file/directory",
    "[2] Rename file",
    "[3] Create file/directory",
    "[4] Check existence",
    "[5] Change directory",
    "[6] Show size",
    "[9] Exit",
];

/// A fully collected command, ready to run against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    List { path: String },
    Remove { path: String },
    Rename { dir: String, old_name: String, new_name: String },
    Create { kind: CreateKind, name: String },
    Exists { name: String },
    ChangeDirectory { path: String },
    Size { path: String },
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    List,
    Remove,
    Rename,
    Create,
    Exists,
    ChangeDirectory,
    Size,
    Exit,
}

impl Selection {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            0 => Some(Selection::List),
            1 => Some(Selection::Remove),
            2 => Some(Selection::Rename),
            3 => Some(Selection::Create),
            4 => Some(Selection::Exists),
            5 => Some(Selection::ChangeDirectory),
            6 => Some(Selection::Size),
            9 => Some(Selection::Exit),
            _ => None,
        }
    }
}

/// Interactive shell over arbitrary input and output streams.
pub struct Menu<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Menu<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Run until `Exit` is chosen or input ends.
    ///
    /// Only failures writing to the terminal streams are returned.
    pub fn run<F: Filesystem>(&mut self, session: &mut Session<F>) -> Result<(), AppError> {
        loop {
            self.print_menu(session)?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            let Some(selection) = Selection::parse(&choice) else {
                writeln!(self.out, "Invalid option")?;
                continue;
            };
            let Some(command) = self.collect(selection)? else {
                return Ok(());
            };
            if command == MenuCommand::Exit {
                return Ok(());
            }

            match execute(session, command) {
                Ok(lines) => {
                    for line in lines {
                        writeln!(self.out, "{}", line)?;
                    }
                }
                Err(e) => writeln!(self.err, "Error: {}", e)?,
            }
        }
    }

    fn print_menu<F: Filesystem>(&mut self, session: &Session<F>) -> Result<(), AppError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", TITLE)?;
        writeln!(self.out, "Current directory: {}", session.current_dir().display())?;
        for item in MENU_ITEMS {
            writeln!(self.out, "{}", item)?;
        }
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompt for each argument of `selection`. `None` means input ended.
    fn collect(&mut self, selection: Selection) -> Result<Option<MenuCommand>, AppError> {
        let command = match selection {
            Selection::List => {
                let Some(path) = self.prompt("Path")? else { return Ok(None) };
                MenuCommand::List { path }
            }
            Selection::Remove => {
                let Some(path) = self.prompt("Path")? else { return Ok(None) };
                MenuCommand::Remove { path }
            }
            Selection::Rename => {
                let Some(dir) = self.prompt("Directory")? else { return Ok(None) };
                let Some(old_name) = self.prompt("Old name")? else { return Ok(None) };
                let Some(new_name) = self.prompt("New name")? else { return Ok(None) };
                MenuCommand::Rename { dir, old_name, new_name }
            }
            Selection::Create => {
                write!(self.out, "[1] Directory\n[2] File\n> ")?;
                self.out.flush()?;
                let Some(kind) = self.read_line()? else { return Ok(None) };
                // Anything but 1 creates a file.
                if kind.trim() == "1" {
                    let Some(name) = self.prompt("Directory name")? else { return Ok(None) };
                    MenuCommand::Create { kind: CreateKind::Directory, name }
                } else {
                    let Some(name) = self.prompt("File name")? else { return Ok(None) };
                    MenuCommand::Create { kind: CreateKind::File, name }
                }
            }
            Selection::Exists => {
                let Some(name) = self.prompt("Name")? else { return Ok(None) };
                MenuCommand::Exists { name }
            }
            Selection::ChangeDirectory => {
                let Some(path) = self.prompt("Path")? else { return Ok(None) };
                MenuCommand::ChangeDirectory { path }
            }
            Selection::Size => {
                let Some(path) = self.prompt("Path")? else { return Ok(None) };
                MenuCommand::Size { path }
            }
            Selection::Exit => MenuCommand::Exit,
        };
        Ok(Some(command))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }
}

/// Run one command and render its success output.
pub fn execute<F: Filesystem>(
    session: &mut Session<F>,
    command: MenuCommand,
) -> Result<Vec<String>, AppError> {
    let lines = match command {
        MenuCommand::List { path } => list::execute(session, &path)?
            .into_iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect(),
        MenuCommand::Remove { path } => {
            let removed = remove::execute(session, &path)?;
            vec![format!("{} '{}' removed successfully", removed.kind.label(), path)]
        }
        MenuCommand::Rename { dir, old_name, new_name } => {
            rename::execute(session, &dir, &old_name, &new_name)?;
            vec!["Renamed successfully".to_string()]
        }
        MenuCommand::Create { kind, name } => {
            create::execute(session, kind, &name)?;
            match kind {
                CreateKind::Directory => vec!["Directory created".to_string()],
                CreateKind::File => vec!["File created".to_string()],
            }
        }
        MenuCommand::Exists { name } => {
            if exists::execute(session, &name) {
                vec![format!("'{}' exists", name)]
            } else {
                vec![format!("'{}' does not exist", name)]
            }
        }
        MenuCommand::ChangeDirectory { path } => {
            change_directory::execute(session, &path)?;
            vec!["Current directory changed".to_string()]
        }
        MenuCommand::Size { path } => {
            let report = size::execute(session, &path)?;
            vec![format!("{} size: {} bytes", report.kind.label(), report.bytes)]
        }
        MenuCommand::Exit => Vec::new(),
    };
    Ok(lines)
}
