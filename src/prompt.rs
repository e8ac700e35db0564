//! Line-oriented prompt mode.
//!
//! Prints the welcome card and a numbered menu, reads one command per
//! line, and dispatches it. Effects that leave the prompt (the viewer,
//! the system opener) go through [`Host`] so the session can be driven
//! from any reader and writer.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::links::{Link, LinkError};
use crate::report::{DEFAULT_COLUMNS, Section, farewell_card, format_section};
use crate::types::{OutputFormat, Portfolio};

pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";
const CONTINUE_PROMPT: &str = "Press Enter to return to main menu...";
const COMMAND_PROMPT: &str = "Enter command: ";

// ============================================================================
// COMMANDS
// ============================================================================

/// A prompt-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show(Section),
    Resume,
    Open(Link),
    Menu,
    Exit,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Show(section) => section.name(),
            Command::Resume => "resume",
            Command::Open(link) => link.name(),
            Command::Menu => "menu",
            Command::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numbered menu entries, in display order.
pub const MENU: [(&str, Command); 15] = [
    ("💼 Work Experience", Command::Show(Section::Work)),
    ("🎓 Education", Command::Show(Section::Education)),
    ("⚙️ Skills & Expertise", Command::Show(Section::Skills)),
    ("🚀 Featured Projects", Command::Show(Section::Projects)),
    ("🏆 Awards & Recognition", Command::Show(Section::Awards)),
    ("📝 Publications & Research", Command::Show(Section::Publications)),
    ("🔬 Research Interests", Command::Show(Section::Interests)),
    ("📬 Contact Information", Command::Show(Section::Contact)),
    ("🌐 Visit Website", Command::Open(Link::Website)),
    ("📧 Send Email", Command::Open(Link::Email)),
    ("💼 View LinkedIn", Command::Open(Link::LinkedIn)),
    ("🐙 View GitHub", Command::Open(Link::GitHub)),
    ("📝 Read Blog", Command::Open(Link::Blog)),
    ("📄 View Full Resume (Visual Mode)", Command::Resume),
    ("❌ Exit", Command::Exit),
];

impl FromStr for Command {
    type Err = String;

    /// Accepts a command name or a menu number. Case and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        if let Ok(n) = s.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| MENU.get(i))
                .map(|(_, cmd)| *cmd)
                .ok_or_else(|| format!("no menu entry {}", n));
        }

        match s.as_str() {
            "resume" => return Ok(Command::Resume),
            "menu" => return Ok(Command::Menu),
            "exit" => return Ok(Command::Exit),
            _ => {}
        }
        if let Ok(link) = s.parse::<Link>() {
            return Ok(Command::Open(link));
        }
        match s.parse::<Section>() {
            Ok(Section::Welcome) | Err(_) => Err(format!("unknown command: {}", s)),
            Ok(section) => Ok(Command::Show(section)),
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Effects a prompt session delegates to the caller.
pub trait Host {
    /// Run the full-screen viewer and return when it closes.
    fn view_resume(&mut self, portfolio: &Portfolio) -> io::Result<()>;

    /// Open an external target.
    fn open_link(&mut self, link: Link, target: &str) -> Result<(), LinkError>;
}

/// What the session does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive prompt over arbitrary input and output.
pub struct PromptSession<'a, R, W, H> {
    portfolio: &'a Portfolio,
    columns: u16,
    input: R,
    output: W,
    host: H,
}

impl<'a, R: BufRead, W: Write, H: Host> PromptSession<'a, R, W, H> {
    pub fn new(portfolio: &'a Portfolio, input: R, output: W, host: H) -> Self {
        PromptSession {
            portfolio,
            columns: DEFAULT_COLUMNS,
            input,
            output,
            host,
        }
    }

    /// Size cards for a terminal this many columns wide.
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("prompt session started");
        loop {
            self.print_menu()?;
            let Some(command) = self.read_command()? else {
                return self.farewell();
            };
            tracing::debug!(%command, "prompt command");
            if self.dispatch(command)? == Flow::Exit {
                return self.farewell();
            }
        }
    }

    pub fn into_parts(self) -> (R, W, H) {
        (self.input, self.output, self.host)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let welcome = format_section(
            self.portfolio,
            Section::Welcome,
            OutputFormat::Human,
            self.columns,
        );
        writeln!(self.output, "{}", welcome)?;
        writeln!(self.output, "What would you like to explore?\n")?;
        for (i, (label, _)) in MENU.iter().enumerate() {
            writeln!(self.output, "  {:>2}. {}", i + 1, label)?;
        }
        writeln!(
            self.output,
            "\n💡 Tip: You can also type commands like \"education\", \"skills\", \"work\", etc.\n"
        )?;
        Ok(())
    }

    /// Prompt until a valid command arrives. None on end of input.
    fn read_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            write!(self.output, "{}", COMMAND_PROMPT)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Command>() {
                Ok(command) => return Ok(Some(command)),
                Err(_) => writeln!(self.output, "{}", INVALID_COMMAND)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Show(section) => {
                let panel =
                    format_section(self.portfolio, section, OutputFormat::Human, self.columns);
                writeln!(self.output, "\n{}", panel)?;
                write!(self.output, "{}", CONTINUE_PROMPT)?;
                self.output.flush()?;
                if self.read_line()?.is_none() {
                    return Ok(Flow::Exit);
                }
            }
            Command::Resume => {
                if let Err(e) = self.host.view_resume(self.portfolio) {
                    tracing::warn!(error = %e, "viewer failed");
                    writeln!(self.output, "Error launching interactive resume: {}", e)?;
                }
            }
            Command::Open(link) => {
                let opened = link
                    .target(&self.portfolio.contact)
                    .and_then(|target| self.host.open_link(link, &target));
                if let Err(e) = opened {
                    tracing::warn!(error = %e, %link, "link open failed");
                    writeln!(self.output, "Warning: {}", e)?;
                }
            }
            Command::Menu => {}
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", farewell_card(self.portfolio))?;
        self.output.flush()?;
        tracing::info!("prompt session ended");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
