//! Interactive board shell.
//!
//! Each input line is one gesture. Lines are parsed with clap so shell
//! commands get the same validation and help output as the CLI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::board::{render_board, render_lead_table, render_placeholder, Board};
use crate::config::Config;
use crate::insight::{provider_from_config, InsightProvider, PendingInsight};
use crate::models::{LeadDraft, LeadStatus, Priority, Section, SortKey};
use crate::view::project;

const PROMPT: &str = "leadboard> ";

#[derive(Parser, Debug)]
#[command(
    name = "leadboard",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]..."
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the pipeline board
    Board {
        /// Sort key for this view only (date, priority, value)
        #[arg(short, long)]
        sort: Option<SortKey>,
    },

    /// List leads as a table, in board order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create a lead (unset fields use the New Lead defaults)
    New {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        value: Option<u64>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(short, long)]
        stage: Option<LeadStatus>,
        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a lead
    Delete { id: String },

    /// Move a lead to another stage
    Move { id: String, stage: LeadStatus },

    /// Pick up a lead card
    Drag { id: String },

    /// Drop the held card onto a stage
    Drop { stage: String },

    /// Put the held card back without moving it
    Cancel,

    /// Change the board sort key (date, priority, value)
    Sort { key: SortKey },

    /// Switch tab (dashboard, pipeline, billing, calendar, lists, settings)
    View { section: Section },

    /// Ask the assistant for sales advice
    Ask {
        /// Return immediately; the answer prints when it arrives
        #[arg(short, long)]
        background: bool,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Forget the background question; its answer will be ignored
    Dismiss,

    /// Draft a follow-up email for a lead
    Draft {
        id: String,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        context: Vec<String>,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    board: Board,
    provider: Arc<dyn InsightProvider>,
    pending: Option<PendingInsight>,
}

impl Shell {
    pub fn new(board: Board, provider: Arc<dyn InsightProvider>) -> Self {
        Self {
            board,
            provider,
            pending: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Tokenize and run one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let words = match shell_words::split(line) {
            Ok(words) if words.is_empty() => return Ok(Flow::Continue),
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "{} {e}", "✗".red())?;
                return Ok(Flow::Continue);
            }
        };

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => self.execute(parsed.command, out),
            Err(e) => {
                write!(out, "{}", e.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand, out: &mut dyn Write) -> Result<Flow> {
        match command {
            ShellCommand::Board { sort } => {
                let projection = match sort {
                    Some(key) => project(self.board.store().list(), key),
                    None => self.board.projection(),
                };
                write!(out, "{}", render_board(&projection))?;
            }
            ShellCommand::List { json } => {
                let projection = self.board.projection();
                let leads = projection.flatten();
                if json {
                    let text = serde_json::to_string_pretty(&leads)
                        .context("Failed to serialize leads")?;
                    writeln!(out, "{text}")?;
                } else if leads.is_empty() {
                    writeln!(out, "{} No leads on the board", "ℹ".blue())?;
                } else {
                    write!(out, "{}", render_lead_table(&leads))?;
                }
            }
            ShellCommand::New {
                name,
                company,
                email,
                value,
                priority,
                stage,
                tags,
            } => {
                let defaults = LeadDraft::default();
                let draft = LeadDraft {
                    name: name.unwrap_or(defaults.name),
                    company: company.unwrap_or(defaults.company),
                    email: email.unwrap_or(defaults.email),
                    value: value.unwrap_or(defaults.value),
                    priority: priority.unwrap_or(defaults.priority),
                    status: stage.unwrap_or(defaults.status),
                    tags: if tags.is_empty() { defaults.tags } else { tags },
                    avatar: None,
                };
                let lead = self.board.create(draft);
                writeln!(
                    out,
                    "{} Created lead '{}' ({}) in {}",
                    "✓".green(),
                    lead.id.cyan(),
                    lead.company,
                    lead.status
                )?;
            }
            ShellCommand::Delete { id } => {
                if self.board.delete(&id) {
                    writeln!(out, "{} Deleted lead '{}'", "✓".green(), id.cyan())?;
                } else {
                    writeln!(out, "{} No lead '{}' on the board", "ℹ".blue(), id)?;
                }
            }
            ShellCommand::Move { id, stage } => {
                if self.board.move_lead(&id, stage) {
                    writeln!(out, "{} Moved '{}' to {}", "✓".green(), id.cyan(), stage)?;
                } else {
                    writeln!(out, "{} No lead '{}' on the board", "ℹ".blue(), id)?;
                }
            }
            ShellCommand::Drag { id } => {
                if self.board.begin_drag(&id) {
                    writeln!(out, "{} Holding '{}'", "→".dimmed(), id.cyan())?;
                } else {
                    writeln!(out, "{} No lead '{}' on the board", "ℹ".blue(), id)?;
                }
            }
            ShellCommand::Drop { stage } => match stage.parse::<LeadStatus>() {
                Ok(target) => match self.board.drop_onto(target) {
                    Some(id) => {
                        writeln!(out, "{} Moved '{}' to {}", "✓".green(), id.cyan(), target)?
                    }
                    None => writeln!(out, "{} Nothing is being dragged", "ℹ".blue())?,
                },
                Err(e) => {
                    // Not a drop target: abort the gesture
                    let abandoned = self.board.cancel_drag();
                    writeln!(out, "{} {e}", "✗".red())?;
                    if let Some(id) = abandoned {
                        writeln!(out, "  {} '{}' returned to its column", "→".dimmed(), id)?;
                    }
                }
            },
            ShellCommand::Cancel => match self.board.cancel_drag() {
                Some(id) => writeln!(out, "{} Put back '{}'", "✓".green(), id.cyan())?,
                None => writeln!(out, "{} Nothing is being dragged", "ℹ".blue())?,
            },
            ShellCommand::Sort { key } => {
                self.board.set_sort(key);
                write!(out, "{}", render_board(&self.board.projection()))?;
            }
            ShellCommand::View { section } => {
                self.board.switch_to(section);
                if section == Section::Pipeline {
                    write!(out, "{}", render_board(&self.board.projection()))?;
                } else {
                    write!(out, "{}", render_placeholder(section))?;
                }
            }
            ShellCommand::Ask { background, prompt } => {
                let request = PendingInsight::insight(self.provider.clone(), prompt.join(" "));
                if background {
                    if let Some(previous) = self.pending.replace(request) {
                        previous.dismiss();
                    }
                    writeln!(out, "{} Asking in the background...", "…".dimmed())?;
                } else {
                    writeln!(out, "{}", request.wait())?;
                }
            }
            ShellCommand::Dismiss => match self.pending.take() {
                Some(request) => {
                    request.dismiss();
                    writeln!(out, "{} Dismissed pending question", "✓".green())?;
                }
                None => writeln!(out, "{} No pending question", "ℹ".blue())?,
            },
            ShellCommand::Draft { id, context } => match self.board.store().get(&id) {
                Some(lead) => {
                    let request = PendingInsight::email_draft(
                        self.provider.clone(),
                        lead.name.clone(),
                        context.join(" "),
                    );
                    writeln!(out, "{}", request.wait())?;
                }
                None => writeln!(out, "{} No lead '{}' on the board", "ℹ".blue(), id)?,
            },
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Print a background answer if it has arrived.
    pub fn collect_pending(&mut self, out: &mut dyn Write) -> Result<()> {
        let answer = self.pending.as_ref().and_then(PendingInsight::poll);
        if let Some(text) = answer {
            self.pending = None;
            writeln!(out, "{} {}", "Assistant:".bold(), text)?;
        }
        Ok(())
    }
}

/// Run the interactive shell on stdin/stdout.
pub fn run(config: &Config) -> Result<()> {
    let board = Board::from_config(&config.board);
    let provider = provider_from_config(&config.insight);
    let mut shell = Shell::new(board, provider);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", crate::LOGO.cyan());
    println!("Type 'help' for commands, 'quit' to leave.\n");
    print!("{}", render_board(&shell.board().projection()));

    let mut line = String::new();
    loop {
        shell.collect_pending(&mut stdout)?;
        print!("{PROMPT}");
        stdout.flush().context("Failed to flush stdout")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            println!();
            break;
        }

        if shell.handle_line(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    if let Some(id) = shell.board.cancel_drag() {
        tracing::debug!(id = %id, "drag abandoned at exit");
    }
    Ok(())
}
