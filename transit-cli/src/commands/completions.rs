//! Shell completions command - Generate shell completion scripts
//!
//! Generates completion scripts for various shells:
//! - bash: Add to ~/.bashrc or ~/.bash_completion
//! - zsh: Add to ~/.zshrc or put in fpath
//! - fish: Add to ~/.config/fish/completions/
//! - powershell: Add to $PROFILE
//! - elvish: Add to ~/.elvish/rc.elv

use std::io::{self, Write};

use clap::Command;
use clap_complete::{generate, shells};
use colored::Colorize;
use serde::Serialize;

use crate::output::{CsvOutput, Output, OutputConfig, OutputFormat, Outputter};

/// Name completions are registered under
const BIN_NAME: &str = "transit";

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Instructions for installing completions
#[derive(Debug, Serialize)]
pub struct CompletionInstructions {
    pub shell: String,
    pub instructions: Vec<String>,
}

impl Outputter for CompletionInstructions {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} completions for {}\n\n",
            "transit".cyan().bold(),
            self.shell.yellow()
        ));
        output.push_str(&format!("{}\n", "Installation:".cyan().bold()));
        for instruction in &self.instructions {
            output.push_str(&format!("  {}\n", instruction));
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .instructions
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| vec![self.shell.clone(), line.clone()])
            .collect();
        CsvOutput::from_rows(&["shell", "instruction"], &rows)
    }
}

/// Get installation instructions for a shell
fn get_instructions(shell: Shell) -> Vec<String> {
    match shell {
        Shell::Bash => vec![
            "# Add to ~/.bashrc:".to_string(),
            "eval \"$(transit completions bash)\"".to_string(),
            "".to_string(),
            "# Or save to a file:".to_string(),
            "transit completions bash > ~/.local/share/bash-completion/completions/transit".to_string(),
        ],
        Shell::Zsh => vec![
            "# Add to ~/.zshrc:".to_string(),
            "eval \"$(transit completions zsh)\"".to_string(),
            "".to_string(),
            "# Or save to a file in fpath:".to_string(),
            "transit completions zsh > ~/.zfunc/_transit".to_string(),
            "# Then add to ~/.zshrc before compinit:".to_string(),
            "fpath=(~/.zfunc $fpath)".to_string(),
        ],
        Shell::Fish => vec![
            "# Save to fish completions directory:".to_string(),
            "transit completions fish > ~/.config/fish/completions/transit.fish".to_string(),
        ],
        Shell::PowerShell => vec![
            "# Add to $PROFILE:".to_string(),
            "Invoke-Expression (& transit completions powershell | Out-String)".to_string(),
        ],
        Shell::Elvish => vec![
            "# Add to ~/.elvish/rc.elv:".to_string(),
            "eval (transit completions elvish | slurp)".to_string(),
        ],
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, BIN_NAME, out),
        Shell::Zsh => generate(shells::Zsh, cmd, BIN_NAME, out),
        Shell::Fish => generate(shells::Fish, cmd, BIN_NAME, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, BIN_NAME, out),
        Shell::Elvish => generate(shells::Elvish, cmd, BIN_NAME, out),
    }
}

/// Run the completions command
///
/// Prints the script itself, or with `show_instructions` how to install it.
pub fn run(
    shell: Shell,
    show_instructions: bool,
    cmd: &mut Command,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if show_instructions {
        let instructions = CompletionInstructions {
            shell: shell.to_string(),
            instructions: get_instructions(shell),
        };
        return Output::new(instructions, format).render();
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_completions(shell, cmd, &mut handle);
    handle.flush()?;
    Ok(())
}
