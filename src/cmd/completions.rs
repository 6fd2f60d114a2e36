//! Completions command implementation
//!
//! Handles the `bundle-compare completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-compare completions bash > /etc/bash_completion.d/bundle-compare
///
/// # Zsh
/// bundle-compare completions zsh > ~/.zfunc/_bundle-compare
/// ```
pub fn cmd_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
