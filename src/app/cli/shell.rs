//! Interactive session keeping one mirror alive across commands.

use clap::{Parser, Subcommand};
use tracing::warn;

use super::commands::{CatalogCommand, execute};
use crate::app::CatalogService;
use crate::ports::{CatalogView, Interaction, ProductStore};

#[derive(Parser)]
#[command(name = "catalog", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Catalog(CatalogCommand),
    /// Fetch the full listing again
    Reload,
    /// Leave the shell
    #[clap(visible_alias = "quit")]
    Exit,
}

/// Run the shell until `exit` or until `lines` runs dry.
///
/// The listing is loaded once up front. A failed load leaves the mirror empty
/// and the shell usable. Command failures are shown in the banner and do not
/// end the session.
pub fn run_shell<S, V, I>(
    service: &mut CatalogService<S, V>,
    interaction: &mut I,
    lines: impl IntoIterator<Item = String>,
) where
    S: ProductStore,
    V: CatalogView,
    I: Interaction,
{
    if let Err(err) = service.load() {
        service.report(&err);
    }

    for line in lines {
        let words = split_words(&line);
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                if let Err(io_err) = err.print() {
                    warn!(error = %io_err, "failed to print command usage");
                }
                continue;
            }
        };

        let result = match command {
            ShellCommand::Exit => break,
            ShellCommand::Reload => service.load().map(|_| ()),
            ShellCommand::Catalog(command) => execute(service, command, interaction, true),
        };
        if let Err(err) = result {
            service.report(&err);
        }
    }
}

/// Split a line on whitespace, keeping double-quoted runs together.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        words.push(current);
    }
    words
}
