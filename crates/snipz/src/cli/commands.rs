//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, open the store, restore the selection
//! 3. **Dispatch**: Route commands to the API facade
//! 4. **Output Formatting**: Colored text or `--json`
//! 5. **Persistence of the selection**: written back after every successful command

use super::prompt::TerminalInteraction;
use super::render;
use super::setup::{Cli, Commands, FolderCommands};
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use snipzapp::api::SnipzApi;
use snipzapp::commands::{CmdMessage, CmdResult, MessageLevel};
use snipzapp::config::SnipzConfig;
use snipzapp::interaction::{FixedAnswer, Interaction};
use snipzapp::model::Selection;
use snipzapp::session;
use snipzapp::store::fs_backend::FsBackend;
use snipzapp::store::SnippetStore;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

/// Overrides the directory searched for `snipz.toml`.
const CONFIG_DIR_ENV: &str = "SNIPZ_CONFIG_DIR";

struct AppContext {
    api: SnipzApi<FsBackend>,
    config: SnipzConfig,
    session_path: PathBuf,
    selection: Selection,
    interaction: Box<dyn Interaction>,
    json: bool,
}

/// What to print once a command has run.
enum Output {
    Result(CmdResult),
    Listing(CmdResult),
    Status(CmdResult),
    Printed,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config()?;
    if let Some(Commands::Config) = &cli.command {
        print!("{}", render::format_config(&config));
        return Ok(());
    }

    let mut ctx = AppContext::init(config, &cli)?;

    let mut startup = Vec::new();
    if ctx.config.migrate_on_start && !matches!(cli.command, Some(Commands::Migrate)) {
        let migrated = ctx.api.migrate()?;
        startup.extend(
            migrated
                .messages
                .into_iter()
                .filter(|m| m.level != MessageLevel::Info),
        );
    }

    let command = cli.command.unwrap_or(Commands::List);
    let output = dispatch(&mut ctx, command)?;
    ctx.finish(startup, output)
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn load_config() -> Result<SnipzConfig> {
    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(SnipzConfig::default_config_dir);
    debug!("config dir: {:?}", config_dir);
    SnipzConfig::load(config_dir.as_deref()).context("loading configuration")
}

impl AppContext {
    fn init(config: SnipzConfig, cli: &Cli) -> Result<Self> {
        let storage_dir = config.storage_dir()?;
        let session_path = config.session_path()?;
        debug!("storage: {}", storage_dir.display());

        let store = SnippetStore::new(FsBackend::new(storage_dir), config.storage_key.clone());
        let api = SnipzApi::new(store, config.default_folder.clone());

        let remembered = session::load(&session_path, api.default_folder())?;
        let selection = api.revalidate(remembered)?;

        let interaction: Box<dyn Interaction> = if cli.yes {
            Box::new(FixedAnswer(true))
        } else if cli.no {
            Box::new(FixedAnswer(false))
        } else {
            Box::new(TerminalInteraction::new())
        };

        Ok(Self {
            api,
            config,
            session_path,
            selection,
            interaction,
            json: cli.json,
        })
    }

    fn finish(mut self, startup: Vec<CmdMessage>, output: Output) -> Result<()> {
        let (mut result, listing, status) = match output {
            Output::Result(r) => (r, false, false),
            Output::Listing(r) => (r, true, false),
            Output::Status(r) => (r, false, true),
            Output::Printed => (CmdResult::default(), false, false),
        };

        if let Some(selection) = result.selection.take() {
            self.selection = selection;
        }
        session::save(&self.session_path, &self.selection).context("saving session")?;

        if self.json {
            let mut messages = startup;
            messages.append(&mut result.messages);
            result.messages = messages;
            println!("{}", render::format_json(&result, &self.selection)?);
            return Ok(());
        }

        render::print_messages(&startup);
        render::print_messages(&result.messages);
        if let Some(view) = &result.snippet {
            render::print_snippet(view);
        }
        if listing {
            render::print_folders(&result.folders, &self.selection);
        }
        if status {
            print!("{}", render::format_status(&self.selection, &result.folders));
        }
        Ok(())
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<Output> {
    let selection = ctx.selection.clone();

    let result = match command {
        Commands::List => return Ok(Output::Listing(ctx.api.list()?)),
        Commands::Status => return Ok(Output::Status(ctx.api.list()?)),
        Commands::Config => return Ok(Output::Printed),
        Commands::Folder { action } => match action {
            FolderCommands::New { name } => ctx.api.create_folder(&name)?,
            FolderCommands::Rename { old, new } => {
                match new_name(ctx.interaction.as_mut(), "Rename folder", &old, new) {
                    Some(new) => ctx.api.rename_folder(&old, &new, &selection)?,
                    None => cancelled("Rename"),
                }
            }
            FolderCommands::Delete { name } => {
                let question = format!("Delete folder \"{}\" and all its snippets?", name.trim());
                if ctx.interaction.confirm(&question) {
                    ctx.api.delete_folder(&name, &selection)?
                } else {
                    cancelled("Delete")
                }
            }
            FolderCommands::Use { name } => ctx.api.select_folder(&name)?,
        },
        Commands::Save {
            name,
            content,
            file,
            folder,
        } => {
            let content = read_content(content, file)?;
            let folder = folder.unwrap_or(selection.folder);
            ctx.api.save_snippet(&folder, &name, &content)?
        }
        Commands::Show { name, folder } => {
            let (folder, name) = match (name, folder) {
                (Some(name), folder) => (folder.unwrap_or(selection.folder), name),
                (None, None) => match selection.snippet {
                    Some(name) => (selection.folder, name),
                    None => bail!("No snippet selected, pass a name"),
                },
                (None, Some(_)) => bail!("Pass a snippet name together with --folder"),
            };
            ctx.api.show_snippet(&folder, &name)?
        }
        Commands::Rename { old, new, folder } => {
            let folder = folder.unwrap_or_else(|| selection.folder.clone());
            match new_name(ctx.interaction.as_mut(), "Rename snippet", &old, new) {
                Some(new) => ctx.api.rename_snippet(&folder, &old, &new, &selection)?,
                None => cancelled("Rename"),
            }
        }
        Commands::Delete { name, folder } => {
            let folder = folder.unwrap_or_else(|| selection.folder.clone());
            let question = format!("Delete \"{}\" from \"{}\"?", name.trim(), folder.trim());
            if ctx.interaction.confirm(&question) {
                ctx.api.delete_snippet(&folder, &name, &selection)?
            } else {
                cancelled("Delete")
            }
        }
        Commands::Move { name, to, from } => {
            let from = from.unwrap_or_else(|| selection.folder.clone());
            ctx.api.move_snippet(&from, &to, &name, &selection)?
        }
        Commands::Export { path, stdout } => {
            if stdout {
                let bytes = ctx.api.export_all()?;
                let mut out = io::stdout().lock();
                out.write_all(&bytes)?;
                writeln!(out)?;
                return Ok(Output::Printed);
            }
            let path = path.unwrap_or_else(|| PathBuf::from(&ctx.config.backup_file));
            ctx.api.export_to(&path)?
        }
        Commands::Import { path } => ctx.api.import_file(&path, ctx.interaction.as_mut())?,
        Commands::Migrate => ctx.api.migrate()?,
    };
    Ok(Output::Result(result))
}

/// The new name given on the command line, or asked for with `current` pre-filled.
fn new_name(
    interaction: &mut dyn Interaction,
    title: &str,
    current: &str,
    given: Option<String>,
) -> Option<String> {
    given.or_else(|| interaction.prompt(title, "New name", current))
}

fn cancelled(action: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(format!("{} cancelled.", action)))
}

fn read_content(content: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(content) = content {
        return Ok(content);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No content given: pass it as an argument, with --file, or on stdin");
    }
    let mut content = String::new();
    stdin.lock().read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipzapp::interaction::ScriptedInteraction;

    #[test]
    fn new_name_prefers_argument() {
        let mut ask = ScriptedInteraction::new();
        assert_eq!(
            new_name(&mut ask, "Rename", "a", Some("b".into())).as_deref(),
            Some("b")
        );
        assert!(ask.asked().is_empty());
    }

    #[test]
    fn new_name_asks_when_missing() {
        let mut ask = ScriptedInteraction::new().with_prompts([Some("c".to_string())]);
        assert_eq!(new_name(&mut ask, "Rename", "a", None).as_deref(), Some("c"));
        assert_eq!(ask.asked().len(), 1);
    }

    #[test]
    fn declined_prompt_cancels() {
        let mut ask = FixedAnswer(true);
        assert!(new_name(&mut ask, "Rename", "a", None).is_none());
    }
}
