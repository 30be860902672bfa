mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    avatar, clear, copy, edit, export, import, init, list, new, remove, render, templates,
    validate, AvatarArgs, ClearArgs, CopyArgs, EditArgs, ExportArgs, ImportArgs, InitArgs,
    ListArgs, NewArgs, RemoveArgs, RenderArgs, TemplatesArgs, ValidateArgs,
};
use tracing_subscriber::EnvFilter;

/// Sigforge - email signatures that survive every mail client
#[derive(Parser, Debug)]
#[command(name = "sigforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a sigforge.config.json and an empty store
    Init(InitArgs),

    /// List the built-in templates
    Templates(TemplatesArgs),

    /// Create a signature
    New(NewArgs),

    /// Change fields of a saved signature
    Edit(EditArgs),

    /// Delete a saved signature
    Remove(RemoveArgs),

    /// Delete every saved signature
    Clear(ClearArgs),

    /// List saved signatures
    List(ListArgs),

    /// Render signatures to HTML files
    Render(RenderArgs),

    /// Copy a rendered signature to the clipboard
    Copy(CopyArgs),

    /// Check saved signatures, or a signature file, against the schema
    Validate(ValidateArgs),

    /// Write all signatures to a JSON file
    Export(ExportArgs),

    /// Replace all signatures with the contents of an export file
    Import(ImportArgs),

    /// Resize a photo to an inline JPEG for use as a signature avatar
    Avatar(AvatarArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Templates(args) => templates(args),
        Command::New(args) => new(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Clear(args) => clear(args, &cwd),
        Command::List(args) => list(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Copy(args) => copy(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Import(args) => import(args, &cwd),
        Command::Avatar(args) => avatar(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
