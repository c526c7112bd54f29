//! gnome-dialog - zenity dialogs from the command line
//!
//! Shows a dialog through the zenity wrapper and prints the typed result,
//! so shell scripts get row indices and booleans instead of raw output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gnome_core::Config;
use zenity::{GeneralOption, ListDialog, Options, Response, Zenity, ZenityError};

#[derive(Parser)]
#[command(name = "gnome-dialog")]
#[command(about = "Show zenity dialogs and print typed results")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    gnome-dialog question "Delete 3 files?"
    gnome-dialog entry "Your name" --default "anon"
    gnome-dialog list "Pick" --column Name --column Size --row "a.txt,1K" --row "b.txt,2K"
    gnome-dialog list "Pick" --column Name --row a --row b --checklist Use --multiple --json
    gnome-dialog raw calendar text="When?" day=1
    gnome-dialog --title Backup progress "Copying" --feeder ./progress.sh

Set RUST_LOG=debug to see the executed command lines.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dialog title
    #[arg(long, global = true)]
    title: Option<String>,

    /// Window icon name or path
    #[arg(long, global = true)]
    icon: Option<String>,

    /// Dialog width
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Dialog height
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Close the dialog after this many seconds
    #[arg(long, global = true)]
    timeout: Option<u32>,

    /// Path to the zenity binary
    #[arg(long, global = true)]
    zenity: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a yes/no question (exit code 1 on "No")
    Question {
        text: String,
        #[arg(long)]
        no_wrap: bool,
    },

    /// Show an information message
    Info {
        text: String,
        #[arg(long)]
        no_wrap: bool,
    },

    /// Show a warning message
    Warning {
        text: String,
        #[arg(long)]
        no_wrap: bool,
    },

    /// Show an error message
    Error {
        text: String,
        #[arg(long)]
        no_wrap: bool,
    },

    /// Show a notification in the notification area
    Notify { text: String },

    /// Ask for a line of text
    Entry {
        text: String,
        /// Hide the typed characters
        #[arg(long)]
        password: bool,
        /// Pre-filled value
        #[arg(long)]
        default: Option<String>,
    },

    /// Show or edit a block of text
    TextInfo {
        /// File to show
        #[arg(long)]
        filename: Option<PathBuf>,
        #[arg(long)]
        editable: bool,
    },

    /// Pick a date
    Calendar {
        text: String,
        /// strftime format of the printed date
        #[arg(long)]
        format: Option<String>,
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },

    /// Pick a number on a slider
    Scale {
        text: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        max: i64,
        #[arg(long, default_value = "1")]
        step: i64,
        #[arg(long, allow_hyphen_values = true)]
        value: Option<i64>,
    },

    /// Pick files or folders
    File {
        text: String,
        #[arg(long)]
        multiple: bool,
        #[arg(long)]
        directory: bool,
    },

    /// Pick rows from a table; prints the row indices
    List {
        text: String,
        /// Column header (repeat for each column)
        #[arg(long = "column", required = true)]
        columns: Vec<String>,
        /// Row cells, split on --delimiter (repeat for each row)
        #[arg(long = "row")]
        rows: Vec<String>,
        #[arg(long, default_value = ",")]
        delimiter: String,
        #[arg(long)]
        multiple: bool,
        /// Add a checkbox column with this header
        #[arg(long, conflicts_with = "radiolist")]
        checklist: Option<String>,
        /// Add a radio button column with this header
        #[arg(long)]
        radiolist: Option<String>,
        /// Indices of rows that start checked
        #[arg(long = "checked")]
        checked: Vec<usize>,
    },

    /// Show a progress bar fed by an executable
    Progress {
        text: String,
        #[arg(long, default_value = "0")]
        percentage: u32,
        #[arg(long)]
        pulsate: bool,
        #[arg(long)]
        auto_close: bool,
        #[arg(long)]
        auto_kill: bool,
        /// Executable whose output drives the progress bar
        #[arg(long)]
        feeder: Option<PathBuf>,
    },

    /// Run any zenity command with NAME=VALUE options (NAME alone is a flag)
    Raw {
        /// zenity command or alias (e.g. list, textInfo)
        command: String,
        options: Vec<String>,
        /// Executable piped into the dialog
        #[arg(long)]
        feeder: Option<PathBuf>,
    },

    /// Print the zenity version
    Version,
}

#[derive(Serialize)]
struct Output<T: Serialize> {
    success: bool,
    result: T,
}

fn print_result<T: Serialize + std::fmt::Display>(json: bool, result: T) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(&Output {
                success: true,
                result,
            })?
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn build_zenity(cli: &Cli) -> Result<Zenity> {
    let mut config = Config::load_default().context("Failed to load configuration")?;
    if cli.zenity.is_some() {
        config.zenity_path = cli.zenity.clone();
    }
    let mut zenity = Zenity::from_config(&config);

    let overrides = [
        (GeneralOption::Title, cli.title.clone()),
        (GeneralOption::WindowIcon, cli.icon.clone()),
        (GeneralOption::Width, cli.width.map(|w| w.to_string())),
        (GeneralOption::Height, cli.height.map(|h| h.to_string())),
        (GeneralOption::Timeout, cli.timeout.map(|t| t.to_string())),
    ];
    for (option, value) in overrides {
        if let Some(value) = value {
            zenity.set_general(option, value);
        }
    }
    Ok(zenity)
}

fn parse_raw_options(raw: &[String]) -> Options {
    let mut options = Options::new();
    for item in raw {
        match item.split_once('=') {
            Some((name, value)) => options.set(name, value),
            None => options.set_flag(item.as_str()),
        }
    }
    options
}

/// One toggle per row, set for each index in `checked`. Out of range indices
/// are ignored.
fn checked_rows(count: usize, checked: &[usize]) -> Vec<bool> {
    let mut defaults = vec![false; count];
    for index in checked {
        if let Some(slot) = defaults.get_mut(*index) {
            *slot = true;
        }
    }
    defaults
}

fn run(cli: &Cli, zenity: &mut Zenity) -> Result<()> {
    let json = cli.json;
    let print = |value: String| print_result(json, value);

    match &cli.command {
        Commands::Question { text, no_wrap } => {
            let yes = zenity.question(text, *no_wrap)?;
            print(if yes { "yes" } else { "no" }.to_string())?;
            if !yes {
                std::process::exit(1);
            }
        }
        Commands::Info { text, no_wrap } => zenity.info(text, *no_wrap)?,
        Commands::Warning { text, no_wrap } => zenity.warning(text, *no_wrap)?,
        Commands::Error { text, no_wrap } => zenity.error(text, *no_wrap)?,
        Commands::Notify { text } => zenity.show_notification(text)?,
        Commands::Entry {
            text,
            password,
            default,
        } => {
            let value = if *password {
                zenity.input_password(text, default.as_deref())?
            } else {
                zenity.input_text(text, default.as_deref())?
            };
            print(value)?;
        }
        Commands::TextInfo { filename, editable } => {
            print(zenity.input_multiline_text(*editable, filename.as_deref())?)?;
        }
        Commands::Calendar {
            text,
            format,
            day,
            month,
            year,
        } => {
            print(zenity.calendar(text, format.as_deref(), *day, *month, *year)?)?;
        }
        Commands::Scale {
            text,
            min,
            max,
            step,
            value,
        } => {
            print(zenity.scale(text, *min, *max, *step, *value)?.to_string())?;
        }
        Commands::File {
            text,
            multiple,
            directory,
        } => {
            let paths = match (*multiple, *directory) {
                (true, true) => zenity.select_directories(text)?,
                (true, false) => zenity.select_files(text)?,
                (false, true) => vec![zenity.select_directory(text)?],
                (false, false) => vec![zenity.select_file(text)?],
            };
            for path in paths {
                print(path.display().to_string())?;
            }
        }
        Commands::List {
            text,
            columns,
            rows,
            delimiter,
            multiple,
            checklist,
            radiolist,
            checked,
        } => {
            let mut dialog = ListDialog::new(text.as_str())
                .columns(columns.iter().cloned())
                .multiple(*multiple);
            for row in rows {
                dialog = dialog.row(row.split(delimiter.as_str()));
            }
            if let Some(label) = checklist {
                dialog = dialog.checklist(label.as_str());
            } else if let Some(label) = radiolist {
                dialog = dialog.radiolist(label.as_str());
            }
            if !checked.is_empty() {
                dialog = dialog.defaults(checked_rows(rows.len(), checked));
            }

            let selection = zenity.select_list(&dialog)?;
            if json {
                let line = serde_json::to_string(&Output {
                    success: true,
                    result: &selection,
                })?;
                println!("{}", line);
            } else {
                for index in selection.indices() {
                    println!("{}", index);
                }
            }
        }
        Commands::Progress {
            text,
            percentage,
            pulsate,
            auto_close,
            auto_kill,
            feeder,
        } => {
            zenity.show_progress(
                text,
                *percentage,
                *pulsate,
                *auto_close,
                feeder.as_deref(),
                *auto_kill,
            )?;
        }
        Commands::Raw {
            command,
            options,
            feeder,
        } => match zenity.call(command, &parse_raw_options(options), feeder.as_deref())? {
            Response::Confirmed(yes) => print(yes.to_string())?,
            Response::Text(text) => print(text)?,
        },
        Commands::Version => print(zenity.version()?)?,
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut zenity = build_zenity(&cli)?;

    let Err(e) = run(&cli, &mut zenity) else {
        return Ok(());
    };

    // Cancelled (1) or timed out (5): nothing to report beyond the exit code
    if let Some(ZenityError::ProcessFailed { code: 1 | 5, .. }) = e.downcast_ref::<ZenityError>() {
        std::process::exit(1);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::json!({ "success": false, "error": e.to_string() })
        );
        std::process::exit(1);
    }
    Err(e)
}
