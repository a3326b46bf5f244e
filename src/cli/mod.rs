pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "medremind")]
#[command(about = "MedRemind CLI - terminal dashboard for the medication reminder API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Store an issued bearer token and open a session")]
    Login {
        #[arg(help = "Bearer token issued by the login service")]
        token: String,
    },

    #[command(about = "Clear the stored session token")]
    Logout,

    #[command(about = "Show the owner id of the current session")]
    Whoami,

    #[command(about = "Show the medication schedule grouped by time of day")]
    List,

    #[command(about = "Add a medication to the schedule")]
    Add {
        #[arg(long, help = "Medication name")]
        name: String,
        #[arg(long, help = "Scheduled time of day (HH:MM)")]
        time: String,
        #[arg(long, help = "Dosage, e.g. 10mg or 1 tablet")]
        dosage: Option<String>,
        #[arg(long, help = "Additional instructions")]
        notes: Option<String>,
    },

    #[command(about = "Remove a medication from the schedule")]
    Remove {
        #[arg(help = "Record id of the medication")]
        id: Uuid,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Mark a medication taken (or not taken)")]
    Taken {
        #[arg(help = "Record id of the medication")]
        id: Uuid,
        #[arg(long, help = "Mark the medication as not taken instead")]
        not_taken: bool,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Login { token } => commands::session::login(&token, &output_format),
        Commands::Logout => commands::session::logout(&output_format),
        Commands::Whoami => commands::session::whoami(&output_format),
        Commands::List => commands::medicines::list(&output_format).await,
        Commands::Add {
            name,
            time,
            dosage,
            notes,
        } => commands::medicines::add(name, time, dosage, notes, &output_format).await,
        Commands::Remove { id, yes } => commands::medicines::remove(id, yes, &output_format).await,
        Commands::Taken { id, not_taken } => {
            commands::medicines::taken(id, !not_taken, &output_format).await
        }
    }
}
