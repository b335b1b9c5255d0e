use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

mod commute;
mod reidentify;

#[derive(Parser, Debug)]
#[command(name = "gcp-samples")]
#[command(about = "Google Cloud request/response samples: DLP re-identification and Talent commute search")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, global = true, value_name = "FILE", help = "Explicit configuration file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Re-identify FPE-masked text via Cloud DLP")]
    Reidentify {
        #[arg(help = "Project ID to run the API call under")]
        project_id: String,

        #[arg(help = "Text containing the surrogate to re-identify")]
        text: String,

        #[arg(help = "Cloud KMS key that wraps the AES-256 key")]
        key_name: String,

        #[arg(help = "Base64-encoded AES-256 key, wrapped with the KMS key")]
        wrapped_key: String,

        #[arg(help = "Surrogate info type the text was de-identified with")]
        surrogate_type: Option<String>,
    },

    #[command(about = "Search jobs within a commute budget via Cloud Talent")]
    CommuteSearch {
        #[arg(
            long,
            alias = "project_id",
            default_value = "Your Google Cloud Project ID",
            help = "Project ID to run the API call under"
        )]
        project_id: String,

        #[arg(
            long,
            alias = "tenant_id",
            default_value = "Your Tenant ID (using tenancy is optional)",
            help = "Tenant to search within"
        )]
        tenant_id: String,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Reidentify {
            project_id,
            text,
            key_name,
            wrapped_key,
            surrogate_type,
        } => {
            reidentify::run(
                project_id,
                text,
                key_name,
                &wrapped_key,
                surrogate_type,
                cli.json,
                &config,
            )
            .await
        }
        Commands::CommuteSearch {
            project_id,
            tenant_id,
        } => commute::run(project_id, tenant_id, cli.json, &config).await,
    }
}
