//! CLI for the upfile upload services.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use upfile_core::{config, integration, HostConfig, ServiceRegistry};

use commands::{run_call, run_exists, run_services, run_upload};

/// Top-level CLI for the upfile upload services.
#[derive(Debug, Parser)]
#[command(name = "upfile")]
#[command(about = "upfile: store files under a sandboxed /local/ directory", long_about = None)]
pub struct Cli {
    /// Host configuration root (overrides `config_dir` in config.toml).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Store a file fetched from a URL or given inline as base64.
    Upload {
        /// HTTP/HTTPS URL to fetch.
        #[arg(long)]
        url: Option<String>,
        /// Raw base64 or a `data:<mime>;base64,...` URI.
        #[arg(long)]
        data_base64: Option<String>,
        /// Stored filename (directory components are dropped).
        #[arg(long)]
        filename: Option<String>,
        /// Directory under the sandbox root (default: upload_file).
        #[arg(long)]
        path: Option<String>,
    },

    /// Check whether a stored file exists.
    Exists {
        /// Public URL as returned by `upload`.
        #[arg(long)]
        local_url: Option<String>,
        /// Directory under the sandbox root.
        #[arg(long)]
        path: Option<String>,
        /// Filename inside `path`.
        #[arg(long)]
        filename: Option<String>,
    },

    /// Call a service of the upload_file domain with a JSON payload.
    Call {
        /// Service name (e.g. upload_file, file_exists).
        service: String,
        /// JSON object payload.
        #[arg(long, default_value = "{}")]
        data: String,
        /// Do not ask the service for a response.
        #[arg(long)]
        no_response: bool,
    },

    /// List registered services.
    Services,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let root = match cli.config_dir {
            Some(dir) => dir,
            None => cfg.host_root()?,
        };
        let host = HostConfig::new(root).with_fetch(cfg.fetch_config());
        let registry = ServiceRegistry::new(host);
        integration::setup(&registry).await?;

        match cli.command {
            CliCommand::Upload {
                url,
                data_base64,
                filename,
                path,
            } => run_upload(&registry, url, data_base64, filename, path).await?,
            CliCommand::Exists {
                local_url,
                path,
                filename,
            } => run_exists(&registry, local_url, path, filename).await?,
            CliCommand::Call {
                service,
                data,
                no_response,
            } => run_call(&registry, &service, &data, !no_response).await?,
            CliCommand::Services => run_services(&registry),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
