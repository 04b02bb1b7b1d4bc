//! CLI routing and command dispatch.

use crate::core::client::CredentialClient;
use crate::core::token::HttpTokenProvider;
use crate::models::config::{self, ClientConfig, TokenConfig};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

pub mod device;
pub mod generate;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub base_url: Option<String>,
    pub local: bool,
    pub non_interactive: bool,
}

impl CliContext {
    /// Effective client configuration: flags override the environment.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut cfg = match &self.base_url {
            Some(url) => ClientConfig::new(url.clone(), config::local_environment_from_env()),
            None => ClientConfig::from_env().context("resolve credential service address")?,
        };
        cfg.local_environment |= self.local;
        Ok(cfg)
    }

    pub fn client(&self) -> Result<CredentialClient<HttpTokenProvider>> {
        let tokens = HttpTokenProvider::new(TokenConfig::from_env())?;
        Ok(CredentialClient::new(self.client_config()?, tokens)?)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "password-utility",
    version,
    about = "Fetch, store, or delete device passwords in the credential microservice",
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Hostname whose password is printed to stdout
    #[arg(value_parser = device::parse_hostname)]
    pub hostname: Option<String>,

    /// Credential service base URL (overrides RASPI_CRED_MICROSERVICE_ADDRESS)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Skip bearer token authentication (same as setting LOCAL_ENVIRONMENT)
    #[arg(long, global = true)]
    pub local: bool,

    /// Run in non-interactive mode (no prompts, suitable for automation)
    #[arg(long, global = true, env = "PASSWORD_UTILITY_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let ctx = CliContext {
            base_url: self.base_url,
            local: self.local,
            non_interactive: self.non_interactive,
        };

        let mut stdout = std::io::stdout();
        match (self.command, self.hostname) {
            (Some(Commands::Get(args)), _) => device::run_get(&ctx, args, &mut stdout),
            (Some(Commands::Set(args)), _) => device::run_set(&ctx, args),
            (Some(Commands::Delete(args)), _) => device::run_delete(&ctx, args),
            (Some(Commands::Generate), _) => generate::run(&mut stdout),
            (None, Some(hostname)) => {
                device::run_get(&ctx, device::GetArgs { hostname }, &mut stdout)
            }
            (None, None) => bail!("a hostname is required"),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a device's password
    Get(device::GetArgs),
    /// Store a device's password
    Set(device::SetArgs),
    /// Delete a device's password
    Delete(device::DeleteArgs),
    /// Print a freshly generated random password
    Generate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_hostname() {
        let cli = Cli::try_parse_from(["password-utility", "pi-01"]).unwrap();
        assert_eq!(cli.hostname.as_deref(), Some("pi-01"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommand_with_global_flags() {
        let cli = Cli::try_parse_from([
            "password-utility",
            "delete",
            "pi-01",
            "--local",
            "--base-url",
            "http://localhost:8080",
        ])
        .unwrap();
        assert!(cli.local);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(matches!(cli.command, Some(Commands::Delete(ref a)) if a.hostname == "pi-01"));
    }

    #[test]
    fn test_set_source_flags_conflict() {
        assert!(Cli::try_parse_from(["password-utility", "set", "pi-01", "--from-stdin", "--generate"]).is_err());
    }

    #[test]
    fn test_empty_hostname_rejected() {
        assert!(Cli::try_parse_from(["password-utility", ""]).is_err());
    }

    #[test]
    fn test_flag_overrides_env_base_url() {
        temp_env::with_vars(
            [
                (crate::constants::ENV_BASE_URL, Some("http://from-env")),
                (crate::constants::ENV_LOCAL_ENVIRONMENT, Some("yes")),
            ],
            || {
                let ctx = CliContext {
                    base_url: Some("http://from-flag".into()),
                    local: false,
                    non_interactive: true,
                };
                let cfg = ctx.client_config().unwrap();
                assert_eq!(cfg.base_url, "http://from-flag");
                assert!(cfg.local_environment);
            },
        );
    }

    #[test]
    fn test_local_flag_forces_local_mode() {
        temp_env::with_vars(
            [
                (crate::constants::ENV_BASE_URL, Some("http://from-env")),
                (crate::constants::ENV_LOCAL_ENVIRONMENT, None),
            ],
            || {
                let ctx = CliContext {
                    base_url: None,
                    local: true,
                    non_interactive: true,
                };
                let cfg = ctx.client_config().unwrap();
                assert_eq!(cfg.base_url, "http://from-env");
                assert!(cfg.local_environment);
            },
        );
    }
}
