use crate::cli::CliContext;
use crate::constants;
use crate::core::password;
use crate::models::credential::DeviceCredential;
use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::Password;
use std::io::{Read, Write};
use zeroize::Zeroizing;

/// Hostnames become a single path segment, so reject anything that would
/// change the request path.
pub fn parse_hostname(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("hostname cannot be empty".into());
    }
    if s.chars().any(|c| c.is_whitespace()) {
        return Err("whitespace not allowed".into());
    }
    if s.contains(['/', '\\', '?', '#']) {
        return Err("path separators and URL delimiters not allowed".into());
    }
    Ok(s.to_string())
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Device hostname
    #[arg(value_parser = parse_hostname)]
    pub hostname: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Device hostname
    #[arg(value_parser = parse_hostname)]
    pub hostname: String,

    /// Read the password from stdin instead of an interactive prompt
    #[arg(long, conflicts_with = "generate")]
    pub from_stdin: bool,

    /// Store a freshly generated random password
    #[arg(long)]
    pub generate: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Device hostname
    #[arg(value_parser = parse_hostname)]
    pub hostname: String,
}

/// Write the fetched password to `out` exactly as received, with no newline.
pub fn run_get(ctx: &CliContext, args: GetArgs, out: &mut impl Write) -> Result<()> {
    let client = ctx.client()?;
    let password = Zeroizing::new(
        client
            .fetch(&args.hostname)
            .with_context(|| format!("fetch password for {}", args.hostname))?,
    );
    write_secret(out, &password)
}

/// Write `secret` verbatim and flush.
pub fn write_secret(out: &mut impl Write, secret: &str) -> Result<()> {
    out.write_all(secret.as_bytes()).context("write to stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

pub fn run_set(ctx: &CliContext, args: SetArgs) -> Result<()> {
    if ctx.non_interactive && !args.from_stdin && !args.generate {
        bail!("--non-interactive requires --from-stdin or --generate for set");
    }

    let secret: Zeroizing<String> = if args.generate {
        Zeroizing::new(password::generate_random_password()?)
    } else {
        read_secret(args.from_stdin, &args.hostname)?
    };
    if secret.is_empty() {
        bail!("password is empty");
    }

    let client = ctx.client()?;
    let cred = DeviceCredential::new(args.hostname.clone(), secret.as_str());
    client
        .store(&cred)
        .with_context(|| format!("store password for {}", args.hostname))?;

    println!("Stored password for {}", args.hostname);
    Ok(())
}

pub fn run_delete(ctx: &CliContext, args: DeleteArgs) -> Result<()> {
    let client = ctx.client()?;
    client
        .delete(&args.hostname)
        .with_context(|| format!("delete password for {}", args.hostname))?;

    println!("Deleted password for {}", args.hostname);
    Ok(())
}

fn read_secret(from_stdin: bool, hostname: &str) -> Result<Zeroizing<String>> {
    let secret = if from_stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read password from stdin")?;
        Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string())
    } else {
        Zeroizing::new(
            Password::new()
                .with_prompt(format!("Password for {}", hostname))
                .with_confirmation("Confirm password", "Passwords do not match")
                .allow_empty_password(false)
                .interact()
                .context("read password from prompt")?,
        )
    };
    check_secret_size(&secret)?;
    Ok(secret)
}

fn check_secret_size(secret: &str) -> Result<()> {
    if secret.len() > constants::MAX_SECRET_SIZE {
        bail!(
            "password exceeds maximum size ({} bytes, max {} bytes)",
            secret.len(),
            constants::MAX_SECRET_SIZE
        );
    }
    Ok(())
}
