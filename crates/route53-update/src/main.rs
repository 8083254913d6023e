// # route53-update
//
// One-shot Route 53 A record updater.
//
// This binary is a thin integration layer: it reads configuration from
// environment variables, initializes logging, builds a client and performs
// one zone lookup + upsert through `route53-helper`. No DNS logic lives here.
//
// ## Configuration
//
// ### Record
// - `ROUTE53_ZONE`: Hosted zone name (a trailing dot is added if missing)
// - `ROUTE53_DOMAIN`: Record name to upsert
// - `ROUTE53_IP`: IPv4 address
//
// ### Credentials (optional, default chain otherwise)
// - `ROUTE53_ACCESS_KEY_ID`
// - `ROUTE53_SECRET_ACCESS_KEY`
// - `ROUTE53_SESSION_TOKEN`
//
// ### Client (optional)
// - `ROUTE53_REGION`
// - `ROUTE53_ENDPOINT_URL`
// - `ROUTE53_PROFILE`
//
// ### Runtime
// - `ROUTE53_MODE`: `live` (default) or `dry-run`
// - `ROUTE53_LOG_LEVEL`: trace, debug, info (default), warn, error
//
// ## Example
//
// ```bash
// export ROUTE53_ZONE=example.com
// export ROUTE53_DOMAIN=home.example.com
// export ROUTE53_IP=203.0.113.7
//
// route53-update
// ```

use anyhow::Result;
use route53_helper::{ClientOptions, Route53Updater, StaticCredentials, UpdateOutcome};
use std::env;
use std::net::Ipv4Addr;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum UpdateExitCode {
    /// Record submitted (or logged, in dry-run)
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Provider or runtime error
    RuntimeError = 2,
}

impl From<UpdateExitCode> for ExitCode {
    fn from(code: UpdateExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
///
/// Not `Debug`: it holds the secret access key.
struct Config {
    zone: String,
    domain: String,
    ip: String,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    session_token: Option<String>,
    region: Option<String>,
    endpoint_url: Option<String>,
    profile: Option<String>,
    mode: String,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            zone: env::var("ROUTE53_ZONE")
                .map_err(|_| anyhow::anyhow!("ROUTE53_ZONE is required"))?,
            domain: env::var("ROUTE53_DOMAIN")
                .map_err(|_| anyhow::anyhow!("ROUTE53_DOMAIN is required"))?,
            ip: env::var("ROUTE53_IP").map_err(|_| anyhow::anyhow!("ROUTE53_IP is required"))?,
            access_key_id: non_empty_var("ROUTE53_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("ROUTE53_SECRET_ACCESS_KEY"),
            session_token: non_empty_var("ROUTE53_SESSION_TOKEN"),
            region: non_empty_var("ROUTE53_REGION"),
            endpoint_url: non_empty_var("ROUTE53_ENDPOINT_URL"),
            profile: non_empty_var("ROUTE53_PROFILE"),
            mode: env::var("ROUTE53_MODE").unwrap_or_else(|_| "live".to_string()),
            log_level: env::var("ROUTE53_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // At most one trailing root dot
        validate_domain_name(self.zone.strip_suffix('.').unwrap_or(&self.zone))?;
        validate_domain_name(self.domain.strip_suffix('.').unwrap_or(&self.domain))?;
        self.ipv4()?;

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            anyhow::bail!(
                "ROUTE53_ACCESS_KEY_ID and ROUTE53_SECRET_ACCESS_KEY must be set together"
            );
        }

        if self.session_token.is_some() && self.access_key_id.is_none() {
            anyhow::bail!("ROUTE53_SESSION_TOKEN requires ROUTE53_ACCESS_KEY_ID");
        }

        if let Some(ref url) = self.endpoint_url
            && !url.starts_with("https://")
            && !url.starts_with("http://")
        {
            anyhow::bail!(
                "ROUTE53_ENDPOINT_URL must use HTTP or HTTPS scheme. Got: {}",
                url
            );
        }

        match self.mode.to_lowercase().as_str() {
            "live" | "dry-run" => {}
            _ => anyhow::bail!(
                "ROUTE53_MODE '{}' is not valid. Valid modes: live, dry-run",
                self.mode
            ),
        }

        parse_log_level(&self.log_level)?;

        Ok(())
    }

    /// Zone name in the fully qualified form Route 53 reports
    fn zone_fqdn(&self) -> String {
        if self.zone.ends_with('.') {
            self.zone.clone()
        } else {
            format!("{}.", self.zone)
        }
    }

    fn ipv4(&self) -> Result<Ipv4Addr> {
        self.ip
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("ROUTE53_IP '{}' is not an IPv4 address: {}", self.ip, e))
    }

    fn client_options(&self) -> ClientOptions {
        ClientOptions {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            profile_name: self.profile.clone(),
        }
    }

    fn static_credentials(&self) -> Option<StaticCredentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(key_id), Some(secret)) => Some(StaticCredentials {
                access_key_id: key_id.clone(),
                secret_access_key: secret.clone(),
                session_token: self.session_token.clone(),
            }),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "ROUTE53_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            level
        ),
    }
}

/// Validate that a string is a valid domain name
///
/// Basic RFC 1035 checks; catches common errors, not exhaustive.
fn validate_domain_name(domain: &str) -> Result<()> {
    if domain.is_empty() {
        anyhow::bail!("Domain name cannot be empty");
    }

    if domain.len() > 253 {
        anyhow::bail!(
            "Domain name too long: {} chars (max 253). Got: {}",
            domain.len(),
            domain
        );
    }

    for (index, label) in domain.split('.').enumerate() {
        if label.is_empty() {
            anyhow::bail!("Domain name has empty label: '{}'", domain);
        }

        if label.len() > 63 {
            anyhow::bail!(
                "Domain label too long: {} chars (max 63). Label: '{}'",
                label.len(),
                label
            );
        }

        // Route 53 accepts a leading "*" label for wildcard records
        if index == 0 && label == "*" {
            continue;
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            anyhow::bail!(
                "Domain label contains invalid characters. Label: '{}'. \
                Valid: alphanumeric, hyphen and underscore only.",
                label
            );
        }

        if label.starts_with('-') || label.ends_with('-') {
            anyhow::bail!(
                "Domain label cannot start or end with hyphen. Label: '{}'",
                label
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return UpdateExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return UpdateExitCode::ConfigError.into();
    }

    let log_level = parse_log_level(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return UpdateExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return UpdateExitCode::RuntimeError.into();
        }
    };

    let code = rt.block_on(async {
        match run(config).await {
            Ok(()) => UpdateExitCode::Success,
            Err(e) => {
                error!("Update failed: {:#}", e);
                UpdateExitCode::RuntimeError
            }
        }
    });

    code.into()
}

async fn run(config: Config) -> Result<()> {
    let ip = config.ipv4()?;
    let zone = config.zone_fqdn();

    info!("Starting route53-update for {} in zone {}", config.domain, zone);

    let client = route53_helper::get_client_with_options(
        &config.client_options(),
        config.static_credentials(),
    )
    .await?;

    // ROUTE53_MODE is already validated to live or dry-run
    let updater = Route53Updater::from_env_mode(client);

    match updater.update(&zone, &config.domain, ip).await? {
        UpdateOutcome::Submitted { zone_id } => {
            info!("Change submitted to zone {}", zone_id);
        }
        UpdateOutcome::DryRun { zone_id } => {
            info!("Dry-run complete, nothing submitted to zone {}", zone_id);
        }
    }

    Ok(())
}
