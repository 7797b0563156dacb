use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::auth::ClientCredentials;
use crate::client::{Error, Result};
use crate::core::config::{ApiConfig, Config, ProviderConfig, ServerConfig, Tls, TokenHandoff};
use crate::core::types::{ClientId, ClientSecret, Scope, ServiceToken};

#[derive(Parser, Debug)]
#[clap(
    name = "rso-sample",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sign in with RSO and show account and champion rotation data"
)]
pub struct Options {
    #[clap(long, env = "SERVER_ADDRESS", default_value = "127.0.0.1:8080")]
    server_address: SocketAddr,
    #[clap(long, env = "SERVER_TLS_CERT")]
    tls_cert: Option<PathBuf>,
    #[clap(long, env = "SERVER_TLS_KEY")]
    tls_key: Option<PathBuf>,

    #[clap(long, env = "RSO_BASE_URL")]
    rso_base_url: String,
    #[clap(long, env = "RSO_CALLBACK_HOST")]
    callback_host: String,
    #[clap(long, env = "RSO_CALLBACK_PATH", default_value = "/oauth")]
    callback_path: String,
    #[clap(long, env = "RSO_CLIENT_ID")]
    client_id: String,
    #[clap(long, env = "RSO_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,
    #[clap(long, env = "RSO_RESPONSE_TYPE", default_value = "code")]
    response_type: String,
    #[clap(long, env = "RSO_SCOPE", default_value = "openid")]
    scope: String,

    #[clap(long, env = "RGAPI_TOKEN", hide_env_values = true)]
    api_token: String,
    /// Header carrying the service token on rotation requests. Defaults to
    /// `X-Riot-Token`, the name the resource API reads, not `X-Service-Token`.
    #[clap(long, env = "RGAPI_TOKEN_HEADER", default_value = "X-Riot-Token")]
    api_token_header: String,
    #[clap(long, env = "RGAPI_URL_ACCOUNT_DATA")]
    account_data_url: String,
    #[clap(long, env = "RGAPI_URL_CHAMPION_DATA")]
    champion_data_url: String,

    #[clap(long, env = "DISPLAY_PATH", default_value = "/data")]
    display_path: String,
    #[clap(long, env = "TOKEN_HANDOFF", value_enum, default_value = "render")]
    token_handoff: TokenHandoff,
    #[clap(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    request_timeout_secs: u64,
}

impl Options {
    /// Validates the raw options into the immutable application configuration.
    pub fn into_config(self) -> Result<Config> {
        let tls = match (self.tls_cert, self.tls_key) {
            (Some(cert), Some(key)) => Some(Tls {
                cert: readable_file("SERVER_TLS_CERT", cert)?,
                key: readable_file("SERVER_TLS_KEY", key)?,
            }),
            (None, None) => None,
            _ => {
                return Err(Error::config(
                    "SERVER_TLS_CERT and SERVER_TLS_KEY must be given together",
                ))
            }
        };

        let callback_path = route_path("RSO_CALLBACK_PATH", &self.callback_path)?;
        let display_path = route_path("DISPLAY_PATH", &self.display_path)?;
        if callback_path == display_path {
            return Err(Error::config(
                "RSO_CALLBACK_PATH and DISPLAY_PATH must differ",
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::config("REQUEST_TIMEOUT_SECS must be positive"));
        }

        let scope = Scope::from_delimited_parts(&self.scope);
        if scope.is_empty() {
            return Err(Error::config("RSO_SCOPE must not be empty"));
        }

        Ok(Config {
            server: ServerConfig {
                addr: self.server_address,
                tls,
            },
            provider: ProviderConfig {
                base_url: http_url("RSO_BASE_URL", &self.rso_base_url)?,
                callback_host: required("RSO_CALLBACK_HOST", self.callback_host)?,
                callback_path,
                credentials: ClientCredentials {
                    client_id: ClientId(credential("RSO_CLIENT_ID", self.client_id)?),
                    client_secret: ClientSecret(credential(
                        "RSO_CLIENT_SECRET",
                        self.client_secret,
                    )?),
                },
                response_type: required("RSO_RESPONSE_TYPE", self.response_type)?,
                scope,
            },
            api: ApiConfig {
                token: ServiceToken(credential("RGAPI_TOKEN", self.api_token)?),
                token_header: required("RGAPI_TOKEN_HEADER", self.api_token_header)?,
                account_data: http_url("RGAPI_URL_ACCOUNT_DATA", &self.account_data_url)?,
                champion_data: http_url("RGAPI_URL_CHAMPION_DATA", &self.champion_data_url)?,
            },
            display_path,
            handoff: self.token_handoff,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}

fn required(name: &str, value: String) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::config(format!("{} must not be empty", name)));
    }
    Ok(value.to_string())
}

/// Like `required`, but keeps the value byte for byte.
fn credential(name: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::config(format!("{} must not be empty", name)));
    }
    Ok(value)
}

fn readable_file(name: &str, path: PathBuf) -> Result<PathBuf> {
    let unreadable =
        |e: std::io::Error| Error::config(format!("{} {:?} is not readable: {}", name, path, e));
    let metadata = fs::metadata(&path).map_err(unreadable)?;
    if !metadata.is_file() {
        return Err(Error::config(format!("{} {:?} is not a file", name, path)));
    }
    fs::File::open(&path).map_err(unreadable)?;
    Ok(path)
}

fn http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value.trim())
        .map_err(|e| Error::config(format!("{} is not a valid URL: {}", name, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config(format!(
            "{} must be an http(s) URL, got scheme {:?}",
            name, other
        ))),
    }
}

fn route_path(name: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if !value.starts_with('/') || value == "/" || value.contains('?') {
        return Err(Error::config(format!(
            "{} must be an absolute path other than \"/\", got {:?}",
            name, value
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [(&str, &str); 7] = [
        ("--rso-base-url", "https://auth.example.com"),
        ("--callback-host", "local.example.com:8080"),
        ("--client-id", "client_id"),
        ("--client-secret", "client_secret"),
        ("--api-token", "token"),
        (
            "--account-data-url",
            "https://api.example.com/riot/account/v1/accounts/me",
        ),
        (
            "--champion-data-url",
            "https://api.example.com/lol/platform/v3/champion-rotations",
        ),
    ];

    /// Required flags, with `overrides` replacing or extending them.
    fn args<'a>(overrides: &[(&'a str, &'a str)]) -> Vec<&'a str> {
        let mut pairs: Vec<(&str, &str)> = REQUIRED.to_vec();
        for (flag, value) in overrides {
            match pairs.iter_mut().find(|(f, _)| f == flag) {
                Some(pair) => pair.1 = *value,
                None => pairs.push((*flag, *value)),
            }
        }
        let mut args = vec!["rso-sample"];
        for (flag, value) in pairs {
            args.push(flag);
            args.push(value);
        }
        args
    }

    fn parse(overrides: &[(&str, &str)]) -> std::result::Result<Options, clap::Error> {
        Options::try_parse_from(args(overrides))
    }

    #[test]
    fn defaults_fill_optional_settings() {
        let cfg = parse(&[]).unwrap().into_config().unwrap();
        assert_eq!(cfg.server.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(cfg.server.tls.is_none());
        assert_eq!(cfg.provider.callback_path, "/oauth");
        assert_eq!(cfg.provider.response_type, "code");
        assert_eq!(cfg.provider.scope.as_joined(), "openid");
        assert_eq!(cfg.api.token_header, "X-Riot-Token");
        assert_eq!(cfg.display_path, "/data");
        assert_eq!(cfg.handoff, TokenHandoff::Render);
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_required_option_fails_to_parse() {
        let mut args = args(&[]);
        args.truncate(args.len() - 2);
        assert!(Options::try_parse_from(args).is_err());
    }

    #[test]
    fn handoff_mode_is_selectable() {
        let cfg = parse(&[("--token-handoff", "redirect")])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.handoff, TokenHandoff::Redirect);
    }

    #[test]
    fn blank_secret_is_rejected() {
        let result = parse(&[("--client-secret", "  ")]).unwrap().into_config();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let result = parse(&[("--rso-base-url", "auth.example.com")])
            .unwrap()
            .into_config();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    fn temp_file(name: &str) -> String {
        let path = std::env::temp_dir().join(format!("rso-sample-{}-{}", std::process::id(), name));
        fs::write(&path, "-----BEGIN PLACEHOLDER-----\n").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn half_configured_tls_is_rejected() {
        let cert = temp_file("half-cert.pem");
        let key = temp_file("half-key.pem");

        let result = parse(&[("--tls-cert", cert.as_str())]).unwrap().into_config();
        assert!(matches!(result, Err(Error::Config(_))));

        let cfg = parse(&[("--tls-cert", cert.as_str()), ("--tls-key", key.as_str())])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.callback_url().0, "https://local.example.com:8080/oauth");
    }

    #[test]
    fn missing_tls_files_are_a_config_error() {
        let key = temp_file("missing-key.pem");
        let missing = std::env::temp_dir()
            .join("rso-sample-does-not-exist.pem")
            .to_string_lossy()
            .into_owned();

        let result = parse(&[("--tls-cert", missing.as_str()), ("--tls-key", key.as_str())])
            .unwrap()
            .into_config();
        assert!(matches!(result, Err(Error::Config(_))));

        let dir = std::env::temp_dir().to_string_lossy().into_owned();
        let result = parse(&[("--tls-cert", key.as_str()), ("--tls-key", dir.as_str())])
            .unwrap()
            .into_config();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn credentials_are_kept_verbatim() {
        let cfg = parse(&[("--client-secret", " s3cr3t "), ("--api-token", "tok ")])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.provider.credentials.client_secret.as_ref(), " s3cr3t ");
        assert_eq!(cfg.api.token.as_ref(), "tok ");
    }

    #[test]
    fn callback_and_display_paths_must_differ() {
        let result = parse(&[("--display-path", "/oauth")]).unwrap().into_config();
        assert!(matches!(result, Err(Error::Config(_))));

        let result = parse(&[("--callback-path", "oauth")]).unwrap().into_config();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
