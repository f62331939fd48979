/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可、保護メソッド、seed session など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::guard::ProtectedMethodSet;
use crate::sessions::User;

const DEFAULT_PROTECTED_METHODS: [&str; 3] = ["CREATE", "UPDATE", "DELETE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// One pre-registered session, `token:username[:admin]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSession {
    pub token: String,
    pub username: String,
    pub is_admin: bool,
}

impl SeedSession {
    pub fn into_entry(self) -> (String, User) {
        (self.token, User::new(self.username, self.is_admin))
    }
}

impl FromStr for SeedSession {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::Invalid("SEED_SESSIONS");

        let mut parts = s.split(':').map(str::trim);
        let token = parts.next().filter(|t| !t.is_empty()).ok_or_else(invalid)?;
        let username = parts.next().filter(|u| !u.is_empty()).ok_or_else(invalid)?;
        let is_admin = match parts.next() {
            None => false,
            Some(flag) if flag.eq_ignore_ascii_case("admin") => true,
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            token: token.to_string(),
            username: username.to_string(),
            is_admin,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub protected_methods: ProtectedMethodSet,
    pub seed_sessions: Vec<SeedSession>,

    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = split_list(lookup("CORS_ALLOWED_ORIGINS").as_deref())
            .map(str::to_string)
            .collect();

        // Unset falls back to the defaults; set-but-empty protects nothing.
        let protected_methods = match lookup("PROTECTED_METHODS") {
            Some(raw) => split_list(Some(raw.as_str())).collect(),
            None => DEFAULT_PROTECTED_METHODS.into_iter().collect(),
        };

        let seed_sessions = split_list(lookup("SEED_SESSIONS").as_deref())
            .map(SeedSession::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout =
            Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECONDS", 30)?);
        let request_body_limit_bytes = parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            protected_methods,
            seed_sessions,
            request_timeout,
            request_body_limit_bytes,
        })
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
