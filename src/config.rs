use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ORIGIN: &str = "http://localhost:1337";

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Paths {
    pub template_dir: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Content {
    pub origin: String,
}

impl Default for Content {
    fn default() -> Self {
        Content {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Defaults {
    pub page_size: u32,
    pub site_title: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            page_size: 12,
            site_title: "My Blog".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            address: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Mail {
    pub smtp_host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
}

impl Default for Mail {
    fn default() -> Self {
        Mail {
            smtp_host: "smtp.gmail.com".to_string(),
            username: None,
            password: None,
            recipient: None,
        }
    }
}

impl Mail {
    /// Submissions go to the recipient override, or back to the sending account.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref().or(self.username.as_deref())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub content: Content,
    pub paths: Paths,
    pub defaults: Defaults,
    pub mail: Mail,
    pub log: Option<Log>,
}

impl Config {
    /// Applies the environment overrides using `lookup` to read each variable.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(origin) = lookup("CONTENT_ORIGIN") {
            self.content.origin = origin;
        }
        if let Some(host) = lookup("SMTP_HOST") {
            self.mail.smtp_host = host;
        }
        if let Some(user) = lookup("EMAIL_USER") {
            self.mail.username = Some(user);
        }
        if let Some(pass) = lookup("EMAIL_PASS") {
            self.mail.password = Some(pass);
        }
        if let Some(recipient) = lookup("EMAIL_RECIPIENT") {
            self.mail.recipient = Some(recipient);
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.to_str()) {
        (Some(exe_dir), Some(str_path)) => {
            PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy()))
        }
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> Result<Config> {
    let mut cfg: Config = toml::from_str(cfg_content).context("Error parsing configuration file")?;

    cfg.paths = Paths {
        template_dir: cfg.paths.template_dir.map(parse_path),
        public_dir: cfg.paths.public_dir.map(parse_path),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path)
        .with_context(|| format!("Error opening configuration file {}", cfg_path.display()))?;
    parse_config(&cfg_content)
}
