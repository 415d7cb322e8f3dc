use std::path::PathBuf;

use anyhow::Context;

/// Port used when no argument is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Directory the content store serves files from.
pub const DEFAULT_WEB_ROOT: &str = "public";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub web_root: PathBuf,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// The only CLI surface is a single numeric port argument; the content
    /// root is taken from the `WEB_ROOT` environment variable.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> anyhow::Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let port = match args.next() {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid port argument {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let web_root =
            std::env::var("WEB_ROOT").unwrap_or_else(|_| DEFAULT_WEB_ROOT.to_string());

        Ok(Self {
            port,
            web_root: PathBuf::from(web_root),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
