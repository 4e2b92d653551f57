//! Endpoint configuration: where the node's RPC server lives and how to
//! authenticate against it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Error;

/// Default RPC port of a mainnet node.
pub const DEFAULT_RPC_PORT: u16 = 8332;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// URL scheme for the RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => f.write_str("http"),
            Scheme::Https => f.write_str("https"),
        }
    }
}

/// Authentication for the RPC endpoint.
///
/// The node accepts either explicit `rpcuser`/`rpcpassword` credentials or
/// the contents of the cookie file it writes on startup (`username:password`
/// on the first line).
#[derive(Debug, Clone, Default)]
pub enum Auth {
    /// Anonymous access; no Authorization header is sent.
    #[default]
    None,
    UserPass { username: String, password: String },
    CookieFile(PathBuf),
}

impl Auth {
    /// Resolve to concrete credentials, reading the cookie file if one is
    /// configured.
    pub(crate) fn resolve(&self) -> Result<Option<(String, String)>, Error> {
        match self {
            Auth::None => Ok(None),
            Auth::UserPass { username, password } => {
                Ok(Some((username.clone(), password.clone())))
            }
            Auth::CookieFile(path) => read_cookie_file(path).map(Some),
        }
    }
}

fn read_cookie_file(path: &Path) -> Result<(String, String), Error> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("failed to read rpc cookie file {}: {e}", path.display()))
    })?;
    let line = content
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| Error::Config(format!("rpc cookie file {} is empty", path.display())))?;

    let (user, pass) = line.split_once(':').ok_or_else(|| {
        Error::Config(format!(
            "rpc cookie file {} must contain `username:password`",
            path.display()
        ))
    })?;
    if user.is_empty() || pass.is_empty() {
        return Err(Error::Config(format!(
            "rpc cookie file {} must contain non-empty `username:password`",
            path.display()
        )));
    }

    Ok((user.to_owned(), pass.to_owned()))
}

/// Where and how to reach the node's RPC server.
///
/// Immutable once built; a client takes it at construction and never
/// mutates it, so it can be shared freely across concurrent callers.
#[derive(Debug, Clone)]
pub struct Endpoint {
    scheme: Scheme,
    host: String,
    port: u16,
    auth: Auth,
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new("localhost", DEFAULT_RPC_PORT)
    }
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: Scheme::default(),
            host: host.into(),
            port,
            auth: Auth::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Auth::UserPass {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    pub fn with_cookie_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.auth = Auth::CookieFile(path.into());
        self
    }

    /// Timeout for establishing the TCP connection.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Deadline for the whole request, connect included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL of the RPC server, without credentials.
    pub fn url(&self) -> String {
        format!("{}://{}:{}/", self.scheme, self.host, self.port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub(crate) fn auth(&self) -> &Auth {
        &self.auth
    }

    pub(crate) fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
}
