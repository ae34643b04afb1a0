use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use serde::Deserialize;
use slog::{error, info};

/// an error used when deserializing a [`Config`] instance from environment variables
/// see [`Config::from_env()`]
pub use envy::Error as EnvError;

use crate::{routes::routers::application_router, Application};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_IP_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0));

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Defaults to `Development`: [`Environment::default()`]
    #[serde(default)]
    pub env: Environment,
    /// The port on which the exchange REST API will be accessible.
    #[serde(default = "default_port")]
    /// Defaults to `8080`: [`DEFAULT_PORT`]
    pub port: u16,
    /// The address on which the exchange REST API will be accessible.
    /// `0.0.0.0` can be used for Docker.
    /// `127.0.0.1` can be used for locally running servers.
    #[serde(default = "default_ip_addr")]
    /// Defaults to `0.0.0.0`: [`DEFAULT_IP_ADDR`]
    pub ip_addr: IpAddr,
}

impl Config {
    /// Deserialize the application [`Config`] from Environment variables.
    pub fn from_env() -> Result<Self, EnvError> {
        envy::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            port: default_port(),
            ip_addr: default_ip_addr(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_ip_addr() -> IpAddr {
    DEFAULT_IP_ADDR
}

impl Application {
    /// Starts the `axum` `Server`.
    pub async fn run(self) {
        let logger = self.logger.clone();
        let socket_addr = SocketAddr::new(self.config.ip_addr, self.config.port);
        info!(&logger, "Listening on socket address: {}!", socket_addr);

        let router = application_router(Arc::new(self));

        let server = axum::Server::bind(&socket_addr).serve(router.into_make_service());

        if let Err(e) = server.await {
            error!(&logger, "server error: {}", e; "main" => "run");
        }
    }
}
