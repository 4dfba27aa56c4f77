use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

pub const SERVER_PARAMS: &str = include_str!("../../env.json");

#[derive(Deserialize, Debug, Clone)]
pub struct ServerParams {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerParams {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<ServerParams>(source)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
