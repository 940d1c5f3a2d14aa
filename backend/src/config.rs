//! Command line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_CATALOG_URL: &str = "http://localhost:54321/rest/v1";


#[derive(Debug, Clone, Parser)]
#[command(name = "makers-backend", version, about = "Course discovery API for the AI Makers catalog")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "MAKERS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Base URL of the hosted REST backend holding the catalog tables
    #[arg(long, env = "MAKERS_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// API key sent with catalog requests
    #[arg(long, env = "MAKERS_CATALOG_API_KEY", hide_env_values = true)]
    pub catalog_api_key: Option<String>,

    /// Load the catalog from a JSON snapshot instead of the REST backend
    #[arg(long, env = "MAKERS_CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Rest { url: String, api_key: Option<String> },
}

impl Config {
    /// A snapshot file wins over the REST URL when both are given.
    pub fn catalog_source(&self) -> CatalogSource {
        match &self.catalog_file {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Rest {
                url: self.catalog_url.clone(),
                api_key: self.catalog_api_key.clone(),
            },
        }
    }
}
