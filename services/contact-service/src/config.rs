use anyhow::{Context, bail};
use std::env;
use std::net::SocketAddr;
use tracing::info;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ROCKSDB_PATH: &str = "./data/messages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreKind {
    Memory,
    RocksDb { path: String },
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreKind,
}

impl Config {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = var_or_default(&lookup, "FOLIO_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid FOLIO_BIND_ADDR: {bind_addr}"))?;

        let store = match var_or_default(&lookup, "FOLIO_STORE", "memory").to_ascii_lowercase().as_str() {
            "memory" => StoreKind::Memory,
            "rocksdb" => StoreKind::RocksDb {
                path: var_or_default(&lookup, "FOLIO_ROCKSDB_PATH", DEFAULT_ROCKSDB_PATH),
            },
            other => bail!("unsupported FOLIO_STORE value: {other} (expected memory or rocksdb)"),
        };

        Ok(Self { bind_addr, store })
    }
}

fn var_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).map(|value| value.trim().to_owned()) {
        Some(value) if !value.is_empty() => value,
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_owned()
        }
    }
}
