use std::path::{Path, PathBuf};

use anyhow::Context;
use sk_config::SkConfig;
use sk_core::snapshot::Snapshot;
use sk_store::EntityStore;
use sk_store::demo::seed_demo;
use sk_store::repository::Repository;
use sk_topology::TopologySession;

use crate::cli::GlobalFlags;

/// Where the installation data came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Demo,
}

/// Shared state for one command invocation.
pub struct AppContext {
    pub config: SkConfig,
    pub store: EntityStore,
    pub source: DataSource,
}

impl AppContext {
    /// Load configuration and open the data source.
    ///
    /// `--data` wins over `general.data_file`; with neither, the demo
    /// installation is used.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = SkConfig::load_with_dotenv().context("failed to load stromkreis config")?;
        Self::with_config(config, flags.data.as_deref())
    }

    pub fn with_config(config: SkConfig, data: Option<&Path>) -> anyhow::Result<Self> {
        let path = data
            .map(Path::to_path_buf)
            .or_else(|| config.general.data_file().map(PathBuf::from));

        let (store, source) = match path {
            Some(path) => {
                let store = EntityStore::open_json(&path)
                    .with_context(|| format!("failed to open data file {}", path.display()))?;
                (store, DataSource::File(path))
            }
            None => {
                tracing::debug!("no data file configured; using demo installation");
                (seed_demo(), DataSource::Demo)
            }
        };

        Ok(Self {
            config,
            store,
            source,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// A view session configured from `[layout]`, `[panel]` and `[general]`.
    #[must_use]
    pub fn session(&self) -> TopologySession {
        let mut session = TopologySession::from_config(&self.config);
        session.subscribe(|update| {
            tracing::debug!(
                nodes = update.graph.nodes.len(),
                edges = update.graph.edges.len(),
                highlighted = update.graph_highlight.len(),
                "view updated"
            );
        });
        session
    }
}
