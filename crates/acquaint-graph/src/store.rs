use crate::error::GraphError;
use crate::graph::SocialGraph;
use acquaint_core::{Roster, RosterError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// A JSON snapshot of a graph on disk.
///
/// The snapshot is the graph's roster: people in index order and
/// friendships in insertion order, so loading it rebuilds identical
/// adjacency lists.
pub struct GraphStore {
    path: PathBuf,
}

impl GraphStore {
    /// Points a store at a snapshot file. Nothing is touched until a save
    /// or load.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the graph, creating parent directories as needed.
    pub fn save_graph(&self, graph: &SocialGraph) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&graph.to_roster())?;
        fs::write(&self.path, json)?;
        info!(
            "Saved {} people to {}",
            graph.person_count(),
            self.path.display()
        );
        Ok(())
    }

    /// Loads the graph from the store, `None` if no snapshot exists yet.
    pub fn load_graph(&self) -> Result<Option<SocialGraph>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)?;
        let roster: Roster = serde_json::from_str(&text)?;
        Ok(Some(SocialGraph::from_roster(roster)?))
    }
}

/// Loads a graph from a roster file.
///
/// `.json` files are read as snapshots, anything else as the text roster
/// format.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<SocialGraph, StoreError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        debug!("Reading JSON snapshot {}", path.display());
        return GraphStore::open(path).load_graph()?.ok_or_else(|| {
            StoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no snapshot at {}", path.display()),
            ))
        });
    }

    debug!("Reading text roster {}", path.display());
    Ok(SocialGraph::from_roster(Roster::from_path(path)?)?)
}
