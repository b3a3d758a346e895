//! Reading and writing cluster files

pub mod format;

use crate::cluster::Cluster;
use crate::error::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use format::{format_clusters, parse_cluster_line, parse_clusters, parse_labels, HEADER};

/// Read every cluster from a cluster file
pub fn read_clusters(path: impl AsRef<Path>) -> Result<Vec<Cluster>> {
    let path = path.as_ref();
    log::debug!("Reading clusters from {}", path.display());

    let text = fs::read_to_string(path)?;
    let clusters = parse_clusters(&text)?;

    log::debug!("Read {} clusters from {}", clusters.len(), path.display());
    Ok(clusters)
}

/// Read a reference labeling, one label per line
pub fn read_labels(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let labels = parse_labels(&fs::read_to_string(path)?)?;

    log::debug!("Read {} labels from {}", labels.len(), path.display());
    Ok(labels)
}

/// Write clusters in the current format, replacing any existing file
pub fn write_clusters(path: impl AsRef<Path>, clusters: &[Cluster]) -> Result<()> {
    let path = path.as_ref();
    log::info!("Saving {} clusters to {}", clusters.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = format_clusters(clusters)?;
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;

    Ok(())
}
