//! Cluster sets and the utilities that compare them

pub mod distinct;
pub mod merge;
pub mod metrics;
pub mod similarity;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A cluster: a set of member identifiers (genes, metabolites, nodes)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cluster {
    /// Members in sorted order
    pub members: BTreeSet<String>,
}

impl Cluster {
    /// Create a cluster from any collection of identifiers
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct members
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.contains(member)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Add every member of `other` to this cluster
    pub fn absorb(&mut self, other: &Cluster) {
        self.members.extend(other.members.iter().cloned());
    }
}

impl<S: Into<String>> FromIterator<S> for Cluster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Cluster::new(iter)
    }
}

/// A cluster produced by merging one or more input clusters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedCluster {
    /// Union of the merged members
    pub cluster: Cluster,

    /// Positions of the input clusters absorbed into this one, seed first
    pub sources: Vec<usize>,
}
