//! In-process social graph backed by `petgraph`.
//!
//! Mirrors what the Cypher statements in [`super::neo4j`] do, including the
//! variable-length path rules: a walk may pass through the same person more
//! than once but never over the same friendship twice.
use async_trait::async_trait;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{GraphInfo, GraphStore, HopRange, Person};
use crate::error::Result;

/// A friendship edge. `since` is in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Friendship {
    pub since: i64,
}

type SocialGraph = StableDiGraph<Person, Friendship>;

/// Ephemeral [`GraphStore`] whose contents die with the value.
#[derive(Default)]
pub struct MemoryGraph {
    graph: Mutex<SocialGraph>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn graph(&self) -> MutexGuard<'_, SocialGraph> {
        self.graph.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns when `name` befriended `friend`, if they did.
    pub fn friendship_since(&self, name: &str, friend: &str) -> Option<i64> {
        let g = self.graph();
        g.edge_indices().find_map(|edge| {
            let (source, target) = g.edge_endpoints(edge)?;
            (g[source].name == name && g[target].name == friend).then(|| g[edge].since)
        })
    }
}

fn people_named(g: &SocialGraph, name: &str) -> Vec<NodeIndex> {
    g.node_indices().filter(|&n| g[n].name == name).collect()
}

/// Friendships touching `node`, paired with the person on the other end.
fn incident(g: &SocialGraph, node: NodeIndex) -> Vec<(EdgeIndex, NodeIndex)> {
    g.edges_directed(node, Direction::Outgoing)
        .map(|e| (e.id(), e.target()))
        .chain(
            g.edges_directed(node, Direction::Incoming)
                .map(|e| (e.id(), e.source())),
        )
        .collect()
}

fn walk(
    g: &SocialGraph,
    at: NodeIndex,
    hops: u32,
    range: HopRange,
    used: &mut Vec<EdgeIndex>,
    found: &mut BTreeSet<NodeIndex>,
) {
    if range.contains(hops) {
        found.insert(at);
    }
    if hops >= range.max {
        return;
    }
    for (edge, next) in incident(g, at) {
        if used.contains(&edge) {
            continue;
        }
        used.push(edge);
        walk(g, next, hops + 1, range, used, found);
        used.pop();
    }
}

#[async_trait]
impl GraphStore for MemoryGraph {
    async fn add(&self, name: &str, age: Option<i64>) -> Result<u64> {
        let mut g = self.graph();
        if !people_named(&g, name).is_empty() {
            return Ok(0);
        }
        g.add_node(Person::new(name, age));
        Ok(1)
    }

    async fn remove(&self, name: &str) -> Result<u64> {
        let mut g = self.graph();
        let doomed = people_named(&g, name);
        for &node in &doomed {
            g.remove_node(node);
        }
        Ok(doomed.len() as u64)
    }

    async fn edit(&self, name: &str, age: i64) -> Result<u64> {
        let mut g = self.graph();
        let matched = people_named(&g, name);
        for &node in &matched {
            g[node].age = Some(age);
        }
        Ok(matched.len() as u64)
    }

    async fn befriend(&self, name: &str, friend: &str) -> Result<u64> {
        let mut g = self.graph();
        let sources = people_named(&g, name);
        let targets = people_named(&g, friend);
        let mut created = 0;
        for &source in &sources {
            for &target in &targets {
                if g.find_edge(source, target).is_none() {
                    let since = chrono::Utc::now().timestamp_millis();
                    g.add_edge(source, target, Friendship { since });
                    created += 1;
                }
            }
        }
        Ok(created)
    }

    async fn list_friends(&self, name: &str, range: HopRange) -> Result<Vec<Person>> {
        let g = self.graph();
        let mut reached = BTreeSet::new();
        for origin in people_named(&g, name) {
            let mut found = BTreeSet::new();
            walk(&g, origin, 0, range, &mut Vec::new(), &mut found);
            found.remove(&origin);
            reached.extend(found);
        }
        let mut friends: Vec<Person> = reached.into_iter().map(|n| g[n].clone()).collect();
        friends.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(friends)
    }

    async fn info(&self) -> Result<GraphInfo> {
        let g = self.graph();
        Ok(GraphInfo {
            nodes: g.node_count() as u64,
            relationships: g.edge_count() as u64,
        })
    }
}
