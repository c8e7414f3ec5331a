//! Access to the social graph: people and the friendships between them.
//!
//! Every operation is a single round trip that maps the database's answer to
//! a plain value. Write operations report how many entities they touched, so
//! a `0` means "nothing changed", whether because the change was already in
//! place or because its target does not exist.
use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub mod memory;
pub mod neo4j;

pub use memory::MemoryGraph;
pub use neo4j::Neo4jGraph;

/// A person as returned by friend listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub age: Option<i64>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: Option<i64>) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

/// Whole-graph counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphInfo {
    pub nodes: u64,
    pub relationships: u64,
}

/// Inclusive bounds on the number of hops a friend listing follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopRange {
    pub min: u32,
    pub max: u32,
}

impl HopRange {
    /// `full` widens the range to every depth up to `depth`; otherwise only
    /// friends exactly `depth` hops away are wanted.
    pub fn new(depth: u32, full: bool) -> Self {
        HopRange {
            min: if full { 1 } else { depth },
            max: depth,
        }
    }

    pub fn contains(&self, hops: u32) -> bool {
        self.min <= hops && hops <= self.max
    }
}

/// Whether a transaction only reads or also writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// The operations the command line can run against a social graph.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Creates a person unless one with the same name exists.
    ///
    /// Returns the number of nodes created (0 or 1). The age is only set on
    /// creation; an existing person keeps theirs.
    async fn add(&self, name: &str, age: Option<i64>) -> Result<u64>;

    /// Deletes a person along with every friendship touching them.
    ///
    /// Returns the number of nodes deleted.
    async fn remove(&self, name: &str) -> Result<u64>;

    /// Overwrites the age of the person called `name`.
    ///
    /// Returns the number of properties set, 0 if nobody has that name.
    async fn edit(&self, name: &str, age: i64) -> Result<u64>;

    /// Makes `name` a friend of `friend` unless that edge already exists.
    ///
    /// Both people must exist. Returns the number of relationships created.
    async fn befriend(&self, name: &str, friend: &str) -> Result<u64>;

    /// Lists the distinct people reachable from `name` over friendships in
    /// either direction, within `range` hops. `name` itself is never listed.
    async fn list_friends(&self, name: &str, range: HopRange) -> Result<Vec<Person>>;

    /// Counts every node and relationship in the graph.
    async fn info(&self) -> Result<GraphInfo>;
}
