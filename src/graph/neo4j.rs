//! Neo4j implementation of [`GraphStore`] over the Bolt protocol.
//!
//! Each operation runs one Cypher statement inside its own transaction. The
//! statements report their effect through a `RETURN` clause, so counts come
//! back as ordinary rows.
use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph, Query, Row, Txn};
use tracing::{debug, warn};

use super::{Access, GraphInfo, GraphStore, HopRange, Person};
use crate::config::ConnectionSettings;
use crate::error::{Error, Result};

// MERGE alone cannot tell a created node from a matched one, so the
// pre-existing count is taken first and carried through.
const ADD_PERSON: &str = r#"
    OPTIONAL MATCH (existing:Person {name: $name})
    WITH count(existing) = 0 AS fresh
    MERGE (p:Person {name: $name})
    ON CREATE
        SET p.age = $age
    RETURN CASE WHEN fresh THEN 1 ELSE 0 END AS created
"#;

const REMOVE_PERSON: &str = r#"
    MATCH (p:Person {name: $name})
    DETACH DELETE p
    RETURN count(p) AS deleted
"#;

const EDIT_PERSON: &str = r#"
    MATCH (p:Person {name: $name})
    SET p.age = $age
    RETURN count(p) AS properties_set
"#;

const BEFRIEND: &str = r#"
    MATCH (p:Person {name: $name}), (f:Person {name: $friend})
    OPTIONAL MATCH (p)-[existing:FRIENDS_OF]->(f)
    WITH p, f, count(existing) = 0 AS fresh
    MERGE (p)-[r:FRIENDS_OF]->(f)
    ON CREATE
        SET r.since = timestamp()
    RETURN sum(CASE WHEN fresh THEN 1 ELSE 0 END) AS created
"#;

// Both subqueries are plain counts so the planner can answer them from the
// count store instead of scanning.
const INFO: &str = r#"
    CALL { MATCH (n) RETURN count(n) AS nodes }
    CALL { MATCH ()-[r]->() RETURN count(r) AS relationships }
    RETURN nodes, relationships
"#;

/// Builds the friend listing statement for `range`.
///
/// Hop bounds cannot be passed as parameters in Cypher, so they are spliced
/// into the pattern. Both are integers, never user text.
pub fn list_friends_cypher(range: HopRange) -> String {
    format!(
        r#"
    MATCH (f:Person)-[:FRIENDS_OF*{}..{}]-(p:Person {{name: $name}})
    WHERE f <> p
    RETURN DISTINCT f
    ORDER BY f.name
"#,
        range.min, range.max
    )
}

/// A connected Neo4j database.
pub struct Neo4jGraph {
    graph: Graph,
}

impl Neo4jGraph {
    /// Connects to the database described by `settings`.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let connection_error = |source: neo4rs::Error| Error::Connection {
            uri: settings.uri.clone(),
            source,
        };

        let mut builder = ConfigBuilder::default()
            .uri(settings.uri.as_str())
            .user(settings.user.as_str())
            .password(settings.password.as_str());
        if let Some(database) = &settings.database {
            builder = builder.db(database.as_str());
        }
        let config = builder.build().map_err(connection_error)?;
        let graph = Graph::connect(config).await.map_err(connection_error)?;

        debug!(uri = %settings.uri, "connected to graph database");
        Ok(Neo4jGraph { graph })
    }

    /// Runs `q` in a fresh transaction and returns every row it produced.
    ///
    /// The transaction is committed once the rows are drained and rolled back
    /// if the statement fails.
    async fn run_in_transaction(&self, access: Access, q: Query) -> Result<Vec<Row>> {
        let mut txn = self.graph.start_txn().await?;
        match drain(&mut txn, q).await {
            Ok(rows) => {
                txn.commit().await?;
                debug!(?access, rows = rows.len(), "transaction committed");
                Ok(rows)
            }
            Err(e) => {
                warn!(?access, error = %e, "rolling back transaction");
                if let Err(rollback) = txn.rollback().await {
                    warn!(error = %rollback, "rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn run_counter(&self, access: Access, q: Query, column: &str) -> Result<u64> {
        let rows = self.run_in_transaction(access, q).await?;
        let row = rows
            .first()
            .ok_or_else(|| Error::Decode(format!("no row carrying '{}'", column)))?;
        counter(row, column)
    }
}

async fn drain(txn: &mut Txn, q: Query) -> Result<Vec<Row>> {
    let mut stream = txn.execute(q).await?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next(txn.handle()).await? {
        rows.push(row);
    }
    Ok(rows)
}

fn counter(row: &Row, column: &str) -> Result<u64> {
    let value: i64 = row.get(column)?;
    u64::try_from(value)
        .map_err(|_| Error::Decode(format!("negative count {} in '{}'", value, column)))
}

fn row_to_person(row: &Row) -> Result<Person> {
    let node: neo4rs::Node = row.get("f")?;
    let name: String = node.get("name")?;
    let age = node.get::<i64>("age").ok();
    Ok(Person { name, age })
}

#[async_trait]
impl GraphStore for Neo4jGraph {
    async fn add(&self, name: &str, age: Option<i64>) -> Result<u64> {
        let q = query(ADD_PERSON).param("name", name).param("age", age);
        let created = self.run_counter(Access::Write, q, "created").await?;
        debug!(name, ?age, created, "add person");
        Ok(created)
    }

    async fn remove(&self, name: &str) -> Result<u64> {
        let q = query(REMOVE_PERSON).param("name", name);
        let deleted = self.run_counter(Access::Write, q, "deleted").await?;
        debug!(name, deleted, "remove person");
        Ok(deleted)
    }

    async fn edit(&self, name: &str, age: i64) -> Result<u64> {
        let q = query(EDIT_PERSON).param("name", name).param("age", age);
        let set = self.run_counter(Access::Write, q, "properties_set").await?;
        debug!(name, age, set, "edit person");
        Ok(set)
    }

    async fn befriend(&self, name: &str, friend: &str) -> Result<u64> {
        let q = query(BEFRIEND).param("name", name).param("friend", friend);
        let created = self.run_counter(Access::Write, q, "created").await?;
        debug!(name, friend, created, "befriend");
        Ok(created)
    }

    async fn list_friends(&self, name: &str, range: HopRange) -> Result<Vec<Person>> {
        let q = query(&list_friends_cypher(range)).param("name", name);
        let rows = self.run_in_transaction(Access::Read, q).await?;
        let friends = rows.iter().map(row_to_person).collect::<Result<Vec<_>>>()?;
        debug!(name, ?range, found = friends.len(), "list friends");
        Ok(friends)
    }

    async fn info(&self) -> Result<GraphInfo> {
        let rows = self.run_in_transaction(Access::Read, query(INFO)).await?;
        let row = rows
            .first()
            .ok_or_else(|| Error::Decode("no row carrying graph counts".to_string()))?;
        Ok(GraphInfo {
            nodes: counter(row, "nodes")?,
            relationships: counter(row, "relationships")?,
        })
    }
}
