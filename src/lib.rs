//! electograph - HTTP gateway for election-graph queries
//!
//! Forwards fixed, parameterized Cypher statements to a Neo4j instance and
//! reshapes the results into JSON. Graph computation itself (centrality,
//! link prediction, WCC) happens in the database's GDS catalog.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod graph;
pub mod normalize;
pub mod observability;
pub mod queries;
pub mod routes;
pub mod server;
