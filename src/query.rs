use crate::config::GraphConfig;
use crate::error::SearchError;
use crate::graph_builder::{CollaborationGraph, GraphBuilder, MovieRecord};
use crate::path_finder::{Connection, PathFinder};

/// The two named queries over a built graph.
#[derive(Debug, Clone)]
pub struct QueryFacade {
    graph: CollaborationGraph,
    reference_actor: String,
}

impl QueryFacade {
    pub fn new(graph: CollaborationGraph, reference_actor: impl Into<String>) -> Self {
        QueryFacade {
            graph,
            reference_actor: reference_actor.into(),
        }
    }

    /// Builds the graph from `records` with the settings in `config`.
    pub fn from_records(records: impl IntoIterator<Item = MovieRecord>, config: &GraphConfig) -> Self {
        let graph = GraphBuilder::from_config(config).build(records);
        Self::new(graph, config.reference_actor.clone())
    }

    pub fn graph(&self) -> &CollaborationGraph {
        &self.graph
    }

    pub fn reference_actor(&self) -> &str {
        &self.reference_actor
    }

    /// Distance from `actor` to the reference actor.
    pub fn bacon_number(&self, actor: &str) -> Result<Connection, SearchError> {
        self.pairwise_distance(actor, &self.reference_actor)
    }

    pub fn pairwise_distance(&self, from: &str, to: &str) -> Result<Connection, SearchError> {
        PathFinder::new(&self.graph).distance(from, to)
    }
}

/// Collapses a query result to the integer contract: the distance, or
/// [`SearchError::SENTINEL`] when either endpoint is missing or no path exists.
pub fn as_sentinel(result: &Result<Connection, SearchError>) -> i64 {
    match result {
        Ok(connection) => connection.distance as i64,
        Err(_) => SearchError::SENTINEL,
    }
}
