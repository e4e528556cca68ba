//! Breadth-first search over the implicit actor/movie graph.
//!
//! Each query allocates its own visitation tables, indexed by actor and
//! movie id, so the graph is only ever borrowed immutably. Repeated queries
//! on one graph, or queries from several threads, never observe each
//! other's marks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::graph_builder::{ActorId, CollaborationGraph, MovieId};
use crate::queue::Queue;

/// One edge of a connection: two actors credited in the same movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Actor nearer the query source.
    pub from: String,
    /// Actor nearer the query target.
    pub to: String,
    pub movie: String,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: \"{}\"", self.from, self.to, self.movie)
    }
}

/// Shortest connection between two actors, ordered source to target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Number of actor-to-actor hops. Always `hops.len()`.
    pub distance: usize,
    pub hops: Vec<Hop>,
}

impl Connection {
    /// Actor names along the chain, source first. Empty for a
    /// self-connection, which has no hops to read names from.
    pub fn actors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hops.iter().map(|hop| hop.from.as_str()).collect();
        if let Some(last) = self.hops.last() {
            names.push(&last.to);
        }
        names
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ActorVisit {
    visited: bool,
    parent: Option<ActorId>,
    parent_movie: Option<MovieId>,
}

/// Scratch state owned by a single traversal.
struct SearchState {
    actors: Vec<ActorVisit>,
    movies_seen: Vec<bool>,
    actors_expanded: usize,
    movies_expanded: usize,
}

impl SearchState {
    fn new(graph: &CollaborationGraph) -> Self {
        SearchState {
            actors: vec![ActorVisit::default(); graph.actor_count()],
            movies_seen: vec![false; graph.movie_count()],
            actors_expanded: 0,
            movies_expanded: 0,
        }
    }

    /// Walks parent links from `target` back to the source.
    fn backtrack(&self, graph: &CollaborationGraph, target: ActorId) -> Connection {
        let mut hops = Vec::new();
        let mut current = target;
        while let (Some(parent), Some(movie)) = (
            self.actors[current.index()].parent,
            self.actors[current.index()].parent_movie,
        ) {
            hops.push(Hop {
                from: graph.actor_by_id(parent).name().to_string(),
                to: graph.actor_by_id(current).name().to_string(),
                movie: graph.movie_by_id(movie).name().to_string(),
            });
            current = parent;
        }
        hops.reverse();
        Connection {
            distance: hops.len(),
            hops,
        }
    }
}

pub struct PathFinder<'g> {
    graph: &'g CollaborationGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g CollaborationGraph) -> Self {
        PathFinder { graph }
    }

    fn resolve(&self, name: &str) -> Result<ActorId, SearchError> {
        self.graph
            .actor_id(name)
            .ok_or_else(|| SearchError::ActorNotFound {
                name: name.to_string(),
            })
    }

    /// Shortest connection from `start` to `end`.
    ///
    /// An actor reachable through several co-stars in the same layer keeps
    /// the parent found first in filmography then cast order. That choice
    /// only affects which path is reported, never its length.
    pub fn distance(&self, start: &str, end: &str) -> Result<Connection, SearchError> {
        let source = self.resolve(start)?;
        let target = self.resolve(end)?;
        let graph = self.graph;

        let mut state = SearchState::new(graph);
        let mut queue = Queue::new();
        state.actors[source.index()].visited = true;
        queue.enqueue(source);

        while let Some(current) = queue.dequeue() {
            if current == target {
                let connection = state.backtrack(graph, target);
                tracing::debug!(
                    start,
                    end,
                    distance = connection.distance,
                    actors_expanded = state.actors_expanded,
                    movies_expanded = state.movies_expanded,
                    queued = queue.len(),
                    "connection found"
                );
                return Ok(connection);
            }

            state.actors_expanded += 1;
            for title in graph.actor_by_id(current).filmography() {
                let Some(movie) = graph.movie_id(title) else {
                    continue;
                };
                if std::mem::replace(&mut state.movies_seen[movie.index()], true) {
                    continue; // cast already queued from another actor
                }
                state.movies_expanded += 1;

                for co_star in graph.movie_by_id(movie).cast() {
                    let Some(next) = graph.actor_id(co_star) else {
                        continue;
                    };
                    let visit = &mut state.actors[next.index()];
                    if visit.visited {
                        continue;
                    }
                    if visit.parent.is_none() {
                        visit.parent = Some(current); // first discovery wins
                        visit.parent_movie = Some(movie);
                    }
                    visit.visited = true; // marked here so it is queued once
                    queue.enqueue(next);
                }
            }
        }

        tracing::debug!(
            start,
            end,
            actors_expanded = state.actors_expanded,
            movies_expanded = state.movies_expanded,
            "no connection"
        );
        Err(SearchError::NoPath {
            from: start.to_string(),
            to: end.to_string(),
        })
    }
}
