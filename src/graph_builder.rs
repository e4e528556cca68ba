//! Bipartite actor/movie graph built from flat movie records.
//!
//! Edges are never stored as actor pairs. A movie lists its cast by name and
//! an actor lists its filmography by name; the path finder crosses between
//! the two through the name indexes when it expands a node.

use serde::{Deserialize, Serialize};

use crate::config::{GraphConfig, KeyMatch};
use crate::hash_index::HashIndex;

/// One tokenized dataset line: a movie title and its cast in credit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub name: String,
    pub cast: Vec<String>,
}

impl MovieRecord {
    pub fn new<S: Into<String>>(name: impl Into<String>, cast: impl IntoIterator<Item = S>) -> Self {
        MovieRecord {
            name: name.into(),
            cast: cast.into_iter().map(Into::into).collect(),
        }
    }
}

/// Position of an actor in the graph's actor arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(usize);

/// Position of a movie in the graph's movie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(usize);

impl ActorId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl MovieId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    name: String,
    cast: Vec<String>,
}

impl Movie {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cast names in credit order. Repeated credits are kept.
    pub fn cast(&self) -> &[String] {
        &self.cast
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    name: String,
    filmography: Vec<String>,
}

impl Actor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Movie titles in the order the dataset credited this actor.
    pub fn filmography(&self) -> &[String] {
        &self.filmography
    }
}

/// Owns every movie and actor plus the two name indexes over them.
#[derive(Debug, Clone)]
pub struct CollaborationGraph {
    movies: Vec<Movie>,
    actors: Vec<Actor>,
    movie_index: HashIndex<MovieId>,
    actor_index: HashIndex<ActorId>,
}

impl CollaborationGraph {
    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.actor_index.search(name).copied()
    }

    pub fn movie_id(&self, name: &str) -> Option<MovieId> {
        self.movie_index.search(name).copied()
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actor_id(name).map(|id| &self.actors[id.0])
    }

    pub fn movie(&self, name: &str) -> Option<&Movie> {
        self.movie_id(name).map(|id| &self.movies[id.0])
    }

    pub fn actor_by_id(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub fn movie_by_id(&self, id: MovieId) -> &Movie {
        &self.movies[id.0]
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn key_match(&self) -> KeyMatch {
        self.actor_index.key_match()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    key_match: KeyMatch,
}

impl GraphBuilder {
    pub fn new(key_match: KeyMatch) -> Self {
        GraphBuilder { key_match }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.key_match)
    }

    /// Builds both indexes from `records`, sized to one bucket per record.
    pub fn build(&self, records: impl IntoIterator<Item = MovieRecord>) -> CollaborationGraph {
        let records: Vec<MovieRecord> = records.into_iter().collect();
        let table_size = records.len();

        let mut graph = CollaborationGraph {
            movies: Vec::new(),
            actors: Vec::new(),
            movie_index: HashIndex::with_buckets(table_size, self.key_match),
            actor_index: HashIndex::with_buckets(table_size, self.key_match),
        };

        let mut skipped = 0usize;
        for record in records {
            if record.name.is_empty() {
                skipped += 1;
                continue;
            }
            add_record(&mut graph, record);
        }

        tracing::info!(
            movies = graph.movies.len(),
            actors = graph.actors.len(),
            buckets = graph.actor_index.bucket_count(),
            skipped,
            "collaboration graph built"
        );
        graph
    }
}

fn add_record(graph: &mut CollaborationGraph, record: MovieRecord) {
    let MovieRecord { name, cast } = record;
    let cast: Vec<String> = cast.into_iter().filter(|actor| !actor.is_empty()).collect(); // drops blank tokens

    // A title seen on an earlier line gets this line's cast appended.
    match graph.movie_index.search(&name).copied() {
        Some(existing) => {
            tracing::debug!(movie = %name, "merging repeated movie title");
            graph.movies[existing.0].cast.extend(cast.iter().cloned());
        }
        None => {
            let id = MovieId(graph.movies.len());
            graph.movies.push(Movie {
                name: name.clone(),
                cast: cast.clone(),
            });
            graph.movie_index.insert(&name, id);
        }
    }

    for actor_name in cast {
        match graph.actor_index.search(&actor_name).copied() {
            Some(id) => graph.actors[id.0].filmography.push(name.clone()), // known actor, one more credit
            None => {
                let id = ActorId(graph.actors.len()); // next free arena slot
                graph.actor_index.insert(&actor_name, id);
                graph.actors.push(Actor {
                    name: actor_name,
                    filmography: vec![name.clone()],
                });
            }
        }
    }
}
