//! Degrees of separation between actors in a movie-cast dataset.
//!
//! Records flow through [`graph_builder::GraphBuilder`] into a
//! [`graph_builder::CollaborationGraph`]; [`path_finder::PathFinder`] runs
//! the breadth-first search and [`query::QueryFacade`] names the two queries.

pub mod config;
pub mod constants;
pub mod data_cleaning;
pub mod error;
pub mod graph_builder;
pub mod hash_index;
pub mod path_finder;
pub mod query;
mod queue;
pub mod tracing_setup;

pub use config::{GraphConfig, KeyMatch};
pub use error::{LoadError, SearchError};
pub use graph_builder::{Actor, CollaborationGraph, GraphBuilder, Movie, MovieRecord};
pub use path_finder::{Connection, Hop, PathFinder};
pub use query::{as_sentinel, QueryFacade};
