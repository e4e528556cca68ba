//! Property tests for distance queries over random cast lists.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use bacon_number::{Connection, GraphBuilder, KeyMatch, MovieRecord, PathFinder, SearchError};

const ACTORS: usize = 12;

fn actor_name(i: usize) -> String {
    format!("Actor {i}")
}

fn records_from(casts: &[Vec<usize>]) -> Vec<MovieRecord> {
    casts
        .iter()
        .enumerate()
        .map(|(m, cast)| MovieRecord::new(format!("Movie {m}"), cast.iter().map(|&a| actor_name(a))))
        .collect()
}

/// Actor-to-actor adjacency built directly from the casts.
fn co_star_adjacency(casts: &[Vec<usize>]) -> HashMap<usize, HashSet<usize>> {
    let mut adjacency: HashMap<usize, HashSet<usize>> = HashMap::new();
    for cast in casts {
        for &a in cast {
            let neighbors = adjacency.entry(a).or_default();
            neighbors.extend(cast.iter().copied().filter(|&b| b != a));
        }
    }
    adjacency
}

/// Plain BFS over the materialized adjacency, used as the oracle.
fn reference_distance(adjacency: &HashMap<usize, HashSet<usize>>, start: usize, end: usize) -> Option<usize> {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back((start, 0));
    visited.insert(start);

    while let Some((current, depth)) = queue.pop_front() {
        if current == end {
            return Some(depth);
        }
        if let Some(neighbors) = adjacency.get(&current) {
            for &neighbor in neighbors {
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }
    }
    None
}

fn casts_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..ACTORS, 0..4), 0..14)
}

fn assert_well_formed(connection: &Connection, start: &str, end: &str, casts: &[Vec<usize>]) {
    assert_eq!(connection.distance, connection.hops.len());
    if connection.hops.is_empty() {
        assert_eq!(start, end);
        return;
    }
    assert_eq!(connection.hops[0].from, start);
    assert_eq!(connection.hops[connection.hops.len() - 1].to, end);
    for pair in connection.hops.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    for hop in &connection.hops {
        let index: usize = hop.movie.trim_start_matches("Movie ").parse().unwrap();
        let cast: Vec<String> = casts[index].iter().map(|&a| actor_name(a)).collect();
        assert!(cast.contains(&hop.from), "{} not in {}", hop.from, hop.movie);
        assert!(cast.contains(&hop.to), "{} not in {}", hop.to, hop.movie);
    }
}

proptest! {
    #[test]
    fn distance_matches_reference_bfs(casts in casts_strategy()) {
        let graph = GraphBuilder::new(KeyMatch::Exact).build(records_from(&casts));
        let finder = PathFinder::new(&graph);
        let adjacency = co_star_adjacency(&casts);

        for a in adjacency.keys().copied() {
            for b in adjacency.keys().copied() {
                let result = finder.distance(&actor_name(a), &actor_name(b));
                match reference_distance(&adjacency, a, b) {
                    Some(expected) => {
                        let connection = result.unwrap();
                        prop_assert_eq!(connection.distance, expected);
                        assert_well_formed(&connection, &actor_name(a), &actor_name(b), &casts);
                    }
                    None => {
                        let is_no_path = matches!(result, Err(SearchError::NoPath { .. }));
                        prop_assert!(is_no_path);
                    }
                }
            }
        }
    }

    #[test]
    fn distance_is_symmetric(casts in casts_strategy(), a in 0..ACTORS, b in 0..ACTORS) {
        let graph = GraphBuilder::default().build(records_from(&casts));
        let finder = PathFinder::new(&graph);
        let forward = finder.distance(&actor_name(a), &actor_name(b)).map(|c| c.distance);
        let backward = finder.distance(&actor_name(b), &actor_name(a)).map(|c| c.distance);
        match (forward, backward) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(_), Err(_)) => {}
            (x, y) => prop_assert!(false, "asymmetric: {:?} vs {:?}", x, y),
        }
    }

    #[test]
    fn self_distance_is_zero(casts in casts_strategy()) {
        let graph = GraphBuilder::default().build(records_from(&casts));
        let finder = PathFinder::new(&graph);
        for actor in graph.actors() {
            let connection = finder.distance(actor.name(), actor.name()).unwrap();
            prop_assert_eq!(connection.distance, 0);
            prop_assert!(connection.hops.is_empty());
        }
    }

    #[test]
    fn repeated_queries_are_deterministic(casts in casts_strategy(), a in 0..ACTORS, b in 0..ACTORS) {
        let records = records_from(&casts);
        let graph = GraphBuilder::default().build(records.clone());
        let rebuilt = GraphBuilder::default().build(records);

        let first = PathFinder::new(&graph).distance(&actor_name(a), &actor_name(b));
        let again = PathFinder::new(&graph).distance(&actor_name(a), &actor_name(b));
        let fresh = PathFinder::new(&rebuilt).distance(&actor_name(a), &actor_name(b));
        prop_assert_eq!(&first, &again);
        prop_assert_eq!(&first, &fresh);
    }
}
