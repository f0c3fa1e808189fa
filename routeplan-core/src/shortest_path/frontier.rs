//! Candidate arrivals waiting to be finalised by the solver.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::connection::{Connection, PointName};

use super::PathEdge;

/// A tentative arrival at `to` through `connection`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Candidate<'a> {
    distance: u64,
    round: u64,
    connection: &'a Connection,
    from: PointName,
    to: PointName,
}

impl<'a> Candidate<'a> {
    pub(super) fn new(
        distance: u64,
        round: u64,
        connection: &'a Connection,
        from: PointName,
        to: PointName,
    ) -> Self {
        Self {
            distance,
            round,
            connection,
            from,
            to,
        }
    }

    pub(super) fn to(&self) -> &PointName {
        &self.to
    }

    pub(super) fn into_path_edge(self) -> PathEdge {
        PathEdge {
            point: self.to,
            from: self.from,
            connection: Some(self.connection.clone()),
            distance: self.distance,
            discovery_round: self.round,
        }
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ids are unique per network, so the trailing keys only make the
        // order total for malformed inputs.
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.round.cmp(&other.round))
            .then_with(|| self.connection.id().cmp(&other.connection.id()))
            .then_with(|| self.to.cmp(&other.to))
            .then_with(|| self.from.cmp(&other.from))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered pool of candidates.
#[derive(Debug, Default)]
pub(super) struct Frontier<'a> {
    heap: BinaryHeap<Reverse<Candidate<'a>>>,
}

impl<'a> Frontier<'a> {
    pub(super) fn push(&mut self, candidate: Candidate<'a>) {
        self.heap.push(Reverse(candidate));
    }

    pub(super) fn pop(&mut self) -> Option<Candidate<'a>> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }
}
