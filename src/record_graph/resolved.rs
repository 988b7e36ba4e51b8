use crate::assignment::Origin;
use crate::constraints::Field;
use crate::model::{Record, RecordId};
use petgraph::graph::DiGraph;
use std::collections::HashMap;

/// The closed set of records taking part in one solve.
///
/// # Invariants
///
/// - `records` is sorted by [`RecordId`], so position order is declaration
///   order
/// - `origins[i]` tags `records[i]`
/// - the reference graph has one node per record, added in position order,
///   and is acyclic
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    records: Vec<Record>,
    origins: Vec<Origin>,
    positions: HashMap<RecordId, usize>,
    references: DiGraph<RecordId, Field>,
}

impl ResolvedModel {
    pub(crate) fn new(
        records: Vec<Record>,
        origins: Vec<Origin>,
        references: DiGraph<RecordId, Field>,
    ) -> Self {
        let positions = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id(), i))
            .collect();
        Self {
            records,
            origins,
            positions,
            references,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over records with their origin, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Record, Origin)> + '_ {
        self.records.iter().zip(self.origins.iter().copied())
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Dense position of a record, used as its CSP variable index.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.position(id).map(|i| &self.records[i])
    }

    pub fn origin(&self, id: RecordId) -> Option<Origin> {
        self.position(id).map(|i| self.origins[i])
    }

    pub fn direct_count(&self) -> usize {
        self.origins.iter().filter(|o| **o == Origin::Direct).count()
    }

    pub fn indirect_count(&self) -> usize {
        self.origins.iter().filter(|o| **o == Origin::Indirect).count()
    }

    /// Reference graph: an edge `a -> b` labelled with the field for every
    /// binary constraint of `a` targeting an included record `b`.
    pub fn references(&self) -> &DiGraph<RecordId, Field> {
        &self.references
    }
}
