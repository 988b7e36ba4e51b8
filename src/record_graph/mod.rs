//! Record arena, reference resolution and the indirect-loading closure.
//!
//! [`RecordGraph`] indexes every record of every grade under a stable
//! [`RecordId`] and knows how to compile any of them on demand.
//! [`RecordGraph::resolve`] then decides which records take part in a solve:
//! the directly selected ones, plus (when indirect loading is enabled)
//! everything reachable from them through binary constraints. The resulting
//! reference graph must be acyclic.

mod cycle;
mod resolved;

pub use resolved::ResolvedModel;

use crate::assignment::Origin;
use crate::config::OutsideReferencePolicy;
use crate::constraints::{self, Constraint, Field};
use crate::error::{ReferenceProblem, SchedulingError};
use crate::model::{
    CellLocation, CellRef, Grade, GradeId, InputModel, RawRecord, Record, RecordId, Selection,
};
use crate::units::{hours, Hours};
use petgraph::graph::DiGraph;
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct Entry<'a> {
    grade: GradeId,
    location: CellLocation,
    raw: &'a RawRecord,
}

/// Arena over all records of an [`InputModel`].
#[derive(Debug, Clone)]
pub struct RecordGraph<'a> {
    grades: Vec<Grade>,
    entries: Vec<Entry<'a>>,
    grade_by_name: HashMap<&'a str, GradeId>,
    cells: HashMap<(GradeId, CellRef), RecordId>,
    default_setup: Hours,
}

impl<'a> RecordGraph<'a> {
    /// Assigns ids in declaration order and indexes every record by cell.
    ///
    /// # Errors
    ///
    /// `DuplicateGrade` if two sheets share a name, `DuplicateCell` if two
    /// records of one sheet share a cell.
    pub fn build(model: &'a InputModel, default_setup: Hours) -> Result<Self, SchedulingError> {
        let mut graph = Self {
            grades: Vec::with_capacity(model.grades.len()),
            entries: Vec::with_capacity(model.record_count()),
            grade_by_name: HashMap::new(),
            cells: HashMap::new(),
            default_setup,
        };

        for sheet in &model.grades {
            let grade = GradeId(graph.grades.len());
            if graph.grade_by_name.insert(sheet.name.as_str(), grade).is_some() {
                return Err(SchedulingError::DuplicateGrade(sheet.name.clone()));
            }

            let mut ids = Vec::with_capacity(sheet.records.len());
            for raw in &sheet.records {
                let id = RecordId(graph.entries.len());
                let location = CellLocation::new(sheet.name.as_str(), raw.cell.clone());
                if graph.cells.insert((grade, raw.cell.clone()), id).is_some() {
                    return Err(SchedulingError::DuplicateCell(location));
                }
                graph.entries.push(Entry {
                    grade,
                    location,
                    raw,
                });
                ids.push(id);
            }

            graph.grades.push(Grade {
                id: grade,
                name: sheet.name.clone(),
                records: ids,
            });
        }

        debug!(
            grades = graph.grades.len(),
            records = graph.entries.len(),
            "record graph built"
        );
        Ok(graph)
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn location(&self, id: RecordId) -> Option<&CellLocation> {
        self.entries.get(id.index()).map(|e| &e.location)
    }

    /// Resolves a reference made from a record of `from`. Without a sheet
    /// the reference addresses `from` itself.
    pub fn lookup(
        &self,
        from: GradeId,
        sheet: Option<&str>,
        cell: &CellRef,
    ) -> Result<RecordId, ReferenceProblem> {
        let grade = match sheet {
            Some(name) => *self
                .grade_by_name
                .get(name)
                .ok_or(ReferenceProblem::UnknownSheet)?,
            None => from,
        };
        self.cells
            .get(&(grade, cell.clone()))
            .copied()
            .ok_or(ReferenceProblem::UnknownCell)
    }

    /// Compiles both field expressions of a record.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn compile(&self, id: RecordId) -> Result<Record, SchedulingError> {
        let entry = &self.entries[id.index()];
        let resolve = |sheet: Option<&str>, cell: &CellRef| self.lookup(entry.grade, sheet, cell);

        let date_constraints =
            constraints::compile(&entry.raw.date, Field::Date, &entry.location, resolve)?;
        let time_constraints =
            constraints::compile(&entry.raw.time, Field::Time, &entry.location, resolve)?;

        Ok(Record {
            id,
            grade: entry.grade,
            location: entry.location.clone(),
            subject: entry.raw.subject.clone(),
            course: entry.raw.course,
            semester: entry.raw.semester,
            setup: entry.raw.setup_hours.map_or(self.default_setup, hours),
            date_constraints,
            time_constraints,
        })
    }

    /// Computes the records included in a solve.
    ///
    /// Records matching `selection` are included as [`Origin::Direct`]. With
    /// `load_indirects`, every record reachable from them through binary
    /// constraints is added as [`Origin::Indirect`], across grades, until
    /// closure. Without it, references leaving the selection are handled per
    /// `policy`.
    ///
    /// # Errors
    ///
    /// Compilation errors of any included record, `Reference` for outside
    /// references under [`OutsideReferencePolicy::Reject`], and `Cycle` if
    /// the references among included records loop.
    pub fn resolve(
        &self,
        selection: &Selection,
        load_indirects: bool,
        policy: OutsideReferencePolicy,
    ) -> Result<ResolvedModel, SchedulingError> {
        let mut origins: BTreeMap<RecordId, Origin> = BTreeMap::new();

        for grade in &self.grades {
            let direct: Vec<RecordId> = grade
                .records
                .iter()
                .copied()
                .filter(|id| {
                    let raw = self.entries[id.index()].raw;
                    selection.matches(&grade.name, raw.course, raw.semester)
                })
                .collect();

            if direct.is_empty() {
                warn!(grade = %grade.name, "grade skipped: no record matches the selection");
                continue;
            }
            info!(grade = %grade.name, records = direct.len(), "grade processed");
            origins.extend(direct.into_iter().map(|id| (id, Origin::Direct)));
        }

        let mut compiled: BTreeMap<RecordId, Record> = BTreeMap::new();
        let mut worklist: VecDeque<RecordId> = origins.keys().copied().collect();
        while let Some(id) = worklist.pop_front() {
            let record = self.compile(id)?;
            if load_indirects {
                for target in record.binary_targets() {
                    if !origins.contains_key(&target) {
                        origins.insert(target, Origin::Indirect);
                        worklist.push_back(target);
                    }
                }
            }
            compiled.insert(id, record);
        }

        let indirect = origins.values().filter(|o| **o == Origin::Indirect).count();
        if load_indirects {
            info!(indirect, "indirect records loaded");
        }

        if !load_indirects {
            self.check_outside_references(&compiled, policy)?;
        }

        let mut references = DiGraph::with_capacity(compiled.len(), 0);
        let nodes: HashMap<RecordId, _> = compiled
            .keys()
            .map(|&id| (id, references.add_node(id)))
            .collect();
        for record in compiled.values() {
            for c in record.all_constraints() {
                if let Constraint::Binary { field, target, .. } = c {
                    if let Some(&to) = nodes.get(target) {
                        references.add_edge(nodes[&record.id()], to, *field);
                    }
                }
            }
        }

        if let Some(path) = cycle::find_cycle(&references) {
            let path = path
                .into_iter()
                .map(|id| compiled[&id].location().clone())
                .collect();
            return Err(SchedulingError::Cycle { path });
        }

        let (records, origins): (Vec<Record>, Vec<Origin>) = compiled
            .into_values()
            .map(|r| {
                let origin = origins[&r.id()];
                (r, origin)
            })
            .unzip();

        debug!(
            records = records.len(),
            references = references.edge_count(),
            "model resolved"
        );
        Ok(ResolvedModel::new(records, origins, references))
    }

    fn check_outside_references(
        &self,
        compiled: &BTreeMap<RecordId, Record>,
        policy: OutsideReferencePolicy,
    ) -> Result<(), SchedulingError> {
        for record in compiled.values() {
            for c in record.all_constraints() {
                let Constraint::Binary { field, target, .. } = c else {
                    continue;
                };
                if compiled.contains_key(target) {
                    continue;
                }
                let target_location = self.entries[target.index()].location.to_string();
                match policy {
                    OutsideReferencePolicy::Reject => {
                        return Err(SchedulingError::Reference {
                            location: record.location().clone(),
                            field: *field,
                            target: target_location,
                            problem: ReferenceProblem::OutsideSelection,
                        });
                    }
                    OutsideReferencePolicy::Ignore => {
                        warn!(
                            record = %record.location(),
                            %field,
                            target = %target_location,
                            "reference outside the selection ignored"
                        );
                    }
                }
            }
        }
        Ok(())
    }
}
