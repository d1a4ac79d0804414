//! Ordering registrars by their declared requirements.
//!
//! The plan is a stable topological sort: among the registrars whose
//! requirements are satisfied, the one listed first goes next. A list that
//! already respects its dependencies therefore comes out unchanged.

use std::cell::Cell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use depthai_core::{ModuleHandle, RegistrationCallback, RegistrationError, WorkList};
use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::{Area, AreaSet, PlanError, Registrar};

/// Name of the no-op callback that closes every work-list built from a plan.
pub const END_OF_CALLSTACK: &str = "end_of_callstack";

/// Registrars in dependency-respecting order.
#[derive(Debug)]
pub struct RegistrationPlan<M> {
    order: Vec<Registrar<M>>,
}

impl<M> RegistrationPlan<M> {
    /// Sort `registrars` so each runs after everything it requires.
    ///
    /// Ties keep the order of `registrars`.
    pub fn new(registrars: Vec<Registrar<M>>) -> Result<Self, PlanError> {
        // Edges point from a requirement to the registrar that needs it.
        // Node indices equal positions in `registrars`.
        let mut graph: DiGraph<Area, ()> = DiGraph::with_capacity(registrars.len(), 0);
        let mut index: FxHashMap<Area, NodeIndex> = FxHashMap::default();
        for registrar in &registrars {
            let node = graph.add_node(registrar.area);
            if index.insert(registrar.area, node).is_some() {
                return Err(PlanError::DuplicateArea(registrar.area));
            }
        }
        for (i, registrar) in registrars.iter().enumerate() {
            for &required in registrar.requires {
                let Some(&from) = index.get(&required) else {
                    return Err(PlanError::UnknownDependency {
                        area: registrar.area,
                        requires: required,
                    });
                };
                graph.update_edge(from, NodeIndex::new(i), ());
            }
        }

        let sorted = stable_topological_order(&graph)?;
        let mut slots: Vec<Option<Registrar<M>>> = registrars.into_iter().map(Some).collect();
        let order = sorted
            .into_iter()
            .filter_map(|node| slots[node.index()].take())
            .collect::<Vec<_>>();

        tracing::debug!(
            order = ?order.iter().map(|r| r.area.name()).collect::<Vec<_>>(),
            "registration plan"
        );
        Ok(Self { order })
    }

    /// Areas in planned order.
    pub fn areas(&self) -> Vec<Area> {
        self.order.iter().map(|r| r.area).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<M: ModuleHandle + 'static> RegistrationPlan<M> {
    /// Seed a work-list with one callback per area, followed by the
    /// end-of-callstack marker.
    ///
    /// Each callback checks that the areas it requires have completed
    /// before registering, so a misordered list fails with
    /// [`RegistrationError::DependencyNotRegistered`] instead of
    /// registering against missing types.
    pub fn into_work_list(self) -> WorkList<M> {
        let completed = Rc::new(Cell::new(AreaSet::empty()));
        let mut list = WorkList::new();
        for registrar in self.order {
            list.push_back(area_callback(registrar, Rc::clone(&completed)));
        }
        list.push_back(RegistrationCallback::noop(END_OF_CALLSTACK));
        list
    }
}

/// Wrap a registrar in a callback that enforces its requirements.
///
/// An area counts as completed once its own callback returns. Anything the
/// area pushed runs before the next pending area, so later areas still see
/// all of it.
pub(crate) fn area_callback<M: ModuleHandle + 'static>(
    registrar: Registrar<M>,
    completed: Rc<Cell<AreaSet>>,
) -> RegistrationCallback<M> {
    let area = registrar.area;
    RegistrationCallback::new(area.name(), move |module, callstack| {
        let done = completed.get();
        if let Some(missing) = registrar.requires.iter().find(|a| !done.contains_area(**a)) {
            return Err(RegistrationError::DependencyNotRegistered {
                callback: area.name().to_string(),
                required: missing.name().to_string(),
            });
        }
        (registrar.bind)(module, callstack)?;
        completed.set(done | area.flag());
        Ok(())
    })
}

fn stable_topological_order(graph: &DiGraph<Area, ()>) -> Result<Vec<NodeIndex>, PlanError> {
    let mut in_degree: Vec<usize> = graph
        .node_indices()
        .map(|n| graph.neighbors_directed(n, Direction::Incoming).count())
        .collect();

    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(Reverse(i)) = ready.pop() {
        let node = NodeIndex::new(i);
        order.push(node);
        for next in graph.neighbors_directed(node, Direction::Outgoing) {
            in_degree[next.index()] -= 1;
            if in_degree[next.index()] == 0 {
                ready.push(Reverse(next.index()));
            }
        }
    }

    if order.len() == graph.node_count() {
        return Ok(order);
    }

    // Report the strongly connected components that could not be ordered.
    let mut cyclic: Vec<NodeIndex> = tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .flatten()
        .collect();
    cyclic.sort();
    Err(PlanError::DependencyCycle(
        cyclic.into_iter().map(|n| graph[n]).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depthai_core::{Callstack, Module, TypeDecl};

    fn ok(_: &mut Module, _: &mut Callstack<'_, Module>) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn reg(area: Area, requires: &'static [Area]) -> Registrar<Module> {
        Registrar::new(area, requires, ok)
    }

    #[test]
    fn satisfied_order_is_kept() {
        let plan = RegistrationPlan::new(vec![
            reg(Area::Common, &[]),
            reg(Area::Datatypes, &[Area::Common]),
            reg(Area::Log, &[Area::Common]),
            reg(Area::DataQueue, &[Area::Datatypes]),
        ])
        .unwrap();
        assert_eq!(
            plan.areas(),
            [Area::Common, Area::Datatypes, Area::Log, Area::DataQueue]
        );
    }

    #[test]
    fn dependencies_move_ahead_of_dependents() {
        let plan = RegistrationPlan::new(vec![
            reg(Area::Pipeline, &[Area::Nodes]),
            reg(Area::Log, &[]),
            reg(Area::Nodes, &[Area::Common]),
            reg(Area::Common, &[]),
        ])
        .unwrap();
        assert_eq!(
            plan.areas(),
            [Area::Log, Area::Common, Area::Nodes, Area::Pipeline]
        );
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let err = RegistrationPlan::new(vec![reg(Area::Device, &[Area::XLink])]).unwrap_err();
        assert_eq!(
            err,
            PlanError::UnknownDependency {
                area: Area::Device,
                requires: Area::XLink
            }
        );
    }

    #[test]
    fn duplicate_area_is_rejected() {
        let err =
            RegistrationPlan::new(vec![reg(Area::Log, &[]), reg(Area::Log, &[])]).unwrap_err();
        assert_eq!(err, PlanError::DuplicateArea(Area::Log));
    }

    #[test]
    fn cycle_is_reported() {
        let err = RegistrationPlan::new(vec![
            reg(Area::Common, &[]),
            reg(Area::Device, &[Area::Pipeline]),
            reg(Area::Pipeline, &[Area::Device]),
            reg(Area::Log, &[Area::Common]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PlanError::DependencyCycle(vec![Area::Device, Area::Pipeline])
        );
        assert_eq!(
            err.to_string(),
            "dependency cycle between 'device', 'pipeline'"
        );
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let err = RegistrationPlan::new(vec![reg(Area::Ros, &[Area::Ros])]).unwrap_err();
        assert_eq!(err, PlanError::DependencyCycle(vec![Area::Ros]));
    }

    #[test]
    fn work_list_ends_with_marker() {
        let plan =
            RegistrationPlan::new(vec![reg(Area::Common, &[]), reg(Area::Log, &[])]).unwrap();
        let list = plan.into_work_list();
        assert_eq!(
            list.pending_names().collect::<Vec<_>>(),
            ["common", "log", END_OF_CALLSTACK]
        );
    }

    #[test]
    fn misordered_work_list_fails_at_drain() {
        // Seed the list by hand, bypassing the sort.
        let completed = Rc::new(Cell::new(AreaSet::empty()));
        let mut list = WorkList::new();
        list.push_back(area_callback(
            reg(Area::Datatypes, &[Area::Common]),
            Rc::clone(&completed),
        ));
        list.push_back(area_callback(reg(Area::Common, &[]), Rc::clone(&completed)));

        let err = list.drain(&mut Module::new("depthai")).unwrap_err();
        assert_eq!(
            err.source,
            RegistrationError::DependencyNotRegistered {
                callback: "datatypes".to_string(),
                required: "common".to_string(),
            }
        );
    }

    #[test]
    fn areas_complete_after_their_pushed_work() {
        fn buffer(m: &mut Module, _: &mut Callstack<'_, Module>) -> Result<(), RegistrationError> {
            m.add_type(TypeDecl::class("Buffer"))
        }
        fn base(m: &mut Module, cs: &mut Callstack<'_, Module>) -> Result<(), RegistrationError> {
            cs.schedule("base/Buffer", buffer);
            m.add_type(TypeDecl::class("ADatatype"))
        }
        fn user(m: &mut Module, _: &mut Callstack<'_, Module>) -> Result<(), RegistrationError> {
            m.add_type(TypeDecl::class("ImgFrame").extends("Buffer"))
        }

        let plan = RegistrationPlan::new(vec![
            Registrar::new(Area::Datatypes, &[], base),
            Registrar::new(Area::DataQueue, &[Area::Datatypes], user),
        ])
        .unwrap();
        let mut module = Module::new("depthai");
        let report = plan.into_work_list().drain(&mut module).unwrap();
        assert_eq!(
            report.executed(),
            ["datatypes", "base/Buffer", "data_queue", END_OF_CALLSTACK]
        );
        assert!(module.contains_type("ImgFrame"));
    }
}
