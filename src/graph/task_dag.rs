use crate::task::Task;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

/// The dependency graph contains a cycle. Carries one task id known to sit
/// on the cycle, for diagnostics; the recalculation pass treats any cycle as
/// a no-op regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDetected {
    pub task_id: i32,
}

impl fmt::Display for CycleDetected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dependency cycle involving task {}", self.task_id)
    }
}

impl std::error::Error for CycleDetected {}

/// Dependency graph over a task collection. Dependencies are stored on the
/// tasks as id references; the DAG rebuilds an id-to-node index per call.
pub struct TaskDag {
    pub graph: DiGraph<i32, ()>,
    pub id_to_index: HashMap<i32, NodeIndex>,
}

impl TaskDag {
    /// Build the graph with one edge per dependency, `dep -> task`.
    /// Dependency ids absent from the collection and self-references are
    /// data skew, not errors: both are skipped.
    pub fn build(tasks: &[Task]) -> Self {
        let mut graph: DiGraph<i32, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i32, NodeIndex> = HashMap::new();

        for task in tasks {
            let node_ix = graph.add_node(task.id);
            id_to_index.insert(task.id, node_ix);
        }

        for task in tasks {
            for &dep_id in &task.dependencies {
                if dep_id == task.id {
                    continue;
                }
                if let (Some(&u), Some(&v)) = (id_to_index.get(&dep_id), id_to_index.get(&task.id))
                {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    /// Task ids ordered so every dependency precedes its dependents
    pub fn topological_order(&self) -> Result<Vec<i32>, CycleDetected> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|ix| self.graph[ix]).collect())
            .map_err(|cycle| CycleDetected {
                task_id: self.graph[cycle.node_id()],
            })
    }
}
