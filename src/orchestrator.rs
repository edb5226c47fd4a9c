/// Orchestrator - routes a task to the matching team runner.
use crate::route::{RouteDecision, classify_route};
use crate::teams::{run_autogen_team, run_crew_team, run_swarm_team};

/// Stateless dispatcher. Classification is a pure function and every runner
/// is a pure string transformation, so concurrent callers need no
/// coordination and repeated calls with the same input yield identical
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator;

impl Orchestrator {
    pub fn new() -> Self {
        Self
    }

    /// Execute a task end to end: classify, log the decision, dispatch.
    /// Accepts any string (including empty) and never fails; the log line is
    /// observability only.
    pub fn execute_task(&self, task: &str) -> String {
        let route = classify_route(task);
        tracing::info!(route = route.label(), task, "routing task");

        match route {
            RouteDecision::Autogen => run_autogen_team(task),
            RouteDecision::Crew => run_crew_team(task),
            RouteDecision::Swarm => run_swarm_team(task),
        }
    }
}
