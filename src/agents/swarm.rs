/// Swarm membership - spawns sequential worker identifiers.
pub fn spawn_agents(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("agent-{i}")).collect()
}
