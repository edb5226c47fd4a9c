/// Crew role table for crew-style runs.
///
/// A fixed slice of (role, description) pairs so iteration order is the
/// declaration order: writer, researcher, manager.
pub const CREW_ROLES: &[(&str, &str)] = &[
    ("writer", "writes drafts"),
    ("researcher", "collects facts"),
    ("manager", "coordinates"),
];

/// The crew composition is the same for every task today; the task argument
/// stays so callers keep a per-task shape once role selection becomes real.
pub fn build_crew_for_task(_task: &str) -> &'static [(&'static str, &'static str)] {
    CREW_ROLES
}
