use crate::agents::crew::build_crew_for_task;
use crate::agents::reviewer::review_text;
use crate::agents::swarm::spawn_agents;
use crate::agents::translator::translate_to_english;
use crate::agents::writer::write_text;

/// Fixed swarm fan-out; not configurable.
pub const SWARM_SIZE: usize = 3;

/// Autogen-style team: a linear write -> review -> translate pipeline where
/// each stage consumes the previous stage's output. The three stage outputs
/// are returned newline-joined in call order.
pub fn run_autogen_team(task: &str) -> String {
    let writer_output = write_text(task);
    let reviewer_output = review_text(&writer_output);
    let translator_output = translate_to_english(&reviewer_output);
    [writer_output, reviewer_output, translator_output].join("\n")
}

/// Crew-style team: one line per role in table order, then a trailing
/// summary line for the task itself.
pub fn run_crew_team(task: &str) -> String {
    let mut steps = build_crew_for_task(task)
        .iter()
        .map(|(role, desc)| format!("Crew role {role}: {desc}"))
        .collect::<Vec<String>>();
    steps.push(format!("Crew executed task: {task}"));
    steps.join("\n")
}

/// Swarm-style team: every spawned member reports on the same task, in
/// spawn order. Sequential string generation only; nothing runs in parallel.
pub fn run_swarm_team(task: &str) -> String {
    spawn_agents(SWARM_SIZE)
        .iter()
        .map(|agent| format!("{agent} handled part of: {task}"))
        .collect::<Vec<String>>()
        .join("\n")
}
