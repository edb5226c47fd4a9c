/// Route classification - pure mapping from task text to a team tag.
use serde::Serialize;

/// Keywords that send a task to the autogen-style translation pipeline.
pub const TRANSLATION_KEYWORDS: &[&str] = &["traduz", "tradu"];

/// Keywords that send a task to the crew-style planning team.
pub const PLANNING_KEYWORDS: &[&str] = &["projeto", "planejar", "plano"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteDecision {
    Autogen,
    Crew,
    Swarm,
}

impl RouteDecision {
    pub fn label(self) -> &'static str {
        match self {
            RouteDecision::Autogen => "autogen",
            RouteDecision::Crew => "crew",
            RouteDecision::Swarm => "swarm",
        }
    }
}

/// Classify a task by case-insensitive substring match, in fixed priority
/// order: translation keywords first, then planning keywords, then the swarm
/// fallback. Keywords are Portuguese and deliberately loose ("tradu" matches
/// "tradução" as well as unrelated words); the table is kept verbatim.
pub fn classify_route(task: &str) -> RouteDecision {
    let lower = task.to_lowercase();

    if TRANSLATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return RouteDecision::Autogen;
    }

    if PLANNING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return RouteDecision::Crew;
    }

    RouteDecision::Swarm
}
