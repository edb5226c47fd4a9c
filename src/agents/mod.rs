/// Stub agents behind the team runners.
///
/// Every agent here is a pure function over strings; no agent holds state
/// and none performs I/O:
///
/// **Autogen-style pipeline stages**:
/// - `writer`: drafts text for a task
/// - `reviewer`: refines a draft
/// - `translator`: marks a draft as translated to English
///
/// **Team membership**:
/// - `crew`: fixed role table for crew-style runs
/// - `swarm`: spawns sequential worker identifiers

pub mod crew;
pub mod reviewer;
pub mod swarm;
pub mod translator;
pub mod writer;
