/// Reviewer agent - "improves" a draft.
///
/// Every occurrence of "Generated" becomes "Refined"; the whole draft is
/// then tagged with the reviewer marker.
pub fn review_text(text: &str) -> String {
    let improved = text.replace("Generated", "Refined");
    format!("[Reviewer] {improved}")
}
