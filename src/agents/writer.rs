/// Writer agent - drafts text for a task.
pub fn write_text(prompt: &str) -> String {
    // Stub standing in for a real drafting agent.
    format!("[Writer] Generated text for: {prompt}")
}
