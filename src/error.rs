use anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Internal,
}

impl ErrorCategory {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCategory::Config => "CONFIG",
            ErrorCategory::Input => "INPUT",
            ErrorCategory::Internal => "INTERNAL",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ErrorCategory::Config => {
                "Check --config/--profile and the profile file's field names."
            }
            ErrorCategory::Input => "Run multiagent-cli --help and correct command arguments.",
            ErrorCategory::Internal => {
                "Retry with --log-filter debug. If it persists, capture logs and open an issue."
            }
        }
    }
}

/// The routing core never fails, so the taxonomy only covers the CLI shell:
/// configuration loading and argument handling.
pub fn categorize_error(err: &anyhow::Error) -> ErrorCategory {
    let msg = format!("{err:#}").to_ascii_lowercase();

    if msg.contains("invalid value") || msg.contains("unknown argument") {
        return ErrorCategory::Input;
    }

    if msg.contains("profile") || msg.contains("config") {
        return ErrorCategory::Config;
    }

    ErrorCategory::Internal
}

pub fn format_cli_error(err: &anyhow::Error) -> String {
    let category = categorize_error(err);
    format!("[{}] {}\nHint: {}", category.code(), err, category.hint())
}
