//! Project-wide constants.

/// Default chat model when none is specified.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Base URL of the OpenAI-compatible API. `/chat/completions` is appended.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Scripting target name of the task manager.
pub const DEFAULT_APP: &str = "Things3";

/// Log file, relative to the directory the run is launched from (not the
/// binary's own directory) unless overridden with `--log-file`.
pub const DEFAULT_LOG_FILE: &str = "logfile.log";

/// Optional env file read from the launch directory before flags are parsed.
/// Variables already set in the environment take precedence.
pub const DOTENV_FILE: &str = ".env";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "EMOJIFY_MODEL";
pub const ENV_API_URL: &str = "EMOJIFY_API_URL";
pub const ENV_LOG_FILE: &str = "EMOJIFY_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "EMOJIFY_LOG_LEVEL";
pub const ENV_APP: &str = "EMOJIFY_APP";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!DEFAULT_MODEL.is_empty());
        assert!(!DEFAULT_API_URL.is_empty());
        assert!(!DEFAULT_APP.is_empty());
        assert!(!DEFAULT_LOG_FILE.is_empty());
    }

    #[test]
    fn api_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
