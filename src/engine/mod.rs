pub mod pipeline;
pub mod policy;

use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error, warn};

use crate::completer::Completer;
use crate::error::ServiceError;
use crate::prompts::emoji::build_emoji_prompt;

static PICTOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}").expect("Extended_Pictographic is a valid class")
});

/// Pictographs plus what glues onto them: ZWJ, keycap mark, variation
/// selectors, regional indicators, skin tones and tag characters. Plain
/// digits, `#` and `*` stay.
static EMOJI_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\p{Extended_Pictographic}",
        r"\x{200D}\x{20E3}\x{FE0E}\x{FE0F}",
        r"\x{1F1E6}-\x{1F1FF}\x{1F3FB}-\x{1F3FF}\x{E0020}-\x{E007F}]",
    ))
    .expect("emoji part class is valid")
});

/// `text` with every emoji character removed.
pub fn strip_emoji(text: &str) -> String {
    EMOJI_PARTS.replace_all(text, "").into_owned()
}

/// True if any character in `text` has the Unicode `Extended_Pictographic`
/// property.
pub fn contains_pictographic(text: &str) -> bool {
    PICTOGRAPHIC.is_match(text)
}

/// Outcome of evaluating one title.
#[derive(Debug)]
pub enum RewriteDecision {
    /// The title already carries an emoji. No service call was made.
    Unchanged,
    /// The trimmed completion, exactly as the service returned it.
    Rewritten(String),
    /// The service call failed; the task is skipped this run.
    Failed(ServiceError),
}

/// Decides whether a title needs emojis and, if so, asks the completer for
/// a rewrite.
pub struct DecisionEngine {
    completer: Arc<dyn Completer>,
}

impl DecisionEngine {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }

    pub async fn decide(&self, title: &str) -> RewriteDecision {
        if contains_pictographic(title) {
            debug!(title, "task already has emoji");
            return RewriteDecision::Unchanged;
        }

        let prompt = build_emoji_prompt(title);
        let reply = match self.completer.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(title, error = %e, "text-generation request failed");
                return RewriteDecision::Failed(e);
            }
        };

        let rewritten = reply.trim();
        if rewritten.is_empty() {
            error!(title, "text-generation service returned an empty title");
            return RewriteDecision::Failed(ServiceError::EmptyCompletion);
        }

        for warning in policy::check_rewrite(title, rewritten) {
            warn!(title, rewritten, %warning, "rewrite does not follow the emoji policy");
        }

        RewriteDecision::Rewritten(rewritten.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completer::mock::MockCompleter;

    #[test]
    fn detects_common_emoji() {
        assert!(contains_pictographic("Buy milk 🥛"));
        assert!(contains_pictographic("🍕"));
        assert!(contains_pictographic("Sun ☀️ today"));
    }

    #[test]
    fn detects_emoji_anywhere() {
        assert!(contains_pictographic("📅 meeting"));
        assert!(contains_pictographic("meet📅ing"));
    }

    #[test]
    fn plain_text_has_no_pictographic() {
        assert!(!contains_pictographic("Buy milk"));
        assert!(!contains_pictographic(""));
        assert!(!contains_pictographic("Réserver l'hôtel à 10h #travail 100%"));
        assert!(!contains_pictographic("日本語のタスク"));
    }

    #[test]
    fn strip_emoji_removes_pictographs_and_modifiers() {
        assert_eq!(strip_emoji("Pizza🍕"), "Pizza");
        assert_eq!(strip_emoji("Sun☀️"), "Sun");
        assert_eq!(strip_emoji("👍🏽ok"), "ok");
        assert_eq!(strip_emoji("3️⃣"), "3");
        assert_eq!(strip_emoji("Call #1"), "Call #1");
        assert_eq!(strip_emoji("Trip🇫🇷"), "Trip");
    }

    #[test]
    fn digits_and_keycap_base_are_not_pictographic() {
        assert!(!contains_pictographic("Call 555-0199 #1 *"));
    }

    #[tokio::test]
    async fn pictographic_title_skips_service() {
        let completer = Arc::new(MockCompleter::replying(&["should not be used"]));
        let engine = DecisionEngine::new(completer.clone());

        let decision = engine.decide("Buy milk 🥛").await;

        assert!(matches!(decision, RewriteDecision::Unchanged));
        assert_eq!(completer.calls(), 0);
    }

    #[tokio::test]
    async fn plain_title_calls_service_once_and_trims() {
        let completer = Arc::new(MockCompleter::replying(&["  Buy milk 🥛 \n"]));
        let engine = DecisionEngine::new(completer.clone());

        let decision = engine.decide("Buy milk").await;

        assert_eq!(completer.calls(), 1);
        assert!(completer.prompts()[0].contains("<BEGIN>Buy milk</END>"));
        match decision {
            RewriteDecision::Rewritten(title) => assert_eq!(title, "Buy milk 🥛"),
            other => panic!("expected Rewritten, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rewrite_is_not_otherwise_transformed() {
        // Violates the first-word rule; still returned as-is.
        let completer = Arc::new(MockCompleter::replying(&["🛒 milk"]));
        let engine = DecisionEngine::new(completer);

        match engine.decide("Buy milk").await {
            RewriteDecision::Rewritten(title) => assert_eq!(title, "🛒 milk"),
            other => panic!("expected Rewritten, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn service_error_is_failed() {
        let completer = Arc::new(MockCompleter::new(vec![Err("quota exceeded".to_string())]));
        let engine = DecisionEngine::new(completer.clone());

        let decision = engine.decide("Buy milk").await;

        assert_eq!(completer.calls(), 1);
        assert!(matches!(decision, RewriteDecision::Failed(ref e) if e.to_string() == "quota exceeded"));
    }

    #[tokio::test]
    async fn blank_reply_is_failed() {
        let completer = Arc::new(MockCompleter::replying(&["   \n"]));
        let engine = DecisionEngine::new(completer);

        let decision = engine.decide("Buy milk").await;

        assert!(matches!(
            decision,
            RewriteDecision::Failed(ServiceError::EmptyCompletion)
        ));
    }
}
