const INTRO: &str = "Here is a task:";
const CONTEXT: &str = "I would like you to add emojis to make it more fun and engaging. The text is written in either French or English.";
const RULES_HEADER: &str = "Improve the task text by following these rules:";

struct Rule {
    text: &'static str,
    examples: &'static [&'static str],
    counter_examples: &'static [&'static str],
}

const RULES: &[Rule] = &[
    Rule {
        text: "Replace words with a matching emoji only when the meaning is obvious.",
        examples: &["Pizza -> 🍕", "Sun -> ☀️", "Calendar -> 📅"],
        counter_examples: &["Meeting -> 📅", "Report -> ✍️"],
    },
    Rule {
        text: "When in doubt, keep the word and put the emoji next to it.",
        examples: &[
            "Add meeting for next week -> Add meeting 📅 for next week",
            "Write a report about the meeting -> Write a report ✍️ about the meeting 📅",
        ],
        counter_examples: &[
            "Write a report about the meeting -> Write a ✍️ about the 📅",
            "Add meeting for next week -> Add 📅 for next week",
        ],
    },
    Rule {
        text: "Never replace the first word of the task.",
        examples: &[
            "Write a report about the meeting -> Write a report ✍️ about the meeting 📅",
            "Add meeting for next week -> Add meeting 📅 for next week",
        ],
        counter_examples: &[
            "Write a report about the meeting -> ✍️ a report about the meeting 📅",
            "Add meeting for next week -> 📅 meeting for next week",
        ],
    },
    Rule {
        text: "On top of the replacements, add ONE extra emoji at EITHER the beginning or the end of the task to complement it. Never at both ends, never more than one.",
        examples: &[
            "Write a report about the meeting -> Write a report about the meeting 📅",
            "Write a report about the meeting -> ✍️ Write a report about the meeting",
        ],
        counter_examples: &[
            "Write a report about the meeting -> ✍️ Write a report about the meeting 📅",
        ],
    },
    Rule {
        text: "Respond with the updated task text only, without any context or explanation.",
        examples: &[],
        counter_examples: &[],
    },
];

fn render_rule(index: usize, rule: &Rule) -> String {
    let mut out = format!("{}. {}\n", index + 1, rule.text);
    if !rule.examples.is_empty() {
        out.push_str("Examples:\n");
        for example in rule.examples {
            out.push_str(&format!("{}\n", example));
        }
    }
    if !rule.counter_examples.is_empty() {
        out.push_str("Counter examples (wrong):\n");
        for example in rule.counter_examples {
            out.push_str(&format!("{}\n", example));
        }
    }
    out
}

/// Wrap a title in the delimiters the model is told to look for.
fn delimit(title: &str) -> String {
    format!("<BEGIN>{}</END>", title)
}

/// Build the rewrite instruction for one task title. The title is embedded
/// verbatim at the top and again at the end.
pub fn build_emoji_prompt(title: &str) -> String {
    let rules = RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| render_rule(i, rule))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{intro}{task}\n\n# Context:\n{context}\n\n# {rules_header}\n{rules}\nNow apply these rules to the task: {task}",
        intro = INTRO,
        task = delimit(title),
        context = CONTEXT,
        rules_header = RULES_HEADER,
        rules = rules,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_title_twice() {
        let prompt = build_emoji_prompt("Buy milk");
        assert_eq!(prompt.matches("<BEGIN>Buy milk</END>").count(), 2);
    }

    #[test]
    fn prompt_ends_with_the_task() {
        let prompt = build_emoji_prompt("Call mom");
        assert!(prompt.ends_with("<BEGIN>Call mom</END>"));
    }

    #[test]
    fn prompt_keeps_title_verbatim() {
        let title = "  Réserver l'hôtel {x} ";
        let prompt = build_emoji_prompt(title);
        assert!(prompt.contains(&format!("<BEGIN>{}</END>", title)));
    }

    #[test]
    fn prompt_includes_every_rule_numbered() {
        let prompt = build_emoji_prompt("x");
        for (i, rule) in RULES.iter().enumerate() {
            assert!(prompt.contains(&format!("{}. {}", i + 1, rule.text)));
        }
    }

    #[test]
    fn prompt_protects_first_word() {
        let prompt = build_emoji_prompt("x");
        assert!(prompt.contains("Never replace the first word"));
    }

    #[test]
    fn rule_without_examples_has_no_example_headers() {
        let rendered = render_rule(0, RULES.last().unwrap());
        assert!(!rendered.contains("Examples:"));
        assert!(!rendered.contains("Counter examples"));
    }
}
