//! Extraction of structured log entries from authored agent-trace scripts.
//!
//! The canned orchestrator keeps its reasoning traces as multi-line text
//! templates (one `Agent:` line per reasoning step). This module converts
//! that text into [`AgentLog`] values once, at call time; nothing outside
//! this crate ever sees the raw template form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::log::AgentLog;

/// Placeholder agent name for lines where the name group fails to match.
pub const FALLBACK_AGENT: &str = "System Orchestrator";
/// Placeholder action text.
pub const FALLBACK_ACTION: &str = "Processing";
/// Placeholder observation text.
pub const FALLBACK_OBSERVATION: &str = "Completed";

static AGENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Agent: (.*?) -").expect("agent pattern"));
static ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Action: (.*?)\]").expect("action pattern"));
static OBSERVATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Observation: (.*?)\]").expect("observation pattern"));

/// Parse an authored trace script into structured entries.
///
/// Only lines that (after trimming) start with `Agent:` contribute an entry.
/// A line with a malformed bracket group falls back to the generic
/// placeholders instead of failing the batch. Every entry is stamped with
/// the wall-clock time at extraction.
pub fn parse_trace(script: &str) -> Vec<AgentLog> {
    script
        .lines()
        .filter(|line| line.trim_start().starts_with("Agent:"))
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> AgentLog {
    let agent = capture(&AGENT_RE, line).unwrap_or(FALLBACK_AGENT);
    let action = capture(&ACTION_RE, line).unwrap_or(FALLBACK_ACTION);
    let observation = capture(&OBSERVATION_RE, line).unwrap_or(FALLBACK_OBSERVATION);
    AgentLog::now(agent, action, observation)
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_line_yields_all_three_fields() {
        let logs = parse_trace(
            "Agent: Market Scout - [Action: Scanning price bulletins...] -> [Observation: Prices trending up].",
        );
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].agent, "Market Scout");
        assert_eq!(logs[0].action, "Scanning price bulletins...");
        assert_eq!(logs[0].observation, "Prices trending up");
        assert!(!logs[0].timestamp.is_empty());
    }

    #[test]
    fn multi_line_script_yields_one_entry_per_agent_line() {
        let script = "\n\
            Agent: A - [Action: first] -> [Observation: one].\n\
            not an agent line\n\
            Agent: B - [Action: second] -> [Observation: two].\n";
        let logs = parse_trace(script);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].agent, "A");
        assert_eq!(logs[1].agent, "B");
    }

    #[test]
    fn missing_bracket_groups_fall_back_to_placeholders() {
        let logs = parse_trace("Agent: broken line without groups");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].agent, FALLBACK_AGENT);
        assert_eq!(logs[0].action, FALLBACK_ACTION);
        assert_eq!(logs[0].observation, FALLBACK_OBSERVATION);
    }

    #[test]
    fn partially_malformed_line_keeps_the_groups_that_match() {
        let logs = parse_trace("Agent: Auditor - no action here -> [Observation: still seen].");
        assert_eq!(logs[0].agent, "Auditor");
        assert_eq!(logs[0].action, FALLBACK_ACTION);
        assert_eq!(logs[0].observation, "still seen");
    }

    #[test]
    fn malformed_lines_never_fail_the_batch() {
        let script = "\
            Agent: Good - [Action: ok] -> [Observation: ok].\n\
            Agent: garbage\n\
            Agent: Also Good - [Action: fine] -> [Observation: fine].\n";
        let logs = parse_trace(script);
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[1].agent, FALLBACK_AGENT);
    }

    #[test]
    fn indented_agent_lines_are_still_extracted() {
        let logs = parse_trace("   Agent: Indented - [Action: x] -> [Observation: y].");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].agent, "Indented");
    }

    #[test]
    fn non_agent_text_is_ignored() {
        assert!(parse_trace("just narration\nAnd more\n").is_empty());
    }
}
