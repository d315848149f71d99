//! Chat text the bot sends back.

use std::collections::BTreeMap;

use crate::store::types::StoredRecord;

/// Prefix that marks a chat message as an Arcadia command.
pub const DEFAULT_COMMAND_PREFIX: &str = "/arc";

const INDENT: &str = "     ";

/// Prefix and help text, fixed for the lifetime of a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSettings {
    pub prefix: String,
    pub help_text: String,
}

impl CommandSettings {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let help_text = help_text(&prefix);
        Self { prefix, help_text }
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_PREFIX)
    }
}

/// Usage text for `prefix`.
pub fn help_text(prefix: &str) -> String {
    format!(
        "  🤔\n\nDoesn't look like you gave me a good command ...\n\n\
         Commands are as follows:\n\
         {INDENT}{prefix} {{tag}} : gives a summary of the records filed under the tag\n\
         {INDENT}{prefix} tags : lists every tag with its records\n\
         {INDENT}{prefix} tags {{text}} : lists the tags containing the text\n\
         {INDENT}{prefix} {{url}} {{comma_separated_tags}} : adds the url to arcadia, \
         tags are comma separated with no spaces\n\n"
    )
}

/// `a, b, c` with no trailing separator.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full tag index. Tags with no records are left out.
pub fn tag_dictionary(dictionary: &BTreeMap<String, Vec<String>>) -> String {
    let lines: Vec<String> = dictionary
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(tag, records)| format!("{tag} | {}", records.join(", ")))
        .collect();
    format!("*Arcadia Tags Dictionary*\n\n{}", lines.join("\n\n"))
}

/// Tags from the comma-joined `subjects` that contain `filter`.
pub fn matching_tags(filter: &str, subjects: &str) -> String {
    let matches: Vec<&str> = subjects
        .split(',')
        .filter(|tag| !tag.is_empty() && tag.contains(filter))
        .collect();
    format!(
        "*'{filter}' is in the following tags:*\n\n{INDENT}[{}]",
        join_tags(&matches)
    )
}

pub fn record_added(content: &str, tags: &[String]) -> String {
    format!(
        "Added record \"{content}\" successfully under [{}]",
        join_tags(tags)
    )
}

/// Duplicate rejection naming where the content already lives.
pub fn record_duplicate(content: &str, existing: Option<&StoredRecord>) -> String {
    let existing_tags = existing.map(|r| join_tags(&r.tags)).unwrap_or_default();
    format!(
        "Failed to add duplicate record \"{content}\"\nRecord already under tags [{existing_tags}]"
    )
}

pub fn record_empty_tag(content: &str, offending: &[String]) -> String {
    let quoted: Vec<String> = offending.iter().map(|t| format!("'{t}'")).collect();
    format!(
        "Failed to add record \"{content}\"\nLooks like empty string in tags: [{}]",
        quoted.join(", ")
    )
}

pub fn record_failed(content: &str, help: &str) -> String {
    format!("Failed to add record \"{content}\" {help}")
}

pub fn unacceptable_url(candidate: &str, help: &str) -> String {
    format!(
        "\nLooks like \"{candidate}\" is not an acceptable URL.\n\
         Please make sure you give a complete URL.\n\n{help}"
    )
}

pub fn store_unavailable(help: &str) -> String {
    format!("Arcadia could not complete that command right now.\n\n{help}")
}
