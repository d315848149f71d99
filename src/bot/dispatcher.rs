//! Executes parsed commands against the knowledge store.
//!
//! Every command resolves to exactly one reply. Store faults are logged and turned
//! into a generic reply so a bad command never takes the run loop down.

use std::sync::Arc;

use crate::bot::command::{is_acceptable_url, ParsedCommand};
use crate::bot::messages::{self, CommandSettings};
use crate::store::types::{AddReason, ItemPackage};
use crate::store::KnowledgeStore;

/// Stateless command executor. Cheap to clone.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn KnowledgeStore>,
    settings: Arc<CommandSettings>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn KnowledgeStore>, settings: CommandSettings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }

    /// Parse a command body and produce the reply.
    pub fn dispatch(&self, body: &str) -> String {
        let command = ParsedCommand::parse(body);
        tracing::info!(command = ?command, "dispatching command");
        self.execute(command)
    }

    pub fn execute(&self, command: ParsedCommand) -> String {
        match command {
            ParsedCommand::Help | ParsedCommand::Invalid => self.settings.help_text.clone(),
            ParsedCommand::SearchByTag(term) => self.search(&term),
            ParsedCommand::ListTags(None) => self.list_all_tags(),
            ParsedCommand::ListTags(Some(filter)) => self.list_matching_tags(&filter),
            ParsedCommand::AddRecord { url, tags } => self.add_record(url, tags),
        }
    }

    fn search(&self, term: &str) -> String {
        match self.store.get_summary(term) {
            Ok(summary) => summary,
            Err(e) => self.store_failure("get_summary", e),
        }
    }

    fn list_all_tags(&self) -> String {
        match self.store.get_subjects_dictionary() {
            Ok(dictionary) => messages::tag_dictionary(&dictionary),
            Err(e) => self.store_failure("get_subjects_dictionary", e),
        }
    }

    fn list_matching_tags(&self, filter: &str) -> String {
        match self.store.get_subjects() {
            Ok(subjects) => messages::matching_tags(filter, &subjects),
            Err(e) => self.store_failure("get_subjects", e),
        }
    }

    fn add_record(&self, url: String, tags: Vec<String>) -> String {
        let help = &self.settings.help_text;
        if !is_acceptable_url(&url) {
            tracing::info!(candidate = %url, "rejected add: not a URL");
            return messages::unacceptable_url(&url, help);
        }

        let package = ItemPackage::url(url, tags);
        let result = match self.store.add_item(&package) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, content = %package.content, "add_item failed");
                return messages::record_failed(&package.content, help);
            }
        };

        match (result.added, result.reason) {
            (true, _) => messages::record_added(&package.content, &package.tags),
            (false, AddReason::ItemDuplicate) => messages::record_duplicate(
                &package.content,
                result.conflicting_data.as_ref().and_then(|data| data.first()),
            ),
            (false, AddReason::EmptyStringTag) => messages::record_empty_tag(
                &package.content,
                result.offending_tags.as_deref().unwrap_or(&package.tags),
            ),
            (false, AddReason::Success | AddReason::Other) => {
                messages::record_failed(&package.content, help)
            }
        }
    }

    fn store_failure(&self, operation: &str, error: anyhow::Error) -> String {
        tracing::error!(operation, error = %error, "store call failed");
        messages::store_unavailable(&self.settings.help_text)
    }
}
