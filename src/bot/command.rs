//! Command grammar.
//!
//! | tokens | shape                  | command                  |
//! |--------|------------------------|--------------------------|
//! | 0      |                        | [`ParsedCommand::Help`]  |
//! | 1      | `tags`                 | `ListTags(None)`         |
//! | 1      | anything else          | `SearchByTag`            |
//! | 2      | `tags <filter>`        | `ListTags(Some(filter))` |
//! | 2      | `<url> <comma-tags>`   | `AddRecord`              |
//! | 3+     |                        | `Invalid`                |
//!
//! `tags` in first position always means a listing; it cannot be searched for.

/// Keyword that turns a command into a tag listing.
pub const TAGS_KEYWORD: &str = "tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Nothing after the prefix.
    Help,
    SearchByTag(String),
    ListTags(Option<String>),
    AddRecord { url: String, tags: Vec<String> },
    Invalid,
}

impl ParsedCommand {
    /// Parse a command body (prefix already removed).
    pub fn parse(body: &str) -> Self {
        let tokens: Vec<&str> = body.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Self::Help,
            [TAGS_KEYWORD] => Self::ListTags(None),
            [term] => Self::SearchByTag((*term).to_string()),
            [TAGS_KEYWORD, filter] => Self::ListTags(Some((*filter).to_string())),
            [first, second] => {
                // Older clients send `<tags> <url>`; accept it when only the second token is a URL.
                let (url, raw_tags) = if !is_acceptable_url(first) && is_acceptable_url(second) {
                    (second, first)
                } else {
                    (first, second)
                };
                Self::AddRecord {
                    url: (*url).to_string(),
                    tags: split_tags(raw_tags),
                }
            }
            _ => Self::Invalid,
        }
    }
}

/// Split a comma-separated tag list. No trimming or dedup; the store decides what is acceptable.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}

/// An absolute URL with at least a scheme and a host.
pub fn is_acceptable_url(candidate: &str) -> bool {
    match reqwest::Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
