mod helpers;

use arcadia_bot::store::KnowledgeStore;
use helpers::{file_url, test_dispatcher};

#[test]
fn add_then_search_then_list() {
    let (dispatcher, _store) = test_dispatcher();

    let reply = dispatcher.dispatch("https://www.rust-lang.org/learn rust,docs,learning");
    assert_eq!(
        reply,
        "Added record \"https://www.rust-lang.org/learn\" successfully under [rust, docs, learning]"
    );

    let summary = dispatcher.dispatch("docs");
    assert!(summary.contains("https://www.rust-lang.org/learn [rust, docs, learning]"));

    let listing = dispatcher.dispatch("tags");
    assert!(listing.starts_with("*Arcadia Tags Dictionary*"));
    assert!(listing.contains("rust | https://www.rust-lang.org/learn"));
    assert!(listing.contains("learning | https://www.rust-lang.org/learn"));
}

#[test]
fn legacy_tags_first_order_files_the_url() {
    let (dispatcher, store) = test_dispatcher();

    let reply = dispatcher.dispatch("news,daily https://news.example.com");
    assert!(reply.starts_with("Added record \"https://news.example.com\""));

    assert_eq!(store.get_subjects().unwrap(), "daily,news");
}

#[test]
fn filtered_listing_only_shows_substring_matches() {
    let (dispatcher, store) = test_dispatcher();
    file_url(&store, "https://a.example", "plant");
    file_url(&store, "https://b.example", "animal");
    file_url(&store, "https://c.example", "houseplant,planet");

    let reply = dispatcher.dispatch("tags plant");
    assert_eq!(
        reply,
        "*'plant' is in the following tags:*\n\n     [houseplant, plant]"
    );
}

#[test]
fn duplicate_add_reports_original_tags() {
    let (dispatcher, store) = test_dispatcher();
    file_url(&store, "https://dup.example", "first,home");

    let reply = dispatcher.dispatch("https://dup.example second");
    assert_eq!(
        reply,
        "Failed to add duplicate record \"https://dup.example\"\nRecord already under tags [first, home]"
    );
}

#[test]
fn empty_tag_add_is_refused() {
    let (dispatcher, store) = test_dispatcher();

    let reply = dispatcher.dispatch("https://empty.example a,,b");
    assert_eq!(
        reply,
        "Failed to add record \"https://empty.example\"\nLooks like empty string in tags: ['a', '', 'b']"
    );

    assert_eq!(store.get_subjects().unwrap(), "");
}

#[test]
fn unacceptable_url_names_the_input() {
    let (dispatcher, store) = test_dispatcher();

    let reply = dispatcher.dispatch("www.example.com web");
    assert!(reply.contains("Looks like \"www.example.com\" is not an acceptable URL."));
    assert!(reply.ends_with(&dispatcher.settings().help_text));

    assert!(store.get_subjects_dictionary().unwrap().is_empty());
}

#[test]
fn search_for_unknown_tag_is_answered_by_store() {
    let (dispatcher, _store) = test_dispatcher();
    assert_eq!(
        dispatcher.dispatch("nothing"),
        "*Nothing in Arcadia under 'nothing'*"
    );
}
