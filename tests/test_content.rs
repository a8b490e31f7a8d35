//! Integration tests for the built-in content store.

mod common;

use std::collections::HashSet;

use common::*;
use portfolio::{ContentError, SocialKind};

#[test]
fn test_project_ids_are_unique() {
    let store = ContentStore::builtin();
    let ids: HashSet<&str> = store.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), store.projects().len());
    assert!(store.validate().is_ok());
}

#[test]
fn test_lookup_by_id() {
    let store = ContentStore::builtin();
    let project = store.get("llm-finetuning").expect("known project");
    assert_eq!(project.title, "LLM Fine-tuning Pipeline");
    assert!(project.demo.is_none());
    assert!(store.get("missing").is_none());
}

#[test]
fn test_duplicate_ids_fail_validation() {
    static DUPLICATED: [Project; 2] = [make_project("same", "One", None), make_project("same", "Two", None)];
    let store = ContentStore::new(&SCENARIO_PROFILE, &DUPLICATED);

    let err = store.validate().expect_err("duplicate ids must be rejected");
    assert!(matches!(err, ContentError::DuplicateId { id: "same", .. }));
    assert!(err.to_string().contains("same"));
}

#[test]
fn test_profile_social_links() {
    let profile = ContentStore::builtin().profile();
    let kinds: Vec<SocialKind> = profile.social.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SocialKind::GitHub,
            SocialKind::LinkedIn,
            SocialKind::Blog,
            SocialKind::Mail
        ]
    );
    let mail = profile.social.last().expect("mail link");
    assert!(mail.url.starts_with("mailto:"));
}
