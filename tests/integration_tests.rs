//! Tests against the live kanka.io API.
//!
//! Run with: KANKA_TOKEN=... KANKA_CAMPAIGN=... cargo test --test integration_tests -- --ignored

use kanka::resources::{SimpleAttribute, SimpleCharacter};
use kanka::{Client, KankaError};

fn live_client() -> Client {
    let token = std::env::var("KANKA_TOKEN").expect("KANKA_TOKEN not set");
    Client::new(token).expect("failed to create client")
}

fn campaign_id() -> i64 {
    std::env::var("KANKA_CAMPAIGN")
        .expect("KANKA_CAMPAIGN not set")
        .parse()
        .expect("KANKA_CAMPAIGN is not a number")
}

#[test]
#[ignore]
fn test_profile() {
    let client = live_client();

    let profile = client.profile.get().expect("failed to get profile");
    assert!(profile.id > 0);

    println!("Profile test passed: {} (#{})", profile.name, profile.id);
}

#[test]
#[ignore]
fn test_campaigns() {
    let client = live_client();

    let campaigns = client.campaigns.index(None).expect("failed to index campaigns");
    assert!(campaigns.iter().any(|c| c.id == campaign_id()));
}

#[test]
#[ignore]
fn test_character_lifecycle() {
    let client = live_client();
    let camp = campaign_id();

    let created = client
        .characters
        .create(
            camp,
            &SimpleCharacter {
                name: "kanka-rs test character".to_string(),
                title: Some("Tester".to_string()),
                is_private: true,
                ..Default::default()
            },
        )
        .expect("failed to create character");

    let attr = client
        .attributes
        .create(
            camp,
            created.meta.entity_id,
            &SimpleAttribute {
                name: "Race".to_string(),
                value: Some("elf".to_string()),
                ..Default::default()
            },
        )
        .expect("failed to create attribute");
    assert_eq!(attr.simple.value.as_deref(), Some("elf"));

    let mut update = created.simple.clone();
    update.title = Some("Veteran tester".to_string());
    let updated = client
        .characters
        .update(camp, created.meta.id, &update)
        .expect("failed to update character");
    assert_eq!(updated.simple.title.as_deref(), Some("Veteran tester"));

    let changed = client
        .characters
        .index(camp, Some(&created.meta.audit.created_at.unwrap_or_else(kanka::Time::now)))
        .expect("failed to index changed characters");
    assert!(changed.iter().any(|c| c.meta.id == created.meta.id));

    client
        .characters
        .delete(camp, created.meta.id)
        .expect("failed to delete character");

    // Deleting again must report the missing resource
    let err = client.characters.delete(camp, created.meta.id).unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[test]
#[ignore]
fn test_bad_token() {
    let client = Client::new("not-a-token").unwrap();

    match client.profile.get() {
        Err(err) => match err.root() {
            KankaError::Server(server) => assert_eq!(server.code(), 401),
            other => panic!("expected KankaError::Server, got {:?}", other),
        },
        Ok(profile) => panic!("expected error, got {:?}", profile),
    }
}
