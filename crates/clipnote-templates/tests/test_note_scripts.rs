//! End-to-end tests for the note-creation entry point.

use chrono::NaiveDate;
use std::sync::Arc;
use tempfile::TempDir;

use clipnote_core::ScriptConfig;
use clipnote_host::{FixedCalendar, FsVault, NoteVault, ScriptedInteraction, parse_document};
use clipnote_templates::{HookQueue, NoteScripts};

const TEMPLATE: &str = "templates/new-note.md";
const DIALOG: &str = "Note title";

async fn setup_vault() -> (TempDir, Arc<FsVault>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    tokio::fs::create_dir_all(temp_dir.path().join("templates"))
        .await
        .expect("Failed to create templates dir");
    tokio::fs::write(temp_dir.path().join(TEMPLATE), "")
        .await
        .expect("Failed to write template");

    let vault = FsVault::new(temp_dir.path()).expect("Failed to open vault");
    (temp_dir, Arc::new(vault))
}

fn scripts_with(
    vault: Arc<FsVault>,
    interaction: ScriptedInteraction,
) -> NoteScripts<FsVault, ScriptedInteraction, FixedCalendar> {
    let calendar = FixedCalendar::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
    NoteScripts::new(
        vault,
        Arc::new(interaction),
        Arc::new(calendar),
        ScriptConfig::default(),
    )
}

#[tokio::test]
async fn test_plain_single_line_input_takes_the_fast_path() {
    let (temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", "Groceries"),
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "Groceries");
    assert_eq!(seed.alias, None);
    assert_eq!(seed.text, "");
    assert!(hooks.is_empty().await);

    // The note moved under the date folder; the template slot is free again.
    assert!(temp_dir.path().join("2024/03/07/Groceries.md").exists());
    assert!(!temp_dir.path().join(TEMPLATE).exists());
}

#[tokio::test]
async fn test_dirty_title_defers_the_alias_into_front_matter() {
    let (temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", "proj: alpha/beta"),
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "proj - alpha_beta");
    assert_eq!(seed.alias, Some("proj: alpha/beta".to_string()));
    assert_eq!(seed.text, "");
    assert_eq!(hooks.len().await, 1);

    // Front matter is untouched until the hooks run.
    let note = temp_dir.path().join("2024/03/07/proj - alpha_beta.md");
    assert!(note.exists());
    let before = parse_document(&tokio::fs::read_to_string(&note).await.unwrap()).unwrap();
    assert!(before.front_matter.get("alias").is_none());

    hooks.run_all().await;

    let after = parse_document(&tokio::fs::read_to_string(&note).await.unwrap()).unwrap();
    assert_eq!(
        after.front_matter.get("alias"),
        Some(&serde_yaml::Value::String("proj: alpha/beta".to_string()))
    );
    assert!(hooks.is_empty().await);
}

#[tokio::test]
async fn test_multiline_input_becomes_title_and_body() {
    let (_temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", "Meeting notes\nline two\nline three"),
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "Meeting notes");
    assert_eq!(seed.alias, None);
    assert_eq!(seed.text, "line two\nline three");
    assert!(hooks.is_empty().await);
}

#[tokio::test]
async fn test_pasted_markdown_link_contributes_title_and_body() {
    let (temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", "[Age of Empires](file:///C:/Games/AoE)"),
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "Age of Empires");
    assert_eq!(seed.alias, None);
    assert_eq!(seed.text, "file:///C:/Games/AoE");
    assert!(hooks.is_empty().await);
    assert!(temp_dir.path().join("2024/03/07/Age of Empires.md").exists());
}

#[tokio::test]
async fn test_cancelled_prompt_creates_nothing() {
    let (temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(Arc::clone(&vault), ScriptedInteraction::cancelling(""));
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await;

    assert_eq!(seed, None);
    assert!(hooks.is_empty().await);

    // No move happened and no date folder appeared.
    assert!(vault.exists(TEMPLATE).await.unwrap());
    assert!(!temp_dir.path().join("2024").exists());
}

#[tokio::test]
async fn test_colliding_titles_walk_to_a_free_suffix() {
    let (temp_dir, vault) = setup_vault().await;
    tokio::fs::create_dir_all(temp_dir.path().join("2024/03/07"))
        .await
        .unwrap();
    tokio::fs::write(temp_dir.path().join("2024/03/07/Groceries.md"), "old")
        .await
        .unwrap();
    tokio::fs::write(temp_dir.path().join("2024/03/07/Groceries (1).md"), "old")
        .await
        .unwrap();

    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", "Groceries"),
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    // The seed keeps the plain title; only the file lands under a suffix.
    assert_eq!(seed.title, "Groceries");
    assert!(temp_dir.path().join("2024/03/07/Groceries (2).md").exists());
    assert!(temp_dir.path().join("2024/03/07/Groceries.md").exists());
}

#[tokio::test]
async fn test_title_longer_than_the_cap_is_truncated_with_full_alias() {
    let (_temp_dir, vault) = setup_vault().await;
    let long = "x".repeat(80);
    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", long.clone()),
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "x".repeat(60));
    assert_eq!(seed.alias, Some(long));
    assert_eq!(seed.text, "");
    assert_eq!(hooks.len().await, 1);
}

#[tokio::test]
async fn test_empty_input_becomes_the_placeholder_title() {
    let (temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(Arc::clone(&vault), ScriptedInteraction::answering("", ""));
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "-");
    assert_eq!(seed.alias, Some(String::new()));
    assert_eq!(seed.text, "");
    assert!(temp_dir.path().join("2024/03/07/-.md").exists());
}

#[tokio::test]
async fn test_missing_template_yields_a_failure_payload() {
    let (_temp_dir, vault) = setup_vault().await;
    let scripts = scripts_with(
        Arc::clone(&vault),
        ScriptedInteraction::answering("", "anything"),
    );
    let hooks = HookQueue::new();

    let seed = scripts
        .create_note(&hooks, "templates/absent.md", DIALOG)
        .await
        .unwrap();

    assert!(seed.is_failure());
    assert!(seed.text.contains("creating note from prompt input"));
    assert!(seed.text.contains("File not found"));
    assert!(hooks.is_empty().await);
}

#[tokio::test]
async fn test_custom_config_drives_folder_cap_and_alias_key() {
    let (temp_dir, vault) = setup_vault().await;
    let calendar = FixedCalendar::new(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
    let config = ScriptConfig::builder()
        .max_title_chars(5)
        .date_folder_pattern("inbox/YYYY/")
        .alias_key("aliases")
        .build()
        .unwrap();
    let scripts = NoteScripts::new(
        Arc::clone(&vault),
        Arc::new(ScriptedInteraction::answering("", "longer than five")),
        Arc::new(calendar),
        config,
    );
    let hooks = HookQueue::new();

    let seed = scripts.create_note(&hooks, TEMPLATE, DIALOG).await.unwrap();

    assert_eq!(seed.title, "longe");
    assert_eq!(seed.alias, Some("longer than five".to_string()));

    let note = temp_dir.path().join("inbox/2025/longe.md");
    assert!(note.exists());

    hooks.run_all().await;
    let doc = parse_document(&tokio::fs::read_to_string(&note).await.unwrap()).unwrap();
    assert!(doc.front_matter.get("aliases").is_some());
    assert!(doc.front_matter.get("alias").is_none());
}
