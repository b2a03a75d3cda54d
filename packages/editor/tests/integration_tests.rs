//! Integration tests for the editor crate

use anyhow::Result;
use blockcraft_editor::{
    generate_code, Document, MemoryStore, Mutation, ProjectStorage, LOAD_PROJECT_LABEL,
};
use blockcraft_model::{BlockKind, Device, IdGenerator, Properties, ResponsiveKey};
use indexmap::IndexMap;
use chrono::{DateTime, Utc};

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn landing_page() -> Result<Document> {
    let mut doc = Document::with_id_generator("Landing", IdGenerator::from_seed("it"));
    doc.add_block(BlockKind::Header, None, None)?;
    let hero = doc.add_block(BlockKind::Container, None, None)?;
    doc.add_block(BlockKind::Heading, Some(hero.as_str()), None)?;
    doc.add_block(BlockKind::Text, Some(hero.as_str()), None)?;
    let cta = doc.add_block(BlockKind::Button, Some(hero.as_str()), None)?;
    doc.update_block(
        &cta,
        Properties {
            text: Some("Start".to_string()),
            ..Default::default()
        },
    )?;
    Ok(doc)
}

#[test]
fn test_save_load_round_trip() -> Result<()> {
    let mut doc = landing_page()?;
    let mut storage = ProjectStorage::new(MemoryStore::new());
    let saved = doc.save(&mut storage, at("2024-06-01T09:00:00Z"))?;
    assert!(!doc.is_dirty());

    let loaded = storage.load(doc.id())?.expect("project stored");
    assert_eq!(loaded.blocks, doc.blocks());
    assert_eq!(loaded.name, "Landing");
    assert_eq!(loaded.metadata.block_count, Some(5));
    assert_eq!(loaded.updated_at, saved.updated_at);

    let reopened = Document::from_record(loaded);
    assert_eq!(reopened.blocks(), doc.blocks());
    assert_eq!(reopened.id(), doc.id());
    assert!(!reopened.is_dirty());

    let summaries = storage.list()?;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].block_count, 5);
    Ok(())
}

#[test]
fn test_export_import_round_trip() -> Result<()> {
    let mut doc = landing_page()?;
    let hero = doc.blocks()[1].id.clone();
    let cta = doc.blocks()[1].children()[2].id.clone();

    let modifiers: IndexMap<String, bool> = [("secondary", true), ("large", true)]
        .into_iter()
        .map(|(name, on)| (name.to_string(), on))
        .collect();
    doc.update_block(
        &cta,
        Properties {
            modifiers: Some(modifiers),
            ..Default::default()
        },
    )?;
    doc.set_device_value(&hero, ResponsiveKey::Padding, Device::Mobile, "1rem")?;

    let json = doc.export_json(at("2024-06-01T09:00:00Z"))?;

    let mut other = Document::new("Scratch");
    other.import_json(&json)?;

    assert_eq!(other.blocks(), doc.blocks());
    assert_eq!(other.name(), "Landing");
    assert_eq!(other.generate_code(), doc.generate_code());
    assert!(other
        .generate_code()
        .markup
        .contains("<button class=\"button button--secondary button--large\">Start</button>"));
    assert!(other
        .generate_code()
        .stylesheet
        .contains("@media (max-width: 375px) {\n  .container {\n    padding: 1rem;\n  }\n}"));
    Ok(())
}

#[test]
fn test_failed_import_leaves_document_untouched() -> Result<()> {
    let mut doc = landing_page()?;
    let before = doc.blocks().to_vec();
    let version = doc.version();
    let name = doc.name().to_string();

    let bad = r#"{ "name": "Broken", "blocks": [
        { "id": "a", "type": "container", "bemName": "a",
          "properties": { "children": [ { "id": "b", "type": "text" } ] } }
    ] }"#;

    assert!(doc.import_json(bad).is_err());
    assert!(doc.import_json("not json at all").is_err());

    assert_eq!(doc.blocks(), before.as_slice());
    assert_eq!(doc.version(), version);
    assert_eq!(doc.name(), name);
    assert!(doc.can_undo());
    Ok(())
}

#[test]
fn test_undo_after_load_returns_to_blank_tree() -> Result<()> {
    let doc = landing_page()?;
    let json = doc.export_json(Utc::now())?;

    let mut fresh = Document::new("Fresh");
    fresh.import_json(&json)?;
    assert_eq!(fresh.undo_label(), Some(LOAD_PROJECT_LABEL));

    assert!(fresh.undo());
    assert!(fresh.blocks().is_empty());
    assert!(!fresh.can_undo());

    assert!(fresh.redo());
    assert_eq!(fresh.blocks(), doc.blocks());
    Ok(())
}

#[test]
fn test_generated_code_is_deterministic() -> Result<()> {
    let doc = landing_page()?;
    let first = doc.generate_code();
    let second = generate_code(doc.blocks());

    assert_eq!(first, second);
    assert!(first.markup.starts_with("<header class=\"header\">"));
    assert!(first.markup.contains("<button class=\"button\">Start</button>"));
    assert!(first.stylesheet.contains(".header__nav {"));
    Ok(())
}

#[test]
fn test_empty_document_generates_nothing() {
    let doc = Document::new("Empty");
    let code = doc.generate_code();
    assert_eq!(code.markup, "");
    assert_eq!(code.stylesheet, "");
}

#[test]
fn test_mutations_replay_through_json() -> Result<()> {
    let mut source = Document::with_id_generator("Source", IdGenerator::from_seed("src"));
    let mut replica = Document::with_id_generator("Replica", IdGenerator::from_seed("rep"));

    let section = source.add_block(BlockKind::Container, None, None)?;
    let text = source.add_block(BlockKind::Text, Some(section.as_str()), None)?;

    let log = vec![
        Mutation::InsertBlock {
            parent_id: None,
            index: 0,
            block: source.find(&section).cloned().expect("section exists"),
        },
        Mutation::MoveBlock {
            block_id: text.clone(),
            target_parent_id: None,
            index: 0,
        },
        Mutation::UpdateProperties {
            block_id: text.clone(),
            properties: Properties {
                text: Some("Moved".to_string()),
                ..Default::default()
            },
        },
    ];

    for mutation in &log {
        let wire = serde_json::to_string(mutation)?;
        let decoded: Mutation = serde_json::from_str(&wire)?;
        assert_eq!(&decoded, mutation);
        replica.apply(decoded)?;
    }

    let ids: Vec<_> = replica.blocks().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec![text.as_str(), section.as_str()]);
    assert_eq!(
        replica.find(&text).and_then(|b| b.properties.text.as_deref()),
        Some("Moved")
    );
    Ok(())
}
