// 插件端到端测试：临时笔记库 + 临时设置文件
use std::fs;
use std::path::Path;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use random_note::config::AppConfig;
use random_note::plugin::RandomNotePlugin;
use random_note::settings::{SettingKey, SettingsStore};
use random_note::vault::now_seconds;
use random_note::workspace::{Outcome, RecordingOpener, NOTICE_GENERATED, NOTICE_NOTHING_FOUND};

const DAY: i64 = 86_400;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "# note\n").unwrap();
}

fn setup() -> (TempDir, AppConfig) {
    let dir = tempfile::tempdir().unwrap();
    let vault = dir.path().join("vault");
    touch(&vault, "inbox.md");
    touch(&vault, "Project/Errands/todo.md");
    touch(&vault, "Project/Errands/groceries.md");
    touch(&vault, "Archive/2020.md");
    touch(&vault, "Project/attachment.pdf");
    touch(&vault, ".obsidian/app.md");

    let mut config = AppConfig::default();
    config.paths.vault_path = vault.to_string_lossy().to_string();
    config.paths.data_path = dir.path().join("data.json").to_string_lossy().to_string();
    (dir, config)
}

fn started(config: AppConfig, recorder: &Arc<RecordingOpener>) -> RandomNotePlugin {
    let mut plugin = RandomNotePlugin::new(config, Box::new(recorder.clone()));
    plugin.start().unwrap();
    plugin
}

#[test]
fn roll_opens_note_from_folder() {
    let (_dir, config) = setup();
    let vault = config.vault_path();
    let recorder = Arc::new(RecordingOpener::new());
    let mut plugin = started(config, &recorder);
    plugin.edit_setting(SettingKey::DestinationFolder, "Errands").unwrap();
    plugin.edit_setting(SettingKey::CutOffTime, "1").unwrap();

    let later = now_seconds() + 2 * DAY;
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let outcome = plugin.roll_at(later, &mut rng).unwrap();
        match outcome {
            Outcome::Opened { link_text, path, notice } => {
                assert!(link_text == "todo" || link_text == "groceries");
                assert!(path.starts_with(&vault));
                assert_eq!(notice.message, NOTICE_GENERATED);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert_eq!(recorder.opened().len(), 20);
    plugin.stop();
}

#[test]
fn roll_with_fresh_notes_finds_nothing() {
    let (_dir, config) = setup();
    let recorder = Arc::new(RecordingOpener::new());
    let mut plugin = started(config, &recorder);
    plugin.edit_setting(SettingKey::CutOffTime, "7").unwrap();

    let outcome = plugin.roll_at(now_seconds(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(outcome.notice().message, NOTICE_NOTHING_FOUND);
    assert!(recorder.opened().is_empty());
}

#[test]
fn roll_with_unmatched_folder_finds_nothing() {
    let (_dir, config) = setup();
    let recorder = Arc::new(RecordingOpener::new());
    let mut plugin = started(config, &recorder);
    plugin.edit_setting(SettingKey::DestinationFolder, "Nowhere").unwrap();

    let outcome = plugin.roll_at(now_seconds() + DAY, &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(matches!(outcome, Outcome::NothingFound { .. }));
}

#[test]
fn invalid_cutoff_behaves_as_zero() {
    let (_dir, config) = setup();
    let recorder = Arc::new(RecordingOpener::new());
    let mut plugin = started(config, &recorder);
    plugin.edit_setting(SettingKey::CutOffTime, "soon").unwrap();
    plugin.edit_setting(SettingKey::DestinationFolder, "Archive").unwrap();

    let outcome = plugin.roll_at(now_seconds() + 10, &mut StdRng::seed_from_u64(2)).unwrap();
    match outcome {
        Outcome::Opened { link_text, .. } => assert_eq!(link_text, "2020"),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn status_counts_notes() {
    let (_dir, config) = setup();
    let recorder = Arc::new(RecordingOpener::new());
    let mut plugin = started(config, &recorder);
    plugin.edit_setting(SettingKey::DestinationFolder, "Project").unwrap();
    plugin.edit_setting(SettingKey::CutOffTime, "1").unwrap();

    let status = plugin.status_at(now_seconds()).unwrap();
    assert_eq!(status.total, 4);
    assert_eq!(status.in_folder, 2);
    assert_eq!(status.eligible, 0);

    let status = plugin.status_at(now_seconds() + 2 * DAY).unwrap();
    assert_eq!(status.eligible, 2);
}

#[test]
fn settings_survive_restart() {
    let (_dir, config) = setup();
    let data_path = config.data_path();
    let recorder = Arc::new(RecordingOpener::new());
    {
        let mut plugin = started(config.clone(), &recorder);
        plugin.edit_setting(SettingKey::DestinationFolder, "Project/Errands").unwrap();
        plugin.edit_setting(SettingKey::CutOffTime, "2.5").unwrap();
        plugin.stop();
    }

    let stored = SettingsStore::new(&data_path).load().unwrap();
    assert_eq!(stored.destination_folder, "Project/Errands");

    let plugin = started(config, &recorder);
    assert_eq!(plugin.settings().cut_off_time, "2.5");
    assert_eq!(plugin.settings().selection_config().cutoff_days(), 2.5);
}

#[test]
fn missing_vault_is_error() {
    let (dir, mut config) = setup();
    config.paths.vault_path = dir.path().join("gone").to_string_lossy().to_string();
    let recorder = Arc::new(RecordingOpener::new());
    let plugin = started(config, &recorder);
    assert!(plugin.roll().is_err());
}
