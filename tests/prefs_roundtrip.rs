//! On-disk preference persistence.

use animind::character::CharacterId;
use animind::prefs::Prefs;

#[test]
fn defaults_match_the_shipped_toggles() {
    let prefs = Prefs::default();
    assert!(prefs.voice_enabled);
    assert!(prefs.sound_enabled);
    assert_eq!(prefs.volume, 1.0);
    assert_eq!(prefs.last_character, None);
}

#[test]
fn toggles_survive_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut prefs = Prefs {
        voice_enabled: false,
        sound_enabled: false,
        volume: 0.25,
        last_character: Some(CharacterId::Vegeta),
        ..Prefs::default()
    };
    prefs.save(&path);

    let loaded = Prefs::load(&path);
    assert_eq!(loaded.voice_enabled, false);
    assert_eq!(loaded.sound_enabled, false);
    assert_eq!(loaded.volume, 0.25);
    assert_eq!(loaded.last_character, Some(CharacterId::Vegeta));
}

#[test]
fn character_persists_as_its_lowercase_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut prefs = Prefs {
        last_character: Some(CharacterId::Itachi),
        ..Prefs::default()
    };
    prefs.save(&path);

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["last_character"], "itachi");
}

#[test]
fn save_stamps_updated_at() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut prefs = Prefs::default();
    let before = prefs.updated_at;
    std::thread::sleep(std::time::Duration::from_millis(5));
    prefs.save(&path);
    assert!(prefs.updated_at > before);
}
