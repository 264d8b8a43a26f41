use std::fs;
use std::path::PathBuf;

use war_engine::cards::{Card, Rank, Suit};
use war_engine::engine::{StepAction, StepResult, Winner};
use war_engine::logger::{format_game_id, GameLogger, GameRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample_record(game_id: &str) -> GameRecord {
    GameRecord {
        game_id: game_id.to_string(),
        seed: Some(1),
        war_face_down_count: 3,
        steps: vec![StepResult {
            action: StepAction::Draw,
            player_card: Some(Card {
                rank: Rank::Seven,
                suit: Suit::Diamonds,
            }),
            cpu_card: Some(Card {
                rank: Rank::Three,
                suit: Suit::Clubs,
            }),
            player_down_count: 0,
            cpu_down_count: 0,
            pot_size: 2,
            round_over: false,
            game_over: false,
            winner: None,
            message: "Draw.".to_string(),
        }],
        winner: Some(Winner::Player),
        player_cards: 52,
        cpu_cards: 0,
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("gamelog");
    let mut logger = GameLogger::create(&path, "20250102").expect("create logger");
    logger
        .write(&sample_record("20250102-000001"))
        .expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = GameLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn game_id_format_pads_sequence_numbers() {
    assert_eq!(format_game_id("20250102", 7), "20250102-000007");
    assert_eq!(format_game_id("20250102", 123_456), "20250102-123456");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("gamelog_ts");
    let mut logger = GameLogger::create(&path, "20250102").expect("create logger");

    // missing ts -> logger should inject it
    logger
        .write(&sample_record("20250102-000010"))
        .expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    // preset ts should be preserved
    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec = GameRecord {
        ts: Some(preset.clone()),
        ..sample_record("20250102-000011")
    };
    logger.write(&rec).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn record_round_trips_through_json() {
    let rec = GameRecord {
        ts: Some("2030-01-01T00:00:00Z".to_string()),
        ..sample_record("20250102-000099")
    };
    let json = serde_json::to_string(&rec).expect("serialize");
    let parsed: GameRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, rec);
}
