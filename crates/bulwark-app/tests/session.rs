use bulwark_app::session;
use bulwark_app::settings::Settings;
use bulwark_core::enums::GamePhase;

#[test]
fn undefended_game_ends() {
    let settings = Settings {
        max_frames: 200_000,
        ..Settings::default()
    };
    let (_, report) = session::play(&settings).unwrap();

    assert_eq!(report.phase, GamePhase::GameOver);
    assert_eq!(report.cities_left, 0);
    assert_eq!(report.shots_fired, 0);
    assert!(report.level >= 1);
    assert!(report.frames < settings.max_frames);
}

#[test]
fn frame_budget_is_respected() {
    let settings = Settings {
        max_frames: 50,
        ..Settings::default()
    };
    let (host, report) = session::play(&settings).unwrap();

    assert_eq!(report.frames, 50);
    assert_eq!(report.phase, GamePhase::Playing);
    assert_eq!(host.clock_ms(), 50 * 16);
}

#[test]
fn autopilot_fires_and_replays() {
    let settings = Settings {
        max_frames: 3_000,
        autopilot: true,
        seed: 9,
        ..Settings::default()
    };
    let (_, first) = session::play(&settings).unwrap();
    let (_, second) = session::play(&settings).unwrap();

    assert!(first.shots_fired > 0);
    assert_eq!(first, second);
}

#[test]
fn run_writes_snapshot() {
    let path = std::env::temp_dir().join(format!("bulwark-snapshot-{}.json", std::process::id()));
    let settings = Settings {
        max_frames: 100,
        snapshot_out: Some(path.clone()),
        ..Settings::default()
    };
    let report = session::run(&settings).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["model"]["phase"], "Playing");
    assert_eq!(value["model"]["level"], report.level);
    assert_eq!(value["bases"].as_array().map(Vec::len), Some(3));
}
