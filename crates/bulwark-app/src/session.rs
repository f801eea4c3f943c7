//! A complete headless game: start, play, count bonus, repeat until the
//! cities are gone or the frame budget runs out.

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, warn};

use bulwark_core::commands::SimEvent;
use bulwark_core::enums::GamePhase;
use bulwark_core::error::CommandError;
use bulwark_core::state::GameStateSnapshot;

use crate::autopilot::Autopilot;
use crate::host::Host;
use crate::settings::Settings;

/// What a session ended with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    pub frames: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub score: u64,
    pub cities_left: usize,
    pub shots_fired: u64,
}

/// Play one session and hand back the host for inspection.
pub fn play(settings: &Settings) -> Result<(Host, SessionReport), CommandError> {
    let mut host = Host::new(settings.game.clone(), settings.seed, settings.frame_interval_ms);
    let mut pilot = settings.autopilot.then(Autopilot::default);
    let mut shots_fired = 0;

    host.send(SimEvent::confirm());

    while host.frames() < settings.max_frames {
        match host.phase() {
            GamePhase::GameOver => break,
            GamePhase::LevelEnd => {
                debug!(level = host.model().level, "starting next level");
                host.send(SimEvent::confirm());
            }
            GamePhase::Playing => {
                if let Some(pilot) = pilot.as_mut() {
                    if let Some((x, y)) = pilot.plan(host.model(), host.engine().config()) {
                        host.send(SimEvent::click(x, y)?);
                        shots_fired += 1;
                    }
                }
            }
            GamePhase::StartScreen | GamePhase::BonusPoints => {}
        }
        host.frame();
    }

    let model = host.model();
    if model.phase != GamePhase::GameOver {
        warn!(frames = host.frames(), "frame budget exhausted before game over");
    }
    let report = SessionReport {
        seed: settings.seed,
        frames: host.frames(),
        phase: model.phase,
        level: model.level,
        score: model.score,
        cities_left: model.city_total(),
        shots_fired,
    };
    info!(
        seed = report.seed,
        frames = report.frames,
        level = report.level,
        score = report.score,
        "session finished"
    );
    Ok((host, report))
}

/// Play a session and write the final snapshot if `snapshot_out` is set.
pub fn run(settings: &Settings) -> anyhow::Result<SessionReport> {
    let (host, report) = play(settings).context("session aborted")?;

    if let Some(path) = &settings.snapshot_out {
        write_snapshot(&host.snapshot(), path)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }
    Ok(report)
}

fn write_snapshot(snapshot: &GameStateSnapshot, path: &std::path::Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), snapshot)?;
    Ok(())
}
