//! Jump Kiwing entry point
//!
//! The browser build is driven from JS through `platform::WebGame`. Natively
//! this binary runs a headless attract-mode session with the autopilot and
//! logs how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use jump_kiwing::persistence::{FileStorage, MemoryStorage, Storage};

    env_logger::init();
    log::info!("Jump Kiwing (native) starting...");

    let path = std::env::var("JUMP_KIWING_DATA").unwrap_or_else(|_| "jump-kiwing.json".into());
    match FileStorage::open(&path) {
        Ok(storage) => {
            log::info!("Using storage at {}", storage.path().display());
            run_headless(storage);
        }
        Err(e) => {
            log::warn!("Could not open {path}: {e}; scores will not persist");
            run_headless(MemoryStorage::new());
        }
    }

    fn run_headless<S: Storage>(storage: S) {
        use jump_kiwing::clock::FrameClock;
        use jump_kiwing::hud;
        use jump_kiwing::sim::{StepOutcome, autopilot_wants_jump};
        use jump_kiwing::{Environment, Game, Settings};

        let mut settings = Settings::load(&storage);
        if let Some(seed) = env_parse::<u64>("JUMP_KIWING_SEED") {
            settings.seed = Some(seed);
        }
        if let Some(cap) = env_parse::<f32>("JUMP_KIWING_MAX_SPEED") {
            settings.max_speed = Some(cap);
        }
        let runs = env_parse::<u32>("JUMP_KIWING_RUNS").unwrap_or(3);

        let env = Environment::probe(1280.0, 720.0, false);
        let mut game = Game::new(settings, env, storage);
        let mut clock = FrameClock::default();
        let mut now_ms = 0.0_f64;

        // 60 Hz frames, capped at ten simulated minutes per run
        let max_frames = 60 * 60 * 10;
        for run in 1..=runs {
            game.request_jump();
            for _ in 0..max_frames {
                now_ms += 1000.0 / 60.0;
                if autopilot_wants_jump(game.state()) {
                    game.request_jump();
                }
                if let StepOutcome::Collided { score, new_best } = game.frame(clock.tick(now_ms)) {
                    log::info!(
                        "Run {run}: {} points after {:.1}s{}",
                        hud::score_text(score),
                        game.state().time,
                        if new_best { " (new best)" } else { "" }
                    );
                    break;
                }
            }
            if game.state().running() {
                log::info!("Run {run}: still alive at {:.0}s, stopping", game.state().time);
                break;
            }
        }

        println!("Best score: {}", hud::padded_score(game.state().best_score));
    }

    fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok()?.trim().parse().ok()
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
