//! Cosmo Planets entry point
//!
//! Handles platform-specific initialization and wires input to the controller.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use cosmo_planets::game::{GameEvent, RoundController, Timer};
    use cosmo_planets::ui::{DomView, size_from_click};
    use cosmo_planets::GameConfig;

    /// Game instance holding the controller and its view
    struct Game {
        controller: RoundController,
        view: DomView,
    }

    /// Apply controller events in order, turning `Schedule` into browser timers
    fn dispatch(game: &Rc<RefCell<Game>>, events: Vec<GameEvent>) {
        for event in events {
            if let GameEvent::Schedule { timer, delay_ms } = event {
                schedule(game.clone(), timer, delay_ms);
                continue;
            }
            if let Err(e) = game.borrow().view.apply(&event) {
                log::error!("Failed to apply {:?}: {:?}", event, e);
            }
        }
    }

    /// Fire-once timeout feeding back into the controller
    fn schedule(game: Rc<RefCell<Game>>, timer: Timer, delay_ms: u32) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule {:?}", timer.kind);
            return;
        };
        let callback = Closure::once_into_js(move || {
            let events = game.borrow_mut().controller.timer_elapsed(timer);
            dispatch(&game, events);
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }

    fn setup_click_handler(game: &Rc<RefCell<Game>>) {
        let handle = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(size) = size_from_click(&event) else {
                log::warn!("Click on a planet without a size tag");
                return;
            };
            let events = handle.borrow_mut().controller.submit_guess(size);
            dispatch(&handle, events);
        });
        game.borrow_mut().view.set_click_handler(closure);
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Cosmo Planets starting...");

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            controller: RoundController::new(config, seed)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            view: DomView::new()?,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_click_handler(&game);

        let events = game.borrow_mut().controller.begin();
        dispatch(&game, events);

        log::info!("Cosmo Planets running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cosmo Planets (native) starting...");
    log::info!("Native mode plays a headless session - run with `trunk serve` for web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    match autoplay::play(cosmo_planets::GameConfig::load(), seed) {
        Ok(guesses) => println!("Won after {} guesses (seed {})", guesses, seed),
        Err(e) => log::error!("Invalid config: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless player: fires timers immediately and clicks random planets
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use std::collections::VecDeque;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use cosmo_planets::game::{EvalPhase, GameEvent, RoundController, Timer};
    use cosmo_planets::{ConfigError, GameConfig};

    /// Play until the win handoff; returns the number of guesses made
    pub fn play(config: GameConfig, seed: u64) -> Result<u32, ConfigError> {
        let mut controller = RoundController::new(config, seed)?;
        let mut player = Pcg32::seed_from_u64(seed.wrapping_add(1));
        let mut pending = VecDeque::new();
        let mut guesses = 0;

        let events = controller.begin();
        drain(events, &mut pending);

        while controller.phase() != EvalPhase::Won {
            if let Some(timer) = pending.pop_front() {
                let events = controller.timer_elapsed(timer);
                drain(events, &mut pending);
                continue;
            }
            let Some(round) = controller.round() else {
                log::error!("No round and no pending timer");
                break;
            };
            let pick = round.shapes[player.random_range(0..round.shapes.len())].size;
            guesses += 1;
            let events = controller.submit_guess(pick);
            drain(events, &mut pending);
        }

        if let Some(url) = controller.next_game_url() {
            log::info!("Next game: {} ({})", url, controller.config().next_game_label);
        }
        Ok(guesses)
    }

    fn drain(events: Vec<GameEvent>, pending: &mut VecDeque<Timer>) {
        for event in events {
            match event {
                GameEvent::Schedule { timer, delay_ms } => {
                    log::debug!("Timer {:?} in {} ms", timer.kind, delay_ms);
                    pending.push_back(timer);
                }
                GameEvent::RoundStarted(round) => {
                    let sizes: Vec<u32> = round.shapes.iter().map(|s| s.size).collect();
                    log::info!("Planets on screen: {:?}", sizes);
                }
                GameEvent::Message(text) => log::info!("{}", text),
                GameEvent::Score(text) => log::info!("{}", text),
                GameEvent::WinHandoff { label, url } => log::info!("[{}] -> {}", label, url),
                other => log::debug!("{:?}", other),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_autoplay_reaches_win() {
            let guesses = play(GameConfig::default(), 2024).unwrap();
            assert!(guesses >= cosmo_planets::consts::SCORE_TO_WIN);
        }

        #[test]
        fn test_autoplay_rejects_bad_config() {
            let config = GameConfig {
                score_to_win: 0,
                ..Default::default()
            };
            assert!(matches!(play(config, 1), Err(ConfigError::ZeroWinThreshold)));
        }
    }
}
