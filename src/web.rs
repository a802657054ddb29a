//! Browser bindings
//!
//! Page scripts drive the game through `WebGame`. Results come back as JSON
//! strings. Mutating calls return promises; a call made while another is
//! still running is rejected rather than interleaved with it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::persistence::LocalStorageStore;
use crate::session::Session;
use crate::settings::Settings;

type WebSession = Rc<RefCell<Session<LocalStorageStore>>>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Guess the Number starting...");
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(JsValue::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn busy() -> JsValue {
    JsValue::from_str("another game action is still running")
}

/// Handle held by the page for the lifetime of the app
#[wasm_bindgen]
pub struct WebGame {
    session: WebSession,
}

#[wasm_bindgen]
impl WebGame {
    /// Load scores and settings and deal the first round
    pub async fn start() -> WebGame {
        let seed = js_sys::Date::now() as u64;
        let session = Session::start(LocalStorageStore::new(), Settings::load(), seed).await;
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            session: Rc::new(RefCell::new(session)),
        }
    }

    /// Resolves to a `GuessReport` JSON string; rejects with the input error
    #[wasm_bindgen(js_name = submitGuess)]
    #[allow(clippy::await_holding_refcell_ref)]
    pub fn submit_guess(&self, input: String) -> js_sys::Promise {
        let session = self.session.clone();
        future_to_promise(async move {
            // Held across the await so no other action can interleave
            let mut session = session.try_borrow_mut().map_err(|_| busy())?;
            let report = session
                .submit_guess(&input)
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            to_json(&report)
        })
    }

    /// Resolves once scores are wiped; rejects if storage refused
    #[wasm_bindgen(js_name = resetScores)]
    #[allow(clippy::await_holding_refcell_ref)]
    pub fn reset_scores(&self) -> js_sys::Promise {
        let session = self.session.clone();
        future_to_promise(async move {
            let mut session = session.try_borrow_mut().map_err(|_| busy())?;
            session
                .reset_scores()
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(JsValue::TRUE)
        })
    }

    /// `Scoreboard` JSON string
    pub fn scoreboard(&self) -> Result<String, JsValue> {
        let session = self.session.try_borrow().map_err(|_| busy())?;
        serde_json::to_string(&session.scoreboard())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Rank tier JSON for the guesses used so far
    #[wasm_bindgen(js_name = liveRank)]
    pub fn live_rank(&self) -> Result<String, JsValue> {
        let session = self.session.try_borrow().map_err(|_| busy())?;
        serde_json::to_string(&session.round().live_rank())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Secret digits, for the end-of-round reveal
    pub fn secret(&self) -> Result<String, JsValue> {
        let session = self.session.try_borrow().map_err(|_| busy())?;
        Ok(session.round().secret())
    }

    #[wasm_bindgen(js_name = newRound)]
    pub fn new_round(&self) -> Result<(), JsValue> {
        self.session.try_borrow_mut().map_err(|_| busy())?.new_round();
        Ok(())
    }

    /// Returns the new theme name
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> Result<String, JsValue> {
        let theme = self.session.try_borrow_mut().map_err(|_| busy())?.toggle_theme();
        Ok(theme.as_str().to_string())
    }

    /// Returns whether sound is now on
    #[wasm_bindgen(js_name = toggleSound)]
    pub fn toggle_sound(&self) -> Result<bool, JsValue> {
        Ok(self.session.try_borrow_mut().map_err(|_| busy())?.toggle_sound())
    }
}
