use std::cell::RefCell;
use std::rc::{Rc, Weak};

use common::{
    Direction, GameConfig, GameState, GameStatus, direction_for_key_code, direction_for_key_name,
};
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, Window};

use crate::render::CanvasRenderer;

const GAME_OVER_TEXT: &str = "GAME OVER!";

fn get_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
}

struct Session {
    game: GameState,
    renderer: CanvasRenderer,
    status_element: Option<Element>,
    interval_handle: Option<i32>,
}

impl Session {
    fn redraw(&self) -> Result<(), JsValue> {
        self.renderer.render(&self.game)?;
        if let Some(element) = &self.status_element {
            let text = match self.game.status() {
                GameStatus::GameOver { .. } => GAME_OVER_TEXT,
                _ => "",
            };
            element.set_text_content(Some(text));
        }
        Ok(())
    }

    fn on_tick(&mut self, window: &Window) -> Result<(), JsValue> {
        self.game.tick();
        self.redraw()?;
        if !self.game.is_running() {
            self.stop_timer(window);
        }
        Ok(())
    }

    fn stop_timer(&mut self, window: &Window) {
        if let Some(handle) = self.interval_handle.take() {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// A browser snake session bound to a canvas.
///
/// Owns the game state and a single repeating timer. `start()` always clears
/// the previous timer before installing a new one.
#[wasm_bindgen]
pub struct SnakeGame {
    session: Rc<RefCell<Session>>,
    tick_callback: Closure<dyn FnMut()>,
    key_listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

#[wasm_bindgen]
impl SnakeGame {
    /// `status_id` names an element that shows the game-over text, if any.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, status_id: Option<String>) -> Result<SnakeGame, JsValue> {
        let window = get_window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;
        let status_element = status_id.and_then(|id| document.get_element_by_id(&id));

        let config = GameConfig::default();
        let renderer = CanvasRenderer::new(canvas, &config)?;
        let seed = window
            .performance()
            .map(|p| (p.now() * 1000.0) as u64)
            .unwrap_or_default()
            ^ 0x9e37_79b9_7f4a_7c15;
        let game = GameState::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let session = Rc::new(RefCell::new(Session {
            game,
            renderer,
            status_element,
            interval_handle: None,
        }));
        session.borrow().redraw()?;

        let weak: Weak<RefCell<Session>> = Rc::downgrade(&session);
        let tick_callback = Closure::<dyn FnMut()>::new(move || {
            let Some(session) = weak.upgrade() else {
                return;
            };
            let result = get_window().and_then(|window| session.borrow_mut().on_tick(&window));
            if let Err(e) = result {
                error!("Tick failed: {:?}", e);
            }
        });

        Ok(SnakeGame {
            session,
            tick_callback,
            key_listener: None,
        })
    }

    /// Resets the game and (re)starts the tick timer.
    pub fn start(&mut self) -> Result<(), JsValue> {
        let window = get_window()?;
        let mut session = self.session.borrow_mut();
        session.stop_timer(&window);
        session.game.start();
        session.redraw()?;

        let interval_ms = session.game.config().tick_interval_ms as i32;
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.tick_callback.as_ref().unchecked_ref(),
            interval_ms,
        )?;
        session.interval_handle = Some(handle);
        info!("Tick timer started at {}ms", interval_ms);
        Ok(())
    }

    /// Cancels the tick timer. The state is left as it is.
    pub fn stop(&mut self) -> Result<(), JsValue> {
        let window = get_window()?;
        self.session.borrow_mut().stop_timer(&window);
        Ok(())
    }

    /// Feeds a `KeyboardEvent.key` value. Returns true when it was an arrow key.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.apply_direction(direction_for_key_name(key))
    }

    /// Same as `handle_key` for legacy numeric key codes.
    pub fn handle_key_code(&mut self, key_code: u32) -> bool {
        self.apply_direction(direction_for_key_code(key_code))
    }

    pub fn set_direction(&mut self, dx: i32, dy: i32) -> Result<(), JsValue> {
        self.session
            .borrow_mut()
            .game
            .set_direction_vector(dx, dy)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Listens for arrow keys on the window. Calling it again has no effect.
    pub fn bind_keyboard(&mut self) -> Result<(), JsValue> {
        if self.key_listener.is_some() {
            return Ok(());
        }

        let weak = Rc::downgrade(&self.session);
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let Some(session) = weak.upgrade() else {
                return;
            };
            if let Some(direction) = direction_for_key_name(&event.key()) {
                event.prevent_default();
                session.borrow_mut().game.set_direction(direction);
            }
        });
        get_window()?
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
        self.key_listener = Some(listener);
        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        self.session.borrow().game.is_game_over()
    }

    pub fn is_running(&self) -> bool {
        self.session.borrow().interval_handle.is_some()
    }

    pub fn score(&self) -> u32 {
        self.session.borrow().game.score()
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        self.session
            .borrow()
            .game
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl SnakeGame {
    fn apply_direction(&mut self, direction: Option<Direction>) -> bool {
        match direction {
            Some(direction) => {
                self.session.borrow_mut().game.set_direction(direction);
                true
            }
            None => false,
        }
    }
}

impl Drop for SnakeGame {
    fn drop(&mut self) {
        let Ok(window) = get_window() else {
            return;
        };
        self.session.borrow_mut().stop_timer(&window);
        if let Some(listener) = self.key_listener.take() {
            let _ = window
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    }
}
