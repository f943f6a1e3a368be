//! DOM rendering for planets, status text and the win handoff

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::game::{GameEvent, Round};

const PLANET_CLASS: &str = "planet";
const CORRECT_CLASS: &str = "correct";
const SIZE_ATTR: &str = "data-size";

const HANDOFF_BUTTON_STYLE: &str = "padding: 15px 30px; font-size: 2em; \
    background-color: #008080; color: white; border: none; border-radius: 10px; \
    cursor: pointer; box-shadow: 0 5px 0 0 #005f5f;";

/// Handles to the page elements the game writes to
pub struct DomView {
    document: Document,
    message: Element,
    score: Element,
    container: Element,
    on_click: Option<Closure<dyn FnMut(MouseEvent)>>,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

/// Read the size tag of the planet a click landed on
pub fn size_from_click(event: &MouseEvent) -> Option<u32> {
    let target: Element = event.current_target()?.dyn_into().ok()?;
    target.get_attribute(SIZE_ATTR)?.parse().ok()
}

impl DomView {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        Ok(Self {
            message: element(&document, "message")?,
            score: element(&document, "score")?,
            container: element(&document, "planet-container")?,
            document,
            on_click: None,
        })
    }

    /// Install the handler attached to every planet
    pub fn set_click_handler(&mut self, handler: Closure<dyn FnMut(MouseEvent)>) {
        self.on_click = Some(handler);
    }

    /// Apply one controller event. `Schedule` is the caller's job.
    pub fn apply(&self, event: &GameEvent) -> Result<(), JsValue> {
        match event {
            GameEvent::RoundStarted(round) => self.render_round(round)?,
            GameEvent::Message(text) => self.message.set_text_content(Some(text)),
            GameEvent::Score(text) => self.score.set_text_content(Some(text)),
            GameEvent::SetInteractive(enabled) => self.set_interactive(*enabled)?,
            GameEvent::MarkCorrect(size) => self.set_marked(*size, true)?,
            GameEvent::UnmarkCorrect(size) => self.set_marked(*size, false)?,
            GameEvent::WinHandoff { label, url } => self.show_handoff(label, url)?,
            GameEvent::Schedule { .. } => {}
        }
        Ok(())
    }

    fn render_round(&self, round: &Round) -> Result<(), JsValue> {
        self.container.set_inner_html("");

        for shape in &round.shapes {
            let planet: HtmlElement = self.document.create_element("div")?.dyn_into()?;
            planet.class_list().add_1(PLANET_CLASS)?;

            let style = planet.style();
            style.set_property("width", &format!("{}px", shape.size))?;
            style.set_property("height", &format!("{}px", shape.size))?;
            style.set_property("background-color", &shape.color)?;

            planet.set_attribute(SIZE_ATTR, &shape.size.to_string())?;
            if let Some(handler) = &self.on_click {
                planet.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            }
            self.container.append_child(&planet)?;
        }
        Ok(())
    }

    fn set_interactive(&self, enabled: bool) -> Result<(), JsValue> {
        let value = if enabled { "auto" } else { "none" };
        let planets = self
            .container
            .query_selector_all(&format!(".{PLANET_CLASS}"))?;
        for i in 0..planets.length() {
            if let Some(planet) = planets.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                planet.style().set_property("pointer-events", value)?;
            }
        }
        Ok(())
    }

    fn set_marked(&self, size: u32, marked: bool) -> Result<(), JsValue> {
        let selector = format!("[{SIZE_ATTR}=\"{size}\"]");
        let Some(planet) = self.container.query_selector(&selector)? else {
            log::warn!("No planet tagged {} to mark", size);
            return Ok(());
        };
        if marked {
            planet.class_list().add_1(CORRECT_CLASS)
        } else {
            planet.class_list().remove_1(CORRECT_CLASS)
        }
    }

    fn show_handoff(&self, label: &str, url: &str) -> Result<(), JsValue> {
        self.container.set_inner_html("");

        let button = self.document.create_element("button")?;
        button.set_text_content(Some(label));
        button.set_attribute("style", HANDOFF_BUTTON_STYLE)?;

        let url = url.to_string();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            log::info!("Handing off to {}", url);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_self") {
                    log::error!("Navigation failed: {:?}", e);
                }
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        self.container.append_child(&button)?;
        Ok(())
    }
}
