// src/app/browser_event_manager.rs
//! Handles attaching and detaching the click listeners on the column-top cells.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::app::{event_handler, SharedGame};

/// A click listener attached to one column-top cell. The closure has to stay
/// alive as long as the listener is registered.
pub struct ColumnListener {
    element: Element,
    closure: Closure<dyn FnMut(Event)>,
}

/// Attaches a click listener to each `td#top-{x}` that plays that column.
pub(crate) fn attach_column_listeners(
    top_cells: Vec<Element>,
    game: &SharedGame,
) -> Result<Vec<ColumnListener>, JsValue> {
    let mut listeners = Vec::with_capacity(top_cells.len());

    for element in top_cells {
        let game_clone = SharedGame::clone(game);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event_handler::handle_column_click(&game_clone, &event);
        }) as Box<dyn FnMut(Event)>);

        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        listeners.push(ColumnListener { element, closure });
    }

    log::debug!("attached {} column listeners", listeners.len());
    Ok(listeners)
}

/// Removes the listeners and drops their closures.
pub(crate) fn detach_column_listeners(listeners: &mut Vec<ColumnListener>) -> Result<(), JsValue> {
    for listener in listeners.drain(..) {
        listener.element.remove_event_listener_with_callback(
            "click",
            listener.closure.as_ref().unchecked_ref(),
        )?;
        // closure is dropped here
    }
    Ok(())
}
