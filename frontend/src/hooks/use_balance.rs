use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;
use crate::config::BALANCE_RESET_EVENT;
use crate::storage::read_main_page_balance;

/// Balance shown on the main page. Re-reads storage whenever the popup
/// announces a reset.
#[hook]
pub fn use_balance() -> UseStateHandle<Option<f64>> {
    let balance = use_state(read_main_page_balance);

    {
        let balance = balance.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, BALANCE_RESET_EVENT, move |_| {
                    balance.set(read_main_page_balance());
                })
            });

            // Dropping the listener unregisters it
            move || drop(listener)
        });
    }

    balance
}

pub fn dispatch_balance_reset() {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_f64(0.0));
        match CustomEvent::new_with_event_init_dict(BALANCE_RESET_EVENT, &event_init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => log::error!("Failed to create {} event: {:?}", BALANCE_RESET_EVENT, e),
        }
    }
}
