mod confetti_burst;
mod prompt_modal;
mod roulette_canvas;
mod victory_message;

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use shared::driver::{Sequence, SequenceHost};
use shared::sequence::SequenceSnapshot;
use crate::config::active_preset;
use crate::hooks::dispatch_balance_reset;
use crate::storage::LocalStorageFlags;
use crate::styles;
use crate::timers::GlooTimers;

use confetti_burst::ConfettiBurst;
use prompt_modal::PromptModal;
use roulette_canvas::RouletteCanvas;
use victory_message::VictoryMessage;

#[derive(Properties, PartialEq)]
pub struct DiscountPopupProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_apply_discount: Callback<()>,
    #[prop_or_default]
    pub on_balance_reset: Option<Callback<()>>,
}

/// Latest parent callbacks, refreshed on every render so the long-lived
/// sequence never emits into a stale closure.
struct HostCallbacks {
    on_close: Callback<()>,
    on_apply_discount: Callback<()>,
    on_balance_reset: Option<Callback<()>>,
}

impl HostCallbacks {
    fn from_props(props: &DiscountPopupProps) -> Self {
        Self {
            on_close: props.on_close.clone(),
            on_apply_discount: props.on_apply_discount.clone(),
            on_balance_reset: props.on_balance_reset.clone(),
        }
    }
}

struct PopupHost {
    callbacks: Rc<RefCell<HostCallbacks>>,
    snapshot: UseStateHandle<SequenceSnapshot>,
}

impl SequenceHost for PopupHost {
    fn stage_changed(&self, snapshot: &SequenceSnapshot) {
        self.snapshot.set(*snapshot);
    }

    fn apply_outcome(&self) {
        let callback = self.callbacks.borrow().on_apply_discount.clone();
        callback.emit(());
    }

    fn balance_reset(&self) {
        dispatch_balance_reset();
        let callback = self.callbacks.borrow().on_balance_reset.clone();
        if let Some(callback) = callback {
            callback.emit(());
        }
    }

    fn close(&self) {
        let callback = self.callbacks.borrow().on_close.clone();
        callback.emit(());
    }
}

#[function_component(DiscountPopup)]
pub fn discount_popup(props: &DiscountPopupProps) -> Html {
    let preset = *use_memo((), |_| active_preset());
    let snapshot = use_state(SequenceSnapshot::default);
    let callbacks = use_mut_ref(|| HostCallbacks::from_props(props));
    let sequence = use_mut_ref(|| None::<Sequence<GlooTimers>>);

    *callbacks.borrow_mut() = HostCallbacks::from_props(props);

    {
        let sequence = sequence.clone();
        let callbacks = callbacks.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            match preset.wheel_config() {
                Ok(wheel) => {
                    let host = PopupHost { callbacks, snapshot };
                    *sequence.borrow_mut() = Some(Sequence::new(
                        wheel,
                        preset.sequence_config(),
                        GlooTimers,
                        Box::new(LocalStorageFlags),
                        Box::new(host),
                    ));
                }
                Err(e) => log::error!("Wheel preset {} is invalid: {}", preset.name, e),
            }

            // Dropping the sequence cancels whatever is still pending
            move || {
                let running = sequence.borrow_mut().take();
                drop(running);
            }
        });
    }

    {
        let sequence = sequence.clone();
        use_effect_with(props.is_open, move |is_open| {
            let running = sequence.borrow().clone();
            if let Some(running) = running {
                if *is_open {
                    running.open();
                } else {
                    running.close();
                }
            }
            || ()
        });
    }

    let on_start = {
        let sequence = sequence.clone();
        Callback::from(move |_: ()| {
            let running = sequence.borrow().clone();
            if let Some(running) = running {
                running.start();
            }
        })
    };

    let on_claim = {
        let sequence = sequence.clone();
        Callback::from(move |_: ()| {
            let running = sequence.borrow().clone();
            if let Some(running) = running {
                running.claim();
            }
        })
    };

    let views = snapshot.views;
    if views.is_empty() {
        return html! {};
    }

    let duration_ms = preset.sequence_config().spin_duration_ms;

    html! {
        <div class={styles::BACKDROP}>
            if views.prompt_modal {
                <PromptModal balance={snapshot.balance} on_start={on_start} />
            }
            if views.wheel {
                <RouletteCanvas
                    preset={preset}
                    target_rotation={snapshot.spin.map(|s| s.final_rotation_degrees)}
                    turning={snapshot.wheel_turning}
                    duration_ms={duration_ms}
                />
            }
            if views.particles {
                <ConfettiBurst />
            }
            if views.result_message {
                <VictoryMessage
                    discount_label={preset.target_label()}
                    on_claim={on_claim}
                />
            }
        </div>
    }
}
