use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use crate::components::DiscountPopup;
use crate::config::{pricing_selector, PRICING_SECTION_ID};
use crate::hooks::use_balance;
use crate::styles;

const PLANS: [(&str, &str, &str); 3] = [
    ("Starter", "$9", "For trying things out"),
    ("Pro", "$29", "For growing teams"),
    ("Business", "$99", "For the whole company"),
];

fn scroll_to_pricing() {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&pricing_selector()).ok().flatten());

    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("Pricing section {} not found", pricing_selector()),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let balance = use_balance();
    let popup_open = use_state(|| false);
    let discount_applied = use_state(|| false);

    let open_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: MouseEvent| popup_open.set(true))
    };

    let on_close = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: ()| popup_open.set(false))
    };

    let on_apply_discount = {
        let discount_applied = discount_applied.clone();
        Callback::from(move |_: ()| {
            discount_applied.set(true);
            scroll_to_pricing();
        })
    };

    let balance_text = balance
        .map(|b| format!("${:.2}", b))
        .unwrap_or_else(|| "$0.00".to_string());

    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-5xl mx-auto py-16 space-y-16">
                <section class="text-center space-y-6">
                    <h1 class={styles::TEXT_H1}>{"Your credits are waiting"}</h1>
                    <p class={styles::TEXT_BODY}>
                        {"Credit balance: "}
                        <span class="font-bold text-green-400">{balance_text}</span>
                    </p>
                    <button class={styles::BUTTON_PRIMARY} onclick={open_popup}>
                        {"Redeem credits"}
                    </button>
                </section>

                <section id={PRICING_SECTION_ID} class="space-y-8">
                    <h2 class={classes!(styles::TEXT_H2, "text-center")}>{"Pricing"}</h2>
                    if *discount_applied {
                        <p class="text-center text-green-400 font-semibold">
                            {"Discount applied to every plan"}
                        </p>
                    }
                    <div class="grid gap-6 sm:grid-cols-3">
                        { for PLANS.iter().map(|(name, price, blurb)| html! {
                            <div key={*name} class={styles::CARD}>
                                <h3 class={styles::TEXT_H2}>{*name}</h3>
                                <p class="text-4xl font-extrabold text-white my-4">{*price}</p>
                                <p class={styles::TEXT_SMALL}>{*blurb}</p>
                            </div>
                        }) }
                    </div>
                </section>
            </div>

            <DiscountPopup
                is_open={*popup_open}
                {on_close}
                {on_apply_discount}
            />
        </div>
    }
}
