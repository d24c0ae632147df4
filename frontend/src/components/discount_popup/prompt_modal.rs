use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PromptModalProps {
    pub balance: Option<f64>,
    pub on_start: Callback<()>,
}

#[function_component(PromptModal)]
pub fn prompt_modal(props: &PromptModalProps) -> Html {
    let onclick = {
        let on_start = props.on_start.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_start.emit(());
        })
    };

    let balance = props
        .balance
        .map(|b| format!("${:.2}", b))
        .unwrap_or_else(|| "$0.00".to_string());

    html! {
        <div class={styles::MODAL} onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
            <div class="absolute inset-x-0 top-0 h-1 bg-gradient-to-r from-green-400 to-green-600" />
            <h2 class={classes!(styles::TEXT_H2, "mb-2")}>{"Unlock your discount"}</h2>
            <p class={classes!(styles::TEXT_BODY, "mb-4")}>
                {"Turn your "}
                <span class="font-bold text-green-400">{balance}</span>
                {" in credits into a discount on any plan."}
            </p>
            <p class={classes!(styles::TEXT_SMALL, "mb-6")}>
                {"Spin the wheel once to reveal how much you save."}
            </p>
            <button class={styles::BUTTON_CTA} {onclick}>
                {"Spin the wheel"}
            </button>
        </div>
    }
}
