use yew::prelude::*;
use crate::hooks::use_custom_css;
use crate::styles;

const VICTORY_CSS: &str = r#"
@keyframes victoryPop {
    0% { transform: scale(0.6); opacity: 0; }
    70% { transform: scale(1.05); opacity: 1; }
    100% { transform: scale(1); }
}
"#;

#[derive(Properties, PartialEq)]
pub struct VictoryMessageProps {
    pub discount_label: AttrValue,
    pub on_claim: Callback<()>,
}

#[function_component(VictoryMessage)]
pub fn victory_message(props: &VictoryMessageProps) -> Html {
    use_custom_css(VICTORY_CSS);

    let onclick = {
        let on_claim = props.on_claim.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_claim.emit(());
        })
    };

    html! {
        <div class={classes!(styles::OVERLAY, "z-[500]")}>
            <div class={classes!(styles::VICTORY_CARD, "animate-[victoryPop_0.5s_ease-out]")}>
                <div class="text-6xl mb-4">{"🎉"}</div>
                <h2 class={classes!(styles::TEXT_H1, "mb-2")}>{"Congratulations!"}</h2>
                <p class={classes!(styles::TEXT_BODY, "mb-2")}>{"You won"}</p>
                <p class="text-5xl font-extrabold text-green-400 mb-6">
                    {format!("{} OFF", props.discount_label)}
                </p>
                <p class={classes!(styles::TEXT_SMALL, "mb-6")}>
                    {"Your discount is applied to every plan below."}
                </p>
                <button class={styles::BUTTON_CTA} {onclick}>
                    {"Claim my discount"}
                </button>
            </div>
        </div>
    }
}
