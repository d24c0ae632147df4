use web_sys::window;
use yew::prelude::*;
use shared::confetti::scatter;
use shared::constants::{CONFETTI_DURATION_MS, CONFETTI_PARTICLE_COUNT, CONFETTI_SEED};
use crate::hooks::use_custom_css;

const CONFETTI_CSS: &str = r#"
@keyframes confettiFall {
    0% { transform: translate(0, 0) rotate(0deg); opacity: 1; }
    100% { transform: translate(var(--drift-x), 100vh) rotate(720deg); opacity: 0; }
}
.confetti-particle {
    position: absolute;
    width: 10px;
    height: 10px;
    border-radius: 2px;
    animation-name: confettiFall;
    animation-timing-function: ease-in;
    animation-fill-mode: forwards;
}
"#;

fn viewport() -> (f64, f64) {
    let size = window().and_then(|w| {
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some((width, height))
    });
    size.unwrap_or((1280.0, 720.0))
}

#[function_component(ConfettiBurst)]
pub fn confetti_burst() -> Html {
    use_custom_css(CONFETTI_CSS);

    let particles = use_memo((), |_| {
        let (width, height) = viewport();
        scatter(CONFETTI_PARTICLE_COUNT, width, height * 0.5, CONFETTI_SEED)
    });

    let duration_s = CONFETTI_DURATION_MS as f64 / 1000.0;

    html! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden z-[450]">
            { for particles.iter().map(|p| {
                let style = format!(
                    "left: {:.1}px; top: {:.1}px; background-color: {}; animation-delay: {:.2}s; animation-duration: {:.1}s; --drift-x: {:.1}px;",
                    p.x, p.y, p.color, p.delay_s, duration_s, p.drift_x
                );
                html! { <div key={p.id} class="confetti-particle" {style} /> }
            }) }
        </div>
    }
}
