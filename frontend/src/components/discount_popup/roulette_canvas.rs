use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use shared::presets::{WheelPreset, GOLD};
use shared::wheel_geometry::{
    animated_rotation, label_anchor, segment_arc, tick_marker, Point,
};
use crate::styles;

const CANVAS_SIZE: f64 = 400.0;

#[derive(Properties, PartialEq)]
pub struct RouletteCanvasProps {
    pub preset: &'static WheelPreset,
    /// Rest angle computed when the spin started.
    pub target_rotation: Option<f64>,
    pub turning: bool,
    pub duration_ms: u32,
}

#[function_component(RouletteCanvas)]
pub fn roulette_canvas(props: &RouletteCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let rotation = use_state(|| 0.0_f64);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    // Drive the rotation with requestAnimationFrame once the lead-in is over
    {
        let rotation = rotation.clone();
        let frame = frame.clone();
        let duration = props.duration_ms as f64;
        use_effect_with((props.turning, props.target_rotation), move |(turning, target)| {
            if let (true, Some(target)) = (*turning, *target) {
                let started = js_sys::Date::now();
                animate(frame.clone(), rotation, target, duration, started);
            }
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let preset = props.preset;
        use_effect_with(*rotation, move |rotation| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw_wheel(&canvas, preset, *rotation);
            }
            || ()
        });
    }

    let status = if props.turning { "Spinning..." } else { "Getting ready..." };

    html! {
        <div class={classes!(styles::OVERLAY, "z-[400]")}>
            <div class="text-center">
                <h2 class={classes!(styles::TEXT_H2, "mb-8")}>{"Spinning the wheel!"}</h2>
                <div class="relative w-[300px] h-[300px] sm:w-[350px] sm:h-[350px] md:w-[400px] md:h-[400px]">
                    <canvas
                        ref={canvas_ref}
                        width={CANVAS_SIZE.to_string()}
                        height={CANVAS_SIZE.to_string()}
                        class="w-full h-full rounded-full shadow-2xl"
                    />
                </div>
                <p class="text-white mt-8 text-lg">{status}</p>
            </div>
        </div>
    }
}

fn animate(
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    rotation: UseStateHandle<f64>,
    target: f64,
    duration: f64,
    started: f64,
) {
    let next = frame.clone();
    let handle = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - started;
        rotation.set(animated_rotation(0.0, target, elapsed, duration));
        if elapsed < duration {
            animate(next, rotation, target, duration, started);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

fn draw_wheel(canvas: &HtmlCanvasElement, preset: &WheelPreset, rotation: f64) {
    let context = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(context) => context,
        None => {
            log::error!("2d canvas context unavailable");
            return;
        }
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center = Point { x: width / 2.0, y: height / 2.0 };
    let rim = width.min(height) / 2.0;
    let radius = rim - 8.0;
    let count = preset.segments.len() as u32;

    context.clear_rect(0.0, 0.0, width, height);

    // Gold rim
    context.begin_path();
    context.set_fill_style_str(GOLD);
    let _ = context.arc(center.x, center.y, rim, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center.x, center.y);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center.x, -center.y);

    for (index, segment) in preset.segments.iter().enumerate() {
        let arc = segment_arc(index as u32, count, center, radius);
        context.begin_path();
        context.set_fill_style_str(segment.fill);
        context.move_to(center.x, center.y);
        let _ = context.arc(center.x, center.y, radius, arc.start_radians(), arc.end_radians());
        context.close_path();
        context.fill();
    }

    context.set_font("bold 24px sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    for (index, segment) in preset.segments.iter().enumerate() {
        let anchor = label_anchor(index as u32, count, center, radius * preset.label_radius_ratio);
        context.save();
        let _ = context.translate(anchor.position.x, anchor.position.y);
        if preset.radial_labels {
            let _ = context.rotate(anchor.rotation_degrees * PI / 180.0);
        }
        context.set_fill_style_str(segment.text);
        let _ = context.fill_text(segment.label, 0.0, 0.0);
        context.restore();
    }

    context.set_fill_style_str(GOLD);
    for index in 0..count {
        let [tip, left, right] = tick_marker(index, count, center, radius * 0.98, radius * 0.92, 1.5);
        context.begin_path();
        context.move_to(tip.x, tip.y);
        context.line_to(left.x, left.y);
        context.line_to(right.x, right.y);
        context.close_path();
        context.fill();
    }

    context.restore();

    // Hub
    context.begin_path();
    context.set_fill_style_str("#f59e0b");
    let _ = context.arc(center.x, center.y, radius * 0.15, 0.0, 2.0 * PI);
    context.fill();
    context.set_stroke_style_str("#fde68a");
    context.set_line_width(2.0);
    context.stroke();

    // Pointer stays fixed at the top
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    context.move_to(center.x - 18.0, 4.0);
    context.line_to(center.x + 18.0, 4.0);
    context.line_to(center.x, 32.0);
    context.close_path();
    context.fill();
}
