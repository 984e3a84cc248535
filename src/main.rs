//! Square Dodge entry point
//!
//! Wires the browser collaborators (canvas 2-D context, document key events,
//! requestAnimationFrame) to the event multiplexer and spawns the update and
//! render tasks. The native build runs a headless demo session instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use square_dodge::channel::{
        EventSender, event_channel, render_queue, run_render_loop, run_update_loop,
    };
    use square_dodge::consts::*;
    use square_dodge::input::{GameEvent, Key};
    use square_dodge::render::{Painter, Rgba};

    /// Canvas 2-D painter backing the drawing seam in the browser.
    struct CanvasPainter {
        ctx: CanvasRenderingContext2d,
    }

    impl Painter for CanvasPainter {
        fn clear(&mut self) {
            self.ctx
                .clear_rect(0.0, 0.0, SURFACE_W as f64, SURFACE_H as f64);
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        }

        fn set_font(&mut self, font: &str) {
            self.ctx.set_font(font);
            self.ctx.set_text_align("center");
        }

        fn text_lines(&mut self, lines: &[&str], x: f32, y: f32, step: f32, color: Rgba) {
            self.ctx.set_fill_style_str(&color.css());
            for (i, line) in lines.iter().enumerate() {
                let _ = self
                    .ctx
                    .fill_text(line, x as f64, (y + step * i as f32) as f64);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("square dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_W);
        canvas.set_height(SURFACE_H);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context request failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let (events_tx, events_rx) = event_channel();
        let (frames_tx, frames_rx) = render_queue();

        install_key_listeners(&events_tx);
        start_frame_source(events_tx);

        let seed = js_sys::Date::now() as u64;
        log::info!("seed: {seed}");

        spawn_local(run_update_loop(
            events_rx,
            frames_tx,
            Pcg32::seed_from_u64(seed),
        ));
        spawn_local(run_render_loop(frames_rx, CanvasPainter { ctx }));

        log::info!("square dodge running");
    }

    /// Subscribe the three key listeners on the document for the life of the
    /// process. Each one owns a clone of the multiplexer sender.
    fn install_key_listeners(events: &EventSender) {
        let document = web_sys::window().unwrap().document().unwrap();

        {
            let tx = events.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_code(event.key_code());
                if key == Key::Other {
                    log::debug!("unmapped key code {}", event.key_code());
                }
                let _ = tx.unbounded_send(GameEvent::KeyDown(key));
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let tx = events.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let _ = tx.unbounded_send(GameEvent::KeyUp(Key::from_code(event.key_code())));
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let tx = events.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let _ = tx.unbounded_send(GameEvent::KeyPress(Key::from_code(event.key_code())));
            });
            let _ = document
                .add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start the tick stream: one event per display refresh via
    /// requestAnimationFrame, or a fixed interval when rAF is unavailable.
    fn start_frame_source(events: EventSender) {
        let window = web_sys::window().unwrap();
        let fallback = events.clone();

        let first = Closure::once(move |_time: f64| {
            let _ = events.unbounded_send(GameEvent::Tick);
            schedule_tick(events);
        });
        if window
            .request_animation_frame(first.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!(
                "requestAnimationFrame unavailable, using {FALLBACK_TICK_MS} ms interval timer"
            );
            let tick = Closure::<dyn FnMut()>::new(move || {
                let _ = fallback.unbounded_send(GameEvent::Tick);
            });
            let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                FALLBACK_TICK_MS,
            );
            tick.forget();
        }
        first.forget();
    }

    fn schedule_tick(events: EventSender) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            let _ = events.unbounded_send(GameEvent::Tick);
            schedule_tick(events);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use futures::executor::block_on;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use square_dodge::channel::{event_channel, render_queue, run_render_loop, run_update_loop};
    use square_dodge::input::{GameEvent, Key};
    use square_dodge::render::{Painter, Rgba};

    env_logger::init();
    log::info!("square dodge (native): headless demo session");

    // Painter that only counts redraws; there is no surface to draw on.
    struct Tally {
        paints: usize,
    }
    impl Painter for &mut Tally {
        fn clear(&mut self) {
            self.paints += 1;
        }
        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Rgba) {}
        fn set_font(&mut self, _: &str) {}
        fn text_lines(&mut self, _: &[&str], _: f32, _: f32, _: f32, _: Rgba) {}
    }

    let (events_tx, events_rx) = event_channel();
    let (frames_tx, frames_rx) = render_queue();

    // Scripted tape: start a session, let it run for ten seconds of ticks.
    events_tx
        .unbounded_send(GameEvent::KeyPress(Key::Enter))
        .unwrap();
    for _ in 0..600 {
        events_tx.unbounded_send(GameEvent::Tick).unwrap();
    }
    drop(events_tx);

    block_on(run_update_loop(
        events_rx,
        frames_tx,
        Pcg32::seed_from_u64(0x5D0D6E),
    ));

    let mut tally = Tally { paints: 0 };
    block_on(run_render_loop(frames_rx, &mut tally));

    println!("headless demo: {} frames painted", tally.paints);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
