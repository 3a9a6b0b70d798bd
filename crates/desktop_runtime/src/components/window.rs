use super::*;
use crate::{
    components::content_view::WindowContentView,
    model::{WindowPosition, WindowSize},
    shell::window_title,
    window_manager::z_index_for,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline style of a window frame. Minimized windows stay mounted but hidden.
fn window_frame_style(
    position: WindowPosition,
    size: WindowSize,
    z_index: u32,
    minimized: bool,
) -> String {
    let display = if minimized { "display:none;" } else { "" };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{}",
        position.x, position.y, size.width, size.height, z_index, display
    )
}

fn window_frame_class(focused: bool, dragging: bool) -> String {
    let focused_class = if focused { " focused" } else { "" };
    let dragging_class = if dragging { " dragging" } else { "" };
    format!("desktop-window{focused_class}{dragging_class}")
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let title = window_title(&window_id);
    let size = runtime.config.with_value(|config| config.window_size);
    let id = store_value(window_id);

    // The frame is built once per id; only its attributes follow state, so content keeps its
    // own signals across focus, drag, and minimize.
    let frame = create_memo(move |_| {
        let state = runtime.state.get();
        id.with_value(|window_id| {
            state.window(window_id).map(|w| {
                (
                    w.position,
                    w.is_minimized,
                    z_index_for(&state, window_id),
                    state.is_active(window_id),
                )
            })
        })
    });
    let is_dragging = create_memo(move |_| {
        runtime
            .interaction
            .get()
            .dragging
            .is_some_and(|session| id.with_value(|window_id| &session.window_id == window_id))
    });

    let focus = move |_| {
        let is_active = frame.get_untracked().is_some_and(|(_, _, _, active)| active);
        if !is_active {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let minimize = move || {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        })
    };
    let close = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        })
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <section
            class=move || {
                let focused = frame.get().is_some_and(|(_, _, _, active)| active);
                window_frame_class(focused, is_dragging.get())
            }
            style=move || {
                frame
                    .get()
                    .map(|(position, minimized, z_index, _)| {
                        window_frame_style(position, size, z_index, minimized)
                    })
                    .unwrap_or_else(|| "display:none;".to_string())
            }
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            <header class="titlebar" on:pointerdown=begin_move>
                <div class="titlebar-title">{title}</div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        "_"
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowContentView window_id=id.get_value() />
            </div>
        </section>
    }
}
