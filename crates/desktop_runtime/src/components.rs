//! Desktop shell UI composition and interaction surfaces.

mod boot_screen;
mod content_view;
mod crt_screen;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use self::{start_menu::StartMenu, taskbar::Taskbar, window::DesktopWindow};

pub use self::crt_screen::CrtScreen;
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

use crate::{
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
    shell::DESKTOP_ICONS,
};

#[component]
/// Renders the desktop surface: icons, managed windows, start menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // A fast pointer leaves the title bar mid-drag; track it on the window.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        runtime.move_pointer(pointer_from_pointer_event(&ev));
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| end_active_drag(runtime));
    let cancel_listener =
        window_event_listener(ev::pointercancel, move |_| end_active_drag(runtime));
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport_size();
        runtime.dispatch_action(DesktopAction::ViewportResized { viewport });
    });
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
        resize_listener.remove();
    });

    let window_ids = create_memo(move |_| {
        state
            .get()
            .windows
            .iter()
            .map(|w| w.id.clone())
            .collect::<Vec<_>>()
    });

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <div
                class="desktop-surface"
                on:mousedown=move |_| {
                    if state.get_untracked().show_start_menu {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
            >
                <div class="desktop-icons" role="list">
                    {DESKTOP_ICONS
                        .iter()
                        .map(|icon| {
                            let window_id = WindowId::from(icon.window_id);
                            view! {
                                <button
                                    class="desktop-icon"
                                    role="listitem"
                                    data-icon=icon.icon
                                    on:click=move |_| runtime.open_window(window_id.clone())
                                >
                                    <span class="desktop-icon-glyph" aria-hidden="true"></span>
                                    <span class="desktop-icon-label">{icon.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="desktop-window-layer">
                    <For
                        each=move || window_ids.get()
                        key=|window_id| window_id.clone()
                        children=move |window_id| view! { <DesktopWindow window_id=window_id /> }
                    />
                </div>
            </div>
            <StartMenu />
            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}

fn end_active_drag(runtime: DesktopRuntimeContext) {
    if runtime.interaction.get_untracked().is_dragging() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
}
