use std::time::Duration;

use platform_host::local_clock_time;

use super::*;
use crate::{clock::ClockDisplay, schedule::schedule_repeating, shell::taskbar_entries};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let height = runtime.config.with_value(|config| config.taskbar_height);

    let clock = create_rw_signal({
        let mut display = ClockDisplay::default();
        display.update(local_clock_time());
        display
    });
    if let Some(tick) = schedule_repeating(Duration::from_secs(1), move || {
        let mut display = clock.get_untracked();
        if display.update(local_clock_time()) {
            clock.set(display);
        }
    }) {
        on_cleanup(move || tick.cancel());
    }

    let entries = create_memo(move |_| taskbar_entries(&state.get()));

    view! {
        <footer class="taskbar" role="toolbar" style=format!("height:{height}px;")>
            <button
                class="start-button"
                class:active=move || state.get().show_start_menu
                aria-haspopup="menu"
                aria-expanded=move || state.get().show_start_menu.to_string()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                "Start"
            </button>
            <div class="taskbar-windows">
                <For
                    each=move || entries.get()
                    key=|entry| entry.window_id.clone()
                    children=move |entry| {
                        let window_id = entry.window_id;
                        view! {
                            <button
                                class="taskbar-window-button"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::RestoreWindow {
                                        window_id: window_id.clone(),
                                    })
                                }
                            >
                                {entry.title}
                            </button>
                        }
                    }
                />
            </div>
            <time class="taskbar-clock" aria-live="off">
                {move || clock.with(|display| display.label().to_string())}
            </time>
        </footer>
    }
}
