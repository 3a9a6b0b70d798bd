use std::time::Duration;

use platform_host::SoundEffect;

use super::{boot_screen::BootScreen, *};
use crate::{
    presentation::{CameraRig, PresentationEvent, PresentationPhase, ZoomTrigger},
    schedule::{schedule_once, schedule_repeating, ScheduledTask},
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const BOOT_FADE: Duration = Duration::from_millis(800);
/// Screen-space pixels per camera unit of parallax.
const PARALLAX_PX: f32 = 40.0;

#[component]
/// Monitor scene: boot overlay, camera zoom, and the desktop rendered on the screen.
pub fn CrtScreen(children: Children) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let presentation = runtime.presentation;
    let config = runtime.presentation_config.get_value();

    let boot_overlay = create_rw_signal(true);
    let boot_fade = store_value(None::<ScheduledTask>);
    let pointer = create_rw_signal((0.0_f32, 0.0_f32));
    let camera = store_value(CameraRig::default());
    let camera_position = create_rw_signal(CameraRig::default().position);

    let on_boot_done = Callback::new(move |()| {
        if runtime.dispatch_presentation(PresentationEvent::BootCompleted) {
            runtime.host.get_value().play_sound(SoundEffect::Startup);
        }
        boot_fade.set_value(schedule_once(BOOT_FADE, move || boot_overlay.set(false)));
    });

    let frames = schedule_repeating(FRAME_INTERVAL, move || {
        let state = presentation.get_untracked();
        if state.phase == PresentationPhase::Booting {
            return;
        }
        let mut rig = camera.get_value();
        let settled = rig.step(&config, &state, pointer.get_untracked());
        camera.set_value(rig);
        camera_position.set(rig.position);
        if let Some(event) = settled {
            runtime.dispatch_presentation(event);
        }
    });

    let pointer_listener = window_event_listener(ev::mousemove, move |ev| {
        let viewport = runtime.host.get_value().viewport_size();
        if viewport.width <= 0 || viewport.height <= 0 {
            return;
        }
        let x = ev.client_x() as f32 / viewport.width as f32 * 2.0 - 1.0;
        let y = 1.0 - ev.client_y() as f32 / viewport.height as f32 * 2.0;
        pointer.set((x, y));
    });
    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let booting = presentation.get_untracked().phase == PresentationPhase::Booting;
        if booting || ev.default_prevented() {
            return;
        }
        let event = if ev.key() == "Escape" {
            PresentationEvent::Cancel
        } else {
            PresentationEvent::KeyPressed
        };
        runtime.dispatch_presentation(event);
    });
    on_cleanup(move || {
        drop(frames);
        let _ = boot_fade.try_update_value(|task| task.take());
        pointer_listener.remove();
        key_listener.remove();
    });

    let scene_style = move || {
        let position = camera_position.get();
        let scale = 10.0 / position.z.max(0.1);
        format!(
            "transform:scale({:.4}) translate({:.1}px,{:.1}px);",
            scale,
            -position.x * PARALLAX_PX,
            position.y * PARALLAX_PX
        )
    };
    let prompt = match config.trigger {
        ZoomTrigger::ClickOutside => "Click to zoom in • ESC to zoom out",
        ZoomTrigger::AnyKey => "Press any key to zoom in • ESC to zoom out",
    };

    view! {
        <div
            class="crt-scene"
            data-phase=move || format!("{:?}", presentation.get().phase).to_lowercase()
            on:click=move |_| {
                runtime.dispatch_presentation(PresentationEvent::ClickOutsideScreen);
            }
        >
            <div class="crt-camera" style=scene_style>
                <div
                    class="crt-monitor"
                    class:zoomed-in=move || presentation.get().phase == PresentationPhase::ZoomedIn
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_presentation(PresentationEvent::ClickInsideScreen);
                    }
                >
                    <div
                        class="crt-screen"
                        on:click=move |ev| ev.stop_propagation()
                        on:mouseenter=move |_| {
                            runtime.dispatch_presentation(PresentationEvent::ScreenHover(true));
                        }
                        on:mouseleave=move |_| {
                            runtime.dispatch_presentation(PresentationEvent::ScreenHover(false));
                        }
                    >
                        {children()}
                    </div>
                </div>
            </div>
            <Show
                when=move || {
                    presentation.get().phase == PresentationPhase::Waiting && !boot_overlay.get()
                }
                fallback=|| ()
            >
                <div class="zoom-prompt">{prompt}</div>
            </Show>
            <Show when=move || boot_overlay.get() fallback=|| ()>
                <div
                    class="boot-overlay"
                    class:fading=move || presentation.get().phase != PresentationPhase::Booting
                    on:click=move |ev| ev.stop_propagation()
                >
                    <BootScreen on_done=on_boot_done />
                </div>
            </Show>
        </div>
    }
}
