use super::*;
use crate::{
    boot_sequence::{is_confirm_key, BootPhase, BootSequence, BootSequenceConfig, CONTINUE_PROMPT},
    schedule::schedule_repeating,
};

#[component]
pub(super) fn BootScreen(
    /// Called once, when the user confirms the finished boot text.
    on_done: Callback<()>,
    #[prop(optional)] config: Option<BootSequenceConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let sequence = create_rw_signal(BootSequence::new(&config));

    let typing = schedule_repeating(config.type_interval, move || {
        if sequence.with_untracked(|s| s.phase() == BootPhase::Typing) {
            sequence.update(BootSequence::tick);
        }
    });
    let cursor = schedule_repeating(config.cursor_interval, move || {
        sequence.update(BootSequence::blink);
    });
    on_cleanup(move || {
        drop(typing);
        drop(cursor);
    });

    let confirm = move || {
        let mut next = sequence.get_untracked();
        if next.confirm() {
            sequence.set(next);
            on_done.call(());
        }
    };

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if is_confirm_key(&ev.key()) {
            ev.prevent_default();
            confirm();
        }
    });
    on_cleanup(move || key_listener.remove());

    view! {
        <div class="boot-screen" role="log" aria-live="polite" on:click=move |_| confirm()>
            <pre class="boot-text">
                {move || {
                    sequence
                        .with(|s| s.finished_lines())
                        .into_iter()
                        .map(|line| view! { <div class="boot-line">{line}</div> })
                        .collect_view()
                }}
                <div class="boot-line current">
                    {move || sequence.with(|s| s.current_line())}
                    <span
                        class="boot-cursor"
                        class:hidden=move || !sequence.with(|s| s.cursor_visible())
                    >
                        "_"
                    </span>
                </div>
            </pre>
            <Show
                when=move || sequence.with(|s| s.phase() == BootPhase::AwaitingConfirmation)
                fallback=|| ()
            >
                <p class="boot-prompt">{CONTINUE_PROMPT}</p>
            </Show>
        </div>
    }
}
