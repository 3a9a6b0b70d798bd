//! Runtime-effect dispatch for the desktop host boundary.

use leptos::SignalGetUntracked;

use crate::{
    host::DesktopHostContext, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::PlaySound(sound) => host.play_sound(sound),
        RuntimeEffect::PersistLayout => {
            host.persist_layout_snapshot(runtime.state.get_untracked())
        }
        RuntimeEffect::OpenDocument(url) => host.open_external_url(&url),
        RuntimeEffect::ShutDown => host.shut_down(),
    }
}
