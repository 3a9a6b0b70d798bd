use super::*;
use crate::shell::StartMenuItem;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let bottom = runtime.config.with_value(|config| config.taskbar_height);

    view! {
        <Show when=move || state.get().show_start_menu fallback=|| ()>
            <div
                id="start-menu"
                class="start-menu"
                role="menu"
                style=format!("bottom:{bottom}px;")
            >
                <div class="start-menu-banner" aria-hidden="true">"PortfolioOS"</div>
                <ul class="start-menu-items">
                    {StartMenuItem::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <button
                                        role="menuitem"
                                        class="start-menu-item"
                                        data-icon=item.icon()
                                        on:click=move |_| {
                                            runtime
                                                .dispatch_action(DesktopAction::ActivateStartMenuItem {
                                                    item,
                                                })
                                        }
                                    >
                                        {item.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}
