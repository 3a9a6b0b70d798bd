use desktop_runtime::{CrtScreen, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PortfolioOS" />
        <Meta name="description" content="A portfolio presented as a retro desktop on a CRT monitor." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <CrtScreen>
                <DesktopShell />
            </CrtScreen>
        </DesktopProvider>
    }
}
