use platform_host::SoundEffect;

use super::*;
use crate::content::{
    AboutSection, ContactLink, ExperienceItem, PortfolioTab, WindowContent, WindowContentKind,
};

#[component]
pub(super) fn WindowContentView(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    // Resolved once: mode-dependent parts subscribe on their own so tab state survives a toggle.
    let content = id.with_value(|window_id| runtime.resolve_content_untracked(window_id));

    view! { <div class="window-body-content">{content.map(render_content)}</div> }
}

fn render_content(content: WindowContent) -> View {
    match content {
        WindowContent::Portfolio {
            welcome,
            tabs,
            resume_url,
        } => {
            view! { <PortfolioTabs welcome=welcome tabs=tabs resume_url=resume_url /> }.into_view()
        }
        WindowContent::About(about) => render_about(about),
        WindowContent::Experience(items) => render_experience(items),
        WindowContent::Projects(_) => view! { <ProjectList /> }.into_view(),
        WindowContent::Contact(links) => render_contact(links),
    }
}

#[component]
fn PortfolioTabs(
    welcome: String,
    tabs: Vec<PortfolioTab>,
    resume_url: String,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = create_rw_signal(PortfolioTab::default());

    let select = move |tab: PortfolioTab| {
        runtime.host.get_value().play_sound(SoundEffect::Click);
        selected.set(tab);
    };

    view! {
        <div class="portfolio-tabs">
            <nav class="tab-strip" role="tablist">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                role="tab"
                                class="tab"
                                class:selected=move || selected.get() == tab
                                aria-selected=move || (selected.get() == tab).to_string()
                                on:click=move |_| select(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="tab-panel" role="tabpanel">
                {move || match selected.get().content_kind() {
                    None => {
                        view! {
                            <div class="portfolio-home">
                                <p>{welcome.clone()}</p>
                                <a
                                    class="resume-link"
                                    href=resume_url.clone()
                                    download=""
                                    on:click=move |_| {
                                        runtime.host.get_value().play_sound(SoundEffect::Click)
                                    }
                                >
                                    "Download Resume"
                                </a>
                                <ModeToggle />
                            </div>
                        }
                            .into_view()
                    }
                    Some(kind) => runtime
                        .resolve_content_untracked(&kind.window_id())
                        .map(render_content)
                        .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ModeToggle() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let mode = runtime.portfolio_mode;

    view! {
        <button class="mode-toggle" on:click=move |_| runtime.toggle_portfolio_mode()>
            {move || format!("Viewing: {} portfolio", mode.get().label())}
        </button>
    }
}

/// Project cards for the current portfolio mode.
#[component]
fn ProjectList() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let projects = move || {
        match runtime.resolve_content(&WindowContentKind::Projects.window_id()) {
            Some(WindowContent::Projects(projects)) => projects,
            _ => Vec::new(),
        }
    };

    view! {
        <div class="projects">
            <ModeToggle />
            <ul class="project-grid">
                {move || {
                    projects()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <li class="project-card">
                                    <h3>{project.title}</h3>
                                    <p>{project.summary}</p>
                                    <ul class="tags">
                                        {project
                                            .tags
                                            .into_iter()
                                            .map(|tag| view! { <li>{tag}</li> })
                                            .collect_view()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

fn render_about(about: AboutSection) -> View {
    view! {
        <article class="about">
            <h2>{about.headline}</h2>
            {about
                .paragraphs
                .into_iter()
                .map(|p| view! { <p>{p}</p> })
                .collect_view()}
            <ul class="skills">
                {about.skills.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
            </ul>
        </article>
    }
    .into_view()
}

fn render_experience(items: Vec<ExperienceItem>) -> View {
    view! {
        <ol class="experience">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="experience-item">
                            <h3>{item.title}</h3>
                            <p class="experience-meta">
                                {format!("{} | {}", item.company, item.period)}
                            </p>
                            <ul>
                                {item
                                    .description
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()}
                            </ul>
                            <p class="technologies">{item.technologies.join(", ")}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_view()
}

fn render_contact(links: Vec<ContactLink>) -> View {
    view! {
        <ul class="contact">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.href target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
