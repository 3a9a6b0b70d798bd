//! Window content resolution.
//!
//! The window manager only knows ids. A [`ContentResolver`] turns an id into typed content for
//! the view layer; ids without a producer resolve to `None` and render an empty body.

use serde::{Deserialize, Serialize};

use crate::{model::WindowId, portfolio_mode::PortfolioMode, shell::RESUME_DOCUMENT_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowContentKind {
    Portfolio,
    About,
    Experience,
    Projects,
    Contact,
}

impl WindowContentKind {
    pub fn from_window_id(window_id: &WindowId) -> Option<Self> {
        match window_id.as_str() {
            "portfolio" => Some(Self::Portfolio),
            "about" => Some(Self::About),
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Window that hosts this content on its own.
    pub fn window_id(self) -> WindowId {
        WindowId::from(match self {
            Self::Portfolio => "portfolio",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        })
    }
}

/// Tabs inside the portfolio window, in strip order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioTab {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl PortfolioTab {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Standalone content shown under this tab; `Home` has its own welcome page.
    pub const fn content_kind(self) -> Option<WindowContentKind> {
        match self {
            Self::Home => None,
            Self::About => Some(WindowContentKind::About),
            Self::Experience => Some(WindowContentKind::Experience),
            Self::Projects => Some(WindowContentKind::Projects),
            Self::Contact => Some(WindowContentKind::Contact),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub summary: String,
    /// Category for art pieces, stack for software projects.
    pub tags: Vec<String>,
    pub mode: PortfolioMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    /// Tabbed overview hosting the other sections.
    Portfolio {
        welcome: String,
        tabs: Vec<PortfolioTab>,
        /// Résumé offered for download on the home tab.
        resume_url: String,
    },
    About(AboutSection),
    Experience(Vec<ExperienceItem>),
    Projects(Vec<ProjectItem>),
    Contact(Vec<ContactLink>),
}

/// Resolves a window id to the content it hosts.
pub trait ContentResolver {
    fn resolve(&self, window_id: &WindowId, mode: PortfolioMode) -> Option<WindowContent>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioCatalog {
    pub welcome: String,
    pub about: AboutSection,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub contact: Vec<ContactLink>,
}

impl PortfolioCatalog {
    pub fn content(&self, kind: WindowContentKind, mode: PortfolioMode) -> WindowContent {
        match kind {
            WindowContentKind::Portfolio => WindowContent::Portfolio {
                welcome: self.welcome.clone(),
                tabs: PortfolioTab::ALL.to_vec(),
                resume_url: RESUME_DOCUMENT_URL.to_string(),
            },
            WindowContentKind::About => WindowContent::About(self.about.clone()),
            WindowContentKind::Experience => WindowContent::Experience(self.experience.clone()),
            WindowContentKind::Projects => WindowContent::Projects(
                self.projects
                    .iter()
                    .filter(|p| p.mode == mode)
                    .cloned()
                    .collect(),
            ),
            WindowContentKind::Contact => WindowContent::Contact(self.contact.clone()),
        }
    }
}

impl ContentResolver for PortfolioCatalog {
    fn resolve(&self, window_id: &WindowId, mode: PortfolioMode) -> Option<WindowContent> {
        WindowContentKind::from_window_id(window_id).map(|kind| self.content(kind, mode))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioCatalog {
    fn default() -> Self {
        Self {
            welcome: "Welcome to my digital portfolio. Pick a tab to look around.".to_string(),
            about: AboutSection {
                headline: "Developer and digital artist".to_string(),
                paragraphs: strings(&[
                    "I build full-stack applications and interactive 3D experiences.",
                    "Outside of code I sketch, model, and fold paper.",
                ]),
                skills: strings(&["Rust", "TypeScript", "WebGL", "SQL", "Blender"]),
            },
            experience: vec![
                ExperienceItem {
                    title: "Software Engineering Intern".to_string(),
                    company: "Engineering consultancy".to_string(),
                    period: "2025 - Present".to_string(),
                    description: strings(&[
                        "Built a dimensional calculation and analysis tool",
                        "Added live tables that recompute from user input",
                        "Implemented PDF export and drag-and-drop schema building",
                    ]),
                    technologies: strings(&["ASP.NET", "Fabric.js", "SQL"]),
                },
                ExperienceItem {
                    title: "Software Developer Intern".to_string(),
                    company: "Software studio".to_string(),
                    period: "Summer 2024".to_string(),
                    description: strings(&["Shipped an interactive product configurator"]),
                    technologies: strings(&["Three.js", "React"]),
                },
            ],
            projects: vec![
                ProjectItem {
                    title: "EcoQuest RPG".to_string(),
                    summary: "Educational role-playing game about ecology.".to_string(),
                    tags: strings(&["Game", "Unity"]),
                    mode: PortfolioMode::Software,
                },
                ProjectItem {
                    title: "Sign Language Translator".to_string(),
                    summary: "Real-time sign recognition to text.".to_string(),
                    tags: strings(&["Computer vision", "Python"]),
                    mode: PortfolioMode::Software,
                },
                ProjectItem {
                    title: "Digital Landscape Series".to_string(),
                    summary: "Painted landscapes exploring light and fog.".to_string(),
                    tags: strings(&["Digital"]),
                    mode: PortfolioMode::Art,
                },
                ProjectItem {
                    title: "3D Character Design".to_string(),
                    summary: "Stylized characters modeled and textured end to end.".to_string(),
                    tags: strings(&["3D"]),
                    mode: PortfolioMode::Art,
                },
            ],
            contact: vec![
                ContactLink {
                    label: "Email".to_string(),
                    href: "mailto:hello@example.com".to_string(),
                },
                ContactLink {
                    label: "GitHub".to_string(),
                    href: "https://github.com/".to_string(),
                },
            ],
        }
    }
}
