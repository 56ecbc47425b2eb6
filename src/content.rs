use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("{section} entry {index} has an empty title")]
    EmptyTitle { section: &'static str, index: usize },
    #[error("Profile email is empty")]
    MissingEmail,
    #[error("Unsupported link target for {kind:?}: {href}")]
    InvalidLink { kind: LinkKind, href: String },
    #[error("Mission {index} emphasizes text missing from its description: {emphasis}")]
    MissingEmphasis { index: usize, emphasis: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Purple,
    Blue,
    Emerald,
}

// Tailwind only ships classes it can find verbatim in the source, so every
// variant spells out its full class names.
impl Accent {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Cyan => "bg-cyan-500/20 text-cyan-300",
            Self::Purple => "bg-purple-500/20 text-purple-300",
            Self::Blue => "bg-blue-500/20 text-blue-300",
            Self::Emerald => "bg-emerald-500/20 text-emerald-300",
        }
    }

    pub fn chip_class(self) -> &'static str {
        match self {
            Self::Cyan => {
                "bg-cyan-500/20 text-cyan-300 border-cyan-500/30 shadow-[0_0_10px_rgba(34,211,238,0.2)]"
            }
            Self::Purple => {
                "bg-purple-500/20 text-purple-300 border-purple-500/30 shadow-[0_0_10px_rgba(168,85,247,0.2)]"
            }
            Self::Blue => {
                "bg-blue-500/20 text-blue-300 border-blue-500/30 shadow-[0_0_10px_rgba(59,130,246,0.2)]"
            }
            Self::Emerald => {
                "bg-emerald-500/20 text-emerald-300 border-emerald-500/30 shadow-[0_0_10px_rgba(16,185,129,0.2)]"
            }
        }
    }

    pub fn glyph_class(self) -> &'static str {
        match self {
            Self::Cyan => "text-cyan-400 drop-shadow-[0_0_15px_rgba(34,211,238,0.5)]",
            Self::Purple => "text-purple-400 drop-shadow-[0_0_15px_rgba(168,85,247,0.5)]",
            Self::Blue => "text-blue-400 drop-shadow-[0_0_15px_rgba(59,130,246,0.5)]",
            Self::Emerald => "text-emerald-400 drop-shadow-[0_0_15px_rgba(16,185,129,0.5)]",
        }
    }

    pub fn emphasis_class(self) -> &'static str {
        match self {
            Self::Cyan => "text-cyan-200",
            Self::Purple => "text-purple-200",
            Self::Blue => "text-blue-200",
            Self::Emerald => "text-emerald-200",
        }
    }

    pub fn title_hover_class(self) -> &'static str {
        match self {
            Self::Cyan => "group-hover:text-cyan-100",
            Self::Purple => "group-hover:text-purple-100",
            Self::Blue => "group-hover:text-blue-100",
            Self::Emerald => "group-hover:text-emerald-100",
        }
    }

    pub fn link_hover_class(self) -> &'static str {
        match self {
            Self::Cyan => "hover:text-cyan-400",
            Self::Purple => "hover:text-purple-400",
            Self::Blue => "hover:text-blue-400",
            Self::Emerald => "hover:text-emerald-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Activity,
    Award,
    Book,
    Cpu,
    Database,
    Github,
    Globe,
    Layers,
    Linkedin,
    Lock,
    Mail,
    Radio,
    Server,
    Shield,
    Terminal,
}

impl Icon {
    pub const ALL: [Icon; 15] = [
        Icon::Activity,
        Icon::Award,
        Icon::Book,
        Icon::Cpu,
        Icon::Database,
        Icon::Github,
        Icon::Globe,
        Icon::Layers,
        Icon::Linkedin,
        Icon::Lock,
        Icon::Mail,
        Icon::Radio,
        Icon::Server,
        Icon::Shield,
        Icon::Terminal,
    ];

    /// Outline path data on a 24x24 grid, drawn with a 2px round stroke.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Self::Award => &[
                "M18 8a6 6 0 1 1-12 0a6 6 0 1 1 12 0z",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            Self::Book => &["M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"],
            Self::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2",
            ],
            Self::Database => &[
                "M21 5a9 3 0 1 1-18 0a9 3 0 1 1 18 0z",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Globe => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0z",
                "M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::Layers => &["M12 2 2 7l10 5 10-5-10-5z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0a2 2 0 1 1 4 0z",
            ],
            Self::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Radio => &[
                "M4.9 19.1C1 15.2 1 8.8 4.9 4.9",
                "M7.8 16.2c-2.3-2.3-2.3-6.1 0-8.5",
                "M14 12a2 2 0 1 1-4 0a2 2 0 1 1 4 0z",
                "M16.2 7.8c2.3 2.3 2.3 6.1 0 8.5",
                "M19.1 4.9C23 8.8 23 15.1 19.1 19",
            ],
            Self::Server => &[
                "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                "M6 6h.01M6 18h.01",
            ],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Self::Terminal => &["M4 17l6-6-6-6", "M12 19h8"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Email,
}

impl LinkKind {
    pub fn icon(self) -> Icon {
        match self {
            Self::Github => Icon::Github,
            Self::Linkedin => Icon::Linkedin,
            Self::Email => Icon::Mail,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub Profile",
            Self::Linkedin => "LinkedIn Profile",
            Self::Email => "Email",
        }
    }

    fn accepts(self, href: &str) -> bool {
        match self {
            Self::Email => href.len() > "mailto:".len() && href.starts_with("mailto:"),
            Self::Github | Self::Linkedin => {
                href.len() > "https://".len() && href.starts_with("https://")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub status: String,
    pub tagline: String,
    pub primary_role: String,
    pub secondary_role: String,
    pub email: String,
    pub inquiry_subject: String,
}

impl Profile {
    pub fn inquiry_href(&self) -> String {
        let subject = self.inquiry_subject.replace(' ', "%20");
        format!("mailto:{}?subject={subject}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub icon: Icon,
    pub accent: Accent,
    pub title: String,
    pub description: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub icon: Icon,
    pub accent: Accent,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub category: String,
    pub icon: Icon,
    pub accent: Accent,
    pub title: String,
    pub description: String,
    /// Phrase inside `description` rendered in the accent color.
    #[serde(default)]
    pub emphasis: Option<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub tags: Vec<String>,
}

impl Mission {
    /// Splits the description around the first occurrence of `emphasis`.
    pub fn description_parts(&self) -> (&str, Option<&str>, &str) {
        let text = self.description.as_str();
        let found = self
            .emphasis
            .as_deref()
            .filter(|e| !e.is_empty())
            .and_then(|e| text.find(e).map(|at| (at, e.len())));
        match found {
            Some((at, len)) => (&text[..at], Some(&text[at..at + len]), &text[at + len..]),
            None => (text, None, ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub accent: Accent,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub credentials: Vec<Credential>,
    pub missions: Vec<Mission>,
    pub contacts: Vec<ContactLink>,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(raw).map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.email.trim().is_empty() {
            return Err(ContentError::MissingEmail);
        }
        check_titles("skills", self.skills.iter().map(|s| s.title.as_str()))?;
        check_titles(
            "credentials",
            self.credentials.iter().map(|c| c.title.as_str()),
        )?;
        check_titles("missions", self.missions.iter().map(|m| m.title.as_str()))?;
        for (index, mission) in self.missions.iter().enumerate() {
            if let Some(emphasis) = &mission.emphasis {
                if mission.description_parts().1.is_none() {
                    return Err(ContentError::MissingEmphasis {
                        index,
                        emphasis: emphasis.clone(),
                    });
                }
            }
        }
        if let Some(link) = self.contacts.iter().find(|l| !l.kind.accepts(&l.href)) {
            return Err(ContentError::InvalidLink {
                kind: link.kind,
                href: link.href.clone(),
            });
        }
        Ok(())
    }
}

fn check_titles<'a>(
    section: &'static str,
    titles: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    titles
        .enumerate()
        .find(|(_, title)| title.trim().is_empty())
        .map_or(Ok(()), |(index, _)| {
            Err(ContentError::EmptyTitle { section, index })
        })
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::ParseError(e.to_string()))?;
    Portfolio::from_json(raw)
}

/// The embedded portfolio, parsed once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}
