mod background;
mod hero;
mod icon;
mod sections;
mod tilt_card;
mod uplink;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, ContentError};

pub use background::{track_pointer, use_pointer_tracker, ParallaxBackground};
pub use icon::IconGlyph;
pub use tilt_card::TiltCard;

use hero::Hero;
use sections::{Credentials, MissionLogs, SystemArsenal};
use uplink::Uplink;

/// Page sections in navigation order; ids double as anchor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Systems,
    Credentials,
    Logs,
    Uplink,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Profile,
        Section::Systems,
        Section::Credentials,
        Section::Logs,
        Section::Uplink,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Systems => "systems",
            Self::Credentials => "credentials",
            Self::Logs => "logs",
            Self::Uplink => "uplink",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "PROFILE",
            Self::Systems => "SYSTEMS",
            Self::Credentials => "CREDENTIALS",
            Self::Logs => "LOGS",
            Self::Uplink => "UPLINK",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub const FAVICON: &str = "/favicon.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let pointer = use_pointer_tracker();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />
        <div class="min-h-screen bg-[#050505] text-white font-sans overflow-x-hidden selection:bg-cyan-500/30 selection:text-cyan-100">
            <ParallaxBackground pointer />
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </Router>
        </div>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match content::portfolio() {
        Ok(portfolio) => Either::Left(view! {
            <Title text=portfolio.profile.name.clone() />
            <Nav handle=portfolio.profile.handle.as_str() />
            <main class="relative z-10 pt-32 px-6 max-w-7xl mx-auto space-y-32">
                <Hero profile={&portfolio.profile} />
                <SystemArsenal skills=portfolio.skills.as_slice() />
                <Credentials credentials=portfolio.credentials.as_slice() />
                <MissionLogs missions=portfolio.missions.as_slice() />
                <Uplink profile={&portfolio.profile} contacts=portfolio.contacts.as_slice() />
            </main>
        }),
        Err(err) => {
            log::error!("couldn't load portfolio content: {err}");
            Either::Right(view! { <ContentUnavailable err /> })
        }
    }
}

#[component]
fn Nav(handle: &'static str) -> impl IntoView {
    view! {
        <nav class="fixed top-6 left-1/2 -translate-x-1/2 w-[90%] max-w-5xl z-50 rounded-2xl border border-white/10 bg-white/5 backdrop-blur-xl shadow-[0_8px_32px_0_rgba(0,0,0,0.36)]">
            <div class="px-6 h-14 flex items-center justify-between">
                <div class="flex items-center gap-2 font-bold text-lg tracking-wider">
                    <span class="text-cyan-400 drop-shadow-[0_0_10px_rgba(34,211,238,0.5)]">
                        "◆"
                    </span>
                    <span class="text-white/90">{handle}</span>
                </div>
                <div class="hidden md:flex gap-8 text-xs font-bold tracking-widest text-white/60">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="hover:text-cyan-400 transition-colors hover:drop-shadow-[0_0_8px_rgba(34,211,238,0.8)]"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Offline" />
        <main class="relative z-10 pt-32 px-6 max-w-3xl mx-auto">
            <div class="p-8 rounded-3xl bg-white/5 border border-red-500/30 backdrop-blur-xl">
                <h1 class="text-2xl font-bold mb-4 text-red-300">"Transmission corrupted"</h1>
                <pre class="whitespace-pre-wrap text-sm text-white/60 font-mono">
                    {err.to_string()}
                </pre>
            </div>
        </main>
    }
}
