use leptos::prelude::*;

use super::{IconGlyph, Section, TiltCard};
use crate::content::{Accent, Credential, Highlight, Icon, Mission, Skill};

const GLASS_CARD: &str = "bg-white/5 border border-white/10 rounded-3xl backdrop-blur-2xl shadow-[0_8px_32px_0_rgba(0,0,0,0.36)] group";

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-6 mb-12">
            <h2 class="text-4xl md:text-5xl font-bold text-white tracking-tight drop-shadow-lg">
                {title}
            </h2>
            <div class="h-px flex-1 bg-gradient-to-r from-white/20 to-transparent"></div>
        </div>
    }
}

#[component]
fn TagList(tags: &'static [String]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|t| {
                    view! {
                        <span class="text-xs font-bold px-3 py-1.5 rounded-lg bg-white/5 text-white/70 border border-white/10">
                            {t.as_str()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Skill or credential card body: icon badge, title, blurb and tags.
#[component]
fn InfoCard(
    badge_class: &'static str,
    icon: Icon,
    title: &'static str,
    description: &'static str,
    tags: &'static [String],
) -> impl IntoView {
    view! {
        <TiltCard class=format!("{GLASS_CARD} p-8")>
            <div class=format!(
                "w-14 h-14 rounded-2xl flex items-center justify-center mb-6 group-hover:scale-110 transition-transform duration-300 shadow-inner border border-white/5 {badge_class}",
            )>
                <IconGlyph icon class="w-7 h-7" />
            </div>
            <h3 class="text-2xl font-bold mb-2 text-white/90">{title}</h3>
            <p class="text-blue-100/60 mb-6 leading-relaxed">{description}</p>
            <TagList tags />
        </TiltCard>
    }
}

#[component]
pub fn SystemArsenal(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id=Section::Systems.id()>
            <SectionHeading title="System Arsenal" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <InfoCard
                                badge_class=skill.accent.badge_class()
                                icon=skill.icon
                                title=skill.title.as_str()
                                description=skill.description.as_str()
                                tags=skill.tools.as_slice()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Credentials(credentials: &'static [Credential]) -> impl IntoView {
    view! {
        <section id=Section::Credentials.id()>
            <SectionHeading title="Credentials" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {credentials
                    .iter()
                    .map(|cred| {
                        view! {
                            <InfoCard
                                badge_class=cred.accent.badge_class()
                                icon=cred.icon
                                title=cred.title.as_str()
                                description=cred.description.as_str()
                                tags=cred.tags.as_slice()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn MissionLogs(missions: &'static [Mission]) -> impl IntoView {
    view! {
        <section id=Section::Logs.id()>
            <SectionHeading title="Mission Logs" />
            <div class="grid grid-cols-1 gap-8">
                {missions.iter().map(|mission| view! { <MissionCard mission /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn MissionCard(mission: &'static Mission) -> impl IntoView {
    let accent = mission.accent;

    view! {
        <TiltCard class=format!("{GLASS_CARD} p-1")>
            <div class="bg-black/20 p-8 md:p-12 rounded-[22px] relative h-full">
                <div class="absolute top-0 right-0 p-8 opacity-20 group-hover:opacity-100 transition-opacity duration-500">
                    <IconGlyph
                        icon=mission.icon
                        class=format!("w-28 h-28 {}", accent.glyph_class())
                    />
                </div>

                <div class="flex flex-col md:flex-row gap-8 relative z-10">
                    <div class="space-y-6 flex-1">
                        <div class="flex items-center gap-3">
                            <span class=format!(
                                "px-3 py-1 border rounded-lg text-xs font-bold tracking-widest {}",
                                accent.chip_class(),
                            )>{mission.category.as_str()}</span>
                        </div>

                        <h3 class=format!(
                            "text-4xl md:text-5xl font-bold text-white transition-colors {}",
                            accent.title_hover_class(),
                        )>{mission.title.as_str()}</h3>

                        <MissionBrief mission />

                        {(!mission.highlights.is_empty())
                            .then(|| {
                                view! {
                                    <HighlightList highlights=mission.highlights.as_slice() accent />
                                }
                            })}

                        <div class="flex flex-wrap gap-3 pt-2">
                            {mission
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="text-xs px-3 py-1 bg-white/5 border border-white/10 rounded-full text-white/60">
                                            {tag.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </TiltCard>
    }
}

/// Mission description with its emphasized phrase, if any, set off in the accent color.
#[component]
fn MissionBrief(mission: &'static Mission) -> impl IntoView {
    let (before, emphasis, after) = mission.description_parts();
    view! {
        <p class="text-lg text-blue-100/70 leading-relaxed max-w-2xl">
            {before}
            {emphasis
                .map(|text| {
                    view! {
                        <span class=format!(
                            "font-semibold {}",
                            mission.accent.emphasis_class(),
                        )>{text}</span>
                    }
                })}
            {after}
        </p>
    }
}

#[component]
fn HighlightList(highlights: &'static [Highlight], accent: Accent) -> impl IntoView {
    view! {
        <ul class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm text-white/60 font-medium">
            {highlights
                .iter()
                .map(|h| {
                    view! {
                        <li class="flex items-center gap-3">
                            <IconGlyph
                                icon=h.icon
                                class=format!("w-4 h-4 shrink-0 {}", accent.glyph_class())
                            />
                            {h.text.as_str()}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_mission_emphasis_is_highlighted() {
        let mission = &content::portfolio()
            .expect("embedded portfolio should load")
            .missions[0];
        let html = Owner::new().with(|| view! { <MissionBrief mission /> }.to_html());
        assert!(html.contains(
            "<span class=\"font-semibold text-cyan-200\">Pentesting &amp; SIEM simulations</span>"
        ));
    }

    #[test]
    fn test_info_card_draws_its_icon() {
        let html = Owner::new().with(|| {
            view! {
                <InfoCard
                    badge_class="b"
                    icon=Icon::Shield
                    title="t"
                    description="d"
                    tags=&[]
                />
            }
            .to_html()
        });
        assert!(html.contains("<svg"));
        assert!(html.contains(Icon::Shield.paths()[0]));
    }
}
