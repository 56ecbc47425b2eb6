use leptos::prelude::*;

use super::{IconGlyph, Section};
use crate::content::{ContactLink, Profile};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Uplink(profile: &'static Profile, contacts: &'static [ContactLink]) -> impl IntoView {
    view! {
        <section id=Section::Uplink.id() class="py-20 border-t border-white/10 text-center">
            <div class="inline-block p-8 rounded-3xl bg-white/5 border border-white/10 backdrop-blur-xl">
                <h2 class="text-2xl font-bold mb-8 text-white">"Secure Uplink Available"</h2>
                <div class="flex justify-center gap-6 mb-8">
                    {contacts
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.kind.label()
                                    class=format!(
                                        "p-4 bg-white/5 rounded-2xl hover:bg-white/10 transition-all hover:scale-110 shadow-lg border border-white/5{}",
                                        link.accent.link_hover_class(),
                                    )
                                >
                                    <IconGlyph icon=link.kind.icon() class="w-6 h-6" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-white/40 font-mono text-sm tracking-widest">
                    {format!("© {BUILD_YEAR} {}", profile.name)}
                </p>
            </div>
        </section>
    }
}
