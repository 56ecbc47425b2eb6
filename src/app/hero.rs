use leptos::prelude::*;

use super::{IconGlyph, Section};
use crate::content::{Icon, Profile};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id=Section::Profile.id() class="min-h-[70vh] flex flex-col justify-center relative">
            <div class="space-y-8 relative text-center md:text-left">
                <div class="inline-flex items-center gap-3 px-4 py-2 rounded-full border border-white/10 bg-white/5 backdrop-blur-md text-cyan-300 text-xs font-mono tracking-widest shadow-lg">
                    <span class="relative flex h-2 w-2">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-cyan-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2 w-2 bg-cyan-500"></span>
                    </span>
                    {profile.status.as_str()}
                </div>

                <h1 class="text-7xl md:text-9xl font-black tracking-tighter text-transparent bg-clip-text bg-gradient-to-br from-white via-white to-white/40 drop-shadow-2xl">
                    {profile.name.as_str()}
                </h1>

                <p class="text-xl md:text-2xl text-blue-100/80 max-w-2xl font-light leading-relaxed mx-auto md:mx-0">
                    {profile.tagline.as_str()}
                    <br />
                    <span class="text-cyan-400 font-semibold drop-shadow-[0_0_15px_rgba(34,211,238,0.3)]">
                        {profile.primary_role.as_str()}
                    </span>
                    " & "
                    <span class="text-purple-400 font-semibold drop-shadow-[0_0_15px_rgba(168,85,247,0.3)]">
                        {profile.secondary_role.as_str()}
                    </span>
                    "."
                </p>

                <div class="flex flex-wrap gap-4 justify-center md:justify-start pt-6">
                    <a
                        href=Section::Logs.href()
                        class="px-8 py-4 bg-cyan-500/10 hover:bg-cyan-500/20 text-cyan-400 border border-cyan-500/30 backdrop-blur-md rounded-xl font-bold transition-all hover:scale-105 hover:shadow-[0_0_30px_rgba(34,211,238,0.2)] flex items-center gap-2"
                    >
                        <IconGlyph icon=Icon::Terminal class="w-5 h-5" />
                        "View Operations"
                    </a>
                    <a
                        href=profile.inquiry_href()
                        class="px-8 py-4 bg-white/5 hover:bg-white/10 text-white border border-white/10 backdrop-blur-md rounded-xl font-bold transition-all hover:scale-105 flex items-center gap-2"
                    >
                        <IconGlyph icon=Icon::Mail class="w-5 h-5" />
                        "Secure Comms"
                    </a>
                </div>
            </div>
        </section>
    }
}
