//! Landing page

use crate::components::Header;
use crate::state::AppState;
use crate::types::PLANS;
use genie::routes;
use leptos::prelude::*;

/// Marketing page; rendered for everyone
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_auth = move || state.is_authenticated();

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <section class="flex-1 flex items-center justify-center px-4 py-16">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="mb-8 animate-fade-in">
                        <div class="w-24 h-24 mx-auto rounded-2xl bg-gradient-to-br from-indigo-500 via-violet-500 to-purple-600
                                    flex items-center justify-center text-5xl shadow-2xl shadow-violet-500/25">
                            "🧞"
                        </div>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-up">
                        <span class="gradient-text">"Genie"</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-slate-400 mb-4 animate-slide-up" style="animation-delay: 0.1s">
                        "Chatbots for your business, without the busywork"
                    </p>

                    <p class="text-lg text-slate-500 mb-12 max-w-2xl mx-auto animate-slide-up" style="animation-delay: 0.2s">
                        "Build a genie from your docs, drop it on your site, "
                        "and watch every conversation from one dashboard."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center animate-slide-up" style="animation-delay: 0.3s">
                        <Show
                            when=is_auth
                            fallback=move || view! {
                                <a
                                    href=routes::REGISTER
                                    class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 rounded-xl text-lg font-semibold
                                           transition-all hover:scale-105 hover:shadow-lg hover:shadow-indigo-500/25"
                                >
                                    "Get Started"
                                </a>
                            }
                        >
                            <a
                                href=routes::DASHBOARD
                                class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 rounded-xl text-lg font-semibold
                                       transition-all hover:scale-105 hover:shadow-lg hover:shadow-indigo-500/25"
                            >
                                "Open Dashboard"
                            </a>
                        </Show>

                        <a
                            href="#pricing"
                            class="px-8 py-4 bg-slate-800 hover:bg-slate-700 border border-slate-700
                                   rounded-xl text-lg font-semibold transition-all hover:scale-105"
                        >
                            "See Pricing"
                        </a>
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-slate-800/50">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"Everything in one place"</h2>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="⚡"
                            title="Minutes to launch"
                            description="Upload your content and get an embeddable genie right away"
                        />
                        <FeatureCard
                            icon="📈"
                            title="Analytics"
                            description="Conversation volume, response times and escalations at a glance"
                        />
                        <FeatureCard
                            icon="🔒"
                            title="Secure billing"
                            description="Pay by card, UPI or netbanking through a hosted checkout"
                        />
                    </div>
                </div>
            </section>

            <section id="pricing" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"Simple pricing"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {PLANS
                            .into_iter()
                            .map(|plan| view! {
                                <div class=if plan.highlighted { "card p-6 border-indigo-500" } else { "card p-6" }>
                                    <h3 class="text-lg font-semibold">{plan.name}</h3>
                                    <p class="text-3xl font-bold mt-2">
                                        {plan.price}
                                        <span class="text-base font-normal text-slate-400">{plan.period}</span>
                                    </p>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <footer class="py-8 px-4 border-t border-slate-800 text-center text-slate-500">
                <p>"Built with 🦀 Rust • © 2026 Genie"</p>
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-800 rounded-xl border border-slate-700 hover:border-slate-600 transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-slate-400">{description}</p>
        </div>
    }
}
