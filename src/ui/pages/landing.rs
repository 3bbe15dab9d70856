//! Landing page component
//!
//! The marketing page for Launchpad:
//! - SEO meta tags
//! - Header with mobile menu
//! - Hero with the market analysis form and a typewriter placeholder
//! - Feature grid
//! - Product video embed
//! - Pricing tiers with a monthly/yearly toggle
//! - FAQ accordion (one item open at a time)
//! - Call-to-action and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::{
    AccordionState, BillingPeriod, FaqEntry, MarketQuery, PricingTier, Region, TypewriterConfig,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::logo::{Logo, PRODUCT_NAME};
use crate::ui::typewriter::use_typewriter;

/// Example ideas cycled through the hero idea box
const HERO_PHRASES: &[&str] = &[
    "AI-powered coffee shop in San Francisco",
    "Sustainable fashion brand in London",
    "Co-working app for remote teams",
    "Eco-friendly meal delivery service",
    "Online course platform for nurses",
];

const DEMO_VIDEO_URL: &str = "https://player.vimeo.com/video/76979871";

const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        description: "For founders testing their first ideas",
        monthly_price: 0,
        features: &[
            "3 market reports per month",
            "Country-level insights",
            "Community support",
        ],
        cta_text: "Get started",
        cta_href: "/signup",
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        description: "For teams validating ideas every week",
        monthly_price: 29,
        features: &[
            "Unlimited market reports",
            "City-level insights",
            "Competitor tracking",
            "Email support",
        ],
        cta_text: "Start free trial",
        cta_href: "/signup",
        highlighted: true,
    },
    PricingTier {
        name: "Business",
        description: "For organizations with advanced needs",
        monthly_price: 99,
        features: &[
            "Everything in Pro",
            "Custom data sources",
            "SSO & audit logs",
            "Dedicated research analyst",
        ],
        cta_text: "Contact sales",
        cta_href: "/signup",
        highlighted: false,
    },
];

const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry::new(
        "How does Launchpad analyze a market?",
        "Launchpad combines market trends, consumer behavior, the competitive landscape and economic indicators for the location you pick, then summarizes the opportunity for your idea.",
    ),
    FaqEntry::new(
        "Is my business idea kept private?",
        "Yes. Ideas and reports are encrypted in transit and at rest, and are never shared without your explicit consent.",
    ),
    FaqEntry::new(
        "Can I customize a report?",
        "You can focus a report on specific industries, regions and business parameters, and save the setup for your next idea.",
    ),
    FaqEntry::new(
        "How quickly do I get results?",
        "Most reports are ready within minutes, compared to the weeks a traditional market study takes.",
    ),
    FaqEntry::new(
        "Do I need a research background?",
        "Not at all. Describe your idea in plain language and Launchpad does the rest.",
    ),
    FaqEntry::new(
        "Can I change plans later?",
        "You can upgrade, downgrade or cancel at any time. Yearly plans are billed for ten months and include the remaining two for free.",
    ),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white dark:bg-slate-950 overflow-x-hidden">
            <Header />
            <HeroSection />
            <FeaturesSection />
            <VideoSection />
            <PricingSection />
            <FaqSection />

            // CTA Section
            <section class="py-24 px-4 bg-gradient-to-b from-transparent to-indigo-50 dark:to-slate-900">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                        "Ready to test your next idea?"
                    </h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300 mb-8 max-w-xl mx-auto">
                        "Join thousands of founders making smarter launch decisions with Launchpad."
                    </p>
                    <A href="/signup" attr:class="lp-btn-primary">"Get Started Free"</A>
                </div>
            </section>

            <Footer />
        </div>
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let description = "Launchpad turns a business idea into an instant market snapshot. Pick a location, get the numbers and decide faster.";

    view! {
        <Title text=format!("{} - Market research for new business ideas", PRODUCT_NAME) />
        <Meta name="description" content=description />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=format!("{} - Market research for new business ideas", PRODUCT_NAME) />
        <Meta property="og:description" content=description />
        <Meta property="twitter:card" content="summary_large_image" />
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    let nav_links = [
        ("#features", "Features"),
        ("#pricing", "Pricing"),
        ("#faq", "FAQ"),
    ];

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md
                       border-b border-slate-200/50 dark:border-slate-800/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <Logo />

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {nav_links.into_iter().map(|(href, label)| view! {
                            <a href=href class="text-sm font-medium text-slate-600 hover:text-slate-900
                                               dark:text-slate-300 dark:hover:text-white transition-colors">
                                {label}
                            </a>
                        }).collect_view()}
                        <A href="/signin" attr:class="text-sm font-medium text-slate-600 hover:text-slate-900
                                                       dark:text-slate-300 dark:hover:text-white transition-colors">
                            "Sign In"
                        </A>
                        <A href="/signup" attr:class="px-4 py-2 text-sm font-medium text-white bg-indigo-600
                                                       hover:bg-indigo-500 rounded-lg transition-colors shadow-md">
                            "Sign Up"
                        </A>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-slate-200/50 dark:border-slate-800/50">
                        {nav_links.into_iter().map(|(href, label)| view! {
                            <a
                                href=href
                                class="block px-4 py-2 text-sm font-medium text-slate-600 dark:text-slate-300
                                       hover:bg-slate-100 dark:hover:bg-slate-800 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                        <A href="/signin" attr:class="lp-btn-secondary text-center">"Sign In"</A>
                        <A href="/signup" attr:class="lp-btn-primary text-center">"Sign Up"</A>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Hero with the market analysis form. The idea box placeholder types
/// example business ideas.
#[component]
fn HeroSection() -> impl IntoView {
    let placeholder = use_typewriter(HERO_PHRASES, TypewriterConfig::default());
    let idea = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = MarketQuery::new(&idea.get(), &location.get());
        leptos::logging::log!("analyzing market: {}", query);
    };

    view! {
        <section class="min-h-screen flex items-center relative pt-24 pb-12">
            <div class="max-w-7xl mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <div class="text-left">
                    <span class="inline-flex items-center gap-2 px-4 py-2 mb-6 rounded-full bg-indigo-500/10 lp-fade-in-up">
                        <span class="font-semibold text-indigo-600">"New"</span>
                        <span class="text-sm text-slate-600 dark:text-slate-300">"Validate an idea before you build it"</span>
                    </span>
                    <h1 class="text-5xl sm:text-6xl font-bold text-slate-900 dark:text-white mb-6
                               tracking-tight lp-fade-in-up">
                        "Know your market"
                        <br />
                        <span class="text-indigo-600">"before you launch."</span>
                    </h1>
                    <p class="text-xl text-slate-600 dark:text-slate-300 max-w-xl mb-10
                              leading-relaxed lp-fade-in-up lp-delay-200">
                        "Describe your business idea, pick a market and Launchpad sizes the opportunity for you."
                    </p>
                    <div class="flex flex-wrap gap-4 lp-fade-in-up lp-delay-400">
                        <A href="/signup" attr:class="lp-btn-primary inline-flex items-center gap-2">
                            "Start for free"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4 invert" />
                        </A>
                        <a href="#demo" class="lp-btn-secondary">"Watch the demo"</a>
                    </div>
                </div>

                <form
                    on:submit=on_submit
                    class="p-8 bg-white dark:bg-slate-900 rounded-2xl border border-slate-200 dark:border-slate-800
                           shadow-xl space-y-4 lp-fade-in-up lp-delay-400"
                >
                    <label for="business-idea" class="sr-only">"Business idea"</label>
                    <textarea
                        id="business-idea"
                        rows="5"
                        class="lp-input resize-none"
                        placeholder=move || placeholder.get()
                        prop:value=move || idea.get()
                        on:input=move |ev| idea.set(event_target_value(&ev))
                    ></textarea>

                    <div class="relative">
                        <label for="market-location" class="sr-only">"Target market"</label>
                        <Icon name=icons::MAP_PIN class="absolute left-3 top-1/2 -translate-y-1/2 w-5 h-5 opacity-60" />
                        <select
                            id="market-location"
                            class="lp-input pl-10 appearance-none"
                            prop:value=move || location.get()
                            on:change=move |ev| location.set(event_target_value(&ev))
                        >
                            <option value="">"Select location"</option>
                            {Region::ALL.into_iter().map(|region| view! {
                                <option value=region.code()>{region.label()}</option>
                            }).collect_view()}
                        </select>
                        <Icon
                            name=icons::CHEVRON_DOWN
                            class="absolute right-3 top-1/2 -translate-y-1/2 w-5 h-5 opacity-60 pointer-events-none"
                        />
                    </div>

                    <button type="submit" class="lp-btn-primary w-full inline-flex items-center justify-center gap-2">
                        <Icon name=icons::CHART class="w-5 h-5 invert" />
                        "Analyze market"
                    </button>

                    <ol class="pt-2 space-y-1 text-sm text-slate-500 list-decimal list-inside">
                        <li>"Describe your business idea"</li>
                        <li>"Select your target market"</li>
                        <li>"Get an instant market snapshot"</li>
                    </ol>
                </form>
            </div>

            // Background decoration
            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-indigo-500/10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-sky-500/10 rounded-full blur-3xl"></div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 bg-slate-50 dark:bg-slate-900/40">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                        "Everything you need to size a market"
                    </h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto">
                        "From a napkin idea to a go-to-market plan, Launchpad does the research for you."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon=icons::ZAP
                        title="Instant reports"
                        description="Get a market snapshot in minutes instead of weeks of desk research."
                    />
                    <FeatureCard
                        icon=icons::PLUG
                        title="Live data sources"
                        description="Trends, demographics and competitor data pulled together for every report."
                    />
                    <FeatureCard
                        icon=icons::USERS
                        title="Built for teams"
                        description="Share reports, comment on findings and keep co-founders on the same page."
                    />
                    <FeatureCard
                        icon=icons::CHART
                        title="Demand forecasts"
                        description="See how demand for your idea is trending and where it is growing fastest."
                    />
                    <FeatureCard
                        icon=icons::CLOCK
                        title="Market watch"
                        description="Re-run a report weekly and get notified when your market shifts."
                    />
                    <FeatureCard
                        icon=icons::SHIELD
                        title="Secure by default"
                        description="Your ideas stay yours: encryption everywhere and full audit trails."
                    />
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-slate-900 p-6 rounded-xl border border-slate-200 dark:border-slate-800
                    hover:border-indigo-400 transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-indigo-500/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-slate-900 dark:text-white mb-2">{title}</h3>
            <p class="text-slate-600 dark:text-slate-300 text-sm leading-relaxed">{description}</p>
        </div>
    }
}

#[component]
fn VideoSection() -> impl IntoView {
    view! {
        <section id="demo" class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                        "See it in action"
                    </h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300">
                        "Two minutes from idea to market report."
                    </p>
                </div>
                <div class="relative aspect-video rounded-2xl overflow-hidden shadow-2xl border border-slate-200 dark:border-slate-800">
                    <iframe
                        class="absolute inset-0 w-full h-full"
                        src=DEMO_VIDEO_URL
                        title="Launchpad product demo"
                        {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        allow="autoplay; fullscreen; picture-in-picture"
                        allowfullscreen
                    ></iframe>
                </div>
            </div>
        </section>
    }
}

/// Pricing section with a monthly/yearly toggle
#[component]
fn PricingSection() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::Monthly);

    view! {
        <section id="pricing" class="py-20 px-4 bg-slate-50 dark:bg-slate-900/40">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                        "Simple, Transparent Pricing"
                    </h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto">
                        "Start for free. Upgrade when you need more power."
                    </p>
                </div>

                // Billing toggle
                <div class="flex items-center justify-center gap-3 mb-12">
                    <span
                        class="text-sm font-medium"
                        class:text-slate-400=move || period.get() == BillingPeriod::Yearly
                    >
                        "Monthly"
                    </span>
                    <button
                        type="button"
                        role="switch"
                        class="relative w-12 h-6 rounded-full bg-slate-300 dark:bg-slate-700 transition-colors"
                        class:bg-indigo-600=move || period.get() == BillingPeriod::Yearly
                        aria-checked=move || (period.get() == BillingPeriod::Yearly).to_string()
                        aria-label="Bill yearly"
                        on:click=move |_| period.update(|p| *p = p.toggled())
                    >
                        <span
                            class="absolute top-0.5 left-0.5 w-5 h-5 bg-white rounded-full shadow transition-transform"
                            class:translate-x-6=move || period.get() == BillingPeriod::Yearly
                        ></span>
                    </button>
                    <span
                        class="text-sm font-medium"
                        class:text-slate-400=move || period.get() == BillingPeriod::Monthly
                    >
                        "Yearly "
                        <span class="text-green-600">"(2 months free)"</span>
                    </span>
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {PRICING_TIERS
                        .into_iter()
                        .map(|tier| view! { <PricingCard tier=tier period=period.read_only() /> })
                        .collect_view()}
                </div>

                <p class="text-center text-slate-500 text-sm mt-8">
                    "All paid plans include a 14-day free trial."
                </p>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(tier: PricingTier, period: ReadSignal<BillingPeriod>) -> impl IntoView {
    let card_class = if tier.highlighted {
        "relative bg-white dark:bg-slate-900 p-8 rounded-2xl border-2 border-indigo-600 shadow-xl md:scale-105"
    } else {
        "bg-white dark:bg-slate-900 p-8 rounded-2xl border border-slate-200 dark:border-slate-800"
    };

    let period_label = move || {
        if tier.monthly_price == 0 {
            "forever"
        } else {
            period.get().suffix()
        }
    };

    view! {
        <div class=card_class>
            {tier.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-indigo-600 text-white
                            text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{tier.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-slate-900 dark:text-white">
                        {move || tier.price_label(period.get())}
                    </span>
                    <span class="text-slate-500">{period_label}</span>
                </div>
                <p class="text-sm text-slate-600 dark:text-slate-300 mt-2">{tier.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {tier.features.iter().map(|feature| view! {
                    <li class="flex items-center gap-3">
                        <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0" />
                        <span class="text-slate-700 dark:text-slate-200">{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            <A
                href=tier.cta_href
                attr:class=if tier.highlighted { "lp-btn-primary block text-center" } else { "lp-btn-secondary block text-center" }
            >
                {tier.cta_text}
            </A>
        </div>
    }
}

/// FAQ section. Opening one question closes the previously open one.
#[component]
fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::new());

    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                        "Frequently Asked Questions"
                    </h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300">
                        "Got questions? We've got answers."
                    </p>
                </div>

                // Escape collapses the open answer
                <div
                    class="space-y-4"
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            accordion.update(AccordionState::close);
                        }
                    }
                >
                    {FAQ_ENTRIES
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <FaqItem index=index entry=entry accordion=accordion /> })
                        .collect_view()}
                </div>

                <div class="mt-6 h-6 text-center">
                    {move || accordion.with(|state| state.open_index()).map(|_| view! {
                        <button
                            type="button"
                            class="text-sm text-indigo-600 hover:text-indigo-500"
                            on:click=move |_| accordion.update(AccordionState::close)
                        >
                            "Collapse answer"
                        </button>
                    })}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(index: usize, entry: FaqEntry, accordion: RwSignal<AccordionState>) -> impl IntoView {
    let is_open = move || accordion.with(|state| state.is_open(index));
    let panel_id = format!("faq-answer-{}", index);

    view! {
        <div class="border border-slate-200 dark:border-slate-800 rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left
                       hover:bg-slate-50 dark:hover:bg-slate-900 transition-colors"
                on:click=move |_| accordion.update(|state| {
                    state.select(index);
                })
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id.clone()
            >
                <span class="font-semibold text-slate-900 dark:text-white">{entry.question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", is_open)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                id=panel_id
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open()
                class:max-h-96=is_open
            >
                <div class="px-6 pb-4 text-slate-600 dark:text-slate-300 leading-relaxed">
                    {entry.answer}
                </div>
            </div>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <div class="mb-4">
                            <Logo />
                        </div>
                        <p class="text-sm text-slate-600 dark:text-slate-300 max-w-md">
                            "Market research for new business ideas."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-slate-900 dark:text-white mb-4">"Product"</h4>
                        <ul class="space-y-2 text-sm">
                            <li><a href="#features" class="text-slate-600 dark:text-slate-300 hover:text-indigo-600">"Features"</a></li>
                            <li><a href="#pricing" class="text-slate-600 dark:text-slate-300 hover:text-indigo-600">"Pricing"</a></li>
                            <li><a href="#faq" class="text-slate-600 dark:text-slate-300 hover:text-indigo-600">"FAQ"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-slate-900 dark:text-white mb-4">"Account"</h4>
                        <ul class="space-y-2 text-sm">
                            <li><A href="/signin" attr:class="text-slate-600 dark:text-slate-300 hover:text-indigo-600">"Sign In"</A></li>
                            <li><A href="/signup" attr:class="text-slate-600 dark:text-slate-300 hover:text-indigo-600">"Sign Up"</A></li>
                            <li><A href="/password-reset" attr:class="text-slate-600 dark:text-slate-300 hover:text-indigo-600">"Reset Password"</A></li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-slate-200/50 dark:border-slate-800/50 text-sm text-slate-500">
                    {format!("© 2025 {}. All rights reserved.", PRODUCT_NAME)}
                </div>
            </div>
        </footer>
    }
}
