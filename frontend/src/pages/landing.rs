use std::rc::Rc;

use yew::prelude::*;

use crate::anchors::AnchorNavigation;
use crate::audience::{apply_selection, Audience};
use crate::components::audience_slider::{AudienceCopy, AudienceSlider};
use crate::components::bluesky_feed::BlueskyFeed;
use crate::components::book::Book;
use crate::components::sticky_nav::{StepLink, StickyNav};
use crate::preference::{LocalPreferenceStore, PreferenceStore};

const STEPS: &[StepLink] = &[
    StepLink { step: 1, label: "Vibe" },
    StepLink { step: 2, label: "Build" },
    StepLink { step: 3, label: "Pitch" },
    StepLink { step: 4, label: "Ship" },
    StepLink { step: 5, label: "Lead" },
];

const PITCH_COPY: &[AudienceCopy] = &[
    AudienceCopy {
        audience: Audience::Public,
        heading: "Show residents, not slides",
        body: "Councils and agencies sign off faster when they can click through a working service. Bring a prototype to the consultation instead of a requirements document.",
    },
    AudienceCopy {
        audience: Audience::Commercial,
        heading: "Put a demo in the buyer's hands",
        body: "A live link beats a deck. Prospects try the workflow on their own data and come back with questions that close deals.",
    },
    AudienceCopy {
        audience: Audience::Startup,
        heading: "Validate before you hire",
        body: "Ship the thing investors keep asking about this week. Real users on a real URL say more than any market sizing slide.",
    },
];

const LEAD_COPY: &[AudienceCopy] = &[
    AudienceCopy {
        audience: Audience::Public,
        heading: "Run a pilot in a single sprint",
        body: "Pick one service, one team and one fortnight. We help you scope it so procurement never has to be the bottleneck.",
    },
    AudienceCopy {
        audience: Audience::Commercial,
        heading: "Turn the prototype into pipeline",
        body: "Capture every visitor who tried the demo, route them to sales and see which features they actually used.",
    },
    AudienceCopy {
        audience: Audience::Startup,
        heading: "From weekend build to first customers",
        body: "Waitlists, onboarding and feedback loops that keep up with how fast you ship.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let store: Rc<dyn PreferenceStore> =
        (*use_memo(|_| Rc::new(LocalPreferenceStore) as Rc<dyn PreferenceStore>, ())).clone();

    // Read once; both sliders render from this handle afterwards
    let audience = {
        let store = store.clone();
        use_state_eq(move || store.get())
    };

    let on_select = {
        let audience = audience.clone();
        let store = store.clone();
        Callback::from(move |tag: Option<String>| {
            audience.set(apply_selection(store.as_ref(), *audience, tag.as_deref()));
        })
    };

    use_effect_with_deps(
        move |_| {
            let anchors = AnchorNavigation::attach();
            move || {
                if let Some(anchors) = anchors {
                    anchors.detach();
                }
            }
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <StickyNav steps={STEPS} />

            <header id="hero" class="hero">
                <div class="hero-copy">
                    <p class="hero-kicker">{"vibe2lead.diy"}</p>
                    <h1>{"From vibe-coded prototype to qualified lead"}</h1>
                    <p class="hero-subtitle">
                        {"Five steps to turn the thing you built over the weekend into conversations with people who will pay for it."}
                    </p>
                    <a href="#step-1" class="hero-cta">{"Start with step one"}</a>
                </div>
                <div class="hero-art">
                    <Book />
                </div>
            </header>

            <main>
                <section id="step-1" class="step-section">
                    <span class="step-badge">{"Step 1"}</span>
                    <h2>{"Catch the vibe"}</h2>
                    <p>{"Write down the problem in one sentence and the person who has it in another. Everything you build next answers to those two lines."}</p>
                </section>

                <section id="step-2" class="step-section">
                    <span class="step-badge">{"Step 2"}</span>
                    <h2>{"Build the smallest believable thing"}</h2>
                    <p>{"Prompt, run, fix, repeat. Stop when a stranger could use it without you sitting next to them."}</p>
                </section>

                <section id="step-3" class="step-section">
                    <span class="step-badge">{"Step 3"}</span>
                    <h2>{"Pitch it to the right room"}</h2>
                    <AudienceSlider
                        audience={*audience}
                        on_select={on_select.clone()}
                        slider_class="audience-slider"
                        content_class="audience-content"
                        copy={PITCH_COPY}
                    />
                </section>

                <section id="step-4" class="step-section">
                    <span class="step-badge">{"Step 4"}</span>
                    <h2>{"Ship it somewhere public"}</h2>
                    <p>{"A real domain, a privacy notice and a way to say hello. That is the whole launch checklist."}</p>
                </section>

                <section id="step-5" class="step-section">
                    <span class="step-badge">{"Step 5"}</span>
                    <h2>{"Lead with what you learned"}</h2>
                    <AudienceSlider
                        audience={*audience}
                        on_select={on_select}
                        slider_class="audience-slider audience-slider-step5"
                        content_class="audience-content-step5"
                        copy={LEAD_COPY}
                    />
                </section>
            </main>

            <footer class="landing-footer">
                <BlueskyFeed />
                <p class="footer-note">{"Made with more vibes than meetings."}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .sticky-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 60px;
        z-index: 10;
        transform: translateY(-100%);
        transition: transform 0.3s ease;
        background: rgba(16, 16, 24, 0.92);
        backdrop-filter: blur(8px);
    }
    .sticky-nav.visible {
        transform: translateY(0);
    }
    .sticky-nav-inner {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        height: 100%;
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .step-link {
        color: #9a9ab0;
        text-decoration: none;
        display: flex;
        gap: 0.4rem;
    }
    .step-link.active {
        color: #fff;
        font-weight: 600;
    }
    .step-section {
        min-height: 80vh;
        max-width: 900px;
        margin: 0 auto;
        padding: 6rem 1.5rem;
    }
    .audience-slider {
        position: relative;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        border-radius: 999px;
        background: #1d1d2b;
        margin-bottom: 2rem;
    }
    .slider-option {
        position: relative;
        z-index: 1;
        padding: 0.75rem 1rem;
        background: none;
        border: none;
        color: #9a9ab0;
        cursor: pointer;
    }
    .slider-option.active {
        color: #fff;
    }
    .slider-highlight {
        position: absolute;
        top: 0;
        bottom: 0;
        left: 0;
        width: calc(100% / 3);
        border-radius: 999px;
        background: #5b5bf0;
        transition: transform 0.3s ease;
    }
    .slider-highlight[data-position="2"] { transform: translateX(100%); }
    .slider-highlight[data-position="3"] { transform: translateX(200%); }
    .audience-content.hidden,
    .audience-content-step5.hidden {
        display: none;
    }
    .book {
        position: relative;
        width: 220px;
        height: 300px;
        perspective: 1400px;
        transform-style: preserve-3d;
    }
    .book-back,
    .book-cover,
    .page {
        position: absolute;
        inset: 0;
        transform-origin: left center;
        border-radius: 2px 8px 8px 2px;
    }
    .book-back { background: #2a2240; }
    .page { background: #f6f1e7; box-shadow: inset 6px 0 12px rgba(0, 0, 0, 0.12); }
    .book-cover {
        background: linear-gradient(135deg, #5b5bf0, #a24bd6);
        display: flex;
        align-items: center;
        justify-content: center;
        animation: book-open 2.4s ease-in-out 1s forwards;
    }
    .page-1 { animation: page-turn 1.2s ease-in-out 3.4s forwards; }
    .page-2 { animation: page-turn 1.2s ease-in-out 4.6s forwards; }
    .page-3 { animation: page-turn 1.2s ease-in-out 5.8s forwards; }
    .page-4 { animation: page-turn 1.2s ease-in-out 7s forwards; }
    .page-5 { animation: page-turn 1.2s ease-in-out 8.2s forwards; }
    @keyframes book-open {
        from { transform: rotateY(0deg); }
        to { transform: rotateY(-160deg); }
    }
    @keyframes page-turn {
        from { transform: rotateY(0deg); }
        to { transform: rotateY(-155deg); }
    }
    .bluesky-post {
        display: block;
        padding: 1rem 0;
        color: inherit;
        text-decoration: none;
        border-bottom: 1px solid #2a2a3a;
    }
    .bluesky-post-time,
    .bluesky-empty {
        color: #9a9ab0;
        font-size: 0.85rem;
    }
    @media (prefers-reduced-motion: reduce) {
        .book-cover,
        .page {
            animation: none;
        }
    }
"#;
