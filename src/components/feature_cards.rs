use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

const FEATURES: [(&str, &str); 6] = [
    (
        "Real exam questions",
        "Practice with questions taken from past official exams, updated every cycle.",
    ),
    (
        "Instant corrections",
        "Every answer is graded on the spot, with the reasoning behind the right one.",
    ),
    (
        "Progress tracking",
        "See exactly which topics are holding your score back.",
    ),
    (
        "Custom mock exams",
        "Build timed tests from the topics you choose, scored like the real thing.",
    ),
    (
        "Study anywhere",
        "Your sessions sync across phone, tablet and desktop.",
    ),
    (
        "Expert-written content",
        "Question banks maintained by people who have sat the exams themselves.",
    ),
];

/// Feature grid with a one-shot reveal: each card gets `is-visible` the first
/// time it intersects the viewport and is then dropped from the observer, so
/// scrolling back up never hides it again.
#[function_component(FeatureCards)]
pub fn feature_cards() -> Html {
    let card_refs = use_state(|| {
        (0..FEATURES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    {
        let card_refs = card_refs.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
                    |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                let target = entry.target();
                                let _ = target.class_list().add_1("is-visible");
                                observer.unobserve(&target);
                            }
                        }
                    },
                );
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(config::REVEAL_THRESHOLD));
                options.set_root_margin(config::REVEAL_ROOT_MARGIN);
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();
                match &observer {
                    Some(obs) => {
                        for card in card_refs.iter() {
                            if let Some(el) = card.cast::<Element>() {
                                obs.observe(&el);
                            }
                        }
                    }
                    // Cards simply stay in their unrevealed state.
                    None => log::debug!("feature cards: IntersectionObserver unavailable"),
                }
                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <section id="features" class="features">
            <h2 class="features__title">{"Everything you need to pass"}</h2>
            <div class="features__grid">
                {
                    FEATURES
                        .iter()
                        .zip(card_refs.iter())
                        .map(|((title, blurb), card_ref)| html! {
                            <article ref={card_ref.clone()} class="features__card">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </article>
                        })
                        .collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .features {
                    padding: 4rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .features__title {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2.5rem;
                }
                .features__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .features__card {
                    background: #141a2c;
                    border-radius: 12px;
                    padding: 1.5rem;
                    opacity: 0;
                    transform: translateY(16px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .features__card.is-visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .features__card h3 {
                    margin-top: 0;
                    color: #7EB2FF;
                }
                .features__card p {
                    color: #bbb;
                    line-height: 1.6;
                    margin-bottom: 0;
                }
                "#}
            </style>
        </section>
    }
}
