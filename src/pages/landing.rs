use yew::prelude::*;

use crate::components::faq::FaqItem;
use crate::components::feature_cards::FeatureCards;
use crate::components::video_embed::VideoEmbed;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Pass your exam on the first try"}</h1>
                    <p class="hero-subtitle">
                        {"Thousands of real exam questions, instant corrections and mock exams
                          that feel like the real thing."}
                    </p>
                    <a href="#features" class="hero-cta">{"Start practicing"}</a>
                </div>
            </header>

            <FeatureCards />

            <section class="benefits">
                <h2>{"Built around how you actually study"}</h2>
                <p>
                    {"Short sessions, honest scoring, no filler. Aprovia tells you what to
                      review next so every hour counts."}
                </p>
            </section>

            <section id="video" class="video">
                <h2>{"See it in action"}</h2>
                <VideoEmbed video_id="M7lc1UVf-VE" title="Aprovia walkthrough" />
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently asked questions"}</h2>
                <FaqItem question="Do I need to install anything?">
                    <p>{"No. Aprovia runs in the browser on any device."}</p>
                </FaqItem>
                <FaqItem question="Are the questions really from past exams?">
                    <p>{"Yes, every bank is built from published official exams and reviewed
                         after each cycle."}</p>
                </FaqItem>
                <FaqItem question="Can I cancel whenever I want?">
                    <p>{"Any time, from your account page. Your progress is kept for a year."}</p>
                </FaqItem>
            </section>

            <footer class="footer">
                <p>{"© 2026 Aprovia"}</p>
                <div class="legal-links">
                    <a href="#terms">{"Terms"}</a>
                    {" · "}
                    <a href="#privacy">{"Privacy"}</a>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #0c101c;
                    color: #eee;
                    font-family: system-ui, sans-serif;
                }
                .hero {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(180deg, #141a2c 0%, #0c101c 100%);
                }
                .hero-title {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #bbb;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                    line-height: 1.7;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2.2rem;
                    border-radius: 8px;
                    background: #7EB2FF;
                    color: #0c101c;
                    font-weight: 600;
                    text-decoration: none;
                }
                .benefits, .video, .faq {
                    padding: 4rem 2rem;
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }
                .benefits p {
                    color: #bbb;
                    font-size: 1.2rem;
                    line-height: 1.8;
                }
                .faq {
                    text-align: left;
                }
                .faq h2 {
                    text-align: center;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    color: #eee;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .faq-answer {
                    padding: 0 0 1rem;
                    color: #bbb;
                    line-height: 1.6;
                }
                .footer {
                    padding: 2rem;
                    text-align: center;
                    color: #666;
                }
                .legal-links a {
                    color: #666;
                    text-decoration: none;
                }
                .legal-links a:hover {
                    color: #7EB2FF;
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2rem;
                    }
                    .hero-subtitle {
                        font-size: 1.1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
