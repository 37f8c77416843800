use web_sys::MouseEvent;
use yew::prelude::*;

use crate::ui_state::embed_url;

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub video_id: AttrValue,
    pub title: AttrValue,
}

/// Lazy video embed: nothing is loaded from the video host until the user
/// clicks play. Activation is one-shot, the placeholder is gone for good.
#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    let activated = use_state(|| false);

    let on_play = {
        let activated = activated.clone();
        Callback::from(move |_: MouseEvent| activated.set(true))
    };

    html! {
        <div class="video__container" data-video-id={props.video_id.clone()}>
            if *activated {
                <iframe
                    class="video__iframe"
                    src={embed_url(&props.video_id)}
                    title={props.title.clone()}
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    width="560"
                    height="315"
                    loading="lazy"
                ></iframe>
            } else {
                <button class="video__play-btn" aria-label={format!("Play: {}", props.title)} onclick={on_play}>
                    {"▶"}
                </button>
            }
            <style>
                {r#"
                .video__container {
                    position: relative;
                    width: 100%;
                    max-width: 560px;
                    aspect-ratio: 16 / 9;
                    margin: 0 auto;
                    background: #0c101c url('/assets/video-poster.jpg') center / cover no-repeat;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .video__play-btn {
                    position: absolute;
                    inset: 0;
                    margin: auto;
                    width: 4.5rem;
                    height: 4.5rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(126, 178, 255, 0.9);
                    color: #0c101c;
                    font-size: 1.6rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .video__play-btn:hover {
                    transform: scale(1.08);
                }
                .video__iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                "#}
            </style>
        </div>
    }
}
