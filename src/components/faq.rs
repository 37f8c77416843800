use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={if *is_open { "true" } else { "false" }}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    {props.children.clone()}
                </div>
            }
        </div>
    }
}
