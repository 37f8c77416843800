use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::ui_state::{navbar_scrolled, MenuState};
use crate::Route;

fn is_desktop() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(config::DESKTOP_MEDIA_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    // Shared with the long-lived scroll closure, which must see the pointer
    // position at event time rather than at capture time.
    let hovering = use_mut_ref(|| false);

    let menu = use_state(MenuState::default);
    // Mirror of `menu` readable from the document-level closures.
    let menu_now = use_mut_ref(MenuState::default);

    let avatar_ref = use_node_ref();
    let dropdown_ref = use_node_ref();

    // Window scroll recomputes the transparency flag. Below the desktop
    // breakpoint the reducer always clears it, including any stale flag left
    // over from a viewport resize.
    {
        let scrolled = scrolled.clone();
        let hovering = hovering.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        scrolled.set(navbar_scrolled(scroll_y(), *hovering.borrow(), is_desktop()));
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::debug!("navbar: could not attach scroll listener");
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Hover override, desktop only: entering forces the transparent state,
    // leaving restores whatever the scroll offset says.
    let onmouseenter = {
        let scrolled = scrolled.clone();
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            if !is_desktop() {
                return;
            }
            *hovering.borrow_mut() = true;
            scrolled.set(navbar_scrolled(scroll_y(), true, true));
        })
    };
    let onmouseleave = {
        let scrolled = scrolled.clone();
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            if !is_desktop() {
                return;
            }
            *hovering.borrow_mut() = false;
            scrolled.set(navbar_scrolled(scroll_y(), false, true));
        })
    };

    let on_avatar_click = {
        let menu = menu.clone();
        let menu_now = menu_now.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu_now.borrow().toggled();
            *menu_now.borrow_mut() = next;
            menu.set(next);
        })
    };

    // Document-level closers: a click outside both the trigger and the menu,
    // or Escape (which also hands focus back to the trigger).
    {
        let menu = menu.clone();
        let menu_now = menu_now.clone();
        let avatar_ref = avatar_ref.clone();
        let dropdown_ref = dropdown_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(document) =
                    web_sys::window().and_then(|w| w.document())
                {
                    let on_click = {
                        let menu = menu.clone();
                        let menu_now = menu_now.clone();
                        let avatar_ref = avatar_ref.clone();
                        let dropdown_ref = dropdown_ref.clone();
                        Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok())
                            else {
                                return;
                            };
                            let inside = [avatar_ref.get(), dropdown_ref.get()]
                                .iter()
                                .flatten()
                                .any(|node| node.contains(Some(&target)));
                            if inside {
                                return;
                            }
                            let current = *menu_now.borrow();
                            if current.is_open() {
                                let next = current.closed_by_outside_click();
                                *menu_now.borrow_mut() = next;
                                menu.set(next);
                            }
                        })
                    };
                    let on_keydown = {
                        let avatar_ref = avatar_ref.clone();
                        Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() != "Escape" {
                                return;
                            }
                            let current = *menu_now.borrow();
                            let (next, restore_focus) = current.closed_by_escape();
                            if next != current {
                                *menu_now.borrow_mut() = next;
                                menu.set(next);
                            }
                            if restore_focus {
                                if let Some(btn) = avatar_ref.cast::<HtmlElement>() {
                                    let _ = btn.focus();
                                }
                            }
                        })
                    };
                    let click_ok = document
                        .add_event_listener_with_callback(
                            "click",
                            on_click.as_ref().unchecked_ref(),
                        )
                        .is_ok();
                    let keydown_ok = document
                        .add_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        )
                        .is_ok();
                    if !click_ok || !keydown_ok {
                        log::debug!("navbar: could not attach dropdown document listeners");
                    }
                    Box::new(move || {
                        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                            let _ = doc.remove_event_listener_with_callback(
                                "click",
                                on_click.as_ref().unchecked_ref(),
                            );
                            let _ = doc.remove_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <nav
            class={classes!("navbar", if *scrolled { "navbar--scrolled" } else { "" })}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <Link<Route> to={Route::Landing} classes="navbar__logo">{"Aprovia"}</Link<Route>>
            <ul class="navbar__links">
                <li><a href="#features">{"Features"}</a></li>
                <li><a href="#video">{"See it in action"}</a></li>
                <li><a href="#faq">{"FAQ"}</a></li>
            </ul>
            <div class="navbar__user">
                <button
                    ref={avatar_ref.clone()}
                    class="navbar__avatar"
                    aria-haspopup="menu"
                    aria-controls="user-dropdown"
                    aria-expanded={if menu.is_open() { "true" } else { "false" }}
                    onclick={on_avatar_click}
                >
                    {"A"}
                </button>
                <div
                    ref={dropdown_ref.clone()}
                    id="user-dropdown"
                    class="navbar__dropdown"
                    hidden={!menu.is_open()}
                >
                    <a href="#account">{"My account"}</a>
                    <a href="#progress">{"My progress"}</a>
                    <a href="#logout">{"Log out"}</a>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 2rem;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .navbar--scrolled {
                    background: rgba(12, 16, 28, 0.92);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
                }
                .navbar__logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .navbar__links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .navbar__links a {
                    color: #ddd;
                    text-decoration: none;
                }
                .navbar__links a:hover {
                    color: #fff;
                }
                .navbar__user {
                    position: relative;
                }
                .navbar__avatar {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    border: 2px solid #7EB2FF;
                    background: #1E2A44;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .navbar__dropdown {
                    position: absolute;
                    right: 0;
                    top: calc(100% + 0.5rem);
                    min-width: 10rem;
                    display: flex;
                    flex-direction: column;
                    background: #141a2c;
                    border-radius: 8px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                    padding: 0.5rem 0;
                }
                .navbar__dropdown a {
                    padding: 0.5rem 1rem;
                    color: #ddd;
                    text-decoration: none;
                }
                .navbar__dropdown a:hover {
                    background: rgba(126, 178, 255, 0.12);
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .navbar__links {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
