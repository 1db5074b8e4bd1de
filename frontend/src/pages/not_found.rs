use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::content::{matching_suggestions, QUICK_LINKS};
use crate::navigation::{search_destination, Navigate, Page};

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_navigate: Navigate,
}

/// Runs `f` after `millis` unless `slot` is cleared or refilled first.
fn schedule(slot: &RefCell<Option<Timeout>>, millis: u32, f: impl FnOnce() + 'static) {
    *slot.borrow_mut() = Some(Timeout::new(millis, f));
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let query = use_state(String::new);
    let show_suggestions = use_state(|| false);

    let go_to = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    let onsubmit = {
        let query = query.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(page) = search_destination(&query) {
                info!("404 search {:?} -> {:?}", *query, page);
                on_navigate.emit(page);
            }
        })
    };

    let oninput = {
        let query = query.clone();
        let show_suggestions = show_suggestions.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            show_suggestions.set(true);
        })
    };

    let onfocus = {
        let show_suggestions = show_suggestions.clone();
        Callback::from(move |_: FocusEvent| show_suggestions.set(true))
    };

    let hide_timer = use_mut_ref(|| None::<Timeout>);
    {
        // a pending hide must not fire into an unmounted page
        let hide_timer = hide_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    hide_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onblur = {
        let show_suggestions = show_suggestions.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: FocusEvent| {
            let show_suggestions = show_suggestions.clone();
            schedule(&hide_timer, config::SUGGESTION_HIDE_DELAY_MS, move || {
                show_suggestions.set(false);
            });
        })
    };

    let suggestions = matching_suggestions(&query);

    html! {
        <div class="not-found-page">
            <section class="not-found-hero">
                <h1 class="big-404">{"404"}</h1>
                <h2>{"Oops! Page Not Found"}</h2>
                <p>
                    {"The page you're looking for seems to have vanished into the digital void. \
                      But don't worry - our AI hasn't taken over yet! Let's get you back on track."}
                </p>
            </section>

            <section class="panel search-panel">
                <h3>{"Search for what you need"}</h3>
                <form class="search-form" {onsubmit}>
                    <div class="search-row">
                        <input
                            type="text"
                            value={(*query).clone()}
                            {oninput}
                            {onfocus}
                            {onblur}
                            placeholder="Search for services, information, or help..."
                        />
                        <button type="submit" class="cta-button">{"Search"}</button>
                    </div>
                    if *show_suggestions && !suggestions.is_empty() {
                        <div class="suggestions">
                            { for suggestions.into_iter().map(|suggestion| {
                                let onclick = {
                                    let query = query.clone();
                                    let show_suggestions = show_suggestions.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        query.set(suggestion.to_string());
                                        show_suggestions.set(false);
                                    })
                                };
                                html! {
                                    <button type="button" class="suggestion" {onclick}>{suggestion}</button>
                                }
                            }) }
                        </div>
                    }
                </form>
            </section>

            <section class="quick-links">
                <h3>{"Quick Navigation"}</h3>
                <div class="quick-link-grid">
                    { for QUICK_LINKS.iter().map(|link| html! {
                        <button class="quick-link" onclick={go_to(link.target)}>
                            <h4>{link.title}</h4>
                            <p>{link.description}</p>
                        </button>
                    }) }
                </div>
            </section>

            <section class="not-found-cta">
                <button class="cta-button large" onclick={go_to(Page::Home)}>{"Take Me Home"}</button>
            </section>

            <section class="panel help-panel">
                <h4>{"Still can't find what you're looking for?"}</h4>
                <p>{"Our AI automation experts are here to help. Book a consultation call and we'll personally assist you with your needs."}</p>
                <button class="cta-button" onclick={go_to(Page::BookCall)}>{"Get Personal Help"}</button>
            </section>

            <style>
                {r#"
                .not-found-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                    text-align: center;
                }
                .big-404 {
                    font-size: 8rem;
                    font-weight: 800;
                    background: linear-gradient(45deg, #60a5fa, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin: 0;
                }
                .not-found-hero h2 {
                    color: #fff;
                    font-size: 2rem;
                }
                .not-found-hero p {
                    color: #e5e7eb;
                    max-width: 40rem;
                    margin: 1rem auto 2rem;
                }
                .search-panel h3,
                .quick-links h3 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .search-form {
                    position: relative;
                }
                .search-row {
                    display: flex;
                    gap: 0.75rem;
                }
                .search-row input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    background: #1f2937;
                    border: 1px solid #6b7280;
                    border-radius: 0.5rem;
                    color: #fff;
                }
                .suggestions {
                    position: absolute;
                    left: 0;
                    right: 0;
                    margin-top: 0.5rem;
                    background: #111827;
                    border: 1px solid #4b5563;
                    border-radius: 0.5rem;
                    z-index: 5;
                    overflow: hidden;
                }
                .suggestion {
                    display: block;
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: none;
                    border: none;
                    color: #f3f4f6;
                    text-align: left;
                    cursor: pointer;
                }
                .suggestion:hover {
                    background: #1f2937;
                }
                .quick-links {
                    margin: 3rem 0 2rem;
                }
                .quick-link-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1rem;
                }
                .quick-link {
                    padding: 1.5rem;
                    background: linear-gradient(135deg, #111827, #000);
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                    color: #fff;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .quick-link:hover {
                    border-color: #93c5fd;
                }
                .quick-link p {
                    color: #d1d5db;
                    font-size: 0.9rem;
                }
                .not-found-cta {
                    margin-bottom: 3rem;
                }
                .help-panel p {
                    color: #e5e7eb;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(0));
        let bump = {
            let fired = fired.clone();
            move || fired.set(fired.get() + 1)
        };
        (fired, bump)
    }

    #[wasm_bindgen_test]
    async fn scheduled_hide_fires_once() {
        let slot = RefCell::new(None);
        let (fired, bump) = counter();
        schedule(&slot, 10, bump);

        TimeoutFuture::new(50).await;
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn clearing_slot_cancels_pending_hide() {
        let slot = RefCell::new(None);
        let (fired, bump) = counter();
        schedule(&slot, 10, bump);
        slot.borrow_mut().take();

        TimeoutFuture::new(50).await;
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn new_blur_replaces_pending_hide() {
        let slot = RefCell::new(None);
        let (first, bump_first) = counter();
        let (second, bump_second) = counter();
        schedule(&slot, 10, bump_first);
        schedule(&slot, 10, bump_second);

        TimeoutFuture::new(50).await;
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }
}
