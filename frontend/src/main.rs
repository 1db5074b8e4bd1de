use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod accordion;
mod booking;
mod config;
mod content;
mod dom;
mod error;
mod navigation;
mod components {
    pub mod footer;
    pub mod nav;
    pub mod services_carousel;
}
mod pages {
    pub mod book_call;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use booking::Handoff;
use components::{footer::Footer, nav::Nav};
use navigation::Page;
use pages::{
    book_call::BookCall,
    faq::Faq,
    home::Home,
    not_found::NotFound,
    services::Services,
};

/// The view shown for whatever URL the visitor landed on. Later page changes
/// stay in memory.
fn landing_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .and_then(|path| Page::recognize(&path))
        .unwrap_or(Page::Home)
}

fn switch(page: Page, on_navigate: Callback<Page>, handoff: Handoff) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home {on_navigate} /> }
        },
        Page::Services => {
            info!("Rendering Services page");
            html! { <Services {on_navigate} {handoff} /> }
        },
        Page::BookCall => {
            info!("Rendering Book Call page");
            html! { <BookCall {on_navigate} {handoff} /> }
        },
        Page::Faqs => {
            info!("Rendering FAQs page");
            html! { <Faq {on_navigate} /> }
        },
        Page::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound {on_navigate} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let page = use_state(landing_page);
    let handoff = use_state(Handoff::default);

    {
        use_effect_with_deps(
            move |page: &Page| {
                if let Err(e) = dom::apply_seo(&page.seo()) {
                    warn!("Failed to update document head: {}", e);
                }
                || ()
            },
            *page,
        );
    }

    let navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| {
            info!("Navigating to {:?}", target);
            page.set(target);
            dom::scroll_to_top();
        })
    };

    html! {
        <div class="site">
            <Nav current={*page} on_navigate={navigate.clone()} />
            <main>
                { switch(*page, navigate, (*handoff).clone()) }
            </main>
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .site {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }
                .site main {
                    flex: 1;
                }
                .page-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .page-heading h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    background: linear-gradient(90deg, #fff, #f3f4f6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .page-heading p {
                    color: #f3f4f6;
                    font-size: 1.15rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .title-rule {
                    width: 6rem;
                    height: 4px;
                    margin: 0 auto 1.5rem;
                    background: linear-gradient(90deg, #60a5fa, #a855f7);
                }
                .panel {
                    background: linear-gradient(135deg, #111827, #000);
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2rem;
                }
                .cta-panel {
                    text-align: center;
                    margin: 4rem auto 2rem;
                    padding: 3rem 2rem;
                    max-width: 56rem;
                    background: linear-gradient(135deg, rgba(17, 24, 39, 0.5), rgba(0, 0, 0, 0.5));
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                }
                .cta-panel h3 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .cta-panel p {
                    color: #f3f4f6;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.75rem 1.5rem;
                    background: linear-gradient(90deg, #3b82f6, #9333ea);
                    color: #fff;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .cta-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 25px rgba(59, 130, 246, 0.3);
                }
                .cta-button.large {
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                }
                .cta-subtext {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    margin-top: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
