use web_sys::MouseEvent;
use yew::prelude::*;

use crate::navigation::{Navigate, Page};

const LINKS: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::Services, "Products and Services"),
    (Page::BookCall, "Free Consultation"),
    (Page::Faqs, "FAQs"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub on_navigate: Navigate,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |page: Page| {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(page);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to(Page::Home)}>
                    <img src="/logo.png" alt="Turbo Automation Logo" />
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for LINKS.iter().map(|(page, label)| html! {
                        <button
                            class={classes!("nav-link", (props.current == *page).then(|| "active"))}
                            onclick={go_to(*page)}
                        >
                            {*label}
                        </button>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: relative;
                    z-index: 10;
                    padding: 1.5rem;
                    background: #000;
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-logo img {
                    height: 6rem;
                    width: auto;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #f3f4f6;
                    font-size: 1rem;
                    font-weight: 500;
                    padding: 0.25rem 0.5rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #93c5fd;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
    }
}
