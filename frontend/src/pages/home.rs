use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::services_carousel::ServicesCarousel;
use crate::navigation::{Navigate, Page};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Navigate,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let book_call = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::BookCall))
    };

    html! {
        <div class="home-page">
            <section class="hero-card">
                <div class="hero-text">
                    <p>{"Outperform your competitors and be future proof by using AI automation"}</p>
                </div>
                <div class="hero-visual">
                    <ServicesCarousel />
                </div>
            </section>

            <section class="home-cta">
                <button class="cta-button large" onclick={book_call}>
                    {"Book Your Free Consultation"}
                </button>
                <p class="cta-subtext">
                    {"Transform your business with AI automation - Schedule your call today"}
                </p>
            </section>
            <style>
                {r#"
                .home-page {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 2rem;
                }
                .hero-card {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    background: rgba(0, 0, 0, 0.96);
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                    padding: 2rem;
                    overflow: hidden;
                }
                .hero-text p {
                    font-size: 1.5rem;
                    font-weight: 500;
                    color: #f3f4f6;
                    max-width: 32rem;
                    line-height: 1.6;
                }
                .home-cta {
                    text-align: center;
                    padding-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
