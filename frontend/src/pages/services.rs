use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accordion::Accordion;
use crate::booking::Handoff;
use crate::content::SERVICE_CATALOG;
use crate::navigation::{Navigate, Page};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_navigate: Navigate,
    pub handoff: Handoff,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let accordion = use_state(Accordion::default);

    let book_call = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::BookCall))
    };

    html! {
        <div class="services-page">
            <section class="page-heading">
                <h2>{"Our Products and Services"}</h2>
                <div class="title-rule"></div>
                <p>{"Transform your business with cutting-edge AI solutions that operate seamlessly around the clock."}</p>
            </section>

            <section class="services-grid">
                { for SERVICE_CATALOG.iter().enumerate().map(|(index, service)| {
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: MouseEvent| accordion.set(accordion.toggled(index)))
                    };
                    let get_quote = {
                        let handoff = props.handoff.clone();
                        let on_navigate = props.on_navigate.clone();
                        let title = service.title;
                        Callback::from(move |e: MouseEvent| {
                            // keep the card from toggling underneath
                            e.stop_propagation();
                            info!("Quote requested for {}", title);
                            handoff.offer(title);
                            on_navigate.emit(Page::BookCall);
                        })
                    };
                    let expanded = accordion.is_expanded(index);

                    html! {
                        <div class={classes!("service-card", expanded.then(|| "expanded"))}
                             onclick={toggle}
                             tabindex="0"
                             role="article"
                             aria-label={format!("{} service", service.title)}>
                            <h3>{service.title}</h3>
                            <p class="service-description">{service.description}</p>
                            <div class="service-benefits">
                                <h4>{"Key Benefits"}</h4>
                                <ul>
                                    { for service.benefits.iter().map(|benefit| html! {
                                        <li>{*benefit}</li>
                                    }) }
                                </ul>
                            </div>
                            <button class="cta-button" onclick={get_quote}>
                                {"Get a Quote"}
                            </button>
                        </div>
                    }
                }) }
            </section>

            <section class="cta-panel">
                <h3>{"Ready to Transform Your Business?"}</h3>
                <p>{"Let's discuss how our AI automation solutions can revolutionize your operations and drive growth."}</p>
                <button class="cta-button large" onclick={book_call}>
                    {"Book Your Free Consultation"}
                </button>
                <p class="cta-subtext">{"No commitment required - Let's explore your AI automation opportunities"}</p>
            </section>

            <style>
                {r#"
                .services-page {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    background: linear-gradient(135deg, #111827, #000);
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                    padding: 2rem;
                    cursor: pointer;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .service-card:hover {
                    border-color: #93c5fd;
                    transform: translateY(-4px);
                }
                .service-card h3 {
                    color: #fff;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .service-description {
                    color: #e5e7eb;
                    line-height: 1.6;
                    flex: 1;
                }
                .service-benefits {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }
                .service-card.expanded .service-benefits {
                    max-height: 100vh;
                    opacity: 1;
                    margin-top: 1.5rem;
                }
                .service-benefits h4 {
                    color: #93c5fd;
                    margin-bottom: 0.75rem;
                }
                .service-benefits li {
                    color: #f3f4f6;
                    margin-bottom: 0.5rem;
                }
                .service-card .cta-button {
                    margin-top: 1.5rem;
                    align-self: flex-start;
                }
                "#}
            </style>
        </div>
    }
}
