use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accordion::Accordion;
use crate::content::FAQ_ENTRIES;
use crate::navigation::{Navigate, Page};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub on_navigate: Navigate,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    let book_call = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::BookCall))
    };

    html! {
        <div class="faq-page">
            <section class="page-heading">
                <h2>{"Frequently Asked Questions"}</h2>
                <div class="title-rule"></div>
                <p>{"Get answers to common questions about AI automation and our services."}</p>
            </section>

            <section class="faq-section">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: ()| accordion.set(accordion.toggled(index)))
                    };
                    html! {
                        <FaqItem
                            question={entry.question}
                            answer={entry.answer}
                            is_open={accordion.is_expanded(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </section>

            <section class="cta-panel">
                <h3>{"Still Have Questions?"}</h3>
                <p>{"Get personalized answers and discover how AI automation can benefit your specific business needs."}</p>
                <button class="cta-button large" onclick={book_call}>
                    {"Book Your Free Consultation"}
                </button>
                <p class="cta-subtext">{"Speak directly with our AI automation experts"}</p>
            </section>

            <style>
                {r#"
                .faq-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                }
                .faq-section {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: linear-gradient(135deg, #111827, #000);
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover {
                    border-color: #93c5fd;
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.15rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    color: #d1d5db;
                    font-size: 1.5rem;
                    padding-left: 1rem;
                }
                .faq-item.open .toggle-icon {
                    color: #93c5fd;
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease-in-out;
                    padding: 0 1.5rem;
                }
                .faq-item.open .faq-answer {
                    max-height: 100vh;
                    opacity: 1;
                    padding-bottom: 1.5rem;
                }
                .faq-answer p {
                    color: #f3f4f6;
                    line-height: 1.7;
                    border-top: 1px solid rgba(96, 165, 250, 0.2);
                    padding-top: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
