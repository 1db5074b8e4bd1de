use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::booking::{BookingForm, BookingSnapshot, Handoff, OTHER_SERVICE};
use crate::config;
use crate::content::BOOKING_SERVICE_OPTIONS;
use crate::dom::{self, ExternalScript};
use crate::navigation::{Navigate, Page};

#[wasm_bindgen]
extern "C" {
    // global installed by the Cal.com embed script
    #[wasm_bindgen(js_name = Cal, catch)]
    fn cal(action: &str, options: &JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct CalInit {
    origin: &'static str,
}

fn init_cal() {
    let options = match serde_wasm_bindgen::to_value(&CalInit { origin: config::CAL_ORIGIN }) {
        Ok(options) => options,
        Err(e) => {
            warn!("Failed to build Cal init options: {}", e);
            return;
        }
    };
    match cal("init", &options) {
        Ok(()) => info!("Cal embed initialised"),
        Err(e) => warn!("Cal embed not available: {:?}", e),
    }
}

#[derive(Properties, PartialEq)]
pub struct BookCallProps {
    pub on_navigate: Navigate,
    pub handoff: Handoff,
}

#[function_component(BookCall)]
pub fn book_call(props: &BookCallProps) -> Html {
    let form = {
        let handoff = props.handoff.clone();
        use_state(move || match handoff.take() {
            Some(service) => {
                info!("Pre-selecting service {}", service);
                BookingForm::with_service(service)
            }
            None => BookingForm::default(),
        })
    };
    let submitted = use_state(|| None::<BookingSnapshot>);

    // embed script lives exactly as long as the booking view is shown
    use_effect_with_deps(
        move |is_booking: &bool| {
            let script = if *is_booking {
                match ExternalScript::load(
                    config::CAL_EMBED_SCRIPT_URL,
                    "script[src*=\"cal.com\"]",
                    init_cal,
                ) {
                    Ok(script) => Some(script),
                    Err(e) => {
                        warn!("Could not load Cal embed: {}", e);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(script)
        },
        submitted.is_some(),
    );

    match &*submitted {
        Some(snapshot) => {
            let back_to_form = {
                let submitted = submitted.clone();
                Callback::from(move |_: MouseEvent| submitted.set(None))
            };
            render_booking(snapshot, back_to_form, &props.on_navigate)
        }
        None => render_form(&form, &submitted),
    }
}

fn render_form(
    form: &UseStateHandle<BookingForm>,
    submitted: &UseStateHandle<Option<BookingSnapshot>>,
) -> Html {
    let update = |apply: fn(&mut BookingForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_additional_info = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.additional_info = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(snapshot) => {
                    info!("Booking form submitted for {:?}", next.interested_services());
                    submitted.set(Some(snapshot));
                    dom::scroll_to_top();
                }
                Err(e) => warn!("Booking form rejected: {}", e),
            }
            form.set(next);
        })
    };

    let error = form.other_service_error().map(|e| e.to_string());

    html! {
        <div class="book-call-page">
            <section class="page-heading">
                <h2>{"Free Consultation"}</h2>
                <div class="title-rule"></div>
                <p>{"Ready to transform your business with AI automation? Let's discuss your needs and explore how we can help."}</p>
            </section>

            <div class="panel">
                <form class="booking-form" {onsubmit}>
                    <div class="form-field">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            value={form.name.clone()}
                            oninput={update(|f, v| f.name = v)}
                            placeholder="Enter your full name"
                            required={true}
                        />
                    </div>

                    <div class="form-field">
                        <label for="email">{"Email Address"}</label>
                        <input
                            type="email"
                            id="email"
                            value={form.email.clone()}
                            oninput={update(|f, v| f.email = v)}
                            placeholder="Enter your email address"
                            required={true}
                        />
                    </div>

                    <div class="form-field">
                        <label>{"What are you looking for?"}</label>
                        <div class="service-options">
                            { for BOOKING_SERVICE_OPTIONS.iter().copied().map(|service| {
                                let onchange = {
                                    let form = form.clone();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*form).clone();
                                        next.toggle_service(service);
                                        form.set(next);
                                    })
                                };
                                let show_other = service == OTHER_SERVICE && form.is_selected(OTHER_SERVICE);
                                html! {
                                    <div>
                                        <label class="service-option">
                                            <input
                                                type="checkbox"
                                                checked={form.is_selected(service)}
                                                {onchange}
                                            />
                                            <span>{service}</span>
                                        </label>
                                        if show_other {
                                            <div class="other-service">
                                                <input
                                                    type="text"
                                                    class={classes!(error.is_some().then(|| "invalid"))}
                                                    value={form.other_service_description().to_string()}
                                                    oninput={update(|f, v| f.set_other_service_description(v))}
                                                    placeholder="Describe what you want"
                                                />
                                                if let Some(message) = error.clone() {
                                                    <p class="field-error">{message}</p>
                                                }
                                            </div>
                                        }
                                    </div>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="additionalInfo">{"Additional Information"}</label>
                        <textarea
                            id="additionalInfo"
                            rows="5"
                            value={form.additional_info.clone()}
                            oninput={on_additional_info}
                            placeholder="Tell us about your specific requirements, current challenges, budget etc."
                        />
                    </div>

                    <div class="form-submit">
                        <button type="submit" class="cta-button large">
                            {"Continue to Booking"}
                        </button>
                    </div>
                </form>
            </div>
            { booking_styles() }
        </div>
    }
}

fn render_booking(snapshot: &BookingSnapshot, back_to_form: Callback<MouseEvent>, on_navigate: &Navigate) -> Html {
    let back_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home))
    };

    html! {
        <div class="book-call-page">
            <section class="page-heading">
                <h2>{"Schedule Your Consultation"}</h2>
                <div class="title-rule"></div>
                <p>{format!("Thank you for your interest, {}! Please select a convenient time for your consultation call.", snapshot.name)}</p>
            </section>

            <div class="panel">
                <h3 class="panel-title">{"Book Your Video Call"}</h3>
                <div class="scheduler-frame">
                    <iframe
                        src={snapshot.scheduling_url.clone()}
                        width="100%"
                        height="100%"
                        frameborder="0"
                        title="Schedule a meeting with Starvico"
                        loading="lazy"
                    />
                </div>
                <div class="booking-actions">
                    <button class="secondary-button" onclick={back_to_form}>{"Back to Form"}</button>
                    <button class="cta-button" onclick={back_home}>{"Back to Home"}</button>
                </div>
            </div>

            <div class="panel expectations">
                <h4>{"What to Expect During Your Call"}</h4>
                <ol>
                    <li>{"Discuss your business needs and challenges"}</li>
                    <li>{"Explore AI automation opportunities"}</li>
                    <li>{"Receive a customized solution proposal"}</li>
                </ol>
            </div>

            <div class="panel summary">
                <h4>{"Your Submitted Information"}</h4>
                <dl>
                    <dt>{"Name:"}</dt>
                    <dd>{&snapshot.name}</dd>
                    <dt>{"Email:"}</dt>
                    <dd>{&snapshot.email}</dd>
                    <dt>{"Interested Services:"}</dt>
                    <dd>{snapshot.interested_services.join(", ")}</dd>
                    if let Some(other) = &snapshot.other_service_description {
                        <>
                            <dt>{"Other Service Description:"}</dt>
                            <dd>{other}</dd>
                        </>
                    }
                    if let Some(info) = &snapshot.additional_info {
                        <>
                            <dt>{"Additional Information:"}</dt>
                            <dd>{info}</dd>
                        </>
                    }
                </dl>
            </div>
            { booking_styles() }
        </div>
    }
}

fn booking_styles() -> Html {
    html! {
        <style>
            {r#"
            .book-call-page {
                max-width: 64rem;
                margin: 0 auto;
                padding: 2rem 1.5rem;
            }
            .booking-form {
                display: flex;
                flex-direction: column;
                gap: 2rem;
            }
            .form-field label {
                display: block;
                color: #fff;
                font-size: 1.1rem;
                font-weight: 600;
                margin-bottom: 0.75rem;
            }
            .form-field input[type="text"],
            .form-field input[type="email"],
            .form-field textarea {
                width: 100%;
                padding: 0.75rem 1rem;
                background: #1f2937;
                border: 1px solid #6b7280;
                border-radius: 0.5rem;
                color: #fff;
                box-sizing: border-box;
            }
            .form-field input.invalid {
                border-color: #f87171;
            }
            .service-options {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 0.75rem;
            }
            .form-field .service-option {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 1rem;
                background: #1f2937;
                border: 1px solid #6b7280;
                border-radius: 0.5rem;
                font-weight: 400;
                cursor: pointer;
                margin-bottom: 0;
            }
            .other-service {
                margin-top: 0.75rem;
            }
            .field-error {
                margin-top: 0.5rem;
                color: #fca5a5;
                font-size: 0.875rem;
            }
            .form-submit {
                text-align: center;
            }
            .panel-title {
                text-align: center;
                color: #fff;
                margin-bottom: 1.5rem;
            }
            .scheduler-frame {
                height: 700px;
                background: #fff;
                border-radius: 0.5rem;
                overflow: hidden;
            }
            .scheduler-frame iframe {
                border: none;
            }
            .booking-actions {
                display: flex;
                justify-content: center;
                gap: 1rem;
                margin-top: 2rem;
            }
            .secondary-button {
                padding: 0.75rem 1.5rem;
                background: #4b5563;
                color: #fff;
                border: none;
                border-radius: 0.5rem;
                cursor: pointer;
            }
            .expectations ol {
                color: #f3f4f6;
                line-height: 2;
            }
            .summary dl {
                display: grid;
                grid-template-columns: max-content 1fr;
                gap: 0.5rem 1rem;
            }
            .summary dt {
                color: #93c5fd;
                font-weight: 500;
            }
            .summary dd {
                color: #f3f4f6;
                margin: 0;
            }
            "#}
        </style>
    }
}
