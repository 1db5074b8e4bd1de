use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::CAROUSEL_ENTRIES;

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Service highlights on the landing page. Desktop shows all cards in a row,
/// narrow screens get one card at a time that advances on a timer.
#[function_component(ServicesCarousel)]
pub fn services_carousel() -> Html {
    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        // interval is cleared by the hook on unmount
        use_interval(
            move || current.set(next_slide(*current, CAROUSEL_ENTRIES.len())),
            config::CAROUSEL_INTERVAL_MS,
        );
    }

    let cards = |mobile: bool| {
        html! {
            <>
                { for CAROUSEL_ENTRIES.iter().map(|entry| html! {
                    <div class={classes!("carousel-card", mobile.then(|| "carousel-slide"))}
                         role="article"
                         aria-label={format!("{} service", entry.title)}>
                        <h4>{entry.title}</h4>
                        <p>{entry.description}</p>
                    </div>
                }) }
            </>
        }
    };

    html! {
        <>
            <div class="carousel-desktop">
                { cards(false) }
            </div>
            <div class="carousel-mobile">
                <div class="carousel-track"
                     style={format!("transform: translateX(-{}%);", *current * 100)}>
                    { cards(true) }
                </div>
                <div class="carousel-indicators">
                    { for (0..CAROUSEL_ENTRIES.len()).map(|index| {
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| current.set(index))
                        };
                        html! {
                            <button
                                class={classes!("indicator", (index == *current).then(|| "active"))}
                                aria-label={format!("Go to slide {}", index + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .carousel-desktop {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .carousel-card {
                    background: linear-gradient(135deg, #111827, #000);
                    border: 1px solid #4b5563;
                    border-radius: 1rem;
                    padding: 1.25rem;
                    color: #fff;
                }
                .carousel-card h4 {
                    font-size: 1.1rem;
                    margin-bottom: 0.5rem;
                }
                .carousel-card p {
                    color: #e5e7eb;
                    font-size: 0.9rem;
                }
                .carousel-mobile {
                    display: none;
                    overflow: hidden;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease-in-out;
                }
                .carousel-slide {
                    flex: 0 0 100%;
                }
                .carousel-indicators {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .indicator {
                    width: 0.5rem;
                    height: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #6b7280;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .indicator.active {
                    width: 2rem;
                    background: #60a5fa;
                }
                @media (max-width: 768px) {
                    .carousel-desktop {
                        display: none;
                    }
                    .carousel-mobile {
                        display: block;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_wrap_around() {
        assert_eq!(next_slide(0, 4), 1);
        assert_eq!(next_slide(3, 4), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        assert_eq!(next_slide(0, 0), 0);
    }
}
