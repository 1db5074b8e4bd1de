use chrono::Datelike;
use yew::prelude::*;

use crate::content::SOCIAL_LINKS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="social-links">
                { for SOCIAL_LINKS.iter().map(|social| html! {
                    <a
                        href={social.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={social.label}
                        title={social.label}
                    >
                        {social.short}
                    </a>
                }) }
            </div>
            <p class="copyright">{format!("© {} TurboAutomation. All rights reserved.", year)}</p>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #4b5563;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    background: #000;
                }
                .social-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                }
                .social-links a {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .social-links a:hover {
                    color: #93c5fd;
                }
                .copyright {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
