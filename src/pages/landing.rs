use chrono::Datelike;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::counter::Counter;
use crate::components::nav::Nav;
use crate::components::reveal::{LazyImage, Reveal};
use crate::components::scroll_link::ScrollLink;
use crate::config;
use crate::copy::Locale;
use crate::interactions::{
    footer_notice, is_text_entry, run_shortcut, shortcut_for, use_in_view_once, ANY_OVERLAP,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub locale: Locale,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let locale = props.locale;
    let copy = locale.copy();
    let why_us_ref = use_node_ref();
    let counting = use_in_view_once(why_us_ref.clone(), ANY_OVERLAP);

    use_effect_with_deps(
        move |locale| {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root {
                if let Err(e) = root.set_attribute("lang", locale.lang()) {
                    warn!("Could not set page language: {:?}", e);
                }
            }
            info!("Rendering {:?} landing page", locale);
            || ()
        },
        locale,
    );

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        let typing = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map_or(false, |el| is_text_entry(&el.tag_name()));
        let modifier = e.ctrl_key() || e.meta_key() || e.alt_key();
        if let Some(shortcut) = shortcut_for(&e.key(), typing, modifier) {
            info!("Keyboard shortcut {:?}", shortcut);
            run_shortcut(shortcut);
        }
    });

    let year = chrono::Local::now().year();

    html! {
        <div class="landing" id="home">
            <Nav {locale} />

            <section class="hero">
                <div class="hero-content">
                    <span class="hero-badge">{copy.hero_badge}</span>
                    <h1>{copy.hero_title}</h1>
                    <p>{copy.hero_subtitle}</p>
                    <div class="hero-buttons">
                        <a href={config::EMERGENCY_PHONE_HREF} class="btn btn-emergency">
                            {copy.hero_call}{" · "}{config::EMERGENCY_PHONE_DISPLAY}
                        </a>
                        <ScrollLink target="contact" class="btn btn-secondary">
                            {copy.hero_contact}
                        </ScrollLink>
                    </div>
                </div>
                <LazyImage class="hero-image" src="/assets/hero-vet.jpg" alt={copy.hero_image_alt} />
            </section>

            <section class="services" id="services">
                <h2>{copy.services_title}</h2>
                <p class="section-intro">{copy.services_intro}</p>
                <div class="services-grid">
                    { for copy.services.iter().map(|service| html! {
                        <Reveal class="service-card">
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="why-us" id="why-us" ref={why_us_ref}>
                <h2>{copy.why_title}</h2>
                <div class="stats">
                    { for copy.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <Counter target={stat.target} suffix={stat.suffix} running={counting} />
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>
                <div class="features">
                    { for copy.features.iter().map(|feature| html! {
                        <Reveal class="feature-item">
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="contact" id="contact">
                <h2>{copy.contact_title}</h2>
                <p class="section-intro">{copy.contact_intro}</p>
                <div class="contact-layout">
                    <div class="contact-info">
                        { for copy.info_cards.iter().map(|card| html! {
                            <Reveal class="info-card">
                                <h3>{card.title}</h3>
                                <p>{card.body}</p>
                            </Reveal>
                        }) }
                    </div>
                    <ContactFormView {locale} />
                </div>
                <p class="shortcuts-hint">{copy.shortcuts_hint}</p>
            </section>

            <footer class="footer">
                <p class="footer-tagline">{copy.footer_tagline}</p>
                <div class="footer-bottom">{footer_notice(copy.footer_notice, year)}</div>
            </footer>

            <style>
                {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2933;
                    background: #f8faf9;
                }
                .landing h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #1B4332;
                    margin-bottom: 0.5rem;
                }
                .section-intro {
                    text-align: center;
                    color: #52606d;
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                }

                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 80px;
                    background: white;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s ease;
                    z-index: 1000;
                }
                .navbar.scrolled {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                }
                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1B4332;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-menu > div { display: contents; }
                .nav-link {
                    color: #1f2933;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover { color: #2D6A4F; }
                .nav-call {
                    background: #DC2626;
                    color: white;
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .hamburger {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .hamburger span {
                    width: 25px;
                    height: 3px;
                    background: #1B4332;
                    transition: all 0.3s ease;
                }
                .hamburger.active span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                .hamburger.active span:nth-child(2) { opacity: 0; }
                .hamburger.active span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

                .hero {
                    min-height: 100vh;
                    padding: 120px 1.5rem 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                    background: linear-gradient(135deg, #1B4332, #2D6A4F);
                    color: white;
                }
                .hero-content { max-width: 600px; }
                .hero-badge {
                    display: inline-block;
                    background: rgba(255, 255, 255, 0.15);
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                }
                .hero h1 { font-size: 3rem; line-height: 1.15; }
                .hero p { font-size: 1.2rem; opacity: 0.9; line-height: 1.6; }
                .hero-buttons { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
                .hero-image {
                    width: 100%;
                    max-width: 460px;
                    border-radius: 1rem;
                    min-height: 300px;
                    background: rgba(255, 255, 255, 0.1);
                    object-fit: cover;
                }

                .btn {
                    display: inline-block;
                    padding: 0.9rem 1.6rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }
                .btn:hover { transform: translateY(-2px); }
                .btn:disabled { opacity: 0.6; cursor: wait; transform: none; }
                .btn-emergency { background: #DC2626; color: white; }
                .btn-secondary { background: white; color: #1B4332; }
                .btn-primary { background: #2D6A4F; color: white; width: 100%; }

                .services, .why-us, .contact {
                    padding: 5rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .service-card, .info-card, .feature-item {
                    background: white;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .service-icon { font-size: 2.5rem; }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .reveal.in-view {
                    opacity: 1;
                    transform: translateY(0);
                }

                .stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                    text-align: center;
                    margin: 2rem 0 3rem;
                }
                .counter {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    color: #DC2626;
                }
                .stat-label { color: #52606d; }
                .features {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 2rem;
                }
                .contact-info { display: flex; flex-direction: column; gap: 1rem; }
                .contact-form {
                    background: white;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .form-group { margin-bottom: 1.25rem; }
                .form-group label {
                    display: block;
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                }
                .form-group input, .form-group textarea {
                    width: 100%;
                    padding: 0.8rem;
                    border: 1px solid #cbd2d9;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .form-group input:focus, .form-group textarea:focus {
                    outline: none;
                    border-color: #2D6A4F;
                }
                .shortcuts-hint {
                    text-align: center;
                    color: #7b8794;
                    font-size: 0.9rem;
                    margin-top: 2rem;
                }

                .footer {
                    background: #1B4332;
                    color: white;
                    text-align: center;
                    padding: 2.5rem 1.5rem;
                }
                .footer-bottom { opacity: 0.7; font-size: 0.9rem; }

                @media (max-width: 768px) {
                    .hamburger { display: flex; }
                    .nav-menu {
                        position: fixed;
                        top: 80px;
                        left: -100%;
                        width: 100%;
                        flex-direction: column;
                        background: white;
                        padding: 2rem 0;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active { left: 0; }
                    .hero { flex-direction: column; text-align: center; }
                    .hero h1 { font-size: 2.2rem; }
                    .hero-buttons { justify-content: center; }
                    .contact-layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
