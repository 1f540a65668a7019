use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config;
use crate::config::animation;
use crate::scroll::{self, PinLength, ScrollHost, ScrollRegistry, SubItemStyle};

struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Connect your Twilio number & WhatsApp",
        body: "Easily integrate your existing Twilio accounts with our platform. Just a few clicks to connect your phone numbers and WhatsApp Business accounts.",
    },
    Step {
        title: "AI handles inbound calls and messages",
        body: "Our advanced AI understands natural language to handle voice calls and text messages. It can answer questions, schedule appointments, and route important communications.",
    },
    Step {
        title: "Integrates with your tools",
        body: "Seamlessly connect with the tools you already use. Google Calendar integration allows the assistant to check availability, schedule meetings, and manage your time.",
    },
];

struct Channel {
    title: &'static str,
    body: &'static str,
    points: [&'static str; 3],
}

const CHANNELS: [Channel; 3] = [
    Channel {
        title: "Intelligent Voice Assistant",
        body: "Handle phone calls with ease using our advanced voice AI. It can understand customer inquiries, provide information, and route calls when necessary.",
        points: ["Natural language understanding", "Customizable responses", "Appointment scheduling"],
    },
    Channel {
        title: "WhatsApp Automation",
        body: "Provide instant responses on WhatsApp. Keep your customers engaged with quick replies and personalized messaging.",
        points: ["Rich media support", "Automated workflows", "Instant notifications"],
    },
    Channel {
        title: "Unified SMS Inbox",
        body: "Manage all your text communications in one place. Our AI can respond to common queries, freeing up your time for more important tasks.",
        points: ["Automated responses", "Message tagging and sorting", "Priority filtering"],
    },
];

const INTEGRATION_POINTS: [(&str, &str); 3] = [
    (
        "Schedule meetings via voice or text",
        "Your clients can book appointments simply by calling or messaging.",
    ),
    (
        "Sync availability automatically",
        "The assistant always knows your up-to-date schedule.",
    ),
    (
        "Reduce scheduling conflicts",
        "Avoid double-bookings and scheduling errors.",
    ),
];

/// Spacer height until the first measurement replaces it with the section's
/// real height plus the pin length.
fn spacer_style(pin_viewports: f64) -> String {
    format!("height: calc(100vh + {}vh);", pin_viewports * 100.0)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let steps_ref = use_node_ref();
    let channels_ref = use_node_ref();
    let integrations_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Wire the scroll animations. Dropping the host on unmount removes
    // every listener.
    {
        let hero_ref = hero_ref.clone();
        let steps_ref = steps_ref.clone();
        let channels_ref = channels_ref.clone();
        let integrations_ref = integrations_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut registry = ScrollRegistry::new();
                scroll::register_or_skip(
                    &mut registry,
                    "hero",
                    scroll::hero_parallax("hero", hero_ref.cast(), &animation::PARALLAX_LAYERS),
                );
                scroll::register_or_skip(
                    &mut registry,
                    "how-it-works",
                    scroll::pinned_steps(
                        "how-it-works",
                        steps_ref.cast(),
                        ".step",
                        PinLength::Viewports(animation::STEPS_PIN_VIEWPORTS),
                        SubItemStyle::steps(),
                    ),
                );
                scroll::register_or_skip(
                    &mut registry,
                    "channels",
                    scroll::pinned_steps(
                        "channels",
                        channels_ref.cast(),
                        ".channel",
                        PinLength::Viewports(animation::CHANNELS_PIN_VIEWPORTS),
                        SubItemStyle::channels(),
                    ),
                );
                scroll::register_or_skip(
                    &mut registry,
                    "integrations",
                    scroll::progress_reveal(
                        "integrations",
                        integrations_ref.cast(),
                        "#calendar-integration",
                        PinLength::Viewports(animation::INTEGRATIONS_PIN_VIEWPORTS),
                    ),
                );

                let host = match ScrollHost::attach(registry) {
                    Ok(host) => Some(host),
                    Err(e) => {
                        log::warn!("Scroll animations disabled: {}", e);
                        None
                    }
                };
                move || drop(host)
            },
            (),
        );
    }

    let step_style = SubItemStyle::steps();
    let channel_style = SubItemStyle::channels();
    let reveal_style = scroll::reveal_state(scroll::Progress::START).to_css();

    html! {
        <div class="page landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <Navbar />

            <section class="hero" ref={hero_ref}>
                <div class="container hero-inner">
                    <div class="hero-text">
                        <h1 class="hero-title">
                            {"Your AI Assistant, "}<br/>{"Everywhere You Communicate"}
                        </h1>
                        <p class="hero-subtitle">
                            {"Seamlessly handle Phone Calls, WhatsApp, and SMS with one intelligent voice + text assistant powered by Twilio."}
                        </p>
                        <p class="hero-body">
                            {"Connect once, communicate everywhere. Our AI-powered assistant handles your conversations across multiple channels, saving you time and ensuring you never miss important messages."}
                        </p>
                        <div class="hero-cta-group">
                            <a href={config::signup_url()} class="btn btn-primary btn-large">{"Get Started Free"}</a>
                            <a href="#how-it-works" class="btn btn-outline btn-large">{"See How It Works"}</a>
                        </div>
                    </div>
                    <div class="hero-visual" aria-hidden="true">
                        <svg class="hero-links" viewBox="0 0 500 400">
                            <line x1="140" y1="220" x2="250" y2="140" />
                            <line x1="250" y1="140" x2="380" y2="250" />
                            <line x1="140" y1="220" x2="380" y2="250" />
                        </svg>
                        <div id="phone-element" class="hero-layer hero-phone">
                            <svg viewBox="0 0 120 200">
                                <rect x="10" y="5" width="100" height="190" rx="16" class="shape-outline" />
                                <rect x="22" y="25" width="76" height="140" rx="4" class="shape-fill" />
                                <circle cx="60" cy="180" r="7" class="shape-outline" />
                            </svg>
                        </div>
                        <div id="cloud-element" class="hero-layer hero-cloud">
                            <svg viewBox="0 0 200 130">
                                <path d="M50 110 a35 35 0 0 1 0-70 a45 45 0 0 1 85-10 a38 38 0 0 1 15 80 z" class="shape-outline shape-fill" />
                                <text x="100" y="85" text-anchor="middle" class="shape-label">{"AI"}</text>
                            </svg>
                        </div>
                        <div id="calendar-element" class="hero-layer hero-calendar">
                            <svg viewBox="0 0 140 140">
                                <rect x="10" y="20" width="120" height="110" rx="10" class="shape-outline" />
                                <rect x="10" y="20" width="120" height="28" rx="10" class="shape-fill" />
                                <line x1="40" y1="10" x2="40" y2="32" class="shape-outline" />
                                <line x1="100" y1="10" x2="100" y2="32" class="shape-outline" />
                            </svg>
                        </div>
                    </div>
                </div>
            </section>

            <div class="pin-spacer" ref={steps_ref} style={spacer_style(animation::STEPS_PIN_VIEWPORTS)}>
                <section id="how-it-works" class="pinned section-muted">
                    <div class="container">
                        <h2 class="section-title">{"How Omni-Assistant Works"}</h2>
                        <div class="split">
                            <div class="split-content stacked">
                                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                                    <div class="step" style={step_style.for_item(i, 0).to_css()}>
                                        <div class="step-heading">
                                            <div class="step-number">{(i + 1).to_string()}</div>
                                            <h3>{step.title}</h3>
                                        </div>
                                        <p class="step-body">{step.body}</p>
                                    </div>
                                }) }
                            </div>
                            <div class="split-visual">
                                <div class="flow">
                                    <i class="fas fa-phone"></i>
                                    <i class="fas fa-arrow-right-long"></i>
                                    <i class="fas fa-robot"></i>
                                    <i class="fas fa-arrow-right-long"></i>
                                    <i class="fas fa-calendar-days"></i>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>
            </div>

            <div class="pin-spacer" ref={channels_ref} style={spacer_style(animation::CHANNELS_PIN_VIEWPORTS)}>
                <section id="features" class="pinned">
                    <div class="container">
                        <h2 class="section-title">{"One Assistant, Multiple Channels"}</h2>
                        <div class="split split-reverse">
                            <div class="split-visual">
                                <div class="channel-icons">
                                    <div class="channel-icon channel-icon-top"><i class="fas fa-phone"></i></div>
                                    <div class="channel-icon channel-icon-left"><i class="fab fa-whatsapp"></i></div>
                                    <div class="channel-icon channel-icon-right"><i class="fas fa-comment"></i></div>
                                </div>
                            </div>
                            <div class="split-content stacked">
                                { for CHANNELS.iter().enumerate().map(|(i, channel)| html! {
                                    <div class="channel" style={channel_style.for_item(i, 0).to_css()}>
                                        <h3>{channel.title}</h3>
                                        <p>{channel.body}</p>
                                        <ul class="check-list">
                                            { for channel.points.iter().map(|point| html! {
                                                <li><i class="fas fa-check"></i>{*point}</li>
                                            }) }
                                        </ul>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>
            </div>

            <div class="pin-spacer" ref={integrations_ref} style={spacer_style(animation::INTEGRATIONS_PIN_VIEWPORTS)}>
                <section id="integrations" class="pinned section-muted">
                    <div class="container">
                        <h2 class="section-title">{"Powerful Integrations"}</h2>
                        <div class="split">
                            <div class="split-content">
                                <h3>{"Google Calendar Integration"}</h3>
                                <p>{"Seamlessly connect your Google Calendar to enable the assistant to check your availability, schedule meetings, and manage your time efficiently."}</p>
                                <ul class="check-list roomy">
                                    { for INTEGRATION_POINTS.iter().map(|(title, detail)| html! {
                                        <li>
                                            <i class="fas fa-circle-check"></i>
                                            <div>
                                                <strong>{*title}</strong>
                                                <p class="muted">{*detail}</p>
                                            </div>
                                        </li>
                                    }) }
                                </ul>
                                <p class="muted small">{"More integrations coming soon!"}</p>
                            </div>
                            <div class="split-visual">
                                <div id="calendar-integration" style={reveal_style}>
                                    <div class="calendar-badge">
                                        <i class="fas fa-calendar-days"></i>
                                        <span class="calendar-sync"><i class="fas fa-rotate"></i></span>
                                    </div>
                                    <div class="calendar-card">
                                        <div class="calendar-event"><span class="dot dot-blue"></span>{"Meeting with Client"}</div>
                                        <div class="calendar-event"><span class="dot dot-green"></span>{"Team Standup"}</div>
                                        <div class="calendar-event"><span class="dot dot-yellow"></span>{"Project Review"}</div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>
            </div>

            <CallToAction />

            <Footer />

            <style>
                {r#"
                :root {
                    --primary-100: #E0F2FE;
                    --primary-500: #0EA5E9;
                    --primary-600: #0284C7;
                    --primary-700: #0369A1;
                    --gray-50: #F9FAFB;
                    --gray-200: #E5E7EB;
                    --gray-300: #D1D5DB;
                    --gray-500: #6B7280;
                    --gray-600: #4B5563;
                    --gray-700: #374151;
                    --gray-900: #111827;
                }
                body {
                    margin: 0;
                    font-family: 'Satoshi', sans-serif;
                    background: #fff;
                    color: var(--gray-900);
                }
                h1, h2, h3, .navbar-brand, .footer-brand {
                    font-family: 'General Sans', sans-serif;
                }
                .page {
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    width: 100%;
                    box-sizing: border-box;
                }
                .btn {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 0.375rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    text-align: center;
                    transition: background 0.3s, color 0.3s;
                }
                .btn-large {
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                    border-radius: 0.5rem;
                }
                .btn-primary {
                    background: var(--primary-600);
                    color: #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .btn-primary:hover {
                    background: var(--primary-700);
                }
                .btn-outline {
                    border: 1px solid var(--gray-300);
                    color: var(--gray-700);
                }
                .btn-outline:hover {
                    background: #F3F4F6;
                }

                .navbar {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                    background: transparent;
                    transition: all 0.3s ease-in-out;
                }
                .navbar.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    backdrop-filter: blur(12px);
                }
                .navbar-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.25rem 1rem;
                }
                .navbar-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--gray-900);
                    text-decoration: none;
                }
                .navbar-desktop {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                }
                .navbar-links {
                    display: flex;
                    gap: 2rem;
                }
                .navbar-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--gray-700);
                    text-decoration: none;
                }
                .navbar-link:hover {
                    color: var(--primary-600);
                }
                .navbar-auth {
                    display: flex;
                    gap: 1rem;
                }
                .navbar-toggle {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: var(--gray-700);
                    cursor: pointer;
                }
                .navbar-mobile {
                    display: flex;
                    flex-direction: column;
                    background: #fff;
                    padding: 1.5rem 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .navbar-mobile-link {
                    padding: 0.5rem 0;
                    font-weight: 500;
                    color: var(--gray-700);
                    text-decoration: none;
                }
                .navbar-mobile-auth {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 5rem 0;
                    box-sizing: border-box;
                }
                .hero-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                }
                .hero-text {
                    flex: 1;
                }
                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--gray-600);
                    max-width: 36rem;
                    margin-bottom: 2rem;
                }
                .hero-body {
                    color: var(--gray-600);
                    max-width: 36rem;
                    margin-bottom: 2.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                }
                .hero-visual {
                    flex: 1;
                    position: relative;
                    height: 500px;
                }
                .hero-links {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }
                .hero-links line {
                    stroke: var(--primary-500);
                    stroke-width: 2;
                    stroke-dasharray: 6 6;
                    opacity: 0.5;
                }
                .hero-layer {
                    position: absolute;
                    will-change: transform;
                }
                .hero-phone {
                    left: 12%;
                    top: 30%;
                    width: 110px;
                }
                .hero-cloud {
                    left: 38%;
                    top: 12%;
                    width: 170px;
                }
                .hero-calendar {
                    right: 12%;
                    top: 48%;
                    width: 120px;
                }
                .shape-outline {
                    fill: none;
                    stroke: var(--primary-600);
                    stroke-width: 4;
                }
                .shape-fill {
                    fill: var(--primary-100);
                }
                .shape-label {
                    fill: var(--primary-700);
                    font-size: 28px;
                    font-weight: 700;
                }

                .pin-spacer {
                    position: relative;
                }
                .pinned {
                    position: sticky;
                    top: 0;
                    min-height: 100vh;
                    padding: 6rem 0;
                    box-sizing: border-box;
                    overflow: hidden;
                    background: #fff;
                }
                .section-muted {
                    background: var(--gray-50);
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .split {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                }
                .split-content {
                    flex: 1;
                    max-width: 36rem;
                }
                .split-visual {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 320px;
                }
                .stacked {
                    display: grid;
                }
                .stacked > * {
                    grid-area: 1 / 1;
                }
                .step-heading {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .step-heading h3 {
                    font-size: 1.5rem;
                    margin: 0.25rem 0 1rem;
                }
                .step-number {
                    flex-shrink: 0;
                    height: 2.5rem;
                    width: 2.5rem;
                    border-radius: 9999px;
                    background: var(--primary-100);
                    color: var(--primary-600);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .step-body {
                    color: var(--gray-600);
                    margin-left: 3.5rem;
                }
                .flow {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 3rem;
                    color: var(--primary-600);
                }
                .flow .fa-arrow-right-long {
                    font-size: 1.5rem;
                    color: var(--gray-300);
                }
                .split-reverse {
                    flex-direction: row;
                }
                .channel h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .channel p {
                    color: var(--gray-600);
                    margin-bottom: 1.5rem;
                }
                .check-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .check-list.roomy {
                    gap: 1rem;
                }
                .check-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .check-list i {
                    margin-top: 0.25rem;
                    color: var(--primary-600);
                }
                .check-list p {
                    margin: 0.25rem 0 0;
                }
                .channel-icons {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    height: 20rem;
                }
                .channel-icon {
                    position: absolute;
                    font-size: 5rem;
                    color: var(--primary-600);
                    transition: transform 0.3s;
                }
                .channel-icon:hover {
                    transform: scale(1.05);
                }
                .channel-icon-top {
                    top: 0;
                    left: 50%;
                    margin-left: -2.5rem;
                }
                .channel-icon-left {
                    bottom: 0;
                    left: 0;
                    color: #25D366;
                }
                .channel-icon-right {
                    bottom: 0;
                    right: 0;
                }
                .muted {
                    color: var(--gray-500);
                }
                .small {
                    font-size: 0.875rem;
                    margin-top: 2rem;
                }
                #calendar-integration {
                    will-change: transform, opacity;
                }
                .calendar-badge {
                    position: relative;
                    font-size: 10rem;
                    color: var(--primary-600);
                    text-align: center;
                }
                .calendar-sync {
                    position: absolute;
                    right: -1rem;
                    top: -1rem;
                    height: 2rem;
                    width: 2rem;
                    border-radius: 9999px;
                    background: var(--primary-100);
                    font-size: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .calendar-card {
                    margin-top: 2rem;
                    background: #fff;
                    border: 1px solid var(--gray-200);
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 1rem;
                    transition: transform 0.3s;
                }
                .calendar-card:hover {
                    transform: translateY(-5px);
                }
                .calendar-event {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 500;
                    margin-bottom: 0.75rem;
                }
                .calendar-event:last-child {
                    margin-bottom: 0;
                }
                .dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                }
                .dot-blue { background: var(--primary-500); }
                .dot-green { background: #22C55E; }
                .dot-yellow { background: #EAB308; }

                .cta {
                    padding: 4rem 0;
                    background: var(--primary-600);
                    color: #fff;
                    text-align: center;
                }
                .cta h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .cta p {
                    font-size: 1.25rem;
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                }
                .btn-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    background: #fff;
                    color: var(--primary-700);
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-decoration: none;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: background 0.3s;
                }
                .btn-cta:hover {
                    background: var(--gray-50);
                }

                .footer {
                    width: 100%;
                    border-top: 1px solid var(--gray-200);
                    background: #fff;
                    padding: 2rem 0;
                    margin-top: auto;
                }
                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .footer-brand {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: var(--gray-900);
                    text-decoration: none;
                }
                .footer-copy {
                    font-size: 0.875rem;
                    color: var(--gray-500);
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    font-size: 0.875rem;
                    color: var(--gray-500);
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: var(--gray-700);
                }
                .not-found {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1rem;
                    text-align: center;
                }

                @media (max-width: 768px) {
                    .navbar-desktop {
                        display: none;
                    }
                    .navbar-toggle {
                        display: block;
                    }
                    .hero-inner,
                    .split {
                        flex-direction: column;
                        text-align: center;
                    }
                    .split-reverse {
                        flex-direction: column-reverse;
                    }
                    .hero-title {
                        font-size: 2.25rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                    .hero-visual {
                        width: 100%;
                        height: 320px;
                    }
                    .section-title {
                        font-size: 1.875rem;
                        margin-bottom: 2rem;
                    }
                    .step-body {
                        margin-left: 0;
                    }
                    .footer-inner {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section id="cta" class="cta">
            <div class="container">
                <h2>{"Ready to Unify Your Communication?"}</h2>
                <p>{"Join thousands of businesses using Omni-Assistant to streamline their customer interactions."}</p>
                <a href={config::signup_url()} class="btn-cta">
                    {"Start Now"}
                    <i class="fas fa-arrow-right"></i>
                </a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacer_adds_pin_length_to_one_screen() {
        assert_eq!(spacer_style(1.5), "height: calc(100vh + 150vh);");
        assert_eq!(spacer_style(1.0), "height: calc(100vh + 100vh);");
    }

    #[test]
    fn copy_matches_animated_item_counts() {
        assert_eq!(STEPS.len(), 3);
        assert_eq!(CHANNELS.len(), 3);
        assert!(CHANNELS.iter().all(|c| c.points.len() == 3));
    }
}
