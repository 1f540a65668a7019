use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::config::animation::NAVBAR_SCROLL_THRESHOLD;
use crate::Route;

const SECTION_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#docs", "Docs"),
];

fn has_scrolled() -> bool {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .map(|y| y > NAVBAR_SCROLL_THRESHOLD)
        .unwrap_or(false)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    // Turn opaque once the page has scrolled a bit
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || scrolled.set(has_scrolled())
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to add navbar scroll listener: {:?}", e);
                    }
                    // Initial call
                    scrolled.set(has_scrolled());
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Err(e) = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                log::warn!("Failed to remove navbar scroll listener: {:?}", e);
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };
    let close_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    {"Omni-Assistant"}
                </Link<Route>>

                <div class="navbar-desktop">
                    <div class="navbar-links">
                        { for SECTION_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="navbar-link">{*label}</a>
                        }) }
                    </div>
                    <div class="navbar-auth">
                        <a href={config::login_url()} class="btn btn-outline">{"Login"}</a>
                        <a href={config::signup_url()} class="btn btn-primary">{"Sign Up"}</a>
                    </div>
                </div>

                <button
                    class="navbar-toggle"
                    onclick={toggle_menu}
                    aria-label={if *is_menu_open { "Close Menu" } else { "Open Menu" }}
                >
                    <i class={if *is_menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                </button>
            </div>

            if *is_menu_open {
                <div class="navbar-mobile">
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="navbar-mobile-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <div class="navbar-mobile-auth">
                        <a href={config::login_url()} class="btn btn-outline" onclick={close_menu.clone()}>{"Login"}</a>
                        <a href={config::signup_url()} class="btn btn-primary" onclick={close_menu.clone()}>{"Sign Up"}</a>
                    </div>
                </div>
            }
        </nav>
    }
}
