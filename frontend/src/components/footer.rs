use web_sys::js_sys;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <Link<Route> to={Route::Home} classes="footer-brand">
                    {"Omni-Assistant"}
                </Link<Route>>
                <div class="footer-copy">
                    {format!("© {} Omni-Assistant. All rights reserved.", current_year)}
                </div>
                <div class="footer-links">
                    <a href="/privacy">{"Privacy Policy"}</a>
                    <a href="/terms">{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}
