use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page">
            <Navbar />
            <main class="not-found">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to home"}
                </Link<Route>>
            </main>
            <Footer />
        </div>
    }
}
