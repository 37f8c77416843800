use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Landing}>{"Back to the start"}</Link<Route>>
        </div>
    }
}
