use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found">
                <h1>{ "404" }</h1>
                <p>{ "Page not found" }</p>
                <Link<Route> to={Route::Home}>{ "Go home" }</Link<Route>>
            </div>
        }
    }
}
