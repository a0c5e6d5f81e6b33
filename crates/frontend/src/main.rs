mod api;
mod components;
mod form;
mod route;

use yew::prelude::*;
use yew_router::prelude::*;

use route::{switch, Route};

struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <BrowserRouter>
                    <h1>{ "Music Controller" }</h1>
                    <nav>
                        <Link<Route> to={Route::JoinRoom}>{ "Join a room" }</Link<Route>>
                    </nav>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    yew::Renderer::<App>::new().render();
}
