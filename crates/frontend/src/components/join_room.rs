use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

pub struct JoinRoom;

impl Component for JoinRoom {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="join-room">
                <h4>{ "Join a Room" }</h4>
                <Link<Route> to={Route::Home}>{ "Back" }</Link<Route>>
            </div>
        }
    }
}
