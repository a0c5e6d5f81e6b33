use musicroom_common::{CREATE_ROOM_PATH, LIST_ROOMS_PATH};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <p>{ "Vote on the music together. Join an existing room or start a new one." }</p>
                <ul>
                    <li><Link<Route> to={Route::JoinRoom}>{ "Join a room" }</Link<Route>></li>
                    <li><Link<Route> to={Route::CreateRoom}>{ "Create a room" }</Link<Route>></li>
                    // Served by the backend, not the client router.
                    <li><a href={CREATE_ROOM_PATH}>{ "API: create-room" }</a></li>
                    <li><a href={LIST_ROOMS_PATH}>{ "API: rooms" }</a></li>
                </ul>
            </>
        }
    }
}
