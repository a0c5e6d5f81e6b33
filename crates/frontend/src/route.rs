use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::create_room::CreateRoom;
use crate::components::home::Home;
use crate::components::join_room::JoinRoom;
use crate::components::not_found::NotFound;

/// Client routes. Paths match exactly; anything else lands on `NotFound`.
#[derive(Routable, PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/join")]
    JoinRoom,
    #[at("/create")]
    CreateRoom,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub(crate) fn switch(route: Route) -> Html {
    log::info!("rendering {:?}", route);

    match route {
        Route::Home => {
            html! { <Home /> }
        }
        Route::JoinRoom => {
            html! { <JoinRoom /> }
        }
        Route::CreateRoom => {
            html! { <CreateRoom /> }
        }
        Route::NotFound => {
            html! { <NotFound /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_paths_resolve_to_their_page() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/join"), Some(Route::JoinRoom));
        assert_eq!(Route::recognize("/create"), Some(Route::CreateRoom));
    }

    #[test]
    fn unmatched_paths_fall_back_to_not_found() {
        for path in ["/rooms", "/api/create-room", "/joinroom", "/create/extra"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{}", path);
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::recognize("/join/"), Some(Route::JoinRoom));
        assert_eq!(Route::recognize("/create/"), Some(Route::CreateRoom));
    }

    #[test]
    fn paths_are_case_sensitive() {
        assert_eq!(Route::recognize("/JOIN"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/Create"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::JoinRoom.to_path(), "/join");
        assert_eq!(Route::CreateRoom.to_path(), "/create");
    }
}
