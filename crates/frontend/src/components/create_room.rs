use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::choice::Choice;
use crate::form::{CreateRoomForm, SubmitError};
use crate::route::Route;

pub enum Msg {
    SetGuestCanPause(bool),
    SetVotesToSkip(String),
    Submit,
    Submitted(anyhow::Result<Value>),
}

pub struct CreateRoom {
    form: CreateRoomForm,
    votes_input: NodeRef,
}

impl Component for CreateRoom {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CreateRoomForm::default(),
            votes_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetGuestCanPause(guest_can_pause) => {
                self.form.set_guest_can_pause(guest_can_pause);
            }
            Msg::SetVotesToSkip(raw) => {
                self.form.set_votes_to_skip(&raw);
            }
            Msg::Submit => match self.form.begin_submit() {
                Ok(req) => {
                    log::info!("creating room: {:?}", req);
                    ctx.link().send_future(async move {
                        Msg::Submitted(api::create_room(&req).await)
                    });
                }
                Err(err @ SubmitError::InFlight) => {
                    log::warn!("submit ignored: {}", err);
                    return false;
                }
                Err(err) => {
                    log::warn!("submit refused: {}", err);
                }
            },
            Msg::Submitted(res) => {
                match &res {
                    Ok(room) => log::info!("room created: {}", room),
                    Err(err) => log::error!("create room failed: {:#}", err),
                }
                self.form.finish_submit(res);
            }
        };

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let pending = self.form.is_pending();
        let guest_can_pause = self.form.guest_can_pause();

        let status = if let Some(err) = self.form.error() {
            html! { <p class="error">{ err.to_owned() }</p> }
        } else if self.form.last_response().is_some() {
            html! { <p class="success">{ "Room created" }</p> }
        } else {
            html! {}
        };

        html! {
            <div class="create-room">
                <h4>{ "Create a New Room" }</h4>

                <fieldset>
                    <legend>{ "Guest control of playback state" }</legend>
                    <Choice
                        name="guest-can-pause"
                        label="Play/Pause"
                        checked={guest_can_pause}
                        disabled={pending}
                        onselect={link.callback(|_| Msg::SetGuestCanPause(true))} />
                    <Choice
                        name="guest-can-pause"
                        label="No Control"
                        checked={!guest_can_pause}
                        disabled={pending}
                        onselect={link.callback(|_| Msg::SetGuestCanPause(false))} />
                </fieldset>

                <label class="votes-to-skip">
                    <input
                        type="number"
                        required={true}
                        min="1"
                        ref={self.votes_input.clone()}
                        disabled={pending}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetVotesToSkip(input.value())
                        })} />
                    <span>{ "Votes required to skip" }</span>
                </label>

                <button
                    disabled={pending}
                    onclick={link.callback(|_| Msg::Submit)}>
                {
                    if pending {
                        "Creating room..."
                    } else {
                        "Create A Room"
                    }
                }
                </button>

                { status }

                <Link<Route> to={Route::Home}>{ "Back" }</Link<Route>>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        // The input is only seeded once; afterwards the browser owns its text.
        if first_render {
            if let (Some(input), Some(votes)) = (
                self.votes_input.cast::<HtmlInputElement>(),
                self.form.votes_to_skip().value(),
            ) {
                input.set_value(&votes.to_string());
            }
        }
    }
}
