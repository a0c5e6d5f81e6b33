use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChoiceProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub disabled: bool,
    pub onselect: Callback<()>,
}

/// One option of a radio group, labelled underneath.
pub struct Choice;

impl Component for Choice {
    type Message = ();
    type Properties = ChoiceProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let class = if props.checked { "choice selected" } else { "choice" };

        html! {
            <label class={class}>
                <input
                    type="radio"
                    name={props.name.clone()}
                    checked={props.checked}
                    disabled={props.disabled}
                    onchange={props.onselect.reform(|_: Event| ())} />
                <span>{ props.label.clone() }</span>
            </label>
        }
    }
}
