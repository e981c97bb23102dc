use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::panels::SelectOption;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub value: String,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub required: bool,
    pub onchange: Callback<String>,
}

/// A `<select>` whose shown value always follows `value`.
///
/// Once the user has picked an option the browser stops honouring the
/// `selected` attribute, so the value is written onto the element after
/// every render.
#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        let value = props.value.clone();
        use_effect(move || {
            if let Some(select) = node.cast::<HtmlSelectElement>() {
                if select.value() != value {
                    select.set_value(&value);
                }
            }
            || ()
        });
    }

    let onchange = props.onchange.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <select ref={node} required={props.required} {onchange}>
            { for props.options.iter().map(|option| html! {
                <option value={option.value.clone()} selected={option.value == props.value}>
                    { option.label.clone() }
                </option>
            }) }
        </select>
    }
}
