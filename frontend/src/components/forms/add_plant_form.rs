use backend::domain::PlantForm;
use shared::PlantDraft;
use yew::prelude::*;

use super::plant_fields::PlantFields;

#[derive(Properties, PartialEq)]
pub struct AddPlantFormProps {
    pub on_add: Callback<PlantDraft>,
    pub on_cancel: Callback<()>,
}

#[function_component(AddPlantForm)]
pub fn add_plant_form(props: &AddPlantFormProps) -> Html {
    let form = use_state(PlantForm::default);
    let form_error = use_state(|| Option::<String>::None);

    let on_change = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |updated: PlantForm| {
            form_error.set(None);
            form.set(updated);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_draft() {
                Ok(draft) => {
                    on_add.emit(draft);
                    form.set(PlantForm::default());
                }
                Err(error) => form_error.set(Some(error.to_string())),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="add-plant-form panel" onsubmit={on_submit}>
            <h2>{"🌱 Add a Plant"}</h2>

            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <PlantFields form={(*form).clone()} {on_change} />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">{"Add Plant"}</button>
                <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}
