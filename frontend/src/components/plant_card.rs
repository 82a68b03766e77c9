use backend::domain::{days_since_watered, describe_days_until, watering_status, PlantForm};
use chrono::NaiveDate;
use shared::{Plant, PlantPatch};
use yew::prelude::*;

use super::forms::plant_fields::PlantFields;
use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct PlantCardProps {
    pub plant: Plant,
    pub today: NaiveDate,
    pub fallback_image: AttrValue,
    pub on_update: Callback<(u64, PlantPatch)>,
    pub on_delete: Callback<u64>,
    pub on_water: Callback<u64>,
}

#[function_component(PlantCard)]
pub fn plant_card(props: &PlantCardProps) -> Html {
    let editing = use_state(|| false);
    let draft = use_state(|| PlantForm::from_plant(&props.plant));
    let edit_error = use_state(|| Option::<String>::None);

    let on_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let edit_error = edit_error.clone();
        let plant = props.plant.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(PlantForm::from_plant(&plant));
            edit_error.set(None);
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_save = {
        let editing = editing.clone();
        let draft = draft.clone();
        let edit_error = edit_error.clone();
        let plant = props.plant.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.to_patch(&plant) {
                Ok(patch) => {
                    if !patch.is_empty() {
                        on_update.emit((plant.id, patch));
                    }
                    editing.set(false);
                }
                Err(error) => edit_error.set(Some(error.to_string())),
            }
        })
    };

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |form: PlantForm| draft.set(form))
    };

    let on_water = {
        let on_water = props.on_water.clone();
        let id = props.plant.id;
        Callback::from(move |_: MouseEvent| on_water.emit(id))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = props.plant.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    let plant = &props.plant;

    if *editing {
        return html! {
            <form class="plant-card editing" onsubmit={on_save}>
                {if let Some(error) = edit_error.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}
                <PlantFields form={(*draft).clone()} on_change={on_draft_change} />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Save"}</button>
                    <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </form>
        };
    }

    let status = watering_status(plant, props.today);
    let image = plant
        .image_url()
        .map(|url| AttrValue::from(url.to_string()))
        .unwrap_or_else(|| props.fallback_image.clone());
    let health_class = format!("health-{}", plant.health.as_str().to_lowercase());
    let watered_ago = match days_since_watered(plant, props.today) {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d => format!("{} days ago", d),
    };

    html! {
        <div class="plant-card">
            <img class="plant-image" src={image} alt={plant.name.clone()} />
            <div class="plant-body">
                <div class="plant-title">
                    <h3>{&plant.name}</h3>
                    <span class={classes!("health-badge", health_class)}>{plant.health.as_str()}</span>
                </div>
                <p class="muted">{&plant.plant_type}</p>

                <div class={classes!("watering", status.urgency.css_class())}>
                    <span>{"💧 "}{describe_days_until(status.days_until)}</span>
                    <span class="muted">{format!("every {} days", plant.watering_frequency)}</span>
                </div>

                <dl class="care-details">
                    <dt>{"Sunlight"}</dt><dd>{&plant.sunlight}</dd>
                    <dt>{"Temperature"}</dt><dd>{&plant.temperature}</dd>
                    <dt>{"Humidity"}</dt><dd>{plant.humidity.as_str()}</dd>
                    <dt>{"Last watered"}</dt><dd>{watered_ago}</dd>
                    <dt>{"Next watering"}</dt><dd>{format_date_for_display(plant.next_watering)}</dd>
                </dl>

                {if let Some(notes) = &plant.notes {
                    html! { <p class="plant-notes">{notes}</p> }
                } else { html! {} }}

                <div class="card-actions">
                    <button class="btn btn-water" onclick={on_water}>{"Water now"}</button>
                    <button class="btn" onclick={on_edit}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
