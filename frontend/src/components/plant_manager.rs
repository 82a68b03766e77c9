use std::rc::Rc;

use backend::domain::{filter_plants, type_filter_options, PlantFilter, TypeFilter};
use backend::AppConfig;
use chrono::NaiveDate;
use gloo::timers::callback::Timeout;
use shared::{Plant, PlantDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::forms::add_plant_form::AddPlantForm;
use super::plant_card::PlantCard;
use crate::hooks::use_plants::UsePlantsActions;

#[derive(Properties, PartialEq)]
pub struct PlantManagerProps {
    pub plants: Vec<Plant>,
    pub today: NaiveDate,
    pub config: Rc<AppConfig>,
    pub actions: UsePlantsActions,
}

#[function_component(PlantManager)]
pub fn plant_manager(props: &PlantManagerProps) -> Html {
    let search = use_state(String::new);
    let type_filter = use_state(TypeFilter::default);
    let show_form = use_state(|| false);
    let form_success = use_state(|| false);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_type_filter = {
        let type_filter = type_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            type_filter.set(TypeFilter::from_value(&select.value()));
        })
    };

    let on_toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
    };

    let on_cancel_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: ()| show_form.set(false))
    };

    let on_add = {
        let add_plant = props.actions.add_plant.clone();
        let show_form = show_form.clone();
        let form_success = form_success.clone();
        Callback::from(move |draft: PlantDraft| {
            add_plant.emit(draft);
            show_form.set(false);
            form_success.set(true);

            let form_success = form_success.clone();
            Timeout::new(3_000, move || form_success.set(false)).forget();
        })
    };

    let filter = PlantFilter {
        search: (*search).clone(),
        type_filter: (*type_filter).clone(),
    };
    let visible = filter_plants(&props.plants, &filter);
    let options = type_filter_options(&props.plants);

    html! {
        <section class="plant-manager">
            <div class="toolbar">
                <input
                    type="search"
                    class="search"
                    placeholder="Search by name or type..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <select class="type-filter" onchange={on_type_filter}>
                    {for options.iter().map(|option| html! {
                        <option value={option.value().to_string()} selected={*option == *type_filter}>
                            {option.label()}
                        </option>
                    })}
                </select>
                <button class="btn btn-primary" onclick={on_toggle_form}>
                    {if *show_form { "Close Form" } else { "+ Add Plant" }}
                </button>
            </div>

            {if *form_success {
                html! { <div class="form-message success">{"🎉 Plant added!"}</div> }
            } else { html! {} }}

            {if *show_form {
                html! { <AddPlantForm {on_add} on_cancel={on_cancel_form} /> }
            } else { html! {} }}

            <p class="muted result-count">
                {format!("Showing {} of {} plants", visible.len(), props.plants.len())}
            </p>

            {if visible.is_empty() {
                html! { <p class="empty-state">{"No plants match your search."}</p> }
            } else {
                html! {
                    <div class="plant-grid">
                        {for visible.into_iter().map(|plant| html! {
                            <PlantCard
                                key={plant.id}
                                plant={plant.clone()}
                                today={props.today}
                                fallback_image={AttrValue::from(props.config.fallback_image.clone())}
                                on_update={props.actions.update_plant.clone()}
                                on_delete={props.actions.delete_plant.clone()}
                                on_water={props.actions.water_plant.clone()}
                            />
                        })}
                    </div>
                }
            }}
        </section>
    }
}
