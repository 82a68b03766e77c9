use backend::domain::PlantForm;
use shared::{HealthStatus, Humidity, MAX_WATERING_FREQUENCY, MIN_WATERING_FREQUENCY, PLANT_TYPES, SUNLIGHT_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlantFieldsProps {
    pub form: PlantForm,
    pub on_change: Callback<PlantForm>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Inputs shared by the create form and the card's edit mode
#[function_component(PlantFields)]
pub fn plant_fields(props: &PlantFieldsProps) -> Html {
    // Builds an input handler that writes the element's value into one form field
    let text_input = |apply: fn(&mut PlantForm, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = form.clone();
            apply(&mut form, input.value());
            on_change.emit(form);
        })
    };
    let select_input = |apply: fn(&mut PlantForm, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut form = form.clone();
            apply(&mut form, select.value());
            on_change.emit(form);
        })
    };
    let on_notes = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(PlantForm { notes: area.value(), ..form.clone() });
        })
    };

    let form = &props.form;
    let type_known = PLANT_TYPES.contains(&form.plant_type.as_str());

    html! {
        <div class="plant-fields">
            <div class="form-group">
                <label>{"Name *"}</label>
                <input
                    type="text"
                    placeholder="Monstera, Basil, ..."
                    value={form.name.clone()}
                    oninput={text_input(|f, v| f.name = v)}
                    disabled={props.disabled}
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>{"Type"}</label>
                    <select onchange={select_input(|f, v| f.plant_type = v)} disabled={props.disabled}>
                        {if type_known { html! {} } else {
                            html! { <option value={form.plant_type.clone()} selected=true>{&form.plant_type}</option> }
                        }}
                        {for PLANT_TYPES.iter().map(|&t| html! {
                            <option value={t} selected={form.plant_type == t}>{t}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Water every (days)"}</label>
                    <input
                        type="number"
                        min={MIN_WATERING_FREQUENCY.to_string()}
                        max={MAX_WATERING_FREQUENCY.to_string()}
                        value={form.watering_frequency.clone()}
                        oninput={text_input(|f, v| f.watering_frequency = v)}
                        disabled={props.disabled}
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>{"Sunlight"}</label>
                    <select onchange={select_input(|f, v| f.sunlight = v)} disabled={props.disabled}>
                        {for SUNLIGHT_OPTIONS.iter().map(|&s| html! {
                            <option value={s} selected={form.sunlight == s}>{s}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Temperature"}</label>
                    <input
                        type="text"
                        placeholder="18-24°C"
                        value={form.temperature.clone()}
                        oninput={text_input(|f, v| f.temperature = v)}
                        disabled={props.disabled}
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>{"Humidity"}</label>
                    <select
                        onchange={select_input(|f, v| {
                            if let Some(h) = Humidity::from_label(&v) { f.humidity = h; }
                        })}
                        disabled={props.disabled}
                    >
                        {for Humidity::ALL.iter().map(|h| html! {
                            <option value={h.as_str()} selected={form.humidity == *h}>{h.as_str()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Health"}</label>
                    <select
                        onchange={select_input(|f, v| {
                            if let Some(h) = HealthStatus::from_label(&v) { f.health = h; }
                        })}
                        disabled={props.disabled}
                    >
                        {for HealthStatus::ALL.iter().map(|h| html! {
                            <option value={h.as_str()} selected={form.health == *h}>{h.as_str()}</option>
                        })}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label>{"Image URL"}</label>
                <input
                    type="url"
                    placeholder="https://..."
                    value={form.image.clone()}
                    oninput={text_input(|f, v| f.image = v)}
                    disabled={props.disabled}
                />
            </div>

            <div class="form-group">
                <label>{"Notes"}</label>
                <textarea
                    rows="3"
                    value={form.notes.clone()}
                    oninput={on_notes}
                    disabled={props.disabled}
                />
            </div>
        </div>
    }
}
