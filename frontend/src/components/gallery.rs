use std::rc::Rc;

use backend::domain::build_gallery;
use backend::AppConfig;
use shared::{GalleryLayout, GalleryMode, Plant};
use yew::prelude::*;

use super::carousel_modal::CarouselModal;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub plants: Vec<Plant>,
    pub config: Rc<AppConfig>,
    /// Which layouts this gallery offers
    pub mode: GalleryMode,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let layout = use_state(|| props.mode.default_layout());
    let selected = use_state(|| Option::<u64>::None);

    let entries = use_memo(
        (props.plants.clone(), props.config.clone()),
        |(plants, config)| build_gallery(plants, config),
    );

    // A mode change can leave the current layout unavailable
    let current_layout = if props.mode.layouts().contains(&*layout) {
        *layout
    } else {
        props.mode.default_layout()
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let layout_toggle = if props.mode.layouts().len() > 1 {
        html! {
            <div class="layout-toggle">
                {for props.mode.layouts().iter().map(|&option| {
                    let on_click = {
                        let layout = layout.clone();
                        Callback::from(move |_: MouseEvent| layout.set(option))
                    };
                    let class = classes!("btn", (option == current_layout).then_some("active"));
                    html! { <button {class} onclick={on_click}>{option.label()}</button> }
                })}
            </div>
        }
    } else {
        html! {}
    };

    let container_class = match current_layout {
        GalleryLayout::Grid => "gallery-grid",
        GalleryLayout::List => "gallery-list",
    };

    let open_entry = (*selected).and_then(|id| entries.iter().find(|e| e.plant.id == id).cloned());

    html! {
        <section class="gallery">
            <div class="toolbar">
                <h2>{"📸 Plant Gallery"}</h2>
                {layout_toggle}
            </div>

            {if entries.is_empty() {
                html! { <p class="empty-state">{"No plants to show yet."}</p> }
            } else {
                html! {
                    <div class={container_class}>
                        {for entries.iter().map(|entry| {
                            let on_open = {
                                let selected = selected.clone();
                                let id = entry.plant.id;
                                let name = entry.plant.name.clone();
                                Callback::from(move |_: MouseEvent| {
                                    Logger::debug_with_component("gallery", &format!("Opening photos for {}", name));
                                    selected.set(Some(id));
                                })
                            };
                            let cover = entry.photos.last().cloned().unwrap_or_default();
                            html! {
                                <div key={entry.plant.id} class="gallery-item" onclick={on_open}>
                                    <img src={cover} alt={entry.plant.name.clone()} />
                                    <div class="gallery-caption">
                                        <strong>{&entry.plant.name}</strong>
                                        <span class="muted">{&entry.plant.plant_type}</span>
                                        {if current_layout == GalleryLayout::List {
                                            html! {
                                                <span class="muted">
                                                    {format!("{} · {} photos", entry.plant.health, entry.photos.len())}
                                                </span>
                                            }
                                        } else { html! {} }}
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}

            {if let Some(entry) = open_entry {
                html! { <CarouselModal key={entry.plant.id} entry={entry.clone()} {on_close} /> }
            } else { html! {} }}
        </section>
    }
}
