use backend::domain::Carousel;
use shared::GalleryEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarouselModalProps {
    pub entry: GalleryEntry,
    pub on_close: Callback<()>,
}

#[function_component(CarouselModal)]
pub fn carousel_modal(props: &CarouselModalProps) -> Html {
    let carousel = use_state(|| Carousel::new(props.entry.photos.len()));

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.previous_photo()))
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next_photo()))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop's close handler
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let plant = &props.entry.plant;
    let current = props.entry.photos.get(carousel.index()).cloned().unwrap_or_default();

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal carousel-modal" onclick={stop_propagation}>
                <div class="modal-header">
                    <h2>{&plant.name}</h2>
                    <button class="btn btn-close" onclick={on_close}>{"✕"}</button>
                </div>

                <div class="carousel">
                    <button class="btn carousel-nav" onclick={on_previous}>{"‹"}</button>
                    <img class="carousel-image" src={current} alt={plant.name.clone()} />
                    <button class="btn carousel-nav" onclick={on_next}>{"›"}</button>
                </div>
                <p class="muted carousel-position">
                    {format!("{} / {}", carousel.index() + 1, carousel.len())}
                </p>

                <div class="thumbnails">
                    {for props.entry.photos.iter().enumerate().map(|(index, photo)| {
                        let on_select = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.set(carousel.select(index)))
                        };
                        let class = classes!("thumbnail", (index == carousel.index()).then_some("active"));
                        html! { <img {class} src={photo.clone()} onclick={on_select} /> }
                    })}
                </div>

                <p class="plant-notes">
                    {format!("{} · {} · water every {} days", plant.plant_type, plant.sunlight, plant.watering_frequency)}
                </p>
            </div>
        </div>
    }
}
