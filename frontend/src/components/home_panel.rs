use yew::prelude::*;

use crate::Tab;

#[derive(Properties, PartialEq)]
pub struct HomePanelProps {
    pub on_navigate: Callback<Tab>,
}

const NAV_CARDS: [(Tab, &str, &str); 3] = [
    (Tab::Dashboard, "📊", "See which plants need water today and what is coming up."),
    (Tab::Plants, "🪴", "Add new plants, edit care details, and log waterings."),
    (Tab::Gallery, "📸", "Browse photos of your collection."),
];

#[function_component(HomePanel)]
pub fn home_panel(props: &HomePanelProps) -> Html {
    html! {
        <section class="home-panel">
            <div class="hero">
                <h2>{"Keep every plant happy"}</h2>
                <p>
                    {"Track watering schedules, sunlight and humidity needs, and the health of \
                      each plant in one place. Everything stays in your browser."}
                </p>
            </div>
            <div class="nav-cards">
                {for NAV_CARDS.iter().map(|&(tab, icon, blurb)| {
                    let on_click = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(tab))
                    };
                    html! {
                        <div class="nav-card">
                            <div class="nav-card-icon">{icon}</div>
                            <h3>{tab.label()}</h3>
                            <p>{blurb}</p>
                            <button class="btn btn-primary" onclick={on_click}>
                                {format!("Open {}", tab.label())}
                            </button>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
