use std::rc::Rc;

use backend::AppConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::dashboard::Dashboard;
use components::gallery::Gallery;
use components::header::Header;
use components::home_panel::HomePanel;
use components::plant_manager::PlantManager;
use hooks::use_plants::use_plants;
use services::config::load_app_config;

/// Top-level views selectable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Dashboard,
    Plants,
    Gallery,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Dashboard, Tab::Plants, Tab::Gallery];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Dashboard => "Dashboard",
            Tab::Plants => "My Plants",
            Tab::Gallery => "Gallery",
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<AppConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let plants = use_plants(&config);
    let active_tab = use_state(|| Tab::Home);

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let due_count = plants
        .state
        .plants
        .iter()
        .filter(|p| p.is_due(plants.state.today))
        .count();

    html! {
        <div class="app">
            <Header
                active_tab={*active_tab}
                due_count={due_count}
                on_select_tab={on_select_tab.clone()}
            />
            <main class="container">
                {match *active_tab {
                    Tab::Home => html! {
                        <HomePanel on_navigate={on_select_tab} />
                    },
                    Tab::Dashboard => html! {
                        <Dashboard
                            plants={plants.state.plants.clone()}
                            today={plants.state.today}
                            upcoming_limit={config.upcoming_limit}
                            on_water={plants.actions.water_plant.clone()}
                        />
                    },
                    Tab::Plants => html! {
                        <PlantManager
                            plants={plants.state.plants.clone()}
                            today={plants.state.today}
                            config={config.clone()}
                            actions={plants.actions.clone()}
                        />
                    },
                    Tab::Gallery => html! {
                        <Gallery
                            plants={plants.state.plants.clone()}
                            config={config.clone()}
                            mode={config.gallery_mode}
                        />
                    },
                }}
            </main>
        </div>
    }
}

fn main() {
    let config = load_app_config();
    services::logging::init(config.log_level());
    log::info!("Starting plant tracker");

    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
}
