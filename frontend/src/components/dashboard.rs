use backend::domain::{build_dashboard, days_until_watering, describe_days_until};
use chrono::NaiveDate;
use shared::Plant;
use yew::prelude::*;

use crate::services::date_utils::format_short_date;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub plants: Vec<Plant>,
    pub today: NaiveDate,
    pub upcoming_limit: usize,
    pub on_water: Callback<u64>,
}

fn stat_card(label: &str, value: usize, class: &'static str) -> Html {
    html! {
        <div class={classes!("stat-card", class)}>
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let view = use_memo(
        (props.plants.clone(), props.today, props.upcoming_limit),
        |(plants, today, limit)| build_dashboard(plants, *today, *limit),
    );
    let stats = &view.stats;

    html! {
        <section class="dashboard">
            <div class="stats-grid">
                {stat_card("Total Plants", stats.total, "total")}
                {stat_card("Need Water", stats.needs_water, "due")}
                {stat_card("Excellent Health", stats.excellent, "excellent")}
                {stat_card("Good Health", stats.good, "good")}
                {stat_card("Poor Health", stats.poor, "poor")}
            </div>

            <div class="dashboard-lists">
                <div class="panel due-today">
                    <h2>{"💧 Water Today"}</h2>
                    {if view.due_today.is_empty() {
                        html! { <p class="empty-state">{"All caught up! No plants need water today."}</p> }
                    } else {
                        html! {
                            <ul>
                                {for view.due_today.iter().map(|plant| {
                                    let on_click = {
                                        let on_water = props.on_water.clone();
                                        let id = plant.id;
                                        Callback::from(move |_: MouseEvent| on_water.emit(id))
                                    };
                                    let overdue = describe_days_until(days_until_watering(plant.next_watering, props.today));
                                    html! {
                                        <li key={plant.id} class="due-item">
                                            <div>
                                                <strong>{&plant.name}</strong>
                                                <span class="muted">{format!(" · {} · {}", plant.plant_type, overdue)}</span>
                                            </div>
                                            <button class="btn btn-water" onclick={on_click}>{"Water now"}</button>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </div>

                <div class="panel upcoming">
                    <h2>{"📅 Upcoming"}</h2>
                    {if view.upcoming.is_empty() {
                        html! { <p class="empty-state">{"Nothing scheduled yet."}</p> }
                    } else {
                        html! {
                            <ul>
                                {for view.upcoming.iter().map(|plant| {
                                    let days = days_until_watering(plant.next_watering, props.today);
                                    html! {
                                        <li key={plant.id} class="upcoming-item">
                                            <strong>{&plant.name}</strong>
                                            <span class="muted">
                                                {format!("{} ({})", format_short_date(plant.next_watering), describe_days_until(days))}
                                            </span>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
