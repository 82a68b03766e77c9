use yew::prelude::*;

use crate::Tab;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_tab: Tab,
    /// Plants due today, shown as a badge on the dashboard tab
    pub due_count: usize,
    pub on_select_tab: Callback<Tab>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"🌿 Plant Care Tracker"}</h1>
                <nav class="header-tabs">
                    {for Tab::ALL.iter().map(|&tab| {
                        let on_click = {
                            let on_select_tab = props.on_select_tab.clone();
                            Callback::from(move |_: MouseEvent| on_select_tab.emit(tab))
                        };
                        let class = classes!("tab", (tab == props.active_tab).then_some("active"));

                        html! {
                            <button {class} onclick={on_click}>
                                {tab.label()}
                                {if tab == Tab::Dashboard && props.due_count > 0 {
                                    html! { <span class="badge">{props.due_count}</span> }
                                } else { html! {} }}
                            </button>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
