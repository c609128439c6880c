use leptos::prelude::*;

use super::match_card::MatchCard;
use crate::core::models::MatchGroup;
use crate::features::match_board::classify::{matches_for_column, BoardColumn};

// One board column. Filters the shared match list down to the groups
// this column owns and renders a card per group, or the empty marker.

#[component]
pub fn MatchColumn(
    column: BoardColumn,
    #[prop(into)] matches: ReadSignal<Vec<MatchGroup>>,
) -> impl IntoView {
    let column_groups = move || matches.with(|all| matches_for_column(all, column));

    view! {
        <div class=format!("kanban-column column-{}", column.id())>
            <div class="column-header">
                <span class=format!("column-icon {}", column.accent_class())>{column.icon()}</span>
                <h3 class="column-title">{column.title()}</h3>
                <span class="match-count">{move || column_groups().len()}</span>
            </div>
            <div class="column-content">
                {move || {
                    column_groups()
                        .into_iter()
                        .map(|group| view! { <MatchCard group=group /> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    if column_groups().is_empty() {
                        Some(view! { <div class="column-empty">"Sin actividad"</div> })
                    } else {
                        None
                    }
                }}
            </div>
        </div>
    }
}
