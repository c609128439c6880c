use leptos::prelude::*;

use crate::features::match_board::MatchBoard;

#[component]
pub fn BoardPage() -> impl IntoView {
    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Tablero de Matches"</h1>
            </header>
            <MatchBoard />
        </div>
    }
}
