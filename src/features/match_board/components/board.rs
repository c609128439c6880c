use leptos::prelude::*;

use super::column::MatchColumn;
use super::loader::Loader;
use crate::features::auth::use_auth;
use crate::features::match_board::classify::BoardColumn;
use crate::features::match_board::hooks::{use_matches, MatchesHook};

// The seller's match board. Waits for the session, then for the match
// fetch, and only then lays out the four columns. A failed fetch gets
// its own banner so it is never mistaken for an empty board.

#[component]
pub fn MatchBoard() -> impl IntoView {
    let auth = use_auth();
    let MatchesHook {
        matches,
        loading: matches_loading,
        error: fetch_error,
    } = use_matches(auth.user);

    view! {
        <div class="match-board">
            {move || {
                if auth.loading.get() {
                    view! { <Loader text="Cargando sesión..." /> }.into_any()
                } else if auth.user.with(|user| user.is_none()) {
                    view! {
                        <div class="board-notice">
                            "Inicia sesión para ver tu tablero de matches."
                        </div>
                    }
                    .into_any()
                } else if matches_loading.get() {
                    view! { <Loader text="Cargando tablero de matches..." /> }.into_any()
                } else if let Some(message) = fetch_error.get() {
                    view! {
                        <div class="board-error">
                            <p>"No se pudo cargar el tablero."</p>
                            <p class="board-error-detail">{message}</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="board-columns">
                            {BoardColumn::all()
                                .into_iter()
                                .map(|column| view! { <MatchColumn column=column matches=matches /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
