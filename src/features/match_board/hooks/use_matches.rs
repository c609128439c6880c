use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{AuthUser, MatchGroup};
use crate::features::match_board::services::get_seller_matches;

/// Reactive state the board reads: the match list, the initial loading
/// latch, and the last fetch failure. The failure is kept apart from the
/// list so "could not load" never renders as "no matches".
pub struct MatchesHook {
    pub matches: ReadSignal<Vec<MatchGroup>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// Decides which user transitions trigger a fetch and which completions
/// are still current. Generations are monotonic: a completion presenting
/// an old generation lost the race to a newer fetch and must be dropped
/// without touching any state.
#[derive(Debug, Default)]
struct FetchGate {
    last_user: Option<String>,
    generation: u64,
}

impl FetchGate {
    /// Record a user transition. Returns the generation token for the
    /// fetch to issue, or `None` when no fetch is due: the same user was
    /// already loaded, or nobody is signed in. A sign-out is remembered,
    /// so signing back in with the same account fetches again.
    fn begin(&mut self, user: Option<&str>) -> Option<u64> {
        let current = user.map(|id| id.to_string());
        if current == self.last_user {
            return None;
        }
        self.last_user = current;

        match user {
            Some(_) => {
                self.generation += 1;
                Some(self.generation)
            }
            None => None,
        }
    }

    /// Whether a completed fetch with this token is still the latest one.
    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Load the signed-in seller's matches, at most once per distinct user
/// transition. The loading latch starts raised and settles on the first
/// completion; a user switch refetches in the background while the
/// previous board keeps showing.
pub fn use_matches(user: ReadSignal<Option<AuthUser>>) -> MatchesHook {
    let matches = RwSignal::new(Vec::<MatchGroup>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let gate = Rc::new(RefCell::new(FetchGate::default()));

    Effect::new(move |_| {
        let seller_id = user.with(|user| user.as_ref().map(|user| user.id.clone()));
        let issued = gate.borrow_mut().begin(seller_id.as_deref());

        if let (Some(generation), Some(seller_id)) = (issued, seller_id) {
            let gate = gate.clone();
            spawn_local(async move {
                let result = get_seller_matches(&seller_id).await;

                if !gate.borrow().is_current(generation) {
                    web_sys::console::log_1(
                        &format!("Discarding stale match fetch ({})", generation).into(),
                    );
                    return;
                }

                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("Failed to load matches: {}", e).into());
                }
                settle(result, matches, loading, error);
            });
        }
    });

    MatchesHook {
        matches: matches.read_only(),
        loading: loading.read_only(),
        error: error.read_only(),
    }
}

/// Fold a current fetch completion into the board state. `Ok(None)` is
/// the backend's "no list recorded" signal and settles as an ordinary
/// empty board; only `Err` raises the error surface. Every completion
/// lowers the loading latch.
fn settle(
    result: Result<Option<Vec<MatchGroup>>, String>,
    matches: RwSignal<Vec<MatchGroup>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    match result {
        Ok(Some(list)) => {
            matches.set(list);
            error.set(None);
        }
        Ok(None) => {
            error.set(None);
        }
        Err(e) => {
            error.set(Some(e));
        }
    }
    loading.set(false);
}

#[cfg(test)]
mod tests {
    use super::{settle, FetchGate};
    use crate::core::models::{Deal, MatchGroup};
    use leptos::prelude::*;

    #[test]
    fn signed_out_sessions_never_fetch() {
        let mut gate = FetchGate::default();
        assert_eq!(gate.begin(None), None);
        assert_eq!(gate.begin(None), None);
    }

    #[test]
    fn first_sign_in_fetches_once() {
        let mut gate = FetchGate::default();
        assert_eq!(gate.begin(Some("seller-a")), Some(1));
        assert_eq!(gate.begin(Some("seller-a")), None);
        assert_eq!(gate.begin(Some("seller-a")), None);
    }

    #[test]
    fn switching_users_issues_a_new_generation() {
        let mut gate = FetchGate::default();
        assert_eq!(gate.begin(Some("seller-a")), Some(1));
        assert_eq!(gate.begin(Some("seller-b")), Some(2));
    }

    #[test]
    fn sign_out_and_back_in_fetches_again() {
        let mut gate = FetchGate::default();
        assert_eq!(gate.begin(Some("seller-a")), Some(1));
        assert_eq!(gate.begin(None), None);
        assert_eq!(gate.begin(Some("seller-a")), Some(2));
    }

    #[test]
    fn superseded_completions_are_stale() {
        let mut gate = FetchGate::default();
        let first = gate.begin(Some("seller-a")).unwrap();
        let second = gate.begin(Some("seller-b")).unwrap();

        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn sign_out_keeps_the_last_generation_current() {
        let mut gate = FetchGate::default();
        let only = gate.begin(Some("seller-a")).unwrap();
        gate.begin(None);

        assert!(gate.is_current(only));
    }

    fn fresh_state() -> (RwSignal<Vec<MatchGroup>>, RwSignal<bool>, RwSignal<Option<String>>) {
        (
            RwSignal::new(Vec::new()),
            RwSignal::new(true),
            RwSignal::new(None),
        )
    }

    #[test]
    fn fetched_lists_replace_the_board_and_clear_the_error() {
        let (matches, loading, error) = fresh_state();
        error.set(Some("stale failure".to_string()));

        let list = vec![MatchGroup::new(Deal::new("Cafetera"), 2)];
        settle(Ok(Some(list)), matches, loading, error);

        assert_eq!(matches.get_untracked().len(), 1);
        assert!(!loading.get_untracked());
        assert!(error.get_untracked().is_none());
    }

    #[test]
    fn null_data_settles_as_an_empty_board_without_an_error() {
        let (matches, loading, error) = fresh_state();

        settle(Ok(None), matches, loading, error);

        assert!(matches.get_untracked().is_empty());
        assert!(!loading.get_untracked());
        assert!(error.get_untracked().is_none());
    }

    #[test]
    fn fetch_failures_surface_and_keep_the_previous_board() {
        let (matches, loading, error) = fresh_state();
        matches.set(vec![MatchGroup::new(Deal::new("Cafetera"), 2)]);

        settle(Err("store unreachable".to_string()), matches, loading, error);

        assert_eq!(matches.get_untracked().len(), 1);
        assert!(!loading.get_untracked());
        assert_eq!(error.get_untracked().as_deref(), Some("store unreachable"));
    }
}
