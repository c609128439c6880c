use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::AuthUser;
use crate::features::auth::services::get_session;

pub struct AuthHook {
    pub user: ReadSignal<Option<AuthUser>>,
    pub loading: ReadSignal<bool>,
}

/// Load the stored session once on mount and expose the signed-in seller
/// as a signal. A session load failure is logged and treated as signed
/// out; the board never blocks on it.
pub fn use_auth() -> AuthHook {
    let user = RwSignal::new(None::<AuthUser>);
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match get_session().await {
            Ok(session) => {
                user.set(session);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load session: {}", e).into());
                user.set(None);
            }
        }
        loading.set(false);
    });

    AuthHook {
        user: user.read_only(),
        loading: loading.read_only(),
    }
}
