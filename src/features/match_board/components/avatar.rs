use leptos::prelude::*;
use crate::core::models::Member;

// One reserved seat in a match card's member row. An occupied slot shows
// the member's avatar (or initials) with a border that tracks payment;
// an empty slot shows the dashed placeholder.

#[component]
pub fn AvatarSlot(#[prop(optional)] member: Option<Member>) -> impl IntoView {
    match member {
        Some(member) => {
            let border_class = if member.has_paid() {
                "avatar-paid"
            } else {
                "avatar-unpaid"
            };
            let name = member.display_name();
            let initials = member.initials();
            let avatar_url = member.user.as_ref().and_then(|user| user.avatar_url.clone());

            view! {
                <div class="avatar-slot">
                    <div class=format!("avatar {}", border_class)>
                        {match avatar_url {
                            Some(url) => view! {
                                <img class="avatar-image" src=url alt=name.clone() />
                            }
                            .into_any(),
                            None => view! {
                                <span class="avatar-initials">{initials}</span>
                            }
                            .into_any(),
                        }}
                    </div>
                    <span class="avatar-name">{name}</span>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="avatar-slot">
                <div class="avatar avatar-placeholder">
                    <span class="avatar-initials">"?"</span>
                </div>
                <span class="avatar-name">"Esperando..."</span>
            </div>
        }
        .into_any(),
    }
}
