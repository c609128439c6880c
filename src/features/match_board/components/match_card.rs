use chrono::Local;
use leptos::prelude::*;

use super::avatar::AvatarSlot;
use crate::core::models::{MatchGroup, Member};

// Card for a single match group: deal badge, creation time, and one
// avatar slot per seat up to the group's capacity.

#[component]
pub fn MatchCard(group: MatchGroup) -> impl IntoView {
    let deal_title = group
        .deal
        .as_ref()
        .map(|deal| deal.title.clone())
        .unwrap_or_else(|| "Sin título".to_string());
    let created_time = group
        .created_at
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();
    let joined_label = format!("{} / {} unidos", group.members.len(), group.max_group_size);
    let slots = group
        .slot_members()
        .into_iter()
        .map(|member| member.cloned())
        .collect::<Vec<Option<Member>>>();

    view! {
        <div class="match-card">
            <div class="match-card-header">
                <span class="deal-badge">{deal_title}</span>
                <span class="match-time">{created_time}</span>
            </div>
            <div class="match-card-body">
                <div class="member-row">
                    <div class="member-connector"></div>
                    {slots
                        .into_iter()
                        .map(|member| match member {
                            Some(member) => view! { <AvatarSlot member=member /> },
                            None => view! { <AvatarSlot /> },
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="joined-count">{joined_label}</p>
            </div>
        </div>
    }
}
