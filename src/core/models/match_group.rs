use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{Deal, UserProfile};

/// Capacity used when a record carries no usable `max_group_size`.
pub const DEFAULT_GROUP_SIZE: u32 = 2;

/// Lifecycle tag carried by a match record. The set is open-ended on the
/// wire: anything outside the four known tags is kept verbatim in `Other`
/// instead of failing the record at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Pending,
    Filled,
    Paid,
    Completed,
    Other(String),
}

impl MatchStatus {
    pub fn as_tag(&self) -> &str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Filled => "filled",
            MatchStatus::Paid => "paid",
            MatchStatus::Completed => "completed",
            MatchStatus::Other(tag) => tag,
        }
    }
}

impl Default for MatchStatus {
    fn default() -> Self {
        MatchStatus::Pending
    }
}

impl From<String> for MatchStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            // An empty tag ingests as pending, like a missing one
            "" | "pending" => MatchStatus::Pending,
            "filled" => MatchStatus::Filled,
            "paid" => MatchStatus::Paid,
            "completed" => MatchStatus::Completed,
            _ => MatchStatus::Other(tag),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        status.as_tag().to_string()
    }
}

/// One buyer inside a match group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub user: Option<UserProfile>,
    /// Per-member payment tag; `"paid"` is the only value the board reads
    #[serde(default)]
    pub status: String,
}

impl Member {
    #[allow(dead_code)] // Used by tests and demo seeding
    pub fn new(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            status: String::new(),
        }
    }

    #[allow(dead_code)] // Used by tests and demo seeding
    pub fn paid(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            status: "paid".to_string(),
        }
    }

    pub fn has_paid(&self) -> bool {
        self.status == "paid"
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|user| user.name.clone())
            .unwrap_or_else(|| "Usuario".to_string())
    }

    /// Two-character fallback shown when the member has no avatar image.
    pub fn initials(&self) -> String {
        self.user
            .as_ref()
            .and_then(|user| user.name.as_ref())
            .map(|name| name.chars().take(2).collect::<String>())
            .filter(|initials| !initials.is_empty())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A buyer-grouping record for one deal. Defaults are resolved here, at
/// deserialization, so the rest of the app never re-derives them: a
/// missing or empty status tag becomes `Pending`, and a missing, null or
/// zero `max_group_size` becomes [`DEFAULT_GROUP_SIZE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchGroup {
    pub id: String,
    #[serde(default)]
    pub deal: Option<Deal>,
    #[serde(default, deserialize_with = "de_status")]
    pub status: MatchStatus,
    #[serde(default = "default_group_size", deserialize_with = "de_max_group_size")]
    pub max_group_size: u32,
    #[serde(default)]
    pub members: Vec<Member>,
    pub created_at: DateTime<Utc>,
}

impl MatchGroup {
    #[allow(dead_code)] // Used by tests and demo seeding
    pub fn new(deal: Deal, max_group_size: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            deal: Some(deal),
            status: MatchStatus::Pending,
            max_group_size,
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the group reached its configured capacity. Records can
    /// carry more members than slots; those still count as full.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_group_size as usize
    }

    /// Display slots for the member row: always exactly `max_group_size`
    /// entries, with the present members overlaid into the leading slots.
    pub fn slot_members(&self) -> Vec<Option<&Member>> {
        (0..self.max_group_size as usize)
            .map(|slot| self.members.get(slot))
            .collect()
    }
}

fn default_group_size() -> u32 {
    DEFAULT_GROUP_SIZE
}

fn de_status<'de, D>(deserializer: D) -> Result<MatchStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let tag: Option<String> = Option::deserialize(deserializer)?;
    Ok(MatchStatus::from(tag.unwrap_or_default()))
}

// The original data source stored 0 where the capacity was never set, so
// 0 gets the same fallback as a missing field
fn de_max_group_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let size: Option<u32> = Option::deserialize(deserializer)?;
    Ok(match size {
        Some(size) if size > 0 => size,
        _ => DEFAULT_GROUP_SIZE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> MatchGroup {
        serde_json::from_value(value).expect("match group should deserialize")
    }

    #[test]
    fn missing_fields_get_their_ingestion_defaults() {
        let group = parse(json!({
            "id": "m1",
            "created_at": "2026-08-01T10:00:00Z"
        }));

        assert_eq!(group.status, MatchStatus::Pending);
        assert_eq!(group.max_group_size, DEFAULT_GROUP_SIZE);
        assert_eq!(group.slot_members().len(), DEFAULT_GROUP_SIZE as usize);
        assert!(group.members.is_empty());
        assert!(group.deal.is_none());
    }

    #[test]
    fn empty_and_null_status_tags_ingest_as_pending() {
        let empty = parse(json!({
            "id": "m1",
            "status": "",
            "created_at": "2026-08-01T10:00:00Z"
        }));
        let null = parse(json!({
            "id": "m2",
            "status": null,
            "created_at": "2026-08-01T10:00:00Z"
        }));

        assert_eq!(empty.status, MatchStatus::Pending);
        assert_eq!(null.status, MatchStatus::Pending);
    }

    #[test]
    fn unknown_status_tags_are_kept_verbatim() {
        let group = parse(json!({
            "id": "m1",
            "status": "shipped",
            "created_at": "2026-08-01T10:00:00Z"
        }));

        assert_eq!(group.status, MatchStatus::Other("shipped".to_string()));

        let back = serde_json::to_value(&group).expect("serialize");
        assert_eq!(back["status"], json!("shipped"));
    }

    #[test]
    fn zero_and_null_capacity_fall_back_to_the_default() {
        let zero = parse(json!({
            "id": "m1",
            "max_group_size": 0,
            "created_at": "2026-08-01T10:00:00Z"
        }));
        let null = parse(json!({
            "id": "m2",
            "max_group_size": null,
            "created_at": "2026-08-01T10:00:00Z"
        }));

        assert_eq!(zero.max_group_size, DEFAULT_GROUP_SIZE);
        assert_eq!(null.max_group_size, DEFAULT_GROUP_SIZE);
    }

    #[test]
    fn fullness_uses_the_resolved_capacity() {
        let mut group = MatchGroup::new(Deal::new("Cafetera"), 2);
        assert!(!group.is_full());

        group.members.push(Member::new(UserProfile::named("Ana")));
        assert!(!group.is_full());

        group.members.push(Member::new(UserProfile::named("Luis")));
        assert!(group.is_full());

        group.members.push(Member::new(UserProfile::named("Eva")));
        assert!(group.is_full());
    }

    #[test]
    fn slot_row_always_reserves_the_configured_capacity() {
        let mut group = MatchGroup::new(Deal::new("Cafetera"), 3);
        group.members.push(Member::new(UserProfile::named("Ana")));

        let slots = group.slot_members();
        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_some());
        assert!(slots[1].is_none());
        assert!(slots[2].is_none());
    }

    #[test]
    fn members_beyond_capacity_get_no_slot_but_keep_counting() {
        let mut group = MatchGroup::new(Deal::new("Cafetera"), 2);
        for name in ["Ana", "Luis", "Eva"] {
            group.members.push(Member::new(UserProfile::named(name)));
        }

        assert_eq!(group.slot_members().len(), 2);
        assert_eq!(group.members.len(), 3);
        assert!(group.is_full());
    }

    #[test]
    fn member_payment_flag_only_matches_the_paid_tag() {
        let mut member = Member::new(UserProfile::named("Ana"));
        assert!(!member.has_paid());

        member.status = "paid".to_string();
        assert!(member.has_paid());

        member.status = "refunded".to_string();
        assert!(!member.has_paid());

        assert!(Member::paid(UserProfile::named("Luis")).has_paid());
    }

    #[test]
    fn display_name_and_initials_have_fallbacks() {
        let named = Member::new(UserProfile::named("Álvaro"));
        assert_eq!(named.display_name(), "Álvaro");
        assert_eq!(named.initials(), "Ál");

        let anonymous = Member {
            user: None,
            status: String::new(),
        };
        assert_eq!(anonymous.display_name(), "Usuario");
        assert_eq!(anonymous.initials(), "?");

        let unnamed = Member::new(UserProfile {
            name: Some(String::new()),
            avatar_url: None,
        });
        assert_eq!(unnamed.initials(), "?");
    }
}
