use crate::core::models::{MatchGroup, MatchStatus};

/// The four visual columns of the board, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardColumn {
    Lobby,
    PendingPayment,
    Ready,
    Completed,
}

impl BoardColumn {
    pub fn all() -> Vec<BoardColumn> {
        vec![
            BoardColumn::Lobby,
            BoardColumn::PendingPayment,
            BoardColumn::Ready,
            BoardColumn::Completed,
        ]
    }

    /// Stable identifier, used as a CSS hook.
    pub fn id(&self) -> &'static str {
        match self {
            BoardColumn::Lobby => "lobby",
            BoardColumn::PendingPayment => "pending_payment",
            BoardColumn::Ready => "ready",
            BoardColumn::Completed => "completed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoardColumn::Lobby => "En Lobby (Waiting)",
            BoardColumn::PendingPayment => "Haciendo Match",
            BoardColumn::Ready => "Pagado / A Despachar",
            BoardColumn::Completed => "En Camino / Completado",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BoardColumn::Lobby => "🕓",
            BoardColumn::PendingPayment => "🤝",
            BoardColumn::Ready => "📦",
            BoardColumn::Completed => "🚚",
        }
    }

    pub fn accent_class(&self) -> &'static str {
        match self {
            BoardColumn::Lobby => "accent-blue",
            BoardColumn::PendingPayment => "accent-yellow",
            BoardColumn::Ready => "accent-green",
            BoardColumn::Completed => "accent-gray",
        }
    }

    pub fn bucket(&self) -> Bucket {
        match self {
            BoardColumn::Lobby => Bucket::Lobby,
            BoardColumn::PendingPayment => Bucket::PendingPayment,
            BoardColumn::Ready => Bucket::Ready,
            BoardColumn::Completed => Bucket::Completed,
        }
    }

    /// Membership test for one column. The partition is derived from
    /// [`classify`], so no group can ever satisfy two columns.
    pub fn contains(&self, group: &MatchGroup) -> bool {
        classify(group) == self.bucket()
    }
}

/// Where a match record lands on the board. `Unclassified` is the
/// explicit home for status tags the board does not recognize; those
/// groups appear in no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Lobby,
    PendingPayment,
    Ready,
    Completed,
    Unclassified,
}

/// Total classification of a match record into its board bucket.
///
/// A group still tagged `pending` moves to the payment column once it
/// reaches capacity; `paid` and `completed` classify on the tag alone,
/// whatever the member count.
pub fn classify(group: &MatchGroup) -> Bucket {
    match &group.status {
        MatchStatus::Pending if !group.is_full() => Bucket::Lobby,
        MatchStatus::Pending | MatchStatus::Filled => Bucket::PendingPayment,
        MatchStatus::Paid => Bucket::Ready,
        MatchStatus::Completed => Bucket::Completed,
        MatchStatus::Other(_) => Bucket::Unclassified,
    }
}

/// The groups shown in one column, preserving fetch order.
pub fn matches_for_column(groups: &[MatchGroup], column: BoardColumn) -> Vec<MatchGroup> {
    groups
        .iter()
        .filter(|group| column.contains(group))
        .cloned()
        .collect()
}
