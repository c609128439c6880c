/// Store file holding the signed-in session, if any.
pub const SESSION_STORE: &str = "session.json";

/// Key inside the session store under which the session value lives.
pub const SESSION_KEY: &str = "session";

/// Key inside a per-seller store under which the match array lives.
pub const MATCHES_KEY: &str = "matches";

/// Builds the store file name for one seller's match records.
/// Each seller gets their own file so loading a board never touches
/// another seller's data.
pub fn matches_store_file(seller_id: &str) -> String {
    format!("matches_{}.json", seller_id)
}

#[cfg(test)]
mod tests {
    use super::matches_store_file;

    #[test]
    fn store_file_is_scoped_to_the_seller() {
        assert_eq!(matches_store_file("seller-1"), "matches_seller-1.json");
        assert_eq!(matches_store_file("seller-2"), "matches_seller-2.json");
    }

    #[test]
    fn different_sellers_never_share_a_store_file() {
        assert_ne!(matches_store_file("a"), matches_store_file("b"));
    }
}
