//! Cursor-paged list responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::MixId;

/// Key type a paged query continues from.
///
/// Contracts hand out keys in ascending storage order, so every cursor of a
/// listing must compare greater than the one before it.
pub trait PageCursor:
    Clone + PartialOrd + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl PageCursor for MixId {}

impl PageCursor for String {}

/// `[mix_id, owner]` as used by the delegation listings.
impl PageCursor for (MixId, String) {}

/// One page of a listing. `start_next_after` is absent on the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T, K> {
    /// The contract names the list per query.
    #[serde(alias = "nodes", alias = "delegations")]
    pub items: Vec<T>,
    pub per_page: Option<u32>,
    pub start_next_after: Option<K>,
}

impl<T, K> Page<T, K> {
    pub fn is_last(&self) -> bool {
        self.start_next_after.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::from_value;
    use crate::types::Coin;
    use serde_json::json;

    #[test]
    fn test_parse_page_with_cursor() {
        let raw = json!({
            "nodes": [
                { "denom": "unym", "amount": "1" },
                { "denom": "unym", "amount": "2" },
            ],
            "per_page": 2,
            "start_next_after": 2,
        });
        let page: Page<Coin, MixId> = from_value(&raw).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.per_page, Some(2));
        assert_eq!(page.start_next_after, Some(2));
        assert!(!page.is_last());
    }

    #[test]
    fn test_last_page() {
        let raw = json!({ "delegations": [], "start_next_after": null });
        let page: Page<Coin, (MixId, String)> = from_value(&raw).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.per_page, None);
        assert!(page.is_last());
    }

    #[test]
    fn test_tuple_cursor() {
        let raw = json!({ "delegations": [], "start_next_after": [7, "n1owner"] });
        let page: Page<Coin, (MixId, String)> = from_value(&raw).unwrap();
        assert_eq!(page.start_next_after, Some((7, "n1owner".to_string())));

        let raw = json!({ "delegations": [], "start_next_after": [7] });
        let err = from_value::<Page<Coin, (MixId, String)>>(&raw).unwrap_err();
        assert_eq!(err.field, "start_next_after");
    }

    #[test]
    fn test_item_errors_are_indexed() {
        let raw = json!({
            "nodes": [{ "denom": "unym", "amount": "1" }, { "denom": "unym" }],
        });
        let err = from_value::<Page<Coin, MixId>>(&raw).unwrap_err();
        assert_eq!(err.field, "nodes[1].amount");
    }

    #[test]
    fn test_cursors_order_like_storage_keys() {
        assert!((3, "n1a".to_string()) < (3, "n1b".to_string()));
        assert!((3, "n1z".to_string()) < (4, "n1a".to_string()));
        assert!("8yGFbT".to_string() < "9aQ2".to_string());
    }
}
