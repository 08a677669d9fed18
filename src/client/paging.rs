use std::cmp::Ordering;
use std::future::Future;

use tracing::debug;

use crate::error::{Result, ValidatorClientError};
use crate::types::{Page, PageCursor};

/// Follow `start_next_after` from the first page until the contract stops
/// returning a cursor, concatenating every page.
///
/// Items are not deduplicated. Every cursor must sort strictly after the one
/// sent with the request, otherwise the listing is reported as an error
/// rather than looped on.
pub(crate) async fn collect_pages<T, K, F, Fut>(operation: &str, mut fetch: F) -> Result<Vec<T>>
where
    K: PageCursor,
    F: FnMut(Option<K>) -> Fut,
    Fut: Future<Output = Result<Page<T, K>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<K> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(cursor.clone()).await?;
        pages += 1;
        items.extend(page.items);

        match page.start_next_after {
            None => {
                debug!(operation, pages, items = items.len(), "Collected all pages");
                return Ok(items);
            }
            Some(next) => {
                if let Some(previous) = &cursor {
                    if next.partial_cmp(previous) != Some(Ordering::Greater) {
                        return Err(ValidatorClientError::ContractQuery {
                            operation: operation.to_string(),
                            message: format!(
                                "page cursor {next:?} does not advance past {previous:?}"
                            ),
                        });
                    }
                }
                cursor = Some(next);
            }
        }
    }
}
