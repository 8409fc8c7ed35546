use serde::{Deserialize, Serialize};

/// Number of rows returned per page.
pub const PER_PAGE: i64 = 5;

/// Pagination summary computed for one request and discarded with it.
///
/// `total` always reports the full row count for the queried stock,
/// regardless of which page was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub per_page: i64,
    pub total_page: i64,
    pub page: i64,
}

impl Pagination {
    /// Builds the summary for a 1-based `page` over a result set of
    /// `total` rows. A page past the end is representable; fetching it
    /// simply yields no rows.
    pub fn for_page(total: i64, page: i64) -> Self {
        let total_page = (total + PER_PAGE - 1) / PER_PAGE;
        Self {
            total,
            per_page: PER_PAGE,
            total_page,
            page,
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        self.per_page * (self.page - 1)
    }
}

/// Response envelope pairing a page of rows with its pagination summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub pagination: Pagination,
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_set_has_zero_pages() {
        let p = Pagination::for_page(0, 1);
        assert_eq!(p.total, 0);
        assert_eq!(p.total_page, 0);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pagination::for_page(12, 1).total_page, 3);
        assert_eq!(Pagination::for_page(10, 1).total_page, 2);
        assert_eq!(Pagination::for_page(11, 1).total_page, 3);
        assert_eq!(Pagination::for_page(1, 1).total_page, 1);
    }

    #[test]
    fn offset_walks_in_page_sized_steps() {
        assert_eq!(Pagination::for_page(12, 1).offset(), 0);
        assert_eq!(Pagination::for_page(12, 2).offset(), 5);
        assert_eq!(Pagination::for_page(12, 3).offset(), 10);
        // Past the last page: still a valid window, just an empty one.
        assert_eq!(Pagination::for_page(12, 4).offset(), 15);
        assert_eq!(Pagination::for_page(12, 4).limit(), PER_PAGE);
    }

    #[test]
    fn summary_serializes_with_wire_field_names() {
        let p = Pagination::for_page(12, 2);
        let value = serde_json::to_value(p).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "total": 12,
                "perPage": 5,
                "totalPage": 3,
                "page": 2,
            })
        );
    }

    #[test]
    fn envelope_keeps_total_for_out_of_range_pages() {
        let page = Paginated::<i64> {
            pagination: Pagination::for_page(12, 4),
            data: vec![],
        };
        let value = serde_json::to_value(page).unwrap();
        assert_eq!(value["pagination"]["total"], 12);
        assert_eq!(value["data"], serde_json::json!([]));
    }
}
