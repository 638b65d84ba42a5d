use url::Url;

/// Query parameter the upstream uses for sorting and offset windows.
pub const SORT_PARAM: &str = "sr";

/// Inclusive, 1-based offset window handed to the upstream in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

impl PageRange {
    /// Range covered by the zero-based `page_index`. `per_page` must be non-zero.
    pub fn for_page(page_index: u64, per_page: u64) -> Self {
        let start = page_index * per_page + 1;
        Self {
            start,
            end: start + per_page - 1,
        }
    }

    /// Sort window in the upstream's `|field|offset|limit` notation.
    pub fn sort_value(&self) -> String {
        format!("|ModifiedDate|{}|{}", self.start - 1, self.end)
    }

    /// Appends the encoded sort window to `base`, keeping its existing query intact.
    pub fn request_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().append_pair(SORT_PARAM, &self.sort_value());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_pages_do_not_overlap() {
        let first = PageRange::for_page(0, 20);
        let second = PageRange::for_page(1, 20);
        assert_eq!(first, PageRange { start: 1, end: 20 });
        assert_eq!(second, PageRange { start: 21, end: 40 });
    }

    #[test]
    fn sort_value_uses_zero_based_offset() {
        assert_eq!(
            PageRange::for_page(2, 20).sort_value(),
            "|ModifiedDate|40|60"
        );
    }

    #[test]
    fn request_url_percent_encodes_pipes_and_keeps_base_query() {
        let base =
            Url::parse("https://api.example.com/list?count=true&q=(And.Hidden.N.)").unwrap();
        let url = PageRange::for_page(0, 20).request_url(&base);
        assert_eq!(
            url.as_str(),
            "https://api.example.com/list?count=true&q=(And.Hidden.N.)&sr=%7CModifiedDate%7C0%7C20"
        );
    }
}
