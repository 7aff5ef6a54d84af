//! Offset pagination over an in-memory result set.

/// Builds the links handed out as `prev` / `next` page descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    base: String,
}

impl PageLink {
    /// `base` is everything before the query string, e.g.
    /// `http://localhost:3000/members` or just `/members`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn to_page(&self, page: u32) -> String {
        format!("{}?page={}", self.base, page)
    }
}

/// One page of results plus links to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Slice `items` to the window `[(page - 1) * page_size, page * page_size)`.
///
/// `prev` is set whenever `page > 1`, `next` only when items remain past the
/// window. A window beyond the end yields an empty page, not an error.
/// Both `page_size` and `page` are treated as at least 1.
pub fn paginate<T>(items: Vec<T>, page_size: u32, page: u32, link: &PageLink) -> Page<T> {
    let page = page.max(1);
    let size = page_size.max(1) as usize;
    let total = items.len();

    let start = (page as usize - 1).saturating_mul(size);
    let end = start.saturating_add(size);

    let results: Vec<T> = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(size).collect()
    };

    let prev = (page > 1).then(|| link.to_page(page - 1));
    let next = (end < total).then(|| link.to_page(page + 1));

    Page {
        results,
        prev,
        next,
    }
}
