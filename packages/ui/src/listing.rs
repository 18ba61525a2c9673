//! Pure core of the product list flow: case-insensitive name search over the
//! fetched collection, fixed-size pagination, and the ellipsis page window
//! rendered under the grid.

use api::Product;

/// Products shown per page.
pub const PAGE_SIZE: usize = 8;

/// One entry of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Gap,
}

/// Case-insensitive substring match of the committed search text against
/// product names. An empty query keeps everything.
pub fn filter_by_name(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// The slice of `products` belonging to a 1-based page.
pub fn page_items(products: &[Product], page: usize) -> Vec<Product> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= products.len() {
        return Vec::new();
    }
    let end = (start + PAGE_SIZE).min(products.len());
    products[start..end].to_vec()
}

/// A filter change can shrink the page count below the current page; when it
/// does, the view snaps back to page 1.
pub fn clamp_page(current: usize, total: usize) -> usize {
    if total != 0 && current > total {
        1
    } else {
        current
    }
}

/// The visible page window: always page 1 and the last page, up to one page
/// either side of the current page, with any gap collapsed into an ellipsis
/// marker.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageMarker> {
    if total == 0 {
        return Vec::new();
    }

    let left = current.saturating_sub(1).max(2);
    let right = (current + 1).min(total.saturating_sub(1));

    let mut markers = vec![PageMarker::Page(1)];
    if left > 2 {
        markers.push(PageMarker::Gap);
    }
    for page in left..=right {
        markers.push(PageMarker::Page(page));
    }
    if right + 1 < total {
        markers.push(PageMarker::Gap);
    }
    if total > 1 {
        markers.push(PageMarker::Page(total));
    }
    markers
}
