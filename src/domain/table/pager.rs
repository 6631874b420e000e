const WINDOW: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Compact pager: first page, the pages around `current`, last page, with
/// gaps where pages are skipped.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut links = vec![PageLink::Page(1)];

    let window_start = current.saturating_sub(WINDOW).max(2);
    let window_end = (current + WINDOW).min(total.saturating_sub(1));

    if current.saturating_sub(WINDOW) > 2 {
        links.push(PageLink::Gap);
    }
    links.extend((window_start..=window_end).map(PageLink::Page));
    if current + WINDOW < total.saturating_sub(1) {
        links.push(PageLink::Gap);
    }

    if total > 1 {
        links.push(PageLink::Page(total));
    }
    links
}

pub fn has_prev(current: usize) -> bool {
    current > 1
}

pub fn has_next(current: usize, total: usize) -> bool {
    current < total
}
