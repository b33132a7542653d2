//! Table pager arithmetic and labels.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

pub const SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Snapshot of the paging controls for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub size: u32,
    pub total_count: u64,
}

impl Pager {
    #[must_use]
    pub fn new(page: u32, size: u32, total_count: u64) -> Self {
        Self { page, size, total_count }
    }

    /// `max(1, ceil(total / size))`.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        let size = u64::from(self.size.max(1));
        self.total_count.div_ceil(size).max(1)
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }

    #[must_use]
    pub fn last_page(&self) -> u32 {
        u32::try_from(self.total_pages() - 1).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", u64::from(self.page) + 1, self.total_pages())
    }

    #[must_use]
    pub fn total_label(&self) -> String {
        if self.total_count == 0 {
            "Total: unknown".to_owned()
        } else {
            format!("Total: {} samples", group_thousands(self.total_count))
        }
    }
}

/// `1234567` → `"1,234,567"`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
