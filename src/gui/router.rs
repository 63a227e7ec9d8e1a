// src/gui/router.rs
use crate::config::state::PageKind;
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::balance::PAGE,
    &pages::trend::PAGE,
    &pages::breakdown::PAGE,
    &pages::posts::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::state::PageKind::*;

    #[test]
    fn every_kind_has_one_tab() {
        for kind in [Balance, Trend, Breakdown, Posts] {
            assert_eq!(PAGES[index_of(kind)].kind(), kind);
            assert_eq!(PAGES.iter().filter(|p| p.kind() == kind).count(), 1);
        }
    }
}
