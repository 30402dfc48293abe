// Page transition handling, kept free of web-sys so it can be tested on the host.

/// What to do with the mounted sections when the page is hidden or shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Mount,
    Teardown,
    Keep,
}

/// `pagehide`: release everything, whether or not the page goes into the
/// back/forward cache.
pub fn on_page_hide(mounted: bool) -> PageAction {
    if mounted {
        PageAction::Teardown
    } else {
        PageAction::Keep
    }
}

/// `pageshow`: a page restored from the back/forward cache (`persisted`)
/// comes back torn down and must be mounted again. A first load is mounted
/// by the start hook.
pub fn on_page_show(persisted: bool, mounted: bool) -> PageAction {
    if persisted && !mounted {
        PageAction::Mount
    } else {
        PageAction::Keep
    }
}
