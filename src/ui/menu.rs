//! Mobile navigation overlay: a two-state toggle whose open state owns a
//! scroll lock on the document. The lock is a guard, so it is released on
//! every way out of the open state, including dropping the overlay itself.

use std::cell::Cell;
use std::rc::Rc;

/// Document-level handle carrying the page's scroll-lock flag. Cloning gives
/// another handle to the same flag. Everything here is single-threaded; all
/// transitions happen synchronously inside one request.
#[derive(Debug, Clone, Default)]
pub struct Document {
    scroll_locked: Rc<Cell<bool>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether page scrolling is currently suspended.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }
}

/// Scoped suspension of page scrolling. Held for exactly as long as the
/// overlay is open; dropping it restores scrolling.
#[derive(Debug)]
pub struct ScrollLock {
    document: Document,
}

impl ScrollLock {
    fn acquire(document: &Document) -> Self {
        document.scroll_locked.set(true);
        Self {
            document: document.clone(),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.scroll_locked.set(false);
    }
}

/// The overlay itself. Starts closed; open and closed toggle indefinitely.
#[derive(Debug)]
pub struct MenuOverlay {
    document: Document,
    lock: Option<ScrollLock>,
}

impl MenuOverlay {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            lock: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    /// Open the panel and suspend scrolling. Opening an already-open
    /// overlay is a no-op; the existing lock stays in place.
    pub fn open(&mut self) {
        if self.lock.is_none() {
            self.lock = Some(ScrollLock::acquire(&self.document));
        }
    }

    /// Close via the panel's close button.
    pub fn close_button(&mut self) {
        self.close();
    }

    /// Close by tapping the darkened backdrop behind the panel.
    pub fn dismiss_overlay(&mut self) {
        self.close();
    }

    /// Close by selecting a navigation link inside the panel. Returns the
    /// link target so the caller can follow it after the panel is gone.
    pub fn follow_link<'a>(&mut self, href: &'a str) -> &'a str {
        self.close();
        href
    }

    fn close(&mut self) {
        // Dropping the guard restores scrolling.
        self.lock = None;
    }
}
