//! Host capabilities injected around the reconciliation core.

/// Read side of the browser address bar (or whatever the host uses for one).
pub trait LocationSource {
    fn current_url(&self) -> String;
}

impl LocationSource for String {
    fn current_url(&self) -> String {
        self.clone()
    }
}

impl LocationSource for &str {
    fn current_url(&self) -> String {
        (*self).to_string()
    }
}

/// Navigation capability. The core computes the next URL and hands it here;
/// it never triggers a page load itself, so tests can assert on the URL.
pub trait Navigator {
    fn navigate_to(&mut self, url: &str);
}
