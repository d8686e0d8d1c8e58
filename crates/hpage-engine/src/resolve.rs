//! URL and target resolution against the page's `<base>`

use hpage_dom::ElementKind;
use hpage_net::Url;

use crate::{Page, PageError, PageResult};

impl Page {
    /// Resolve a reference found in the page.
    ///
    /// A `<base href>` replaces the page URL as the base; it must be an
    /// absolute URL itself.
    pub fn resolve_url(&self, relative: &str) -> PageResult<Url> {
        let base = match self.base_attribute("href").filter(|href| !href.is_empty()) {
            Some(href) => Url::parse(href).map_err(|e| PageError::malformed(href, e))?,
            None => self.url().clone(),
        };
        base.join(relative).map_err(|e| PageError::malformed(relative, e))
    }

    /// Window target for a link or form: an empty target falls back to the
    /// `<base target>`.
    pub fn resolve_target(&self, target: &str) -> String {
        if !target.is_empty() {
            return target.to_string();
        }
        match self.document().first_element_by_kind(ElementKind::is_base) {
            Some(_) => self.base_attribute("target").unwrap_or("").to_string(),
            None => target.to_string(),
        }
    }

    fn base_attribute(&self, name: &str) -> Option<&str> {
        let base = self.document().first_element_by_kind(ElementKind::is_base)?;
        self.document().attribute(base, name)
    }
}
