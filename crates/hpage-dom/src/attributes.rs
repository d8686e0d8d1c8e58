//! Element Attributes
//!
//! Ordered attribute map: names are unique per element and insertion order
//! is kept. HTML attribute names are case-insensitive, so names are stored
//! lowercased.

use std::collections::HashMap;

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }

    pub fn is_id(&self) -> bool {
        self.name == "id"
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        let index = match self.by_name.get(name) {
            Some(&i) => i,
            None => *self.by_name.get(name.to_ascii_lowercase().as_str())?,
        };
        self.attributes.get(index)
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Set attribute, returning the replaced one
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(&attr.name) {
            Some(std::mem::replace(&mut self.attributes[index], attr))
        } else {
            self.by_name.insert(attr.name.clone(), self.attributes.len());
            self.attributes.push(attr);
            None
        }
    }

    /// Set attribute by name/value, returning the previous value
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        self.set_named_item(Attr::new(name, value)).map(|old| old.value)
    }

    /// Remove attribute by name
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let name = name.to_ascii_lowercase();
        let index = self.by_name.remove(&name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_named_item(name).is_some()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("class", "btn");
        attrs.set_attribute("id", "submit");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get_attribute("class"), Some("btn"));
        assert_eq!(attrs.get_attribute("id"), Some("submit"));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("TabIndex", "3");

        assert_eq!(attrs.get_attribute("tabindex"), Some("3"));
        assert_eq!(attrs.get_attribute("TABINDEX"), Some("3"));
        assert_eq!(attrs.set_attribute("tabIndex", "4").as_deref(), Some("3"));
        assert_eq!(attrs.length(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("a", "1");
        attrs.set_attribute("b", "2");
        attrs.set_attribute("c", "3");

        assert_eq!(attrs.remove_named_item("b").map(|a| a.value), Some("2".into()));
        let names: Vec<_> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(attrs.get_attribute("c"), Some("3"));
        assert!(!attrs.has_attribute("b"));
    }
}
