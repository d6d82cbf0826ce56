// Headless render surface: the retained state the terminal frontend draws from.

use std::collections::{BTreeMap, HashMap};

use super::{Card, Mount, RenderTarget};
use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub text: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    elements: HashMap<Mount, Element>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Page with every dashboard mount point present.
    pub fn new() -> Self {
        Self::with_mounts(Mount::ALL)
    }

    pub fn with_mounts(mounts: impl IntoIterator<Item = Mount>) -> Self {
        Self {
            elements: mounts
                .into_iter()
                .map(|m| (m, Element::default()))
                .collect(),
        }
    }

    pub fn element(&self, mount: Mount) -> Option<&Element> {
        self.elements.get(&mount)
    }

    pub fn text(&self, mount: Mount) -> Option<&str> {
        self.elements.get(&mount).map(|e| e.text.as_str())
    }

    pub fn attr(&self, mount: Mount, name: &str) -> Option<&str> {
        self.elements
            .get(&mount)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// Children of `mount`; empty when the mount is absent.
    pub fn children(&self, mount: Mount) -> &[Card] {
        self.elements
            .get(&mount)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    fn element_mut(&mut self, mount: Mount) -> Result<&mut Element, RenderError> {
        self.elements
            .get_mut(&mount)
            .ok_or(RenderError::MissingMount(mount))
    }
}

impl RenderTarget for Page {
    fn has_mount(&self, mount: Mount) -> bool {
        self.elements.contains_key(&mount)
    }

    fn set_text(&mut self, mount: Mount, value: &str) -> Result<(), RenderError> {
        let element = self.element_mut(mount)?;
        element.text.clear();
        element.text.push_str(value);
        Ok(())
    }

    fn set_attr(&mut self, mount: Mount, name: &str, value: &str) -> Result<(), RenderError> {
        self.element_mut(mount)?
            .attrs
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn replace_children(&mut self, mount: Mount, cards: Vec<Card>) -> Result<(), RenderError> {
        self.element_mut(mount)?.children = cards;
        Ok(())
    }
}
