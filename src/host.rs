use std::collections::HashMap;

use log::warn;

/// Fade-in length of the `show` class, in frame-clock milliseconds.
pub const SHOW_TRANSITION_MS: f64 = 1000.0;
pub const SHOW_CLASS: &str = "show";

/// The page hosting the show. The simulation only ever toggles element
/// visibility and classes through this seam.
pub trait Host {
    fn hide(&mut self, id: &str);
    fn reveal(&mut self, id: &str);
    fn add_class(&mut self, id: &str, class: &str);
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub lines: Vec<String>,
    visible: bool,
    classes: Vec<String>,
    shown_at: Option<f64>,
}

impl Element {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            visible: true,
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory page: a set of text elements addressed by id. Adding the
/// `show` class starts a fade-in driven by the page clock.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
    order: Vec<String>,
    clock: f64,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        let id = id.into();
        if self.elements.insert(id.clone(), element).is_none() {
            self.order.push(id);
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Visible elements in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.order.iter().filter_map(|id| {
            let element = self.elements.get(id)?;
            element.visible.then_some((id.as_str(), element))
        })
    }

    pub fn set_clock(&mut self, now: f64) {
        self.clock = now;
    }

    /// 0.0 (transparent) to 1.0 (opaque). Elements without `show` stay
    /// transparent even when displayed, like a CSS opacity transition.
    pub fn opacity(&self, id: &str) -> f32 {
        let Some(element) = self.elements.get(id) else {
            return 0.0;
        };
        match (element.visible, element.shown_at) {
            (true, Some(start)) => ((self.clock - start) / SHOW_TRANSITION_MS).clamp(0.0, 1.0) as f32,
            _ => 0.0,
        }
    }

    fn lookup(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            warn!("page has no element `{id}`");
        }
        element
    }
}

impl Host for Page {
    fn hide(&mut self, id: &str) {
        if let Some(element) = self.lookup(id) {
            element.visible = false;
        }
    }

    fn reveal(&mut self, id: &str) {
        if let Some(element) = self.lookup(id) {
            element.visible = true;
        }
    }

    fn add_class(&mut self, id: &str, class: &str) {
        let clock = self.clock;
        if let Some(element) = self.lookup(id) {
            if element.has_class(class) {
                return;
            }
            element.classes.push(class.to_string());
            if class == SHOW_CLASS {
                element.shown_at = Some(clock);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let mut page = Page::new();
        page.insert("content", Element::new(vec!["hello".into()]));
        page
    }

    #[test]
    fn show_class_fades_in_over_transition() {
        let mut page = page();
        page.hide("content");
        page.set_clock(500.0);
        page.reveal("content");
        assert_eq!(page.opacity("content"), 0.0);

        page.add_class("content", SHOW_CLASS);
        page.set_clock(1000.0);
        assert!((page.opacity("content") - 0.5).abs() < 1e-6);
        page.set_clock(5000.0);
        assert_eq!(page.opacity("content"), 1.0);
    }

    #[test]
    fn hidden_elements_are_not_listed() {
        let mut page = page();
        page.insert("footer", Element::new(vec![]));
        page.hide("content");

        let ids: Vec<_> = page.visible().map(|(id, _)| id).collect();
        assert_eq!(ids, ["footer"]);
    }

    #[test]
    fn repeated_show_keeps_first_start() {
        let mut page = page();
        page.add_class("content", SHOW_CLASS);
        page.set_clock(800.0);
        page.add_class("content", SHOW_CLASS);
        assert!((page.opacity("content") - 0.8).abs() < 1e-6);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut page = page();
        page.reveal("missing");
        page.add_class("missing", SHOW_CLASS);
        assert!(page.element("missing").is_none());
        assert_eq!(page.opacity("missing"), 0.0);
    }
}
