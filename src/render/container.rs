use tracing::debug;

use crate::core::BoundingBox;
use crate::error::{ChartError, ChartResult};
use crate::render::{CHART_ROOT_CLASS, ChartSurface, SvgElement};

/// In-memory chart container.
///
/// Stands in for a host element: it can be detached and re-attached, and
/// reports a layout box that the host sets on resize. Without a host box it
/// reports the size of the most recently drawn chart root, the way a
/// container that shrinks to its content would. Other children never count.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgContainer {
    id: String,
    attached: bool,
    bounding_box: Option<BoundingBox>,
    children: Vec<SvgElement>,
}

impl SvgContainer {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attached: true,
            bounding_box: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bounding_box(mut self, width: f64, height: f64) -> Self {
        self.set_bounding_box(width, height);
        self
    }

    pub fn set_bounding_box(&mut self, width: f64, height: f64) {
        self.bounding_box = Some(BoundingBox::new(width, height));
    }

    pub fn clear_bounding_box(&mut self) {
        self.bounding_box = None;
    }

    pub fn detach(&mut self) {
        debug!(container = %self.id, "container detached");
        self.attached = false;
    }

    pub fn attach(&mut self) {
        debug!(container = %self.id, "container attached");
        self.attached = true;
    }

    #[must_use]
    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    /// Children carrying `class`, top level only.
    #[must_use]
    pub fn children_with_class(&self, class: &str) -> Vec<&SvgElement> {
        self.children
            .iter()
            .filter(|child| child.has_class(class))
            .collect()
    }

    /// Serializes the container content as one markup string.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_markup(&mut out);
        }
        out
    }

    fn rendered_size(&self) -> Option<BoundingBox> {
        let root = self
            .children
            .iter()
            .rev()
            .find(|child| child.tag == "svg" && child.has_class(CHART_ROOT_CLASS))?;
        Some(BoundingBox::new(
            root.attr_f64("width")?,
            root.attr_f64("height")?,
        ))
    }
}

impl ChartSurface for SvgContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box.or_else(|| self.rendered_size())
    }

    fn append_child(&mut self, element: SvgElement) -> ChartResult<()> {
        if !self.attached {
            return Err(ChartError::ContainerNotFound(self.id.clone()));
        }
        self.children.push(element);
        Ok(())
    }

    fn remove_children_with_class(&mut self, class: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|child| !child.has_class(class));
        before - self.children.len()
    }
}
