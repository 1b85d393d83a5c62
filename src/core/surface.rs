//! Render-surface capability consumed by the sequencers.
//!
//! The sequencers never touch the DOM directly; they describe nodes with a
//! [`NodeSpec`] and hand them to a [`Surface`]. Every method degrades
//! silently: a missing element yields `None`/`false`, never an error.

use super::device::Viewport;
use super::draw::DrawFrame;
use super::elapsed::TimeField;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Opaque handle to a node created through a [`Surface`].
pub type NodeId = u32;

/// Container a node is created in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The heart-rain overlay, emptied between sessions.
    Rain,
    /// The timer decoration area, populated once at startup.
    Decor,
}

/// Description of a visual node: CSS class, text content and inline styles.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    pub class: &'static str,
    pub text: String,
    pub styles: SmallVec<[(&'static str, String); 8]>,
}

impl NodeSpec {
    pub fn new(class: &'static str, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
            styles: SmallVec::new(),
        }
    }

    pub fn style(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((name, value.into()));
        self
    }

    pub fn get_style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Create a node in `layer`; `None` when the container is absent.
    fn create_node(&mut self, layer: Layer, spec: NodeSpec) -> Option<NodeId>;

    /// Remove a node; `false` when it no longer exists.
    fn remove_node(&mut self, id: NodeId) -> bool;

    /// Remove every node of the rain layer.
    fn clear_rain(&mut self);

    fn set_rain_active(&mut self, active: bool);

    /// Prepare the heart drawing nodes; `false` when they cannot be found.
    fn mount_heart(&mut self) -> bool;

    /// Build the six timer units; `false` when the timer display is absent.
    fn mount_timer(&mut self) -> bool;

    /// Put a timer field into its "changing" visual state.
    fn field_changing(&mut self, field: TimeField) -> bool;

    /// Show `value` in a timer field and clear its "changing" state.
    fn field_committed(&mut self, field: TimeField, value: u32) -> bool;

    fn apply_draw(&mut self, frame: &DrawFrame) -> bool;
}

/// Display state of one timer field on a [`MemorySurface`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldDisplay {
    pub value: Option<u32>,
    pub changing: bool,
}

/// Headless surface that keeps everything in memory.
///
/// Used for host-side runs of the sequencers. Node ids are never reused, so
/// a stale handle can be told apart from a fresh node.
#[derive(Debug)]
pub struct MemorySurface {
    pub viewport: Viewport,
    pub rain_active: bool,
    pub heart_present: bool,
    pub timer_present: bool,
    pub last_draw: Option<DrawFrame>,
    pub draw_frames: usize,
    nodes: BTreeMap<NodeId, (Layer, NodeSpec)>,
    fields: [FieldDisplay; 6],
    timer_mounted: bool,
    next_id: NodeId,
}

impl MemorySurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rain_active: false,
            heart_present: true,
            timer_present: true,
            last_draw: None,
            draw_frames: 0,
            nodes: BTreeMap::new(),
            fields: [FieldDisplay::default(); 6],
            timer_mounted: false,
            next_id: 1,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeSpec> {
        self.nodes.get(&id).map(|(_, spec)| spec)
    }

    pub fn nodes_in(&self, layer: Layer) -> impl Iterator<Item = (NodeId, &NodeSpec)> + '_ {
        self.nodes
            .iter()
            .filter(move |(_, (l, _))| *l == layer)
            .map(|(id, (_, spec))| (*id, spec))
    }

    pub fn count_class(&self, class: &str) -> usize {
        self.nodes.values().filter(|(_, s)| s.class == class).count()
    }

    pub fn rain_node_count(&self) -> usize {
        self.nodes_in(Layer::Rain).count()
    }

    pub fn field(&self, field: TimeField) -> FieldDisplay {
        self.fields[field.index()]
    }

    pub fn timer_mounted(&self) -> bool {
        self.timer_mounted
    }
}

impl Surface for MemorySurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_node(&mut self, layer: Layer, spec: NodeSpec) -> Option<NodeId> {
        if layer == Layer::Decor && !self.timer_present {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, (layer, spec));
        Some(id)
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id).is_some()
    }

    fn clear_rain(&mut self) {
        self.nodes.retain(|_, (layer, _)| *layer != Layer::Rain);
    }

    fn set_rain_active(&mut self, active: bool) {
        self.rain_active = active;
    }

    fn mount_heart(&mut self) -> bool {
        self.heart_present
    }

    fn mount_timer(&mut self) -> bool {
        self.timer_mounted = self.timer_present;
        self.timer_mounted
    }

    fn field_changing(&mut self, field: TimeField) -> bool {
        if !self.timer_mounted {
            return false;
        }
        self.fields[field.index()].changing = true;
        true
    }

    fn field_committed(&mut self, field: TimeField, value: u32) -> bool {
        if !self.timer_mounted {
            return false;
        }
        let slot = &mut self.fields[field.index()];
        slot.value = Some(value);
        slot.changing = false;
        true
    }

    fn apply_draw(&mut self, frame: &DrawFrame) -> bool {
        if !self.heart_present {
            return false;
        }
        self.last_draw = Some(*frame);
        self.draw_frames += 1;
        true
    }
}
