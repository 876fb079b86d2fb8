/// SVG transform target - the clip rectangle and layer groups of one camera
///
/// A camera renders through one `<clipPath>` rectangle and one `<g>` per
/// scene layer bound to it. This target keeps their attributes and rewrites
/// them every time the camera emits a transform. The target is a cheap
/// handle: clones share the same groups, so the document side keeps one
/// handle while the camera owns another.

use std::cell::RefCell;
use std::rc::Rc;
use slotmap::{new_key_type, SlotMap};
use rustc_hash::FxHashMap;
use canvas_camera::canvas::Result;
use canvas_camera::canvas::render::{TransformSink, ViewTransform};
use canvas_camera::{camera_bail, camera_debug, camera_info, camera_trace};
use crate::svg_config::SvgConfig;

const SOURCE: &str = "canvas::svg::Target";

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a layer group within a target.
    pub struct LayerKey;
}

// ===== GROUP =====

/// One SVG element with its attribute map
#[derive(Debug, Clone, Default)]
pub struct SvgGroup {
    id: String,
    attributes: FxHashMap<String, String>,
}

impl SvgGroup {
    fn new(id: &str) -> Self {
        Self { id: id.to_string(), attributes: FxHashMap::default() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        self.attributes.insert(name.to_string(), value);
    }

    /// Opening tag with attributes in name order.
    fn markup(&self, tag: &str) -> String {
        let mut names: Vec<&String> = self.attributes.keys().collect();
        names.sort();
        let mut out = format!("<{} id=\"{}\"", tag, self.id);
        for name in names {
            out.push_str(&format!(" {}=\"{}\"", name, self.attributes[name]));
        }
        out.push_str("/>");
        out
    }
}

// ===== TARGET =====

struct TargetState {
    config: SvgConfig,
    clip_id: String,
    clip_rect: SvgGroup,
    layers: SlotMap<LayerKey, SvgGroup>,
    closed: bool,
}

#[derive(Clone)]
pub struct SvgTransformTarget {
    state: Rc<RefCell<TargetState>>,
}

impl SvgTransformTarget {
    /// Create a target whose clip path is `<clipPath id="{clip_id}">`.
    pub fn new(clip_id: &str, config: SvgConfig) -> Self {
        camera_debug!(SOURCE, "Transform target '{}' created", clip_id);
        Self {
            state: Rc::new(RefCell::new(TargetState {
                config,
                clip_id: clip_id.to_string(),
                clip_rect: SvgGroup::new(&format!("{}-rect", clip_id)),
                layers: SlotMap::with_key(),
                closed: false,
            })),
        }
    }

    /// Add a layer group clipped by this target's clip path.
    pub fn add_layer(&self, id: &str) -> LayerKey {
        let mut state = self.state.borrow_mut();
        let mut group = SvgGroup::new(id);
        let clip_ref = format!("url(#{})", state.clip_id);
        group.set_attribute("clip-path", clip_ref);
        state.layers.insert(group)
    }

    /// Returns false if the key is invalid.
    pub fn remove_layer(&self, key: LayerKey) -> bool {
        self.state.borrow_mut().layers.remove(key).is_some()
    }

    pub fn layer_count(&self) -> usize {
        self.state.borrow().layers.len()
    }

    pub fn layer_keys(&self) -> Vec<LayerKey> {
        self.state.borrow().layers.keys().collect()
    }

    pub fn layer_attribute(&self, key: LayerKey, name: &str) -> Option<String> {
        self.state.borrow().layers.get(key)?.attribute(name).map(str::to_string)
    }

    pub fn clip_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().clip_rect.attribute(name).map(str::to_string)
    }

    /// Tear the target down. Every later `apply` fails.
    pub fn close(&self) {
        let mut state = self.state.borrow_mut();
        if !state.closed {
            state.closed = true;
            camera_info!(SOURCE, "Transform target '{}' closed with {} layers",
                state.clip_id, state.layers.len());
        }
    }

    /// Current clip path and layer groups as SVG markup, one element per line.
    pub fn markup(&self) -> String {
        let state = self.state.borrow();
        let mut lines = vec![
            format!("<clipPath id=\"{}\">", state.clip_id),
            state.clip_rect.markup("rect"),
            "</clipPath>".to_string(),
        ];
        lines.extend(state.layers.values().map(|group| group.markup("g")));
        lines.join("\n")
    }
}

impl TransformSink for SvgTransformTarget {
    fn apply(&mut self, transform: &ViewTransform) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.closed {
            camera_bail!(SOURCE, BackendError, "transform target '{}' was closed", state.clip_id);
        }

        let config = state.config;
        let f = |value: f64| config.format(value);
        let transform_attr = format!(
            "scale({}) translate({} {}) rotate({} {} {})",
            f(transform.scale),
            f(transform.translate.x),
            f(transform.translate.y),
            f(transform.rotate),
            f(transform.rotate_center.x),
            f(transform.rotate_center.y),
        );

        let clip = transform.clip;
        state.clip_rect.set_attribute("x", f(clip.x));
        state.clip_rect.set_attribute("y", f(clip.y));
        state.clip_rect.set_attribute("width", f(clip.width));
        state.clip_rect.set_attribute("height", f(clip.height));
        for group in state.layers.values_mut() {
            group.set_attribute("transform", transform_attr.clone());
        }

        camera_trace!(SOURCE, "{}: transform=\"{}\"", state.clip_id, transform_attr);
        Ok(())
    }
}

#[cfg(test)]
#[path = "svg_target_tests.rs"]
mod tests;
