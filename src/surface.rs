//! DOM implementation of the render surface.

use crate::core::{DrawFrame, Layer, NodeId, NodeSpec, Surface, TimeField, Viewport};
use crate::dom;
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const HEART_PATH_D: &str =
    "M100,36 C120,10 160,20 180,60 C200,100 100,160 100,160 C100,160 0,100 20,60 C40,20 80,10 100,36 Z";

pub struct DomSurface {
    document: web::Document,
    rain: Option<web::HtmlElement>,
    decor: Option<web::HtmlElement>,
    outline: Option<web::SvgElement>,
    solid: Option<web::HtmlElement>,
    nodes: FnvHashMap<NodeId, (Layer, web::HtmlElement)>,
    next_id: NodeId,
}

impl DomSurface {
    pub fn new(document: web::Document) -> Self {
        let rain = dom::query_html(&document, ".heart-rain");
        let decor = dom::query_html(&document, ".timer-container");
        if rain.is_none() {
            log::warn!("missing .heart-rain; heart rain disabled");
        }
        Self {
            document,
            rain,
            decor,
            outline: None,
            solid: None,
            nodes: FnvHashMap::default(),
            next_id: 1,
        }
    }

    fn container(&self, layer: Layer) -> Option<&web::HtmlElement> {
        match layer {
            Layer::Rain => self.rain.as_ref(),
            Layer::Decor => self.decor.as_ref(),
        }
    }

    fn field_element(&self, field: TimeField) -> Option<web::Element> {
        self.document.get_element_by_id(field.id())
    }

    /// Find the heart outline path, creating the SVG if the page lacks one.
    fn ensure_outline(&self, container: &web::Element) -> Option<web::SvgElement> {
        if let Some(path) = dom::query(&self.document, ".heart-drawing path") {
            return path.dyn_into::<web::SvgElement>().ok();
        }
        let svg = self.document.create_element_ns(Some(SVG_NS), "svg").ok()?;
        _ = svg.set_attribute("class", "heart-drawing");
        _ = svg.set_attribute("viewBox", "0 0 200 200");
        _ = svg.set_attribute("style", "width:100%;height:100%;position:absolute");
        let path = self.document.create_element_ns(Some(SVG_NS), "path").ok()?;
        _ = path.set_attribute("d", HEART_PATH_D);
        svg.append_child(&path).ok()?;
        container.prepend_with_node_1(&svg).ok()?;
        path.dyn_into::<web::SvgElement>().ok()
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Viewport {
        dom::viewport()
    }

    fn create_node(&mut self, layer: Layer, spec: NodeSpec) -> Option<NodeId> {
        let container = self.container(layer)?;
        let el: web::HtmlElement = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into()
            .ok()?;
        el.set_class_name(spec.class);
        el.set_text_content(Some(&spec.text));
        let style = el.style();
        for (name, value) in &spec.styles {
            _ = style.set_property(name, value);
        }
        container.append_child(&el).ok()?;

        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, (layer, el));
        Some(id)
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        match self.nodes.remove(&id) {
            Some((_, el)) => {
                el.remove();
                true
            }
            None => false,
        }
    }

    fn clear_rain(&mut self) {
        self.nodes.retain(|_, (layer, _)| *layer != Layer::Rain);
        if let Some(rain) = &self.rain {
            rain.set_inner_html("");
        }
    }

    fn set_rain_active(&mut self, active: bool) {
        if let Some(rain) = &self.rain {
            let cl = rain.class_list();
            _ = if active {
                cl.add_1("active")
            } else {
                cl.remove_1("active")
            };
        }
    }

    fn mount_heart(&mut self) -> bool {
        let Some(container) = dom::query(&self.document, ".heart-container") else {
            return false;
        };
        self.outline = self.ensure_outline(&container);
        self.solid = dom::query_html(&self.document, ".heart-solid");
        self.outline.is_some() && self.solid.is_some()
    }

    fn mount_timer(&mut self) -> bool {
        let Some(display) = dom::query(&self.document, ".timer-display") else {
            return false;
        };
        let html: String = TimeField::ALL
            .iter()
            .map(|f| {
                format!(
                    "<div class=\"timer-unit\" id=\"{id}-container\">\
                     <div class=\"timer-value\" id=\"{id}\">0</div>\
                     <div class=\"timer-label\">{label}</div></div>",
                    id = f.id(),
                    label = f.label()
                )
            })
            .collect();
        display.set_inner_html(&html);
        true
    }

    fn field_changing(&mut self, field: TimeField) -> bool {
        match self.field_element(field) {
            Some(el) => el.class_list().add_1("animating").is_ok(),
            None => false,
        }
    }

    fn field_committed(&mut self, field: TimeField, value: u32) -> bool {
        match self.field_element(field) {
            Some(el) => {
                el.set_text_content(Some(&value.to_string()));
                el.class_list().remove_1("animating").is_ok()
            }
            None => false,
        }
    }

    fn apply_draw(&mut self, frame: &DrawFrame) -> bool {
        let (Some(outline), Some(solid)) = (&self.outline, &self.solid) else {
            return false;
        };
        if !outline.is_connected() || !solid.is_connected() {
            return false;
        }
        let os = outline.style();
        _ = os.set_property("stroke-dashoffset", &format!("{:.2}", frame.outline_dash_offset));
        _ = os.set_property("opacity", &format!("{:.3}", frame.outline_opacity));
        let ss = solid.style();
        _ = ss.set_property("opacity", &format!("{:.3}", frame.solid_opacity));
        _ = ss.set_property(
            "transform",
            &format!(
                "rotateY({:.2}deg) scale({:.4})",
                frame.solid_rotate_y_deg, frame.solid_scale
            ),
        );
        true
    }
}
