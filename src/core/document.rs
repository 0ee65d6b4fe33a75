// EssaySort - core/document.rs
//
// In-memory element tree standing in for a browser DOM, plus the minimal
// `RenderTarget` capability set the renderer writes through.
//
// Nodes live in an arena and are addressed by generation-checked `NodeId`s,
// so an id held across a `clear_children` never aliases a recycled slot.
// Accessors on a stale id return empty values and mutators are no-ops.

use std::collections::BTreeMap;

/// Handle to a node in a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// A single element: tag, attributes, classes, own text and children.
#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// Capabilities the renderer needs from a display surface.
pub trait RenderTarget {
    /// Handle type for nodes created on this target.
    type Node: Copy;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Remove every child of `parent`.
    fn clear_children(&mut self, parent: Self::Node);

    /// Replace the node's content with a single text run.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Set an attribute, replacing any previous value.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Add a class to the node's class list.
    fn add_class(&mut self, node: Self::Node, class: &str);
}

/// An element tree with a single root.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Document {
    /// Create a document whose root element has the given tag.
    pub fn new(root_tag: &str) -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        doc.root = doc.alloc(Element::new(root_tag));
        doc
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes (attached or detached).
    pub fn live_nodes(&self) -> usize {
        self.slots.iter().filter(|s| s.element.is_some()).count()
    }

    fn alloc(&mut self, element: Element) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.generation = slot.generation.wrapping_add(1);
            slot.element = Some(element);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                element: Some(element),
            });
            NodeId {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    fn get(&self, id: NodeId) -> Option<&Element> {
        self.slots
            .get(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.element.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.element.as_mut())
    }

    /// True if `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Free `id` and its whole subtree.
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|s| s.generation == current.generation)
            else {
                continue;
            };
            if let Some(element) = slot.element.take() {
                stack.extend(element.children);
                self.free.push(current.index);
            }
        }
    }

    fn detach(&mut self, child: NodeId) {
        let parent = self.get(child).and_then(|e| e.parent);
        if let Some(parent) = parent {
            if let Some(p) = self.get_mut(parent) {
                p.children.retain(|c| *c != child);
            }
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = None;
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn tag(&self, id: NodeId) -> &str {
        self.get(id).map(|e| e.tag.as_str()).unwrap_or("")
    }

    /// The node's own text run (not including descendants).
    pub fn text(&self, id: NodeId) -> &str {
        self.get(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    /// Concatenated text of the node and all its descendants, in tree order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut buf = String::new();
        self.collect_text(id, &mut buf);
        buf
    }

    fn collect_text(&self, id: NodeId, buf: &mut String) {
        if let Some(e) = self.get(id) {
            buf.push_str(&e.text);
            for child in &e.children {
                self.collect_text(*child, buf);
            }
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|e| e.parent)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Attributes in name order, excluding the class list.
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.get(id)
            .into_iter()
            .flat_map(|e| e.attributes.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.get(id).map(|e| e.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// Every descendant of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// First attached element whose `id` attribute equals `element_id`.
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|n| self.attribute(*n, "id") == Some(element_id))
    }

    /// Descendants of `scope` with the given tag, in pre-order.
    pub fn select_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| self.tag(*n) == tag)
            .collect()
    }

    /// Descendants of `scope` carrying the given class, in pre-order.
    pub fn select_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Mutation beyond the RenderTarget set (used by controllers)
    // -------------------------------------------------------------------------

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(e) = self.get_mut(id) {
            e.attributes.remove(name);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(e) = self.get_mut(id) {
            e.classes.retain(|c| c != class);
        }
    }

    /// Add the class when `on`, remove it otherwise.
    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }
}

impl RenderTarget for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Element::new(tag))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        self.detach(child);
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
    }

    fn clear_children(&mut self, parent: NodeId) {
        let children = match self.get_mut(parent) {
            Some(p) => std::mem::take(&mut p.children),
            None => return,
        };
        for child in children {
            self.release(child);
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        if let Some(e) = self.get_mut(node) {
            e.text = text.to_string();
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(e) = self.get_mut(node) {
            if name == "class" {
                e.classes.clear();
                for class in value.split_whitespace() {
                    if !e.classes.iter().any(|c| c == class) {
                        e.classes.push(class.to_string());
                    }
                }
            } else {
                e.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(e) = self.get_mut(node) {
            if !e.classes.iter().any(|c| c == class) {
                e.classes.push(class.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new("html");
        let root = doc.root();
        let list = doc.create_element("div");
        doc.set_attribute(list, "id", "list");
        doc.append_child(root, list);
        let ul = doc.create_element("ul");
        doc.append_child(list, ul);
        for text in ["one", "two"] {
            let li = doc.create_element("li");
            doc.set_text(li, text);
            doc.append_child(ul, li);
        }
        (doc, list, ul)
    }

    #[test]
    fn test_element_by_id_finds_attached_nodes() {
        let (doc, list, _) = sample();
        assert_eq!(doc.element_by_id("list"), Some(list));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let (doc, list, _) = sample();
        assert_eq!(doc.text_content(list), "onetwo");
    }

    #[test]
    fn test_clear_children_releases_subtree() {
        let (mut doc, list, ul) = sample();
        let before = doc.live_nodes();
        doc.clear_children(list);
        assert!(doc.children(list).is_empty());
        assert!(!doc.contains(ul));
        assert_eq!(doc.live_nodes(), before - 3);
    }

    #[test]
    fn test_stale_id_does_not_alias_recycled_slot() {
        let (mut doc, list, ul) = sample();
        doc.clear_children(list);
        let fresh = doc.create_element("section");
        doc.append_child(list, fresh);
        assert!(doc.contains(fresh));
        assert!(!doc.contains(ul));
        assert_eq!(doc.tag(ul), "");
        doc.set_attribute(ul, "data-key", "x");
        assert_eq!(doc.attribute(fresh, "data-key"), None);
    }

    #[test]
    fn test_set_text_replaces_children() {
        let (mut doc, _, ul) = sample();
        doc.set_text(ul, "flat");
        assert!(doc.children(ul).is_empty());
        assert_eq!(doc.text_content(ul), "flat");
    }

    #[test]
    fn test_class_list_operations() {
        let (mut doc, list, _) = sample();
        doc.add_class(list, "rows");
        doc.add_class(list, "rows");
        assert_eq!(doc.classes(list), ["rows".to_string()]);
        doc.toggle_class(list, "hidden", true);
        assert!(doc.has_class(list, "hidden"));
        doc.toggle_class(list, "hidden", false);
        assert!(!doc.has_class(list, "hidden"));
        doc.set_attribute(list, "class", "a b a");
        assert_eq!(doc.classes(list).len(), 2);
        assert_eq!(doc.attribute(list, "class"), None);
    }

    #[test]
    fn test_append_child_moves_node() {
        let (mut doc, list, ul) = sample();
        let other = doc.create_element("div");
        doc.append_child(doc.root(), other);
        doc.append_child(other, ul);
        assert!(doc.children(list).is_empty());
        assert_eq!(doc.children(other), [ul]);
        assert_eq!(doc.parent(ul), Some(other));
    }

    #[test]
    fn test_select_by_tag_and_class_in_tree_order() {
        let (mut doc, list, ul) = sample();
        let items = doc.select_tag(list, "li");
        assert_eq!(items.len(), 2);
        assert_eq!(doc.text(items[0]), "one");
        doc.add_class(items[1], "pick");
        assert_eq!(doc.select_class(doc.root(), "pick"), vec![items[1]]);
        assert_eq!(doc.select_tag(ul, "ul"), Vec::<NodeId>::new());
    }
}
