//! One-pass index over a source document.

use std::ops::Range;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use super::{is_reference_stub, is_reserved_field};
use crate::error::DecodeError;
use crate::vocab::ElementType;

/// An object found in the document, with its position in the tree.
#[derive(Clone, Debug)]
pub struct IndexedObject<'d> {
    pub id: &'d str,
    pub type_name: &'d str,
    /// None for `type` values outside the modeled set.
    pub kind: Option<ElementType>,
    pub object: &'d Map<String, Value>,
    /// Index of the enclosing object, None for the root.
    pub parent: Option<usize>,
    /// Field of the parent that holds this object.
    pub field: Option<&'d str>,
    /// End (exclusive) of this object's subtree in preorder.
    end: usize,
}

impl<'d> IndexedObject<'d> {
    /// Returns true if this occurrence only references a definition elsewhere.
    pub fn is_stub(&self) -> bool {
        is_reference_stub(self.kind, self.object)
    }

    pub fn get(&self, field: &str) -> Option<&'d Value> {
        self.object.get(field)
    }
}

/// Preorder index of every object in a document.
///
/// Each object's subtree occupies a contiguous range of the preorder, so
/// descendant lookups are slices of one vector rather than tree walks.
#[derive(Debug)]
pub struct DocumentIndex<'d> {
    objects: Vec<IndexedObject<'d>>,
    by_type: IndexMap<&'d str, Vec<usize>>,
}

impl<'d> DocumentIndex<'d> {
    /// Index a document. The root must be an object, and so must carry
    /// `id` and `type`; so must every nested object outside reserved fields.
    pub fn build(root: &'d Value) -> Result<Self, DecodeError> {
        let Value::Object(root) = root else {
            return Err(DecodeError::structural("$", "document root must be a JSON object"));
        };
        let mut index = Self {
            objects: Vec::new(),
            by_type: IndexMap::new(),
        };
        index.visit(root, None, None, "$".to_string())?;
        Ok(index)
    }

    fn visit(
        &mut self,
        object: &'d Map<String, Value>,
        parent: Option<usize>,
        field: Option<&'d str>,
        path: String,
    ) -> Result<(), DecodeError> {
        let id = match object.get("id") {
            Some(Value::String(id)) => id.as_str(),
            _ => return Err(DecodeError::missing_field(path, "id")),
        };
        let type_name = match object.get("type") {
            Some(Value::String(t)) => t.as_str(),
            _ => return Err(DecodeError::missing_field(path, "type")),
        };

        let position = self.objects.len();
        self.objects.push(IndexedObject {
            id,
            type_name,
            kind: ElementType::from_type_name(type_name),
            object,
            parent,
            field,
            end: position + 1,
        });
        self.by_type.entry(type_name).or_default().push(position);

        for (key, value) in object {
            if is_reserved_field(key) {
                continue;
            }
            match value {
                Value::Object(nested) => {
                    self.visit(
                        nested,
                        Some(position),
                        Some(key.as_str()),
                        format!("{path}.{key}"),
                    )?;
                }
                Value::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if let Value::Object(nested) = item {
                            self.visit(
                                nested,
                                Some(position),
                                Some(key.as_str()),
                                format!("{path}.{key}[{i}]"),
                            )?;
                        }
                    }
                }
                _ => {}
            }
        }

        self.objects[position].end = self.objects.len();
        Ok(())
    }

    /// Every indexed object in preorder.
    pub fn objects(&self) -> &[IndexedObject<'d>] {
        &self.objects
    }

    pub fn get(&self, position: usize) -> Option<&IndexedObject<'d>> {
        self.objects.get(position)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Positions of every occurrence (stubs included) of a type name.
    pub fn positions_of(&self, type_name: &str) -> &[usize] {
        self.by_type
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every occurrence of an element type, stubs included.
    pub fn occurrences(
        &self,
        kind: ElementType,
    ) -> impl Iterator<Item = (usize, &IndexedObject<'d>)> {
        self.positions_of(kind.type_name())
            .iter()
            .map(move |&p| (p, &self.objects[p]))
    }

    /// Full definitions of an element type (reference stubs skipped).
    pub fn definitions(
        &self,
        kind: ElementType,
    ) -> impl Iterator<Item = (usize, &IndexedObject<'d>)> {
        self.occurrences(kind).filter(|(_, obj)| !obj.is_stub())
    }

    fn subtree(&self, position: usize) -> Range<usize> {
        match self.objects.get(position) {
            Some(obj) => position + 1..obj.end,
            None => 0..0,
        }
    }

    /// Objects nested (at any depth) inside the object at `position`.
    pub fn descendants(&self, position: usize) -> &[IndexedObject<'d>] {
        &self.objects[self.subtree(position)]
    }

    /// Distinct ids of descendants of a given type name, in document order.
    pub fn descendant_ids_of(&self, position: usize, type_name: &str) -> IndexSet<&'d str> {
        self.descendants(position)
            .iter()
            .filter(|obj| obj.type_name == type_name)
            .map(|obj| obj.id)
            .collect()
    }

    /// Objects held directly in `field` of the object at `position`.
    pub fn children_in(
        &self,
        position: usize,
        field: &str,
    ) -> impl Iterator<Item = &IndexedObject<'d>> {
        self.descendants(position)
            .iter()
            .filter(move |obj| obj.parent == Some(position) && obj.field == Some(field))
    }
}
