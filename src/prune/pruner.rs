//! Tree pruning.
//!
//! The pruner walks a value once, carrying the property path from the root
//! in reusable segment buffers:
//!
//! - An object property is dropped unless its path is selected. Kept
//!   containers are pruned recursively.
//! - Arrays do not extend the path. Every element is visited at the array's
//!   own path; scalar elements are kept.
//! - A nested object or array that had content but lost all of it is removed
//!   from its parent. Containers that were already empty are kept, and the
//!   root is never removed.

use super::cache::MatchCache;
use crate::document::node::TreeValue;
use crate::fields::{AlwaysIncluded, CaseSensitivity, Fields};
use indexmap::IndexMap;

/// State for one pruning pass.
pub struct Pruner<'a> {
    fields: &'a Fields,
    case_sensitivity: CaseSensitivity,
    always_included: Option<&'a AlwaysIncluded>,
    cache: MatchCache,
    /// Segment buffers, reused across siblings; only `path[..depth]` is live.
    path: Vec<String>,
    depth: usize,
}

impl<'a> Pruner<'a> {
    pub fn new(
        fields: &'a Fields,
        case_sensitivity: CaseSensitivity,
        always_included: Option<&'a AlwaysIncluded>,
    ) -> Self {
        Self {
            fields,
            case_sensitivity,
            always_included,
            cache: MatchCache::new(),
            path: Vec::new(),
            depth: 0,
        }
    }

    /// Prunes `value`, consuming the pass.
    pub fn prune(mut self, mut value: TreeValue) -> TreeValue {
        // The root stays even if it ends up empty.
        self.prune_child(&mut value);

        log::debug!(
            "Pruned value: {} distinct paths, {} cache hits",
            self.cache.misses(),
            self.cache.hits()
        );
        value
    }

    /// Prunes a nested value. Returns true if it should be removed from its parent.
    fn prune_child(&mut self, value: &mut TreeValue) -> bool {
        match value {
            TreeValue::Object(map) => self.prune_object(map),
            TreeValue::Array(items) => self.prune_array(items),
            TreeValue::Null | TreeValue::Scalar(_) => false,
        }
    }

    fn prune_object(&mut self, map: &mut IndexMap<String, TreeValue>) -> bool {
        if map.is_empty() {
            return false;
        }

        map.retain(|name, child| {
            self.enter(name);
            let keep = self.is_selected() && !self.prune_child(child);
            self.depth -= 1;
            keep
        });

        map.is_empty()
    }

    fn prune_array(&mut self, items: &mut Vec<TreeValue>) -> bool {
        if items.is_empty() {
            return false;
        }

        items.retain_mut(|item| !self.prune_child(item));

        items.is_empty()
    }

    /// Descends into property `name`, copying it into an existing buffer
    /// when one is free at this depth.
    fn enter(&mut self, name: &str) {
        match self.path.get_mut(self.depth) {
            Some(segment) => {
                segment.clear();
                segment.push_str(name);
            }
            None => self.path.push(name.to_owned()),
        }
        self.depth += 1;
    }

    /// Whether the current path is selected by the caller or always included.
    fn is_selected(&mut self) -> bool {
        let fields = self.fields;
        let case = self.case_sensitivity;
        let always_included = self.always_included;
        let path: &[String] = &self.path[..self.depth];

        self.cache.get_or_insert_with(path, || {
            fields.matches(path, case)
                || always_included.is_some_and(|always| always.matches(path))
        })
    }
}
