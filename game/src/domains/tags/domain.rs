use std::collections::{HashMap, HashSet};

use crate::entities::EntityHandle;

/// Script names of entities, looked up without regard to case.
#[derive(Default)]
pub struct TagsDomain {
    handles: HashMap<String, EntityHandle>,
    tags: HashMap<EntityHandle, String>,
}

impl TagsDomain {
    /// Binds the tag to the handle, an existing binding of either side is
    /// replaced. Empty tags are ignored.
    pub fn insert(&mut self, tag: &str, handle: EntityHandle) {
        if tag.is_empty() {
            return;
        }
        let key = tag.to_lowercase();
        if let Some(previous) = self.handles.insert(key.clone(), handle) {
            if previous != handle {
                self.tags.remove(&previous);
            }
        }
        if let Some(previous) = self.tags.insert(handle, tag.to_string()) {
            let previous = previous.to_lowercase();
            if previous != key {
                self.handles.remove(&previous);
            }
        }
    }

    pub fn handle_of(&self, tag: &str) -> Option<EntityHandle> {
        self.handles.get(&tag.to_lowercase()).copied()
    }

    pub fn tag_of(&self, handle: EntityHandle) -> Option<&str> {
        self.tags.get(&handle).map(String::as_str)
    }

    pub fn remove_handle(&mut self, handle: EntityHandle) {
        if let Some(tag) = self.tags.remove(&handle) {
            self.handles.remove(&tag.to_lowercase());
        }
    }

    pub fn retain(&mut self, keep: &HashSet<EntityHandle>) {
        self.tags.retain(|handle, _| keep.contains(handle));
        self.handles.retain(|_, handle| keep.contains(handle));
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
