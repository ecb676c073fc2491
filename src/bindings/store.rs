//! In-memory binding table

use serde::Serialize;

use super::binding::Binding;

/// Ordered list of bindings, at most one per key
///
/// Order carries no meaning beyond display; a rebind keeps the entry where
/// it was. Only deserialized through [`super::validate`], never directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindingStore {
    bindings: Vec<Binding>,
}

impl BindingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already-validated bindings
    ///
    /// The first binding for a key wins; later duplicates are dropped, which
    /// keeps whatever a lookup on the raw file would have found.
    pub fn with_bindings(bindings: impl IntoIterator<Item = Binding>) -> Self {
        let mut store = Self::new();
        for binding in bindings {
            if store.position(&binding.key).is_some() {
                tracing::warn!(
                    "Ignoring duplicate binding for key {} ({})",
                    binding.key,
                    binding.file_path
                );
                continue;
            }
            store.bindings.push(binding);
        }
        store
    }

    /// Replace the binding for `binding.key` in place, or append it
    pub fn upsert(mut self, binding: Binding) -> Self {
        match self.position(&binding.key) {
            Some(idx) => self.bindings[idx] = binding,
            None => self.bindings.push(binding),
        }
        self
    }

    /// Exact-match lookup by key
    pub fn find_by_key(&self, key: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.key == key)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.bindings.iter().position(|b| b.key == key)
    }
}
