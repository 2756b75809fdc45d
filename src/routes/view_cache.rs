//! Keep-alive cache for route views.
//!
//! Leptos drops a view's owner, and every signal created under it, when the
//! route changes. Views marked `keep_alive` instead pull their state from
//! this cache, which lives at app scope, so coming back restores it.

#[cfg(test)]
#[path = "view_cache_test.rs"]
mod view_cache_test;

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::routes::table::ViewId;

type Slot = Box<dyn Any + Send + Sync>;

#[derive(Clone, Default)]
pub struct ViewCache {
    slots: Arc<Mutex<HashMap<ViewId, Slot>>>,
}

impl ViewCache {
    /// State for `view`. With `keep_alive` the first value built by `init` is
    /// stored and cloned out on every later call; without it `init` runs each
    /// time and nothing is stored.
    ///
    /// A stored value of a different type is replaced. `init` runs without
    /// the cache locked, so it may itself call into the cache; if that stores
    /// a value for `view` first, the stored value wins.
    pub fn retain<T, F>(&self, view: ViewId, keep_alive: bool, init: F) -> T
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        if !keep_alive {
            return init();
        }
        if let Some(existing) = self.stored::<T>(view) {
            return existing;
        }

        let value = init();
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slots.get(&view).and_then(|slot| slot.downcast_ref::<T>()) {
            return existing.clone();
        }
        slots.insert(view, Box::new(value.clone()));
        value
    }

    fn stored<T: Clone + 'static>(&self, view: ViewId) -> Option<T> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(&view).and_then(|slot| slot.downcast_ref::<T>()).cloned()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, view: ViewId) -> bool {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).contains_key(&view)
    }

    /// Drop every retained view, e.g. on sign-out.
    pub fn evict_all(&self) {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
