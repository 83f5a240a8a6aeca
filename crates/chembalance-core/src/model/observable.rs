use slotmap::{SlotMap, new_key_type};
use std::fmt;

new_key_type! {
    /// Stable handle for a registered change listener.
    pub struct ListenerKey;
}

type Listener<T> = Box<dyn FnMut(T, T)>;

/// A single mutable value with change notification.
///
/// Listeners are called with `(new, old)` after the value has changed; a
/// write of the current value notifies nobody. Every `subscribe` returns a
/// fresh key, so the same closure registered twice is simply two independent
/// registrations. Removing a key that is not registered is a precondition
/// violation and panics.
pub struct ObservableValue<T: Copy + PartialEq + 'static> {
    value: T,
    listeners: SlotMap<ListenerKey, Listener<T>>,
}

impl<T: Copy + PartialEq + 'static> ObservableValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: SlotMap::with_key(),
        }
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set(&mut self, value: T) {
        if value == self.value {
            return;
        }
        let old = self.value;
        self.value = value;
        for listener in self.listeners.values_mut() {
            listener(value, old);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(T, T) + 'static) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// # Panics
    ///
    /// Panics if `key` was not returned by `subscribe` on this value, or was
    /// already unsubscribed.
    pub fn unsubscribe(&mut self, key: ListenerKey) {
        assert!(
            self.listeners.remove(key).is_some(),
            "unsubscribe of a listener that is not registered"
        );
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: Copy + PartialEq + fmt::Debug + 'static> fmt::Debug for ObservableValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
