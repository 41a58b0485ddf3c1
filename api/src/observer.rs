//! A synchronous publish/subscribe registry.

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

/// Callbacks notified, in subscription order, of every event.
pub struct Observers<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Fn(&E)>)>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<E> Observers<E> {
    pub fn subscribe(&mut self, observer: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != len_before
    }

    pub fn notify(&self, event: &E) {
        for (_, observer) in &self.entries {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_order_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::<u32>::default();

        let a = {
            let seen = seen.clone();
            observers.subscribe(move |e| seen.borrow_mut().push(("a", *e)))
        };
        {
            let seen = seen.clone();
            observers.subscribe(move |e| seen.borrow_mut().push(("b", *e)));
        }

        observers.notify(&1);
        assert!(observers.unsubscribe(a));
        assert!(!observers.unsubscribe(a));
        observers.notify(&2);

        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 1), ("b", 2)]);
        assert_eq!(observers.len(), 1);
    }
}
