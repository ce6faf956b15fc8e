//! Session-scoped favorites.
//!
//! The registry is an ordinary value owned by whoever drives the session and
//! handed out by reference. Observers are called synchronously after each
//! toggle. When a [`FavoritesSaver`] is attached, every toggle also hands a
//! snapshot to the background saver without waiting for the write.

use crate::core::persistence::FavoritesSaver;
use crate::domain::model::FavoriteChange;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&FavoriteChange)>;

#[derive(Default)]
pub struct FavoritesRegistry {
    ids: BTreeSet<String>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    saver: Option<FavoritesSaver>,
}

impl FavoritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from favorites restored from a previous session.
    pub fn with_favorites<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn attach_saver(&mut self, saver: FavoritesSaver) {
        self.saver = Some(saver);
    }

    pub fn detach_saver(&mut self) -> Option<FavoritesSaver> {
        self.saver.take()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds `id` if absent, removes it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        let is_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        tracing::debug!("Favorite '{}' toggled, now favorite: {}", id, is_favorite);

        if let Some(saver) = &self.saver {
            if !saver.submit(self.snapshot()) {
                tracing::warn!("Favorites saver has stopped, change to '{}' was not saved", id);
            }
        }

        let change = FavoriteChange {
            id: id.to_string(),
            is_favorite,
        };
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }

        is_favorite
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&FavoriteChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn snapshot(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl std::fmt::Debug for FavoritesRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesRegistry")
            .field("ids", &self.ids)
            .field("observers", &self.observers.len())
            .field("saver", &self.saver.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut registry = FavoritesRegistry::new();

        assert!(!registry.contains("Chamonix"));
        assert!(registry.toggle("Chamonix"));
        assert!(registry.contains("Chamonix"));
        assert!(!registry.toggle("Chamonix"));
        assert!(!registry.contains("Chamonix"));
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut registry = FavoritesRegistry::with_favorites(["Zermatt"]);

        for id in ["Zermatt", "Whistler"] {
            let before = registry.contains(id);
            registry.toggle(id);
            registry.toggle(id);
            assert_eq!(registry.contains(id), before);
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_toggle_only_affects_given_id() {
        let mut registry = FavoritesRegistry::with_favorites(["Aspen", "Vail"]);
        registry.toggle("Aspen");

        assert!(!registry.contains("Aspen"));
        assert!(registry.contains("Vail"));
    }

    #[test]
    fn test_ids_are_sorted() {
        let registry = FavoritesRegistry::with_favorites(["Vail", "Aspen", "Niseko"]);
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["Aspen", "Niseko", "Vail"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_observers_are_notified_after_each_toggle() {
        let mut registry = FavoritesRegistry::new();
        let seen: Rc<RefCell<Vec<FavoriteChange>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        registry.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        registry.toggle("Chamonix");
        registry.toggle("Chamonix");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            FavoriteChange {
                id: "Chamonix".to_string(),
                is_favorite: true
            }
        );
        assert!(!seen[1].is_favorite);
    }

    #[test]
    fn test_observer_sees_updated_state_through_shared_flag() {
        let mut registry = FavoritesRegistry::new();
        let last = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last);
        registry.subscribe(move |change| *sink.borrow_mut() = Some(change.is_favorite));

        registry.toggle("Sölden");
        assert_eq!(*last.borrow(), Some(true));
        assert!(registry.contains("Sölden"));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut registry = FavoritesRegistry::new();
        let count = Rc::new(RefCell::new(0));

        let first = Rc::clone(&count);
        let subscription = registry.subscribe(move |_| *first.borrow_mut() += 1);
        let second = Rc::clone(&count);
        registry.subscribe(move |_| *second.borrow_mut() += 10);

        registry.toggle("Aspen");
        assert_eq!(*count.borrow(), 11);

        assert!(registry.unsubscribe(subscription));
        assert!(!registry.unsubscribe(subscription));

        registry.toggle("Aspen");
        assert_eq!(*count.borrow(), 21);
    }
}
