//! Observable value cell

use tokio::sync::watch;

/// A value that notifies subscribers whenever it is replaced.
///
/// Reads and writes go through `&self`, so a single `Store` can be shared by
/// concurrently running fetches.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Borrow the current value for the duration of `f`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Receiver that is marked changed on every `set`
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Observable<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_without_subscribers() {
        let cell = Observable::new(1);
        cell.set(2);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn test_subscriber_sees_change() {
        let cell = Observable::new(String::from("a"));
        let mut rx = cell.subscribe();
        assert!(!rx.has_changed().unwrap());

        cell.set(String::from("b"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "b");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let cell = std::sync::Arc::new(Observable::new(0u32));
        let mut rx = cell.subscribe();

        let writer = cell.clone();
        tokio::spawn(async move { writer.set(5) });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 5);
    }
}
