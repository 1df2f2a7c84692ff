use std::sync::{Arc, RwLock};

use souk_core::{DomainError, DomainResult, VendorId};

/// A persisted record with a typed primary id.
pub trait Document: Clone + Send + Sync + 'static {
    type Id: Copy + PartialEq + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

/// Owner-scoped document store.
///
/// All lookups and mutations are filtered by `(owner, id)`. A caller can never
/// reach another vendor's document, even with a known id: a foreign id behaves
/// exactly like a nonexistent one.
pub trait OwnedStore<T: Document>: Send + Sync {
    /// Insert a document under `owner`. A write that cannot reach the backend
    /// is an error, never a silent drop.
    fn insert(&self, owner: VendorId, doc: T) -> DomainResult<()>;

    fn get(&self, owner: VendorId, id: T::Id) -> Option<T>;

    /// Documents for `owner` in insertion order, skipping the first `skip`
    /// and returning at most `limit`.
    fn list(&self, owner: VendorId, skip: usize, limit: usize) -> Vec<T>;

    /// Atomic find-and-update: locate by `(owner, id)`, apply `mutate`, and
    /// return the updated document, all under one write lock. Never a
    /// separate read-then-write. `Ok(None)` means no document matched.
    fn find_and_update(
        &self,
        owner: VendorId,
        id: T::Id,
        mutate: &dyn Fn(&mut T),
    ) -> DomainResult<Option<T>>;

    /// Atomic find-and-delete filtered by `(owner, id)`; returns the removed
    /// document, `Ok(None)` if nothing matched.
    fn find_and_delete(&self, owner: VendorId, id: T::Id) -> DomainResult<Option<T>>;
}

impl<T, S> OwnedStore<T> for Arc<S>
where
    T: Document,
    S: OwnedStore<T> + ?Sized,
{
    fn insert(&self, owner: VendorId, doc: T) -> DomainResult<()> {
        (**self).insert(owner, doc)
    }

    fn get(&self, owner: VendorId, id: T::Id) -> Option<T> {
        (**self).get(owner, id)
    }

    fn list(&self, owner: VendorId, skip: usize, limit: usize) -> Vec<T> {
        (**self).list(owner, skip, limit)
    }

    fn find_and_update(
        &self,
        owner: VendorId,
        id: T::Id,
        mutate: &dyn Fn(&mut T),
    ) -> DomainResult<Option<T>> {
        (**self).find_and_update(owner, id, mutate)
    }

    fn find_and_delete(&self, owner: VendorId, id: T::Id) -> DomainResult<Option<T>> {
        (**self).find_and_delete(owner, id)
    }
}

/// In-memory owner-scoped store for tests/dev.
///
/// Backed by a `Vec` so listing preserves insertion order.
#[derive(Debug)]
pub struct InMemoryOwnedStore<T> {
    inner: RwLock<Vec<(VendorId, T)>>,
}

impl<T> InMemoryOwnedStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryOwnedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::internal("store lock poisoned")
}

impl<T: Document> OwnedStore<T> for InMemoryOwnedStore<T> {
    fn insert(&self, owner: VendorId, doc: T) -> DomainResult<()> {
        let mut docs = self.inner.write().map_err(|_| poisoned())?;
        docs.push((owner, doc));
        Ok(())
    }

    fn get(&self, owner: VendorId, id: T::Id) -> Option<T> {
        let docs = self.inner.read().ok()?;
        docs.iter()
            .find(|(o, d)| *o == owner && d.id() == id)
            .map(|(_, d)| d.clone())
    }

    fn list(&self, owner: VendorId, skip: usize, limit: usize) -> Vec<T> {
        let docs = match self.inner.read() {
            Ok(d) => d,
            Err(_) => return vec![],
        };

        docs.iter()
            .filter(|(o, _)| *o == owner)
            .skip(skip)
            .take(limit)
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn find_and_update(
        &self,
        owner: VendorId,
        id: T::Id,
        mutate: &dyn Fn(&mut T),
    ) -> DomainResult<Option<T>> {
        let mut docs = self.inner.write().map_err(|_| poisoned())?;
        let Some((_, doc)) = docs.iter_mut().find(|(o, d)| *o == owner && d.id() == id) else {
            return Ok(None);
        };
        mutate(doc);
        Ok(Some(doc.clone()))
    }

    fn find_and_delete(&self, owner: VendorId, id: T::Id) -> DomainResult<Option<T>> {
        let mut docs = self.inner.write().map_err(|_| poisoned())?;
        let Some(pos) = docs.iter().position(|(o, d)| *o == owner && d.id() == id) else {
            return Ok(None);
        };
        Ok(Some(docs.remove(pos).1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use souk_core::ProductId;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: ProductId,
        body: String,
    }

    impl Document for Note {
        type Id = ProductId;

        fn id(&self) -> ProductId {
            self.id
        }
    }

    fn note(body: &str) -> Note {
        Note {
            id: ProductId::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn get_is_scoped_to_owner() {
        let store = InMemoryOwnedStore::new();
        let v1 = VendorId::new();
        let v2 = VendorId::new();

        let doc = note("mine");
        store.insert(v1, doc.clone()).unwrap();

        assert_eq!(store.get(v1, doc.id), Some(doc.clone()));
        // Same id, different owner: behaves like a nonexistent id.
        assert_eq!(store.get(v2, doc.id), None);
    }

    #[test]
    fn list_preserves_insertion_order_and_paginates() {
        let store = InMemoryOwnedStore::new();
        let v1 = VendorId::new();
        let v2 = VendorId::new();

        for i in 0..5 {
            store.insert(v1, note(&format!("v1-{i}"))).unwrap();
            store.insert(v2, note(&format!("v2-{i}"))).unwrap();
        }

        let all = store.list(v1, 0, usize::MAX);
        assert_eq!(all.len(), 5);
        let bodies: Vec<_> = all.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["v1-0", "v1-1", "v1-2", "v1-3", "v1-4"]);

        let page = store.list(v1, 2, 2);
        let bodies: Vec<_> = page.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["v1-2", "v1-3"]);
    }

    #[test]
    fn find_and_update_mutates_only_the_owners_document() {
        let store = InMemoryOwnedStore::new();
        let v1 = VendorId::new();
        let v2 = VendorId::new();

        let doc = note("original");
        store.insert(v1, doc.clone()).unwrap();

        assert!(
            store
                .find_and_update(v2, doc.id, &|n| n.body = "hijacked".to_string())
                .unwrap()
                .is_none()
        );
        assert_eq!(store.get(v1, doc.id).unwrap().body, "original");

        let updated = store
            .find_and_update(v1, doc.id, &|n| n.body = "edited".to_string())
            .unwrap()
            .unwrap();
        assert_eq!(updated.body, "edited");
        assert_eq!(store.get(v1, doc.id).unwrap().body, "edited");
    }

    #[test]
    fn find_and_delete_is_scoped_and_permanent() {
        let store = InMemoryOwnedStore::new();
        let v1 = VendorId::new();
        let v2 = VendorId::new();

        let doc = note("target");
        store.insert(v1, doc.clone()).unwrap();

        assert!(store.find_and_delete(v2, doc.id).unwrap().is_none());
        assert!(store.get(v1, doc.id).is_some());

        let removed = store.find_and_delete(v1, doc.id).unwrap().unwrap();
        assert_eq!(removed.id, doc.id);
        assert!(store.get(v1, doc.id).is_none());
        assert!(store.find_and_delete(v1, doc.id).unwrap().is_none());
    }

    #[test]
    fn poisoned_lock_fails_writes_instead_of_dropping_them() {
        let store = Arc::new(InMemoryOwnedStore::new());
        let v1 = VendorId::new();
        let doc = note("first");
        store.insert(v1, doc.clone()).unwrap();

        // Panic inside a mutation while holding the write lock to poison it.
        let poisoner = Arc::clone(&store);
        let id = doc.id;
        let _ = std::thread::spawn(move || {
            let _ = poisoner.find_and_update(v1, id, &|_| panic!("boom"));
        })
        .join();

        assert!(matches!(
            store.insert(v1, note("second")),
            Err(DomainError::Internal(_))
        ));
        assert!(matches!(
            store.find_and_update(v1, id, &|n| n.body = "edited".to_string()),
            Err(DomainError::Internal(_))
        ));
        assert!(matches!(
            store.find_and_delete(v1, id),
            Err(DomainError::Internal(_))
        ));
    }
}
