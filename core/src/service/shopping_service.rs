use crate::model::shopping::ShoppingItem;
use crate::repository::traits::ShoppingRepository;
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Checked items older than this are dropped on the next listing.
pub const RETENTION_HOURS: i64 = 24;

/// Shopping list with lazy expiry: there is no background sweeper, items
/// past the retention window are deleted as a side effect of listing.
pub struct ShoppingService<R: ShoppingRepository> {
    repo: R,
}

impl<R: ShoppingRepository> ShoppingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_items(&self) -> Result<Vec<ShoppingItem>> {
        self.list_items_at(Utc::now())
    }

    /// Active items as of `now`. Any item checked for longer than the
    /// retention window is permanently deleted before the list is returned.
    pub fn list_items_at(&self, now: DateTime<Utc>) -> Result<Vec<ShoppingItem>> {
        let mut active = Vec::new();
        for item in self.repo.list()? {
            if item.checked {
                if let Some(checked_at) = item.checked_at {
                    if now - checked_at > Duration::hours(RETENTION_HOURS) {
                        self.repo.delete(&item.id)?;
                        continue;
                    }
                }
            }
            active.push(item);
        }
        Ok(active)
    }

    pub fn add_item(&self, name: String) -> Result<ShoppingItem> {
        self.repo.create(ShoppingItem::new(name))
    }

    pub fn toggle_item(&self, id: &Uuid, checked: bool) -> Result<bool> {
        self.toggle_item_at(id, checked, Utc::now())
    }

    /// Sets the checked flag, stamping `checked_at` exactly when checking
    /// and clearing it when unchecking. Returns false for an unknown id.
    pub fn toggle_item_at(&self, id: &Uuid, checked: bool, now: DateTime<Utc>) -> Result<bool> {
        let Some(mut item) = self.repo.list()?.into_iter().find(|i| i.id == *id) else {
            return Ok(false);
        };
        item.checked = checked;
        item.checked_at = if checked { Some(now) } else { None };
        self.repo.update(&item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockShoppingRepo {
        items: RefCell<Vec<ShoppingItem>>,
    }

    impl MockShoppingRepo {
        fn new() -> Self {
            Self {
                items: RefCell::new(Vec::new()),
            }
        }
    }

    impl ShoppingRepository for MockShoppingRepo {
        fn create(&self, item: ShoppingItem) -> Result<ShoppingItem> {
            self.items.borrow_mut().push(item.clone());
            Ok(item)
        }
        fn list(&self) -> Result<Vec<ShoppingItem>> {
            Ok(self.items.borrow().clone())
        }
        fn update(&self, item: &ShoppingItem) -> Result<bool> {
            let mut items = self.items.borrow_mut();
            match items.iter().position(|i| i.id == item.id) {
                Some(pos) => {
                    items[pos] = item.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        fn delete(&self, id: &Uuid) -> Result<bool> {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|i| i.id != *id);
            Ok(items.len() < before)
        }
    }

    fn checked_item(service: &ShoppingService<MockShoppingRepo>, hours_ago: i64) -> Uuid {
        let now = Utc::now();
        let item = service.add_item(format!("item-{}h", hours_ago)).unwrap();
        service
            .toggle_item_at(&item.id, true, now - Duration::hours(hours_ago))
            .unwrap();
        item.id
    }

    #[test]
    fn test_recently_checked_item_survives_listing() {
        let service = ShoppingService::new(MockShoppingRepo::new());
        let id = checked_item(&service, 23);

        let items = service.list_items_at(Utc::now()).unwrap();
        assert!(items.iter().any(|i| i.id == id));
    }

    #[test]
    fn test_stale_checked_item_is_deleted_on_listing() {
        let service = ShoppingService::new(MockShoppingRepo::new());
        let id = checked_item(&service, 25);

        let items = service.list_items_at(Utc::now()).unwrap();
        assert!(!items.iter().any(|i| i.id == id));

        // Gone from the store too, not just filtered from the view.
        assert!(!service.repo.list().unwrap().iter().any(|i| i.id == id));
    }

    #[test]
    fn test_unchecked_item_never_expires() {
        let service = ShoppingService::new(MockShoppingRepo::new());
        let item = service.add_item("milk".to_string()).unwrap();

        let items = service
            .list_items_at(Utc::now() + Duration::days(30))
            .unwrap();
        assert!(items.iter().any(|i| i.id == item.id));
    }

    #[test]
    fn test_toggle_maintains_checked_at_invariant() {
        let service = ShoppingService::new(MockShoppingRepo::new());
        let item = service.add_item("eggs".to_string()).unwrap();
        let now = Utc::now();

        assert!(service.toggle_item_at(&item.id, true, now).unwrap());
        let checked = &service.list_items_at(now).unwrap()[0];
        assert!(checked.checked);
        assert_eq!(checked.checked_at, Some(now));

        assert!(service.toggle_item_at(&item.id, false, now).unwrap());
        let unchecked = &service.list_items_at(now).unwrap()[0];
        assert!(!unchecked.checked);
        assert!(unchecked.checked_at.is_none());
    }

    #[test]
    fn test_toggle_unknown_id_reports_false() {
        let service = ShoppingService::new(MockShoppingRepo::new());
        assert!(!service.toggle_item(&Uuid::new_v4(), true).unwrap());
    }
}
