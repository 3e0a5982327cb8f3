//! In-memory document store.
//!
//! Each collection sits behind one `RwLock`, which makes every single
//! insert or update atomic the way a document database would.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use filekeep_core::error::AppError;
use filekeep_core::result::AppResult;
use filekeep_core::types::{ObjectId, PageRequest, ParentId};
use filekeep_entity::file::{CreateFile, File};
use filekeep_entity::user::{CreateUser, User};

use crate::store::{FileStore, UserStore};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict(format!(
                "A user with email '{}' already exists",
                user.email
            )));
        }
        let user = user.into_user(ObjectId::new());
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}

/// Files keyed by id; `BTreeMap` order is creation order.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RwLock<BTreeMap<ObjectId, File>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<File>> {
        Ok(self.files.read().await.get(id).cloned())
    }

    async fn find_owned(&self, id: &ObjectId, owner: &ObjectId) -> AppResult<Option<File>> {
        let files = self.files.read().await;
        Ok(files.get(id).filter(|f| f.is_owned_by(owner)).cloned())
    }

    async fn insert(&self, file: CreateFile) -> AppResult<File> {
        let file = file.into_file(ObjectId::new());
        self.files.write().await.insert(file.id, file.clone());
        Ok(file)
    }

    async fn set_public(
        &self,
        id: &ObjectId,
        owner: &ObjectId,
        is_public: bool,
    ) -> AppResult<Option<File>> {
        let mut files = self.files.write().await;
        Ok(files
            .get_mut(id)
            .filter(|f| f.is_owned_by(owner))
            .map(|f| {
                f.is_public = is_public;
                f.clone()
            }))
    }

    async fn find_children(
        &self,
        owner: &ObjectId,
        parent: &ParentId,
        page: PageRequest,
    ) -> AppResult<Vec<File>> {
        let files = self.files.read().await;
        Ok(files
            .values()
            .rev()
            .filter(|f| f.is_owned_by(owner) && f.parent_id == *parent)
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.files.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filekeep_core::error::ErrorKind;
    use filekeep_core::types::PAGE_SIZE;
    use filekeep_entity::file::FileKind;

    fn create_user(email: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryUserStore::new();
        let user = store.insert(create_user("a@b.com")).await.unwrap();
        assert_eq!(
            store.find_by_email("a@b.com").await.unwrap().map(|u| u.id),
            Some(user.id)
        );

        let err = store.insert(create_user("a@b.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn children_are_paged_newest_first() {
        let store = MemoryFileStore::new();
        let owner = ObjectId::new();
        let other = ObjectId::new();

        let mut created = Vec::new();
        for i in 0..25 {
            let file = store
                .insert(CreateFile::folder(owner, format!("f{i}"), ParentId::Root, false))
                .await
                .unwrap();
            created.push(file.id);
        }
        store
            .insert(CreateFile::folder(other, "theirs".into(), ParentId::Root, false))
            .await
            .unwrap();

        let first = store
            .find_children(&owner, &ParentId::Root, PageRequest::new(0))
            .await
            .unwrap();
        let second = store
            .find_children(&owner, &ParentId::Root, PageRequest::new(1))
            .await
            .unwrap();

        assert_eq!(first.len(), PAGE_SIZE as usize);
        assert_eq!(second.len(), 5);
        assert_eq!(first[0].id, created[24]);
        assert_eq!(second[4].id, created[0]);
        assert!(first.iter().all(|f| !second.iter().any(|s| s.id == f.id)));
    }

    #[tokio::test]
    async fn set_public_requires_ownership() {
        let store = MemoryFileStore::new();
        let owner = ObjectId::new();
        let file = store
            .insert(
                CreateFile::with_content(
                    owner,
                    "a.txt".into(),
                    FileKind::File,
                    ParentId::Root,
                    false,
                    "/tmp/a".into(),
                )
                .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            store
                .set_public(&file.id, &ObjectId::new(), true)
                .await
                .unwrap()
                .is_none()
        );
        let updated = store.set_public(&file.id, &owner, true).await.unwrap();
        assert_eq!(updated.map(|f| f.is_public), Some(true));
        assert!(store.find_owned(&file.id, &ObjectId::new()).await.unwrap().is_none());
    }
}
