//! Member listing and deletion

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainResult, Member, RepositoryProvider};
use crate::shared::{paginate, validate_page_size, Page, PageLink};

pub struct MemberService {
    repos: Arc<dyn RepositoryProvider>,
    page_size: u32,
}

impl MemberService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, page_size: u32) -> Self {
        Self {
            repos,
            page_size: validate_page_size(page_size),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Load every member and cut out page `page`.
    ///
    /// An empty result covers both an empty table and a page past the end.
    pub async fn list_page(&self, page: u32, link: &PageLink) -> DomainResult<Page<Member>> {
        let members = self.repos.members().find_all().await?;
        debug!(total = members.len(), page, page_size = self.page_size, "Paginating members");
        Ok(paginate(members, self.page_size, page, link))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.members().delete_by_id(id).await?;
        info!(member_id = id, "Member deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::repositories::member_repository::tests::seed_members;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn service_with(count: usize, page_size: u32) -> MemberService {
        let db = test_database().await;
        seed_members(&db, count).await;
        MemberService::new(Arc::new(SeaOrmRepositoryProvider::new(db)), page_size)
    }

    #[tokio::test]
    async fn second_page_of_twelve() {
        let service = service_with(12, 5).await;
        let page = service.list_page(2, &PageLink::new("/members")).await.unwrap();

        let ids: Vec<i32> = page.results.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.prev.as_deref(), Some("/members?page=1"));
        assert_eq!(page.next.as_deref(), Some("/members?page=3"));
    }

    #[tokio::test]
    async fn zero_page_size_is_raised_to_one() {
        let service = service_with(2, 0).await;
        assert_eq!(service.page_size(), 1);

        let page = service.list_page(1, &PageLink::new("/members")).await.unwrap();
        assert_eq!(page.results.len(), 1);
    }

    #[tokio::test]
    async fn delete_then_missing() {
        let service = service_with(1, 10).await;

        service.delete(1).await.unwrap();
        let err = service.delete(1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
