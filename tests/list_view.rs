use std::sync::Mutex;

use async_trait::async_trait;

use ticket_tracker::domain::ticket::{NewTicket, Ticket, TicketPatch, TicketStatus, UpdateTicket};
use ticket_tracker::domain::types::TicketId;
use ticket_tracker::dto::api::{Page, PageRequest};
use ticket_tracker::list::{FetchOutcome, ListView, SortOrder, SortSpec, StaleResponsePolicy};
use ticket_tracker::notifications::Notifications;
use ticket_tracker::repository::errors::{RepositoryError, RepositoryResult};
use ticket_tracker::repository::{Acknowledged, EntityReader, EntityWriter};
use ticket_tracker::services::entity::delete_entity;
use ticket_tracker::services::list::{complete_fetch, mount_list, select_page, sort_list};

/// In-memory ticket store sorting and paging like the backend does.
struct MemoryTickets {
    tickets: Mutex<Vec<Ticket>>,
}

impl MemoryTickets {
    fn new(count: i64) -> Self {
        let tickets = (1..=count)
            .map(|id| Ticket {
                id: TicketId::new(id).unwrap(),
                title: format!("{}", (b'a' + ((count - id) as u8 % 26)) as char),
                description: "Generated for list view scenarios".to_string(),
                creation_date: None,
                status: Some(TicketStatus::Open),
                category: None,
                priority: None,
                user: None,
            })
            .collect();
        Self {
            tickets: Mutex::new(tickets),
        }
    }

    fn page(&self, request: &PageRequest) -> Page<Ticket> {
        let mut tickets = self.tickets.lock().unwrap().clone();
        match request.sort.field.as_str() {
            "title" => tickets.sort_by(|a, b| a.title.cmp(&b.title)),
            _ => tickets.sort_by_key(|t| t.id),
        }
        if request.sort.order == SortOrder::Desc {
            tickets.reverse();
        }
        let total = tickets.len();
        let items = tickets
            .into_iter()
            .skip(request.page * request.size)
            .take(request.size)
            .collect();
        Page::new(items, total)
    }
}

#[async_trait]
impl EntityReader<Ticket> for MemoryTickets {
    async fn list(&self, request: &PageRequest) -> RepositoryResult<Page<Ticket>> {
        Ok(self.page(request))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Ticket>> {
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn get(&self, id: TicketId) -> RepositoryResult<Ticket> {
        self.tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl EntityWriter<Ticket> for MemoryTickets {
    async fn create(&self, _new: &NewTicket) -> RepositoryResult<Acknowledged<Ticket>> {
        Err(RepositoryError::InvalidRequest("read only".to_string()))
    }

    async fn update(&self, _update: &UpdateTicket) -> RepositoryResult<Acknowledged<Ticket>> {
        Err(RepositoryError::InvalidRequest("read only".to_string()))
    }

    async fn patch(
        &self,
        _id: TicketId,
        _patch: &TicketPatch,
    ) -> RepositoryResult<Acknowledged<Ticket>> {
        Err(RepositoryError::InvalidRequest("read only".to_string()))
    }

    async fn delete(&self, id: TicketId) -> RepositoryResult<Acknowledged<()>> {
        self.tickets.lock().unwrap().retain(|t| t.id != id);
        Ok(Acknowledged::silent(()))
    }
}

fn ids(view: &ListView<Ticket>) -> Vec<i64> {
    view.entities().iter().map(|t| t.id.get()).collect()
}

#[tokio::test]
async fn test_single_ticket_page() {
    let repo = MemoryTickets::new(1);
    let mut view: ListView<Ticket> = ListView::initialize("", 20, StaleResponsePolicy::Discard);
    let mut notifications = Notifications::default();

    mount_list(&repo, &mut view, "?page=1&sort=id,asc", &mut notifications).await;

    assert_eq!(ids(&view), vec![1]);
    assert_eq!(view.total_items(), 1);
    assert!(!view.is_loading());
}

#[tokio::test]
async fn test_sorting_twice_restores_order() {
    let repo = MemoryTickets::new(5);
    let mut view: ListView<Ticket> = ListView::initialize("", 20, StaleResponsePolicy::Discard);
    let mut notifications = Notifications::default();
    mount_list(&repo, &mut view, "", &mut notifications).await;
    let original = ids(&view);

    sort_list(&repo, &mut view, "id", &mut notifications).await;
    assert_eq!(ids(&view), vec![5, 4, 3, 2, 1]);
    sort_list(&repo, &mut view, "id", &mut notifications).await;

    assert_eq!(ids(&view), original);
    assert_eq!(view.location(), "page=1&sort=id,asc");
}

#[tokio::test]
async fn test_paging_stays_within_total() {
    let repo = MemoryTickets::new(45);
    let mut view: ListView<Ticket> = ListView::initialize("", 20, StaleResponsePolicy::Discard);
    let mut notifications = Notifications::default();
    mount_list(&repo, &mut view, "", &mut notifications).await;

    select_page(&repo, &mut view, 3, &mut notifications)
        .await
        .unwrap();
    assert_eq!(ids(&view), (41..=45).collect::<Vec<_>>());

    assert!(select_page(&repo, &mut view, 4, &mut notifications).await.is_err());
    assert!(select_page(&repo, &mut view, 0, &mut notifications).await.is_err());
    assert_eq!(view.pagination().active_page, 3);
    assert_eq!(view.location(), "page=3&sort=id,asc");
}

#[tokio::test]
async fn test_delete_refetch_decrements_total() {
    let repo = MemoryTickets::new(3);
    let mut view: ListView<Ticket> = ListView::initialize("", 20, StaleResponsePolicy::Discard);
    let mut notifications = Notifications::default();
    mount_list(&repo, &mut view, "", &mut notifications).await;
    let before = view.total_items();

    delete_entity(&repo, &mut view, TicketId::new(2).unwrap(), &mut notifications)
        .await
        .unwrap();

    assert_eq!(view.total_items(), before - 1);
    assert_eq!(ids(&view), vec![1, 3]);
}

#[tokio::test]
async fn test_deleting_only_row_of_last_page_moves_back() {
    let repo = MemoryTickets::new(41);
    let mut view: ListView<Ticket> = ListView::initialize("", 20, StaleResponsePolicy::Discard);
    let mut notifications = Notifications::default();
    mount_list(&repo, &mut view, "", &mut notifications).await;
    select_page(&repo, &mut view, 3, &mut notifications)
        .await
        .unwrap();
    assert_eq!(ids(&view), vec![41]);

    delete_entity(&repo, &mut view, TicketId::new(41).unwrap(), &mut notifications)
        .await
        .unwrap();

    assert_eq!(view.pagination().active_page, 2);
    assert_eq!(ids(&view), (21..=40).collect::<Vec<_>>());
    assert_eq!(view.location(), "page=2&sort=id,asc");
    let control = view.pagination_control();
    assert_eq!((control.first_item, control.last_item), (21, 40));
}

/// Two sorts issued back to back whose responses resolve in reverse order.
async fn rapid_sorts(policy: StaleResponsePolicy) -> ListView<Ticket> {
    let repo = MemoryTickets::new(4);
    let mut view: ListView<Ticket> = ListView::initialize("page=1&sort=id,asc", 20, policy);
    let mut notifications = Notifications::default();

    let by_title = view.change_sort("title");
    let by_date = view.change_sort("creationDate");
    assert_eq!(by_date.request.sort, SortSpec::ascending("creationDate"));

    let newer = repo.list(&by_date.request).await;
    let older = repo.list(&by_title.request).await;
    complete_fetch(&mut view, by_date.seq, newer, &mut notifications);
    let late = complete_fetch(&mut view, by_title.seq, older, &mut notifications);

    if policy == StaleResponsePolicy::Discard {
        assert!(matches!(late, FetchOutcome::Discarded));
    }
    view
}

#[tokio::test]
async fn test_rapid_sorts_keep_latest_issued_by_default() {
    let view = rapid_sorts(StaleResponsePolicy::Discard).await;

    // creationDate is unset everywhere, so the store falls back to id order
    assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    assert!(!view.is_loading());
}

#[tokio::test]
async fn test_rapid_sorts_last_response_wins_when_accepted() {
    let view = rapid_sorts(StaleResponsePolicy::Accept).await;

    // titles run backwards from the ids
    assert_eq!(ids(&view), vec![4, 3, 2, 1]);
}
