// ABOUTME: Generic view-state manager shared by every CMS resource
// ABOUTME: Holds the fetched collection, navigation mode and focused record, and reconciles CRUD results locally

use cms_core::Identified;
use tracing::{debug, info, warn};

use crate::api::ResourceApi;
use crate::confirm::Confirm;
use crate::error::{ManagerError, ManagerResult};
use crate::view::{Focus, ViewMode, ViewSupport};

/// Result of a delete request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent
    Cancelled,
}

/// View-state for one resource.
///
/// Successful mutations patch the local collection instead of refetching:
/// creates are prepended, updates replace by id, deletes filter by id.
/// Failures are recorded as a display string in `error()` and returned to
/// the caller. A failed refresh keeps the previously loaded collection.
pub struct ResourceManager<A: ResourceApi> {
    api: A,
    records: Vec<A::Record>,
    view: ViewMode,
    focus: Focus<A::Record>,
    is_loading: bool,
    error: Option<String>,
}

impl<A: ResourceApi> ResourceManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            records: Vec::new(),
            view: ViewMode::List,
            focus: Focus::None,
            is_loading: false,
            error: None,
        }
    }

    /// Build a manager in list view and load its collection
    pub async fn open(api: A) -> Self {
        let mut manager = Self::new(api);
        if let Err(e) = manager.refresh().await {
            debug!("Initial {} load failed: {}", manager.api.resource_name(), e);
        }
        manager
    }

    fn fail(&mut self, action: &str, error: impl Into<ManagerError>) -> ManagerError {
        let error = error.into();
        warn!(
            "Failed to {} {}: {}",
            action,
            self.api.resource_name(),
            error
        );
        self.error = Some(error.to_string());
        error
    }

    /// Replace the collection with a fresh copy from the API
    pub async fn refresh(&mut self) -> ManagerResult<()> {
        self.is_loading = true;
        self.error = None;

        let result = self.api.list().await;
        self.is_loading = false;

        match result {
            Ok(records) => {
                debug!("Loaded {} {} records", records.len(), self.api.resource_name());
                self.records = records;
                Ok(())
            }
            Err(e) => Err(self.fail("load", e)),
        }
    }

    /// Create a record; on success it is placed first and the list view is shown
    pub async fn create(&mut self, data: &A::Create) -> ManagerResult<A::Record> {
        self.is_loading = true;
        self.error = None;

        let result = self.api.create(data).await;
        self.is_loading = false;

        match result {
            Ok(record) => {
                info!("Created {} {}", self.api.resource_name(), record.id());
                self.records.insert(0, record.clone());
                self.view = ViewMode::List;
                self.focus = Focus::None;
                Ok(record)
            }
            Err(e) => Err(self.fail("create", e)),
        }
    }

    /// Update a record in place; on success the edit slot is cleared and the list view shown
    pub async fn update(&mut self, id: i64, data: &A::Update) -> ManagerResult<A::Record> {
        self.is_loading = true;
        self.error = None;

        let result = self.api.update(id, data).await;
        self.is_loading = false;

        match result {
            Ok(record) => {
                info!("Updated {} {}", self.api.resource_name(), id);
                for existing in self.records.iter_mut().filter(|r| r.id() == id) {
                    *existing = record.clone();
                }
                self.focus = match std::mem::take(&mut self.focus) {
                    Focus::Viewing(viewed) if viewed.id() == id => Focus::Viewing(record.clone()),
                    Focus::Editing(_) => Focus::None,
                    other => other,
                };
                self.view = ViewMode::List;
                Ok(record)
            }
            Err(e) => Err(self.fail("update", e)),
        }
    }

    /// Delete a record after the user confirms.
    ///
    /// Ids not present in the collection are rejected without asking or
    /// sending anything. Deleting the focused record clears the focus and,
    /// from the edit or detail view, returns to the list.
    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> ManagerResult<DeleteOutcome> {
        let resource = self.api.resource_name();

        if !self.records.iter().any(|r| r.id() == id) {
            return Err(self.fail("delete", ManagerError::NotFound { resource, id }));
        }

        if !confirm.confirm(&format!("Are you sure you want to delete this {}?", resource)) {
            debug!("Delete of {} {} cancelled", resource, id);
            return Ok(DeleteOutcome::Cancelled);
        }

        self.is_loading = true;
        self.error = None;

        let result = self.api.delete(id).await;
        self.is_loading = false;

        if let Err(e) = result {
            return Err(self.fail("delete", e));
        }

        info!("Deleted {} {}", resource, id);
        self.records.retain(|r| r.id() != id);
        if self.focus.refers_to(id) {
            self.focus = Focus::None;
            if matches!(self.view, ViewMode::Edit | ViewMode::Detail) {
                self.view = ViewMode::List;
            }
        }
        Ok(DeleteOutcome::Deleted)
    }

    pub fn go_to_list(&mut self) {
        self.navigate(ViewMode::List, Focus::None);
    }

    pub fn go_to_create(&mut self) {
        self.navigate(ViewMode::Create, Focus::None);
    }

    pub fn go_to_edit(&mut self, record: A::Record) {
        self.navigate(ViewMode::Edit, Focus::Editing(record));
    }

    /// Returns false, leaving state untouched, when the resource has no detail view
    pub fn go_to_detail(&mut self, record: A::Record) -> bool {
        if !self.views().detail {
            return false;
        }
        self.navigate(ViewMode::Detail, Focus::Viewing(record));
        true
    }

    /// Returns false, leaving state untouched, when the resource has no documentation view
    pub fn go_to_documentation(&mut self) -> bool {
        if !self.views().documentation {
            return false;
        }
        self.navigate(ViewMode::Documentation, Focus::None);
        true
    }

    /// Switch mode without touching the focused record
    pub fn set_view(&mut self, mode: ViewMode) -> bool {
        if !self.views().supports(mode) {
            return false;
        }
        self.view = mode;
        true
    }

    fn navigate(&mut self, mode: ViewMode, focus: Focus<A::Record>) {
        debug!("{} view: {} -> {}", self.api.resource_name(), self.view, mode);
        self.view = mode;
        self.focus = focus;
        self.error = None;
    }

    /// Focus a record for viewing without changing the mode
    pub fn select(&mut self, record: A::Record) {
        self.focus = Focus::Viewing(record);
    }

    /// Set or clear the record being edited without changing the mode
    pub fn set_editing(&mut self, record: Option<A::Record>) {
        self.focus = match record {
            Some(record) => Focus::Editing(record),
            None => match std::mem::take(&mut self.focus) {
                Focus::Editing(_) => Focus::None,
                other => other,
            },
        };
    }

    pub fn records(&self) -> &[A::Record] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&A::Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn views(&self) -> ViewSupport {
        self.api.views()
    }

    pub fn focus(&self) -> &Focus<A::Record> {
        &self.focus
    }

    pub fn selected(&self) -> Option<&A::Record> {
        self.focus.viewing()
    }

    pub fn editing(&self) -> Option<&A::Record> {
        self.focus.editing()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cms_core::{ApiError, ApiResult, Identified};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        title: String,
    }

    impl Identified for Note {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn note(id: i64, title: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
        }
    }

    /// In-memory backend that can be switched into a failing mode
    #[derive(Default)]
    struct FakeApi {
        rows: Mutex<Vec<Note>>,
        next_id: Mutex<i64>,
        failing: Mutex<Option<ApiError>>,
        calls: AtomicUsize,
        views: Option<ViewSupport>,
    }

    impl FakeApi {
        fn with_rows(rows: Vec<Note>) -> Self {
            let next = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            Self {
                rows: Mutex::new(rows),
                next_id: Mutex::new(next),
                ..Default::default()
            }
        }

        fn fail_with(&self, error: ApiError) {
            *self.failing.lock().unwrap() = Some(error);
        }

        fn recover(&self) {
            *self.failing.lock().unwrap() = None;
        }

        fn check(&self) -> ApiResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.failing.lock().unwrap().clone() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ResourceApi for FakeApi {
        type Record = Note;
        type Create = String;
        type Update = String;

        fn resource_name(&self) -> &'static str {
            "note"
        }

        fn views(&self) -> ViewSupport {
            self.views.unwrap_or_default()
        }

        async fn list(&self) -> ApiResult<Vec<Note>> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, title: &String) -> ApiResult<Note> {
            self.check()?;
            let mut next = self.next_id.lock().unwrap();
            let created = note(*next, title);
            *next += 1;
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: i64, title: &String) -> ApiResult<Note> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ApiError::http(404, "Note not found"))?;
            row.title = title.clone();
            Ok(row.clone())
        }

        async fn delete(&self, id: i64) -> ApiResult<()> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(ApiError::http(404, "Note not found"));
            }
            Ok(())
        }
    }

    fn accept(_: &str) -> bool {
        true
    }

    fn decline(_: &str) -> bool {
        false
    }

    async fn loaded(rows: Vec<Note>) -> ResourceManager<FakeApi> {
        let manager = ResourceManager::open(FakeApi::with_rows(rows)).await;
        assert_eq!(manager.view(), ViewMode::List);
        assert!(manager.error().is_none());
        manager
    }

    #[tokio::test]
    async fn test_create_prepends_and_returns_to_list() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b")]).await;
        manager.go_to_create();

        let created = manager.create(&"c".to_string()).await.unwrap();

        assert_eq!(manager.records().len(), 3);
        assert_eq!(manager.records()[0], created);
        assert_eq!(manager.view(), ViewMode::List);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form_open() {
        let mut manager = loaded(vec![note(1, "a")]).await;
        manager.go_to_create();
        manager.api().fail_with(ApiError::http(400, "title should not be empty"));

        let error = manager.create(&String::new()).await.unwrap_err();

        assert_eq!(error.to_string(), "title should not be empty");
        assert_eq!(manager.error(), Some("title should not be empty"));
        assert_eq!(manager.view(), ViewMode::Create);
        assert_eq!(manager.records().len(), 1);
        assert!(!manager.is_loading());
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_record() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b"), note(3, "c")]).await;
        manager.go_to_edit(note(2, "b"));

        manager.update(2, &"B".to_string()).await.unwrap();

        assert_eq!(
            manager.records(),
            &[note(1, "a"), note(2, "B"), note(3, "c")]
        );
        assert_eq!(manager.view(), ViewMode::List);
        assert!(manager.editing().is_none());
    }

    #[tokio::test]
    async fn test_failed_update_keeps_edit_state() {
        let mut manager = loaded(vec![note(1, "a")]).await;
        manager.go_to_edit(note(1, "a"));
        manager.api().fail_with(ApiError::network("connection reset"));

        assert!(manager.update(1, &"x".to_string()).await.is_err());

        assert_eq!(manager.view(), ViewMode::Edit);
        assert_eq!(manager.editing(), Some(&note(1, "a")));
        assert_eq!(manager.records(), &[note(1, "a")]);
    }

    #[tokio::test]
    async fn test_delete_scenario_and_repeat() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b")]).await;

        let outcome = manager.delete(1, &accept).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(manager.records(), &[note(2, "b")]);

        let calls = manager.api().calls.load(Ordering::SeqCst);
        let error = manager.delete(1, &accept).await.unwrap_err();
        assert_eq!(
            error,
            ManagerError::NotFound {
                resource: "note",
                id: 1
            }
        );
        assert!(manager.error().is_some());
        assert_eq!(manager.records(), &[note(2, "b")]);
        assert_eq!(manager.api().calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_delete_focused_record_clears_focus() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b")]).await;

        manager.go_to_detail(note(1, "a"));
        manager.delete(1, &accept).await.unwrap();
        assert!(manager.focus().is_none());
        assert_eq!(manager.view(), ViewMode::List);

        manager.go_to_edit(note(2, "b"));
        manager.delete(2, &accept).await.unwrap();
        assert!(manager.editing().is_none());
        assert!(manager.records().is_empty());
    }

    #[tokio::test]
    async fn test_delete_other_record_keeps_focus() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b")]).await;
        manager.go_to_detail(note(1, "a"));

        manager.delete(2, &accept).await.unwrap();

        assert_eq!(manager.selected(), Some(&note(1, "a")));
        assert_eq!(manager.view(), ViewMode::Detail);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let mut manager = loaded(vec![note(1, "a")]).await;
        let calls = manager.api().calls.load(Ordering::SeqCst);

        let outcome = manager.delete(1, &decline).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.api().calls.load(Ordering::SeqCst), calls);
        assert!(manager.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_records() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b")]).await;
        manager.api().fail_with(ApiError::http(500, "HTTP error! status: 500"));

        assert!(manager.refresh().await.is_err());

        assert_eq!(manager.records(), &[note(1, "a"), note(2, "b")]);
        assert_eq!(manager.error(), Some("HTTP error! status: 500"));
        assert!(!manager.is_loading());

        manager.api().recover();
        manager.refresh().await.unwrap();
        assert!(manager.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_open_starts_empty_with_error() {
        let api = FakeApi::with_rows(vec![note(1, "a")]);
        api.fail_with(ApiError::network("offline"));

        let manager = ResourceManager::open(api).await;

        assert!(manager.records().is_empty());
        assert_eq!(manager.error(), Some("Network error: offline"));
    }

    #[tokio::test]
    async fn test_edit_then_list_clears_editing_without_mutation() {
        let mut manager = loaded(vec![note(1, "a")]).await;

        manager.go_to_edit(note(1, "a"));
        assert_eq!(manager.editing(), Some(&note(1, "a")));
        manager.go_to_list();

        assert!(manager.editing().is_none());
        assert_eq!(manager.records(), &[note(1, "a")]);
    }

    #[tokio::test]
    async fn test_navigation_clears_error_and_respects_views() {
        let api = FakeApi {
            views: Some(ViewSupport {
                detail: false,
                documentation: false,
            }),
            ..FakeApi::with_rows(vec![note(1, "a")])
        };
        let mut manager = ResourceManager::open(api).await;
        manager.api().fail_with(ApiError::network("offline"));
        let _ = manager.refresh().await;
        assert!(manager.error().is_some());

        assert!(!manager.go_to_detail(note(1, "a")));
        assert!(manager.error().is_some());
        assert!(!manager.go_to_documentation());
        assert!(!manager.set_view(ViewMode::Detail));

        manager.go_to_create();
        assert_eq!(manager.view(), ViewMode::Create);
        assert!(manager.error().is_none());
    }

    #[tokio::test]
    async fn test_select_and_set_editing_swap_focus() {
        let mut manager = loaded(vec![note(1, "a"), note(2, "b")]).await;

        manager.select(note(1, "a"));
        assert_eq!(manager.selected(), Some(&note(1, "a")));

        manager.set_editing(Some(note(2, "b")));
        assert!(manager.selected().is_none());
        assert_eq!(manager.editing(), Some(&note(2, "b")));

        manager.set_editing(None);
        assert!(manager.focus().is_none());
        assert_eq!(manager.view(), ViewMode::List);
    }
}
