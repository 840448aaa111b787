use crate::card::{self, ProjectCard};
use crate::constants::{LOAD_FAILED_MESSAGE, VIEW_LESS_LABEL, VIEW_MORE_LABEL};
use crate::error::Result;
use crate::github::{fetch_readme, RepoSource};
use crate::models::{LabelSet, RepositoryRecord};
use crate::tagger;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Lifecycle of the project list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// One row of the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Card(ProjectCard),
    Error(String),
}

/// The displayed list: one slot per repository of the current view.
///
/// Every render bumps the generation; cards carrying an older generation
/// belong to a replaced view and are refused.
#[derive(Debug, Default)]
pub struct ListContainer {
    generation: u64,
    slots: Vec<Option<ProjectCard>>,
    error: Option<String>,
}

impl ListContainer {
    fn reset(&mut self, len: usize) -> u64 {
        self.generation += 1;
        self.slots = vec![None; len];
        self.error = None;
        self.generation
    }

    fn show_error(&mut self, message: &str) {
        self.generation += 1;
        self.slots.clear();
        self.error = Some(message.to_string());
    }

    /// Put `card` at `index` if `generation` is still the current one
    pub fn place(&mut self, generation: u64, index: usize, card: ProjectCard) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(card);
                true
            }
            None => false,
        }
    }

    /// Slots still waiting for their card
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Rows in display order; cards still enriching are not shown yet
    pub fn rows(&self) -> Vec<ListRow> {
        if let Some(message) = &self.error {
            return vec![ListRow::Error(message.clone())];
        }
        self.slots
            .iter()
            .flatten()
            .cloned()
            .map(ListRow::Card)
            .collect()
    }
}

fn lock(container: &Mutex<ListContainer>) -> MutexGuard<'_, ListContainer> {
    container.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Fetch a repository's README, extract its tags and build its card.
/// A missing README is not an error: the card falls back to metadata tags.
pub async fn enrich<S: RepoSource + ?Sized>(source: &S, repo: &RepositoryRecord) -> ProjectCard {
    let labels = match fetch_readme(source, &repo.name).await {
        Ok(text) => tagger::extract(&text),
        Err(e) => {
            debug!(repo = %repo.name, error = %e, "enrichment unavailable, using fallback tags");
            LabelSet::new()
        }
    };
    card::render(repo, labels)
}

/// Pending enrichment of one view of the list.
///
/// Cards are placed at their index as they complete, so completion order
/// never changes display order.
pub struct RenderJob<S: ?Sized> {
    source: Arc<S>,
    container: Arc<Mutex<ListContainer>>,
    generation: u64,
    records: Vec<RepositoryRecord>,
}

impl<S: RepoSource + ?Sized> RenderJob<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enrich every record concurrently; returns the number of cards placed
    pub async fn run(self) -> usize {
        let source = self.source.as_ref();
        let mut pending: FuturesUnordered<_> = self
            .records
            .iter()
            .enumerate()
            .map(|(index, repo)| async move { (index, enrich(source, repo).await) })
            .collect();

        let mut placed = 0;
        while let Some((index, card)) = pending.next().await {
            if lock(&self.container).place(self.generation, index, card) {
                placed += 1;
            } else {
                debug!(index, generation = self.generation, "discarding card for a replaced view");
            }
        }
        placed
    }
}

/// Controller for the project list: owns the fetched collection and which
/// view of it is on display.
pub struct ProjectList<S: ?Sized> {
    source: Arc<S>,
    visible: usize,
    state: ListState,
    collection: Vec<RepositoryRecord>,
    showing_all: bool,
    container: Arc<Mutex<ListContainer>>,
}

impl<S: RepoSource + ?Sized> ProjectList<S> {
    /// `visible` is the size of the collapsed view
    pub fn new(source: Arc<S>, visible: usize) -> Self {
        Self {
            source,
            visible,
            state: ListState::Idle,
            collection: Vec::new(),
            showing_all: false,
            container: Arc::new(Mutex::new(ListContainer::default())),
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn is_showing_all(&self) -> bool {
        self.showing_all
    }

    /// Everything the listing returned, in delivery order
    pub fn collection(&self) -> &[RepositoryRecord] {
        &self.collection
    }

    /// Fetch the listing and render the collapsed view.
    ///
    /// Only the first call does anything. On failure the list shows a single
    /// error row and the toggle stays hidden.
    pub async fn load(&mut self) -> Result<()> {
        if self.state != ListState::Idle {
            return Ok(());
        }
        self.state = ListState::Loading;

        match self.source.list_repositories().await {
            Ok(repos) => {
                info!(count = repos.len(), "project list loaded");
                self.collection = repos;
                self.showing_all = false;
                self.state = ListState::Loaded;
                self.render().await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to load projects");
                self.state = ListState::LoadFailed;
                lock(&self.container).show_error(LOAD_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Records of the view currently on display
    pub fn view(&self) -> &[RepositoryRecord] {
        if self.state != ListState::Loaded {
            return &[];
        }
        if self.showing_all {
            &self.collection
        } else {
            &self.collection[..self.collection.len().min(self.visible)]
        }
    }

    /// The toggle is only offered when there is more than the collapsed view
    pub fn toggle_visible(&self) -> bool {
        self.state == ListState::Loaded && self.collection.len() > self.visible
    }

    /// Label of the toggle, if it is shown
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.toggle_visible() {
            return None;
        }
        Some(if self.showing_all {
            VIEW_LESS_LABEL
        } else {
            VIEW_MORE_LABEL
        })
    }

    /// Switch between the collapsed and the full view.
    ///
    /// The list is cleared immediately; the returned job fills it in.
    /// Returns `None` when the toggle is not shown.
    pub fn toggle(&mut self) -> Option<RenderJob<S>> {
        if !self.toggle_visible() {
            return None;
        }
        self.showing_all = !self.showing_all;
        Some(self.begin_render())
    }

    /// Clear the list and prepare enrichment of the current view
    pub fn begin_render(&self) -> RenderJob<S> {
        let records = self.view().to_vec();
        let generation = lock(&self.container).reset(records.len());
        RenderJob {
            source: Arc::clone(&self.source),
            container: Arc::clone(&self.container),
            generation,
            records,
        }
    }

    /// Rebuild the list from the current view and wait for every card
    pub async fn render(&self) -> usize {
        self.begin_render().run().await
    }

    /// Rows currently on display
    pub fn rows(&self) -> Vec<ListRow> {
        lock(&self.container).rows()
    }

    /// Cards currently on display
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.rows()
            .into_iter()
            .filter_map(|row| match row {
                ListRow::Card(card) => Some(card),
                ListRow::Error(_) => None,
            })
            .collect()
    }

    pub fn pending(&self) -> usize {
        lock(&self.container).pending()
    }
}
