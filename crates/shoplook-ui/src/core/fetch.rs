//! Fetch lifecycle state and view-state selection.
//!
//! # Design
//! - Mirror the `{loading, success, failure}` shape produced by a data fetch.
//! - Select exactly one view per state in fixed priority: loading, error, items, empty.
//! - Tag every request with a ticket; only the latest ticket may settle the state.

use std::cell::Cell;
use std::rc::Rc;
use yew::Reducible;

/// Number of skeleton placeholders rendered while a fetch is in flight.
pub const PLACEHOLDER_COUNT: usize = 3;

/// Identifies one issued fetch request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Monotonic ticket source owned by the component that issues fetches.
#[derive(Debug, Default)]
pub struct TicketIssuer {
    last: Cell<u64>,
}

impl TicketIssuer {
    /// Issue a ticket newer than every previously issued one.
    #[must_use]
    pub fn issue(&self) -> FetchTicket {
        let next = self.last.get().saturating_add(1);
        self.last.set(next);
        FetchTicket(next)
    }
}

/// Failure branch of a fetch result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchFailure {
    /// Whether the last settled request failed.
    pub error: bool,
    /// Message shown verbatim to the shopper.
    pub message: String,
}

/// Tri-state fetch result for a list of `T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchState<T> {
    /// A request is in flight.
    pub loading: bool,
    /// Data from the last successful request.
    pub data: Vec<T>,
    /// Failure from the last settled request.
    pub failure: FetchFailure,
    latest: Option<FetchTicket>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: Vec::new(),
            failure: FetchFailure::default(),
            latest: None,
        }
    }
}

/// Which renderer a fetch state selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState<'a, T> {
    /// Show placeholders.
    Loading,
    /// Show the failure message and a retry affordance.
    Error {
        /// Message to display.
        message: &'a str,
    },
    /// Nothing to show.
    Empty,
    /// Render each element.
    Items(&'a [T]),
}

/// Renderer set consumed by [`FetchState::render_with`].
pub trait ViewRenderers<T> {
    /// Rendered output type.
    type Output;

    /// Placeholder output while loading.
    fn loading(&self, placeholders: usize) -> Self::Output;
    /// Failure output; implementations wire their own retry action.
    fn error(&self, message: &str) -> Self::Output;
    /// Output for a successful but empty result.
    fn empty(&self) -> Self::Output;
    /// Output for a non-empty result.
    fn items(&self, items: &[T]) -> Self::Output;
}

/// Transitions applied to a [`FetchState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchAction<T> {
    /// A request tagged with the ticket was issued.
    Begin(FetchTicket),
    /// A request completed.
    Settle {
        /// Ticket the request was issued with.
        ticket: FetchTicket,
        /// Items on success, display message on failure.
        result: Result<Vec<T>, String>,
    },
}

impl<T> FetchState<T> {
    /// Mark a request as in flight. Previous data and failure stay in place
    /// until the request settles.
    pub const fn begin(&mut self, ticket: FetchTicket) {
        self.loading = true;
        self.latest = Some(ticket);
    }

    /// Record the outcome of a request. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if self.latest != Some(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.failure = FetchFailure::default();
            }
            Err(message) => {
                self.failure = FetchFailure {
                    error: true,
                    message,
                };
            }
        }
        true
    }

    /// Apply an action in place. Returns whether the state changed.
    pub fn apply(&mut self, action: FetchAction<T>) -> bool {
        match action {
            FetchAction::Begin(ticket) => {
                self.begin(ticket);
                true
            }
            FetchAction::Settle { ticket, result } => self.settle(ticket, result),
        }
    }

    /// Select the single view this state renders as.
    #[must_use]
    pub fn select_view(&self) -> ViewState<'_, T> {
        if self.loading {
            ViewState::Loading
        } else if self.failure.error {
            ViewState::Error {
                message: &self.failure.message,
            }
        } else if self.data.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Items(&self.data)
        }
    }

    /// Invoke exactly one renderer for the current state.
    pub fn render_with<R: ViewRenderers<T>>(&self, renderers: &R) -> R::Output {
        match self.select_view() {
            ViewState::Loading => renderers.loading(PLACEHOLDER_COUNT),
            ViewState::Error { message } => renderers.error(message),
            ViewState::Empty => renderers.empty(),
            ViewState::Items(items) => renderers.items(items),
        }
    }
}

impl<T: Clone> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
