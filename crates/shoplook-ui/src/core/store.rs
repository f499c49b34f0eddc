//! Embed route state machine.
//!
//! # Design
//! - One reducer owns the looks fetch, the modal, and the usage gate.
//! - The usage gate only ever closes; a session that hit the limit stays there.
//! - Gateway calls are turned into reducer actions here so the view only spawns and dispatches.

use crate::core::fetch::{FetchAction, FetchState, FetchTicket};
use crate::core::modal::ModalState;
use crate::core::usage::UsageGate;
use crate::services::gateway::{LookSource, ProductSource};
use shoplook_models::{Look, Product};
use std::rc::Rc;
use yew::Reducible;

/// State behind the embed route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedState {
    /// Looks list fetch.
    pub looks: FetchState<Look>,
    /// Products modal.
    pub modal: ModalState,
    /// Free-plan limit reached; only the upsell message renders.
    pub limit_reached: bool,
}

/// Transitions of [`EmbedState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbedAction {
    /// Looks fetch lifecycle.
    Looks(FetchAction<Look>),
    /// Usage check completed.
    UsageChecked(UsageGate),
    /// Shopper picked a look.
    OpenLook {
        /// Canonical look id.
        look_id: String,
        /// Product ids of the look.
        product_ids: Vec<String>,
    },
    /// Shopper dismissed the products modal.
    CloseModal,
}

impl EmbedState {
    /// Apply an action in place. Returns whether the state changed.
    pub fn apply(&mut self, action: EmbedAction) -> bool {
        match action {
            EmbedAction::Looks(action) => self.looks.apply(action),
            EmbedAction::UsageChecked(gate) => {
                if !gate.limit_reached() || self.limit_reached {
                    return false;
                }
                self.limit_reached = true;
                self.modal = ModalState::closed();
                true
            }
            EmbedAction::OpenLook {
                look_id,
                product_ids,
            } => {
                if self.limit_reached {
                    return false;
                }
                self.modal = ModalState::open(look_id, product_ids);
                true
            }
            EmbedAction::CloseModal => {
                if self.modal == ModalState::closed() {
                    return false;
                }
                self.modal = ModalState::closed();
                true
            }
        }
    }
}

impl Reducible for EmbedState {
    type Action = EmbedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Fetch the looks of `shop` and package the outcome for `ticket`.
pub async fn settle_looks<S>(source: &S, shop: &str, ticket: FetchTicket) -> FetchAction<Look>
where
    S: LookSource + ?Sized,
{
    let result = source
        .fetch_looks(shop)
        .await
        .map_err(|err| err.to_string());
    FetchAction::Settle { ticket, result }
}

/// Fetch the products `ids` of `shop` and package the outcome for `ticket`.
///
/// A look without product references settles empty without a request.
pub async fn settle_products<S>(
    source: &S,
    shop: &str,
    ids: &[String],
    ticket: FetchTicket,
) -> FetchAction<Product>
where
    S: ProductSource + ?Sized,
{
    if ids.is_empty() {
        return FetchAction::Settle {
            ticket,
            result: Ok(Vec::new()),
        };
    }
    let result = source
        .fetch_products(shop, ids)
        .await
        .map_err(|err| err.to_string());
    FetchAction::Settle { ticket, result }
}
