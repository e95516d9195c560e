//! The purchase state machine.

use super::error::VendingError;
use super::purchase::Purchase;
use crate::change::{ChangeResolver, CoinInventory};
use crate::config::PaymentPolicy;
use crate::core::{
    money, Coin, CoinCatalog, Session, StateTransition, Trigger, TransitionLog, VendingState,
    DEFAULT_HISTORY_LIMIT,
};
use crate::display::MessageSink;
use crate::shelf::{Shelf, ShelfRegistry};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Warning shown when change cannot be paid and the balance is refunded.
pub const NO_CHANGE_WARNING: &str = "No change!";

/// Drives one purchase at a time from selection to dispensing.
///
/// The machine owns the session state, the change resolver and the message
/// sink. Every operation runs to completion and either succeeds or returns a
/// [`VendingError`] with state, inventory and stock unchanged. A completed
/// `dispense` or `cancel` always leaves the machine `Idle`.
///
/// The machine has no internal locking. A concurrent host must hold one lock
/// around each whole operation.
///
/// # Example
///
/// ```rust
/// use coinbox::change::CoinInventory;
/// use coinbox::core::Coin;
/// use coinbox::display::RecordingDisplay;
/// use coinbox::machine::VendingMachine;
/// use coinbox::shelf::{Product, Shelf, Shelves};
///
/// let shelves = Shelves::new(vec![Shelf::new(
///     1,
///     Product::parse("cola drink", "2.40").unwrap(),
///     1,
/// )]);
/// let inventory = CoinInventory::from_counts([(Coin::TenCents, 1)]);
/// let mut machine = VendingMachine::new(shelves, inventory, RecordingDisplay::new());
///
/// machine.select_shelf(1).unwrap();
/// machine.insert_coin(Coin::TwoDollars).unwrap();
/// machine.insert_coin(Coin::FiftyCents).unwrap();
/// let purchase = machine.dispense().unwrap();
///
/// assert_eq!(purchase.product().map(|p| p.name()), Some("cola drink"));
/// assert_eq!(purchase.coins(), &[Coin::TenCents]);
/// assert!(machine.state().is_idle());
/// ```
pub struct VendingMachine<R: ShelfRegistry, D: MessageSink> {
    shelves: R,
    resolver: ChangeResolver,
    display: D,
    catalog: CoinCatalog,
    policy: PaymentPolicy,
    state: VendingState,
    history: TransitionLog,
}

impl<R: ShelfRegistry, D: MessageSink> VendingMachine<R, D> {
    /// Create an idle machine with the standard coin catalog and explicit
    /// dispensing.
    ///
    /// Shelf numbers in `shelves` must be unique. Only the first shelf with a
    /// repeated number is reachable; [`VendingMachineBuilder`] rejects such
    /// registries with `BuildError::DuplicateShelf`.
    ///
    /// [`VendingMachineBuilder`]: crate::builder::VendingMachineBuilder
    pub fn new(shelves: R, inventory: CoinInventory, display: D) -> Self {
        Self::with_settings(
            shelves,
            inventory,
            display,
            CoinCatalog::standard(),
            PaymentPolicy::default(),
            DEFAULT_HISTORY_LIMIT,
        )
    }

    pub(crate) fn with_settings(
        shelves: R,
        inventory: CoinInventory,
        display: D,
        catalog: CoinCatalog,
        policy: PaymentPolicy,
        history_limit: usize,
    ) -> Self {
        Self {
            shelves,
            resolver: ChangeResolver::new(inventory),
            display,
            catalog,
            policy,
            state: VendingState::Idle,
            history: TransitionLog::with_limit(history_limit),
        }
    }

    pub fn state(&self) -> &VendingState {
        &self.state
    }

    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    pub fn inventory(&self) -> &CoinInventory {
        self.resolver.inventory()
    }

    pub fn shelves(&self) -> &R {
        &self.shelves
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn catalog(&self) -> &CoinCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> PaymentPolicy {
        self.policy
    }

    /// Value inserted in the open session, if there is one.
    pub fn balance(&self) -> Option<Decimal> {
        self.state.session().map(|session| session.balance)
    }

    /// Shelf numbers in registry order. Valid in every state.
    pub fn list_shelf_numbers(&self) -> Vec<u32> {
        self.shelves.list()
    }

    /// Open a session for a shelf.
    ///
    /// Unknown numbers are reported as `InvalidShelf` in every state. A known
    /// shelf selected while a session is open is an `InvalidOperation`.
    pub fn select_shelf(&mut self, number: u32) -> Result<(), VendingError> {
        let shelf = self
            .shelves
            .find(number)
            .ok_or(VendingError::InvalidShelf(number))?;
        if !self.state.is_idle() {
            return Err(self.invalid("shelf already selected"));
        }
        if !shelf.is_available() {
            return Err(VendingError::ProductUnavailable(shelf.name().to_string()));
        }

        let price = shelf.price();
        let message = format!("{} {}", shelf.name(), money::format_amount(price));
        let session = Session::open(number);
        info!(session = %session.id, shelf = number, %price, "shelf selected");

        self.transition(VendingState::AwaitingPayment(session), Trigger::SelectShelf);
        self.display.display_message(&message);
        Ok(())
    }

    /// Credit one coin to the open session and show the amount still due.
    pub fn insert_coin(&mut self, coin: Coin) -> Result<(), VendingError> {
        let session = match &self.state {
            VendingState::AwaitingPayment(session) => session,
            VendingState::Settling(_) => return Err(self.invalid("already inserted enough money")),
            VendingState::Idle => return Err(self.invalid("no shelf selected")),
        };
        if !self.catalog.accepts(coin) {
            return Err(VendingError::UnacceptableCoin(coin));
        }
        let (name, price) = self.selected_product(session.shelf)?;

        let session = session.credit(coin);
        self.resolver.deposit(coin);
        debug!(session = %session.id, %coin, balance = %session.balance, "coin accepted");

        let due = money::remaining_due(price, session.balance);
        if session.balance >= price && self.policy == PaymentPolicy::SettleOnThreshold {
            self.transition(VendingState::Settling(session), Trigger::InsertCoin);
        } else {
            self.state = VendingState::AwaitingPayment(session);
        }
        self.display
            .display_message(&format!("{} {}", name, money::format_amount(due)));
        Ok(())
    }

    /// Whether the open session's balance covers the selected price.
    pub fn is_balance_sufficient(&self) -> Result<bool, VendingError> {
        match &self.state {
            VendingState::Idle => Err(self.invalid("no shelf selected")),
            VendingState::Settling(_) => Ok(true),
            VendingState::AwaitingPayment(session) => {
                let (_, price) = self.selected_product(session.shelf)?;
                Ok(session.balance >= price)
            }
        }
    }

    /// Abandon the open session and refund everything inserted.
    pub fn cancel(&mut self) -> Result<Vec<Coin>, VendingError> {
        let session = match &self.state {
            VendingState::AwaitingPayment(session) => session.clone(),
            VendingState::Settling(_) => return Err(self.invalid("cannot cancel while dispensing")),
            VendingState::Idle => return Err(self.invalid("no shelf selected")),
        };

        let coins = self.refund(&session)?;
        info!(session = %session.id, amount = %session.balance, "session cancelled");
        self.transition(VendingState::Idle, Trigger::Cancel);
        Ok(coins)
    }

    /// Settle the open session.
    ///
    /// Pays the surplus as change and releases one unit of the product. When
    /// the change cannot be paid exactly, shows [`NO_CHANGE_WARNING`] and
    /// refunds the whole balance instead, keeping the product on the shelf.
    pub fn dispense(&mut self) -> Result<Purchase, VendingError> {
        let session = match &self.state {
            VendingState::Idle => return Err(self.invalid("no shelf selected")),
            VendingState::AwaitingPayment(session) | VendingState::Settling(session) => {
                session.clone()
            }
        };
        let shelf = self
            .shelves
            .find(session.shelf)
            .ok_or(VendingError::InvalidShelf(session.shelf))?;
        let price = shelf.price();
        if session.balance < price {
            return Err(self.invalid("not enough money inserted"));
        }
        if !shelf.is_available() {
            return Err(VendingError::ProductUnavailable(shelf.name().to_string()));
        }

        let change = session.balance - price;
        let change_coins = self.resolver.withdraw(change)?;

        let prior = self.state.clone();
        let settling = VendingState::Settling(session.clone());
        if !self.state.same_variant(&settling) {
            self.transition(settling, Trigger::Dispense);
        }

        let purchase = match change_coins {
            Some(change_coins) => {
                let released = self
                    .shelves
                    .find_mut(session.shelf)
                    .and_then(Shelf::release);
                match released {
                    Some(product) => {
                        info!(
                            session = %session.id,
                            product = product.name(),
                            %change,
                            "product dispensed"
                        );
                        Purchase::delivered(product, change_coins)
                    }
                    None => {
                        for coin in change_coins {
                            self.resolver.deposit(coin);
                        }
                        self.transition(prior, Trigger::Dispense);
                        return Err(VendingError::ProductUnavailable(
                            self.selected_product(session.shelf)?.0,
                        ));
                    }
                }
            }
            None => {
                warn!(session = %session.id, %change, "change unavailable, refunding balance");
                match self.refund(&session) {
                    Ok(coins) => {
                        self.display.display_warning(NO_CHANGE_WARNING);
                        Purchase::refunded(coins)
                    }
                    Err(err) => {
                        self.transition(prior, Trigger::Dispense);
                        return Err(err);
                    }
                }
            }
        };

        self.transition(VendingState::Idle, Trigger::Dispense);
        Ok(purchase)
    }

    /// Pay back a session's whole balance.
    ///
    /// The resolver is asked first. When its walk cannot reach the balance,
    /// the coins the session inserted are handed back as they are.
    fn refund(&mut self, session: &Session) -> Result<Vec<Coin>, VendingError> {
        if let Some(coins) = self.resolver.withdraw(session.balance)? {
            return Ok(coins);
        }

        let mut coins = session.inserted.clone();
        coins.sort_by(|a, b| b.cmp(a));
        if !self.resolver.take_exact(&coins) {
            return Err(VendingError::RefundUnavailable(session.balance));
        }
        warn!(
            session = %session.id,
            amount = %session.balance,
            "resolver could not cover refund, returning inserted coins"
        );
        Ok(coins)
    }

    fn selected_product(&self, shelf: u32) -> Result<(String, Decimal), VendingError> {
        let shelf = self
            .shelves
            .find(shelf)
            .ok_or(VendingError::InvalidShelf(shelf))?;
        Ok((shelf.name().to_string(), shelf.price()))
    }

    fn invalid(&self, reason: &'static str) -> VendingError {
        VendingError::InvalidOperation {
            state: self.state.name().to_string(),
            reason,
        }
    }

    fn transition(&mut self, next: VendingState, trigger: Trigger) {
        let from = std::mem::replace(&mut self.state, next);
        debug!(from = from.name(), to = self.state.name(), ?trigger, "state transition");
        self.history.record(StateTransition {
            from,
            to: self.state.clone(),
            trigger,
            timestamp: Utc::now(),
        });
    }
}
