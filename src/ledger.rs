//! The ledger: the ordered collection of transactions and the figures derived from it.
//!
//! The ledger owns its transactions and a [SnapshotStore]. Every change is
//! written through to the store as a full snapshot before it is kept in
//! memory, so a failed write leaves both the store and the ledger as they were.

use std::collections::HashMap;

use time::Date;

use crate::{
    Error,
    snapshot::{self, SNAPSHOT_KEY},
    stores::SnapshotStore,
    transaction::{Transaction, TransactionId, validate_amount, validate_label},
};

/// Expense totals keyed by transaction label.
pub type ExpenseBreakdown = HashMap<String, f64>;

/// The summary figures for a ledger, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// The sum of every amount.
    pub balance: f64,
    /// The sum of the positive amounts.
    pub income: f64,
    /// The magnitude of the sum of the negative amounts.
    pub expense: f64,
}

/// An ordered collection of transactions kept in sync with a [SnapshotStore].
#[derive(Debug)]
pub struct Ledger<S> {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    store: S,
}

impl<S: SnapshotStore> Ledger<S> {
    /// Create an empty ledger that saves to `store`.
    ///
    /// Nothing is read from or written to `store` until the first change.
    pub fn new(store: S) -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
            store,
        }
    }

    /// Create a ledger from the snapshot saved in `store`.
    ///
    /// A store without a snapshot gives an empty ledger. `today` is used for
    /// saved transactions that do not have a date.
    ///
    /// # Errors
    /// Returns an [Error::CorruptSnapshot] if the saved snapshot cannot be read
    /// or holds an ID that leaves no room for new transactions, or the store's
    /// error if loading fails.
    pub fn load(store: S, today: Date) -> Result<Self, Error> {
        let transactions = match store.load(SNAPSHOT_KEY)? {
            Some(text) => snapshot::decode(&text, today)?,
            None => Vec::new(),
        };

        let next_id = match transactions.iter().map(|transaction| transaction.id).max() {
            Some(max_id) => max_id.checked_add(1).ok_or_else(|| {
                Error::CorruptSnapshot(format!("transaction ID {max_id} is too large"))
            })?,
            None => 1,
        };

        tracing::info!("loaded {} transactions", transactions.len());

        Ok(Self {
            transactions,
            next_id,
            store,
        })
    }

    /// Add a transaction to the end of the ledger and save the ledger.
    ///
    /// `label` is trimmed. If `date` is `None` the transaction is dated `today`.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if `label` is blank or `amount` is not
    /// finite, an [Error::TransactionIdsExhausted] if no IDs are left, or the
    /// store's error if saving fails. The ledger is unchanged on error.
    pub fn add(
        &mut self,
        label: &str,
        amount: f64,
        date: Option<Date>,
        today: Date,
    ) -> Result<Transaction, Error> {
        let label = validate_label(label)?;
        let amount = validate_amount(amount)?;
        let following_id = self
            .next_id
            .checked_add(1)
            .ok_or(Error::TransactionIdsExhausted)?;

        let transaction = Transaction {
            id: self.next_id,
            label,
            amount,
            date: date.unwrap_or(today),
        };

        self.transactions.push(transaction.clone());

        if let Err(error) = self.save() {
            self.transactions.pop();
            return Err(error);
        }

        self.next_id = following_id;

        tracing::info!(
            "added transaction {} \"{}\" for {}",
            transaction.id,
            transaction.label,
            transaction.amount
        );

        Ok(transaction)
    }

    /// Remove the transaction with `id` and save the ledger.
    ///
    /// Returns whether a transaction was removed. Removing an ID that is not in
    /// the ledger does nothing and does not touch the store.
    ///
    /// # Errors
    /// Returns the store's error if saving fails, in which case the
    /// transaction is put back where it was.
    pub fn remove(&mut self, id: TransactionId) -> Result<bool, Error> {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            tracing::debug!("transaction {id} not found, nothing to remove");
            return Ok(false);
        };

        let removed = self.transactions.remove(index);

        if let Err(error) = self.save() {
            self.transactions.insert(index, removed);
            return Err(error);
        }

        tracing::info!("removed transaction {id}");

        Ok(true)
    }

    /// Remove every transaction and save the empty ledger.
    ///
    /// Returns the number of transactions removed. IDs are not reused after
    /// clearing.
    ///
    /// # Errors
    /// Returns the store's error if saving fails, in which case the ledger is
    /// unchanged.
    pub fn clear(&mut self) -> Result<usize, Error> {
        let removed = std::mem::take(&mut self.transactions);

        if let Err(error) = self.save() {
            self.transactions = removed;
            return Err(error);
        }

        tracing::info!("cleared {} transactions", removed.len());

        Ok(removed.len())
    }

    fn save(&mut self) -> Result<(), Error> {
        let text = snapshot::encode(&self.transactions)?;
        self.store
            .save(SNAPSHOT_KEY, &text)
            .inspect_err(|error| tracing::error!("could not save transactions: {error}"))
    }
}

impl<S> Ledger<S> {
    /// All transactions in the order they were added.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The last `n` transactions, most recent first.
    ///
    /// If the ledger holds fewer than `n` transactions, all are returned.
    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        self.transactions.iter().rev().take(n).collect()
    }

    /// Get the transaction with `id`.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// The number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The balance, income and expense totals, rounded to two decimal places.
    pub fn totals(&self) -> Totals {
        let (income, expense) =
            self.transactions
                .iter()
                .fold((0.0, 0.0), |(income, expense), transaction| {
                    if transaction.amount > 0.0 {
                        (income + transaction.amount, expense)
                    } else {
                        (income, expense + transaction.amount)
                    }
                });

        let income = round_to_cents(income);
        let expense = round_to_cents(expense.abs());

        Totals {
            balance: round_to_cents(income - expense),
            income,
            expense,
        }
    }

    /// The total spent per label, counting only expenses.
    ///
    /// Values are positive and rounded to two decimal places.
    pub fn expense_breakdown(&self) -> ExpenseBreakdown {
        let mut breakdown = ExpenseBreakdown::new();

        for transaction in self.transactions.iter().filter(|t| t.is_expense()) {
            *breakdown.entry(transaction.label.clone()).or_insert(0.0) += transaction.amount.abs();
        }

        for total in breakdown.values_mut() {
            *total = round_to_cents(*total);
        }

        breakdown
    }
}

fn round_to_cents(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round() / 100.0;
    // Avoid displaying "-0.00".
    if rounded == 0.0 { 0.0 } else { rounded }
}
