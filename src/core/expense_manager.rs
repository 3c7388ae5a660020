use crate::{
    core::{
        clock::Clock,
        services::{
            AnalyticsService, CategoryTotal, ExpenseFilter, ExpenseSummary, FilterService,
            MonthlyTotal, SummaryService,
        },
    },
    domain::{Displayable, Expense, ExpenseDraft, ExpenseId},
    errors::{ExpenseError, Result},
    storage::{ExpenseStore, StorageBackend},
};

/// Owns the expense collection and keeps storage in step with it. Every
/// mutation rewrites the whole collection; derived views are recomputed on
/// demand.
pub struct ExpenseManager {
    expenses: Vec<Expense>,
    store: ExpenseStore,
    clock: Box<dyn Clock>,
    last_save_ok: bool,
}

impl ExpenseManager {
    /// Loads the collection through the store. Never fails: unreadable data
    /// starts an empty collection.
    pub fn open(backend: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Self {
        let store = ExpenseStore::new(backend);
        let expenses = store.load(clock.today(), clock.now());
        Self {
            expenses,
            store,
            clock,
            last_save_ok: true,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// `true` when the most recent write failed. In-memory state is kept
    /// regardless.
    pub fn last_save_failed(&self) -> bool {
        !self.last_save_ok
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| &expense.id == id)
    }

    /// Finds an expense by exact id, falling back to a unique id prefix.
    pub fn resolve(&self, reference: &str) -> Result<&Expense> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ExpenseError::Validation("expense id is required".into()));
        }
        if let Some(exact) = self.get(&ExpenseId::from(reference)) {
            return Ok(exact);
        }
        let mut matches = self
            .expenses
            .iter()
            .filter(|expense| expense.id.as_str().starts_with(reference));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found),
            (Some(_), Some(_)) => Err(ExpenseError::AmbiguousReference(reference.into())),
            (None, _) => Err(ExpenseError::NotFound(reference.into())),
        }
    }

    /// Validates and records a new expense at the front of the collection.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<&Expense> {
        let draft = draft.validate()?;
        let expense = Expense::new(draft, self.clock.now());
        tracing::debug!(id = %expense.id, "adding expense");
        self.expenses.insert(0, expense);
        self.persist();
        Ok(&self.expenses[0])
    }

    /// Replaces the editable fields of an existing expense.
    pub fn edit(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> Result<&Expense> {
        let draft = draft.validate()?;
        let idx = self.index_of(id)?;
        tracing::debug!(id = %id, "editing expense");
        self.expenses[idx].apply(draft);
        self.persist();
        Ok(&self.expenses[idx])
    }

    /// Removes exactly the expense with `id`.
    pub fn delete(&mut self, id: &ExpenseId) -> Result<Expense> {
        let idx = self.index_of(id)?;
        let removed = self.expenses.remove(idx);
        tracing::debug!(id = %id, expense = %removed.display_label(), "deleted expense");
        self.persist();
        Ok(removed)
    }

    pub fn summary(&self) -> ExpenseSummary {
        SummaryService::summarize(&self.expenses, self.clock.today())
    }

    pub fn category_breakdown(&self) -> Vec<CategoryTotal> {
        AnalyticsService::category_breakdown(&self.expenses)
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyTotal> {
        AnalyticsService::monthly_trend(&self.expenses)
    }

    pub fn filtered(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        FilterService::apply(&self.expenses, filter, self.clock.today())
    }

    fn index_of(&self, id: &ExpenseId) -> Result<usize> {
        self.expenses
            .iter()
            .position(|expense| &expense.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))
    }

    fn persist(&mut self) {
        self.last_save_ok = self.store.save(&self.expenses);
        if !self.last_save_ok {
            tracing::warn!("changes kept in memory but not persisted");
        }
    }
}
