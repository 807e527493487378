//! Ledger store
//!
//! The single owner of the in-memory ledger. Every mutating operation
//! validates raw input, mutates the ledger, then saves the whole document
//! before returning. If the save fails the mutation stays in memory, the
//! store is flagged as unsaved and the caller gets
//! [`LedgerError::PersistenceWriteFailure`].

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{Settings, TrackerPaths};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Transaction, TransactionDate};
use crate::storage::{LedgerRepository, LegacyImport};
use crate::validation::{
    check_amount_policy, validate_category_name, validate_transaction_fields, Rejection,
};

use super::Ledger;

/// Raw transaction input from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub description: String,
    pub amount: String,
    /// `None` selects the default (first-created) category
    pub category: Option<String>,
    pub date: TransactionDate,
}

/// Whether negative amounts may be recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmountPolicy {
    pub allow_negative: bool,
}

impl From<&Settings> for AmountPolicy {
    fn from(settings: &Settings) -> Self {
        Self {
            allow_negative: settings.allow_negative_amounts,
        }
    }
}

/// Outcome of a legacy import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories_added: usize,
    pub categories_skipped: usize,
    pub transactions_added: usize,
}

/// Owns the ledger and keeps the saved document in step with it
#[derive(Debug)]
pub struct LedgerStore {
    ledger: Ledger,
    repository: LedgerRepository,
    audit: Option<AuditLogger>,
    policy: AmountPolicy,
    unsaved: bool,
}

impl LedgerStore {
    /// Load the ledger from `repository`
    ///
    /// A missing document yields an empty ledger; a corrupt one is an error.
    pub fn open(repository: LedgerRepository) -> LedgerResult<Self> {
        let ledger = repository.load()?;
        Ok(Self {
            ledger,
            repository,
            audit: None,
            policy: AmountPolicy::default(),
            unsaved: false,
        })
    }

    /// Open the store the way the application does: ledger file, audit log
    /// and amount policy all taken from paths and settings
    pub fn open_with_settings(paths: &TrackerPaths, settings: &Settings) -> LedgerResult<Self> {
        let store = Self::open(LedgerRepository::new(paths.ledger_file()))?
            .with_policy(AmountPolicy::from(settings));

        Ok(if settings.audit_enabled {
            store.with_audit(AuditLogger::new(paths.audit_log()))
        } else {
            store
        })
    }

    pub fn with_policy(mut self, policy: AmountPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Register a new category and save
    pub fn add_category(&mut self, raw_name: &str) -> LedgerResult<Category> {
        let category = validate_category_name(raw_name, self.ledger.categories())?;
        self.ledger.register_category(category.clone())?;
        self.persist()?;

        info!(category = %category, "added category");
        self.audit(&[AuditEntry::create(
            EntityType::Category,
            category.as_str(),
            &category,
        )]);
        Ok(category)
    }

    /// Validate and append a transaction, then save
    pub fn add_transaction(&mut self, raw: &RawTransaction) -> LedgerResult<Transaction> {
        let transaction = self.build_transaction(
            &self.ledger,
            &raw.description,
            &raw.amount,
            raw.category.as_deref(),
            raw.date,
        )?;

        let new_year = self.ledger.append(transaction.clone())?;
        if new_year {
            debug!(year = transaction.year(), "indexed new year");
        }
        self.persist()?;

        let number = self.ledger.transaction_count();
        info!(entry = number, amount = %transaction.amount(), "added transaction");
        self.audit(&[AuditEntry::create(
            EntityType::Transaction,
            transaction_id(number),
            &transaction,
        )]);
        Ok(transaction)
    }

    /// Migrate a legacy category file and transaction file into the ledger
    ///
    /// Every category and row is validated before anything is applied; the
    /// first problem aborts the import and leaves the ledger untouched.
    /// Categories that already exist are skipped. All rows get `date`.
    pub fn import_legacy(
        &mut self,
        import: &LegacyImport,
        date: TransactionDate,
    ) -> LedgerResult<ImportSummary> {
        let mut staged = self.ledger.clone();
        let mut summary = ImportSummary::default();
        let mut entries = Vec::new();

        for name in &import.categories {
            if staged.categories().contains(name) {
                summary.categories_skipped += 1;
                continue;
            }
            let category = validate_category_name(name, staged.categories())
                .map_err(|e| LedgerError::Import(format!("Category {:?}: {}", name, e)))?;
            staged.register_category(category.clone())?;
            entries.push(AuditEntry::import(
                EntityType::Category,
                category.to_string(),
                &category,
            ));
            summary.categories_added += 1;
        }

        for row in &import.rows {
            let transaction = self
                .build_transaction(
                    &staged,
                    &row.merged_description(),
                    &row.amount,
                    Some(row.category.as_str()),
                    date,
                )
                .map_err(|e| LedgerError::Import(format!("Row {}: {}", row.line, e)))?;
            staged.append(transaction.clone())?;
            entries.push(AuditEntry::import(
                EntityType::Transaction,
                transaction_id(staged.transaction_count()),
                &transaction,
            ));
            summary.transactions_added += 1;
        }

        self.ledger = staged;
        self.persist()?;

        info!(
            categories = summary.categories_added,
            transactions = summary.transactions_added,
            "imported legacy data"
        );
        self.audit(&entries);
        Ok(summary)
    }

    /// Retry saving after a previous write failure
    pub fn save(&mut self) -> LedgerResult<()> {
        self.persist()
    }

    /// Whether the in-memory ledger is ahead of the saved document
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Categories in creation order
    pub fn categories(&self) -> &[Category] {
        self.ledger.categories().list()
    }

    /// The first category ever created
    pub fn default_category(&self) -> Option<&Category> {
        self.ledger.categories().default()
    }

    /// Years with at least one transaction, ascending
    pub fn years(&self) -> &[i32] {
        self.ledger.years().as_slice()
    }

    /// All transactions in the order they were added
    pub fn transactions(&self) -> std::slice::Iter<'_, Transaction> {
        self.ledger.transactions()
    }

    pub fn repository(&self) -> &LedgerRepository {
        &self.repository
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Validate raw fields against `ledger` and build the transaction
    fn build_transaction(
        &self,
        ledger: &Ledger,
        description: &str,
        amount: &str,
        category: Option<&str>,
        date: TransactionDate,
    ) -> Result<Transaction, Rejection> {
        let categories = ledger.categories();
        let category_name = category
            .or_else(|| categories.default().map(Category::as_str))
            .unwrap_or("");

        let fields =
            validate_transaction_fields(description, amount, category_name, !categories.is_empty())?;
        check_amount_policy(fields.amount, self.policy.allow_negative)?;

        let category = categories
            .get(&fields.category)
            .cloned()
            .ok_or_else(|| Rejection::UnknownCategory(fields.category.clone()))?;

        Ok(Transaction::new(
            category,
            fields.description,
            fields.amount,
            date,
        ))
    }

    fn persist(&mut self) -> LedgerResult<()> {
        match self.repository.save(&self.ledger) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                warn!(error = %e, "ledger changed in memory but was not saved");
                Err(e)
            }
        }
    }

    fn audit(&self, entries: &[AuditEntry]) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_batch(entries) {
                warn!(error = %e, "failed to write audit log");
            }
        }
    }
}

fn transaction_id(number: usize) -> String {
    format!("txn-{}", number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use crate::storage::LegacyRow;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("data.json"));
        let store = LedgerStore::open(repo)
            .unwrap()
            .with_audit(AuditLogger::new(temp_dir.path().join("audit.log")));
        (temp_dir, store)
    }

    fn raw(description: &str, amount: &str, category: Option<&str>, y: i32, m: u32) -> RawTransaction {
        RawTransaction {
            description: description.into(),
            amount: amount.into(),
            category: category.map(String::from),
            date: TransactionDate::new(y, m, 1).unwrap(),
        }
    }

    fn reopen(temp_dir: &TempDir) -> LedgerStore {
        LedgerStore::open(LedgerRepository::new(temp_dir.path().join("data.json"))).unwrap()
    }

    #[test]
    fn test_add_category_persists() {
        let (temp_dir, mut store) = create_test_store();

        store.add_category("Food").unwrap();
        store.add_category("Rent").unwrap();

        let reloaded = reopen(&temp_dir);
        let names: Vec<_> = reloaded.categories().iter().map(Category::as_str).collect();
        assert_eq!(names, vec!["Food", "Rent"]);
    }

    #[test]
    fn test_add_category_rejections_do_not_mutate() {
        let (temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        let err = store.add_category("Food").unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::DuplicateCategory("Food".into())));

        let err = store.add_category("bad name!").unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::InvalidFormat("bad name!".into())));

        assert_eq!(store.categories().len(), 1);
        assert_eq!(reopen(&temp_dir).categories().len(), 1);
    }

    #[test]
    fn test_add_transaction_persists_and_indexes_year() {
        let (temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        store.add_transaction(&raw("Lunch", "12.50", Some("Food"), 2023, 5)).unwrap();
        store.add_transaction(&raw("Dinner", "30", Some("Food"), 2021, 5)).unwrap();
        store.add_transaction(&raw("Snack", "2.25", Some("Food"), 2022, 5)).unwrap();

        assert_eq!(store.years(), &[2021, 2022, 2023]);

        let reloaded = reopen(&temp_dir);
        assert_eq!(reloaded.ledger(), store.ledger());
    }

    #[test]
    fn test_default_category_used() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Rent").unwrap();
        store.add_category("Food").unwrap();

        let txn = store.add_transaction(&raw("Flat", "800", None, 2024, 1)).unwrap();
        assert_eq!(txn.category().as_str(), "Rent");
        assert_eq!(store.default_category().map(Category::as_str), Some("Rent"));
    }

    #[test]
    fn test_transaction_rejections() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store.add_transaction(&raw("Lunch", "5", None, 2024, 1)).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::NoCategorySelected));

        store.add_category("Food").unwrap();

        let err = store.add_transaction(&raw("Lunch", "5", Some("Fuel"), 2024, 1)).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::UnknownCategory("Fuel".into())));

        let err = store.add_transaction(&raw("", "5", None, 2024, 1)).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::MissingDescription));

        let err = store.add_transaction(&raw("Lunch", "-5.00", None, 2024, 1)).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::NegativeAmount("-5.00".into())));

        assert_eq!(store.transactions().count(), 0);
        assert!(store.years().is_empty());
    }

    #[test]
    fn test_negative_amounts_with_policy() {
        let (_temp_dir, store) = create_test_store();
        let mut store = store.with_policy(AmountPolicy { allow_negative: true });
        store.add_category("Food").unwrap();

        let txn = store.add_transaction(&raw("Refund", "-5.00", None, 2024, 1)).unwrap();
        assert_eq!(txn.amount(), Money::from_cents(-500));
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();
        store.add_transaction(&raw("Lunch", "12.50", None, 2024, 3)).unwrap();

        let entries = store.audit_logger().unwrap().read_all().unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["Food", "txn-1"]);
    }

    #[test]
    fn test_write_failure_keeps_memory_and_flags_unsaved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let mut store = LedgerStore::open(LedgerRepository::new(path.clone())).unwrap();

        // Occupy the target path with a non-empty directory so rename fails
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("block"), "x").unwrap();

        let err = store.add_category("Food").unwrap_err();
        assert!(err.is_unsaved());
        assert!(store.has_unsaved_changes());
        assert_eq!(store.categories().len(), 1);

        std::fs::remove_dir_all(&path).unwrap();
        store.save().unwrap();
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn test_import_legacy() {
        let (temp_dir, mut store) = create_test_store();
        store.add_category("Food").unwrap();

        let import = LegacyImport {
            categories: vec!["Food".into(), "Rent".into()],
            rows: vec![
                LegacyRow {
                    line: 1,
                    name: "Lunch".into(),
                    amount: "12.50".into(),
                    description: String::new(),
                    category: "Food".into(),
                },
                LegacyRow {
                    line: 2,
                    name: "Flat".into(),
                    amount: "800".into(),
                    description: "deposit".into(),
                    category: "Rent".into(),
                },
            ],
        };

        let date = TransactionDate::new(2020, 6, 30).unwrap();
        let summary = store.import_legacy(&import, date).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                categories_added: 1,
                categories_skipped: 1,
                transactions_added: 2,
            }
        );

        let audited = store.audit_logger().unwrap().read_all().unwrap();
        let ids: Vec<_> = audited.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["Food", "Rent", "txn-1", "txn-2"]);
        assert!(audited.iter().all(|e| e.after.is_some()));
        assert_eq!(audited[3].after.as_ref().unwrap()["amount"], "800.00");

        let reloaded = reopen(&temp_dir);
        assert_eq!(reloaded.years(), &[2020]);
        let entries = reloaded.ledger().entries_in(2020, Month::June);
        assert_eq!(entries[1].transaction.description(), "Flat - deposit");
    }

    #[test]
    fn test_import_legacy_is_all_or_nothing() {
        let (_temp_dir, mut store) = create_test_store();

        let import = LegacyImport {
            categories: vec!["Food".into()],
            rows: vec![LegacyRow {
                line: 7,
                name: "Lunch".into(),
                amount: "12.345".into(),
                description: String::new(),
                category: "Food".into(),
            }],
        };

        let err = store
            .import_legacy(&import, TransactionDate::new(2020, 1, 1).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("Row 7"));
        assert!(store.categories().is_empty());
    }
}
