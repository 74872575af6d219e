//! In-memory payslip store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{Payslip, TaxPeriod};

use super::PayslipStore;

type PayslipKey = (String, TaxPeriod);

/// A [`PayslipStore`] backed by a `HashMap` behind an `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryPayslipStore {
    payslips: RwLock<HashMap<PayslipKey, Payslip>>,
}

impl InMemoryPayslipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded payslips.
    pub fn len(&self) -> EngineResult<usize> {
        Ok(self.payslips.read().map_err(poisoned)?.len())
    }

    /// Whether the store holds no payslips.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: T) -> EngineError {
    EngineError::StoreUnavailable {
        message: "payslip store lock poisoned".to_string(),
    }
}

impl PayslipStore for InMemoryPayslipStore {
    fn insert(&self, payslip: Payslip) -> EngineResult<Payslip> {
        let key = (payslip.employee_id.clone(), payslip.period());
        let mut payslips = self.payslips.write().map_err(poisoned)?;

        match payslips.entry(key) {
            Entry::Occupied(_) => Err(EngineError::DuplicatePayslip {
                employee_id: payslip.employee_id,
                tax_year: payslip.tax_year,
                tax_period: payslip.tax_period,
            }),
            Entry::Vacant(slot) => Ok(slot.insert(payslip).clone()),
        }
    }

    fn find(&self, employee_id: &str, period: TaxPeriod) -> EngineResult<Option<Payslip>> {
        let payslips = self.payslips.read().map_err(poisoned)?;
        Ok(payslips.get(&(employee_id.to_string(), period)).cloned())
    }

    fn list_for_employee(&self, employee_id: &str, since: TaxPeriod) -> EngineResult<Vec<Payslip>> {
        let payslips = self.payslips.read().map_err(poisoned)?;
        let mut found: Vec<Payslip> = payslips
            .values()
            .filter(|p| p.employee_id == employee_id && p.period() >= since)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.period().cmp(&a.period()));
        Ok(found)
    }
}
