//! Payslip persistence.
//!
//! The engine only needs three operations from storage, captured by
//! [`PayslipStore`]. The server injects an implementation through its
//! application state so handlers never reach for a global.

mod memory;

pub use memory::InMemoryPayslipStore;

use crate::error::EngineResult;
use crate::models::{Payslip, TaxPeriod};

/// Storage for recorded payslips, keyed by employee and tax period.
pub trait PayslipStore: Send + Sync + 'static {
    /// Records a payslip.
    ///
    /// Fails with [`EngineError::DuplicatePayslip`](crate::error::EngineError::DuplicatePayslip)
    /// when the employee already has a payslip for the same period. The
    /// existence check and the write must be a single atomic operation.
    fn insert(&self, payslip: Payslip) -> EngineResult<Payslip>;

    /// Looks up the payslip for one employee and period.
    fn find(&self, employee_id: &str, period: TaxPeriod) -> EngineResult<Option<Payslip>>;

    /// Lists an employee's payslips for periods at or after `since`,
    /// newest period first.
    fn list_for_employee(&self, employee_id: &str, since: TaxPeriod) -> EngineResult<Vec<Payslip>>;
}
