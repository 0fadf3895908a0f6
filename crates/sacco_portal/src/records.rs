//! SACCO record types, as exported by the back office API.
//!
//! Each type maps its fields onto [`Record`] so tables can address them by
//! the same names the JSON export uses.

use chrono::NaiveDate;
use datatable::record::Record;
use datatable::value::CellValue;
use serde::{Deserialize, Serialize};

/// Unique identifier for entities.
pub type Id = u64;

// ============================================================================
// Members
// ============================================================================

/// Membership standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Contributing member.
    #[default]
    Active,
    /// No contributions for a while.
    Dormant,
    /// Left the SACCO.
    Exited,
}

impl MemberStatus {
    /// Get display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Dormant => "Dormant",
            Self::Exited => "Exited",
        }
    }
}

/// A SACCO member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Id,
    pub member_no: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub joined_on: NaiveDate,
    /// Share capital held, in KES.
    pub shares: f64,
    #[serde(default)]
    pub status: MemberStatus,
}

impl Member {
    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Member {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "member_no" => self.member_no.as_str().into(),
            "first_name" => self.first_name.as_str().into(),
            "last_name" => self.last_name.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "email" => self.email.as_deref().into(),
            "joined_on" => self.joined_on.into(),
            "shares" => self.shares.into(),
            "status" => self.status.name().into(),
            _ => CellValue::Empty,
        }
    }
}

// ============================================================================
// Loan products
// ============================================================================

/// A loan product on offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: Id,
    pub name: String,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
    pub max_amount: f64,
    pub max_term_months: u32,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Record for LoanProduct {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "interest_rate" => self.interest_rate.into(),
            "max_amount" => self.max_amount.into(),
            "max_term_months" => self.max_term_months.into(),
            "active" => self.active.into(),
            _ => CellValue::Empty,
        }
    }
}

// ============================================================================
// Loan accounts
// ============================================================================

/// Where a loan is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Approved, waiting for disbursement.
    #[default]
    Pending,
    /// Disbursed and being repaid.
    Active,
    /// Fully repaid.
    Closed,
    /// Repayments stopped.
    Defaulted,
}

impl LoanStatus {
    /// Get display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Closed => "Closed",
            Self::Defaulted => "Defaulted",
        }
    }
}

/// A member's loan account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAccount {
    pub id: Id,
    pub account_no: String,
    pub member_name: String,
    pub product: String,
    pub principal: f64,
    /// Outstanding balance as reported by the backend.
    pub balance: f64,
    #[serde(default)]
    pub disbursed_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: LoanStatus,
}

impl Record for LoanAccount {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "account_no" => self.account_no.as_str().into(),
            "member_name" => self.member_name.as_str().into(),
            "product" => self.product.as_str().into(),
            "principal" => self.principal.into(),
            "balance" => self.balance.into(),
            "disbursed_on" => self.disbursed_on.into(),
            "status" => self.status.name().into(),
            _ => CellValue::Empty,
        }
    }
}

// ============================================================================
// Payments
// ============================================================================

/// How a payment reached the SACCO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Mpesa,
    Bank,
    Cash,
}

impl PaymentMethod {
    /// Get display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mpesa => "M-Pesa",
            Self::Bank => "Bank",
            Self::Cash => "Cash",
        }
    }
}

/// A repayment received against a loan account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Id,
    pub receipt_no: String,
    pub account_no: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub paid_on: NaiveDate,
    /// Transaction code from the payment channel.
    #[serde(default)]
    pub reference: Option<String>,
}

impl Record for Payment {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "receipt_no" => self.receipt_no.as_str().into(),
            "account_no" => self.account_no.as_str().into(),
            "amount" => self.amount.into(),
            "method" => self.method.name().into(),
            "paid_on" => self.paid_on.into(),
            "reference" => self.reference.as_deref().into(),
            _ => CellValue::Empty,
        }
    }
}

// ============================================================================
// Expense categories
// ============================================================================

/// A bucket for operating expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record for ExpenseCategory {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.as_deref().into(),
            _ => CellValue::Empty,
        }
    }
}
