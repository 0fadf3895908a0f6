//! Column layouts for each back-office listing.

use datatable::column::Column;
use datatable::record::Record;
use datatable::value::CellValue;

use crate::records::{ExpenseCategory, LoanAccount, LoanProduct, Member, Payment};

/// How one listing presents its records.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Table caption.
    pub caption: &'static str,
    /// Field identifying a record.
    pub key_field: &'static str,
    /// Shown when nothing matches.
    pub empty_message: &'static str,
    /// Column layout.
    pub columns: Vec<Column<T>>,
}

/// Formats an amount as "KES 12,500.00".
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("KES {sign}{grouped}.{cents}")
}

fn amount_cell<T: Record + 'static>(field: &'static str) -> impl Fn(&T) -> String + Send + Sync + 'static {
    move |r: &T| r.field(field).as_f64().map(format_amount).unwrap_or_default()
}

/// Member register.
#[must_use]
pub fn members() -> Page<Member> {
    Page {
        caption: "Members",
        key_field: "id",
        empty_message: "No members found",
        columns: vec![
            Column::field("Member No", "member_no").sortable(),
            Column::derived("Name", |m: &Member| m.full_name().into()).sortable(),
            Column::field("Phone", "phone"),
            Column::field("Joined", "joined_on").sortable(),
            Column::field("Shares", "shares")
                .sortable()
                .align_right()
                .cell(amount_cell("shares")),
            Column::field("Status", "status").sortable(),
        ],
    }
}

/// Loan products on offer.
#[must_use]
pub fn loan_products() -> Page<LoanProduct> {
    Page {
        caption: "Loan Products",
        key_field: "id",
        empty_message: "No loan products found",
        columns: vec![
            Column::field("Product", "name").sortable(),
            Column::field("Rate", "interest_rate")
                .sortable()
                .align_right()
                .cell(|p: &LoanProduct| format!("{:.2}%", p.interest_rate)),
            Column::field("Max Amount", "max_amount")
                .sortable()
                .align_right()
                .cell(amount_cell("max_amount")),
            Column::field("Max Term", "max_term_months")
                .sortable()
                .cell(|p: &LoanProduct| format!("{} months", p.max_term_months)),
            Column::field("Active", "active").cell(|p: &LoanProduct| {
                if p.active { "Yes" } else { "No" }.to_string()
            }),
        ],
    }
}

/// Loan accounts.
#[must_use]
pub fn loans() -> Page<LoanAccount> {
    Page {
        caption: "Loans",
        key_field: "id",
        empty_message: "No loans found",
        columns: vec![
            Column::field("Account", "account_no").sortable(),
            Column::field("Member", "member_name").sortable(),
            Column::field("Product", "product").sortable(),
            Column::field("Principal", "principal")
                .sortable()
                .align_right()
                .cell(amount_cell("principal")),
            Column::field("Balance", "balance")
                .sortable()
                .align_right()
                .cell(amount_cell("balance")),
            Column::field("Disbursed", "disbursed_on")
                .sortable()
                .cell(|l: &LoanAccount| {
                    l.disbursed_on
                        .map_or_else(|| "—".to_string(), |d| d.format("%d %b %Y").to_string())
                }),
            Column::field("Status", "status").sortable(),
        ],
    }
}

/// Payments received.
#[must_use]
pub fn payments() -> Page<Payment> {
    Page {
        caption: "Payments",
        key_field: "id",
        empty_message: "No payments found",
        columns: vec![
            Column::field("Receipt", "receipt_no").sortable(),
            Column::field("Account", "account_no").sortable(),
            Column::field("Amount", "amount")
                .sortable()
                .align_right()
                .cell(amount_cell("amount")),
            Column::field("Method", "method").sortable(),
            Column::field("Paid On", "paid_on").sortable(),
            Column::field("Reference", "reference"),
        ],
    }
}

/// Expense categories.
#[must_use]
pub fn expense_categories() -> Page<ExpenseCategory> {
    Page {
        caption: "Expense Categories",
        key_field: "id",
        empty_message: "No expense categories found",
        columns: vec![
            Column::field("Category", "name").sortable(),
            Column::derived("Description", |c: &ExpenseCategory| {
                CellValue::from(c.description.as_deref())
            })
            .width(48),
        ],
    }
}
