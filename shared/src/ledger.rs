//! The daily account book: a draft entry plus the committed rows.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diary::DiaryState;
use crate::error::LedgerError;
use crate::ids::{IdGenerator, UuidIds};
use crate::summary::AccountTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoneyFlow {
    Income,
    Expense,
}

impl MoneyFlow {
    pub const ALL: [MoneyFlow; 2] = [MoneyFlow::Income, MoneyFlow::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoneyFlow::Income => "INCOME",
            MoneyFlow::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoneyFlow::Income => "수입",
            MoneyFlow::Expense => "지출",
        }
    }
}

impl fmt::Display for MoneyFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MoneyFlow {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flow| flow.as_str() == s)
            .ok_or_else(|| LedgerError::UnknownOption {
                field: "moneyFlow",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Housing,
    Medical,
    Education,
    Culture,
    Salary,
    Allowance,
    Etc,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Housing,
        Category::Medical,
        Category::Education,
        Category::Culture,
        Category::Salary,
        Category::Allowance,
        Category::Etc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Transport => "TRANSPORT",
            Category::Shopping => "SHOPPING",
            Category::Housing => "HOUSING",
            Category::Medical => "MEDICAL",
            Category::Education => "EDUCATION",
            Category::Culture => "CULTURE",
            Category::Salary => "SALARY",
            Category::Allowance => "ALLOWANCE",
            Category::Etc => "ETC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "식비",
            Category::Transport => "교통",
            Category::Shopping => "쇼핑",
            Category::Housing => "주거",
            Category::Medical => "의료",
            Category::Education => "교육",
            Category::Culture => "문화",
            Category::Salary => "월급",
            Category::Allowance => "용돈",
            Category::Etc => "기타",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| LedgerError::UnknownOption {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// `<option>` entry for a select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn money_flow_options() -> Vec<SelectOption> {
    MoneyFlow::ALL
        .iter()
        .map(|flow| SelectOption {
            value: flow.as_str(),
            label: flow.label(),
        })
        .collect()
}

pub fn category_options() -> Vec<SelectOption> {
    Category::ALL
        .iter()
        .map(|category| SelectOption {
            value: category.as_str(),
            label: category.label(),
        })
        .collect()
}

/// A committed income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRow {
    pub id: String,
    pub money_flow: MoneyFlow,
    pub category: Category,
    /// Whole won
    pub amount: u64,
    pub memo: String,
}

/// The entry being edited. `amount` holds the text as typed and is only
/// interpreted on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerDraft {
    pub id: String,
    pub money_flow: MoneyFlow,
    pub category: Category,
    pub amount: String,
    pub memo: String,
}

impl LedgerDraft {
    fn fresh(id: String) -> Self {
        Self {
            id,
            money_flow: MoneyFlow::Expense,
            category: Category::Food,
            amount: "0".to_string(),
            memo: String::new(),
        }
    }
}

/// Draft field addressed by an input's `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    MoneyFlow,
    Category,
    Amount,
    Memo,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::MoneyFlow => "moneyFlow",
            DraftField::Category => "category",
            DraftField::Amount => "amount",
            DraftField::Memo => "memo",
        }
    }
}

impl FromStr for DraftField {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moneyFlow" => Ok(DraftField::MoneyFlow),
            "category" => Ok(DraftField::Category),
            "amount" => Ok(DraftField::Amount),
            "memo" => Ok(DraftField::Memo),
            other => Err(LedgerError::UnknownOption {
                field: "field",
                value: other.to_string(),
            }),
        }
    }
}

/// Largest amount a single row may hold. Kept within the range `f64`
/// represents exactly so totals render without rounding.
pub const MAX_AMOUNT: u64 = 1_000_000_000_000_000;

/// Coerce typed amount text into whole won. Thousands separators are
/// accepted; anything negative, fractional, non-numeric or above
/// [`MAX_AMOUNT`] is rejected.
pub fn parse_amount(text: &str) -> Result<u64, LedgerError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(LedgerError::InvalidAmount(text.to_string()));
    }
    cleaned
        .parse::<u64>()
        .ok()
        .filter(|amount| *amount <= MAX_AMOUNT)
        .ok_or_else(|| LedgerError::InvalidAmount(text.to_string()))
}

#[derive(Debug, Clone)]
pub struct LedgerBook<G: IdGenerator = UuidIds> {
    draft: LedgerDraft,
    rows: Vec<LedgerRow>,
    ids: G,
}

impl Default for LedgerBook<UuidIds> {
    fn default() -> Self {
        Self::new(UuidIds)
    }
}

impl<G: IdGenerator> LedgerBook<G> {
    pub fn new(mut ids: G) -> Self {
        let draft = LedgerDraft::fresh(ids.next_id());
        Self {
            draft,
            rows: Vec::new(),
            ids,
        }
    }

    pub fn draft(&self) -> &LedgerDraft {
        &self.draft
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Replace one draft field. Select fields must name a known option; text
    /// fields are stored verbatim.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) -> Result<(), LedgerError> {
        match field {
            DraftField::MoneyFlow => self.draft.money_flow = value.parse()?,
            DraftField::Category => self.draft.category = value.parse()?,
            DraftField::Amount => self.draft.amount = value.to_string(),
            DraftField::Memo => self.draft.memo = value.to_string(),
        }
        Ok(())
    }

    /// Append the draft as a new row and reset the draft. On error neither the
    /// draft nor the rows change.
    pub fn commit_draft(&mut self) -> Result<&LedgerRow, LedgerError> {
        let amount = parse_amount(&self.draft.amount)?;
        let row = LedgerRow {
            id: self.ids.next_id(),
            money_flow: self.draft.money_flow,
            category: self.draft.category,
            amount,
            memo: self.draft.memo.clone(),
        };
        debug!("ledger: committing row {} ({} {})", row.id, row.money_flow.as_str(), row.amount);

        self.rows.push(row);
        self.draft = LedgerDraft::fresh(self.ids.next_id());
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Remove every row with `id`, returning how many were removed.
    pub fn remove_row(&mut self, id: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = before - self.rows.len();
        if removed == 0 {
            debug!("ledger: no row with id {id}");
        }
        removed
    }

    pub fn totals(&self) -> AccountTotals {
        let sum = |flow: MoneyFlow| -> u64 {
            self.rows
                .iter()
                .filter(|row| row.money_flow == flow)
                .fold(0u64, |total, row| total.saturating_add(row.amount))
        };
        let non_zero = |value: u64| (value > 0).then_some(value as f64);

        AccountTotals {
            income: non_zero(sum(MoneyFlow::Income)),
            expense: non_zero(sum(MoneyFlow::Expense)),
        }
    }

    /// Committed rows as the `accountTable` part of a diary entry.
    pub fn to_diary_state(&self) -> DiaryState {
        DiaryState {
            account_table: Some(self.rows.clone()),
            ..DiaryState::default()
        }
    }
}
