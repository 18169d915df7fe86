use crate::entities::{IssueField, IssueSeverity};

impl IssueField {
    /// Label shown to reviewers.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            IssueField::Date => "取引日",
            IssueField::Vendor => "相手先",
            IssueField::AccountTitle => "勘定科目",
            IssueField::TaxCategory => "税区分",
            IssueField::AmountIn => "金額（入金）",
            IssueField::AmountOut => "金額（出金）",
            IssueField::Description => "摘要",
            IssueField::Status => "ステータス",
        }
    }
}

impl IssueSeverity {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "エラー",
            IssueSeverity::Warning => "警告",
        }
    }
}
