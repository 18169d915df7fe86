//! Japanese messages attached to export issues.

use super::utils::format_yen;

pub(crate) fn date_missing() -> String {
    "取引日が入力されていません".into()
}

pub(crate) fn date_invalid(raw: &str) -> String {
    format!("取引日「{raw}」の形式が不正です")
}

pub(crate) fn date_out_of_range(raw: &str) -> String {
    format!("取引日 {raw} は指定期間外のため CSV に含めません")
}

pub(crate) fn document_not_confirmed(document_name: &str) -> String {
    format!("ドキュメント「{document_name}」が確定済みではないためエクスポートできません")
}

pub(crate) fn vendor_missing() -> String {
    "相手先が入力されていません".into()
}

pub(crate) fn vendor_too_long(max: usize) -> String {
    format!("相手先は {max} 文字以内で入力してください")
}

pub(crate) fn account_title_missing() -> String {
    "勘定科目が選択されていません".into()
}

pub(crate) fn tax_category_invalid() -> String {
    "税区分が不正です".into()
}

pub(crate) fn amount_missing() -> String {
    "入金または出金のどちらかに金額を入力してください".into()
}

pub(crate) fn amount_in_negative() -> String {
    "入金金額は 0 以上の整数で入力してください".into()
}

pub(crate) fn amount_out_negative() -> String {
    "出金金額は 0 以上の整数で入力してください".into()
}

pub(crate) fn amount_in_over_limit(max: i64) -> String {
    format!("入金金額は {} 円以内で入力してください", format_yen(max))
}

pub(crate) fn amount_out_over_limit(max: i64) -> String {
    format!("出金金額は {} 円以内で入力してください", format_yen(max))
}

pub(crate) fn description_too_long(max: usize) -> String {
    format!("摘要は {max} 文字以内で入力してください")
}
