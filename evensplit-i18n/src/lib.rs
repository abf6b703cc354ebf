#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBERS_PROMPT: &str = "メンバーの名前をカンマ区切りで入力してください:";
    pub const NO_MEMBERS_ENTERED: &str = "メンバーが入力されていません。終了します。";
    pub const EXPENSE_ADDED: &str = "支出を追加しました！";
    pub const INVALID_AMOUNT: &str = "有効な数値の金額を入力してください。";
    pub const NON_POSITIVE_AMOUNT: &str = "金額は0より大きくなければなりません。";
    pub const AMOUNT_OUT_OF_RANGE: &str = "金額が大きすぎます。";
    pub const EVERYONE_SETTLED: &str = "全員の精算が完了しています！";
    pub const NO_EXPENSES: &str = "まだ支出は記録されていません。";
    pub const LEDGER_RESET: &str = "支出とバランスをリセットしました。";
    pub const MEMBERS_ALREADY_SET: &str = "このセッションのメンバーは既に決まっています。";
    pub const EMPTY_MEMBER_LIST: &str = "メンバーの一覧が空です。";
    pub const HELP: &str = "\
コマンド:
  add <支払人> <金額> [説明]   支出を追加して全員で均等に割る
  balances                     現在のバランスを表示
  expenses                     支出の一覧を表示
  settle                       精算に必要な支払いを計算
  reset                        支出とバランスを消去
  help                         このヘルプを表示
  quit                         終了";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBERS_PROMPT: &str = "Enter the names of group members separated by commas:";
    pub const NO_MEMBERS_ENTERED: &str = "No members entered. Exiting.";
    pub const EXPENSE_ADDED: &str = "Expense added successfully!";
    pub const INVALID_AMOUNT: &str = "Please enter a valid numeric amount.";
    pub const NON_POSITIVE_AMOUNT: &str = "The amount must be greater than zero.";
    pub const AMOUNT_OUT_OF_RANGE: &str = "The amount is too large.";
    pub const EVERYONE_SETTLED: &str = "Everyone is settled up!";
    pub const NO_EXPENSES: &str = "No expenses recorded yet.";
    pub const LEDGER_RESET: &str = "Expenses and balances have been cleared.";
    pub const MEMBERS_ALREADY_SET: &str = "Members are already fixed for this session.";
    pub const EMPTY_MEMBER_LIST: &str = "The member list is empty.";
    pub const HELP: &str = "\
Commands:
  add <payer> <amount> [description]  record an expense split equally among everyone
  balances                            show current balances
  expenses                            list recorded expenses
  settle                              compute the payments that settle all balances
  reset                               clear expenses and balances
  help                                show this help
  quit                                exit";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBERS_PROMPT: &str = "Enter the names of group members separated by commas:";
    pub const NO_MEMBERS_ENTERED: &str = "No members entered. Exiting.";
    pub const EXPENSE_ADDED: &str = "Expense added successfully!";
    pub const INVALID_AMOUNT: &str = "Please enter a valid numeric amount.";
    pub const NON_POSITIVE_AMOUNT: &str = "The amount must be greater than zero.";
    pub const AMOUNT_OUT_OF_RANGE: &str = "The amount is too large.";
    pub const EVERYONE_SETTLED: &str = "Everyone is settled up!";
    pub const NO_EXPENSES: &str = "No expenses recorded yet.";
    pub const LEDGER_RESET: &str = "Expenses and balances have been cleared.";
    pub const MEMBERS_ALREADY_SET: &str = "Members are already fixed for this session.";
    pub const EMPTY_MEMBER_LIST: &str = "The member list is empty.";
    pub const HELP: &str = "\
Commands:
  add <payer> <amount> [description]  record an expense split equally among everyone
  balances                            show current balances
  expenses                            list recorded expenses
  settle                              compute the payments that settle all balances
  reset                               clear expenses and balances
  help                                show this help
  quit                                exit";
}

pub use strings::*;

use std::fmt::Display;

#[cfg(feature = "ja")]
pub fn should_receive(member: impl Display, amount: impl Display) -> String {
    format!("{member} の受け取り: {amount}")
}

#[cfg(feature = "ja")]
pub fn owes(member: impl Display, amount: impl Display) -> String {
    format!("{member} の支払い: {amount}")
}

#[cfg(feature = "ja")]
pub fn is_settled(member: impl Display) -> String {
    format!("{member} は精算済みです。")
}

#[cfg(feature = "ja")]
pub fn pays(debtor: impl Display, creditor: impl Display, amount: impl Display) -> String {
    format!("{debtor} が {creditor} に支払う: {amount}")
}

#[cfg(feature = "ja")]
pub fn expense_entry(
    index: usize,
    payer: impl Display,
    amount: impl Display,
    description: &str,
) -> String {
    if description.is_empty() {
        format!("{index}. {payer} が {amount} を支払いました")
    } else {
        format!("{index}. {payer} が {amount} を支払いました ({description})")
    }
}

#[cfg(feature = "ja")]
pub fn duplicate_member(name: impl Display) -> String {
    format!("メンバー '{name}' が重複しています")
}

#[cfg(feature = "ja")]
pub fn unknown_member(name: impl Display) -> String {
    format!("'{name}' はメンバーではありません")
}

#[cfg(feature = "ja")]
pub fn syntax_error(line: usize, detail: impl Display) -> String {
    format!("行 {line}: 構文エラー - {detail}")
}

#[cfg(feature = "ja")]
pub fn unknown_command(word: impl Display) -> String {
    format!("不明なコマンド '{word}' です。`help` で一覧を表示します。")
}

#[cfg(not(feature = "ja"))]
pub fn should_receive(member: impl Display, amount: impl Display) -> String {
    format!("{member} should receive: {amount}")
}

#[cfg(not(feature = "ja"))]
pub fn owes(member: impl Display, amount: impl Display) -> String {
    format!("{member} owes: {amount}")
}

#[cfg(not(feature = "ja"))]
pub fn is_settled(member: impl Display) -> String {
    format!("{member} is settled.")
}

#[cfg(not(feature = "ja"))]
pub fn pays(debtor: impl Display, creditor: impl Display, amount: impl Display) -> String {
    format!("{debtor} pays {creditor}: {amount}")
}

#[cfg(not(feature = "ja"))]
pub fn expense_entry(
    index: usize,
    payer: impl Display,
    amount: impl Display,
    description: &str,
) -> String {
    if description.is_empty() {
        format!("{index}. {payer} paid {amount}")
    } else {
        format!("{index}. {payer} paid {amount} ({description})")
    }
}

#[cfg(not(feature = "ja"))]
pub fn duplicate_member(name: impl Display) -> String {
    format!("Member '{name}' is listed more than once")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_member(name: impl Display) -> String {
    format!("'{name}' is not a member of this group")
}

#[cfg(not(feature = "ja"))]
pub fn syntax_error(line: usize, detail: impl Display) -> String {
    format!("Line {line}: Syntax error - {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_command(word: impl Display) -> String {
    format!("Unknown command '{word}'. Type `help` for a list of commands.")
}
