#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub fn usage(command: &str) -> &'static str {
    match command {
        "add" => "使い方: add <支払人> <金額> [説明]",
        "members" => "使い方: members <名前>, <名前>, ...",
        _ => "このコマンドは引数を取りません",
    }
}

#[cfg(feature = "ja")]
pub fn unparsed_detail(input: &str) -> String {
    format!("解析されていない入力: {input}")
}

#[cfg(not(feature = "ja"))]
pub fn usage(command: &str) -> &'static str {
    match command {
        "add" => "usage: add <payer> <amount> [description]",
        "members" => "usage: members <name>, <name>, ...",
        _ => "this command takes no arguments",
    }
}

#[cfg(not(feature = "ja"))]
pub fn unparsed_detail(input: &str) -> String {
    format!("Unparsed input: {input}")
}
