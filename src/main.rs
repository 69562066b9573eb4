use clap::Parser;

mod cli;
mod workflow;

fn main() {
    // コマンドライン引数を解析します（引数不足時はclapが使用法を表示して終了コード2で終了）
    let args = cli::Args::parse();

    // 失敗はすべて診断メッセージと終了コードで呼び出し元に伝える。
    // デコード失敗を握りつぶして正常終了することはない。
    if let Err(e) = workflow::run(args) {
        eprintln!("エラー: {}", e);
        std::process::exit(e.exit_code());
    }
}
