use env_logger::Env;

/// 初始化日誌，`RUST_LOG` 優先於預設層級
pub fn init(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .try_init();
}

/// CLI 使用：`verbose` 時顯示 debug 訊息
pub fn init_cli(verbose: bool) {
    init(if verbose { "debug" } else { "info" });
}
