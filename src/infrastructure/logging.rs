/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式とテキスト形式の出力をサポートする。
use std::sync::Once;

use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use super::config::{LogFormat, LoggingConfig};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// 環境変数`RUST_LOG`を優先し、未設定なら設定のデフォルトレベルでフィルターを作成
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_level))
}

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use stay_toasty::infrastructure::{init_logging, LoggingConfig};
///
/// init_logging(&LoggingConfig::from_env());
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        // 既にグローバルサブスクライバーがある場合は設定が反映されないため標準エラーに報告する
        if let Err(err) = install_subscriber(config) {
            eprintln!(
                "Failed to install log subscriber (format={:?}): {}",
                config.format, err
            );
        }
    });
}

/// 設定に従ってグローバルサブスクライバーを登録する
fn install_subscriber(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_filter = build_env_filter(config);

    let fmt_layer = match config.format {
        // JSON形式のログレイヤー（Lambda/CloudWatch向け）
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .compact()
            .boxed(),
    };

    // サブスクライバーを構築して初期化
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
