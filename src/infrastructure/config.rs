// ログ設定
//
// 環境変数から出力形式とデフォルトログレベルを読み込む。
// 未設定・不正値の場合はデフォルト値を使用し、起動を失敗させない。

// ===========================================
// デフォルト値・環境変数名定義
// ===========================================

/// RUST_LOG未設定時のデフォルトログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 環境変数名: ログ出力形式（json | text）
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// 環境変数名: デフォルトログレベル
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON形式（CloudWatch Logs向け）
    #[default]
    Json,
    /// 人間が読みやすいコンパクト形式（ローカル実行向け）
    Text,
}

impl LogFormat {
    /// 文字列から出力形式を判定（大文字小文字は区別しない）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "pretty" | "compact" => Some(Self::Text),
            _ => None,
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// 出力形式
    pub format: LogFormat,
    /// RUST_LOG未設定時に使うフィルター文字列
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - LOG_FORMAT: `json`（デフォルト）または `text`
    /// - LOG_LEVEL: RUST_LOG未設定時のフィルター（デフォルト `info`）
    pub fn from_env() -> Self {
        let format = std::env::var(ENV_LOG_FORMAT)
            .ok()
            .and_then(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        let default_level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            format,
            default_level,
        }
    }
}
