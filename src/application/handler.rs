/// ハンドラー抽象
///
/// ミドルウェアチェーンの各層が従う共通の形。
/// 実行コンテキストと生のペイロードを受け取り、任意のJSON値またはエラーを返す。
use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;
use thiserror::Error;

use crate::application::ProcessError;
use crate::domain::EnvelopeError;

/// チェーン全体のエラー型
///
/// どのエラーもその呼び出しにとって終端であり、内部で再試行しない。
#[derive(Debug, Error)]
pub enum ChainError {
    /// ペイロードのデコード・検証エラー
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// ビジネスロジックのエラー（そのまま通過させる）
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// エラー種別（ログ・テストでの分類用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// JSONとして不正、または形状が一致しない
    Decode,
    /// 必須フィールドが不足
    Validation,
    /// ビジネスロジックが返したエラー
    Process,
}

impl ErrorKind {
    /// ログ出力用の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Decode => "decode",
            ErrorKind::Validation => "validation",
            ErrorKind::Process => "process",
        }
    }
}

impl ChainError {
    /// エラー種別を取得
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChainError::Envelope(EnvelopeError::Decode(_)) => ErrorKind::Decode,
            ChainError::Envelope(EnvelopeError::Validation(_)) => ErrorKind::Validation,
            ChainError::Process(_) => ErrorKind::Process,
        }
    }
}

/// チェーンの1層
#[async_trait]
pub trait Handler: Send + Sync {
    /// 1回の呼び出しを処理
    ///
    /// # 引数
    /// * `ctx` - ホストが提供する実行コンテキスト（変更しない）
    /// * `payload` - 未デコードのJSONペイロード
    async fn handle(&self, ctx: &Context, payload: &[u8]) -> Result<Value, ChainError>;
}

/// ハンドラーを包んで新しいハンドラーを作るミドルウェア
pub trait Middleware: Send + Sync {
    /// ログ・検査用の層の名前
    fn name(&self) -> &'static str;

    /// 次の層を包んだハンドラーを作成
    fn wrap(&self, next: Arc<dyn Handler>) -> Arc<dyn Handler>;
}
