/// ビジネスハンドラー
///
/// 検証済みのEventに対して実際の業務処理を行う拡張ポイント。
/// 空のGenericFieldはここには届かない（EnvelopeParserで拒否済み）。
///
/// 長時間かかる実装は`Context::deadline`を確認し、
/// ホストのタイムアウトを超える前に`ProcessError`で処理を打ち切ること。
use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;
use thiserror::Error;

use crate::domain::Event;
use crate::infrastructure::InvocationLog;

/// ビジネスロジックのエラー型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// 処理に失敗
    #[error("event processing failed: {0}")]
    Failed(String),
}

/// 検証済みEventを処理するトレイト
#[async_trait]
pub trait EventProcessor: Send + Sync {
    /// Eventを処理し、結果の値を返す
    ///
    /// 戻り値はEnvelopeParserを経由してそのままホストへ返る。
    async fn process(&self, ctx: &Context, event: &Event) -> Result<Value, ProcessError>;
}

/// デフォルトのプレースホルダー実装
///
/// 診断ログを出力してnull（結果なし）を返す。
#[derive(Clone)]
pub struct DefaultProcessor {
    log: Arc<dyn InvocationLog>,
}

impl DefaultProcessor {
    pub fn new(log: Arc<dyn InvocationLog>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl EventProcessor for DefaultProcessor {
    async fn process(&self, ctx: &Context, event: &Event) -> Result<Value, ProcessError> {
        self.log.processing_event(ctx, event);

        Ok(Value::Null)
    }
}
