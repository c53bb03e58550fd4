/// エンベロープパーサー
///
/// 生のペイロードをEventにデコード・検証し、成功時のみビジネスハンドラーへ委譲する。
/// デコードエラー・検証エラーはいずれもこの呼び出しの終端となる。
use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;

use crate::application::{ChainError, EventProcessor, Handler};
use crate::domain::Event;

/// ペイロードを型付きEventに変換してEventProcessorへ渡すハンドラー
pub struct EnvelopeParser<P>
where
    P: EventProcessor,
{
    processor: P,
}

impl<P> EnvelopeParser<P>
where
    P: EventProcessor,
{
    pub fn new(processor: P) -> Self {
        Self { processor }
    }
}

#[async_trait]
impl<P> Handler for EnvelopeParser<P>
where
    P: EventProcessor,
{
    async fn handle(&self, ctx: &Context, payload: &[u8]) -> Result<Value, ChainError> {
        let event = Event::parse(payload)?;

        // 成功・失敗ともに変換せずそのまま返す
        Ok(self.processor.process(ctx, &event).await?)
    }
}
