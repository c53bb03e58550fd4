/// ウォームアップフィルター
///
/// ペイロードがプローブ（`{"ping": "..."}`）なら後段を呼ばずに`"pong"`を返す。
/// それ以外は同じコンテキストとペイロードをそのまま次の層へ渡す。
/// プローブとしてのデコード失敗はエラーにしない（「プローブではない」とみなす）。
use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;

use crate::application::{ChainError, Handler, Middleware};
use crate::domain::{Probe, PONG};
use crate::infrastructure::InvocationLog;

/// ウォームアップフィルター本体
pub struct WarmupFilter {
    next: Arc<dyn Handler>,
    log: Arc<dyn InvocationLog>,
}

impl WarmupFilter {
    pub fn new(next: Arc<dyn Handler>, log: Arc<dyn InvocationLog>) -> Self {
        Self { next, log }
    }
}

#[async_trait]
impl Handler for WarmupFilter {
    async fn handle(&self, ctx: &Context, payload: &[u8]) -> Result<Value, ChainError> {
        if let Some(probe) = Probe::detect(payload) {
            self.log.probe_received(ctx, &probe);
            return Ok(Value::String(PONG.to_string()));
        }

        self.next.handle(ctx, payload).await
    }
}

/// WarmupFilterを構築するミドルウェア
#[derive(Clone)]
pub struct WarmupLayer {
    log: Arc<dyn InvocationLog>,
}

impl WarmupLayer {
    pub fn new(log: Arc<dyn InvocationLog>) -> Self {
        Self { log }
    }
}

impl Middleware for WarmupLayer {
    fn name(&self) -> &'static str {
        "warmup"
    }

    fn wrap(&self, next: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(WarmupFilter::new(next, self.log.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handler::tests::{FailingHandler, RecordingHandler};
    use crate::application::ErrorKind;
    use crate::infrastructure::invocation_log::tests::{LogEntry, RecordingInvocationLog};
    use serde_json::json;

    // ==================== テストヘルパー ====================

    fn create_test_filter() -> (WarmupFilter, RecordingHandler, RecordingInvocationLog) {
        let next = RecordingHandler::new(json!({"from": "next"}));
        let log = RecordingInvocationLog::new();
        let filter = WarmupFilter::new(Arc::new(next.clone()), Arc::new(log.clone()));
        (filter, next, log)
    }

    // ==================== プローブ判定 ====================

    #[tokio::test]
    async fn test_ping_returns_pong_without_calling_next() {
        let (filter, next, _) = create_test_filter();

        let result = filter
            .handle(&Context::default(), br#"{"ping": "keepalive"}"#)
            .await
            .unwrap();

        assert_eq!(result, json!("pong"));
        assert!(next.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ping_logs_probe_hit() {
        let (filter, _, log) = create_test_filter();
        let mut ctx = Context::default();
        ctx.request_id = "req-ping".to_string();

        filter.handle(&ctx, br#"{"ping": "x"}"#).await.unwrap();

        assert_eq!(
            log.entries(),
            vec![LogEntry::Ping {
                request_id: "req-ping".to_string(),
                ping: "x".to_string()
            }]
        );
    }

    /// 通常イベントのスキーマも満たすペイロードでもプローブが優先される
    #[tokio::test]
    async fn test_ping_takes_precedence_over_event_fields() {
        let (filter, next, _) = create_test_filter();

        let result = filter
            .handle(&Context::default(), br#"{"ping": "x", "GenericField": "y"}"#)
            .await
            .unwrap();

        assert_eq!(result, json!("pong"));
        assert!(next.calls().is_empty());
    }

    /// 後段がエラーを返す場合でもプローブは成功する
    #[tokio::test]
    async fn test_ping_short_circuits_failing_next() {
        let log = RecordingInvocationLog::new();
        let filter = WarmupFilter::new(Arc::new(FailingHandler), Arc::new(log));

        let result = filter.handle(&Context::default(), br#"{"ping": "x"}"#).await;

        assert_eq!(result.unwrap(), json!("pong"));
    }

    // ==================== 後段への転送 ====================

    #[tokio::test]
    async fn test_empty_ping_forwards_to_next() {
        let (filter, next, log) = create_test_filter();
        let payload = br#"{"ping": ""}"#;

        let result = filter.handle(&Context::default(), payload).await.unwrap();

        assert_eq!(result, json!({"from": "next"}));
        assert_eq!(next.calls(), vec![payload.to_vec()]);
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_regular_event_forwards_payload_unchanged() {
        let (filter, next, log) = create_test_filter();
        let payload = br#"{"GenericField": "x"}"#;

        filter.handle(&Context::default(), payload).await.unwrap();

        assert_eq!(next.calls(), vec![payload.to_vec()]);
        assert!(log.entries().is_empty());
    }

    /// プローブとしてのデコード失敗はエラーにせず後段へ渡す
    #[tokio::test]
    async fn test_invalid_json_forwards_to_next() {
        let (filter, next, _) = create_test_filter();

        let result = filter.handle(&Context::default(), b"not valid json").await;

        assert!(result.is_ok());
        assert_eq!(next.calls(), vec![b"not valid json".to_vec()]);
    }

    /// 後段のエラーはそのまま返す
    #[tokio::test]
    async fn test_next_error_is_returned_verbatim() {
        let log = RecordingInvocationLog::new();
        let filter = WarmupFilter::new(Arc::new(FailingHandler), Arc::new(log));

        let err = filter
            .handle(&Context::default(), br#"{"GenericField": ""}"#)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    // ==================== ミドルウェア ====================

    #[tokio::test]
    async fn test_layer_wraps_next() {
        let next = RecordingHandler::new(json!(1));
        let layer = WarmupLayer::new(Arc::new(RecordingInvocationLog::new()));
        let handler = layer.wrap(Arc::new(next.clone()));

        assert_eq!(layer.name(), "warmup");
        assert_eq!(
            handler.handle(&Context::default(), br#"{"ping": "x"}"#).await.unwrap(),
            json!("pong")
        );
        assert_eq!(
            handler.handle(&Context::default(), b"{}").await.unwrap(),
            json!(1)
        );
        assert_eq!(next.calls().len(), 1);
    }
}
