// 呼び出しスパン
//
// 各呼び出しをrequest_id付きのtracingスパンで包む素通しの層。
// 自身はログを出力せず、ペイロードと結果に手を加えない。

use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;
use tracing::{info_span, Instrument};

use crate::application::{ChainError, Handler, Middleware};

pub struct RequestSpan {
    next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for RequestSpan {
    async fn handle(&self, ctx: &Context, payload: &[u8]) -> Result<Value, ChainError> {
        let span = info_span!(
            "invocation",
            request_id = %ctx.request_id,
            function_arn = %ctx.invoked_function_arn
        );

        self.next.handle(ctx, payload).instrument(span).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpanLayer;

impl Middleware for RequestSpanLayer {
    fn name(&self) -> &'static str {
        "request_span"
    }

    fn wrap(&self, next: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(RequestSpan { next })
    }
}
