/// Lambdaエントリポイント
///
/// 起動時にミドルウェアチェーンを一度だけ構築し、呼び出しごとに
/// 未デコードのペイロードと実行コンテキストをチェーンへ渡す。
///
/// # チェーン構成
/// RequestSpan → Warmup（pingならpongを返して終了）→ EnvelopeParser → DefaultProcessor
use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::value::RawValue;
use serde_json::Value;
use stay_toasty::application::{build_default_chain, Handler};
use stay_toasty::infrastructure::{init_logging, LoggingConfig, TracingInvocationLog};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging(&LoggingConfig::from_env());

    let chain = build_default_chain(Arc::new(TracingInvocationLog));

    // Lambda関数を初期化して実行
    let func = service_fn(move |event: LambdaEvent<Box<RawValue>>| {
        let chain = chain.clone();
        async move { handler(chain.as_ref(), event).await }
    });
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// チェーンのエラーは呼び出しの失敗としてそのままランタイムへ返す。
async fn handler(chain: &dyn Handler, event: LambdaEvent<Box<RawValue>>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();

    match chain.handle(&context, payload.get().as_bytes()).await {
        Ok(value) => Ok(value),
        Err(err) => {
            error!(
                request_id = %context.request_id,
                error_kind = err.kind().as_str(),
                error = %err,
                "呼び出し失敗"
            );
            Err(err.into())
        }
    }
}
