/// 呼び出し診断ログ
///
/// ミドルウェアチェーンが出力する診断ログを抽象化する。
/// 本番では`TracingInvocationLog`（tracing経由でCloudWatchへ出力）、
/// テストでは記録用モックを注入する。
use lambda_runtime::Context;
use tracing::info;

use crate::domain::{Event, Probe};

/// 診断ログ出力用トレイト
pub trait InvocationLog: Send + Sync {
    /// プローブ（ping）を受信した
    fn probe_received(&self, ctx: &Context, probe: &Probe);

    /// 通常イベントの処理を開始した
    fn processing_event(&self, ctx: &Context, event: &Event);
}

/// tracingクレートへ出力するInvocationLog実装
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInvocationLog;

impl InvocationLog for TracingInvocationLog {
    fn probe_received(&self, ctx: &Context, probe: &Probe) {
        info!(
            request_id = %ctx.request_id,
            event_type = "ping",
            ping = %probe.ping,
            "ping"
        );
    }

    fn processing_event(&self, ctx: &Context, event: &Event) {
        info!(
            request_id = %ctx.request_id,
            event_type = "event",
            generic_field_length = event.generic_field.len(),
            "processing event"
        );
    }
}
