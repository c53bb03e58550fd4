/// ミドルウェアチェーンの構築
///
/// 層の並びを明示的なリスト（外側が先頭）として保持し、
/// 起動時に一度だけ畳み込んで単一のハンドラーを作る。
/// 構築後にチェーンを組み替えることはない。
use std::sync::Arc;

use crate::application::{
    DefaultProcessor, EnvelopeParser, Handler, Middleware, RequestSpanLayer, WarmupLayer,
};
use crate::infrastructure::InvocationLog;

/// ミドルウェアチェーンのビルダー
pub struct HandlerChain {
    /// 最も内側のハンドラー
    terminal: Arc<dyn Handler>,
    /// 外側から順に並んだミドルウェア
    layers: Vec<Arc<dyn Middleware>>,
}

impl HandlerChain {
    /// 最も内側のハンドラーを指定してチェーンを作成
    pub fn new(terminal: impl Handler + 'static) -> Self {
        Self {
            terminal: Arc::new(terminal),
            layers: Vec::new(),
        }
    }

    /// ミドルウェアを内側に1層追加
    ///
    /// 先に追加した層ほど外側（先に評価される）になる。
    pub fn layer(mut self, middleware: impl Middleware + 'static) -> Self {
        self.layers.push(Arc::new(middleware));
        self
    }

    /// 層の名前を外側から順に取得
    pub fn layers(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    /// 内側から順に畳み込んで単一のハンドラーを作成
    pub fn build(self) -> Arc<dyn Handler> {
        self.layers
            .iter()
            .rev()
            .fold(self.terminal, |next, layer| layer.wrap(next))
    }
}

/// 標準のチェーン構成
///
/// RequestSpan → Warmup → EnvelopeParser(DefaultProcessor)
pub fn default_chain(log: Arc<dyn InvocationLog>) -> HandlerChain {
    HandlerChain::new(EnvelopeParser::new(DefaultProcessor::new(log.clone())))
        .layer(RequestSpanLayer)
        .layer(WarmupLayer::new(log))
}

/// 標準のチェーンを構築してハンドラーを返す
pub fn build_default_chain(log: Arc<dyn InvocationLog>) -> Arc<dyn Handler> {
    default_chain(log).build()
}
