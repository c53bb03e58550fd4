// アプリケーション層モジュール
pub mod chain;
pub mod envelope_parser;
pub mod event_processor;
pub mod handler;
pub mod request_span;
pub mod warmup_filter;

// 再エクスポート
pub use chain::{build_default_chain, default_chain, HandlerChain};
pub use envelope_parser::EnvelopeParser;
pub use event_processor::{DefaultProcessor, EventProcessor, ProcessError};
pub use handler::{ChainError, ErrorKind, Handler, Middleware};
pub use request_span::RequestSpanLayer;
pub use warmup_filter::{WarmupFilter, WarmupLayer};
