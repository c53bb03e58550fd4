/// 汎用イベントモデル
///
/// Lambdaが通常リクエストとして受け取るペイロードを型付きで保持し、
/// デコードと必須フィールドの検証を行う。
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::json_field::deserialize_string_field;

/// イベント検証エラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventValidationError {
    /// GenericFieldが未設定または空文字列
    #[error("GenericField must be populated")]
    MissingGenericField,
}

/// エンベロープ（ペイロード）解析エラー
///
/// 「JSONとして不正」と「内容が不正」を区別する。
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// JSONとしてデコードできない、または形状が一致しない
    ///
    /// 下層のserde_jsonエラーをそのまま表示する。
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// デコードは成功したが必須フィールドが不足
    #[error(transparent)]
    Validation(#[from] EventValidationError),
}

/// Lambdaの呼び出しイベント
///
/// 呼び出しごとに生成され、呼び出し終了とともに破棄される。
/// デコード規則は`json_field`を参照（キーの大文字小文字は区別しない）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    /// 汎用フィールド（必須・非空）
    ///
    /// 欠落・nullは空文字列としてデコードし、検証で拒否する。
    #[serde(rename = "GenericField")]
    pub generic_field: String,
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_string_field(deserializer, "GenericField", "struct Event").map(Event::new)
    }
}

impl Event {
    /// 新しいEventを作成
    pub fn new(generic_field: impl Into<String>) -> Self {
        Self {
            generic_field: generic_field.into(),
        }
    }

    /// 生のペイロードをデコードし、検証済みのEventを返す
    ///
    /// # 戻り値
    /// * `Ok(Event)` - デコード・検証ともに成功
    /// * `Err(EnvelopeError::Decode)` - JSONとして不正
    /// * `Err(EnvelopeError::Validation)` - GenericFieldが空
    ///
    /// ペイロード全体がnullの場合はフィールド欠落と同じく検証エラーになる。
    pub fn parse(payload: &[u8]) -> Result<Self, EnvelopeError> {
        let event = serde_json::from_slice::<Option<Event>>(payload)?.unwrap_or_default();
        event.validate()?;
        Ok(event)
    }

    /// 必須フィールドを検証
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.generic_field.is_empty() {
            return Err(EventValidationError::MissingGenericField);
        }
        Ok(())
    }
}
