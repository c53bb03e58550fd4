// ウォームアップ（keep-alive）プローブ
//
// 実行環境を温めておくための軽量な呼び出しを判定する。
// WarmupFilterだけが参照し、後段には渡さない。

use serde::{Deserialize, Deserializer};

use super::json_field::deserialize_string_field;

/// プローブに対する固定応答
pub const PONG: &str = "pong";

/// プローブマーカー: `{"ping": "<非空文字列>"}`
///
/// キー名の大文字小文字は区別せず、重複時は最後の値を採用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// pingフィールド（空ならプローブではない）
    pub ping: String,
}

impl<'de> Deserialize<'de> for Probe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_string_field(deserializer, "ping", "struct Probe").map(|ping| Probe { ping })
    }
}

impl Probe {
    /// ペイロードがプローブかどうかを判定
    ///
    /// デコードに成功し、かつpingが非空の場合のみ`Some`を返す。
    /// デコード失敗は「プローブではない」として吸収する。
    pub fn detect(payload: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Option<Probe>>(payload)
            .ok()
            .flatten()
            .filter(|probe| !probe.ping.is_empty())
    }
}
