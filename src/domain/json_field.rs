// 単一文字列フィールドのJSONオブジェクトデコード
//
// EventとProbeで共通のデコード規則:
// - キー名はASCIIの大文字小文字を区別せずに照合する
// - 同じキーが複数ある場合は最後の値を採用する
// - 値がnullの場合はそれまでの値を変更しない（未設定なら空文字列）
// - 未知のキーは無視する
// - オブジェクト以外（配列・数値・文字列）はデコードエラー

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::Deserializer;

struct StringFieldVisitor {
    field: &'static str,
    expecting: &'static str,
}

impl<'de> Visitor<'de> for StringFieldVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value = String::new();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(self.field) {
                if let Some(next) = map.next_value::<Option<String>>()? {
                    value = next;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(value)
    }
}

/// JSONオブジェクトから指定フィールドの文字列値を取り出す
///
/// # 引数
/// * `field` - 照合するフィールド名
/// * `expecting` - 型不一致時のエラーメッセージに使う期待値の説明
pub(crate) fn deserialize_string_field<'de, D>(
    deserializer: D,
    field: &'static str,
    expecting: &'static str,
) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(StringFieldVisitor { field, expecting })
}
