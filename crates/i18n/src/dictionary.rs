use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;

/// A single node of a language dictionary: a translated string, an ordered
/// list, or a nested table keyed by path segment.
/// （語言字典中的節點：翻譯字串、有序清單，或以路徑片段為鍵的巢狀表。）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DictValue {
    Text(String),
    List(Vec<DictValue>),
    Table(BTreeMap<String, DictValue>),
}

impl DictValue {
    /// Returns the string content of a `Text` node.
    /// （回傳 `Text` 節點的字串內容。）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DictValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the items of a `List` node.
    /// （回傳 `List` 節點的項目。）
    pub fn as_list(&self) -> Option<&[DictValue]> {
        match self {
            DictValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Looks up a direct child of a `Table` node.
    /// （查詢 `Table` 節點的直接子項。）
    pub fn get(&self, key: &str) -> Option<&DictValue> {
        match self {
            DictValue::Table(table) => table.get(key),
            _ => None,
        }
    }

    /// Text of the `key` child, or `fallback` when absent or not text.
    /// Used by renderers walking list entries such as FAQ question/answer
    /// tables.
    /// （取得子項 `key` 的文字，缺少或非文字時回傳 `fallback`；供走訪清單
    /// 項目的渲染器使用。）
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).and_then(DictValue::as_text).unwrap_or(fallback)
    }
}

/// The full set of translated strings for one language, loaded as one unit
/// and replaced wholesale on a language switch.
/// （單一語言的完整翻譯字串集，整份載入；切換語言時整份替換。）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: BTreeMap<String, DictValue>,
}

impl Dictionary {
    /// Walks a dot-delimited path through the value tree. `None` when any
    /// segment is absent or the traversal reaches a non-table value with
    /// segments remaining.
    /// （沿著以點分隔的路徑走訪值樹；任一片段缺少，或在尚有片段時碰到
    /// 非表節點，則回傳 `None`。）
    pub fn resolve(&self, path: &str) -> Option<&DictValue> {
        if path.is_empty() {
            return None;
        }
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Resolves a path to display text. An unresolved path (or one that lands
    /// on a list or table) yields the path string itself, which doubles as
    /// the visible missing-translation marker.
    /// （解析路徑為顯示文字；無法解析（或解析結果為清單、表）時回傳路徑
    /// 字串本身，作為缺譯的可見標記。）
    pub fn text<'a>(&'a self, path: &'a str) -> Cow<'a, str> {
        match self.resolve(path) {
            Some(DictValue::Text(value)) => Cow::Borrowed(value.as_str()),
            _ => Cow::Borrowed(path),
        }
    }

    /// Resolves a path to a list; anything else yields an empty slice so
    /// callers can iterate unconditionally.
    /// （解析路徑為清單；其他情形回傳空切片，呼叫端可直接迭代。）
    pub fn list(&self, path: &str) -> &[DictValue] {
        match self.resolve(path) {
            Some(DictValue::List(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Flattens the tree into sorted dotted key paths for every leaf.
    /// Lists count as leaves. Used by the pack validators.
    /// （將值樹攤平為所有葉節點的點路徑；清單視為葉節點，供語言包驗證
    /// 工具使用。）
    pub fn flat_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for (key, value) in &self.root {
            collect_keys(key, value, &mut keys);
        }
        keys
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// True when the dictionary carries no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_keys(prefix: &str, value: &DictValue, out: &mut Vec<String>) {
    match value {
        DictValue::Table(table) => {
            for (key, child) in table {
                collect_keys(&format!("{prefix}.{key}"), child, out);
            }
        }
        DictValue::Text(_) | DictValue::List(_) => out.push(prefix.to_string()),
    }
}
