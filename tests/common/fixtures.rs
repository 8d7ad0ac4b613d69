//! Static dictionaries used across harnesses.

use std::path::{Path, PathBuf};

/// The fruit vocabulary used by the canonical prefix-query scenario.
pub const FRUIT: &[(&str, &str)] = &[("apple", "R1"), ("apricot", "R2"), ("banana", "R3")];

/// Mixed-case, multi-word terms.
pub const PLACES: &[(&str, &str)] = &[
    ("New York", "纽约"),
    ("New York City", "纽约市"),
    ("Newark", "纽瓦克"),
    ("York", "约克"),
    ("New Amsterdam", "新阿姆斯特丹"),
];

/// A small dictionary in the on-disk JSON shape.
pub const DICT_JSON: &str = r#"[
    {"origin_name": "apple", "trans_name": "苹果", "pos": "n."},
    {"origin_name": "apricot", "trans_name": "杏"},
    {"origin_name": "banana", "trans_name": "香蕉"},
    {"origin_name": "New York", "trans_name": "纽约"},
    {"origin_name": "cat", "trans_name": "猫"},
    {"origin_name": "catalog", "trans_name": "目录"},
    {"origin_name": "apple", "trans_name": "苹果（重复）"}
]"#;

/// Write `json` to `dict.json` inside `dir` and return its path.
pub fn write_dict(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("dict.json");
    std::fs::write(&path, json).expect("write test dictionary");
    path
}
