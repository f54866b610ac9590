//! # Split 模块
//!
//! Tokenizer：把规范化后的文本按拆分粒度切分为有序的内容单元序列。
//!
//! ## 拆分模式
//!
//! ```text
//! chars  -> 占位符保持原子，其余文本逐字符拆分
//! words  -> 词、空白段、占位符各自成为独立单元
//! lines  -> 仅在占位符边界拆分（部分实现，见模块末尾说明）
//! ```
//!
//! ## 设计原则
//!
//! - 手写扫描，不依赖正则
//! - 纯函数：输出只由输入决定，无隐藏状态
//! - 占位符身份以 [`ElementMap`] 登记为准，文本里碰巧长得像占位符的
//!   片段按普通文本处理
//!
//! 注意：`lines` 模式目前只在嵌入元素边界分段，并不做真正的文本
//! 行边界拆分。这是一个已知的部分实现，最终行为尚未定案。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::content::ElementMap;

/// 拆分粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// 按字符拆分
    #[default]
    Chars,
    /// 按词与空白段拆分
    Words,
    /// 仅按嵌入元素边界拆分
    Lines,
}

impl SplitMode {
    /// 模式名（配置表面使用的小写形式）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chars => "chars",
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }
}

impl FromStr for SplitMode {
    type Err = ();

    /// 从配置字符串解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chars" => Ok(Self::Chars),
            "words" => Ok(Self::Words),
            "lines" => Ok(Self::Lines),
            _ => Err(()),
        }
    }
}

/// 占位符 token 的结构常量
const PLACEHOLDER_PREFIX: &str = "__ELEMENT_";
const PLACEHOLDER_SUFFIX: &str = "__";

/// 在 `text` 中从字节位置 `from` 起查找下一个形如 `__ELEMENT_<n>__` 的
/// 候选 token，返回其字节区间 `[start, end)`
///
/// 序号接受任意位数的十进制数字。
fn find_placeholder(text: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;
    while search < text.len() {
        let offset = text[search..].find(PLACEHOLDER_PREFIX)?;
        let start = search + offset;
        let digits_start = start + PLACEHOLDER_PREFIX.len();
        let digits_len = text[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits_len > 0 && text[digits_start + digits_len..].starts_with(PLACEHOLDER_SUFFIX) {
            return Some((start, digits_start + digits_len + PLACEHOLDER_SUFFIX.len()));
        }
        // 候选不合法（无数字或缺少结尾），从下一个字节继续
        search = start + 1;
    }
    None
}

/// 把文本切分为"占位符 / 其余片段"序列，占位符原子入列，
/// 其余片段交给 `split_text` 进一步切分
fn split_segments(
    text: &str,
    elements: &ElementMap,
    mut split_text: impl FnMut(&str, &mut Vec<String>),
) -> Vec<String> {
    let mut units = Vec::new();
    let mut cursor = 0;
    let mut search = 0;

    while let Some((start, end)) = find_placeholder(text, search) {
        if !elements.contains(&text[start..end]) {
            // 形似占位符但未登记：按普通文本处理
            search = start + 1;
            continue;
        }
        if start > cursor {
            split_text(&text[cursor..start], &mut units);
        }
        units.push(text[start..end].to_string());
        cursor = end;
        search = end;
    }

    if cursor < text.len() {
        split_text(&text[cursor..], &mut units);
    }
    units
}

/// 把一个纯文本片段切分为词与空白段（两者都保留为独立单元）
fn split_words(segment: &str, units: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_is_whitespace = None;

    for ch in segment.chars() {
        let is_whitespace = ch.is_whitespace();
        if current_is_whitespace != Some(is_whitespace) {
            if !current.is_empty() {
                units.push(std::mem::take(&mut current));
            }
            current_is_whitespace = Some(is_whitespace);
        }
        current.push(ch);
    }
    if !current.is_empty() {
        units.push(current);
    }
}

/// 将规范化文本切分为有序的内容单元序列
///
/// 纯函数：同一输入永远得到同一输出。空输入产生空序列，
/// 下游各阶段都把空列表当作合法的 no-op 情形处理。
pub fn tokenize(text: &str, elements: &ElementMap, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Chars => split_segments(text, elements, |segment, units| {
            units.extend(segment.chars().map(|ch| ch.to_string()));
        }),
        SplitMode::Words => split_segments(text, elements, split_words),
        SplitMode::Lines => split_segments(text, elements, |segment, units| {
            if !segment.is_empty() {
                units.push(segment.to_string());
            }
        }),
    }
}
