//! # Content 模块
//!
//! 将宿主传入的混合子节点（文本 + 嵌入元素）规范化为单一字符串。
//! 嵌入的非文本元素以占位符 token `__ELEMENT_<index>__` 内联，
//! 同时产出占位符 → 元素的映射（[`ElementMap`]）。
//!
//! ## 设计说明
//!
//! - `ElementMap` 是派生数据，每次内容变化时整体重建，不跨渲染持久化
//! - 占位符只按 token 身份匹配，即使文本内容碰巧相等也不与纯文本单元混淆
//! - 文本中的换行/回车/制表符逐个替换为单个空格

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 宿主子节点
///
/// 宿主在每次渲染时把组件 children 翻译成这个序列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Child {
    /// 纯文本
    Text(String),
    /// 嵌入的非文本元素（如 `<br>`、`<img>`、行内组件）
    Element {
        /// 元素标签名
        tag: String,
    },
}

impl Child {
    /// 创建文本子节点
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// 创建嵌入元素子节点
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element { tag: tag.into() }
    }
}

/// 嵌入元素描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedElement {
    /// 元素在子节点序列中的占位符序号（宿主按此序号找回原始子元素）
    pub index: usize,
    /// 元素标签名
    pub tag: String,
}

impl EmbeddedElement {
    /// 是否为换行元素（渲染时按块级、零高度处理）
    pub fn is_line_break(&self) -> bool {
        self.tag.eq_ignore_ascii_case("br")
    }
}

/// 占位符 token → 嵌入元素映射
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementMap {
    entries: HashMap<String, EmbeddedElement>,
}

impl ElementMap {
    /// token 是否为已登记的占位符
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// 按占位符 token 查询元素
    pub fn get(&self, token: &str) -> Option<&EmbeddedElement> {
        self.entries.get(token)
    }

    /// 登记的元素数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, token: String, element: EmbeddedElement) {
        self.entries.insert(token, element);
    }
}

/// 规范化后的内容
///
/// 这是 tokenizer 的直接输入：一条含占位符的统一字符串，
/// 加上占位符映射。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedContent {
    /// 含占位符的统一字符串
    pub text: String,
    /// 占位符映射
    pub elements: ElementMap,
}

impl NormalizedContent {
    /// 生成第 `index` 个嵌入元素的占位符 token
    pub fn placeholder(index: usize) -> String {
        format!("__ELEMENT_{index}__")
    }

    /// 从子节点序列构建规范化内容
    pub fn from_children(children: &[Child]) -> Self {
        let mut text = String::new();
        let mut elements = ElementMap::default();
        let mut element_index = 0;

        for child in children {
            match child {
                Child::Text(raw) => {
                    for ch in raw.chars() {
                        text.push(if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch });
                    }
                }
                Child::Element { tag } => {
                    let token = Self::placeholder(element_index);
                    text.push_str(&token);
                    elements.insert(
                        token,
                        EmbeddedElement {
                            index: element_index,
                            tag: tag.clone(),
                        },
                    );
                    element_index += 1;
                }
            }
        }

        Self { text, elements }
    }

    /// 是否为空内容
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
