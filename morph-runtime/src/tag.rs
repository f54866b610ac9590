//! # Tag 模块
//!
//! 受支持文本标签的静态注册表。
//!
//! 支持集在编译期枚举完毕；向工厂请求未注册的标签会得到显式的
//! [`MorphError::UnsupportedTag`]，而不是运行期的动态分派兜底。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MorphError, MorphResult};

/// 受支持的文本标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Div,
    Strong,
    Em,
    Small,
    Label,
    A,
    Li,
    Blockquote,
    Figcaption,
    Code,
}

impl TextTag {
    /// 全部受支持的标签
    pub const ALL: [TextTag; 18] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::P,
        Self::Span,
        Self::Div,
        Self::Strong,
        Self::Em,
        Self::Small,
        Self::Label,
        Self::A,
        Self::Li,
        Self::Blockquote,
        Self::Figcaption,
        Self::Code,
    ];

    /// 标签名
    pub fn name(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Span => "span",
            Self::Div => "div",
            Self::Strong => "strong",
            Self::Em => "em",
            Self::Small => "small",
            Self::Label => "label",
            Self::A => "a",
            Self::Li => "li",
            Self::Blockquote => "blockquote",
            Self::Figcaption => "figcaption",
            Self::Code => "code",
        }
    }

    /// 按标签名查找
    ///
    /// 未注册的标签立即失败，这是编程错误，不可恢复。
    pub fn from_name(name: &str) -> MorphResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == name)
            .ok_or_else(|| MorphError::UnsupportedTag {
                tag: name.to_string(),
            })
    }
}

impl FromStr for TextTag {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for TextTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
