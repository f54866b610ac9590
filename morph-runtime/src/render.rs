//! # Render 模块
//!
//! 协调结果的声明式渲染模型。运行时不接触真实的文档树，只描述每个
//! 单元应该如何渲染；宿主负责把 [`RenderPlan`] 提交为实际元素。
//!
//! ## 约定
//!
//! - morph 策略下容器必须相对定位（离场单元要在容器内绝对定位）
//! - 宿主应把单元 id 标注在元素上（如 data 属性），
//!   供 [`LayoutCapture`](crate::layout::LayoutCapture) 查询几何使用
//!
//! 样式规则沿用既有渲染行为：单元渲染为行内块；纯空白单元保留空白；
//! 换行元素按块级、零高度处理；离场单元绝对定位在捕获几何处。

use serde::{Deserialize, Serialize};

use crate::content::ElementMap;
use crate::unit::{LeavingUnit, Unit, UnitBounds, UnitId};

/// 渲染计划
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// morph 策略：按单元渲染，容器需相对定位
    Morph {
        /// 当前单元（按列表顺序）
        units: Vec<RenderUnit>,
        /// 离场单元（渲染在当前单元之后）
        leaving: Vec<RenderUnit>,
    },
    /// 非 morph 策略：宿主原样渲染自己的子节点
    Raw,
}

/// 渲染内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderContent {
    /// 文本
    Text(String),
    /// 嵌入元素（宿主按占位符序号找回原始子元素）
    Element {
        /// 占位符序号
        index: usize,
        /// 元素标签名
        tag: String,
    },
}

/// 显示模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    /// 行内块
    InlineBlock,
    /// 块级（换行元素）
    Block,
}

/// 单元样式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStyle {
    /// 显示模式
    pub display: Display,
    /// 纯空白单元需保留空白（white-space: pre）
    pub preserve_whitespace: bool,
    /// 换行元素渲染为零高度
    pub collapse_height: bool,
    /// 离场单元：绝对定位在捕获几何处（容器相对坐标）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounds: Option<UnitBounds>,
}

/// 单个单元的渲染描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderUnit {
    /// 单元 id
    pub id: UnitId,
    /// 渲染 key（`"<id>-<content>"`，用于宿主的列表 diff）
    pub key: String,
    /// 渲染内容
    pub content: RenderContent,
    /// 样式
    pub style: UnitStyle,
}

fn build(unit: &Unit, elements: &ElementMap, absolute: Option<UnitBounds>) -> RenderUnit {
    let (content, style) = match elements.get(&unit.content) {
        Some(element) => {
            let line_break = element.is_line_break();
            (
                RenderContent::Element {
                    index: element.index,
                    tag: element.tag.clone(),
                },
                UnitStyle {
                    display: if line_break {
                        Display::Block
                    } else {
                        Display::InlineBlock
                    },
                    preserve_whitespace: false,
                    collapse_height: line_break,
                    absolute_bounds: absolute,
                },
            )
        }
        None => (
            RenderContent::Text(unit.content.clone()),
            UnitStyle {
                display: Display::InlineBlock,
                preserve_whitespace: unit.is_whitespace(),
                collapse_height: false,
                absolute_bounds: absolute,
            },
        ),
    };

    RenderUnit {
        id: unit.id,
        key: unit.key(),
        content,
        style,
    }
}

/// 渲染一个在场单元
pub fn render_unit(unit: &Unit, elements: &ElementMap) -> RenderUnit {
    build(unit, elements, None)
}

/// 渲染一个离场单元（绝对定位在捕获几何处）
pub fn render_leaving(leaving: &LeavingUnit, elements: &ElementMap) -> RenderUnit {
    build(&leaving.unit, elements, Some(leaving.bounds))
}
