//! # Unit 模块
//!
//! 定义可动画的内容单元（Unit）及其几何信息。
//!
//! ## 设计说明
//!
//! - `UnitId` 由会话内部计数器分配，实例生命周期内单调递增、永不复用
//! - 协调（reconcile）匹配成功的单元保留原有 id，动画身份因此跨渲染连续
//! - `LeavingUnit` 是被判定为离场的单元，附带布局快照中捕获的几何信息

use serde::{Deserialize, Serialize};

/// 单元唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u64);

impl UnitId {
    /// 获取内部 id 值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单元 id 生成器
///
/// 会话级、单调递增。实例生命周期内分配过的 id 永不复用，
/// 即使对应单元早已离场。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitIdGen {
    next: u64,
}

impl UnitIdGen {
    /// 创建新的生成器（从 0 开始）
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// 分配下一个 id
    pub fn next_id(&mut self) -> UnitId {
        let id = UnitId(self.next);
        self.next += 1;
        id
    }

    /// 下一个将被分配的 id 值（不消耗）
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// 内容单元
///
/// 一个可独立寻址、独立动画的内容 token：
/// 字符、词、空白段、行片段或嵌入元素的占位符。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// 动画身份
    pub id: UnitId,
    /// 单元内容（文本或占位符 token）
    pub content: String,
}

impl Unit {
    /// 创建新单元
    pub fn new(id: UnitId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// 是否为纯空白单元
    pub fn is_whitespace(&self) -> bool {
        !self.content.is_empty() && self.content.chars().all(char::is_whitespace)
    }

    /// 渲染 key（`"<id>-<content>"`），用于宿主的列表 diff
    pub fn key(&self) -> String {
        format!("{}-{}", self.id.0, self.content)
    }
}

/// 单元几何信息
///
/// 坐标相对于容器包围盒的原点，因此无论文档滚动或容器位置如何，
/// 单元都可以在容器内被绝对定位回原处。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitBounds {
    /// 距容器顶部的偏移
    pub top: f32,
    /// 距容器左侧的偏移
    pub left: f32,
    /// 宽度
    pub width: f32,
    /// 高度
    pub height: f32,
}

impl UnitBounds {
    /// 原点处的零尺寸盒（查询失败时的退化值）
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// 创建几何信息
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// 换算为以 `origin` 为原点的相对几何（尺寸不变）
    pub fn relative_to(&self, origin: &UnitBounds) -> UnitBounds {
        UnitBounds {
            top: self.top - origin.top,
            left: self.left - origin.left,
            width: self.width,
            height: self.height,
        }
    }
}

/// 离场单元
///
/// 协调中未被复用的旧单元，在其创建时刻捕获了旧布局下的几何信息。
/// 离场动画完成的回调触发后，由会话统一销毁。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavingUnit {
    /// 原单元
    pub unit: Unit,
    /// 捕获的几何信息（容器相对坐标）
    pub bounds: UnitBounds,
}

impl LeavingUnit {
    /// 创建离场单元
    pub fn new(unit: Unit, bounds: UnitBounds) -> Self {
        Self { unit, bounds }
    }

    /// 单元 id
    pub fn id(&self) -> UnitId {
        self.unit.id
    }
}
