//! # Config 模块
//!
//! 宿主传入的配置值对象与动画参数解析链。
//!
//! ## 解析优先级
//!
//! ```text
//! 显式逐项覆盖  >  命名预设默认  >  库级默认（defaults 模块）
//! ```
//!
//! 覆盖项存在时总是优先于预设；`from` 覆盖会**整体**替换预设的
//! 初始状态，不做逐属性合并。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::easing::Ease;
use crate::preset::{AnimationType, PropertySet};
use crate::split::SplitMode;

/// 库级默认参数
///
/// 解析链的最后一级兜底。`split_by` 与 `when_prop_change` 没有预设级
/// 取值，库级默认即为它们的实际默认。
pub mod defaults {
    use super::*;

    /// 默认级联间隔（秒）
    pub const STAGGER: f32 = 0.03;
    /// 默认时长（秒）
    pub const DURATION: f32 = 0.8;
    /// 默认缓动
    pub const EASE: Ease = Ease::Power4InOut;
    /// 默认拆分粒度
    pub const SPLIT_BY: SplitMode = SplitMode::Chars;
    /// 默认动画类型
    pub const ANIMATION_TYPE: AnimationType = AnimationType::FadeInUp;
    /// 默认内容变化策略
    pub const WHEN_PROP_CHANGE: ChangePolicy = ChangePolicy::Reanimate;
}

/// 内容变化策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangePolicy {
    /// 每次合格的内容变化都重放入场动画（含首次挂载）
    #[default]
    Reanimate,
    /// 就地协调，morph 连续单元的几何变化
    Morph,
    /// 至多一次初始入场动画，之后静态渲染
    None,
}

impl ChangePolicy {
    /// 策略名（配置表面使用的小写形式）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reanimate => "reanimate",
            Self::Morph => "morph",
            Self::None => "none",
        }
    }
}

impl FromStr for ChangePolicy {
    type Err = ();

    /// 从配置字符串解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reanimate" => Ok(Self::Reanimate),
            "morph" => Ok(Self::Morph),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// 宿主传入的配置
///
/// 所有字段都是可选覆盖；`None` 表示沿用预设/库级默认。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphProps {
    /// 拆分粒度
    pub split_by: Option<SplitMode>,
    /// 命名动画预设
    pub animation_type: Option<AnimationType>,
    /// 级联间隔覆盖（秒）
    pub stagger: Option<f32>,
    /// 时长覆盖（秒）
    pub duration: Option<f32>,
    /// 启动延迟（秒）
    pub delay: Option<f32>,
    /// 缓动覆盖
    pub ease: Option<Ease>,
    /// 初始状态覆盖（整体替换预设的 from 状态）
    pub from: Option<PropertySet>,
    /// 内容变化策略
    pub when_prop_change: Option<ChangePolicy>,
}

impl MorphProps {
    /// 生效的拆分粒度
    pub fn split_mode(&self) -> SplitMode {
        self.split_by.unwrap_or(defaults::SPLIT_BY)
    }

    /// 生效的内容变化策略
    pub fn policy(&self) -> ChangePolicy {
        self.when_prop_change.unwrap_or(defaults::WHEN_PROP_CHANGE)
    }

    /// 生效的动画类型
    pub fn animation(&self) -> AnimationType {
        self.animation_type.unwrap_or(defaults::ANIMATION_TYPE)
    }

    /// 解析出本轮动画的全部参数
    ///
    /// 这是参数解析的**唯一入口**：逐项应用"显式覆盖 > 预设默认"。
    pub fn resolve(&self) -> ResolvedAnimation {
        let preset = self.animation().preset();
        ResolvedAnimation {
            from: self.from.clone().unwrap_or(preset.from),
            duration: self.duration.unwrap_or(preset.duration),
            stagger: self.stagger.unwrap_or(preset.stagger),
            delay: self.delay,
            ease: self.ease.unwrap_or(preset.ease),
        }
    }
}

/// 解析完成的动画参数
///
/// 一轮内容变化周期内三类动画（morph / 入场 / 离场）共用同一组参数。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAnimation {
    /// 入场初始状态（离场动画反向动画至此状态）
    pub from: PropertySet,
    /// 时长（秒）
    pub duration: f32,
    /// 级联间隔（秒）
    pub stagger: f32,
    /// 启动延迟（秒）
    pub delay: Option<f32>,
    /// 缓动曲线
    pub ease: Ease,
}

impl Default for ResolvedAnimation {
    /// 库级默认参数（无预设参与时的兜底）
    fn default() -> Self {
        Self {
            from: PropertySet::default(),
            duration: defaults::DURATION,
            stagger: defaults::STAGGER,
            delay: None,
            ease: defaults::EASE,
        }
    }
}
