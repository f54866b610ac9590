//! # Command 模块
//!
//! 运行时向宿主发出的声明式动画请求与清理动作。
//! 这是运行时与 tween 引擎 / 布局差分工具之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：请求描述"做什么"，不描述"怎么做"
//! - **无副作用**：请求本身不执行任何操作
//! - **引擎无关**：不包含任何具体 tween 引擎的类型；宿主把请求翻译成
//!   一次性的 tween 调用（targets + 属性增量 + 时序 + 完成回调）

use crate::config::ResolvedAnimation;
use crate::easing::Ease;
use crate::preset::PropertySet;
use crate::split::SplitMode;
use crate::unit::UnitId;

/// 动画时序参数
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    /// 单个单元的动画时长（秒）
    pub duration: f32,
    /// 相邻单元的级联间隔（秒）
    pub stagger: f32,
    /// 启动延迟（秒）
    pub delay: Option<f32>,
    /// 缓动曲线
    pub ease: Ease,
}

impl ResolvedAnimation {
    /// 提取时序参数
    pub fn timing(&self) -> Timing {
        Timing {
            duration: self.duration,
            stagger: self.stagger,
            delay: self.delay,
            ease: self.ease,
        }
    }
}

/// 运行时向宿主发出的动画请求
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationRequest {
    /// 连续单元的几何 morph（FLIP：从捕获快照插值到当前布局）
    ///
    /// 宿主把此请求交给布局差分工具。`entering` 中的单元不存在于快照中，
    /// 应通过差分工具的 onEnter 钩子以 `enter_from` 为初始状态播放
    /// 入场动画。
    MorphLayout {
        /// 全部当前单元（按新列表顺序）
        targets: Vec<UnitId>,
        /// 本轮新建的单元
        entering: Vec<UnitId>,
        /// 入场动画的初始状态
        enter_from: PropertySet,
        /// 时序参数
        timing: Timing,
    },

    /// 离场动画
    ///
    /// 目标单元已被绝对定位在其捕获几何处，从当前自然状态反向动画至
    /// `to`（即预设的 from 状态），表现为消失。宿主**必须**在完成回调中
    /// 调用会话的 `complete_exit`（重复调用是安全的）。
    Exit {
        /// 离场单元
        targets: Vec<UnitId>,
        /// 动画终点状态
        to: PropertySet,
        /// 时序参数
        timing: Timing,
    },

    /// 整段重放入场动画（reanimate / none 策略）
    ///
    /// 宿主按 `split` 粒度就地拆分已渲染文本，并以 `from` 为初始状态
    /// 对拆分产物播放入场动画。与之配对的撤销动作见
    /// [`CleanupAction::RevertSplit`]。
    Replay {
        /// 拆分粒度
        split: SplitMode,
        /// 入场动画的初始状态
        from: PropertySet,
        /// 时序参数
        timing: Timing,
    },
}

impl AnimationRequest {
    /// 请求种类名（日志用）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MorphLayout { .. } => "morph_layout",
            Self::Exit { .. } => "exit",
            Self::Replay { .. } => "replay",
        }
    }
}

/// 组件卸载或动画依赖变化时宿主必须执行的清理动作
///
/// 对应"清理句柄"契约：上一轮动画的就地改动必须在下一轮开始前撤销。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupAction {
    /// 撤销就地文本拆分，恢复原始子树
    RevertSplit,
}
