//! # Session 模块
//!
//! 动画会话状态机。每个组件实例独占一个 [`AnimationSession`]，
//! 它是单元列表、离场列表与 id 计数器的**唯一所有者**，
//! 只通过状态机方法变更，外部不可直接修改。
//!
//! ## 状态机
//!
//! ```text
//! Idle ──begin_update──► Reconciling ──(快照捕获完成)──► LayoutCaptured
//!                                                            │ animate
//!                                                            ▼
//!        Settled ◄── complete_exit / 无离场单元 ──────── Animating
//! ```
//!
//! - `begin_update` 可从任意阶段进入：上一轮尚未 settle 就被新内容
//!   取代是正常情形，新周期直接开始
//! - `animate` 只允许在 `LayoutCaptured` 阶段调用（必须先让宿主提交
//!   新布局，几何插值才有意义）
//! - `complete_exit` 幂等；迟到的完成回调只清空离场列表，不干扰
//!   新一轮周期的阶段，也绝不复活已被取代的单元
//!
//! ## 挂起点
//!
//! `LayoutCaptured → Animating` 之间管线在逻辑上暂停，等待宿主把新的
//! 单元列表提交到文档树。这个顺序是强制的：新布局存在之前做几何插值
//! 不会产生任何视觉效果。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::AnimationRequest;
use crate::config::ResolvedAnimation;
use crate::content::{ElementMap, NormalizedContent};
use crate::error::{MorphError, MorphResult};
use crate::layout::{LayoutCapture, capture_leaving};
use crate::reconcile::reconcile;
use crate::render::{RenderPlan, render_leaving, render_unit};
use crate::split::{SplitMode, tokenize};
use crate::unit::{LeavingUnit, Unit, UnitId, UnitIdGen};

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// 空闲（尚未发生任何内容变化周期）
    #[default]
    Idle,
    /// 协调中（`begin_update` 内部的瞬态阶段）
    Reconciling,
    /// 快照已捕获，等待宿主提交新布局
    LayoutCaptured,
    /// 动画播放中（等待离场动画完成）
    Animating,
    /// 本轮周期结束
    Settled,
}

impl SessionPhase {
    /// 阶段名（错误信息与日志用）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Reconciling => "Reconciling",
            Self::LayoutCaptured => "LayoutCaptured",
            Self::Animating => "Animating",
            Self::Settled => "Settled",
        }
    }
}

/// 一轮 `begin_update` 的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// 本轮新建的单元（协调前不存在）
    pub entered: Vec<UnitId>,
    /// 本轮新增的离场单元数量
    pub leaving: usize,
}

/// 动画会话
///
/// morph 策略的核心状态。非 morph 策略完全绕过此状态机
/// （见 [`AnimatedText`](crate::animated::AnimatedText)）。
#[derive(Debug, Default)]
pub struct AnimationSession {
    /// 当前有序单元列表（顺序等于当前内容的 tokenize 顺序）
    units: Vec<Unit>,
    /// 离场单元列表
    leaving: Vec<LeavingUnit>,
    /// id 计数器（实例生命周期内单调递增）
    ids: UnitIdGen,
    /// 当前阶段
    phase: SessionPhase,
    /// 最近一轮新建的单元 id
    entered: Vec<UnitId>,
}

impl AnimationSession {
    /// 创建新会话
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前阶段
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 当前有序单元列表
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// 当前离场单元列表
    pub fn leaving_units(&self) -> &[LeavingUnit] {
        &self.leaving
    }

    /// 开始一轮内容变化周期（协调 + 旧布局快照捕获）
    ///
    /// 必须在宿主提交新布局**之前**同步调用：`probe` 读到的是旧布局
    /// 的几何。调用结束时会话处于 `LayoutCaptured`，新单元列表已就位，
    /// 宿主接着提交 [`render_plan`](Self::render_plan) 的产物。
    ///
    /// 上一轮周期无论处于什么阶段都会被本轮取代；未清理的离场单元
    /// 保留并与本轮新增的离场单元合并。
    pub fn begin_update(
        &mut self,
        content: &NormalizedContent,
        split: SplitMode,
        probe: &dyn LayoutCapture,
    ) -> UpdateOutcome {
        self.phase = SessionPhase::Reconciling;

        let tokens = tokenize(&content.text, &content.elements, split);
        let first_fresh = self.ids.peek();
        let previous = std::mem::take(&mut self.units);
        let result = reconcile(&previous, &tokens, &content.elements, &mut self.ids);

        let entered: Vec<UnitId> = result
            .units
            .iter()
            .filter(|unit| unit.id.value() >= first_fresh)
            .map(|unit| unit.id)
            .collect();

        let captured = capture_leaving(result.unmatched, probe);
        let leaving_count = captured.len();
        self.leaving.extend(captured);
        self.units = result.units;
        self.entered = entered;
        self.phase = SessionPhase::LayoutCaptured;

        debug!(
            "begin_update：{} 个单元（新建 {}），{} 个离场（累计 {}）",
            self.units.len(),
            self.entered.len(),
            leaving_count,
            self.leaving.len()
        );

        UpdateOutcome {
            entered: self.entered.clone(),
            leaving: leaving_count,
        }
    }

    /// 当前状态的渲染计划
    pub fn render_plan(&self, elements: &ElementMap) -> RenderPlan {
        RenderPlan::Morph {
            units: self.units.iter().map(|u| render_unit(u, elements)).collect(),
            leaving: self
                .leaving
                .iter()
                .map(|l| render_leaving(l, elements))
                .collect(),
        }
    }

    /// 启动本轮动画（宿主已提交新布局、完成绘制之后调用）
    ///
    /// 产出最多两条请求：连续/入场单元的 [`AnimationRequest::MorphLayout`]，
    /// 以及存在离场单元时的 [`AnimationRequest::Exit`]。没有离场单元时
    /// 本轮直接 settle。
    pub fn animate(
        &mut self,
        resolved: &ResolvedAnimation,
    ) -> MorphResult<Vec<AnimationRequest>> {
        if self.phase != SessionPhase::LayoutCaptured {
            return Err(MorphError::StateMismatch {
                expected: SessionPhase::LayoutCaptured.name().to_string(),
                actual: self.phase.name().to_string(),
            });
        }

        let mut requests = Vec::new();

        if !self.units.is_empty() {
            requests.push(AnimationRequest::MorphLayout {
                targets: self.units.iter().map(|u| u.id).collect(),
                entering: self.entered.clone(),
                enter_from: resolved.from.clone(),
                timing: resolved.timing(),
            });
        }

        if self.leaving.is_empty() {
            self.phase = SessionPhase::Settled;
        } else {
            requests.push(AnimationRequest::Exit {
                targets: self.leaving.iter().map(|l| l.id()).collect(),
                to: resolved.from.clone(),
                timing: resolved.timing(),
            });
            self.phase = SessionPhase::Animating;
        }

        debug!("animate：发出 {} 条请求，阶段 {}", requests.len(), self.phase.name());
        Ok(requests)
    }

    /// 离场动画完成回调
    ///
    /// 幂等：对已清空的离场列表再次调用是 no-op。阶段只在 `Animating`
    /// 时推进到 `Settled`——迟到的回调（新周期已经开始）不会干扰
    /// 新周期的阶段。
    pub fn complete_exit(&mut self) {
        if !self.leaving.is_empty() {
            debug!("complete_exit：清理 {} 个离场单元", self.leaving.len());
            self.leaving.clear();
        }
        if self.phase == SessionPhase::Animating {
            self.phase = SessionPhase::Settled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MorphProps;
    use crate::content::Child;
    use crate::layout::testing::FakeLayout;
    use crate::unit::UnitBounds;

    fn content(text: &str) -> NormalizedContent {
        NormalizedContent::from_children(&[Child::text(text)])
    }

    fn probe() -> FakeLayout {
        FakeLayout::new(UnitBounds::new(0.0, 0.0, 100.0, 100.0))
    }

    fn resolved() -> ResolvedAnimation {
        MorphProps::default().resolve()
    }

    #[test]
    fn test_first_cycle_enters_everything() {
        let mut session = AnimationSession::new();
        let outcome = session.begin_update(&content("Hi"), SplitMode::Chars, &probe());

        assert_eq!(session.phase(), SessionPhase::LayoutCaptured);
        assert_eq!(outcome.entered.len(), 2);
        assert_eq!(outcome.leaving, 0);
        assert_eq!(session.units().len(), 2);

        let requests = session.animate(&resolved()).unwrap();
        assert_eq!(requests.len(), 1);
        assert!(matches!(
            &requests[0],
            AnimationRequest::MorphLayout { targets, entering, .. }
            if targets.len() == 2 && entering.len() == 2
        ));
        // 无离场单元：直接 settle
        assert_eq!(session.phase(), SessionPhase::Settled);
    }

    #[test]
    fn test_content_change_produces_exit_request() {
        let mut session = AnimationSession::new();
        session.begin_update(&content("Hi"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();

        session.begin_update(&content("Bye"), SplitMode::Chars, &probe());
        let requests = session.animate(&resolved()).unwrap();

        assert_eq!(requests.len(), 2);
        assert!(matches!(
            &requests[1],
            AnimationRequest::Exit { targets, .. } if targets.len() == 2
        ));
        assert_eq!(session.phase(), SessionPhase::Animating);

        session.complete_exit();
        assert_eq!(session.phase(), SessionPhase::Settled);
        assert!(session.leaving_units().is_empty());
    }

    #[test]
    fn test_identity_preserved_across_cycles() {
        let mut session = AnimationSession::new();
        session.begin_update(&content("Hi"), SplitMode::Chars, &probe());
        let first: Vec<_> = session.units().to_vec();
        session.animate(&resolved()).unwrap();

        session.begin_update(&content("Hi!"), SplitMode::Chars, &probe());
        assert_eq!(session.units()[0], first[0]);
        assert_eq!(session.units()[1], first[1]);
        assert_eq!(session.units()[2].content, "!");
        // 新单元拿到新 id
        assert!(session.units()[2].id.value() >= 2);
    }

    #[test]
    fn test_animate_out_of_order_is_state_mismatch() {
        let mut session = AnimationSession::new();
        let err = session.animate(&resolved()).unwrap_err();
        assert_eq!(
            err,
            MorphError::StateMismatch {
                expected: "LayoutCaptured".to_string(),
                actual: "Idle".to_string(),
            }
        );
    }

    #[test]
    fn test_purge_is_idempotent() {
        let mut session = AnimationSession::new();
        session.begin_update(&content("ab"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();
        session.begin_update(&content("cd"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();

        session.complete_exit();
        let phase_after_first = session.phase();
        let units_after_first: Vec<_> = session.units().to_vec();

        // 重复的完成回调（如 tween 引擎重复触发）不改变任何状态
        session.complete_exit();
        assert_eq!(session.phase(), phase_after_first);
        assert_eq!(session.units(), units_after_first.as_slice());
        assert!(session.leaving_units().is_empty());
    }

    #[test]
    fn test_stale_completion_does_not_disturb_new_cycle() {
        let mut session = AnimationSession::new();
        session.begin_update(&content("ab"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();

        // 第二轮进入 Animating（有离场单元）
        session.begin_update(&content("cd"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();
        assert_eq!(session.phase(), SessionPhase::Animating);

        // 第三轮已经 begin_update（LayoutCaptured），此时旧回调才到
        session.begin_update(&content("ef"), SplitMode::Chars, &probe());
        session.complete_exit();

        // 离场列表被清空，但新周期的阶段不受影响
        assert!(session.leaving_units().is_empty());
        assert_eq!(session.phase(), SessionPhase::LayoutCaptured);
        // 新周期可以正常推进
        assert!(session.animate(&resolved()).is_ok());
    }

    #[test]
    fn test_unsettled_leaving_units_accumulate() {
        let mut session = AnimationSession::new();
        session.begin_update(&content("a"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();

        // 两轮替换，中间不触发完成回调：离场单元累积
        session.begin_update(&content("b"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();
        session.begin_update(&content("c"), SplitMode::Chars, &probe());

        assert_eq!(session.leaving_units().len(), 2);
        session.complete_exit();
        assert!(session.leaving_units().is_empty());
    }

    #[test]
    fn test_empty_content_is_valid_noop_cycle() {
        let mut session = AnimationSession::new();
        let outcome = session.begin_update(&content(""), SplitMode::Chars, &probe());
        assert!(outcome.entered.is_empty());
        assert_eq!(session.units().len(), 0);

        // 空列表不产生 MorphLayout 请求，直接 settle
        let requests = session.animate(&resolved()).unwrap();
        assert!(requests.is_empty());
        assert_eq!(session.phase(), SessionPhase::Settled);
    }

    #[test]
    fn test_whole_content_replaced_leaves_in_one_batch() {
        let mut session = AnimationSession::new();
        session.begin_update(&content("abc"), SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();

        let outcome = session.begin_update(&content("xyz"), SplitMode::Chars, &probe());
        assert_eq!(outcome.leaving, 3);
        assert_eq!(outcome.entered.len(), 3);
    }

    #[test]
    fn test_captured_bounds_are_container_relative() {
        let mut session = AnimationSession::new();
        let mut layout = FakeLayout::new(UnitBounds::new(50.0, 50.0, 200.0, 100.0));
        session.begin_update(&content("a"), SplitMode::Chars, &layout);
        session.animate(&resolved()).unwrap();

        let id = session.units()[0].id;
        layout.boxes.insert(id, UnitBounds::new(60.0, 70.0, 10.0, 20.0));

        session.begin_update(&content("b"), SplitMode::Chars, &layout);
        assert_eq!(
            session.leaving_units()[0].bounds,
            UnitBounds::new(10.0, 20.0, 10.0, 20.0)
        );
    }

    #[test]
    fn test_render_plan_marks_leaving_absolute() {
        let mut session = AnimationSession::new();
        let c = content("ab");
        session.begin_update(&c, SplitMode::Chars, &probe());
        session.animate(&resolved()).unwrap();

        let c2 = content("b");
        session.begin_update(&c2, SplitMode::Chars, &probe());
        match session.render_plan(&c2.elements) {
            RenderPlan::Morph { units, leaving } => {
                assert_eq!(units.len(), 1);
                assert_eq!(leaving.len(), 1);
                assert!(leaving[0].style.absolute_bounds.is_some());
            }
            RenderPlan::Raw => panic!("morph 会话不应产出 Raw 计划"),
        }
    }
}
