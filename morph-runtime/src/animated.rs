//! # Animated 模块
//!
//! 组件级驱动器：[`AnimatedText`] 把宿主渲染框架的生命周期回调映射到
//! 会话状态机（morph 策略）或重放路径（reanimate / none 策略）上。
//!
//! ## 宿主契约
//!
//! 正确性依赖两个回调的时序，宿主必须严格遵守：
//!
//! ```text
//! 宿主                                      AnimatedText
//!   │── 内容/配置变化，准备渲染 ────────────►│
//!   │   （用 mode::identity_key 对新内容       │
//!   │     计算 key，决定是否重挂载）           │
//!   │── before_paint(children, props, probe)─►│ morph：协调 + 旧布局快照
//!   │◄── RenderPlan ──────────────────────────│
//!   │   （宿主把渲染计划提交到文档树）          │
//!   │                                         │
//!   │── after_paint(props) ──────────────────►│ morph：FLIP/入场/离场请求
//!   │◄── Vec<AnimationRequest> ───────────────│ 其他策略：重放请求
//!   │   （宿主执行请求；离场动画完成时          │
//!   │     调用 complete_exit）                 │
//! ```
//!
//! - `before_paint`：必须在文档树已变更、下一次绘制**之前**同步调用
//!   （旧布局此时仍可读，几何捕获依赖这一点）
//! - `after_paint`：必须在新布局绘制**之后**调用（FLIP 插值需要新几何）
//! - 依赖变化或卸载时，宿主执行 [`cleanup`](AnimatedText::cleanup)
//!   返回的动作，撤销上一轮动画的就地改动

use tracing::debug;

use crate::command::{AnimationRequest, CleanupAction};
use crate::config::{ChangePolicy, MorphProps};
use crate::content::{Child, NormalizedContent};
use crate::error::MorphResult;
use crate::layout::LayoutCapture;
use crate::mode::should_animate;
use crate::render::RenderPlan;
use crate::session::AnimationSession;
use crate::tag::TextTag;

/// 动画文本组件的每实例驱动器
///
/// 一个实例对应宿主组件树中的一个动画文本节点，独占自己的
/// [`AnimationSession`]。实例之间不共享任何状态。
#[derive(Debug)]
pub struct AnimatedText {
    tag: TextTag,
    session: AnimationSession,
    is_first_render: bool,
}

impl AnimatedText {
    /// 创建指定标签的实例
    pub fn new(tag: TextTag) -> Self {
        Self {
            tag,
            session: AnimationSession::new(),
            is_first_render: true,
        }
    }

    /// 工厂入口：按标签名构造
    ///
    /// 未注册的标签返回 [`UnsupportedTag`](crate::error::MorphError::UnsupportedTag)。
    pub fn from_tag_name(name: &str) -> MorphResult<Self> {
        Ok(Self::new(TextTag::from_name(name)?))
    }

    /// 实例的标签
    pub fn tag(&self) -> TextTag {
        self.tag
    }

    /// 会话状态（只读）
    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    /// 渲染前回调（文档树已变更、绘制之前）
    ///
    /// morph 策略：规范化内容 → 协调 → 旧布局快照，返回宿主应提交的
    /// 渲染计划。其余策略返回 [`RenderPlan::Raw`]，宿主原样渲染子节点。
    pub fn before_paint(
        &mut self,
        children: &[Child],
        props: &MorphProps,
        probe: &dyn LayoutCapture,
    ) -> RenderPlan {
        if props.policy() != ChangePolicy::Morph {
            return RenderPlan::Raw;
        }

        let content = NormalizedContent::from_children(children);
        self.session
            .begin_update(&content, props.split_mode(), probe);
        self.session.render_plan(&content.elements)
    }

    /// 绘制后回调（动画启动）
    ///
    /// morph 策略：驱动会话发出 FLIP/入场/离场请求。其余策略在
    /// [`should_animate`] 判定通过时发出一条重放请求。
    pub fn after_paint(&mut self, props: &MorphProps) -> MorphResult<Vec<AnimationRequest>> {
        let first = self.is_first_render;
        self.is_first_render = false;
        let resolved = props.resolve();

        match props.policy() {
            ChangePolicy::Morph => self.session.animate(&resolved),
            policy => {
                if should_animate(policy, first) {
                    debug!("replay：策略 {}，首次渲染 {}", policy.name(), first);
                    let timing = resolved.timing();
                    Ok(vec![AnimationRequest::Replay {
                        split: props.split_mode(),
                        from: resolved.from,
                        timing,
                    }])
                } else {
                    Ok(Vec::new())
                }
            }
        }
    }

    /// 离场动画完成回调（转发给会话，幂等）
    pub fn complete_exit(&mut self) {
        self.session.complete_exit();
    }

    /// 卸载或动画依赖变化时宿主必须执行的清理动作
    ///
    /// 非 morph 策略的重放路径会就地拆分文本，必须在下一轮开始前
    /// 撤销；morph 策略没有就地改动，无需清理。
    pub fn cleanup(&self, props: &MorphProps) -> Vec<CleanupAction> {
        match props.policy() {
            ChangePolicy::Morph => Vec::new(),
            _ => vec![CleanupAction::RevertSplit],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChangePolicy;
    use crate::error::MorphError;
    use crate::layout::testing::FakeLayout;
    use crate::mode::{IdentityKey, identity_key};
    use crate::session::SessionPhase;
    use crate::split::SplitMode;
    use crate::unit::UnitBounds;

    fn probe() -> FakeLayout {
        FakeLayout::new(UnitBounds::new(0.0, 0.0, 100.0, 100.0))
    }

    fn morph_props() -> MorphProps {
        MorphProps {
            when_prop_change: Some(ChangePolicy::Morph),
            ..Default::default()
        }
    }

    #[test]
    fn test_factory_rejects_unknown_tag() {
        let err = AnimatedText::from_tag_name("table").unwrap_err();
        assert!(matches!(err, MorphError::UnsupportedTag { tag } if tag == "table"));
    }

    #[test]
    fn test_factory_accepts_registered_tag() {
        let component = AnimatedText::from_tag_name("h1").unwrap();
        assert_eq!(component.tag(), TextTag::H1);
    }

    #[test]
    fn test_reanimate_replays_on_every_render() {
        let mut component = AnimatedText::new(TextTag::P);
        let props = MorphProps::default(); // 默认策略 reanimate

        // 首次挂载
        let plan = component.before_paint(&[Child::text("Hi")], &props, &probe());
        assert_eq!(plan, RenderPlan::Raw);
        let requests = component.after_paint(&props).unwrap();
        assert_eq!(requests.len(), 1);
        assert!(matches!(&requests[0], AnimationRequest::Replay { .. }));

        // 后续渲染仍然重放
        component.before_paint(&[Child::text("Hi again")], &props, &probe());
        let requests = component.after_paint(&props).unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_none_policy_animates_only_once() {
        let mut component = AnimatedText::new(TextTag::P);
        let props = MorphProps {
            when_prop_change: Some(ChangePolicy::None),
            ..Default::default()
        };

        component.before_paint(&[Child::text("Hi")], &props, &probe());
        assert_eq!(component.after_paint(&props).unwrap().len(), 1);

        // 内容不变的第二次渲染：不再发出任何请求
        component.before_paint(&[Child::text("Hi")], &props, &probe());
        assert!(component.after_paint(&props).unwrap().is_empty());
    }

    #[test]
    fn test_none_policy_key_changes_force_remount() {
        // 宿主在渲染前用新内容计算 key；key 变化 -> 重挂载 ->
        // 新实例的首渲染会再动画一次
        let policy = ChangePolicy::None;
        let first_key = identity_key(policy, &NormalizedContent::from_children(&[Child::text("Hi")]));
        let second_key =
            identity_key(policy, &NormalizedContent::from_children(&[Child::text("Bye")]));
        assert_ne!(first_key, second_key);
    }

    #[test]
    fn test_morph_key_is_pinned() {
        let policy = ChangePolicy::Morph;
        let first_key = identity_key(policy, &NormalizedContent::from_children(&[Child::text("Hi")]));
        let second_key =
            identity_key(policy, &NormalizedContent::from_children(&[Child::text("Bye")]));
        assert_eq!(first_key, second_key);
        assert_eq!(first_key, IdentityKey::Pinned);
    }

    #[test]
    fn test_morph_full_cycle() {
        let mut component = AnimatedText::new(TextTag::H2);
        let props = morph_props();

        let plan = component.before_paint(&[Child::text("Hi")], &props, &probe());
        match plan {
            RenderPlan::Morph { units, leaving } => {
                assert_eq!(units.len(), 2);
                assert!(leaving.is_empty());
            }
            RenderPlan::Raw => panic!("morph 策略应产出 Morph 计划"),
        }

        let requests = component.after_paint(&props).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(component.session().phase(), SessionPhase::Settled);

        // 内容变化：离场请求 + 完成回调清理
        component.before_paint(&[Child::text("Bye")], &props, &probe());
        let requests = component.after_paint(&props).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(component.session().phase(), SessionPhase::Animating);
        component.complete_exit();
        assert_eq!(component.session().phase(), SessionPhase::Settled);
    }

    #[test]
    fn test_morph_respects_split_mode() {
        let mut component = AnimatedText::new(TextTag::P);
        let props = MorphProps {
            when_prop_change: Some(ChangePolicy::Morph),
            split_by: Some(SplitMode::Words),
            ..Default::default()
        };

        component.before_paint(&[Child::text("go now")], &props, &probe());
        let contents: Vec<_> = component
            .session()
            .units()
            .iter()
            .map(|u| u.content.as_str())
            .collect();
        assert_eq!(contents, vec!["go", " ", "now"]);
    }

    #[test]
    fn test_cleanup_actions_per_policy() {
        let component = AnimatedText::new(TextTag::P);
        assert_eq!(
            component.cleanup(&MorphProps::default()),
            vec![CleanupAction::RevertSplit]
        );
        assert!(component.cleanup(&morph_props()).is_empty());
    }

    #[test]
    fn test_replay_uses_resolved_parameters() {
        let mut component = AnimatedText::new(TextTag::P);
        let props = MorphProps {
            duration: Some(1.5),
            ..Default::default()
        };

        component.before_paint(&[Child::text("x")], &props, &probe());
        let requests = component.after_paint(&props).unwrap();
        match &requests[0] {
            AnimationRequest::Replay { timing, .. } => assert_eq!(timing.duration, 1.5),
            other => panic!("预期 Replay 请求，得到 {}", other.kind()),
        }
    }
}
