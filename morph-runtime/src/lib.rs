//! # Morph Runtime
//!
//! 文本拆分动画的核心运行时库。
//!
//! ## 架构概述
//!
//! `morph-runtime` 是纯逻辑核心，不依赖任何渲染框架、tween 引擎或
//! 布局 API。它通过**声明式数据**与宿主层通信：
//!
//! ```text
//! Host                                        Runtime
//!   │                                            │
//!   │── before_paint(children, props, probe) ──►│ tokenize + reconcile
//!   │                                            │ + 旧布局快照
//!   │◄── RenderPlan ─────────────────────────────│
//!   │   （提交到文档树）                          │
//!   │── after_paint(props) ─────────────────────►│
//!   │◄── Vec<AnimationRequest> ──────────────────│
//!   │   （交给 tween 引擎 / FLIP 工具执行）        │
//!   │── complete_exit() ────────────────────────►│ 清理离场单元
//! ```
//!
//! ## 核心类型
//!
//! - [`AnimatedText`]：组件级驱动器，映射宿主生命周期回调
//! - [`AnimationSession`]：morph 策略的会话状态机
//! - [`AnimationRequest`]：运行时向宿主发出的动画请求
//! - [`MorphProps`]：配置值对象（拆分粒度、预设、时序覆盖、策略）
//! - [`LayoutCapture`]：宿主实现的几何读取接口
//!
//! ## 使用示例
//!
//! ```ignore
//! use morph_runtime::{AnimatedText, ChangePolicy, MorphProps};
//!
//! let mut text = AnimatedText::from_tag_name("h1")?;
//! let props = MorphProps {
//!     when_prop_change: Some(ChangePolicy::Morph),
//!     ..Default::default()
//! };
//!
//! // 每次渲染
//! let plan = text.before_paint(&children, &props, &layout_probe);
//! host.commit(plan);
//!
//! for request in text.after_paint(&props)? {
//!     // 交给 tween 引擎 / FLIP 工具执行；
//!     // 离场动画完成时回调 text.complete_exit()
//!     tween_engine.execute(request);
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`content`]：子节点规范化与占位符映射
//! - [`split`]：tokenizer（chars / words / lines）
//! - [`reconcile`]：单元协调（身份保持）
//! - [`layout`]：旧布局快照捕获
//! - [`session`]：动画会话状态机
//! - [`mode`]：内容变化策略判定
//! - [`preset`]：动画预设表
//! - [`easing`]：缓动曲线
//! - [`config`]：配置与参数解析链
//! - [`command`]：动画请求与清理动作
//! - [`render`]：声明式渲染模型
//! - [`tag`]：受支持标签的静态注册表
//! - [`animated`]：组件级驱动器
//! - [`error`]：错误类型定义

pub mod animated;
pub mod command;
pub mod config;
pub mod content;
pub mod easing;
pub mod error;
pub mod layout;
pub mod mode;
pub mod preset;
pub mod reconcile;
pub mod render;
pub mod session;
pub mod split;
pub mod tag;
pub mod unit;

// 重导出核心类型
pub use animated::AnimatedText;
pub use command::{AnimationRequest, CleanupAction, Timing};
pub use config::{ChangePolicy, MorphProps, ResolvedAnimation};
pub use content::{Child, ElementMap, EmbeddedElement, NormalizedContent};
pub use easing::Ease;
pub use error::{MorphError, MorphResult};
pub use layout::{LayoutCapture, capture_leaving};
pub use mode::{IdentityKey, identity_key, should_animate};
pub use preset::{AnimationType, Filter, Length, Preset, PropertySet, TransformOrigin};
pub use reconcile::{Reconciliation, reconcile};
pub use render::{
    Display, RenderContent, RenderPlan, RenderUnit, UnitStyle, render_leaving, render_unit,
};
pub use session::{AnimationSession, SessionPhase, UpdateOutcome};
pub use split::{SplitMode, tokenize};
pub use tag::TextTag;
pub use unit::{LeavingUnit, Unit, UnitBounds, UnitId, UnitIdGen};
