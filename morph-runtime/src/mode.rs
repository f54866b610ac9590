//! # Mode 模块
//!
//! 内容变化策略的判定：本次渲染是否播放入场动画，以及宿主应使用的
//! 身份 key。
//!
//! ## 身份 key 的作用
//!
//! 宿主用身份 key 控制组件实例的重挂载：
//!
//! - `morph` 策略下 key 恒定（[`IdentityKey::Pinned`]），实例跨内容
//!   变化存活，单元身份才可能被跟踪
//! - `reanimate` / `none` 策略下 key 由内容派生，内容一变即强制
//!   重挂载，丢弃全部单元状态——确保旧的按单元 DOM/状态不会在
//!   不相关的内容之间泄漏

use serde::{Deserialize, Serialize};

use crate::config::ChangePolicy;
use crate::content::NormalizedContent;

/// 宿主用于控制重挂载的身份 key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityKey {
    /// 恒定 key（阻止重挂载）
    Pinned,
    /// 内容派生 key（内容变化即重挂载）
    Content(String),
}

/// 本次渲染是否应播放入场动画
///
/// `reanimate` 每次都播放；其余策略仅在首次渲染播放一次。
pub fn should_animate(policy: ChangePolicy, is_first_render: bool) -> bool {
    matches!(policy, ChangePolicy::Reanimate) || is_first_render
}

/// 计算宿主应使用的身份 key
pub fn identity_key(policy: ChangePolicy, content: &NormalizedContent) -> IdentityKey {
    match policy {
        ChangePolicy::Morph => IdentityKey::Pinned,
        ChangePolicy::Reanimate | ChangePolicy::None => {
            IdentityKey::Content(content.text.clone())
        }
    }
}
