//! # Reconcile 模块
//!
//! 协调器：把新一轮 tokenize 的产物与上一轮的单元列表做匹配，
//! 在内容变化之间保持动画身份（identity）的连续性。
//!
//! ## 算法
//!
//! 从左到右处理新 token 序列。对每个 token，在"尚未被消费"的旧单元池中
//! 寻找第一个可匹配的候选：
//!
//! - 占位符 token 只与持有完全相同占位符内容的旧单元匹配
//! - 纯文本 token 与内容相等的旧单元匹配，但内容为单个字面空格 `" "`
//!   的旧单元从不复用（复用空白身份在视觉上没有意义；多空格/制表串
//!   不受此限制——这是一个被保留的既有怪癖，见 DESIGN.md）
//!
//! 命中时旧单元移出池并在新位置复用（id 保留）；未命中则分配全新 id。
//! 全部 token 处理完后，池中剩余的旧单元即为"离场"集合。
//!
//! 复杂度 O(n·m)（n 为新 token 数、m 为剩余池大小）：每个 token 对池做
//! 一次线性扫描。可见文本的长度有界，可以接受。
//! 平局规则：取池序中第一个可匹配者（稳定，不保证位置最近）。

use tracing::debug;

use crate::content::ElementMap;
use crate::unit::{Unit, UnitIdGen};

/// 协调结果
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// 新的有序单元列表（顺序与 token 序列一致）
    pub units: Vec<Unit>,
    /// 未被复用的旧单元（离场候选，保持池中顺序）
    pub unmatched: Vec<Unit>,
}

impl Reconciliation {
    /// 是否没有任何离场单元
    pub fn is_fully_matched(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// 执行一轮协调
///
/// `previous` 不被修改；调用方用返回的 `units` 整体替换旧列表，
/// 并把 `unmatched` 交给布局快照捕获。
pub fn reconcile(
    previous: &[Unit],
    tokens: &[String],
    elements: &ElementMap,
    ids: &mut UnitIdGen,
) -> Reconciliation {
    let mut pool: Vec<Unit> = previous.to_vec();
    let mut units = Vec::with_capacity(tokens.len());
    let mut fresh = 0;

    for token in tokens {
        let is_placeholder = elements.contains(token);
        let matched = pool
            .iter()
            .position(|old| old.content == *token && (is_placeholder || old.content != " "));
        match matched {
            Some(index) => units.push(pool.remove(index)),
            None => {
                fresh += 1;
                units.push(Unit::new(ids.next_id(), token.clone()));
            }
        }
    }

    debug!(
        "reconcile：{} 复用、{} 新建、{} 离场",
        units.len() - fresh,
        fresh,
        pool.len()
    );

    Reconciliation {
        units,
        unmatched: pool,
    }
}
