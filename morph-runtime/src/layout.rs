//! # Layout 模块
//!
//! 布局快照捕获：在新布局生效之前，读取离场候选单元在旧布局下的几何信息。
//!
//! ## 时序约束
//!
//! 捕获必须在上一轮渲染的布局仍然有效时**同步**执行，也就是宿主把协调
//! 后的单元列表提交到文档树之前。新布局生效后再读几何，离场单元会被
//! 定位到错误的位置。
//!
//! ## 退化行为
//!
//! 按 id 找不到渲染元素（从未渲染或已被移除）时，几何退化为原点处的
//! 零尺寸盒：该单元的离场动画表现为原点处的无感淡出。这是可接受的
//! 退化行为，不是错误，管线照常推进。

use tracing::trace;

use crate::unit::{LeavingUnit, Unit, UnitBounds, UnitId};

/// 宿主提供的几何读取接口
///
/// 由宿主在"上一轮布局仍可读"的时刻实现。返回的坐标使用文档坐标系；
/// 换算为容器相对坐标由运行时完成，宿主不需要关心。
pub trait LayoutCapture {
    /// 容器自身的包围盒
    fn container_bounds(&self) -> UnitBounds;

    /// 按单元 id 查询其渲染元素的包围盒
    ///
    /// 找不到时返回 `None`。
    fn unit_bounds(&self, id: UnitId) -> Option<UnitBounds>;
}

/// 为未匹配的旧单元捕获离场几何
///
/// 每个单元的包围盒被换算为相对容器原点的坐标，使其之后可以在容器内
/// 被绝对定位回原处，不受文档滚动或容器位置影响。
pub fn capture_leaving(unmatched: Vec<Unit>, probe: &dyn LayoutCapture) -> Vec<LeavingUnit> {
    let origin = probe.container_bounds();
    unmatched
        .into_iter()
        .map(|unit| {
            let bounds = match probe.unit_bounds(unit.id) {
                Some(raw) => raw.relative_to(&origin),
                None => {
                    trace!("单元 {} 未找到渲染元素，几何退化为零尺寸盒", unit.id);
                    UnitBounds::ZERO
                }
            };
            LeavingUnit::new(unit, bounds)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::testing::FakeLayout;
    use super::*;
    use crate::unit::UnitIdGen;

    #[test]
    fn test_bounds_relative_to_container() {
        let mut ids = UnitIdGen::new();
        let unit = Unit::new(ids.next_id(), "a");

        let mut probe = FakeLayout::new(UnitBounds::new(200.0, 100.0, 640.0, 480.0));
        probe
            .boxes
            .insert(unit.id, UnitBounds::new(230.0, 140.0, 18.0, 24.0));

        let leaving = capture_leaving(vec![unit], &probe);
        assert_eq!(leaving.len(), 1);
        assert_eq!(leaving[0].bounds, UnitBounds::new(30.0, 40.0, 18.0, 24.0));
    }

    #[test]
    fn test_missing_element_degrades_to_zero_box() {
        let mut ids = UnitIdGen::new();
        let found = Unit::new(ids.next_id(), "a");
        let missing = Unit::new(ids.next_id(), "b");

        let mut probe = FakeLayout::new(UnitBounds::new(10.0, 10.0, 100.0, 100.0));
        probe
            .boxes
            .insert(found.id, UnitBounds::new(10.0, 10.0, 5.0, 5.0));

        let leaving = capture_leaving(vec![found.clone(), missing.clone()], &probe);
        assert_eq!(leaving[0].bounds, UnitBounds::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(leaving[1].bounds, UnitBounds::ZERO);
        // 单元本身保留，id 不变
        assert_eq!(leaving[0].unit, found);
        assert_eq!(leaving[1].unit, missing);
    }

    #[test]
    fn test_empty_unmatched_is_noop() {
        let probe = FakeLayout::new(UnitBounds::ZERO);
        assert!(capture_leaving(Vec::new(), &probe).is_empty());
    }
}
