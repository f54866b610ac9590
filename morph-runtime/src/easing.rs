//! # Easing 模块
//!
//! 缓动曲线库。曲线命名与主流 tween 引擎的名称体系（`power4.inOut` 等）
//! 保持一致，便于两类宿主桥接：
//!
//! - 原生宿主直接用 [`Ease::value`] 采样曲线
//! - 桥接 JS tween 引擎的宿主用 [`Ease::name`] 透传曲线名

use std::f32::consts::PI;

/// 缓动曲线
///
/// 变体集合覆盖预设表用到的全部曲线，外加自定义函数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// 线性（匀速）
    Linear,
    /// 三次缓出（`power2.out`）
    Power2Out,
    /// 四次缓出（`power3.out`）
    Power3Out,
    /// 五次缓入缓出（`power4.inOut`）
    Power4InOut,
    /// 回弹缓出（`back.out`，参数为回弹强度）
    BackOut(f32),
    /// 弹跳缓出（`bounce.out`）
    BounceOut,
    /// 弹性缓出（`elastic.out`，参数为振幅与周期）
    ElasticOut(f32, f32),
    /// 自定义曲线函数
    Custom(fn(f32) -> f32),
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power4InOut
    }
}

impl Ease {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)，超出范围会被限制
    pub fn value(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4InOut => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Ease::BackOut(overshoot) => ease_out_back(*overshoot, t),
            Ease::BounceOut => ease_out_bounce(t),
            Ease::ElasticOut(amplitude, period) => ease_out_elastic(*amplitude, *period, t),
            Ease::Custom(curve) => curve(t),
        }
    }

    /// 曲线的传输名（tween 引擎风格）
    pub fn name(&self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::Power2Out => "power2.out".to_string(),
            Ease::Power3Out => "power3.out".to_string(),
            Ease::Power4InOut => "power4.inOut".to_string(),
            Ease::BackOut(overshoot) => format!("back.out({overshoot})"),
            Ease::BounceOut => "bounce.out".to_string(),
            Ease::ElasticOut(amplitude, period) => format!("elastic.out({amplitude}, {period})"),
            Ease::Custom(_) => "custom".to_string(),
        }
    }
}

/// 回弹缓出
fn ease_out_back(overshoot: f32, t: f32) -> f32 {
    let c3 = overshoot + 1.0;
    1.0 + c3 * (t - 1.0).powi(3) + overshoot * (t - 1.0).powi(2)
}

/// 弹性缓出（振幅 `amplitude` >= 1，周期 `period` 以总时长为单位）
fn ease_out_elastic(amplitude: f32, period: f32, t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        let amp = amplitude.max(1.0);
        let shift = period / (2.0 * PI) * (1.0 / amp).asin();
        amp * 2.0_f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
    }
}

/// 弹跳缓出
fn ease_out_bounce(t: f32) -> f32 {
    let n1 = 7.5625;
    let d1 = 2.75;

    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}
