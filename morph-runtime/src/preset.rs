//! # Preset 模块
//!
//! 动画预设表：动画类型名 → 初始属性偏移（from 状态）+ 时长 + 级联间隔
//! + 缓动。这是所有预设名称、默认参数的**唯一来源**，任何需要预设参数
//! 的地方都应通过 [`AnimationType::preset`] 获取，而非硬编码。
//!
//! 预设是纯数据，不含控制流。

use serde::{Deserialize, Serialize};

use crate::easing::Ease;

/// 长度值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// 像素
    Px(f32),
    /// 相对自身尺寸的百分比
    Percent(f32),
}

impl Length {
    /// CSS 形式的值（`"50%"` / `"-2px"`）
    pub fn css_value(&self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Percent(v) => format!("{v}%"),
        }
    }
}

/// 变换原点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOrigin {
    /// 正中
    CenterCenter,
    /// 左下
    LeftBottom,
    /// 右下
    RightBottom,
    /// 左中
    LeftCenter,
    /// 右中
    RightCenter,
    /// 底部居中
    BottomCenter,
}

impl TransformOrigin {
    /// CSS 形式的值
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::CenterCenter => "center center",
            Self::LeftBottom => "left bottom",
            Self::RightBottom => "right bottom",
            Self::LeftCenter => "left center",
            Self::RightCenter => "right center",
            Self::BottomCenter => "bottom center",
        }
    }
}

/// 滤镜效果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// 高斯模糊（像素）
    Blur(f32),
    /// 色相旋转（度）
    HueRotate(f32),
}

impl Filter {
    /// CSS 形式的值
    pub fn css_value(&self) -> String {
        match self {
            Self::Blur(px) => format!("blur({px}px)"),
            Self::HueRotate(deg) => format!("hue-rotate({deg}deg)"),
        }
    }
}

/// 属性偏移集合
///
/// 描述动画的 from 状态：单元在入场动画开始时（或离场动画结束时）
/// 相对自然状态的属性偏移。`None` 表示该属性不参与动画。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    /// 不透明度
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// 水平位移
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Length>,
    /// 垂直位移
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Length>,
    /// 缩放
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// 平面旋转（度）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    /// 绕 X 轴旋转（度）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_x: Option<f32>,
    /// 绕 Y 轴旋转（度）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f32>,
    /// 水平斜切（度）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_x: Option<f32>,
    /// 变换原点
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<TransformOrigin>,
    /// 滤镜
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    /// 圆角
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Length>,
}

impl PropertySet {
    /// 是否没有任何属性偏移
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 预设级默认参数
///
/// 未显式标注的预设条目使用这些值。
pub mod defaults {
    use crate::easing::Ease;

    /// 预设级默认时长（秒）
    pub const PRESET_DURATION: f32 = 0.6;
    /// 预设级默认级联间隔（秒）
    pub const PRESET_STAGGER: f32 = 0.04;
    /// 预设级默认缓动
    pub const PRESET_EASE: Ease = Ease::Power4InOut;
}

/// 一个命名动画预设
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// 入场动画的 from 状态
    pub from: PropertySet,
    /// 时长（秒）
    pub duration: f32,
    /// 级联间隔（秒）
    pub stagger: f32,
    /// 缓动曲线
    pub ease: Ease,
}

impl Preset {
    fn base() -> Self {
        Self {
            from: PropertySet::default(),
            duration: defaults::PRESET_DURATION,
            stagger: defaults::PRESET_STAGGER,
            ease: defaults::PRESET_EASE,
        }
    }
}

/// 动画类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    FadeIn,
    FadeInUp,
    FadeInDown,
    SlideInFromLeft,
    SlideInFromRight,
    BlurIn,
    RevealInUp,
    RevealInDown,
    FlipInX,
    FlipInY,
    SkewIn,
    Typewriter,
    ScaleIn,
    ScaleInRotate,
    BounceIn,
    Elastic,
    ZoomIn,
    ZoomOut,
    RotateIn,
    RotateInDownLeft,
    RotateInDownRight,
    RollIn,
    LightSpeedIn,
    FlipInLeft,
    FlipInRight,
    SlideInUp,
    SlideInDown,
    MorphIn,
    GlitchIn,
    WaveIn,
    SpiralIn,
}

impl AnimationType {
    /// 全部预设类型
    pub const ALL: [AnimationType; 31] = [
        Self::FadeIn,
        Self::FadeInUp,
        Self::FadeInDown,
        Self::SlideInFromLeft,
        Self::SlideInFromRight,
        Self::BlurIn,
        Self::RevealInUp,
        Self::RevealInDown,
        Self::FlipInX,
        Self::FlipInY,
        Self::SkewIn,
        Self::Typewriter,
        Self::ScaleIn,
        Self::ScaleInRotate,
        Self::BounceIn,
        Self::Elastic,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::RotateIn,
        Self::RotateInDownLeft,
        Self::RotateInDownRight,
        Self::RollIn,
        Self::LightSpeedIn,
        Self::FlipInLeft,
        Self::FlipInRight,
        Self::SlideInUp,
        Self::SlideInDown,
        Self::MorphIn,
        Self::GlitchIn,
        Self::WaveIn,
        Self::SpiralIn,
    ];

    /// 预设名（配置表面使用的 camelCase 形式）
    pub fn name(&self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::FadeInUp => "fadeInUp",
            Self::FadeInDown => "fadeInDown",
            Self::SlideInFromLeft => "slideInFromLeft",
            Self::SlideInFromRight => "slideInFromRight",
            Self::BlurIn => "blurIn",
            Self::RevealInUp => "revealInUp",
            Self::RevealInDown => "revealInDown",
            Self::FlipInX => "flipInX",
            Self::FlipInY => "flipInY",
            Self::SkewIn => "skewIn",
            Self::Typewriter => "typewriter",
            Self::ScaleIn => "scaleIn",
            Self::ScaleInRotate => "scaleInRotate",
            Self::BounceIn => "bounceIn",
            Self::Elastic => "elastic",
            Self::ZoomIn => "zoomIn",
            Self::ZoomOut => "zoomOut",
            Self::RotateIn => "rotateIn",
            Self::RotateInDownLeft => "rotateInDownLeft",
            Self::RotateInDownRight => "rotateInDownRight",
            Self::RollIn => "rollIn",
            Self::LightSpeedIn => "lightSpeedIn",
            Self::FlipInLeft => "flipInLeft",
            Self::FlipInRight => "flipInRight",
            Self::SlideInUp => "slideInUp",
            Self::SlideInDown => "slideInDown",
            Self::MorphIn => "morphIn",
            Self::GlitchIn => "glitchIn",
            Self::WaveIn => "waveIn",
            Self::SpiralIn => "spiralIn",
        }
    }

    /// 按名称查找预设类型
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// 解析出该类型的预设参数
    pub fn preset(&self) -> Preset {
        let base = Preset::base();
        match self {
            Self::FadeIn => Preset {
                from: PropertySet {
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::FadeInUp => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(50.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::FadeInDown => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(-50.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::SlideInFromLeft => Preset {
                from: PropertySet {
                    x: Some(Length::Percent(-50.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::SlideInFromRight => Preset {
                from: PropertySet {
                    x: Some(Length::Percent(50.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::BlurIn => Preset {
                from: PropertySet {
                    filter: Some(Filter::Blur(12.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::RevealInUp => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(100.0)),
                    ..Default::default()
                },
                ease: Ease::Power4InOut,
                ..base
            },
            Self::RevealInDown => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(-100.0)),
                    ..Default::default()
                },
                ease: Ease::Power4InOut,
                ..base
            },
            Self::FlipInX => Preset {
                from: PropertySet {
                    rotation_x: Some(-90.0),
                    opacity: Some(0.0),
                    transform_origin: Some(TransformOrigin::CenterCenter),
                    ..Default::default()
                },
                ..base
            },
            Self::FlipInY => Preset {
                from: PropertySet {
                    rotation_y: Some(90.0),
                    opacity: Some(0.0),
                    transform_origin: Some(TransformOrigin::CenterCenter),
                    ..Default::default()
                },
                ..base
            },
            Self::SkewIn => Preset {
                from: PropertySet {
                    skew_x: Some(-20.0),
                    x: Some(Length::Percent(-50.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::Typewriter => Preset {
                from: PropertySet {
                    opacity: Some(0.0),
                    ..Default::default()
                },
                duration: 0.01,
                stagger: 0.1,
                ease: Ease::Linear,
            },
            Self::ScaleIn => Preset {
                from: PropertySet {
                    scale: Some(0.0),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::BackOut(1.7),
                ..base
            },
            Self::ScaleInRotate => Preset {
                from: PropertySet {
                    scale: Some(0.0),
                    rotation: Some(180.0),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::BackOut(1.7),
                ..base
            },
            Self::BounceIn => Preset {
                from: PropertySet {
                    scale: Some(0.3),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::BounceOut,
                duration: 0.8,
                ..base
            },
            Self::Elastic => Preset {
                from: PropertySet {
                    scale: Some(0.0),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::ElasticOut(1.0, 0.3),
                duration: 1.2,
                ..base
            },
            Self::ZoomIn => Preset {
                from: PropertySet {
                    scale: Some(0.8),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power2Out,
                ..base
            },
            Self::ZoomOut => Preset {
                from: PropertySet {
                    scale: Some(1.2),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power2Out,
                ..base
            },
            Self::RotateIn => Preset {
                from: PropertySet {
                    rotation: Some(-180.0),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::RotateInDownLeft => Preset {
                from: PropertySet {
                    rotation: Some(-45.0),
                    x: Some(Length::Percent(-100.0)),
                    y: Some(Length::Percent(100.0)),
                    opacity: Some(0.0),
                    transform_origin: Some(TransformOrigin::LeftBottom),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::RotateInDownRight => Preset {
                from: PropertySet {
                    rotation: Some(45.0),
                    x: Some(Length::Percent(100.0)),
                    y: Some(Length::Percent(100.0)),
                    opacity: Some(0.0),
                    transform_origin: Some(TransformOrigin::RightBottom),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::RollIn => Preset {
                from: PropertySet {
                    x: Some(Length::Percent(-100.0)),
                    rotation: Some(-120.0),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::LightSpeedIn => Preset {
                from: PropertySet {
                    x: Some(Length::Percent(100.0)),
                    skew_x: Some(-30.0),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                duration: 0.4,
                ..base
            },
            Self::FlipInLeft => Preset {
                from: PropertySet {
                    rotation_y: Some(-90.0),
                    opacity: Some(0.0),
                    transform_origin: Some(TransformOrigin::LeftCenter),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::FlipInRight => Preset {
                from: PropertySet {
                    rotation_y: Some(90.0),
                    opacity: Some(0.0),
                    transform_origin: Some(TransformOrigin::RightCenter),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                ..base
            },
            Self::SlideInUp => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(100.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::SlideInDown => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(-100.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ..base
            },
            Self::MorphIn => Preset {
                from: PropertySet {
                    scale: Some(0.5),
                    rotation: Some(45.0),
                    skew_x: Some(20.0),
                    border_radius: Some(Length::Percent(50.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                duration: 0.8,
                ..base
            },
            Self::GlitchIn => Preset {
                from: PropertySet {
                    x: Some(Length::Px(-2.0)),
                    skew_x: Some(2.0),
                    filter: Some(Filter::HueRotate(90.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                stagger: 0.02,
                ..base
            },
            Self::WaveIn => Preset {
                from: PropertySet {
                    y: Some(Length::Percent(20.0)),
                    rotation: Some(5.0),
                    transform_origin: Some(TransformOrigin::BottomCenter),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                stagger: 0.1,
                ..base
            },
            Self::SpiralIn => Preset {
                from: PropertySet {
                    scale: Some(0.0),
                    rotation: Some(360.0),
                    x: Some(Length::Percent(25.0)),
                    y: Some(Length::Percent(25.0)),
                    opacity: Some(0.0),
                    ..Default::default()
                },
                ease: Ease::Power3Out,
                duration: 1.0,
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backed_preset() {
        let preset = AnimationType::FadeIn.preset();
        assert_eq!(preset.from.opacity, Some(0.0));
        assert!(preset.from.x.is_none());
        assert_eq!(preset.duration, defaults::PRESET_DURATION);
        assert_eq!(preset.stagger, defaults::PRESET_STAGGER);
        assert_eq!(preset.ease, Ease::Power4InOut);
    }

    #[test]
    fn test_typewriter_overrides_everything() {
        let preset = AnimationType::Typewriter.preset();
        assert_eq!(preset.duration, 0.01);
        assert_eq!(preset.stagger, 0.1);
        assert_eq!(preset.ease, Ease::Linear);
        assert_eq!(preset.from.opacity, Some(0.0));
    }

    #[test]
    fn test_spot_values() {
        let bounce = AnimationType::BounceIn.preset();
        assert_eq!(bounce.from.scale, Some(0.3));
        assert_eq!(bounce.duration, 0.8);
        assert_eq!(bounce.ease, Ease::BounceOut);

        let glitch = AnimationType::GlitchIn.preset();
        assert_eq!(glitch.from.x, Some(Length::Px(-2.0)));
        assert_eq!(glitch.from.filter, Some(Filter::HueRotate(90.0)));
        assert_eq!(glitch.stagger, 0.02);

        let reveal = AnimationType::RevealInUp.preset();
        assert_eq!(reveal.from.y, Some(Length::Percent(100.0)));
        assert!(reveal.from.opacity.is_none());

        let morph = AnimationType::MorphIn.preset();
        assert_eq!(morph.from.border_radius, Some(Length::Percent(50.0)));
        assert_eq!(morph.from.transform_origin, None);

        let spiral = AnimationType::SpiralIn.preset();
        assert_eq!(spiral.duration, 1.0);
        assert_eq!(spiral.from.rotation, Some(360.0));
    }

    #[test]
    fn test_every_preset_has_a_from_state() {
        for animation in AnimationType::ALL {
            assert!(
                !animation.preset().from.is_empty(),
                "预设 {} 的 from 状态不应为空",
                animation.name()
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        for animation in AnimationType::ALL {
            assert_eq!(AnimationType::from_name(animation.name()), Some(animation));
        }
        assert_eq!(AnimationType::from_name("unknown"), None);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&AnimationType::FadeInUp).unwrap();
        assert_eq!(json, "\"fadeInUp\"");
    }

    #[test]
    fn test_css_values() {
        assert_eq!(Length::Percent(50.0).css_value(), "50%");
        assert_eq!(Length::Px(-2.0).css_value(), "-2px");
        assert_eq!(Filter::Blur(12.0).css_value(), "blur(12px)");
        assert_eq!(Filter::HueRotate(90.0).css_value(), "hue-rotate(90deg)");
        assert_eq!(TransformOrigin::LeftBottom.css_value(), "left bottom");
    }
}
