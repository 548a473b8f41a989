use crate::model::Color;

slotmap::new_key_type! {
    /// Unique identifier for a material in the scene store.
    pub struct MaterialId;
}

/// Shading model of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Unlit flat color.
    Basic,
    /// Lit with ambient and directional lights.
    Phong,
}

/// Surface appearance of a mesh face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub transparent: bool,
    pub double_sided: bool,
    pub shading: Shading,
}

impl Material {
    /// Opaque lit material visible from both sides.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
            double_sided: true,
            shading: Shading::Phong,
        }
    }

    /// See-through lit material visible from both sides.
    #[must_use]
    pub fn translucent(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            transparent: true,
            double_sided: true,
            shading: Shading::Phong,
        }
    }

    /// Fully transparent material standing in for a removed face.
    #[must_use]
    pub fn invisible() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 0.0,
            transparent: true,
            double_sided: false,
            shading: Shading::Phong,
        }
    }

    /// Unlit opaque material.
    #[must_use]
    pub fn basic(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
            double_sided: false,
            shading: Shading::Basic,
        }
    }

    /// Whether the material has any opacity.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility() {
        assert!(Material::solid(Color::RED).is_visible());
        assert!(Material::translucent(Color::RED, 0.3).is_visible());
        assert!(!Material::invisible().is_visible());
    }

    #[test]
    fn translucent_keeps_color() {
        let m = Material::translucent(Color::BLUE, 0.3);
        assert_eq!(m.color, Color::BLUE);
        assert!(m.transparent && m.double_sided);
    }
}
