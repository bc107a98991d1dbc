//=========================================================================
// Physics Seams
//=========================================================================
//
// What the locomotion controller needs from a physics backend, and
// nothing more:
//
//   PhysicsQuery   ray-casts against named collision layers
//   CharacterBody  the controlled transform plus its rigid body
//
// Collision layers are bits in a u32 mask. Names resolve to bits through
// a CollisionLayers table; an unknown name is a configuration error.
//
//   Layer 0  Default
//   Layer 8  Ground
//   Layer 9  MovingPlatform
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::ops::{Add, AddAssign, Mul, Sub};

//=== Internal Dependencies ===============================================

use crate::game::error::ConfigError;

//=== Vec3 ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

//=== Transform ===========================================================

/// Identifies a platform a body can ride on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(pub u32);

/// World-space pose of the controlled character.
///
/// `parent` is a weak link: while set, the backend carries the body along
/// with that platform's motion. Position stays in world space either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// `scale.z` doubles as the facing flag (+1 right, -1 left).
    pub scale: Vec3,
    pub yaw_degrees: f32,
    pub parent: Option<PlatformId>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            yaw_degrees: 0.0,
            parent: None,
        }
    }
}

//=== Layers ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);

    pub const fn from_layer(layer: u8) -> Self {
        LayerMask(1 << layer)
    }

    pub const fn union(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }

    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

pub const DEFAULT_LAYER: &str = "Default";
pub const GROUND_LAYER: &str = "Ground";
pub const MOVING_PLATFORM_LAYER: &str = "MovingPlatform";

/// Name → layer table.
#[derive(Debug, Clone)]
pub struct CollisionLayers {
    layers: HashMap<String, u8>,
}

impl CollisionLayers {
    /// An empty table; see `Default` for the platformer's layers.
    pub fn empty() -> Self {
        Self { layers: HashMap::new() }
    }

    /// Adds or renames a layer.
    ///
    /// # Panics
    ///
    /// Panics if `layer >= 32`.
    pub fn with_layer(mut self, name: impl Into<String>, layer: u8) -> Self {
        assert!(layer < 32, "Layer index must be below 32, got {}", layer);
        self.layers.insert(name.into(), layer);
        self
    }

    pub fn layer(&self, name: &str) -> Option<u8> {
        self.layers.get(name).copied()
    }

    /// Combined mask of the named layers.
    pub fn mask(&self, names: &[&str]) -> Result<LayerMask, ConfigError> {
        names.iter().try_fold(LayerMask::NONE, |mask, name| {
            self.layer(name)
                .map(|layer| mask.union(LayerMask::from_layer(layer)))
                .ok_or_else(|| ConfigError::UnknownLayer((*name).to_string()))
        })
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::empty()
            .with_layer(DEFAULT_LAYER, 0)
            .with_layer(GROUND_LAYER, 8)
            .with_layer(MOVING_PLATFORM_LAYER, 9)
    }
}

//=== Queries =============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    /// Set when the hit collider belongs to a platform.
    pub platform: Option<PlatformId>,
}

pub trait PhysicsQuery {
    /// First hit along `direction` within `max_distance` on any layer in `mask`.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask)
        -> Option<RayHit>;
}

/// The controlled character's transform and rigid body.
pub trait CharacterBody {
    fn transform(&self) -> &Transform;
    fn transform_mut(&mut self) -> &mut Transform;
    fn velocity(&self) -> Vec3;
    /// Instantaneous change in momentum.
    fn add_impulse(&mut self, impulse: Vec3);
    fn set_use_gravity(&mut self, enabled: bool);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layers_resolve_by_name() {
        let layers = CollisionLayers::default();
        assert_eq!(layers.mask(&[GROUND_LAYER]).unwrap(), LayerMask(1 << 8));
        assert_eq!(
            layers.mask(&[GROUND_LAYER, MOVING_PLATFORM_LAYER]).unwrap(),
            LayerMask((1 << 8) | (1 << 9))
        );
        assert_eq!(layers.mask(&[]).unwrap(), LayerMask::NONE);
    }

    #[test]
    fn unknown_layer_is_rejected() {
        let layers = CollisionLayers::default();
        match layers.mask(&[GROUND_LAYER, "Water"]) {
            Err(ConfigError::UnknownLayer(name)) => assert_eq!(name, "Water"),
            other => panic!("Expected UnknownLayer, got {:?}", other),
        }
    }

    #[test]
    fn custom_tables_override_defaults() {
        let layers = CollisionLayers::empty().with_layer(GROUND_LAYER, 3);
        assert_eq!(layers.mask(&[GROUND_LAYER]).unwrap(), LayerMask(0b1000));
        assert!(layers.mask(&[MOVING_PLATFORM_LAYER]).is_err());
    }

    #[test]
    #[should_panic(expected = "Layer index must be below 32")]
    fn layer_index_out_of_range_panics() {
        CollisionLayers::empty().with_layer("Too High", 32);
    }

    #[test]
    fn masks_intersect_on_shared_bits() {
        let ground = LayerMask::from_layer(8);
        let both = ground.union(LayerMask::from_layer(9));
        assert!(both.intersects(ground));
        assert!(!LayerMask::from_layer(9).intersects(ground));
    }

    #[test]
    fn vector_arithmetic() {
        let v = Vec3::new(1.0, 2.0, 3.0) + Vec3::UP * 2.0 - Vec3::ONE;
        assert_eq!(v, Vec3::new(0.0, 3.0, 2.0));
    }
}
