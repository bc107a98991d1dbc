//=========================================================================
// Sandbox World
//=========================================================================
//
// A minimal stand-in physics backend: flat slabs, vertical gravity, and
// platforms that oscillate and carry whatever is parented to them.
//
//   ─────────────── ground (Ground)
//          ▭▭▭▭     moving platform (Ground + MovingPlatform)
//
// Bodies land on the top face of a slab when falling through it. Only
// straight-down rays are answered; that is all the locomotion probes use.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::TAU;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::game::error::ConfigError;
use crate::game::physics::{
    CharacterBody, CollisionLayers, LayerMask, PhysicsQuery, PlatformId, RayHit, Transform, Vec3,
    GROUND_LAYER, MOVING_PLATFORM_LAYER,
};

//=== Constants ===========================================================

pub const DEFAULT_GRAVITY: f32 = -9.81;

/// How far below a top face a ray origin may sit and still hit it.
const SKIN: f32 = 1e-3;

//=== Slab ================================================================

/// Periodic displacement around a slab's starting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub amplitude: Vec3,
    /// Seconds per full cycle.
    pub period: f32,
}

impl Oscillation {
    fn offset(&self, elapsed: f32) -> Vec3 {
        self.amplitude * (TAU * elapsed / self.period).sin()
    }
}

#[derive(Debug, Clone)]
pub struct Slab {
    /// Centre of the top face.
    pub top_center: Vec3,
    pub half_width: f32,
    pub layers: LayerMask,
    pub platform: Option<PlatformId>,
    motion: Option<Oscillation>,
    origin: Vec3,
}

impl Slab {
    fn contains_x(&self, x: f32) -> bool {
        (x - self.top_center.x).abs() <= self.half_width
    }
}

//=== SandboxWorld ========================================================

#[derive(Debug, Clone)]
pub struct SandboxWorld {
    slabs: Vec<Slab>,
    ground_mask: LayerMask,
    platform_mask: LayerMask,
    gravity: f32,
    elapsed: f32,
}

impl SandboxWorld {
    /// Fails with `UnknownLayer` when `layers` lacks Ground or MovingPlatform.
    pub fn new(layers: CollisionLayers) -> Result<Self, ConfigError> {
        let ground_mask = layers.mask(&[GROUND_LAYER])?;
        let platform_mask = layers.mask(&[GROUND_LAYER, MOVING_PLATFORM_LAYER])?;
        debug!(target: "sandbox", "Slab masks: ground {:?}, platform {:?}", ground_mask, platform_mask);

        Ok(Self {
            slabs: Vec::new(),
            ground_mask,
            platform_mask,
            gravity: DEFAULT_GRAVITY,
            elapsed: 0.0,
        })
    }

    /// Ground from x = -50 to 50 and one platform sliding left and right
    /// above it at x = 10.
    pub fn demo_level() -> Result<Self, ConfigError> {
        let motion = Oscillation { amplitude: Vec3::new(3.0, 0.0, 0.0), period: 4.0 };
        Ok(Self::new(CollisionLayers::default())?
            .with_ground(0.0, 0.0, 50.0)
            .with_platform(PlatformId(1), Vec3::new(10.0, 1.5, 0.0), 1.5, Some(motion)))
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Static slab on the Ground layer.
    pub fn with_ground(mut self, top: f32, center_x: f32, half_width: f32) -> Self {
        let top_center = Vec3::new(center_x, top, 0.0);
        self.slabs.push(Slab {
            top_center,
            half_width,
            layers: self.ground_mask,
            platform: None,
            motion: None,
            origin: top_center,
        });
        self
    }

    /// Platform on both the Ground and MovingPlatform layers.
    pub fn with_platform(
        mut self,
        id: PlatformId,
        top_center: Vec3,
        half_width: f32,
        motion: Option<Oscillation>,
    ) -> Self {
        self.slabs.push(Slab {
            top_center,
            half_width,
            layers: self.platform_mask,
            platform: Some(id),
            motion,
            origin: top_center,
        });
        self
    }

    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Slab> {
        self.slabs.iter().find(|slab| slab.platform == Some(id))
    }

    //--- Simulation -------------------------------------------------------

    /// Moves platforms, carries a parented body, then integrates and lands it.
    pub fn step(&mut self, body: &mut SandboxBody, dt: f32) {
        self.elapsed += dt;

        for slab in &mut self.slabs {
            let Some(motion) = slab.motion else { continue };
            let next = slab.origin + motion.offset(self.elapsed);
            let delta = next - slab.top_center;
            slab.top_center = next;

            if slab.platform.is_some() && body.transform.parent == slab.platform {
                body.transform.position += delta;
            }
        }

        if body.use_gravity {
            body.velocity.y += self.gravity * dt;
        }

        let previous_y = body.transform.position.y;
        body.transform.position += body.velocity * dt;

        if body.velocity.y <= 0.0 {
            let position = body.transform.position;
            let landing = self
                .slabs
                .iter()
                .filter(|slab| slab.contains_x(position.x))
                .map(|slab| slab.top_center.y)
                .filter(|&top| top <= previous_y + SKIN && top >= position.y)
                .fold(None, |best: Option<f32>, top| Some(best.map_or(top, |b| b.max(top))));

            if let Some(top) = landing {
                if body.velocity.y < -1.0 {
                    trace!(target: "sandbox", "Landed at y={} (v={:.2})", top, body.velocity.y);
                }
                body.transform.position.y = top;
                body.velocity.y = 0.0;
            }
        }
    }
}

impl PhysicsQuery for SandboxWorld {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        if direction.y >= 0.0 || direction.x != 0.0 || direction.z != 0.0 {
            trace!(target: "sandbox", "Unsupported ray direction {:?}", direction);
            return None;
        }

        self.slabs
            .iter()
            .filter(|slab| slab.layers.intersects(mask) && slab.contains_x(origin.x))
            .filter_map(|slab| {
                let gap = origin.y - slab.top_center.y;
                (gap >= -SKIN && gap <= max_distance).then(|| RayHit {
                    distance: gap.max(0.0),
                    point: Vec3::new(origin.x, slab.top_center.y, origin.z),
                    platform: slab.platform,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

//=== SandboxBody =========================================================

/// Unit-mass rigid body with no horizontal dynamics.
#[derive(Debug, Clone, Default)]
pub struct SandboxBody {
    pub transform: Transform,
    pub velocity: Vec3,
    pub use_gravity: bool,
}

impl SandboxBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            transform: Transform { position, ..Default::default() },
            ..Default::default()
        }
    }
}

impl CharacterBody for SandboxBody {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }

    fn set_use_gravity(&mut self, enabled: bool) {
        self.use_gravity = enabled;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn masks() -> (LayerMask, LayerMask) {
        let layers = CollisionLayers::default();
        (layers.mask(&[GROUND_LAYER]).unwrap(), layers.mask(&[MOVING_PLATFORM_LAYER]).unwrap())
    }

    fn static_world() -> SandboxWorld {
        SandboxWorld::new(CollisionLayers::default())
            .unwrap()
            .with_ground(0.0, 0.0, 50.0)
            .with_platform(PlatformId(7), Vec3::new(10.0, 2.0, 0.0), 1.0, None)
    }

    #[test]
    fn falling_body_lands_on_ground() {
        let mut world = static_world();
        let mut body = SandboxBody::at(Vec3::new(0.0, 1.0, 0.0));
        body.set_use_gravity(true);

        for _ in 0..100 {
            world.step(&mut body, 0.02);
        }

        assert_eq!(body.transform.position.y, 0.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn impulse_launches_then_lands() {
        let mut world = static_world();
        let mut body = SandboxBody::at(Vec3::ZERO);
        body.set_use_gravity(true);
        body.add_impulse(Vec3::UP * 10.0);

        world.step(&mut body, 0.02);
        assert!(body.transform.position.y > 0.1);

        for _ in 0..200 {
            world.step(&mut body, 0.02);
        }
        assert_eq!(body.transform.position.y, 0.0);
    }

    #[test]
    fn ground_probe_hits_within_reach_only() {
        let world = static_world();
        let (ground, _) = masks();

        assert!(world.raycast(Vec3::new(0.0, 0.05, 0.0), Vec3::DOWN, 0.1, ground).is_some());
        assert!(world.raycast(Vec3::new(0.0, 0.5, 0.0), Vec3::DOWN, 0.1, ground).is_none());
        assert!(world.raycast(Vec3::ZERO, Vec3::UP, 0.1, ground).is_none());
    }

    #[test]
    fn platform_probe_reports_platform_id() {
        let world = static_world();
        let (ground, platform) = masks();
        let on_platform = Vec3::new(10.0, 2.0, 0.0);

        let hit = world.raycast(on_platform, Vec3::DOWN, 0.1, platform).unwrap();
        assert_eq!(hit.platform, Some(PlatformId(7)));
        assert!(world.raycast(on_platform, Vec3::DOWN, 0.1, ground).is_some());

        assert!(world.raycast(Vec3::ZERO, Vec3::DOWN, 0.1, platform).is_none());
    }

    #[test]
    fn missing_layers_are_rejected_at_construction() {
        let no_ground = CollisionLayers::empty().with_layer(MOVING_PLATFORM_LAYER, 9);
        match SandboxWorld::new(no_ground) {
            Err(ConfigError::UnknownLayer(name)) => assert_eq!(name, GROUND_LAYER),
            other => panic!("Expected UnknownLayer, got {:?}", other.map(|w| w.slabs().len())),
        }

        let no_platforms = CollisionLayers::empty().with_layer(GROUND_LAYER, 8);
        assert!(matches!(
            SandboxWorld::new(no_platforms),
            Err(ConfigError::UnknownLayer(name)) if name == MOVING_PLATFORM_LAYER
        ));
    }

    #[test]
    fn renumbered_layers_still_resolve() {
        let layers = CollisionLayers::empty()
            .with_layer(GROUND_LAYER, 3)
            .with_layer(MOVING_PLATFORM_LAYER, 4);
        let world = SandboxWorld::new(layers).unwrap().with_ground(0.0, 0.0, 50.0);

        let probe = Vec3::new(0.0, 0.05, 0.0);
        assert!(world.raycast(probe, Vec3::DOWN, 0.1, LayerMask::from_layer(3)).is_some());
        assert!(world.raycast(probe, Vec3::DOWN, 0.1, LayerMask::from_layer(8)).is_none());
    }

    #[test]
    fn parented_body_rides_the_platform() {
        let motion = Oscillation { amplitude: Vec3::new(1.0, 0.0, 0.0), period: 2.0 };
        let mut world = SandboxWorld::new(CollisionLayers::default()).unwrap().with_platform(
            PlatformId(1),
            Vec3::new(0.0, 1.0, 0.0),
            2.0,
            Some(motion),
        );
        let mut rider = SandboxBody::at(Vec3::new(0.0, 1.0, 0.0));
        rider.transform.parent = Some(PlatformId(1));
        let mut bystander = SandboxBody::at(Vec3::new(0.0, 1.0, 0.0));

        world.step(&mut rider, 0.1);
        let platform_x = world.platform(PlatformId(1)).unwrap().top_center.x;
        assert!(platform_x > 0.0);
        assert!((rider.transform.position.x - platform_x).abs() < 1e-6);

        world.step(&mut bystander, 0.1);
        assert_eq!(bystander.transform.position.x, 0.0);
    }
}
