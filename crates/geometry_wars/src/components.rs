//! Game-specific components
//!
//! Every entity carries the same [`Components`] struct of optional slots; the
//! set of filled slots is the entity's shape and may change over its life.

use vector_engine::ecs::components::{
    ColliderComponent, Color, Countdown, EmitterComponent, InvincibilityComponent,
    InvincibilityStart, LifespanComponent, LineComponent, OrbitComponent, ShapeComponent,
    TextComponent, TransformComponent, VelocityComponent,
};
use vector_engine::ecs::{Entity, EntityKey, EntityStore};
use vector_engine::foundation::math::Vec2;
use vector_engine::physics::Bounds;

/// Entity categories used for tag-indexed queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// The player ship
    Player,
    /// Enemies, their shards and tutorial letters
    Enemies,
    /// Player projectiles, lasers and particles
    Bullets,
    /// Collectible weapon pickups
    Pickups,
    /// The play-field rectangle
    WorldBounds,
    /// The score label
    ScoreWindow,
    /// Particle emitters
    Emitters,
}

impl Tag {
    /// Every tag in declaration order
    pub const ALL: [Self; 7] = [
        Self::Player,
        Self::Enemies,
        Self::Bullets,
        Self::Pickups,
        Self::WorldBounds,
        Self::ScoreWindow,
        Self::Emitters,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Enemies => "Enemies",
            Self::Bullets => "Bullets",
            Self::Pickups => "Pickups",
            Self::WorldBounds => "WorldBounds",
            Self::ScoreWindow => "ScoreWindow",
            Self::Emitters => "Emitters",
        }
    }

    /// Parse a display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

/// Primary weapon fire modes, which double as pickup payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireMode {
    /// One bullet straight ahead
    Single,
    /// A fan of bullets
    Spread,
    /// A line anchored to the ship
    Laser,
}

impl FireMode {
    /// Every mode in pickup order
    pub const ALL: [Self; 3] = [Self::Single, Self::Spread, Self::Laser];

    /// Config section prefix for this mode's power profiles
    pub fn profile_name(self) -> &'static str {
        match self {
            Self::Single => "ShotSingle",
            Self::Spread => "ShotSpread",
            Self::Laser => "ShotLaser",
        }
    }

    /// Special weapon that comes with this primary mode
    pub fn paired_special(self) -> SpecialMode {
        match self {
            Self::Single => SpecialMode::Explosion,
            Self::Spread => SpecialMode::Rotor,
            Self::Laser => SpecialMode::Flamethrower,
        }
    }

    /// Outline color used for bosses and pickups carrying this mode
    pub fn signature_color(self) -> Color {
        match self {
            Self::Single => Color::rgb(255, 0, 0),
            Self::Spread => Color::rgb(0, 255, 0),
            Self::Laser => Color::rgb(0, 0, 255),
        }
    }
}

/// Special weapon modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMode {
    /// A shell that bursts into shrapnel when it expires
    Explosion,
    /// Bullets circling the ship
    Rotor,
    /// A cone of short-lived particles
    Flamethrower,
}

impl SpecialMode {
    /// Config section prefix for this mode's power profiles
    pub fn profile_name(self) -> &'static str {
        match self {
            Self::Explosion => "SpecialExplosion",
            Self::Rotor => "SpecialRotor",
            Self::Flamethrower => "SpecialFlamethrower",
        }
    }
}

/// Hit points plus the squash-on-hit reaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthComponent {
    /// Current hit points
    pub hp: i32,
    /// Hit points at spawn
    pub max_hp: i32,
    /// Reaction countdown, restarted on every hit
    pub react: Countdown,
    /// Render scale at the peak of the reaction
    pub expansion: f32,
}

impl HealthComponent {
    /// Full health with a 10 tick, 1.5x reaction
    pub fn new(hp: i32) -> Self {
        Self {
            hp,
            max_hp: hp,
            react: Countdown::spent(10),
            expansion: 1.5,
        }
    }

    /// Override the hit reaction
    pub fn with_reaction(mut self, duration: i32, expansion: f32) -> Self {
        self.react = Countdown::spent(duration);
        self.expansion = expansion;
        self
    }

    /// Current render scale of the reaction
    pub fn reaction_scale(&self) -> f32 {
        1.0 + (self.expansion - 1.0) * self.react.fraction()
    }
}

/// Primary weapon state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponComponent {
    /// Fire mode
    pub mode: FireMode,
    /// Upgrade level selecting the config profile
    pub power: u32,
    /// Ticks until the weapon may fire again
    pub cooldown: Countdown,
}

impl WeaponComponent {
    /// Power 0 weapon ready to fire
    pub fn new(mode: FireMode) -> Self {
        Self {
            mode,
            power: 0,
            cooldown: Countdown::default(),
        }
    }

    /// Config section of the active profile
    pub fn profile(&self) -> String {
        format!("{}{}", self.mode.profile_name(), self.power)
    }
}

/// Special weapon state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialWeaponComponent {
    /// Special mode
    pub mode: SpecialMode,
    /// Upgrade level selecting the config profile
    pub power: u32,
    /// Ticks until the weapon may fire again
    pub cooldown: Countdown,
}

impl SpecialWeaponComponent {
    /// Power 0 special ready to fire
    pub fn new(mode: SpecialMode) -> Self {
        Self {
            mode,
            power: 0,
            cooldown: Countdown::default(),
        }
    }

    /// Config section of the active profile
    pub fn profile(&self) -> String {
        format!("{}{}", self.mode.profile_name(), self.power)
    }
}

/// Control intent for this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputComponent {
    /// Movement axis, each component in {-1, 0, 1}
    pub axis: Vec2,
    /// Aim point in world coordinates
    pub cursor: Vec2,
    /// Primary fire held
    pub fire: bool,
    /// Special fire held
    pub secondary_fire: bool,
}

/// Player-only tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStatsComponent {
    /// Lives at the start of a run
    pub max_lives: i32,
    /// Lives left, including the current ship
    pub lives: i32,
    /// Movement speed per tick
    pub speed: f32,
    /// Invincibility blink period in ticks
    pub flicker_frequency: i32,
}

/// What an entity bursts into when it dies
#[derive(Debug, Clone, PartialEq)]
pub struct DeathSpawnerComponent {
    /// Shape of each shard
    pub prefab: ShapeComponent,
    /// Tag the shards are created under
    pub tag: Tag,
    /// Number of shards
    pub amount: u32,
    /// Shard lifespan in ticks
    pub lifespan: i32,
    /// Shard speed
    pub speed: f32,
    /// How many more generations of shards may follow
    pub recursion: u32,
}

/// Pickup a boss drops on death
#[derive(Debug, Clone, PartialEq)]
pub struct PickupSpawnerComponent {
    /// Weapon granted by the pickup
    pub pickup: FireMode,
    /// Pickup shape
    pub shape: ShapeComponent,
    /// Ticks before the pickup disappears
    pub lifespan: i32,
    /// Pickup collision radius
    pub collision_radius: f32,
}

/// Score granted when this entity dies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRewardComponent {
    /// Points
    pub value: i64,
}

/// Weapon granted when this pickup is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponPickupComponent {
    /// Weapon mode
    pub mode: FireMode,
}

/// Optional component slots carried by every entity
#[derive(Debug, Clone, Default)]
pub struct Components {
    /// Position, rotation and scale
    pub transform: Option<TransformComponent>,
    /// Per-tick motion
    pub velocity: Option<VelocityComponent>,
    /// Collision circle
    pub collider: Option<ColliderComponent>,
    /// Expiry countdown
    pub lifespan: Option<LifespanComponent>,
    /// Hit immunity window
    pub invincibility: Option<InvincibilityComponent>,
    /// Hit points
    pub health: Option<HealthComponent>,
    /// Polygon visual
    pub shape: Option<ShapeComponent>,
    /// Anchored segment visual, also a laser hit line
    pub line: Option<LineComponent>,
    /// Label visual
    pub text: Option<TextComponent>,
    /// Primary weapon
    pub weapon: Option<WeaponComponent>,
    /// Special weapon
    pub special_weapon: Option<SpecialWeaponComponent>,
    /// Control intent
    pub input: Option<InputComponent>,
    /// Player tuning
    pub player_stats: Option<PlayerStatsComponent>,
    /// Shards on death
    pub death_spawner: Option<DeathSpawnerComponent>,
    /// Pickup on death
    pub pickup_spawner: Option<PickupSpawnerComponent>,
    /// Points on death
    pub score_reward: Option<ScoreRewardComponent>,
    /// Pickup payload
    pub weapon_pickup: Option<WeaponPickupComponent>,
    /// Particle emitter
    pub emitter: Option<EmitterComponent>,
    /// Orbit around a parent
    pub orbit: Option<OrbitComponent>,
    /// Play-field rectangle
    pub bounds: Option<Bounds>,
}

/// Entity store specialised for the game
pub type World = EntityStore<Tag, Components>;

/// Entity record specialised for the game
pub type GameEntity = Entity<Tag, Components>;

/// Catalogue of component kinds, for tools that inspect or edit entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// [`TransformComponent`]
    Transform,
    /// [`VelocityComponent`]
    Velocity,
    /// [`ColliderComponent`]
    Collider,
    /// [`LifespanComponent`]
    Lifespan,
    /// [`InvincibilityComponent`]
    Invincibility,
    /// [`HealthComponent`]
    Health,
    /// [`ShapeComponent`]
    Shape,
    /// [`LineComponent`]
    Line,
    /// [`TextComponent`]
    Text,
    /// [`WeaponComponent`]
    Weapon,
    /// [`SpecialWeaponComponent`]
    SpecialWeapon,
    /// [`InputComponent`]
    Input,
    /// [`PlayerStatsComponent`]
    PlayerStats,
    /// [`DeathSpawnerComponent`]
    DeathSpawner,
    /// [`PickupSpawnerComponent`]
    PickupSpawner,
    /// [`ScoreRewardComponent`]
    ScoreReward,
    /// [`WeaponPickupComponent`]
    WeaponPickup,
    /// [`EmitterComponent`]
    Emitter,
    /// [`OrbitComponent`]
    Orbit,
    /// [`Bounds`]
    Bounds,
}

impl ComponentKind {
    /// Every kind in slot order
    pub const ALL: [Self; 20] = [
        Self::Transform,
        Self::Velocity,
        Self::Collider,
        Self::Lifespan,
        Self::Invincibility,
        Self::Health,
        Self::Shape,
        Self::Line,
        Self::Text,
        Self::Weapon,
        Self::SpecialWeapon,
        Self::Input,
        Self::PlayerStats,
        Self::DeathSpawner,
        Self::PickupSpawner,
        Self::ScoreReward,
        Self::WeaponPickup,
        Self::Emitter,
        Self::Orbit,
        Self::Bounds,
    ];

    /// Kinds that follow another entity
    pub fn is_parent_relative(self) -> bool {
        matches!(self, Self::Line | Self::Orbit | Self::Emitter)
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::Velocity => "Velocity",
            Self::Collider => "Collider",
            Self::Lifespan => "Lifespan",
            Self::Invincibility => "Invincibility",
            Self::Health => "Health",
            Self::Shape => "Shape",
            Self::Line => "Line",
            Self::Text => "Text",
            Self::Weapon => "Weapon",
            Self::SpecialWeapon => "SpecialWeapon",
            Self::Input => "Input",
            Self::PlayerStats => "PlayerStats",
            Self::DeathSpawner => "DeathSpawner",
            Self::PickupSpawner => "PickupSpawner",
            Self::ScoreReward => "ScoreReward",
            Self::WeaponPickup => "WeaponPickup",
            Self::Emitter => "Emitter",
            Self::Orbit => "Orbit",
            Self::Bounds => "Bounds",
        }
    }
}

impl Components {
    /// Whether the slot for `kind` is filled
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transform.is_some(),
            ComponentKind::Velocity => self.velocity.is_some(),
            ComponentKind::Collider => self.collider.is_some(),
            ComponentKind::Lifespan => self.lifespan.is_some(),
            ComponentKind::Invincibility => self.invincibility.is_some(),
            ComponentKind::Health => self.health.is_some(),
            ComponentKind::Shape => self.shape.is_some(),
            ComponentKind::Line => self.line.is_some(),
            ComponentKind::Text => self.text.is_some(),
            ComponentKind::Weapon => self.weapon.is_some(),
            ComponentKind::SpecialWeapon => self.special_weapon.is_some(),
            ComponentKind::Input => self.input.is_some(),
            ComponentKind::PlayerStats => self.player_stats.is_some(),
            ComponentKind::DeathSpawner => self.death_spawner.is_some(),
            ComponentKind::PickupSpawner => self.pickup_spawner.is_some(),
            ComponentKind::ScoreReward => self.score_reward.is_some(),
            ComponentKind::WeaponPickup => self.weapon_pickup.is_some(),
            ComponentKind::Emitter => self.emitter.is_some(),
            ComponentKind::Orbit => self.orbit.is_some(),
            ComponentKind::Bounds => self.bounds.is_some(),
        }
    }

    /// Kinds whose slots are filled, in slot order
    pub fn kinds(&self) -> Vec<ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    /// Fill an empty slot with a neutral default; returns false if already filled
    ///
    /// Parent-relative kinds (line, orbit, emitter) are anchored to `anchor`.
    pub fn add_default(&mut self, kind: ComponentKind, anchor: EntityKey) -> bool {
        if self.has(kind) {
            return false;
        }
        let shape = || ShapeComponent::new(10.0, 3, Color::BLACK, Color::WHITE, 1.0);
        match kind {
            ComponentKind::Transform => self.transform = Some(TransformComponent::default()),
            ComponentKind::Velocity => self.velocity = Some(VelocityComponent::default()),
            ComponentKind::Collider => self.collider = Some(ColliderComponent::new(10.0)),
            ComponentKind::Lifespan => self.lifespan = Some(LifespanComponent::new(60)),
            ComponentKind::Invincibility => {
                self.invincibility = Some(InvincibilityComponent::new(60, InvincibilityStart::Spent));
            }
            ComponentKind::Health => self.health = Some(HealthComponent::new(1)),
            ComponentKind::Shape => self.shape = Some(shape()),
            ComponentKind::Line => {
                self.line = Some(LineComponent {
                    parent: anchor,
                    start: Vec2::zeros(),
                    end: Vec2::new(100.0, 0.0),
                    thickness: 1.0,
                    fill: Color::WHITE,
                    outline: Color::WHITE,
                    outline_thickness: 0.0,
                });
            }
            ComponentKind::Text => self.text = Some(TextComponent::new("", 16, Color::WHITE)),
            ComponentKind::Weapon => self.weapon = Some(WeaponComponent::new(FireMode::Single)),
            ComponentKind::SpecialWeapon => {
                self.special_weapon = Some(SpecialWeaponComponent::new(SpecialMode::Explosion));
            }
            ComponentKind::Input => self.input = Some(InputComponent::default()),
            ComponentKind::PlayerStats => {
                self.player_stats = Some(PlayerStatsComponent {
                    max_lives: 3,
                    lives: 3,
                    speed: 5.0,
                    flicker_frequency: 5,
                });
            }
            ComponentKind::DeathSpawner => {
                self.death_spawner = Some(DeathSpawnerComponent {
                    prefab: shape(),
                    tag: Tag::Enemies,
                    amount: 3,
                    lifespan: 30,
                    speed: 2.0,
                    recursion: 0,
                });
            }
            ComponentKind::PickupSpawner => {
                self.pickup_spawner = Some(PickupSpawnerComponent {
                    pickup: FireMode::Single,
                    shape: shape(),
                    lifespan: 300,
                    collision_radius: 10.0,
                });
            }
            ComponentKind::ScoreReward => self.score_reward = Some(ScoreRewardComponent { value: 0 }),
            ComponentKind::WeaponPickup => {
                self.weapon_pickup = Some(WeaponPickupComponent { mode: FireMode::Single });
            }
            ComponentKind::Emitter => {
                self.emitter = Some(EmitterComponent {
                    parent: anchor,
                    particles: vec![shape()],
                    offset: Vec2::zeros(),
                    spread: 0.5,
                    frequency: 1,
                    quantity: 1,
                    lifespan: 20,
                    speed: 3.0,
                    jitter: 1.0,
                    timer: Countdown::full(60),
                });
            }
            ComponentKind::Orbit => self.orbit = Some(OrbitComponent::new(anchor, 50.0, 0.05)),
            ComponentKind::Bounds => self.bounds = Some(Bounds::new(0.0, 0.0, 800.0, 600.0)),
        }
        true
    }
}
