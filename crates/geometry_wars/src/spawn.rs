//! Entity builders
//!
//! Each builder turns named config parameters into one fully assembled
//! entity. Missing config values degrade to sentinels rather than aborting a
//! spawn, so a broken key shows up as a visibly wrong entity.

use rand::Rng;
use vector_engine::config::{ConfigReader, ConfigStore};
use vector_engine::ecs::components::{
    ColliderComponent, Color, EmitterComponent, InvincibilityComponent, InvincibilityStart,
    LifespanComponent, ShapeComponent, TextComponent, TransformComponent, VelocityComponent,
};
use vector_engine::ecs::EntityKey;
use vector_engine::foundation::math::{constants::TAU, Vec2, Vec2Ext};

use crate::components::{
    DeathSpawnerComponent, FireMode, HealthComponent, InputComponent, PickupSpawnerComponent,
    PlayerStatsComponent, ScoreRewardComponent, SpecialMode, SpecialWeaponComponent, Tag,
    WeaponComponent, WeaponPickupComponent,
};
use crate::Simulation;

/// Rejection-sampling attempts per axis before accepting a spot near the player
const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Read `<prefix>Red`, `<prefix>Green` and `<prefix>Blue` as a color
pub(crate) fn read_color(config: &ConfigStore, section: &str, prefix: &str) -> Color {
    Color::from_ints(
        config.read_int(section, &format!("{prefix}Red")),
        config.read_int(section, &format!("{prefix}Green")),
        config.read_int(section, &format!("{prefix}Blue")),
    )
}

/// Read a non-negative count; sentinels become zero
pub(crate) fn read_count(config: &ConfigStore, section: &str, key: &str) -> u32 {
    u32::try_from(config.read_int(section, key)).unwrap_or(0)
}

/// Shape, collision radius and lifespan shared by every projectile profile
pub(crate) struct ProjectileStyle {
    pub shape: ShapeComponent,
    pub collision_radius: f32,
    pub lifespan: i32,
}

impl ProjectileStyle {
    pub(crate) fn from_config(config: &ConfigStore, section: &str) -> Self {
        Self {
            shape: ShapeComponent::new(
                config.read_float(section, "shapeRadius"),
                read_count(config, section, "vertices"),
                read_color(config, section, "fill"),
                read_color(config, section, "outline"),
                config.read_float(section, "outlineThickness"),
            ),
            collision_radius: config.read_float(section, "collisionRadius"),
            lifespan: config.read_int(section, "lifespan"),
        }
    }
}

impl Simulation {
    /// Uniform float in `[low, high)`, or `low` for an empty range
    pub(crate) fn random_between(&mut self, low: f32, high: f32) -> f32 {
        if high > low {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    /// Uniform integer in `[low, high]`, or `low` for an empty range
    pub(crate) fn random_int(&mut self, low: i32, high: i32) -> i32 {
        if high > low {
            self.rng.gen_range(low..=high)
        } else {
            low
        }
    }

    fn hit_reaction(&self, health: HealthComponent) -> HealthComponent {
        health.with_reaction(self.settings.react_duration, self.settings.react_expansion)
    }

    /// The play-field rectangle, created once at startup
    pub fn spawn_world_bounds(&mut self) -> EntityKey {
        let bounds = self.settings.play_field();
        let key = self.world.create(Tag::WorldBounds);
        if let Some(entity) = self.world.get_mut(key) {
            entity.bounds = Some(bounds);
        }
        key
    }

    /// The score label
    pub fn spawn_score_window(&mut self) -> EntityKey {
        let section = "ScoreWindow";
        let position = Vec2::new(
            self.config.read_float(section, "x"),
            self.config.read_float(section, "y"),
        );
        let font_size = read_count(&self.config, section, "fontSize");
        let color = read_color(&self.config, section, "text");

        let key = self.world.create(Tag::ScoreWindow);
        if let Some(entity) = self.world.get_mut(key) {
            entity.transform = Some(TransformComponent::at(position));
            entity.text = Some(TextComponent::new("Score: 0", font_size, color));
        }
        key
    }

    /// Rewrite every score label from the current score
    pub(crate) fn update_score_display(&mut self) {
        let content = format!("Score: {}", self.state.score);
        for key in self.world.entities_by_tag(Tag::ScoreWindow).to_vec() {
            if let Some(text) = self.world.get_mut(key).and_then(|e| e.text.as_mut()) {
                text.content.clone_from(&content);
            }
        }
    }

    /// The player ship, centered in the play field
    pub fn spawn_player(&mut self) -> EntityKey {
        let section = "Player";
        let config = &self.config;
        let speed = config.read_float(section, "speed");
        let shape = ShapeComponent::new(
            config.read_float(section, "shapeRadius"),
            read_count(config, section, "vertices"),
            read_color(config, section, "fill"),
            read_color(config, section, "outline"),
            config.read_float(section, "outlineThickness"),
        );
        let collision_radius = config.read_float(section, "collisionRadius");
        let hp = config.read_int(section, "health");
        let invincibility_duration = config.read_int(section, "invincibilityDuration");
        let flicker_frequency = config.read_int(section, "flickerRate");
        let start = if config.read_int(section, "spawnInvincible") > 0 {
            InvincibilityStart::Active
        } else {
            InvincibilityStart::Spent
        };

        let center = self.settings.play_field().center();
        let health = self.hit_reaction(HealthComponent::new(hp));
        let stats = PlayerStatsComponent {
            max_lives: self.settings.lives,
            lives: self.state.lives,
            speed,
            flicker_frequency,
        };

        let key = self.world.create(Tag::Player);
        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            c.transform = Some(TransformComponent::at(center));
            c.velocity = Some(VelocityComponent::default());
            c.weapon = Some(WeaponComponent::new(FireMode::Single));
            c.special_weapon = Some(SpecialWeaponComponent::new(SpecialMode::Explosion));
            c.shape = Some(shape);
            c.collider = Some(ColliderComponent::new(collision_radius));
            c.input = Some(InputComponent::default());
            c.health = Some(health);
            c.invincibility = Some(InvincibilityComponent::new(invincibility_duration, start));
            c.player_stats = Some(stats);
        }
        log::info!("Player spawned with {} lives left", self.state.lives);
        key
    }

    /// A random enemy from the "Enemy" profile
    pub fn spawn_enemy(&mut self) -> EntityKey {
        let key = self.world.create(Tag::Enemies);
        self.setup_random_enemy(key, "Enemy");
        log::debug!("Enemy spawned");
        key
    }

    /// A random enemy from the "Boss" profile that drops a weapon pickup
    pub fn spawn_boss(&mut self) -> EntityKey {
        let key = self.world.create(Tag::Enemies);
        self.setup_random_enemy(key, "Boss");

        let reward = FireMode::ALL[self.rng.gen_range(0..FireMode::ALL.len())];
        let section = "Pickup";
        let color = reward.signature_color();
        let spawner = PickupSpawnerComponent {
            pickup: reward,
            shape: ShapeComponent::new(
                self.config.read_float(section, "shapeRadius"),
                read_count(&self.config, section, "vertices"),
                color.with_alpha(128),
                color,
                self.config.read_float(section, "outlineThickness"),
            ),
            lifespan: self.config.read_int(section, "lifespan"),
            collision_radius: self.config.read_float(section, "collisionRadius"),
        };

        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            if let Some(shape) = c.shape.as_mut() {
                shape.outline = color;
            }
            if let Some(shards) = c.death_spawner.as_mut() {
                shards.prefab.outline = color;
            }
            c.pickup_spawner = Some(spawner);
        }
        log::info!("Boss spawned carrying {:?}", reward);
        key
    }

    /// Fill an enemy entity from a config profile
    ///
    /// Vertex count is random; size, collision radius and score grow linearly
    /// with the vertices above the profile minimum.
    pub(crate) fn setup_random_enemy(&mut self, key: EntityKey, section: &str) {
        let config = &self.config;
        let shape_radius = config.read_float(section, "shapeRadius");
        let collision_radius = config.read_float(section, "collisionRadius");
        let speed_min = config.read_float(section, "speedMin");
        let speed_max = config.read_float(section, "speedMax");
        let outline = read_color(config, section, "outline");
        let outline_thickness = config.read_float(section, "outlineThickness");
        let vertices_min = config.read_int(section, "verticesMin");
        let vertices_max = config.read_int(section, "verticesMax");
        let size_mult = config.read_float(section, "vertSizeMultiplier");
        let small_radius = config.read_float(section, "smallRadius");
        let small_lifespan = config.read_int(section, "smallLifespan");
        let small_speed = config.read_float(section, "smallSpeed");
        let invincibility_duration = config.read_int(section, "invincibilityDuration");
        let base_score = config.read_int(section, "score");
        let score_mult = config.read_float(section, "scoreSizeMultiplier");

        let speed = self.random_between(speed_min, speed_max);
        let heading = self.random_between(0.0, 360.0);
        let vertices = self.random_int(vertices_min, vertices_max).max(0);
        let steps = (vertices - vertices_min).max(0) as f32;

        let score = base_score as f32 + base_score as f32 * ((score_mult - 1.0) * steps);
        let radius = shape_radius + shape_radius * ((size_mult - 1.0) * steps);
        let collider = collision_radius + collision_radius * ((size_mult - 1.0) * steps);
        let position = self.random_spawn_position(collider);
        let vertex_count = vertices as u32;

        let shards = DeathSpawnerComponent {
            prefab: ShapeComponent::new(small_radius, vertex_count, Color::BLACK, outline, outline_thickness),
            tag: Tag::Enemies,
            amount: vertex_count,
            lifespan: small_lifespan,
            speed: small_speed,
            recursion: 0,
        };
        let health = self.hit_reaction(HealthComponent::new(vertices));

        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            c.transform = Some(TransformComponent::at(position));
            c.shape = Some(ShapeComponent::new(radius, vertex_count, Color::BLACK, outline, outline_thickness));
            c.collider = Some(ColliderComponent::new(collider));
            c.velocity = Some(VelocityComponent::new(Vec2::forward().rotated_deg(heading) * speed));
            c.health = Some(health);
            c.invincibility = Some(InvincibilityComponent::new(invincibility_duration, InvincibilityStart::Active));
            c.score_reward = Some(ScoreRewardComponent { value: score as i64 });
            c.death_spawner = Some(shards);
        }
    }

    /// Random point inside the spawn area, kept out of the player's row and column
    ///
    /// Each axis is resampled on its own while it falls inside the band of
    /// `2 * player collider + collision_radius` around the player.
    pub(crate) fn random_spawn_position(&mut self, collision_radius: f32) -> Vec2 {
        let area = self.settings.play_field().spawn_area();
        let keep_out = self.player().and_then(|key| {
            let entity = self.world.get(key)?;
            let transform = entity.transform?;
            let collider = entity.collider?;
            Some((transform.position, collider.radius * 2.0 + collision_radius))
        });

        let mut x = self.random_between(area.left, area.right());
        let mut y = self.random_between(area.top, area.bottom());
        if let Some((center, band)) = keep_out {
            let mut x_attempts = 0;
            while center.x - band < x && x < center.x + band && x_attempts < MAX_SPAWN_ATTEMPTS {
                x = self.random_between(area.left, area.right());
                x_attempts += 1;
            }
            let mut y_attempts = 0;
            while center.y - band < y && y < center.y + band && y_attempts < MAX_SPAWN_ATTEMPTS {
                y = self.random_between(area.top, area.bottom());
                y_attempts += 1;
            }
            if x_attempts == MAX_SPAWN_ATTEMPTS || y_attempts == MAX_SPAWN_ATTEMPTS {
                log::warn!("Spawn band around the player covers the play field");
            }
        }
        Vec2::new(x, y)
    }

    /// A projectile from a weapon profile
    ///
    /// Rotor bullets pass `None` for velocity and get an orbit instead.
    pub(crate) fn spawn_bullet(
        &mut self,
        position: Vec2,
        rotation: f32,
        velocity: Option<Vec2>,
        style: &ProjectileStyle,
    ) -> EntityKey {
        let health = self.hit_reaction(HealthComponent::new(1));
        let key = self.world.create(Tag::Bullets);
        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            c.transform = Some(TransformComponent::new(position, rotation));
            c.velocity = velocity.map(VelocityComponent::new);
            c.shape = Some(style.shape.clone());
            c.collider = Some(ColliderComponent::new(style.collision_radius));
            c.health = Some(health);
            c.lifespan = Some(LifespanComponent::new(style.lifespan));
        }
        key
    }

    /// Shards radiating from `position`, evenly spaced around a full circle
    pub fn spawn_small_entities(&mut self, position: Vec2, spawner: &DeathSpawnerComponent) -> Vec<EntityKey> {
        if spawner.amount == 0 {
            return Vec::new();
        }
        let step = TAU / spawner.amount as f32;
        let reward = (spawner.tag == Tag::Enemies).then(|| ScoreRewardComponent {
            value: i64::from(self.config.read_int("Enemy", "smallScore")),
        });
        let next_generation = spawner.recursion.checked_sub(1).map(|recursion| DeathSpawnerComponent {
            recursion,
            ..spawner.clone()
        });
        let health = self.hit_reaction(HealthComponent::new(1));

        (0..spawner.amount)
            .map(|i| {
                let angle = step * i as f32;
                let direction = Vec2::forward().rotated(angle);
                let key = self.world.create(spawner.tag);
                if let Some(entity) = self.world.get_mut(key) {
                    let c = entity.components_mut();
                    c.transform = Some(TransformComponent::new(
                        position + direction * spawner.prefab.radius,
                        angle,
                    ));
                    c.velocity = Some(VelocityComponent::new(direction * spawner.speed));
                    c.shape = Some(spawner.prefab.clone());
                    c.collider = Some(ColliderComponent::new(spawner.prefab.radius));
                    c.health = Some(health);
                    c.lifespan = Some(LifespanComponent::new(spawner.lifespan));
                    c.score_reward = reward;
                    c.death_spawner.clone_from(&next_generation);
                }
                key
            })
            .collect()
    }

    /// A collectible weapon pickup
    pub fn spawn_pickup(&mut self, position: Vec2, spawner: &PickupSpawnerComponent) -> EntityKey {
        let key = self.world.create(Tag::Pickups);
        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            c.transform = Some(TransformComponent::at(position));
            c.shape = Some(spawner.shape.clone());
            c.collider = Some(ColliderComponent::new(spawner.collision_radius));
            c.lifespan = Some(LifespanComponent::new(spawner.lifespan));
            c.weapon_pickup = Some(WeaponPickupComponent { mode: spawner.pickup });
        }
        log::debug!("Pickup {:?} dropped", spawner.pickup);
        key
    }

    /// One particle from an emitter, placed relative to its parent
    pub(crate) fn spawn_particle(&mut self, emitter: &EmitterComponent, parent: &TransformComponent) -> Option<EntityKey> {
        if emitter.particles.is_empty() {
            return None;
        }
        let shape = emitter.particles[self.rng.gen_range(0..emitter.particles.len())].clone();
        let half_spread = emitter.spread / 2.0;
        let angle = parent.rotation + self.random_between(-half_spread, half_spread);
        let lifespan = emitter.jittered(emitter.lifespan as f32, self.rng.gen::<f32>()) as i32;
        let speed = emitter.jittered(emitter.speed, self.rng.gen::<f32>());

        let key = self.world.create(Tag::Bullets);
        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            c.transform = Some(TransformComponent::new(
                parent.position + emitter.offset.rotated(angle),
                parent.rotation,
            ));
            c.velocity = Some(VelocityComponent::new(Vec2::forward().rotated(angle) * speed));
            c.collider = Some(ColliderComponent::new(shape.radius));
            c.shape = Some(shape);
            c.lifespan = Some(LifespanComponent::new(lifespan));
        }
        Some(key)
    }

    /// Width of `text` laid out with the current glyph metrics
    pub fn measure_text(&self, text: &str, font_size: u32, spacing: f32) -> f32 {
        text.chars()
            .map(|glyph| self.glyphs.advance(glyph, font_size) + spacing)
            .sum()
    }

    /// One destructible letter per character, released through the scheduled queue
    ///
    /// Whitespace advances the cursor without creating an entity.
    pub fn spawn_text_enemies(
        &mut self,
        text: &str,
        origin: Vec2,
        font_size: u32,
        color: Color,
        spacing: f32,
        score: i64,
    ) -> Vec<EntityKey> {
        let health = self.hit_reaction(HealthComponent::new(1));
        let mut cursor = origin.x;
        let mut letters = Vec::new();

        for glyph in text.chars() {
            let advance = self.glyphs.advance(glyph, font_size);
            if !glyph.is_whitespace() {
                let key = self.world.schedule(Tag::Enemies);
                if let Some(entity) = self.world.get_mut(key) {
                    let c = entity.components_mut();
                    c.transform = Some(TransformComponent::at(Vec2::new(cursor, origin.y)));
                    c.text = Some(TextComponent::new(glyph.to_string(), font_size, color));
                    c.collider = Some(ColliderComponent::new(font_size as f32 / 2.0));
                    c.health = Some(health);
                    c.score_reward = Some(ScoreRewardComponent { value: score });
                }
                letters.push(key);
            }
            cursor += advance + spacing;
        }
        letters
    }

    /// Queue the onboarding lines as letter enemies, centered horizontally
    pub fn spawn_tutorial(&mut self) {
        let section = "Tutorial";
        let lines = self.config.read_int(section, "lines").max(0);
        let font_size = read_count(&self.config, section, "fontSize");
        let spacing = self.config.read_float(section, "spacing");
        let line_spacing = self.config.read_float(section, "lineSpacing");
        let top = self.config.read_float(section, "top");
        let color = read_color(&self.config, section, "text");
        let score = i64::from(self.config.read_int(section, "letterScore"));
        let center_x = self.settings.play_field().center().x;

        for line in 0..lines {
            let text = self.config.read_string(section, &format!("line{line}"));
            let width = self.measure_text(&text, font_size, spacing);
            let origin = Vec2::new(center_x - width / 2.0, top + line as f32 * line_spacing);
            self.spawn_text_enemies(&text, origin, font_size, color, spacing, score);
        }
        self.state.tutorial_spawned = true;
        log::debug!("Tutorial queued: {} lines", lines);
    }
}
