//! Weapon fire modes
//!
//! A weapon's mode and power pick a config profile named `<Mode><power>`,
//! e.g. `ShotSpread2`. Firing reads the profile, spawns projectiles and puts
//! the weapon on cooldown for `fireRate` ticks.

use vector_engine::config::ConfigReader;
use vector_engine::ecs::components::{
    Color, Countdown, EmitterComponent, LifespanComponent, LineComponent, OrbitComponent,
    ShapeComponent, TransformComponent,
};
use vector_engine::ecs::EntityKey;
use vector_engine::foundation::math::{constants::TAU, utils, Vec2, Vec2Ext};

use crate::components::{DeathSpawnerComponent, FireMode, SpecialMode, Tag};
use crate::spawn::{read_color, read_count, ProjectileStyle};
use crate::Simulation;

impl Simulation {
    /// Fire the shooter's primary weapon if it is off cooldown
    pub fn shoot(&mut self, shooter: EntityKey) {
        let Some(entity) = self.world.get(shooter) else {
            return;
        };
        let (Some(transform), Some(weapon)) = (entity.transform, entity.weapon) else {
            return;
        };
        if weapon.cooldown.is_active() {
            return;
        }

        let profile = weapon.profile();
        match weapon.mode {
            FireMode::Single => self.fire_single(&transform, &profile),
            FireMode::Spread => self.fire_spread(&transform, &profile),
            FireMode::Laser => self.fire_laser(shooter, &transform, &profile),
        }

        let fire_rate = self.config.read_int(&profile, "fireRate");
        if let Some(weapon) = self.world.get_mut(shooter).and_then(|e| e.weapon.as_mut()) {
            weapon.cooldown = Countdown::full(fire_rate);
        }
    }

    /// Fire the shooter's special weapon if it is off cooldown
    pub fn shoot_special(&mut self, shooter: EntityKey) {
        let Some(entity) = self.world.get(shooter) else {
            return;
        };
        let (Some(transform), Some(special)) = (entity.transform, entity.special_weapon) else {
            return;
        };
        if special.cooldown.is_active() {
            return;
        }

        let profile = special.profile();
        match special.mode {
            SpecialMode::Explosion => self.fire_explosion(&transform, &profile),
            SpecialMode::Rotor => self.fire_rotor(shooter, &transform, &profile),
            SpecialMode::Flamethrower => self.fire_flamethrower(shooter, &transform, &profile),
        }

        let fire_rate = self.config.read_int(&profile, "fireRate");
        if let Some(special) = self.world.get_mut(shooter).and_then(|e| e.special_weapon.as_mut()) {
            special.cooldown = Countdown::full(fire_rate);
        }
        log::debug!("Special {} fired", profile);
    }

    fn fire_single(&mut self, origin: &TransformComponent, profile: &str) {
        let style = ProjectileStyle::from_config(&self.config, profile);
        let speed = self.config.read_float(profile, "speed");
        self.spawn_bullet(
            origin.position,
            origin.rotation,
            Some(origin.facing() * speed),
            &style,
        );
    }

    fn fire_spread(&mut self, origin: &TransformComponent, profile: &str) {
        let style = ProjectileStyle::from_config(&self.config, profile);
        let speed = self.config.read_float(profile, "speed");
        let amount = read_count(&self.config, profile, "amount").max(1);
        let spread = utils::deg_to_rad(self.config.read_float(profile, "spread"));

        let step = if amount > 1 { spread / (amount - 1) as f32 } else { 0.0 };
        let first = origin.rotation - step * (amount - 1) as f32 / 2.0;
        for i in 0..amount {
            let angle = first + step * i as f32;
            self.spawn_bullet(
                origin.position,
                angle,
                Some(Vec2::forward().rotated(angle) * speed),
                &style,
            );
        }
    }

    fn fire_laser(&mut self, shooter: EntityKey, origin: &TransformComponent, profile: &str) {
        let config = &self.config;
        let start = Vec2::new(config.read_float(profile, "offset"), 0.0);
        let line = LineComponent {
            parent: shooter,
            start,
            end: start + Vec2::forward() * config.read_float(profile, "length"),
            thickness: config.read_float(profile, "thickness"),
            fill: read_color(config, profile, "fill"),
            outline: read_color(config, profile, "outline"),
            outline_thickness: config.read_float(profile, "outlineThickness"),
        };
        let lifespan = config.read_int(profile, "lifespan");

        let key = self.world.create(Tag::Bullets);
        if let Some(entity) = self.world.get_mut(key) {
            let c = entity.components_mut();
            c.transform = Some(TransformComponent::new(origin.position, origin.rotation));
            c.line = Some(line);
            c.lifespan = Some(LifespanComponent::new(lifespan));
        }
    }

    fn fire_explosion(&mut self, origin: &TransformComponent, profile: &str) {
        let config = &self.config;
        let style = ProjectileStyle::from_config(config, profile);
        let speed = config.read_float(profile, "speed");
        let shrapnel = DeathSpawnerComponent {
            prefab: ShapeComponent::new(
                config.read_float(profile, "smallRadius"),
                style.shape.vertices,
                style.shape.fill,
                style.shape.outline,
                style.shape.outline_thickness,
            ),
            tag: Tag::Bullets,
            amount: read_count(config, profile, "smallAmount"),
            lifespan: config.read_int(profile, "smallLifespan"),
            speed: config.read_float(profile, "smallSpeed"),
            recursion: read_count(config, profile, "recursion"),
        };

        let key = self.spawn_bullet(
            origin.position,
            origin.rotation,
            Some(origin.facing() * speed),
            &style,
        );
        if let Some(entity) = self.world.get_mut(key) {
            entity.death_spawner = Some(shrapnel);
        }
    }

    fn fire_rotor(&mut self, shooter: EntityKey, origin: &TransformComponent, profile: &str) {
        let style = ProjectileStyle::from_config(&self.config, profile);
        let amount = read_count(&self.config, profile, "amount").max(1);
        let radius = self.config.read_float(profile, "radius");
        let angular_speed = utils::deg_to_rad(self.config.read_float(profile, "angularSpeed"));
        let step = TAU / amount as f32;

        for i in 0..amount {
            let orbit = OrbitComponent::new(shooter, radius, angular_speed);
            let phase = step * i as f32;
            let position = orbit.position_around(origin.position, phase);
            let key = self.spawn_bullet(position, phase, None, &style);
            if let Some(entity) = self.world.get_mut(key) {
                entity.orbit = Some(orbit);
            }
        }
    }

    fn fire_flamethrower(&mut self, shooter: EntityKey, origin: &TransformComponent, profile: &str) {
        let config = &self.config;
        let amount_types = read_count(config, profile, "amountTypes").max(1);
        let radius = (config.read_float(profile, "radiusMin"), config.read_float(profile, "radiusMax"));
        let vertices = (config.read_int(profile, "verticesMin"), config.read_int(profile, "verticesMax"));
        let red = (config.read_int(profile, "redMin"), config.read_int(profile, "redMax"));
        let green = (config.read_int(profile, "greenMin"), config.read_int(profile, "greenMax"));
        let blue = (config.read_int(profile, "blueMin"), config.read_int(profile, "blueMax"));
        let outline_thickness = config.read_float(profile, "outlineThickness");

        let mut emitter = EmitterComponent {
            parent: shooter,
            particles: Vec::new(),
            offset: Vec2::new(config.read_float(profile, "offset"), 0.0),
            spread: utils::deg_to_rad(config.read_float(profile, "spread")),
            frequency: config.read_int(profile, "frequency"),
            quantity: read_count(config, profile, "quantity"),
            lifespan: config.read_int(profile, "lifespan"),
            speed: config.read_float(profile, "speed"),
            jitter: config.read_float(profile, "randomScale"),
            timer: Countdown::full(config.read_int(profile, "duration")),
        };

        for _ in 0..amount_types {
            let color = Color::from_ints(
                self.random_int(red.0, red.1),
                self.random_int(green.0, green.1),
                self.random_int(blue.0, blue.1),
            );
            let vertex_count = self.random_int(vertices.0, vertices.1).max(0) as u32;
            let shape_radius = self.random_between(radius.0, radius.1);
            emitter.particles.push(ShapeComponent::new(
                shape_radius,
                vertex_count,
                color,
                color,
                outline_thickness,
            ));
        }

        let key = self.world.create(Tag::Emitters);
        if let Some(entity) = self.world.get_mut(key) {
            entity.transform = Some(*origin);
            entity.emitter = Some(emitter);
        }
    }
}
