//! Collision detection and hit resolution

use vector_engine::ecs::EntityKey;
use vector_engine::foundation::math::Vec2;
use vector_engine::physics::{circles_collide, line_intersects_circle};

use crate::components::{GameEntity, Tag};
use crate::Simulation;

/// Whether `other` overlaps the circle at `center`
///
/// Line-bearing entities use the line test against their own transform;
/// everything else needs a transform and a collider.
fn touches(other: &GameEntity, center: Vec2, radius: f32) -> bool {
    let Some(transform) = other.transform else {
        return false;
    };
    if let Some(line) = other.line.as_ref() {
        return line_intersects_circle(
            transform.position,
            transform.rotation,
            line.start,
            line.end,
            center,
            radius,
        );
    }
    other
        .collider
        .is_some_and(|collider| circles_collide(center, radius, transform.position, collider.radius))
}

fn is_invincible(entity: &GameEntity) -> bool {
    entity.invincibility.is_some_and(|invincibility| invincibility.is_active())
}

/// Resolve enemy hits, then pickup collection
pub fn run(sim: &mut Simulation) {
    let enemies = sim.world.entities_by_tag(Tag::Enemies).to_vec();
    let bullets = sim.world.entities_by_tag(Tag::Bullets).to_vec();
    let players = sim.world.entities_by_tag(Tag::Player).to_vec();

    for enemy in enemies {
        let Some(entity) = sim.world.get(enemy) else {
            continue;
        };
        if !entity.is_alive() || is_invincible(entity) {
            continue;
        }

        for &bullet in &bullets {
            if enemy_hit_by(sim, enemy, bullet, false) {
                sim.on_entity_hit(enemy);
                sim.on_entity_hit(bullet);
            }
        }
        for &player in &players {
            if enemy_hit_by(sim, enemy, player, true) {
                sim.on_entity_hit(enemy);
                sim.on_entity_hit(player);
            }
        }
    }

    collect_pickups(sim, &players);
}

/// Whether a live `enemy` and a live `other` overlap
fn enemy_hit_by(sim: &Simulation, enemy: EntityKey, other: EntityKey, respect_invincibility: bool) -> bool {
    let (Some(enemy), Some(other)) = (sim.world.get(enemy), sim.world.get(other)) else {
        return false;
    };
    if !enemy.is_alive() || !other.is_alive() {
        return false;
    }
    if respect_invincibility && is_invincible(other) {
        return false;
    }
    let (Some(transform), Some(collider)) = (enemy.transform, enemy.collider) else {
        return false;
    };
    touches(other, transform.position, collider.radius)
}

fn collect_pickups(sim: &mut Simulation, players: &[EntityKey]) {
    for pickup in sim.world.entities_by_tag(Tag::Pickups).to_vec() {
        let Some(entity) = sim.world.get(pickup) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let (Some(transform), Some(collider), Some(payload)) =
            (entity.transform, entity.collider, entity.weapon_pickup)
        else {
            continue;
        };

        let collected = players.iter().any(|player| {
            sim.world
                .get(*player)
                .filter(|player| player.is_alive())
                .is_some_and(|player| touches(player, transform.position, collider.radius))
        });
        if collected {
            sim.on_pickup(payload.mode);
            sim.world.destroy(pickup);
            log::debug!("Pickup {:?} collected", payload.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FireMode;
    use crate::tests::{flushed, simulation, simulation_with_player};
    use vector_engine::ecs::components::{
        ColliderComponent, InvincibilityComponent, InvincibilityStart, TransformComponent,
    };

    fn place(sim: &mut Simulation, key: EntityKey, position: Vec2) {
        sim.world_mut().get_mut(key).unwrap().transform.as_mut().unwrap().position = position;
    }

    fn vulnerable_enemy(sim: &mut Simulation, position: Vec2) -> EntityKey {
        let enemy = sim.spawn_enemy();
        let c = sim.world_mut().get_mut(enemy).unwrap().components_mut();
        c.invincibility = Some(InvincibilityComponent::new(10, InvincibilityStart::Spent));
        c.health.as_mut().unwrap().hp = 10;
        c.transform.as_mut().unwrap().position = position;
        enemy
    }

    fn bullet(sim: &mut Simulation, position: Vec2) -> EntityKey {
        let bullet = sim.world_mut().create(Tag::Bullets);
        let c = sim.world_mut().get_mut(bullet).unwrap().components_mut();
        c.transform = Some(TransformComponent::at(position));
        c.collider = Some(ColliderComponent::new(2.0));
        c.health = Some(crate::components::HealthComponent::new(1));
        bullet
    }

    #[test]
    fn test_bullet_hits_enemy() {
        let mut sim = simulation();
        let enemy = vulnerable_enemy(&mut sim, Vec2::new(300.0, 300.0));
        let bullet = bullet(&mut sim, Vec2::new(305.0, 300.0));
        flushed(&mut sim);

        run(&mut sim);

        assert!(!sim.world().is_alive(bullet));
        let enemy = sim.world().get(enemy).unwrap();
        assert_eq!(enemy.health.unwrap().hp, 9);
        assert!(enemy.invincibility.unwrap().is_active());
    }

    #[test]
    fn test_spent_bullet_hits_only_one_enemy() {
        let mut sim = simulation();
        let first = vulnerable_enemy(&mut sim, Vec2::new(300.0, 300.0));
        let second = vulnerable_enemy(&mut sim, Vec2::new(300.0, 300.0));
        let bullet = bullet(&mut sim, Vec2::new(300.0, 300.0));
        flushed(&mut sim);

        run(&mut sim);

        assert!(!sim.world().is_alive(bullet));
        assert_eq!(sim.world().get(first).unwrap().health.unwrap().hp, 9);
        assert_eq!(sim.world().get(second).unwrap().health.unwrap().hp, 10);
    }

    #[test]
    fn test_dead_enemy_spares_later_bullets() {
        let mut sim = simulation();
        let enemy = vulnerable_enemy(&mut sim, Vec2::new(300.0, 300.0));
        sim.world_mut().get_mut(enemy).unwrap().health.as_mut().unwrap().hp = 1;
        let first = bullet(&mut sim, Vec2::new(302.0, 300.0));
        let second = bullet(&mut sim, Vec2::new(298.0, 300.0));
        flushed(&mut sim);

        run(&mut sim);

        assert!(!sim.world().is_alive(enemy));
        assert!(!sim.world().is_alive(first));
        assert!(sim.world().is_alive(second));
    }

    #[test]
    fn test_invincible_enemy_is_skipped() {
        let mut sim = simulation();
        let enemy = sim.spawn_enemy();
        place(&mut sim, enemy, Vec2::new(300.0, 300.0));
        let bullet = sim.world_mut().create(Tag::Bullets);
        {
            let c = sim.world_mut().get_mut(bullet).unwrap().components_mut();
            c.transform = Some(TransformComponent::at(Vec2::new(300.0, 300.0)));
            c.collider = Some(ColliderComponent::new(2.0));
        }
        flushed(&mut sim);
        let hp = sim.world().get(enemy).unwrap().health.unwrap().hp;

        run(&mut sim);

        assert_eq!(sim.world().get(enemy).unwrap().health.unwrap().hp, hp);
    }

    #[test]
    fn test_laser_hits_along_infinite_line() {
        let (mut sim, player) = simulation_with_player();
        sim.world_mut().get_mut(player).unwrap().weapon.as_mut().unwrap().mode = FireMode::Laser;
        let origin = sim.world().get(player).unwrap().transform.unwrap().position;
        let enemy = vulnerable_enemy(&mut sim, origin + Vec2::new(-200.0, 0.0));
        sim.shoot(player);
        flushed(&mut sim);
        sim.world_mut().get_mut(player).unwrap().invincibility.as_mut().unwrap().timer.set(50);

        run(&mut sim);

        assert_eq!(sim.world().get(enemy).unwrap().health.unwrap().hp, 9);
        let laser = sim.world().entities_by_tag(Tag::Bullets)[0];
        assert!(sim.world().is_alive(laser));
    }

    #[test]
    fn test_enemy_damages_vulnerable_player() {
        let (mut sim, player) = simulation_with_player();
        sim.world_mut().get_mut(player).unwrap().invincibility.as_mut().unwrap().timer.set(0);
        let origin = sim.world().get(player).unwrap().transform.unwrap().position;
        let enemy = vulnerable_enemy(&mut sim, origin);
        flushed(&mut sim);
        let hp = sim.world().get(player).unwrap().health.unwrap().hp;

        run(&mut sim);

        assert_eq!(sim.world().get(enemy).unwrap().health.unwrap().hp, 9);
        if hp > 1 {
            let entity = sim.world().get(player).unwrap();
            assert_eq!(entity.health.unwrap().hp, hp - 1);
            assert!(entity.invincibility.unwrap().is_active());
        } else {
            assert!(!sim.world().is_alive(player));
        }
    }

    #[test]
    fn test_invincible_player_is_not_hit() {
        let (mut sim, player) = simulation_with_player();
        sim.world_mut().get_mut(player).unwrap().invincibility.as_mut().unwrap().timer.set(30);
        let origin = sim.world().get(player).unwrap().transform.unwrap().position;
        let enemy = vulnerable_enemy(&mut sim, origin);
        flushed(&mut sim);

        run(&mut sim);

        assert_eq!(sim.world().get(enemy).unwrap().health.unwrap().hp, 10);
        assert!(sim.world().is_alive(player));
    }

    #[test]
    fn test_pickup_is_collected_once() {
        let (mut sim, player) = simulation_with_player();
        let origin = sim.world().get(player).unwrap().transform.unwrap().position;
        let boss = sim.spawn_boss();
        let mode = sim.world().get(boss).unwrap().pickup_spawner.as_ref().unwrap().pickup;
        let spawner = sim.world().get(boss).unwrap().pickup_spawner.clone().unwrap();
        sim.world_mut().destroy(boss);
        let pickup = sim.spawn_pickup(origin, &spawner);
        flushed(&mut sim);

        run(&mut sim);

        assert!(!sim.world().is_alive(pickup));
        let weapon = sim.world().get(player).unwrap().weapon.unwrap();
        assert_eq!(weapon.mode, mode);
        let expected_power = u32::from(mode == FireMode::Single);
        assert_eq!(weapon.power, expected_power);
    }
}
