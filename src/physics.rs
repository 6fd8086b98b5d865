//! Per-tick movement and collision.
//!
//! Stages run in a fixed order: player bullets, then enemies, then enemy
//! bullets. Damage dealt by a bullet is visible to the enemy stage of the same
//! tick. Each collection is rebuilt from its survivors, and the on-screen
//! footprint of every removed entity is queued in `GameSession::vacated`.

use embedded_graphics::prelude::Point;

use crate::config::Tuning;
use crate::entities::{
    EnemyBullet,
    hit,
};
use crate::input::Controls;
use crate::rng::Dice;
use crate::session::{
    GameOverCause,
    GameSession,
    elapsed,
};

/// Step the player by the sampled direction and clamp it inside the margin.
pub fn move_player(session: &mut GameSession, controls: Controls, tuning: &Tuning) {
    let (min_x, max_x) = tuning.player_x_bounds();
    let (min_y, max_y) = tuning.player_y_bounds();
    let step = tuning.player_speed;
    let pos = &mut session.player.pos;
    pos.x = (pos.x + i32::from(controls.dx) * step).clamp(min_x, max_x);
    pos.y = (pos.y + i32::from(controls.dy) * step).clamp(min_y, max_y);
}

/// Advance every bullet and enemy by one tick.
pub fn advance(now: u32, session: &mut GameSession, dice: &mut impl Dice, tuning: &Tuning) {
    advance_player_bullets(session);
    advance_enemies(now, session, dice, tuning);
    advance_enemy_bullets(session, tuning);
}

fn advance_player_bullets(session: &mut GameSession) {
    let GameSession {
        player_bullets,
        enemies,
        vacated,
        ..
    } = session;

    player_bullets.retain_mut(|b| {
        b.pos.y -= b.speed;
        let consumed = b.pos.y <= 0
            || match enemies
                .iter_mut()
                .find(|e| e.is_alive() && hit(b.pos, e.pos, e.half() + 1))
            {
                Some(e) => {
                    e.health -= 1;
                    true
                }
                None => false,
            };
        if consumed {
            vacated.extend(b.prev_footprint());
        }
        !consumed
    });
}

fn advance_enemies(now: u32, session: &mut GameSession, dice: &mut impl Dice, tuning: &Tuning) {
    let player = session.player.pos;
    let mut ended = None;
    let mut destroyed = 0;
    let GameSession {
        enemies,
        enemy_bullets,
        vacated,
        ..
    } = session;

    enemies.retain_mut(|e| {
        if !e.is_alive() {
            debug!("enemy destroyed at ({}, {})", e.pos.x, e.pos.y);
            vacated.extend(e.prev_footprint());
            destroyed += 1;
            return false;
        }

        e.charging = elapsed(e.spawned_at, now) > tuning.charge_delay_ms;
        if e.charging {
            e.pos.y += tuning.charge_step;
        } else if e.pos.y < e.stop_y {
            e.pos.y += tuning.descend_step;
        }

        let cause = if hit(player, e.pos, e.half() + tuning.enemy_contact_pad) {
            Some(GameOverCause::EnemyContact)
        } else if e.pos.y > tuning.field_h {
            Some(GameOverCause::EnemyBreach)
        } else {
            None
        };
        if let Some(cause) = cause {
            ended = ended.or(Some(cause));
            vacated.extend(e.prev_footprint());
            return false;
        }

        if !e.charging && dice.one_in(tuning.enemy_fire_odds) {
            enemy_bullets.push(EnemyBullet::new(e.pos + Point::new(0, e.half())));
        }
        true
    });

    session.stats.enemies_destroyed += destroyed;
    if let Some(cause) = ended {
        session.end(cause);
    }
}

fn advance_enemy_bullets(session: &mut GameSession, tuning: &Tuning) {
    let player = session.player.pos;
    let mut struck = false;
    let GameSession {
        enemy_bullets,
        vacated,
        ..
    } = session;

    enemy_bullets.retain_mut(|b| {
        b.pos.y += tuning.enemy_bullet_speed;
        let gone = if b.pos.y >= tuning.field_h {
            true
        } else if hit(player, b.pos, tuning.enemy_bullet_hit_radius) {
            struck = true;
            true
        } else {
            false
        };
        if gone {
            vacated.extend(b.prev_footprint());
        }
        !gone
    });

    if struck {
        session.end(GameOverCause::EnemyBullet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        Enemy,
        PlayerBullet,
    };
    use crate::rng::tests::Scripted;

    const T: Tuning = Tuning::REFERENCE;

    /// Dice that never lets an enemy fire.
    fn quiet() -> Scripted<'static> {
        Scripted::new(&[60; 64])
    }

    fn session_with_enemy(e: Enemy) -> GameSession {
        let mut s = GameSession::new(&T);
        s.enemies.push(e).unwrap();
        s
    }

    #[test]
    fn player_moves_and_clamps() {
        let mut s = GameSession::new(&T);
        let right_up = Controls {
            dx: 1,
            dy: -1,
            firing: false,
        };
        move_player(&mut s, right_up, &T);
        assert_eq!(s.player.pos, Point::new(66, 138));

        s.player.pos = Point::new(121, 6);
        move_player(&mut s, right_up, &T);
        assert_eq!(s.player.pos, Point::new(122, 5));

        s.player.pos = Point::new(5, 154);
        let left_down = Controls {
            dx: -1,
            dy: 1,
            firing: false,
        };
        move_player(&mut s, left_down, &T);
        assert_eq!(s.player.pos, Point::new(5, 154));
    }

    #[test]
    fn bullet_hit_costs_one_health_and_consumes_bullet() {
        let mut s = session_with_enemy(Enemy {
            health: 2,
            ..Enemy::new(Point::new(70, 50), 10, 50, 0)
        });
        // Lands on (70, 50) after moving 10 up.
        s.player_bullets.push(PlayerBullet::new(Point::new(70, 60), 10));

        advance(0, &mut s, &mut quiet(), &T);

        assert!(s.player_bullets.is_empty());
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.enemies[0].health, 1);
    }

    #[test]
    fn bullet_hits_at_most_one_enemy() {
        let mut s = GameSession::new(&T);
        s.enemies
            .push(Enemy::new(Point::new(70, 50), 12, 50, 0))
            .unwrap();
        s.enemies
            .push(Enemy::new(Point::new(72, 50), 12, 50, 0))
            .unwrap();
        s.player_bullets.push(PlayerBullet::new(Point::new(71, 60), 10));

        advance(0, &mut s, &mut quiet(), &T);

        let total: i32 = s.enemies.iter().map(|e| e.health).sum();
        assert_eq!(total, 4 + 4 - 1);
    }

    #[test]
    fn hit_threshold_is_half_plus_one() {
        let mut s = session_with_enemy(Enemy::new(Point::new(70, 50), 10, 50, 0));
        // dx == 6 is outside half + 1.
        s.player_bullets.push(PlayerBullet::new(Point::new(76, 60), 10));
        advance(0, &mut s, &mut quiet(), &T);
        assert_eq!(s.player_bullets.len(), 1);
        assert_eq!(s.enemies[0].health, 2);
    }

    #[test]
    fn killed_enemy_is_removed_the_same_tick() {
        let mut s = session_with_enemy(Enemy::new(Point::new(70, 50), 9, 50, 0));
        s.enemies[0].prev = Some(Point::new(70, 50));
        s.player_bullets.push(PlayerBullet::new(Point::new(70, 60), 10));

        // Enemy would fire on a 1 if it survived.
        advance(0, &mut s, &mut Scripted::new(&[1]), &T);

        assert!(s.enemies.is_empty());
        assert!(s.enemy_bullets.is_empty());
        assert_eq!(s.stats.enemies_destroyed, 1);
        assert!(!s.is_over());
        assert!(s.vacated.contains(&Enemy::new(Point::new(70, 50), 9, 50, 0).footprint()));
    }

    #[test]
    fn second_bullet_passes_a_dead_enemy() {
        let mut s = session_with_enemy(Enemy::new(Point::new(70, 50), 9, 50, 0));
        s.player_bullets.push(PlayerBullet::new(Point::new(70, 60), 10));
        s.player_bullets.push(PlayerBullet::new(Point::new(71, 61), 10));
        advance(0, &mut s, &mut quiet(), &T);
        assert!(s.enemies.is_empty());
        assert_eq!(s.player_bullets.len(), 1);
        assert_eq!(s.player_bullets[0].pos, Point::new(71, 51));
    }

    #[test]
    fn bullet_leaving_the_top_is_removed_without_testing() {
        let mut s = session_with_enemy(Enemy::new(Point::new(70, 0), 13, 50, 0));
        s.player_bullets.push(PlayerBullet::new(Point::new(70, 8), 10));
        advance(0, &mut s, &mut quiet(), &T);
        assert!(s.player_bullets.is_empty());
        assert_eq!(s.enemies[0].health, 4);
    }

    #[test]
    fn enemy_descends_then_holds() {
        let mut s = session_with_enemy(Enemy::new(Point::new(40, 20), 9, 21, 0));
        advance(100, &mut s, &mut quiet(), &T);
        assert_eq!(s.enemies[0].pos.y, 21);
        advance(200, &mut s, &mut quiet(), &T);
        assert_eq!(s.enemies[0].pos.y, 21);
        assert!(!s.enemies[0].charging);
    }

    #[test]
    fn enemy_charges_after_delay() {
        let mut s = session_with_enemy(Enemy::new(Point::new(40, 30), 9, 30, 0));
        advance(10_000, &mut s, &mut quiet(), &T);
        assert!(!s.enemies[0].charging);
        assert_eq!(s.enemies[0].pos.y, 30);

        advance(10_050, &mut s, &mut Scripted::new(&[1]), &T);
        assert!(s.enemies[0].charging);
        assert_eq!(s.enemies[0].pos.y, 34);
        // Charging enemies do not fire.
        assert!(s.enemy_bullets.is_empty());
    }

    #[test]
    fn idle_enemy_fires_from_its_lower_edge() {
        let mut s = session_with_enemy(Enemy::new(Point::new(40, 30), 11, 30, 0));
        advance(0, &mut s, &mut Scripted::new(&[1]), &T);
        // Spawned at (40, 35) and moved once by the bullet stage.
        assert_eq!(s.enemy_bullets, [EnemyBullet::new(Point::new(40, 39))]);
    }

    #[test]
    fn enemy_touching_player_ends_round() {
        let mut s = GameSession::new(&T);
        let p = s.player.pos;
        // half + 3 == 7 for size 9.
        s.enemies
            .push(Enemy::new(p + Point::new(6, -7), 9, 200, 0))
            .unwrap();
        advance(0, &mut s, &mut quiet(), &T);
        assert!(s.enemies.is_empty());
        assert_eq!(s.game_over_cause(), Some(GameOverCause::EnemyContact));
    }

    #[test]
    fn enemy_past_bottom_ends_round() {
        let mut s = GameSession::new(&T);
        s.player.pos = Point::new(5, 5);
        s.enemies
            .push(Enemy::new(Point::new(100, 158), 9, 20, 0))
            .unwrap();
        advance(20_000, &mut s, &mut quiet(), &T);
        assert!(s.enemies.is_empty());
        assert_eq!(s.game_over_cause(), Some(GameOverCause::EnemyBreach));
    }

    #[test]
    fn enemy_bullet_hits_player() {
        let mut s = GameSession::new(&T);
        let p = s.player.pos;
        s.enemy_bullets.push(EnemyBullet::new(p - Point::new(3, 7)));
        advance(0, &mut s, &mut quiet(), &T);
        assert!(s.enemy_bullets.is_empty());
        assert_eq!(s.game_over_cause(), Some(GameOverCause::EnemyBullet));
    }

    #[test]
    fn enemy_bullet_leaving_bottom_is_harmless() {
        let mut s = GameSession::new(&T);
        s.player.pos = Point::new(40, 154);
        s.enemy_bullets.push(EnemyBullet::new(Point::new(40, 157)));
        advance(0, &mut s, &mut quiet(), &T);
        assert!(s.enemy_bullets.is_empty());
        assert!(!s.is_over());
    }

    #[test]
    fn game_over_still_finishes_bookkeeping() {
        let mut s = GameSession::new(&T);
        let p = s.player.pos;
        s.enemies
            .push(Enemy::new(p - Point::new(0, 1), 9, 200, 0))
            .unwrap();
        let far = EnemyBullet {
            pos: Point::new(10, 10),
            prev: Some(Point::new(10, 10)),
        };
        s.enemy_bullets.push(far);
        advance(0, &mut s, &mut quiet(), &T);
        assert!(s.is_over());
        assert_eq!(s.enemy_bullets[0].pos, Point::new(10, 14));
    }

    #[test]
    fn zero_fire_odds_disables_enemy_fire() {
        let tuning = Tuning {
            enemy_fire_odds: 0,
            ..T
        };
        let mut s = session_with_enemy(Enemy::new(Point::new(40, 30), 9, 30, 0));
        let mut dice = crate::rng::Xorshift32::new(7);
        for t in 0..200 {
            advance(t * 10, &mut s, &mut dice, &tuning);
        }
        assert!(s.enemy_bullets.is_empty());
        assert_eq!(s.live_enemies(), 1);
    }
}
