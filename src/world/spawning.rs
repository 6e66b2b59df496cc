//! The run-entry spawn pass: tears down the previous run and rebuilds the
//! world from the level descriptor.

use bevy::prelude::*;
use rand::Rng;

use super::level::{load_level, ChickenKind, LevelData, LevelEntity, Pickup};
use crate::animation::{FrameSet, FrameTimer};
use crate::combat::{Energy, Stocks};
use crate::enemies::{
    Boss, BossFrames, Chicken, ChickenFrames, ChickenState, BOSS_HEIGHT, BOSS_WIDTH,
    CHICKEN_FRAME_MS, CHICKEN_SIZE, CHICKEN_Y, SMALL_CHICKEN_FRAME_MS, SMALL_CHICKEN_SIZE,
    SMALL_CHICKEN_Y,
};
use crate::input::InputState;
use crate::physics::{
    BodySize, EntityKind, Facing, Position, VerticalMotion, WalkSpeed, BASELINE_FEET,
};
use crate::player::{
    ActivityClock, MoveControl, Player, PlayerSprites, PLAYER_HEIGHT, PLAYER_WALK_SPEED,
    PLAYER_WIDTH,
};
use crate::rendering::{GameCamera, Layer};

const LEVEL_PATH: &str = "assets/levels/level1.ron";

/// Random x inside a spawn window.
///
/// Bounds validation only guarantees `left_bound < end_x`, so a short
/// level can leave a window empty; everything then lands on the window
/// start instead of panicking on an empty sample range.
fn scatter_x(rng: &mut impl Rng, start: f32, end: f32) -> f32 {
    if end > start {
        rng.gen_range(start..end)
    } else {
        start
    }
}

/// Two-frame coin shimmer cycle.
#[derive(Component)]
pub struct CoinFrames(pub FrameSet);

/// Advance the coin shimmer on its own cadence.
pub fn coin_spin(
    time: Res<Time>,
    mut coins: Query<(&mut CoinFrames, &mut FrameTimer, &mut Sprite)>,
) {
    for (mut frames, mut timer, mut sprite) in &mut coins {
        timer.0.tick(time.delta());
        if timer.0.just_finished() {
            sprite.image = frames.0.advance();
        }
    }
}

const PLAYER_START_X: f32 = 120.0;

const COIN_SIZE: f32 = 100.0;
const COIN_FRAME_MS: u64 = 200;
const COIN_FRAMES: [&str; 2] = ["sprites/pickups/coin_1.png", "sprites/pickups/coin_2.png"];

const BOTTLE_PICKUP_SIZE: f32 = 100.0;
const BOTTLE_PICKUP_Y: f32 = 320.0;

const CLOUD_WIDTH: f32 = 500.0;
const CLOUD_HEIGHT: f32 = 250.0;
const CLOUD_Y: f32 = 20.0;

const SEGMENT_WIDTH: f32 = 720.0;
const SEGMENT_HEIGHT: f32 = 480.0;

/// Build the whole run on entering the in-game state.
///
/// Anything left from the previous run is despawned first, so a restart is
/// simply re-entering the state.
pub fn enter_level(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    leftovers: Query<Entity, With<LevelEntity>>,
    mut stocks: ResMut<Stocks>,
    mut input: ResMut<InputState>,
) {
    for entity in &leftovers {
        commands.entity(entity).despawn_recursive();
    }

    *stocks = Stocks::default();
    *input = InputState::default();

    let level = match load_level(LEVEL_PATH) {
        Ok(level) => level,
        Err(err) => {
            warn!("Falling back to built-in level: {err}");
            LevelData::fallback()
        }
    };
    commands.insert_resource(level.bounds());

    spawn_backdrop(&mut commands, &asset_server, &level);
    spawn_pickups(&mut commands, &asset_server, &level);
    spawn_chickens(&mut commands, &asset_server, &level);
    spawn_boss(&mut commands, &asset_server, &level);
    spawn_player(&mut commands, &asset_server);

    commands.spawn((Camera2d, GameCamera, LevelEntity));

    info!(
        "Level ready: {} chickens, {} coins, {} bottles",
        level.chickens.len(),
        level.coins,
        level.bottles
    );
}

fn spawn_backdrop(commands: &mut Commands, asset_server: &AssetServer, level: &LevelData) {
    for segment in &level.background {
        for path in &segment.layers {
            commands.spawn((
                Position {
                    x: segment.x,
                    y: 0.0,
                },
                BodySize {
                    w: SEGMENT_WIDTH,
                    h: SEGMENT_HEIGHT,
                },
                EntityKind::Background,
                Sprite {
                    image: asset_server.load(path),
                    custom_size: Some(Vec2::new(SEGMENT_WIDTH, SEGMENT_HEIGHT)),
                    ..default()
                },
                Layer::Background,
                LevelEntity,
            ));
        }
    }

    for cloud in &level.clouds {
        commands.spawn((
            Position {
                x: cloud.x,
                y: CLOUD_Y,
            },
            BodySize {
                w: CLOUD_WIDTH,
                h: CLOUD_HEIGHT,
            },
            EntityKind::Cloud,
            Sprite {
                image: asset_server.load("sprites/background/cloud.png"),
                custom_size: Some(Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT)),
                ..default()
            },
            Layer::Clouds,
            LevelEntity,
        ));
    }
}

fn spawn_pickups(commands: &mut Commands, asset_server: &AssetServer, level: &LevelData) {
    let mut rng = rand::thread_rng();

    for _ in 0..level.coins {
        let x = scatter_x(&mut rng, 300.0, level.end_x - 500.0);
        let y = rng.gen_range(100.0..350.0);
        let frames = FrameSet::load(asset_server, &COIN_FRAMES);
        let first = frames.first();
        commands.spawn((
            Pickup::Coin,
            CoinFrames(frames),
            Position { x, y },
            BodySize {
                w: COIN_SIZE,
                h: COIN_SIZE,
            },
            EntityKind::Coin,
            FrameTimer::from_millis(COIN_FRAME_MS),
            Sprite {
                image: first,
                custom_size: Some(Vec2::splat(COIN_SIZE)),
                ..default()
            },
            Layer::Pickups,
            LevelEntity,
        ));
    }

    for _ in 0..level.bottles {
        let x = scatter_x(&mut rng, 250.0, level.end_x - 800.0);
        commands.spawn((
            Pickup::Bottle,
            Position {
                x,
                y: BOTTLE_PICKUP_Y,
            },
            BodySize {
                w: BOTTLE_PICKUP_SIZE,
                h: BOTTLE_PICKUP_SIZE,
            },
            EntityKind::Bottle,
            Sprite {
                image: asset_server.load("sprites/pickups/bottle.png"),
                custom_size: Some(Vec2::splat(BOTTLE_PICKUP_SIZE)),
                ..default()
            },
            Layer::Pickups,
            LevelEntity,
        ));
    }
}

fn spawn_chickens(commands: &mut Commands, asset_server: &AssetServer, level: &LevelData) {
    let mut rng = rand::thread_rng();

    for spawn in &level.chickens {
        let x = scatter_x(&mut rng, spawn.x_min, spawn.x_max);
        let (frames, size, y, cadence, speed) = match spawn.kind {
            ChickenKind::Normal => (
                ChickenFrames::load_normal(asset_server),
                CHICKEN_SIZE,
                CHICKEN_Y,
                CHICKEN_FRAME_MS,
                rng.gen_range(0.15..0.55),
            ),
            ChickenKind::Small => (
                ChickenFrames::load_small(asset_server),
                SMALL_CHICKEN_SIZE,
                SMALL_CHICKEN_Y,
                SMALL_CHICKEN_FRAME_MS,
                rng.gen_range(0.25..0.75),
            ),
        };

        let first = frames.walking.first();
        let kind = match spawn.kind {
            ChickenKind::Normal => EntityKind::Chicken,
            ChickenKind::Small => EntityKind::SmallChicken,
        };

        commands.spawn((
            Chicken,
            ChickenState::Walking,
            frames,
            Position { x, y },
            BodySize { w: size, h: size },
            WalkSpeed(speed),
            kind,
            FrameTimer::from_millis(cadence),
            Sprite {
                image: first,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Layer::Enemies,
            LevelEntity,
        ));
    }
}

fn spawn_boss(commands: &mut Commands, asset_server: &AssetServer, level: &LevelData) {
    let frames = BossFrames::load(asset_server);
    let first = frames.alert.first();

    commands.spawn((
        Boss::new(level.boss_x),
        frames,
        Position {
            x: level.boss_x,
            y: 0.0,
        },
        BodySize {
            w: BOSS_WIDTH,
            h: BOSS_HEIGHT,
        },
        EntityKind::Boss,
        Sprite {
            image: first,
            custom_size: Some(Vec2::new(BOSS_WIDTH, BOSS_HEIGHT)),
            ..default()
        },
        Layer::Enemies,
        LevelEntity,
    ));
}

fn spawn_player(commands: &mut Commands, asset_server: &AssetServer) {
    let sprites = PlayerSprites::load(asset_server);
    let first = sprites.idle.first();

    commands.spawn((
        Player,
        Energy::default(),
        sprites,
        ActivityClock::default(),
        MoveControl::default(),
        Position {
            x: PLAYER_START_X,
            y: BASELINE_FEET - PLAYER_HEIGHT,
        },
        BodySize {
            w: PLAYER_WIDTH,
            h: PLAYER_HEIGHT,
        },
        WalkSpeed(PLAYER_WALK_SPEED),
        VerticalMotion::default(),
        Facing::default(),
        EntityKind::Player,
        Sprite {
            image: first,
            custom_size: Some(Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            ..default()
        },
        Layer::Player,
        LevelEntity,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::level::{ChickenSpawn, CloudSpawn};

    #[test]
    fn scatter_stays_inside_an_open_window() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x = scatter_x(&mut rng, 300.0, 2376.0);
            assert!((300.0..2376.0).contains(&x));
        }
    }

    #[test]
    fn short_level_spawn_windows_do_not_panic() {
        // end_x 700 passes bounds validation but leaves the coin window
        // (300..200) and the bottle window (250..-100) empty.
        let level = LevelData {
            end_x: 700.0,
            left_bound: -100.0,
            boss_x: 650.0,
            coins: 10,
            bottles: 10,
            chickens: vec![ChickenSpawn {
                kind: ChickenKind::Normal,
                // A degenerate single-point window.
                x_min: 400.0,
                x_max: 400.0,
            }],
            clouds: vec![CloudSpawn { x: 100.0 }],
            background: Vec::new(),
        };
        assert!(level.left_bound < level.end_x);

        let mut rng = rand::thread_rng();
        for _ in 0..level.coins {
            assert_eq!(scatter_x(&mut rng, 300.0, level.end_x - 500.0), 300.0);
        }
        for _ in 0..level.bottles {
            assert_eq!(scatter_x(&mut rng, 250.0, level.end_x - 800.0), 250.0);
        }
        for spawn in &level.chickens {
            assert_eq!(scatter_x(&mut rng, spawn.x_min, spawn.x_max), 400.0);
        }
    }
}
