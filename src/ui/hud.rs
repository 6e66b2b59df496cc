//! In-game HUD - health, coin, and bottle status bars.

use bevy::prelude::*;

use crate::combat::{Energy, Stocks, STOCK_MAX};
use crate::core::GameState;
use crate::player::Player;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for coin bar fill.
#[derive(Component)]
pub struct CoinBar;

/// Marker for bottle bar fill.
#[derive(Component)]
pub struct BottleBar;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_health_bar, update_coin_bar, update_bottle_bar)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // HUD root container (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Health", Color::srgb(0.8, 0.2, 0.2), HealthBar);
            spawn_bar(parent, "Coins", Color::srgb(0.9, 0.8, 0.2), CoinBar);
            spawn_bar(parent, "Bottles", Color::srgb(0.2, 0.7, 0.3), BottleBar);
        });
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, bar_marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            // Label
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    // Bar fill
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        bar_marker,
                    ));
                });
        });
}

/// Update health bar from the player's energy.
fn update_health_bar(
    player_query: Query<&Energy, With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Ok(energy) = player_query.get_single() else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(energy.percentage() * 100.0);
}

/// Update coin bar from the stock counters.
fn update_coin_bar(stocks: Res<Stocks>, mut bar_query: Query<&mut Node, With<CoinBar>>) {
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(stocks.coins as f32 / STOCK_MAX as f32 * 100.0);
}

/// Update bottle bar from the stock counters.
fn update_bottle_bar(stocks: Res<Stocks>, mut bar_query: Query<&mut Node, With<BottleBar>>) {
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(stocks.bottles as f32 / STOCK_MAX as f32 * 100.0);
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
