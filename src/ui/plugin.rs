//! UI plugin - menus, HUD, and end-of-run screens.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(Update, main_menu_input.run_if(in_state(GameState::MainMenu)))
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            // Pause overlay
            .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
            .add_systems(Update, pause_menu_input.run_if(in_state(GameState::Paused)))
            .add_systems(OnExit(GameState::Paused), cleanup_pause_menu)
            // Win screen
            .add_systems(OnEnter(GameState::Won), setup_win_screen)
            .add_systems(Update, end_screen_input.run_if(in_state(GameState::Won)))
            .add_systems(OnExit(GameState::Won), cleanup_end_screen)
            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(Update, end_screen_input.run_if(in_state(GameState::GameOver)))
            .add_systems(OnExit(GameState::GameOver), cleanup_end_screen);
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for the menu camera (the game camera only exists during a run).
#[derive(Component)]
struct MenuCamera;

/// Marker for pause overlay entities.
#[derive(Component)]
struct PauseMenuUi;

/// Marker for win and game-over screen entities.
#[derive(Component)]
struct EndScreenUi;

/// Marker for menu buttons.
#[derive(Component)]
enum MenuButton {
    NewGame,
    Quit,
    Resume,
    MainMenu,
    Retry,
}

/// Set up the main menu.
fn setup_main_menu(mut commands: Commands) {
    // The run's camera is gone here; the menu brings its own.
    commands.spawn((Camera2d, MenuCamera));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.85, 0.65, 0.35)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("DESERT DASH"),
                TextFont {
                    font_size: 80.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.2, 0.05)),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            // Controls hint
            parent.spawn((
                Text::new("Arrows to move, D to throw"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.3, 0.1)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, "New Game", MenuButton::NewGame);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.15, 0.15, 0.2)),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.8)),
            ));
        });
}

/// Handle main menu button interactions.
fn main_menu_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = Color::srgb(0.3, 0.3, 0.35).into();
                match button {
                    MenuButton::NewGame => {
                        next_state.set(GameState::InGame);
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                    _ => {}
                }
            }
            Interaction::Hovered => {
                *bg_color = Color::srgb(0.25, 0.25, 0.3).into();
            }
            Interaction::None => {
                *bg_color = Color::srgb(0.15, 0.15, 0.2).into();
            }
        }
    }
}

/// Clean up main menu entities.
fn cleanup_main_menu(
    mut commands: Commands,
    ui_query: Query<Entity, With<MainMenuUi>>,
    camera_query: Query<Entity, With<MenuCamera>>,
) {
    for entity in ui_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in camera_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Set up the pause overlay; the frozen scene stays visible behind it.
fn setup_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            PauseMenuUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

/// Handle pause overlay button interactions.
fn pause_menu_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = Color::srgb(0.3, 0.3, 0.35).into();
                match button {
                    MenuButton::Resume => {
                        next_state.set(GameState::InGame);
                    }
                    MenuButton::MainMenu => {
                        next_state.set(GameState::MainMenu);
                    }
                    _ => {}
                }
            }
            Interaction::Hovered => {
                *bg_color = Color::srgb(0.25, 0.25, 0.3).into();
            }
            Interaction::None => {
                *bg_color = Color::srgb(0.15, 0.15, 0.2).into();
            }
        }
    }
}

/// Clean up pause overlay entities.
fn cleanup_pause_menu(mut commands: Commands, query: Query<Entity, With<PauseMenuUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Set up the win screen over the frozen end-of-run scene.
fn setup_win_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        "YOU WON!",
        Color::srgb(0.95, 0.8, 0.2),
        Color::srgba(0.0, 0.1, 0.0, 0.8),
    );
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        "GAME OVER",
        Color::srgb(0.8, 0.2, 0.2),
        Color::srgba(0.1, 0.0, 0.0, 0.8),
    );
}

fn spawn_end_screen(commands: &mut Commands, title: &str, title_color: Color, overlay: Color) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(overlay),
            EndScreenUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, "Retry", MenuButton::Retry);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

/// Handle win and game-over screen button interactions.
fn end_screen_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = Color::srgb(0.3, 0.3, 0.35).into();
                match button {
                    MenuButton::Retry => {
                        next_state.set(GameState::InGame);
                    }
                    MenuButton::MainMenu => {
                        next_state.set(GameState::MainMenu);
                    }
                    _ => {}
                }
            }
            Interaction::Hovered => {
                *bg_color = Color::srgb(0.25, 0.25, 0.3).into();
            }
            Interaction::None => {
                *bg_color = Color::srgb(0.15, 0.15, 0.2).into();
            }
        }
    }
}

/// Clean up win and game-over screen entities.
fn cleanup_end_screen(mut commands: Commands, query: Query<Entity, With<EndScreenUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
