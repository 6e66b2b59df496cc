use bevy::prelude::*;
use bevy_kira_audio::prelude::{Audio, AudioControl};

use crate::core::{GameState, SoundCue};

const BGM_PATH: &str = "audio/desert_theme.ogg";

fn cue_path(cue: &SoundCue) -> &'static str {
    match cue {
        SoundCue::Jump => "audio/jump.wav",
        SoundCue::Hurt => "audio/hurt.wav",
        SoundCue::Coin => "audio/coin.wav",
        SoundCue::BottleThrow => "audio/bottle_throw.wav",
        SoundCue::BottleSplash => "audio/bottle_splash.wav",
        SoundCue::EnemyHit => "audio/enemy_hit.wav",
        SoundCue::BossHurt => "audio/boss_hurt.wav",
        SoundCue::Snore => "audio/snore.wav",
    }
}

/// Play every queued effect cue.
fn play_cues(
    mut cues: EventReader<SoundCue>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    for cue in cues.read() {
        audio.play(asset_server.load(cue_path(cue)));
    }
}

/// Start the looped background track when a run begins.
fn start_bgm(audio: Res<Audio>, asset_server: Res<AssetServer>) {
    audio.stop();
    audio.play(asset_server.load(BGM_PATH)).looped();
}

fn stop_bgm(audio: Res<Audio>) {
    audio.stop();
}

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        // Like the level build, the track restarts only when a run starts,
        // not when resuming from pause.
        for entered_from in [GameState::MainMenu, GameState::Won, GameState::GameOver] {
            app.add_systems(
                OnTransition {
                    exited: entered_from,
                    entered: GameState::InGame,
                },
                start_bgm,
            );
        }
        app.add_systems(OnEnter(GameState::MainMenu), stop_bgm)
            .add_systems(Update, play_cues);
    }
}
