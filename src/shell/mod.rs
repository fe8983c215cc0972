//! Presentation shell: the intro curtain that gates the rest of the app.

mod reveal;

pub use reveal::{RevealPhase, RevealState};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{AppConfig, ConfigLoaded};

/// Build the curtain from the saved preferences
fn init_reveal(config: Res<AppConfig>, mut commands: Commands) {
    let reveal = if config.data.skip_intro {
        info!("Skipping intro curtain");
        RevealState::revealed()
    } else {
        RevealState::new(config.data.reveal_delay_secs)
    };
    commands.insert_resource(reveal);
}

pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RevealState>()
            .add_systems(Startup, init_reveal.after(ConfigLoaded))
            .add_systems(Update, (reveal::click_to_reveal, reveal::tick_reveal).chain())
            .add_systems(EguiPrimaryContextPass, reveal::curtain_ui);
    }
}
