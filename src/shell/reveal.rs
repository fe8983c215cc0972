//! Intro curtain shown before the presentation starts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{CURTAIN_STEP_PERCENT, CURTAIN_STEP_SECS};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Curtain closed, waiting for a click or the auto-reveal delay
    Waiting,
    /// Curtain sliding away in fixed steps
    Opening,
    Revealed,
}

#[derive(Resource, Debug)]
pub struct RevealState {
    phase: RevealPhase,
    /// Seconds before the curtain opens on its own
    delay: f32,
    waited: f32,
    /// Opened share of the curtain, 0..=100
    progress: f32,
    step_elapsed: f32,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_REVEAL_DELAY_SECS)
    }
}

impl RevealState {
    pub fn new(delay: f32) -> Self {
        Self {
            phase: RevealPhase::Waiting,
            delay: delay.max(0.0),
            waited: 0.0,
            progress: 0.0,
            step_elapsed: 0.0,
        }
    }

    /// Fully open, used when the intro is skipped
    pub fn revealed() -> Self {
        Self {
            phase: RevealPhase::Revealed,
            progress: 100.0,
            ..Self::new(0.0)
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Presentation content shows as soon as the curtain starts moving
    pub fn content_visible(&self) -> bool {
        self.phase != RevealPhase::Waiting
    }

    /// Begin opening. No-op unless still waiting.
    pub fn start(&mut self) {
        if self.phase == RevealPhase::Waiting {
            self.phase = RevealPhase::Opening;
            self.step_elapsed = 0.0;
        }
    }

    /// Advance timers by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        match self.phase {
            RevealPhase::Waiting => {
                self.waited += dt;
                if self.waited >= self.delay {
                    self.start();
                }
            }
            RevealPhase::Opening => {
                self.step_elapsed += dt;
                while self.step_elapsed >= CURTAIN_STEP_SECS && self.progress < 100.0 {
                    self.step_elapsed -= CURTAIN_STEP_SECS;
                    self.progress = (self.progress + CURTAIN_STEP_PERCENT).min(100.0);
                }
                if self.progress >= 100.0 {
                    self.phase = RevealPhase::Revealed;
                }
            }
            RevealPhase::Revealed => {}
        }
    }
}

pub fn tick_reveal(time: Res<Time>, mut reveal: ResMut<RevealState>) {
    let before = reveal.phase();
    reveal.advance(time.delta_secs());
    let after = reveal.phase();
    if before == after {
        return;
    }
    match after {
        RevealPhase::Opening => info!("Auto-reveal delay elapsed"),
        RevealPhase::Revealed => debug!("Curtain fully open"),
        RevealPhase::Waiting => {}
    }
}

pub fn click_to_reveal(mouse_button: Res<ButtonInput<MouseButton>>, mut reveal: ResMut<RevealState>) {
    if reveal.phase() == RevealPhase::Waiting && mouse_button.just_pressed(MouseButton::Left) {
        reveal.start();
        info!("Reveal started by click");
    }
}

/// Paint the curtain over whatever share of the window is still closed
pub fn curtain_ui(mut contexts: EguiContexts, reveal: Res<RevealState>) -> Result {
    if reveal.phase() == RevealPhase::Revealed {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let screen = ctx.screen_rect();
    let closed = 1.0 - reveal.progress() / 100.0;
    let curtain = egui::Rect::from_min_max(
        egui::pos2(screen.max.x - screen.width() * closed, screen.min.y),
        screen.max,
    );

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("intro_curtain"),
    ));

    // Two-tone backdrop, dark on the left fading to the accent on the right
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(curtain.left_top(), theme::ui::CURTAIN_DARK);
    mesh.colored_vertex(curtain.right_top(), theme::ui::CURTAIN_LIGHT);
    mesh.colored_vertex(curtain.right_bottom(), theme::ui::CURTAIN_LIGHT);
    mesh.colored_vertex(curtain.left_bottom(), theme::ui::CURTAIN_DARK);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    if reveal.phase() != RevealPhase::Waiting {
        return Ok(());
    }

    let center = screen.center();
    painter.text(
        center - egui::vec2(0.0, 90.0),
        egui::Align2::CENTER_CENTER,
        "🔒",
        egui::FontId::proportional(72.0),
        egui::Color32::WHITE,
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "Enterprise Security Reveal",
        egui::FontId::proportional(44.0),
        theme::ui::CURTAIN_TEXT,
    );
    painter.text(
        center + egui::vec2(0.0, 50.0),
        egui::Align2::CENTER_CENTER,
        "Click anywhere or wait to discover the migration strategy",
        egui::FontId::proportional(20.0),
        theme::ui::CURTAIN_TEXT,
    );
    painter.text(
        center + egui::vec2(0.0, 110.0),
        egui::Align2::CENTER_CENTER,
        "Click to Reveal",
        egui::FontId::proportional(18.0),
        egui::Color32::WHITE,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_waiting_and_hidden() {
        let reveal = RevealState::new(5.0);
        assert_eq!(reveal.phase(), RevealPhase::Waiting);
        assert!(!reveal.content_visible());
        assert_eq!(reveal.progress(), 0.0);
    }

    #[test]
    fn test_delay_starts_opening() {
        let mut reveal = RevealState::new(1.0);
        reveal.advance(0.5);
        assert_eq!(reveal.phase(), RevealPhase::Waiting);
        reveal.advance(0.5);
        assert_eq!(reveal.phase(), RevealPhase::Opening);
        assert!(reveal.content_visible());
    }

    #[test]
    fn test_opening_steps_five_percent() {
        let mut reveal = RevealState::new(10.0);
        reveal.start();
        reveal.advance(CURTAIN_STEP_SECS * 1.5);
        assert_eq!(reveal.progress(), 5.0);
        reveal.advance(CURTAIN_STEP_SECS);
        assert_eq!(reveal.progress(), 10.0);
    }

    #[test]
    fn test_progress_reaches_full_and_stops() {
        let mut reveal = RevealState::new(0.0);
        reveal.start();
        // 20 steps of 5%, with margin for float accumulation
        for _ in 0..25 {
            reveal.advance(CURTAIN_STEP_SECS);
        }
        assert_eq!(reveal.progress(), 100.0);
        assert_eq!(reveal.phase(), RevealPhase::Revealed);

        reveal.advance(1.0);
        assert_eq!(reveal.progress(), 100.0);
    }

    #[test]
    fn test_large_frame_does_not_overshoot() {
        let mut reveal = RevealState::new(0.0);
        reveal.start();
        reveal.advance(10.0);
        assert_eq!(reveal.progress(), 100.0);
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn test_start_only_from_waiting() {
        let mut reveal = RevealState::revealed();
        reveal.start();
        assert_eq!(reveal.phase(), RevealPhase::Revealed);
        assert!(reveal.content_visible());
    }
}
