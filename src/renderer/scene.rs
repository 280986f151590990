//! Scene description for one frame

use glam::Vec2;

use super::DrawCommand;
use crate::settings::{MessageStyle, Settings};
use crate::sim::{GamePhase, GameState};

/// Commands for one frame: background, active bricks, paddle, ball, then the
/// phase overlay
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.bricks.len() + 5);
    commands.push(DrawCommand::Clear {
        color: settings.background_color.clone(),
    });

    if state.is_degenerate() {
        return commands;
    }

    commands.extend(
        state
            .bricks
            .iter()
            .filter(|brick| brick.is_active())
            .map(|brick| DrawCommand::Rect {
                pos: brick.pos,
                size: brick.size,
                color: settings.brick_color.clone(),
            }),
    );

    let paddle = &state.paddle;
    commands.push(DrawCommand::Rect {
        pos: Vec2::new(paddle.x, state.surface.y - paddle.height),
        size: Vec2::new(paddle.width, paddle.height),
        color: settings.paddle_color.clone(),
    });

    // The ball shares the paddle color
    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: settings.paddle_color.clone(),
    });

    let center = state.surface / 2.0;
    match state.phase {
        GamePhase::NotStarted => {
            commands.push(message(&settings.start_message, center));
        }
        GamePhase::Lost | GamePhase::Won => {
            let headline = if state.phase == GamePhase::Lost {
                &settings.lost_message
            } else {
                &settings.win_message
            };
            commands.push(message(headline, center));

            let gap = headline.font_size / 2.0 + settings.restart_message.font_size;
            commands.push(message(
                &settings.restart_message,
                center + Vec2::new(0.0, gap),
            ));
        }
        GamePhase::Playing => {}
    }

    commands
}

fn message(style: &MessageStyle, pos: Vec2) -> DrawCommand {
    DrawCommand::Text {
        text: style.text.clone(),
        pos,
        color: style.color.clone(),
        font: style.font(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BrickStatus;

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scene_order() {
        let state = GameState::new(700.0, 500.0);
        let settings = Settings::default();
        let commands = build_scene(&state, &settings);

        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        // Clear + bricks + paddle + ball + start message
        assert_eq!(commands.len(), 1 + state.bricks.len() + 3);
        assert!(matches!(
            commands[commands.len() - 2],
            DrawCommand::Circle { .. }
        ));
        assert_eq!(texts(&commands), vec![settings.start_message.text.as_str()]);
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut state = GameState::new(700.0, 500.0);
        state.phase = GamePhase::Playing;
        state.bricks[3].status = BrickStatus::Destroyed;
        let commands = build_scene(&state, &Settings::default());

        let rects = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, state.bricks.len() - 1 + 1);
        assert!(texts(&commands).is_empty());
    }

    #[test]
    fn test_terminal_overlays() {
        let settings = Settings::default();
        let mut state = GameState::new(700.0, 500.0);

        state.phase = GamePhase::Lost;
        let commands = build_scene(&state, &settings);
        assert_eq!(
            texts(&commands),
            vec![
                settings.lost_message.text.as_str(),
                settings.restart_message.text.as_str()
            ]
        );

        state.phase = GamePhase::Won;
        let commands = build_scene(&state, &settings);
        let positions: Vec<Vec2> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(positions[0], Vec2::new(350.0, 250.0));
        assert!(positions[1].y > positions[0].y);
        assert_eq!(texts(&commands)[0], settings.win_message.text);
    }

    #[test]
    fn test_degenerate_surface_only_clears() {
        let state = GameState::new(0.0, 0.0);
        let commands = build_scene(&state, &Settings::default());
        assert_eq!(commands.len(), 1);
    }
}
