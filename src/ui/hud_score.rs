//! UI domain: score display HUD element.

use bevy::prelude::*;

use crate::score::{ScoreManager, ScoreText};
use crate::ui::HUD_PADDING;

/// Marker for the score display UI container
#[derive(Component)]
pub struct ScoreDisplayUI;

pub(crate) fn spawn_score_display_ui(mut commands: Commands, manager: Res<ScoreManager>) {
    commands
        .spawn((
            ScoreDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            parent.spawn((
                ScoreText,
                Text::new(manager.display_text()),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
        });
}
