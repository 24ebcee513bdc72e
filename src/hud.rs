use bevy::prelude::*;

use crate::state::{GameState, HighScore, Score};

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct HighScoreText;

#[derive(Component)]
struct StartPrompt;

const TEXT_COLOR: Color = Color::BLACK;
const FONT_SIZE: f32 = 32.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_score_text, update_high_score_text))
            .add_systems(OnEnter(GameState::Idle), show_prompt)
            .add_systems(OnEnter(GameState::Running), hide_prompt)
            .add_systems(OnEnter(GameState::Over), show_game_over);
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        ScoreText,
        Text::new("Score: 0"),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
    ));
    commands.spawn((
        HighScoreText,
        Text::new("Best: 0"),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(50.0),
            ..default()
        },
    ));
    // Full-screen container so the prompt stays centered.
    commands
        .spawn((
            StartPrompt,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Press space to start"),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

fn update_score_text(score: Res<Score>, mut texts: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut texts {
        text.0 = format!("Score: {}", score.0);
    }
}

fn update_high_score_text(high: Res<HighScore>, mut texts: Query<&mut Text, With<HighScoreText>>) {
    if !high.is_changed() {
        return;
    }
    for mut text in &mut texts {
        text.0 = format!("Best: {}", high.0);
    }
}

fn show_prompt(mut prompts: Query<&mut Visibility, With<StartPrompt>>) {
    for mut visibility in &mut prompts {
        *visibility = Visibility::Inherited;
    }
}

fn hide_prompt(mut prompts: Query<&mut Visibility, With<StartPrompt>>) {
    for mut visibility in &mut prompts {
        *visibility = Visibility::Hidden;
    }
}

fn show_game_over(score: Res<Score>, mut texts: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut texts {
        text.0 = format!("Game over! Score: {}", score.0);
    }
}
