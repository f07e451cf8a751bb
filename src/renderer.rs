use crate::entities::{BulletVariant, EnemyKind, Field, FireMode, Hitbox, PlayerKind};
use crate::view::{EntityView, PlayingView, SceneView, Visual};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// View struct that holds everything needed to draw one frame
pub struct RenderView<'a> {
    pub scene: &'a SceneView,
    pub field: Field,
    pub area: Rect,
    pub fps: u32,
}

/// Characters used to draw entities. The terminal's "font".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub player: char,
    pub normal_enemy: char,
    pub wavy_enemy: char,
    pub shooter_enemy: char,
    pub boss: char,
    pub player_bullet: char,
    pub enemy_bullet: char,
    pub bar_full: char,
    pub bar_empty: char,
}

impl GlyphSet {
    pub const UNICODE: GlyphSet = GlyphSet {
        player: '▲',
        normal_enemy: '■',
        wavy_enemy: '≈',
        shooter_enemy: '◆',
        boss: '█',
        player_bullet: '│',
        enemy_bullet: '●',
        bar_full: '█',
        bar_empty: '░',
    };

    pub const ASCII: GlyphSet = GlyphSet {
        player: 'A',
        normal_enemy: '#',
        wavy_enemy: '~',
        shooter_enemy: 'V',
        boss: '@',
        player_bullet: '|',
        enemy_bullet: 'o',
        bar_full: '=',
        bar_empty: '.',
    };

    /// Prefers the Unicode set, falling back to ASCII when the locale can't show it
    pub fn detect(force_ascii: bool) -> Self {
        if force_ascii {
            return Self::ASCII;
        }
        if locale_supports_unicode(|name| std::env::var(name).ok()) {
            Self::UNICODE
        } else {
            log::debug!("Locale is not UTF-8, using ASCII glyphs");
            Self::ASCII
        }
    }
}

/// Checks the first set locale variable (LC_ALL, LC_CTYPE, LANG) for a UTF-8 codeset
pub fn locale_supports_unicode(lookup: impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        })
        .unwrap_or(false)
}

/// Largest rect inside `area` with the field's aspect ratio.
/// Terminal cells are roughly twice as tall as they are wide.
pub fn play_area(area: Rect, field: &Field) -> Rect {
    let max_height = area.height as f32;
    let max_width = area.width as f32;
    let aspect = field.width / field.height * 2.0;
    let (width, height) = if max_height * aspect <= max_width {
        (max_height * aspect, max_height)
    } else {
        (max_width, max_width / aspect)
    };
    let width = (width as u16).max(1).min(area.width);
    let height = (height as u16).max(1).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a hitbox in field units onto terminal cells. `None` when fully outside `area`.
pub fn project(hitbox: &Hitbox, field: &Field, area: Rect) -> Option<Rect> {
    let scale_x = area.width as f32 / field.width;
    let scale_y = area.height as f32 / field.height;

    let left = (hitbox.left() * scale_x).floor();
    let top = (hitbox.top() * scale_y).floor();
    let right = (hitbox.right() * scale_x).ceil().max(left + 1.0);
    let bottom = (hitbox.bottom() * scale_y).ceil().max(top + 1.0);

    let left = left.max(0.0);
    let top = top.max(0.0);
    let right = right.min(area.width as f32);
    let bottom = bottom.min(area.height as f32);
    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect {
        x: area.x + left as u16,
        y: area.y + top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    glyphs: GlyphSet,
}

impl GameRenderer {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }

    /// Main render method that dispatches to scene-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.scene {
            SceneView::Title => self.render_title(frame, view.area),
            SceneView::Select { selected } => self.render_select(frame, view.area, *selected),
            SceneView::Playing(playing) => self.render_game(frame, view, playing),
            SceneView::GameOver { final_score } => {
                self.render_game_over(frame, view.area, *final_score)
            }
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title_text = vec![
            Line::from(""),
            Line::from("D A N M A K U").centered().bold().magenta(),
            Line::from("S H O O T E R").centered().bold().magenta(),
            Line::from(""),
            Line::from("Press SPACE to continue").centered().yellow(),
            Line::from("Press ESC to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(title_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            centered(area, 40, 8),
        );
    }

    fn render_select(&self, frame: &mut Frame, area: Rect, selected: PlayerKind) {
        let mut lines = vec![
            Line::from(""),
            Line::from("SELECT YOUR SHIP").centered().bold().white(),
            Line::from(""),
        ];

        for kind in PlayerKind::ALL {
            let marker = if kind == selected { "> " } else { "  " };
            let style = if kind == selected {
                Style::default()
                    .fg(player_color(kind))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{} {}", self.glyphs.player, kind.get_name()), style),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(
            Line::from("LEFT/RIGHT: choose   Z/SPACE: start   ESC: back")
                .centered()
                .yellow(),
        );

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            centered(area, 52, 10),
        );
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView, playing: &PlayingView) {
        let area = view.area;
        let hud_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.min(2),
        };
        let field_area = Rect {
            x: area.x,
            y: area.y + hud_area.height,
            width: area.width,
            height: area.height.saturating_sub(hud_area.height + 1),
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let bordered = play_area(field_area, &view.field);
        let bordered = Rect {
            x: bordered.x.saturating_sub(1),
            width: (bordered.width + 2).min(area.width),
            ..bordered
        };
        let game_area = block.inner(bordered);
        frame.render_widget(block, bordered);

        // Entities via direct buffer access
        let buffer = frame.buffer_mut();
        for entity in &playing.entities {
            let Some(cells) = project(&entity.hitbox, &view.field, game_area) else {
                continue;
            };
            let (glyph, color) = self.entity_style(entity);
            let row: String = std::iter::repeat_n(glyph, cells.width as usize).collect();
            for y in cells.y..cells.y + cells.height {
                buffer.set_string(
                    cells.x,
                    y,
                    &row,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
        }

        self.render_hud(frame, hud_area, playing, view.fps);

        let controls = Line::from(vec![Span::styled(
            "[Arrows: Move] [Shift: Slow] [Z: Fire] [X: Mode] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_hud(&self, frame: &mut Frame, area: Rect, playing: &PlayingView, fps: u32) {
        let mut stats = vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", playing.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(next) = playing.next_boss_in {
            stats.push(Span::styled("  Boss in: ", Style::default().fg(Color::DarkGray)));
            stats.push(Span::styled(
                format!("{next}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(mode) = playing.fire_mode {
            stats.push(Span::styled("  Mode: ", Style::default().fg(Color::DarkGray)));
            stats.push(Span::styled(
                mode.get_name(),
                Style::default()
                    .fg(fire_mode_color(mode))
                    .add_modifier(Modifier::BOLD),
            ));
        }
        stats.push(Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)));
        stats.push(Span::styled(
            format!("{fps}"),
            Style::default().fg(Color::White),
        ));

        let mut lines = vec![Line::from(stats)];
        if let Some((hp, max_hp)) = playing.boss_hp {
            lines.push(self.boss_bar(hp, max_hp, area.width.saturating_sub(20)));
        }
        frame.render_widget(Paragraph::new(lines).centered(), area);
    }

    fn boss_bar(&self, hp: u32, max_hp: u32, width: u16) -> Line<'static> {
        let width = width.clamp(10, 40) as u32;
        let filled = if max_hp == 0 { 0 } else { hp * width / max_hp };
        let full: String = std::iter::repeat_n(self.glyphs.bar_full, filled as usize).collect();
        let empty: String =
            std::iter::repeat_n(self.glyphs.bar_empty, (width - filled) as usize).collect();
        Line::from(vec![
            Span::styled("BOSS ", Style::default().fg(Color::Magenta).bold()),
            Span::styled(full, Style::default().fg(Color::Green)),
            Span::styled(empty, Style::default().fg(Color::Red)),
            Span::styled(format!(" {hp}"), Style::default().fg(Color::White)),
        ])
    }

    fn entity_style(&self, entity: &EntityView) -> (char, Color) {
        match entity.visual {
            Visual::Player(kind) => (self.glyphs.player, player_color(kind)),
            Visual::Enemy(EnemyKind::Normal) => (self.glyphs.normal_enemy, Color::Red),
            Visual::Enemy(EnemyKind::Wavy) => (self.glyphs.wavy_enemy, Color::Green),
            Visual::Enemy(EnemyKind::Shooter) => (self.glyphs.shooter_enemy, Color::Yellow),
            Visual::Boss => (self.glyphs.boss, Color::Magenta),
            Visual::Bullet(BulletVariant::RedOrb) => (self.glyphs.enemy_bullet, Color::Red),
            Visual::Bullet(variant) => (self.glyphs.player_bullet, bullet_color(variant)),
        }
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, area: Rect, final_score: u32) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER          ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {final_score}"))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press R to return to title").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn player_color(kind: PlayerKind) -> Color {
    match kind {
        PlayerKind::Balanced => Color::Blue,
        PlayerKind::Fast => Color::Red,
        PlayerKind::Switching => Color::Yellow,
    }
}

fn bullet_color(variant: BulletVariant) -> Color {
    match variant {
        BulletVariant::Cyan => Color::Cyan,
        BulletVariant::LightRed => Color::LightRed,
        BulletVariant::Yellow => Color::Yellow,
        BulletVariant::RedOrb => Color::Red,
    }
}

fn fire_mode_color(mode: FireMode) -> Color {
    match mode {
        FireMode::Single => Color::LightYellow,
        FireMode::Twin => Color::Yellow,
    }
}
