//! Scene state machine driving the simulation passes

use crate::collision;
use crate::command::{Command, TickInput};
use crate::config::GameConfig;
use crate::entities::{Field, PlayerKind};
use crate::movement;
use crate::spawn::{self, SpawnDirector};
use crate::view::{PlayingView, SceneView};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Title,
    Select,
    Playing,
    GameOver,
}

/// Score and boss progression of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub score: u32,
    pub next_boss_score: u32,
    pub boss_level: u32,
    /// Points between a boss defeat and the next boss
    pub boss_interval: u32,
}

impl RunState {
    pub fn new(boss_interval: u32) -> Self {
        Self {
            score: 0,
            next_boss_score: boss_interval,
            boss_level: 1,
            boss_interval,
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Levels up and schedules the next boss relative to the current score
    pub fn boss_defeated(&mut self) {
        self.boss_level += 1;
        self.next_boss_score = self.score.saturating_add(self.boss_interval);
    }
}

pub struct Game {
    scene: Scene,
    running: bool,
    world: World,
    run: RunState,
    selected: PlayerKind,
    director: SpawnDirector,
    field: Field,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("Spawn seed {seed}");
        Self {
            scene: Scene::Title,
            running: true,
            world: World::new(),
            run: RunState::new(config.boss_score_interval),
            selected: PlayerKind::Balanced,
            director: SpawnDirector::new(seed, config.spawn_chance),
            field: config.field(),
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn selected(&self) -> PlayerKind {
        self.selected
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn boss_active(&self) -> bool {
        self.world.boss.is_some()
    }

    /// Advances one tick: commands first, then the scene's update
    pub fn step(&mut self, input: &TickInput) {
        for &command in &input.commands {
            if !self.running {
                return;
            }
            self.dispatch(command, input.now);
        }

        if self.running && self.scene == Scene::Playing {
            self.update_playing(input);
        }
    }

    fn dispatch(&mut self, command: Command, now: u64) {
        if command == Command::Quit {
            log::info!("Quit requested in {:?}", self.scene);
            self.running = false;
            return;
        }

        match (self.scene, command) {
            (Scene::Title, Command::Confirm) => self.set_scene(Scene::Select),
            (Scene::Title, Command::Cancel) => {
                log::info!("Leaving from title screen");
                self.running = false;
            }
            (Scene::Select, Command::SelectPrev) => {
                let count = PlayerKind::ALL.len();
                self.selected = PlayerKind::from_index(self.selected.index() + count - 1);
            }
            (Scene::Select, Command::SelectNext) => {
                self.selected = PlayerKind::from_index(self.selected.index() + 1);
            }
            (Scene::Select, Command::Confirm) => self.start_run(),
            (Scene::Select, Command::Cancel) => self.set_scene(Scene::Title),
            (Scene::Playing, Command::ToggleMode) => {
                if movement::toggle_player_mode(&mut self.world, now) {
                    log::debug!("Fire mode toggled at {now}");
                }
            }
            (Scene::GameOver, Command::Retry) => self.set_scene(Scene::Title),
            _ => {}
        }
    }

    /// Full world reset and a fresh run with the selected character
    fn start_run(&mut self) {
        self.world.clear();
        self.world.spawn_player(self.selected, &self.field);
        self.run = RunState::new(self.run.boss_interval);
        log::info!("Starting run as {}", self.selected.get_name());
        self.set_scene(Scene::Playing);
    }

    fn set_scene(&mut self, scene: Scene) {
        log::info!("Scene {:?} -> {:?}", self.scene, scene);
        self.scene = scene;
    }

    fn update_playing(&mut self, input: &TickInput) {
        movement::steer_player(&mut self.world, &input.held, &self.field);
        if input.held.fire {
            movement::fire_player(&mut self.world, input.now);
        }

        self.director.spawn_regular(&mut self.world, &self.field);
        movement::advance(&mut self.world, &self.field);

        let report = collision::resolve(&mut self.world, &mut self.run);
        if report.player_hit {
            log::info!("Player down with score {}", self.run.score);
            self.set_scene(Scene::GameOver);
            return;
        }

        spawn::trigger_boss(&mut self.world, &mut self.run, &self.field);
    }

    /// What the renderer should show this tick
    pub fn view(&self) -> SceneView {
        match self.scene {
            Scene::Title => SceneView::Title,
            Scene::Select => SceneView::Select {
                selected: self.selected,
            },
            Scene::Playing => {
                let boss_hp = self.world.boss.as_ref().map(|boss| (boss.hp, boss.max_hp));
                SceneView::Playing(PlayingView {
                    entities: self.world.entities(),
                    score: self.run.score,
                    boss_active: self.boss_active(),
                    boss_hp,
                    next_boss_in: (!self.boss_active())
                        .then(|| self.run.next_boss_score.saturating_sub(self.run.score)),
                    fire_mode: self.world.player.as_ref().and_then(|p| p.fire_mode()),
                })
            }
            Scene::GameOver => SceneView::GameOver {
                final_score: self.run.score,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::HeldKeys;
    use crate::entities::{Enemy, EnemyKind};

    fn quiet_config() -> GameConfig {
        GameConfig {
            seed: Some(42),
            spawn_chance: 0.0,
            ..GameConfig::default()
        }
    }

    fn press(game: &mut Game, command: Command) {
        game.step(&TickInput::new(0).with_command(command));
    }

    #[test]
    fn test_title_to_select_and_back() {
        let mut game = Game::new(&quiet_config());
        assert_eq!(game.scene(), Scene::Title);
        press(&mut game, Command::Confirm);
        assert_eq!(game.scene(), Scene::Select);
        press(&mut game, Command::Cancel);
        assert_eq!(game.scene(), Scene::Title);
        assert!(game.is_running());
    }

    #[test]
    fn test_cancel_on_title_terminates() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::Cancel);
        assert!(!game.is_running());
    }

    #[test]
    fn test_quit_from_any_scene() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::Confirm);
        press(&mut game, Command::Confirm);
        assert_eq!(game.scene(), Scene::Playing);
        press(&mut game, Command::Quit);
        assert!(!game.is_running());
    }

    #[test]
    fn test_select_wraps_both_ways() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::Confirm);
        press(&mut game, Command::SelectPrev);
        assert_eq!(game.selected(), PlayerKind::Switching);
        press(&mut game, Command::SelectNext);
        assert_eq!(game.selected(), PlayerKind::Balanced);
        press(&mut game, Command::SelectNext);
        assert_eq!(game.selected(), PlayerKind::Fast);
    }

    #[test]
    fn test_select_ignored_outside_select_scene() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::SelectNext);
        assert_eq!(game.selected(), PlayerKind::Balanced);
    }

    #[test]
    fn test_start_run_resets_world() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::Confirm);
        game.world_mut().add_enemy(Enemy::new(EnemyKind::Normal, 0.0));
        game.run_mut().score = 999;
        game.run_mut().boss_level = 4;
        press(&mut game, Command::Confirm);

        assert_eq!(game.scene(), Scene::Playing);
        assert!(game.world().enemies.is_empty());
        assert!(game.world().player.is_some());
        assert_eq!(*game.run(), RunState::new(150));
        assert!(!game.boss_active());
    }

    #[test]
    fn test_cancel_does_not_leave_playing() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::Confirm);
        press(&mut game, Command::Confirm);
        press(&mut game, Command::Cancel);
        press(&mut game, Command::Retry);
        assert_eq!(game.scene(), Scene::Playing);
    }

    #[test]
    fn test_held_fire_spawns_bullets() {
        let mut game = Game::new(&quiet_config());
        press(&mut game, Command::Confirm);
        press(&mut game, Command::Confirm);
        let held = HeldKeys {
            fire: true,
            ..HeldKeys::default()
        };
        game.step(&TickInput::new(1000).with_held(held));
        assert_eq!(game.world().player_bullets.len(), 3);
    }

    #[test]
    fn test_view_per_scene() {
        let mut game = Game::new(&quiet_config());
        assert_eq!(game.view(), SceneView::Title);
        press(&mut game, Command::Confirm);
        press(&mut game, Command::SelectNext);
        assert_eq!(
            game.view(),
            SceneView::Select {
                selected: PlayerKind::Fast
            }
        );
        press(&mut game, Command::Confirm);
        match game.view() {
            SceneView::Playing(view) => {
                assert_eq!(view.score, 0);
                assert!(!view.boss_active);
                assert_eq!(view.boss_hp, None);
                assert_eq!(view.next_boss_in, Some(150));
                assert_eq!(view.fire_mode, None);
                assert_eq!(view.entities.len(), 1);
            }
            other => panic!("expected playing view, got {other:?}"),
        }
    }

    #[test]
    fn test_run_state_boss_defeated() {
        let mut run = RunState::new(150);
        run.award(1234);
        run.boss_defeated();
        assert_eq!(run.boss_level, 2);
        assert_eq!(run.next_boss_score, 1384);
    }
}
